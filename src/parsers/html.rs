use crate::filter::DepartmentUrlFilter;
use crate::results::DepartmentLink;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// Finds the department listing links on the catalog index page
///
/// Returns links in the order they first appear, one per URL. The text of
/// the first anchor pointing at a URL wins. An index with no department
/// links yields an empty Vec; callers decide what that means.
pub fn discover(index_html: &str, filter: &DepartmentUrlFilter) -> Vec<DepartmentLink> {
    let doc = Html::parse_document(index_html);

    let link_selector = Selector::parse("a").unwrap();
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in doc.select(&link_selector) {
        let Some(href) = anchor.value().attr("href").filter(|h| !h.is_empty()) else {
            continue;
        };
        let text = anchor_text(anchor);
        if text.is_empty() {
            continue;
        }

        let url = filter.normalize_href(href);
        if !filter.is_department_url(&url) {
            continue;
        }

        if seen.insert(url.clone()) {
            links.push(DepartmentLink::new(text, url));
        }
    }

    ::log::debug!("Discovered {} department links", links.len());
    if !links.is_empty() {
        ::log::debug!(
            "First few departments: {:?}",
            links
                .iter()
                .take(5)
                .map(|l| l.display_text.as_str())
                .collect::<Vec<_>>()
        );
    }

    links
}

/// Discover department links on the Cal Poly catalog
pub fn discover_default(index_html: &str) -> Vec<DepartmentLink> {
    discover(index_html, &DepartmentUrlFilter::default())
}

/// Visible anchor text: each text node trimmed, then joined without separators
fn anchor_text(anchor: ElementRef<'_>) -> String {
    anchor.text().map(str::trim).collect::<String>()
}
