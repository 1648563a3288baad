pub mod department;
pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use crate::config::CatalogSelectors;
use crate::error::ParseError;
use scraper::{ElementRef, Selector};

/// Compiled selectors for the tagged parts of a department page
#[derive(Debug, Clone)]
pub struct PageSelectors {
    pub heading: Selector,
    pub course_block: Selector,
    pub title: Selector,
    pub units: Selector,
    pub description: Selector,
    pub extended_info: Selector,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self::compile(&CatalogSelectors::default()).expect("Default selectors should be valid")
    }
}

impl PageSelectors {
    /// Compile the configured selectors, failing on the first invalid one
    pub fn compile(selectors: &CatalogSelectors) -> Result<Self, ParseError> {
        Ok(Self {
            heading: compile_selector(&selectors.heading)?,
            course_block: compile_selector(&selectors.course_block)?,
            title: compile_selector(&selectors.title)?,
            units: compile_selector(&selectors.units)?,
            description: compile_selector(&selectors.description)?,
            extended_info: compile_selector(&selectors.extended_info)?,
        })
    }
}

fn compile_selector(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// All text under an element, concatenated and trimmed at both ends
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first descendant matching `selector`, if there is one
pub fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(element_text)
}
