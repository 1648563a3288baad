use crate::error::{BlockError, ParseError};
use crate::parsers::{PageSelectors, element_text, first_text};
use crate::results::{CourseRecord, DepartmentCatalog};
use scraper::{ElementRef, Html};

/// Parses a department page with the default catalog selectors
pub fn parse_department(html: &str) -> Result<DepartmentCatalog, ParseError> {
    parse_department_with(html, &PageSelectors::default())
}

/// Parses a department page into its name and courses
///
/// A page without a heading is not a department page and fails as a whole.
/// Malformed course blocks are logged and skipped; the rest of the page
/// still parses.
pub fn parse_department_with(
    html: &str,
    selectors: &PageSelectors,
) -> Result<DepartmentCatalog, ParseError> {
    let doc = Html::parse_document(html);

    let name = doc
        .select(&selectors.heading)
        .next()
        .map(element_text)
        .ok_or(ParseError::MissingHeading)?;

    let mut department = DepartmentCatalog::new(name);
    let mut skipped = 0;

    for block in doc.select(&selectors.course_block) {
        match parse_course_block(block, selectors) {
            Ok(course) => department.insert(course),
            Err(e) => {
                skipped += 1;
                ::log::warn!("Skipping course block in {}: {}", department.name, e);
            }
        }
    }

    ::log::debug!(
        "Parsed {} courses for {} ({} blocks skipped)",
        department.courses.len(),
        department.name,
        skipped
    );

    Ok(department)
}

/// Extracts one course from its course block
pub fn parse_course_block(
    block: ElementRef<'_>,
    selectors: &PageSelectors,
) -> Result<CourseRecord, BlockError> {
    let title = first_text(block, &selectors.title).ok_or(BlockError::MissingTitle)?;
    let (code, name) = split_title(&title)?;

    let units = first_text(block, &selectors.units)
        .ok_or_else(|| BlockError::MissingUnits(code.clone()))?;
    let description = first_text(block, &selectors.description).unwrap_or_default();
    let prerequisites_raw = first_text(block, &selectors.extended_info).unwrap_or_default();

    Ok(CourseRecord {
        code,
        name,
        units,
        prerequisites_raw,
        description,
    })
}

/// Splits "STAT 130. Introduction to Statistical Reasoning" on the first `.`
pub fn split_title(title: &str) -> Result<(String, String), BlockError> {
    let (code, name) = title
        .split_once('.')
        .ok_or_else(|| BlockError::MalformedTitle(title.to_string()))?;
    Ok((code.trim().to_string(), name.trim().to_string()))
}
