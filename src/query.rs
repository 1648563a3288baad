//! Lookups over a harvested catalog.

use crate::error::QueryError;
use crate::parsers::text::terms_offered;
use crate::results::{DepartmentCatalog, FullCatalog};
use std::fmt;

/// Term availability of one course
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermStatus {
    /// The course lists the term; holds the raw terms string
    Offered(String),
    /// The course has term data that does not include the term
    NotOffered(String),
    /// The course says nothing about when it is offered
    NoTermData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermLookup {
    pub code: String,
    pub status: TermStatus,
}

impl fmt::Display for TermLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            TermStatus::Offered(terms) => write!(f, "{}: {}", self.code, terms),
            TermStatus::NotOffered(terms) => {
                write!(f, "{}: not offered (offered {})", self.code, terms)
            }
            TermStatus::NoTermData => write!(f, "No terms found for {}", self.code),
        }
    }
}

/// Every major in the catalog, in harvest order
pub fn majors(catalog: &FullCatalog) -> Vec<&str> {
    catalog.department_names().collect()
}

/// Course codes offered by a major
pub fn courses_for_major<'a>(
    catalog: &'a FullCatalog,
    major: &str,
) -> Result<Vec<&'a str>, QueryError> {
    Ok(department(catalog, major)?
        .courses
        .keys()
        .map(String::as_str)
        .collect())
}

/// Term availability of every course in a major
///
/// `term` is matched by substring against each course's terms string, so
/// `"S"` also matches courses offered in `"SP"` or `"SU"`.
pub fn term_lookups(
    catalog: &FullCatalog,
    major: &str,
    term: &str,
) -> Result<Vec<TermLookup>, QueryError> {
    let lookups = department(catalog, major)?
        .courses
        .values()
        .map(|course| {
            let status = match terms_offered(&course.prerequisites_raw) {
                None => TermStatus::NoTermData,
                Some(terms) if terms.contains(term) => TermStatus::Offered(terms),
                Some(terms) => TermStatus::NotOffered(terms),
            };
            TermLookup {
                code: course.code.clone(),
                status,
            }
        })
        .collect();
    Ok(lookups)
}

/// Courses in a major offered in `term`, plus those with no term data
///
/// Courses known not to run in the term are left out.
pub fn courses_offered_in_term(
    catalog: &FullCatalog,
    major: &str,
    term: &str,
) -> Result<Vec<TermLookup>, QueryError> {
    let mut lookups = term_lookups(catalog, major, term)?;
    lookups.retain(|lookup| !matches!(lookup.status, TermStatus::NotOffered(_)));
    Ok(lookups)
}

fn department<'a>(
    catalog: &'a FullCatalog,
    major: &str,
) -> Result<&'a DepartmentCatalog, QueryError> {
    catalog
        .department(major)
        .ok_or_else(|| QueryError::UnknownDepartment(major.to_string()))
}
