//! Harvests the Cal Poly course catalog into a structured snapshot and
//! answers lookups against it.
//!
//! The pipeline runs one page at a time: the index page is fetched and its
//! department links discovered, then each department page is fetched and its
//! course blocks parsed into a [`FullCatalog`].

// Re-export modules
pub mod catalog;
pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod query;
pub mod results;
pub mod snapshot;

// Re-export commonly used types for convenience
pub use catalog::{BuildReport, CatalogBuilder, build_catalog};
pub use crawlers::Fetch;
pub use filter::valid_course_url;
pub use parsers::department::parse_department;
pub use parsers::html::discover;
pub use parsers::text::{offered_in_term, terms_offered};
pub use results::{CourseRecord, DepartmentCatalog, DepartmentLink, FullCatalog};
