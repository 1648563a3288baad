//! Error types for catalog extraction, snapshots and queries.

use crate::results::DepartmentLink;

/// Failure to retrieve a page body
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("WebDriver failed to load {url}: {source}")]
    WebDriver {
        url: String,
        #[source]
        source: fantoccini::error::CmdError,
    },
    #[error("could not connect to any WebDriver server (tried {0})")]
    WebDriverUnavailable(String),
    #[error("timed out after {secs}s loading {url}")]
    Timeout { url: String, secs: u64 },
    #[error("no page available for {0}")]
    NotFound(String),
}

/// Page-level parse failure
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("department page has no heading")]
    MissingHeading,
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// A single malformed course block. These never abort a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("course block has no title")]
    MissingTitle,
    #[error("course title `{0}` has no `.` separating code and name")]
    MalformedTitle(String),
    #[error("course {0} has no units")]
    MissingUnits(String),
}

/// Anything that prevents one department from landing in the catalog
#[derive(Debug, thiserror::Error)]
pub enum DepartmentError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid index URL `{url}`: {source}")]
    InvalidIndexUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to fetch catalog index: {0}")]
    Index(#[source] FetchError),
    #[error("department {} ({}) failed: {source}", .link.display_text, .link.url)]
    Department {
        link: DepartmentLink,
        #[source]
        source: DepartmentError,
    },
    #[error(transparent)]
    Selectors(#[from] ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid index URL `{url}`: {source}")]
    IndexUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("unknown major `{0}`")]
    UnknownDepartment(String),
}
