use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use url::Url;

/// Configuration for a catalog harvest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog index page listing every department
    #[serde(default = "default_index_url")]
    pub index_url: String,

    /// Where the JSON snapshot is written and read
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// What to do when a department page cannot be fetched or parsed
    #[serde(default)]
    pub on_department_error: FailurePolicy,

    /// How pages are fetched
    #[serde(default)]
    pub backend: FetchBackend,

    /// URL for the WebDriver instance (webdriver backend only)
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Per-page timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// CSS selectors locating the parts of a department page
    #[serde(default)]
    pub selectors: CatalogSelectors,
}

/// Policy for a department page that fails to fetch or has no heading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the whole harvest at the first failing department
    #[default]
    Abort,
    /// Log the failure, record it in the report and carry on
    Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchBackend {
    /// Plain HTTP GET
    #[default]
    Http,
    /// Render pages through a WebDriver server
    Webdriver,
}

/// CSS selectors for the structure of a department page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSelectors {
    pub heading: String,
    pub course_block: String,
    pub title: String,
    pub units: String,
    pub description: String,
    pub extended_info: String,
}

impl Default for CatalogSelectors {
    fn default() -> Self {
        Self {
            heading: "h1".to_string(),
            course_block: "div.courseblock".to_string(),
            title: "p.courseblocktitle".to_string(),
            units: "span.courseblockhours".to_string(),
            description: "div.courseblockdesc".to_string(),
            extended_info: "div.courseextendedwrap".to_string(),
        }
    }
}

/// Default catalog index
pub fn default_index_url() -> String {
    "https://catalog.calpoly.edu/coursesaz/".to_string()
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("course_info.json")
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_request_timeout_secs() -> u64 {
    45
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            index_url: default_index_url(),
            snapshot_path: default_snapshot_path(),
            on_department_error: FailurePolicy::default(),
            backend: FetchBackend::default(),
            webdriver_url: default_webdriver_url(),
            request_timeout_secs: default_request_timeout_secs(),
            selectors: CatalogSelectors::default(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.index_url()?;
        Ok(config)
    }

    /// Override the WebDriver URL with the WEBDRIVER_URL environment variable if provided
    pub fn apply_env(self) -> Self {
        self.with_webdriver_override(std::env::var("WEBDRIVER_URL").ok())
    }

    /// Replace the WebDriver URL unless `webdriver_url` is missing or empty
    pub fn with_webdriver_override(mut self, webdriver_url: Option<String>) -> Self {
        if let Some(webdriver_url) = webdriver_url
            && !webdriver_url.is_empty()
        {
            self.webdriver_url = webdriver_url;
        }
        self
    }

    /// The index URL, parsed
    pub fn index_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.index_url).map_err(|source| ConfigError::IndexUrl {
            url: self.index_url.clone(),
            source,
        })
    }
}
