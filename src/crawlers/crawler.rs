use crate::error::FetchError;
use std::collections::HashMap;

/// Retrieves the HTML body of a page
///
/// The catalog builder only ever awaits one fetch at a time. Retry, timeout
/// and backoff policy belong to implementations.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Serves pages from memory, keyed by URL
///
/// Useful for replaying saved pages and for tests. Unknown URLs fail with
/// `FetchError::NotFound`.
#[derive(Debug, Clone, Default)]
pub struct StaticPages {
    pages: HashMap<String, String>,
}

impl StaticPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }
}

impl Fetch for StaticPages {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }
}
