use crate::config::{CatalogConfig, CatalogSelectors, FailurePolicy};
use crate::crawlers::Fetch;
use crate::error::{CatalogError, DepartmentError};
use crate::filter::DepartmentUrlFilter;
use crate::parsers::{self, PageSelectors};
use crate::results::{DepartmentCatalog, DepartmentLink, FullCatalog};
use url::Url;

/// A department that did not make it into the catalog
#[derive(Debug)]
pub struct DepartmentFailure {
    pub link: DepartmentLink,
    pub error: DepartmentError,
}

/// Outcome of a catalog build
#[derive(Debug)]
pub struct BuildReport {
    pub catalog: FullCatalog,

    /// Number of department links discovered on the index page
    pub links_found: usize,

    /// Departments skipped under `FailurePolicy::Skip`
    pub failures: Vec<DepartmentFailure>,
}

/// Builder for harvesting a catalog from its index page
pub struct CatalogBuilder {
    index_url: String,
    filter: DepartmentUrlFilter,
    selectors: PageSelectors,
    policy: FailurePolicy,
}

impl CatalogBuilder {
    /// Create a builder for the catalog whose department index is `index_url`
    ///
    /// Department links are accepted only on the index page's own origin.
    pub fn new(index_url: &str) -> Result<Self, CatalogError> {
        let parsed = Url::parse(index_url).map_err(|source| CatalogError::InvalidIndexUrl {
            url: index_url.to_string(),
            source,
        })?;
        let filter = DepartmentUrlFilter::new(&parsed)
            .expect("Escaped origin should always form a valid pattern");

        Ok(Self {
            index_url: index_url.to_string(),
            filter,
            selectors: PageSelectors::default(),
            policy: FailurePolicy::default(),
        })
    }

    /// Create a builder from a loaded configuration
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::new(&config.index_url)?
            .with_selectors(&config.selectors)
            .map(|builder| builder.with_failure_policy(config.on_department_error))
    }

    /// Set what happens when a department page fails
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use custom selectors for department pages
    pub fn with_selectors(mut self, selectors: &CatalogSelectors) -> Result<Self, CatalogError> {
        self.selectors = PageSelectors::compile(selectors)?;
        Ok(self)
    }

    /// Fetch the index, then every department page in turn, and assemble the catalog
    pub async fn build<F: Fetch>(&self, fetcher: &F) -> Result<BuildReport, CatalogError> {
        ::log::info!("Fetching department listing from {}", self.index_url);
        let index_html = fetcher
            .fetch(&self.index_url)
            .await
            .map_err(CatalogError::Index)?;

        let links = parsers::html::discover(&index_html, &self.filter);
        if links.is_empty() {
            ::log::warn!("No department links found on {}", self.index_url);
        }

        let mut catalog = FullCatalog::new();
        let mut failures = Vec::new();

        for link in &links {
            ::log::info!("Fetching: {} URL: {}", link.display_text, link.url);

            match self.harvest_department(fetcher, link).await {
                Ok(department) => catalog.merge(department),
                Err(error) => match self.policy {
                    FailurePolicy::Abort => {
                        return Err(CatalogError::Department {
                            link: link.clone(),
                            source: error,
                        });
                    }
                    FailurePolicy::Skip => {
                        ::log::error!(
                            "Skipping {} ({}): {}",
                            link.display_text,
                            link.url,
                            error
                        );
                        failures.push(DepartmentFailure {
                            link: link.clone(),
                            error,
                        });
                    }
                },
            }
        }

        ::log::info!(
            "Harvested {} departments, {} courses ({} departments failed)",
            catalog.len(),
            catalog.course_count(),
            failures.len()
        );

        Ok(BuildReport {
            catalog,
            links_found: links.len(),
            failures,
        })
    }

    async fn harvest_department<F: Fetch>(
        &self,
        fetcher: &F,
        link: &DepartmentLink,
    ) -> Result<DepartmentCatalog, DepartmentError> {
        let html = fetcher.fetch(&link.url).await?;
        let department = parsers::department::parse_department_with(&html, &self.selectors)?;
        Ok(department)
    }
}

/// Build the catalog behind `index_url` with default selectors, aborting on
/// the first department failure
pub async fn build_catalog<F: Fetch>(
    index_url: &str,
    fetcher: &F,
) -> Result<BuildReport, CatalogError> {
    CatalogBuilder::new(index_url)?.build(fetcher).await
}
