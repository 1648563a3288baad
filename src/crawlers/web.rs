use crate::crawlers::Fetch;
use crate::error::FetchError;
use fantoccini::{Client, ClientBuilder};
use tokio::time::{Duration, timeout};

/// Common WebDriver endpoints tried when the configured one is unreachable
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Fetches pages by driving a browser through a WebDriver server
///
/// One browser session is reused for every page; pages load one after
/// another.
pub struct WebDriverFetcher {
    client: Client,
    page_timeout_secs: u64,
}

impl WebDriverFetcher {
    /// Connects to the WebDriver server, falling back to common local endpoints
    pub async fn connect(webdriver_url: &str, page_timeout_secs: u64) -> Result<Self, FetchError> {
        let client = connect_to_webdriver(webdriver_url).await?;
        Ok(Self {
            client,
            page_timeout_secs,
        })
    }

    /// Ends the browser session
    pub async fn close(self) {
        if let Err(e) = self.client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }
    }

    async fn load(&self, url: &str) -> Result<String, FetchError> {
        let webdriver_error = |source| FetchError::WebDriver {
            url: url.to_string(),
            source,
        };

        self.client.goto(url).await.map_err(webdriver_error)?;
        self.client.source().await.map_err(webdriver_error)
    }
}

impl Fetch for WebDriverFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let start = std::time::Instant::now();
        ::log::debug!("SCRAPE: {}", url);

        let html = timeout(Duration::from_secs(self.page_timeout_secs), self.load(url))
            .await
            .map_err(|_| FetchError::Timeout {
                url: url.to_string(),
                secs: self.page_timeout_secs,
            })??;

        ::log::debug!(
            "Loaded {} in {:.2} seconds",
            url,
            start.elapsed().as_secs_f64()
        );
        Ok(html)
    }
}

async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client, FetchError> {
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!(
                "Failed to connect to WebDriver at {}: {}",
                webdriver_url,
                e
            );
        }
    }

    for url in FALLBACK_WEBDRIVER_URLS {
        if url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    let mut tried = vec![webdriver_url];
    tried.extend(FALLBACK_WEBDRIVER_URLS.iter().filter(|u| **u != webdriver_url));
    Err(FetchError::WebDriverUnavailable(tried.join(", ")))
}
