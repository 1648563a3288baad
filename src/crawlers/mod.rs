pub mod crawler;
pub mod http;
pub mod web;

pub use crawler::{Fetch, StaticPages};
pub use http::HttpFetcher;
pub use web::WebDriverFetcher;
