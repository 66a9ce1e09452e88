pub mod http;
pub mod indeed;
pub mod search;
pub mod traits;
pub mod types;

pub use http::HttpFetcher;
pub use indeed::IndeedMarkup;
pub use search::JobScraper;
