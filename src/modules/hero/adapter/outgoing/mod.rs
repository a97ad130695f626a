mod portfolio_store_http;

pub use portfolio_store_http::PortfolioStoreHttp;
