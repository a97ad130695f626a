mod project_store_http;

pub use project_store_http::ProjectStoreHttp;
