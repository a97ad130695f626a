mod about_store_http;

pub use about_store_http::AboutStoreHttp;
