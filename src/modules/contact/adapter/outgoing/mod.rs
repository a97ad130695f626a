mod contact_store_http;

pub use contact_store_http::ContactStoreHttp;
