mod coding_profile_store_http;

pub use coding_profile_store_http::CodingProfileStoreHttp;
