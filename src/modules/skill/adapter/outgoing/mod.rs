mod skill_store_http;

pub use skill_store_http::SkillStoreHttp;
