pub mod api;
pub mod context;
pub mod http;
pub mod section;
pub mod storage;
