pub mod app_state_builder;
pub mod fake_backend;
