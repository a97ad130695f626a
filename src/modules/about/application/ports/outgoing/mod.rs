mod about_store;

pub use about_store::{AboutPayload, AboutStore};
