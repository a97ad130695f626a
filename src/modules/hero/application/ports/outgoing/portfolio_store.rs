// src/modules/hero/application/ports/outgoing/portfolio_store.rs
use async_trait::async_trait;

use crate::modules::hero::application::domain::entities::PortfolioInfo;
use crate::shared::http::RequestError;

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// `None` when the owner has not created the record yet.
    async fn get(&self) -> Result<Option<PortfolioInfo>, RequestError>;

    async fn set_resume_link(&self, exists: bool, url: &str) -> Result<(), RequestError>;
}
