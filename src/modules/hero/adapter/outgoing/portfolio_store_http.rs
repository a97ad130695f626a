// src/modules/hero/adapter/outgoing/portfolio_store_http.rs
use async_trait::async_trait;
use serde::Serialize;

use crate::modules::hero::application::domain::entities::PortfolioInfo;
use crate::modules::hero::application::ports::outgoing::PortfolioStore;
use crate::shared::http::{ApiEnvelope, RequestError, RestClient};

#[derive(Debug, Serialize)]
struct ResumeLinkBody<'a> {
    #[serde(rename = "resumeLink")]
    resume_link: &'a str,
}

#[derive(Clone)]
pub struct PortfolioStoreHttp {
    client: RestClient,
}

impl PortfolioStoreHttp {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PortfolioStore for PortfolioStoreHttp {
    async fn get(&self) -> Result<Option<PortfolioInfo>, RequestError> {
        match self.client.get::<ApiEnvelope<PortfolioInfo>>("/portfolio").await {
            Ok(envelope) => Ok(envelope.data),
            Err(RequestError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set_resume_link(&self, exists: bool, url: &str) -> Result<(), RequestError> {
        let body = ResumeLinkBody { resume_link: url };
        let _: ApiEnvelope<serde_json::Value> = if exists {
            self.client.put("/portfolio", &body).await?
        } else {
            self.client.post("/portfolio", Some(&body)).await?
        };
        Ok(())
    }
}
