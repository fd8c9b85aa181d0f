use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::BreedSource;
use crate::core::{
    http::ensure_success,
    Breed,
    SpyCatError,
};

pub const DEFAULT_BREEDS_URL: &str = "https://api.thecatapi.com/v1/breeds";

pub struct HttpBreedSource {
    client: Client,
    url: String,
}

impl HttpBreedSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl BreedSource for HttpBreedSource {
    async fn breed_names(&self) -> Result<Vec<String>, SpyCatError> {
        debug!(url = %self.url, "GET breeds");
        let resp = ensure_success(self.client.get(&self.url).send().await?).await?;
        let breeds: Vec<Breed> = resp.json().await?;
        Ok(breeds.into_iter().map(|b| b.name).collect())
    }
}
