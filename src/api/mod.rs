use async_trait::async_trait;

use crate::core::{
    Cat,
    CatId,
    NewCat,
    SpyCatError,
};

pub mod breeds;
pub mod cats;
#[cfg(test)]
mod test_server;

pub use breeds::HttpBreedSource;
pub use cats::HttpCatStore;

/// Remote `/cats` collection.
#[async_trait]
pub trait CatStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Cat>, SpyCatError>;

    async fn create(&self, cat: &NewCat) -> Result<Cat, SpyCatError>;

    /// Partial update; only the salary can change.
    async fn update_salary(&self, id: CatId, salary: f64) -> Result<(), SpyCatError>;

    async fn delete(&self, id: CatId) -> Result<(), SpyCatError>;
}

/// Read-only source of valid breed names.
#[async_trait]
pub trait BreedSource: Send + Sync {
    async fn breed_names(&self) -> Result<Vec<String>, SpyCatError>;
}
