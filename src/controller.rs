//! Keeps the in-memory cat list in step with the backend.
//!
//! The list is never edited locally. Every successful mutation, and every
//! attempted salary change or deletion, is followed by a full reload so the
//! list always mirrors the last successful fetch.

use tracing::{
    debug,
    info,
    warn,
};

use crate::{
    api::{
        BreedSource,
        CatStore,
    },
    core::{
        parse_leading_number,
        validate_draft,
        Cat,
        CatId,
        Draft,
        NewCat,
        SpyCatError,
        ValidationError,
    },
    interaction::Interaction,
};

pub const SALARY_PROMPT: &str = "New salary?";
pub const DELETE_PROMPT: &str = "Delete this cat?";

pub struct CatController<S, B, I> {
    store: S,
    breed_source: B,
    interaction: I,
    records: Vec<Cat>,
    draft: Draft,
    breeds: Vec<String>,
}

impl<S: CatStore, B: BreedSource, I: Interaction> CatController<S, B, I> {
    pub fn new(store: S, breed_source: B, interaction: I) -> Self {
        Self {
            store,
            breed_source,
            interaction,
            records: Vec::new(),
            draft: Draft::default(),
            breeds: Vec::new(),
        }
    }

    pub fn records(&self) -> &[Cat] {
        &self.records
    }

    pub fn breeds(&self) -> &[String] {
        &self.breeds
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn interaction_mut(&mut self) -> &mut I {
        &mut self.interaction
    }

    /// Replaces the list with the server's, keeping server order. On failure
    /// the previous list stays.
    pub async fn load_records(&mut self) -> Result<&[Cat], SpyCatError> {
        let cats = self.store.list().await?;
        debug!(count = cats.len(), "records loaded");
        self.records = cats;
        Ok(&self.records)
    }

    pub async fn load_breeds(&mut self) -> Result<&[String], SpyCatError> {
        let names = self.breed_source.breed_names().await?;
        debug!(count = names.len(), "breeds loaded");
        self.breeds = names;
        Ok(&self.breeds)
    }

    /// Fetches records and breeds together. Whichever succeeds is applied;
    /// the records error is reported first if both fail.
    pub async fn load_all(&mut self) -> Result<(), SpyCatError> {
        let (cats, names) = futures::join!(self.store.list(), self.breed_source.breed_names());

        let names = match names {
            Ok(names) => {
                self.breeds = names;
                Ok(())
            }
            Err(e) => Err(e),
        };

        match cats {
            Ok(cats) => {
                self.records = cats;
                names
            }
            Err(e) => {
                if let Err(breed_err) = names {
                    warn!(error = %breed_err, "breed list failed to load");
                }
                Err(e)
            }
        }
    }

    pub fn validate_draft(&self) -> Result<NewCat, ValidationError> {
        validate_draft(&self.draft)
    }

    /// Creates a cat from the current draft.
    ///
    /// Validation failures never reach the network. A failed create keeps the
    /// draft so the user can retry; a successful one clears it and reloads.
    pub async fn submit_draft(&mut self) -> Result<(), SpyCatError> {
        let new_cat = match self.validate_draft() {
            Ok(new_cat) => new_cat,
            Err(e) => {
                debug!(rule = e.rule(), "draft rejected");
                self.interaction.notify(&e.to_string());
                return Err(e.into());
            }
        };

        match self.store.create(&new_cat).await {
            Ok(created) => {
                info!(id = %created.id, name = %created.name, "cat created");
            }
            Err(e) => {
                warn!(error = %e, "create failed");
                self.interaction.notify(&format!("Error: {}", e.user_message()));
                return Err(e);
            }
        }

        self.draft = Draft::default();
        self.load_records().await?;
        Ok(())
    }

    /// Asks for a new salary and patches it. Empty or cancelled input is a no-op.
    ///
    /// Any other input is sent without checks; text with no leading number
    /// goes out as `null` and the server's rejection comes back as the error.
    pub async fn update_salary(&mut self, id: CatId) -> Result<(), SpyCatError> {
        let input = match self.interaction.ask(SALARY_PROMPT) {
            Some(input) if !input.is_empty() => input,
            _ => return Ok(()),
        };
        let salary = parse_leading_number(&input);

        let updated = self.store.update_salary(id, salary).await;
        match &updated {
            Ok(()) => info!(%id, salary, "salary updated"),
            Err(e) => warn!(%id, error = %e, "salary update failed"),
        }

        let reloaded = self.load_records().await.map(|_| ());
        updated.and(reloaded)
    }

    /// Deletes after confirmation. Declining is a no-op.
    pub async fn delete_record(&mut self, id: CatId) -> Result<(), SpyCatError> {
        if !self.interaction.confirm(DELETE_PROMPT) {
            return Ok(());
        }

        let deleted = self.store.delete(id).await;
        match &deleted {
            Ok(()) => info!(%id, "cat deleted"),
            Err(e) => warn!(%id, error = %e, "delete failed"),
        }

        let reloaded = self.load_records().await.map(|_| ());
        deleted.and(reloaded)
    }
}
