use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::CatStore;
use crate::core::{
    http::{
        ensure_success,
        join_url,
    },
    Cat,
    CatId,
    NewCat,
    SalaryUpdate,
    SpyCatError,
};

pub struct HttpCatStore {
    client: Client,
    base_url: String,
}

impl HttpCatStore {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    fn collection_url(&self) -> String {
        join_url(&self.base_url, "cats")
    }

    fn cat_url(&self, id: CatId) -> String {
        join_url(&self.base_url, &format!("cats/{id}"))
    }
}

#[async_trait]
impl CatStore for HttpCatStore {
    async fn list(&self) -> Result<Vec<Cat>, SpyCatError> {
        let url = self.collection_url();
        debug!(%url, "GET cats");
        let resp = ensure_success(self.client.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    async fn create(&self, cat: &NewCat) -> Result<Cat, SpyCatError> {
        let url = self.collection_url();
        debug!(%url, name = %cat.name, "POST cat");
        let resp = ensure_success(self.client.post(&url).json(cat).send().await?).await?;
        Ok(resp.json().await?)
    }

    async fn update_salary(&self, id: CatId, salary: f64) -> Result<(), SpyCatError> {
        let url = self.cat_url(id);
        debug!(%url, salary, "PATCH cat");
        ensure_success(self.client.patch(&url).json(&SalaryUpdate { salary }).send().await?)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: CatId) -> Result<(), SpyCatError> {
        let url = self.cat_url(id);
        debug!(%url, "DELETE cat");
        ensure_success(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::{
        client,
        serve_once,
    };

    #[test]
    fn test_urls() {
        let store = HttpCatStore::new(Client::new(), "http://127.0.0.1:8000/");
        assert_eq!(store.collection_url(), "http://127.0.0.1:8000/cats");
        assert_eq!(store.cat_url(CatId(7)), "http://127.0.0.1:8000/cats/7");
    }

    #[tokio::test]
    async fn test_list_request() {
        let (base_url, server) = serve_once(
            200,
            r#"[{"id":1,"name":"Tom","experience_years":3,"breed":"Persian","salary":1000}]"#,
        )
        .await;
        let store = HttpCatStore::new(client(), base_url);

        let cats = store.list().await.unwrap();
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].id, CatId(1));
        assert_eq!(cats[0].name, "Tom");

        let request = server.await.unwrap();
        assert_eq!(request.request_line, "GET /cats HTTP/1.1");
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn test_create_request_and_rejection() {
        let (base_url, server) = serve_once(400, r#"{"detail":"Invalid cat breed"}"#).await;
        let store = HttpCatStore::new(client(), base_url);
        let new_cat = NewCat {
            name: "Max".to_string(),
            experience_years: 2,
            breed: "Unicorn".to_string(),
            salary: 500.0,
        };

        let err = store.create(&new_cat).await.unwrap_err();
        match err {
            SpyCatError::Status { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, r#"{"detail":"Invalid cat breed"}"#);
            }
            other => panic!("Expected Status, got {:?}", other),
        }

        let request = server.await.unwrap();
        assert_eq!(request.request_line, "POST /cats HTTP/1.1");
        assert_eq!(
            request.json(),
            serde_json::json!({
                "name": "Max",
                "experience_years": 2,
                "breed": "Unicorn",
                "salary": 500.0,
            })
        );
    }

    #[tokio::test]
    async fn test_create_returns_created_cat() {
        let (base_url, server) = serve_once(
            200,
            r#"{"id":5,"name":"Max","experience_years":2,"breed":"Persian","salary":500.0}"#,
        )
        .await;
        let store = HttpCatStore::new(client(), base_url);
        let new_cat = NewCat {
            name: "Max".to_string(),
            experience_years: 2,
            breed: "Persian".to_string(),
            salary: 500.0,
        };

        let created = store.create(&new_cat).await.unwrap();
        assert_eq!(created.id, CatId(5));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_update_salary_request() {
        let (base_url, server) = serve_once(
            200,
            r#"{"id":7,"name":"Tom","experience_years":3,"breed":"Persian","salary":1500.5}"#,
        )
        .await;
        let store = HttpCatStore::new(client(), base_url);

        store.update_salary(CatId(7), 1500.5).await.unwrap();

        let request = server.await.unwrap();
        assert_eq!(request.request_line, "PATCH /cats/7 HTTP/1.1");
        assert_eq!(request.json(), serde_json::json!({ "salary": 1500.5 }));
    }

    #[tokio::test]
    async fn test_update_salary_without_number_sends_null() {
        let (base_url, server) = serve_once(422, r#"{"detail":"salary must be a number"}"#).await;
        let store = HttpCatStore::new(client(), base_url);

        let err = store.update_salary(CatId(7), f64::NAN).await.unwrap_err();
        assert!(matches!(err, SpyCatError::Status { status: 422, .. }));

        let request = server.await.unwrap();
        assert_eq!(request.body, r#"{"salary":null}"#);
    }

    #[tokio::test]
    async fn test_delete_request() {
        let (base_url, server) = serve_once(200, r#"{"ok":true}"#).await;
        let store = HttpCatStore::new(client(), base_url);

        store.delete(CatId(7)).await.unwrap();

        let request = server.await.unwrap();
        assert_eq!(request.request_line, "DELETE /cats/7 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_delete_missing_cat() {
        let (base_url, server) = serve_once(404, r#"{"detail":"Not Found"}"#).await;
        let store = HttpCatStore::new(client(), base_url);

        let err = store.delete(CatId(99)).await.unwrap_err();
        assert!(
            matches!(err, SpyCatError::Status { status: 404, ref body } if body.contains("Not Found"))
        );
        server.await.unwrap();
    }
}
