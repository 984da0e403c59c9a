//! Typed client for the remote user resource.
//!
//! Wraps the demo REST API behind one method per operation. Transport
//! failures and non-2xx statuses surface as [`ApiError`]; callers decide how
//! to present them (the UI collapses both to a generic message and logs the
//! detail).

use reqwest::StatusCode;
use store::UserRecord;
use thiserror::Error;

/// Base resource used when no override is given.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connection, body decoding.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered outside the 2xx range.
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// REST client for the `/users` resource.
#[derive(Clone, Debug)]
pub struct UsersApi {
    base_url: String,
    client: reqwest::Client,
}

impl Default for UsersApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl UsersApi {
    /// Client against a specific base resource; tests point this at a stub.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// `GET /users`
    pub async fn list(&self) -> Result<Vec<UserRecord>, ApiError> {
        let response = self.client.get(self.users_url()).send().await?;
        check(response.status())?;
        Ok(response.json().await?)
    }

    /// `GET /users/{id}`
    pub async fn get(&self, id: u64) -> Result<UserRecord, ApiError> {
        let response = self.client.get(self.user_url(id)).send().await?;
        check(response.status())?;
        Ok(response.json().await?)
    }

    /// `POST /users`. The server assigns the identifier; the returned
    /// record is the one to keep.
    pub async fn create(&self, user: &UserRecord) -> Result<UserRecord, ApiError> {
        let response = self.client.post(self.users_url()).json(user).send().await?;
        check(response.status())?;
        Ok(response.json().await?)
    }

    /// `PUT /users/{id}` with the full record.
    pub async fn update(&self, id: u64, user: &UserRecord) -> Result<UserRecord, ApiError> {
        let response = self
            .client
            .put(self.user_url(id))
            .json(user)
            .send()
            .await?;
        check(response.status())?;
        Ok(response.json().await?)
    }

    /// `DELETE /users/{id}`. Any 2xx counts as acknowledged, the body is
    /// ignored.
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let response = self.client.delete(self.user_url(id)).send().await?;
        check(response.status())?;
        Ok(())
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/users/{id}", self.base_url)
    }
}

fn check(status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls_are_formed_from_the_base() {
        let client = UsersApi::new("http://localhost:9000");
        assert_eq!(client.users_url(), "http://localhost:9000/users");
        assert_eq!(client.user_url(7), "http://localhost:9000/users/7");
    }

    #[test]
    fn trailing_slashes_on_the_base_are_trimmed() {
        let client = UsersApi::new("http://localhost:9000//");
        assert_eq!(client.users_url(), "http://localhost:9000/users");
    }

    #[test]
    fn deserializes_api_payloads_with_extra_fields() {
        // The demo API nests address/company data we do not model.
        let payload = serde_json::json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031",
            "company": { "name": "Romaguera-Crona" }
        });

        let record: UserRecord = serde_json::from_value(payload).unwrap();
        assert_eq!(record.id, Some(1));
        assert_eq!(record.username, "Bret");
        assert_eq!(record.email, "Sincere@april.biz");
    }

    #[test]
    fn create_payloads_carry_no_identifier() {
        let buffer = UserRecord {
            id: None,
            name: "X".into(),
            username: "x".into(),
            email: "x@x.com".into(),
        };

        let value = serde_json::to_value(&buffer).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "X");
    }

    #[test]
    fn status_errors_render_the_code() {
        let err = ApiError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "unexpected status 404 Not Found");
    }
}
