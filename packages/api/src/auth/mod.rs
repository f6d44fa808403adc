//! Sign-in and sign-out against the content API.
//!
//! The API owns authentication. The console posts credentials to
//! `/auth/sign-in`, keeps the returned token and identity in client storage,
//! and forgets both on logout without telling the server.

use serde::{Deserialize, Serialize};
use serde_json::json;
use store::{KeyValueStorage, Session};
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::Transport;

pub const SIGN_IN_PATH: &str = "/auth/sign-in";

/// Message shown on the login screen when the API gives none.
pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Exchange credentials for a session and persist it.
///
/// The stored session is left untouched when sign-in fails.
///
/// # Errors
///
/// Returns the API's failure; [`ApiError::user_message`] with [`LOGIN_FAILED`]
/// gives the text to show.
pub async fn login<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    credentials: &Credentials,
) -> Result<Session, ApiError> {
    let request = ApiRequest::post(SIGN_IN_PATH)
        .json(json!({
            "email": credentials.email,
            "password": credentials.password,
        }))
        .anonymous();

    match client.send::<Session>(request).await {
        Ok(session) => {
            client.session().save(&session);
            info!(role = %session.role(), "signed in");
            Ok(session)
        }
        Err(e) => {
            warn!("sign-in failed: {e}");
            Err(e)
        }
    }
}

/// Forget the persisted session. No request is made.
pub fn logout<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>) {
    client.session().clear();
    info!("signed out");
}

/// The session persisted by a previous page load, if any.
pub fn restore<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>) -> Option<Session> {
    client.session().load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MemoryApi;
    use crate::request::RequestBody;
    use serde_json::json;
    use store::{MemoryStorage, SessionStore};

    fn client(api: MemoryApi) -> ApiClient<MemoryApi, MemoryStorage> {
        ApiClient::new(api, SessionStore::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let api = MemoryApi::new().with_account(
            "a@x.com",
            "secret",
            "t1",
            json!({ "role": "admin" }),
        );
        let client = client(api.clone());

        let session = login(&client, &Credentials::new("a@x.com", "secret"))
            .await
            .unwrap();
        assert_eq!(session.token, "t1");
        assert_eq!(session.role(), "admin");

        let restored = restore(&client).unwrap();
        assert_eq!(restored, session);

        let sent = api.sent();
        assert_eq!(sent[0].request.path, "/auth/sign-in");
        assert!(sent[0].bearer.is_none());
        assert_eq!(
            sent[0].request.body,
            RequestBody::Json(json!({ "email": "a@x.com", "password": "secret" }))
        );
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_untouched() {
        let api = MemoryApi::new().with_account("a@x.com", "secret", "t1", json!({}));
        let client = client(api);

        let err = login(&client, &Credentials::new("a@x.com", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(LOGIN_FAILED), "Invalid email or password");
        assert!(restore(&client).is_none());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_session() {
        let api = MemoryApi::new().with_account("a@x.com", "secret", "t1", json!({}));
        let client = client(api.clone());
        login(&client, &Credentials::new("a@x.com", "secret"))
            .await
            .unwrap();

        api.fail_next(500);
        assert!(login(&client, &Credentials::new("a@x.com", "secret"))
            .await
            .is_err());
        assert_eq!(restore(&client).unwrap().token, "t1");
    }

    #[tokio::test]
    async fn test_logout_clears_without_request() {
        let api = MemoryApi::new().with_account("a@x.com", "secret", "t1", json!({}));
        let client = client(api.clone());
        login(&client, &Credentials::new("a@x.com", "secret"))
            .await
            .unwrap();

        logout(&client);
        assert!(restore(&client).is_none());
        assert_eq!(api.sent().len(), 1);
    }
}
