//! The console's HTTP client adapter.

use serde::de::DeserializeOwned;
use store::{KeyValueStorage, SessionStore};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::request::{ApiRequest, Envelope, RawResponse};
use crate::transport::Transport;

/// REST client for the content API.
///
/// Reads the bearer token from the injected [`SessionStore`] on every request.
/// A 401 on an authenticated request clears that store and surfaces as
/// [`ApiError::Unauthorized`]; deciding where to navigate is left to the caller.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S: KeyValueStorage> {
    transport: T,
    session: SessionStore<S>,
}

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    pub fn new(transport: T, session: SessionStore<S>) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute a request and return the raw successful response.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] on 401 for authenticated requests,
    /// [`ApiError::Server`] for any other non-2xx status, and whatever the
    /// transport reports when no response arrives.
    pub async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        let authenticated = request.authenticated;
        let token = if authenticated {
            self.session.token()
        } else {
            None
        };

        debug!(%method, %path, bearer = token.is_some(), "API request");
        let response = self.transport.execute(request, token.as_deref()).await?;

        if response.is_success() {
            return Ok(response);
        }
        if response.status == 401 && authenticated {
            warn!(%method, %path, "API rejected the session token, signing out");
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }
        Err(ApiError::from_status(response.status, &response.body))
    }

    /// Execute and decode the payload under the `data` key.
    pub async fn send<D: DeserializeOwned>(&self, request: ApiRequest) -> Result<D, ApiError> {
        let response = self.execute(request).await?;
        let envelope: Envelope<D> = serde_json::from_slice(&response.body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    /// Execute a mutation whose response payload the console does not use.
    pub async fn send_discarding(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }
}
