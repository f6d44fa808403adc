//! # Transports — how an [`ApiRequest`] reaches the API
//!
//! [`Transport`] is the seam between request construction and the network.
//! [`HttpTransport`] is the production implementation over `reqwest`, which
//! compiles to `fetch` on wasm32 and to hyper on native targets. Tests swap in an
//! in-memory backend.
//!
//! A transport only moves bytes: it never inspects the status code, never
//! retries, and never enforces a timeout. Status handling lives in
//! [`ApiClient`](crate::client::ApiClient).

use reqwest::multipart::{Form, Part};

use crate::error::ApiError;
use crate::request::{ApiRequest, Method, MultipartBody, RawResponse, RequestBody};

/// Async interface for executing a request against the API.
pub trait Transport {
    /// Execute `request`, attaching `bearer` as `Authorization: Bearer <token>`
    /// when present.
    fn execute(
        &self,
        request: ApiRequest,
        bearer: Option<&str>,
    ) -> impl std::future::Future<Output = Result<RawResponse, ApiError>>;
}

/// `reqwest`-backed transport rooted at a base address.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path relative to the base address.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn multipart_form(body: MultipartBody) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in body.fields {
        form = form.text(name, value);
    }
    for (name, file) in body.files {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        form = form.part(name, part);
    }
    Ok(form)
}

impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: ApiRequest,
        bearer: Option<&str>,
    ) -> Result<RawResponse, ApiError> {
        let url = self.url(&request.path);
        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };

        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(body) => builder.multipart(multipart_form(body)?),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}
