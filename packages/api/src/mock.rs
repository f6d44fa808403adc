//! Test doubles for [`Transport`].
//!
//! - [`ScriptedTransport`] replays queued responses and records what was sent.
//! - [`MemoryApi`] behaves like the content API: sign-in, `/stats`, and CRUD over
//!   `/users`, `/articles`, `/projects`, `/reviews`, with bearer checks.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde_json::{json, Map, Value};

use crate::error::ApiError;
use crate::request::{ApiRequest, Method, RawResponse, RequestBody};
use crate::transport::Transport;

#[derive(Clone, Debug)]
pub struct SentRequest {
    pub request: ApiRequest,
    pub bearer: Option<String>,
}

fn respond(status: u16, body: Value) -> RawResponse {
    RawResponse {
        status,
        body: serde_json::to_vec(&body).unwrap(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Result<RawResponse, ApiError>>>>,
    sent: Arc<Mutex<Vec<SentRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.replies.lock().unwrap().push_back(Ok(respond(status, body)));
    }

    pub fn fail(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Transport(message.to_string())));
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn execute(
        &self,
        request: ApiRequest,
        bearer: Option<&str>,
    ) -> Result<RawResponse, ApiError> {
        self.sent.lock().unwrap().push(SentRequest {
            request,
            bearer: bearer.map(str::to_string),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left")
    }
}

#[derive(Debug, Default)]
struct MemoryApiState {
    collections: HashMap<String, Vec<Map<String, Value>>>,
    accounts: Vec<(String, String, Value)>,
    tokens: Vec<String>,
    next_id: u64,
    /// Per-request overrides; `None` handles the request normally.
    scripted_status: VecDeque<Option<u16>>,
    sent: Vec<SentRequest>,
}

/// In-memory content API.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    state: Arc<Mutex<MemoryApiState>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        let api = Self::default();
        {
            let mut state = api.state.lock().unwrap();
            for name in ["users", "articles", "projects", "reviews"] {
                state.collections.insert(name.to_string(), Vec::new());
            }
        }
        api
    }

    /// Register an account; signing in with it yields `token` and `user`.
    pub fn with_account(self, email: &str, password: &str, token: &str, user: Value) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.accounts.push((
                email.to_string(),
                password.to_string(),
                json!({ "token": token, "user": user }),
            ));
            state.tokens.push(token.to_string());
        }
        self
    }

    /// Accept `token` on authenticated requests without signing in.
    pub fn with_token(self, token: &str) -> Self {
        self.state.lock().unwrap().tokens.push(token.to_string());
        self
    }

    /// Revoke every token; subsequent authenticated calls get 401.
    pub fn revoke_tokens(&self) {
        self.state.lock().unwrap().tokens.clear();
    }

    /// Answer the next request with `status` instead of handling it.
    pub fn fail_next(&self, status: u16) {
        self.state.lock().unwrap().scripted_status.push_back(Some(status));
    }

    /// Handle the next request normally; use before [`Self::fail_next`] to fail
    /// the request after it.
    pub fn pass_next(&self) {
        self.state.lock().unwrap().scripted_status.push_back(None);
    }

    /// Insert a record directly, returning its id.
    pub fn seed(&self, collection: &str, record: Value) -> String {
        let mut state = self.state.lock().unwrap();
        let mut fields = record.as_object().cloned().unwrap_or_default();
        state.next_id += 1;
        let id = format!("id{}", state.next_id);
        fields.insert("_id".to_string(), Value::String(id.clone()));
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(fields);
        id
    }

    pub fn records(&self, collection: &str) -> Vec<Map<String, Value>> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.state.lock().unwrap().sent.clone()
    }

    fn handle(&self, request: &ApiRequest, bearer: Option<&str>) -> RawResponse {
        let mut state = self.state.lock().unwrap();
        if let Some(Some(status)) = state.scripted_status.pop_front() {
            return respond(status, json!({ "message": "forced failure" }));
        }

        if request.path == "/auth/sign-in" && request.method == Method::Post {
            return sign_in(&state, &request.body);
        }

        if request.authenticated {
            let known = bearer.is_some_and(|b| state.tokens.iter().any(|t| t == b));
            if !known {
                return respond(401, json!({ "message": "Unauthorized" }));
            }
        }

        let segments: Vec<&str> = request.path.trim_matches('/').split('/').collect();
        match (request.method, segments.as_slice()) {
            (Method::Get, ["stats"]) => stats(&state),
            (Method::Get, [name]) => match state.collections.get(*name) {
                Some(items) => respond(200, json!({ "data": items })),
                None => not_found(),
            },
            (Method::Post, [name]) => {
                if !state.collections.contains_key(*name) {
                    return not_found();
                }
                state.next_id += 1;
                let id = format!("id{}", state.next_id);
                let mut record = body_fields(&request.body);
                record.insert("_id".to_string(), Value::String(id));
                state
                    .collections
                    .entry(name.to_string())
                    .or_default()
                    .push(record.clone());
                respond(201, json!({ "data": record }))
            }
            (Method::Put, [name, id]) => {
                let Some(items) = state.collections.get_mut(*name) else {
                    return not_found();
                };
                let Some(record) = items.iter_mut().find(|r| has_id(r, id)) else {
                    return not_found();
                };
                for (key, value) in body_fields(&request.body) {
                    if key != "_id" {
                        record.insert(key, value);
                    }
                }
                respond(200, json!({ "data": record.clone() }))
            }
            (Method::Delete, [name, id]) => {
                let Some(items) = state.collections.get_mut(*name) else {
                    return not_found();
                };
                let before = items.len();
                items.retain(|r| !has_id(r, id));
                if items.len() == before {
                    return not_found();
                }
                respond(200, json!({ "data": null, "message": "deleted" }))
            }
            _ => not_found(),
        }
    }
}

fn has_id(record: &Map<String, Value>, id: &str) -> bool {
    record.get("_id").and_then(Value::as_str) == Some(id)
}

fn not_found() -> RawResponse {
    respond(404, json!({ "message": "Not found" }))
}

fn sign_in(state: &MemoryApiState, body: &RequestBody) -> RawResponse {
    let RequestBody::Json(body) = body else {
        return respond(400, json!({ "message": "Expected JSON" }));
    };
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    match state
        .accounts
        .iter()
        .find(|(e, p, _)| e == email && p == password)
    {
        Some((_, _, data)) => respond(200, json!({ "data": data })),
        None => respond(401, json!({ "message": "Invalid email or password" })),
    }
}

fn stats(state: &MemoryApiState) -> RawResponse {
    let count = |name: &str| state.collections.get(name).map_or(0, Vec::len);
    respond(
        200,
        json!({ "data": {
            "users": count("users"),
            "articles": count("articles"),
            "projects": count("projects"),
            "reviews": count("reviews"),
            "lastArticleDate": "2024-03-05T10:00:00.000Z",
            "lastReviewDate": null,
        }}),
    )
}

/// Decode a create/update body the way the API does: JSON as-is, multipart
/// text fields with JSON-array values parsed, files stored under `/uploads`.
fn body_fields(body: &RequestBody) -> Map<String, Value> {
    match body {
        RequestBody::Empty => Map::new(),
        RequestBody::Json(value) => value.as_object().cloned().unwrap_or_default(),
        RequestBody::Multipart(form) => {
            let mut fields = Map::new();
            for (name, value) in &form.fields {
                let parsed = if value.starts_with('[') {
                    serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.clone()))
                } else {
                    Value::String(value.clone())
                };
                fields.insert(name.clone(), parsed);
            }
            for (name, file) in &form.files {
                fields.insert(
                    name.clone(),
                    Value::String(format!("/uploads/{}", file.file_name)),
                );
            }
            fields
        }
    }
}

impl Transport for MemoryApi {
    async fn execute(
        &self,
        request: ApiRequest,
        bearer: Option<&str>,
    ) -> Result<RawResponse, ApiError> {
        let response = self.handle(&request, bearer);
        self.state.lock().unwrap().sent.push(SentRequest {
            request,
            bearer: bearer.map(str::to_string),
        });
        Ok(response)
    }
}
