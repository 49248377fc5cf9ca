use crate::models::{Note, NoteInput};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
}

/// Optional fields a backend may put in an error response body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Decodes `message`/`detail` from a raw body. Non-JSON bodies and
    /// non-string fields decode to `None`.
    pub(crate) fn decode(raw: &str) -> Self {
        let Ok(data) = serde_json::from_str::<serde_json::Value>(raw) else {
            return Self::default();
        };
        let get_s = |k: &str| data.get(k).and_then(|v| v.as_str()).map(|s| s.to_string());

        Self {
            message: get_s("message"),
            detail: get_s("detail"),
        }
    }
}

/// Failure of a single request, decoded once at the request boundary.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{kind} error: {description}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub description: String,
    pub body: ErrorBody,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: None,
            description: e.to_string(),
            body: ErrorBody::default(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            status: None,
            description: e.to_string(),
            body: ErrorBody::default(),
        }
    }

    pub(crate) fn http(status: u16, raw_body: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            status: Some(status),
            description: format!("Request failed with status code {status}"),
            body: ErrorBody::decode(raw_body),
        }
    }

    /// Human-readable message for a toast: server `message`, then server
    /// `detail`, then the transport description, then the display form.
    pub(crate) fn user_message(&self) -> String {
        if let Some(m) = non_blank(&self.body.message) {
            return m.to_string();
        }
        if let Some(d) = non_blank(&self.body.detail) {
            return d.to_string();
        }
        if !self.description.trim().is_empty() {
            return self.description.clone();
        }
        self.to_string()
    }
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub const DEFAULT_API_URL: &'static str = "http://localhost:8000/api";

    pub fn new() -> Self {
        // `window.ENV.API_URL` first, `window.ENV.api_url` as fallback.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    for key in ["API_URL", "api_url"] {
                        if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                            if let Some(url_str) = api_url.as_string() {
                                return Self::with_url(&url_str);
                            }
                        }
                    }
                }
            }
        }

        Self::with_url(Self::DEFAULT_API_URL)
    }

    pub(crate) fn with_url(url: &str) -> Self {
        Self {
            api_url: url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Remote note store. The browser build talks to it over HTTP; tests use fakes.
#[allow(async_fn_in_trait)]
pub(crate) trait NoteApi {
    async fn list_notes(&self) -> ApiResult<Vec<Note>>;
    async fn create_note(&self, input: &NoteInput) -> ApiResult<Note>;
    async fn update_note(&self, id: &str, input: &NoteInput) -> ApiResult<Note>;
    async fn delete_note(&self, id: &str) -> ApiResult<()>;
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: EnvConfig::with_url(&base_url).api_url,
        }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    pub(crate) fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    pub(crate) fn note_url(&self, id: &str) -> String {
        format!("{}/notes/{}", self.base_url, urlencoding::encode(id))
    }

    async fn send(req: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            Ok(res)
        } else {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, &body))
        }
    }

    async fn send_json(req: reqwest::RequestBuilder) -> ApiResult<serde_json::Value> {
        Self::send(req)
            .await?
            .json()
            .await
            .map_err(ApiError::parse)
    }

    /// Accepts a bare note, `{ "note": ... }` or `{ "data": { "note": ... } }`.
    pub(crate) fn parse_note_response(data: serde_json::Value) -> ApiResult<Note> {
        let item = data
            .get("data")
            .and_then(|d| d.get("note"))
            .or_else(|| data.get("note"))
            .cloned()
            .unwrap_or(data);

        serde_json::from_value(item).map_err(ApiError::parse)
    }

    /// Accepts a bare array, `{ "notes": [...] }` or `{ "data": { "notes": [...] } }`.
    pub(crate) fn parse_note_list_response(data: serde_json::Value) -> ApiResult<Vec<Note>> {
        let list = if data.is_array() {
            data
        } else {
            data.get("data")
                .and_then(|d| d.get("notes"))
                .or_else(|| data.get("notes"))
                .cloned()
                .ok_or_else(|| {
                    ApiError::parse(format!("response is missing a note list: {data}"))
                })?
        };

        serde_json::from_value(list).map_err(ApiError::parse)
    }
}

impl NoteApi for ApiClient {
    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        let client = reqwest::Client::new();
        let data = Self::send_json(client.get(self.notes_url())).await?;
        Self::parse_note_list_response(data)
    }

    async fn create_note(&self, input: &NoteInput) -> ApiResult<Note> {
        let client = reqwest::Client::new();
        let data = Self::send_json(client.post(self.notes_url()).json(input)).await?;
        Self::parse_note_response(data)
    }

    async fn update_note(&self, id: &str, input: &NoteInput) -> ApiResult<Note> {
        let client = reqwest::Client::new();
        let data = Self::send_json(client.patch(self.note_url(id)).json(input)).await?;
        Self::parse_note_response(data)
    }

    async fn delete_note(&self, id: &str) -> ApiResult<()> {
        let client = reqwest::Client::new();
        // Backends commonly answer 204 with no body; nothing to decode.
        Self::send(client.delete(self.note_url(id))).await?;
        Ok(())
    }
}
