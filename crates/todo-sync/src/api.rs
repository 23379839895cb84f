//! Remote API Seam
//!
//! Abstract interface to the todolist backend. The browser build
//! implements it over HTTP; tests implement it with a scripted mock.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Task, Todolist, UpdateTaskModel};

/// `resultCode` value signalling success
pub const RESULT_CODE_SUCCESS: i32 = 0;

/// Envelope wrapping every mutating response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<D> {
    pub result_code: i32,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub fields_errors: Vec<FieldError>,
    pub data: D,
}

impl<D> ResponseEnvelope<D> {
    pub fn ok(data: D) -> Self {
        Self {
            result_code: RESULT_CODE_SUCCESS,
            messages: Vec::new(),
            fields_errors: Vec::new(),
            data,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result_code == RESULT_CODE_SUCCESS
    }
}

impl<D: Default> ResponseEnvelope<D> {
    /// A domain failure with the given server messages
    pub fn rejected(result_code: i32, messages: &[&str]) -> Self {
        Self {
            result_code,
            messages: messages.iter().map(|m| m.to_string()).collect(),
            fields_errors: Vec::new(),
            data: D::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub error: String,
}

/// `data` of responses that carry nothing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

/// `data` of create/update responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload<T> {
    pub item: Option<T>,
}

impl<T> ItemPayload<T> {
    pub fn new(item: T) -> Self {
        Self { item: Some(item) }
    }
}

impl<T> Default for ItemPayload<T> {
    fn default() -> Self {
        Self { item: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTasksResponse {
    pub items: Vec<Task>,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginParams {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub user_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeData {
    pub id: Option<u64>,
    pub email: Option<String>,
    pub login: Option<String>,
}

/// Transport-level failure: the request never produced an envelope
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connectivity, timeout, CORS and the like
    Transport(String),
    /// Non-success HTTP status
    Http { status: u16, message: String },
    /// Response body did not match the expected shape
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "{}", msg),
            ApiError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Decode(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

/// CRUD calls against the todolist backend.
///
/// Futures are not required to be `Send`: the browser runs everything on
/// one thread.
#[async_trait(?Send)]
pub trait TodoApi {
    async fn get_todolists(&self) -> ApiResult<Vec<Todolist>>;

    async fn create_todolist(&self, title: &str) -> ApiResult<ResponseEnvelope<ItemPayload<Todolist>>>;

    async fn update_todolist_title(&self, id: &str, title: &str) -> ApiResult<ResponseEnvelope<Empty>>;

    async fn delete_todolist(&self, id: &str) -> ApiResult<ResponseEnvelope<Empty>>;

    async fn get_tasks(&self, todolist_id: &str) -> ApiResult<GetTasksResponse>;

    async fn create_task(&self, todolist_id: &str, title: &str) -> ApiResult<ResponseEnvelope<ItemPayload<Task>>>;

    async fn update_task(
        &self,
        todolist_id: &str,
        task_id: &str,
        model: &UpdateTaskModel,
    ) -> ApiResult<ResponseEnvelope<ItemPayload<Task>>>;

    async fn delete_task(&self, todolist_id: &str, task_id: &str) -> ApiResult<ResponseEnvelope<Empty>>;

    async fn login(&self, params: &LoginParams) -> ApiResult<ResponseEnvelope<LoginData>>;

    async fn logout(&self) -> ApiResult<ResponseEnvelope<Empty>>;

    async fn me(&self) -> ApiResult<ResponseEnvelope<MeData>>;
}
