//! Remote API Client
//!
//! HTTP implementation of `TodoApi`, organized by domain like the
//! backend's endpoints.

mod auth;
mod task;
mod todolist;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use todo_sync::api::{
    ApiError, ApiResult, Empty, GetTasksResponse, ItemPayload, LoginData, LoginParams, MeData, ResponseEnvelope,
    TodoApi,
};
use todo_sync::domain::{Task, Todolist, UpdateTaskModel};

use crate::config::ApiConfig;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct TitleArgs<'a> {
    title: &'a str,
}

/// Browser HTTP client for the todolist backend
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpTodoApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.client.request(method, self.config.endpoint(path));
        if !self.config.api_key.is_empty() {
            builder = builder.header("API-KEY", self.config.api_key.as_str());
        }
        // Browser fetch only; native builds have no cookie jar here
        #[cfg(target_arch = "wasm32")]
        let builder = if self.config.with_credentials { builder.fetch_credentials_include() } else { builder };
        builder
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("[API] HTTP {} from {}", status, response.url());
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn get_todolists(&self) -> ApiResult<Vec<Todolist>> {
        todolist::get_todolists(self).await
    }

    async fn create_todolist(&self, title: &str) -> ApiResult<ResponseEnvelope<ItemPayload<Todolist>>> {
        todolist::create_todolist(self, title).await
    }

    async fn update_todolist_title(&self, id: &str, title: &str) -> ApiResult<ResponseEnvelope<Empty>> {
        todolist::update_todolist_title(self, id, title).await
    }

    async fn delete_todolist(&self, id: &str) -> ApiResult<ResponseEnvelope<Empty>> {
        todolist::delete_todolist(self, id).await
    }

    async fn get_tasks(&self, todolist_id: &str) -> ApiResult<GetTasksResponse> {
        task::get_tasks(self, todolist_id).await
    }

    async fn create_task(&self, todolist_id: &str, title: &str) -> ApiResult<ResponseEnvelope<ItemPayload<Task>>> {
        task::create_task(self, todolist_id, title).await
    }

    async fn update_task(
        &self,
        todolist_id: &str,
        task_id: &str,
        model: &UpdateTaskModel,
    ) -> ApiResult<ResponseEnvelope<ItemPayload<Task>>> {
        task::update_task(self, todolist_id, task_id, model).await
    }

    async fn delete_task(&self, todolist_id: &str, task_id: &str) -> ApiResult<ResponseEnvelope<Empty>> {
        task::delete_task(self, todolist_id, task_id).await
    }

    async fn login(&self, params: &LoginParams) -> ApiResult<ResponseEnvelope<LoginData>> {
        auth::login(self, params).await
    }

    async fn logout(&self) -> ApiResult<ResponseEnvelope<Empty>> {
        auth::logout(self).await
    }

    async fn me(&self) -> ApiResult<ResponseEnvelope<MeData>> {
        auth::me(self).await
    }
}
