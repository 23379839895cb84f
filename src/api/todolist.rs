//! Todolist Endpoints

use reqwest::Method;
use todo_sync::api::{ApiResult, Empty, ItemPayload, ResponseEnvelope};
use todo_sync::domain::Todolist;

use super::{HttpTodoApi, TitleArgs};

pub async fn get_todolists(api: &HttpTodoApi) -> ApiResult<Vec<Todolist>> {
    api.send(api.request(Method::GET, "todo-lists")).await
}

pub async fn create_todolist(api: &HttpTodoApi, title: &str) -> ApiResult<ResponseEnvelope<ItemPayload<Todolist>>> {
    api.send(api.request(Method::POST, "todo-lists").json(&TitleArgs { title })).await
}

pub async fn update_todolist_title(api: &HttpTodoApi, id: &str, title: &str) -> ApiResult<ResponseEnvelope<Empty>> {
    let path = format!("todo-lists/{}", id);
    api.send(api.request(Method::PUT, &path).json(&TitleArgs { title })).await
}

pub async fn delete_todolist(api: &HttpTodoApi, id: &str) -> ApiResult<ResponseEnvelope<Empty>> {
    let path = format!("todo-lists/{}", id);
    api.send(api.request(Method::DELETE, &path)).await
}
