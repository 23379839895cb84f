//! Task Endpoints

use reqwest::Method;
use todo_sync::api::{ApiResult, Empty, GetTasksResponse, ItemPayload, ResponseEnvelope};
use todo_sync::domain::{Task, UpdateTaskModel};

use super::{HttpTodoApi, TitleArgs};

fn tasks_path(todolist_id: &str) -> String {
    format!("todo-lists/{}/tasks", todolist_id)
}

pub async fn get_tasks(api: &HttpTodoApi, todolist_id: &str) -> ApiResult<GetTasksResponse> {
    api.send(api.request(Method::GET, &tasks_path(todolist_id))).await
}

pub async fn create_task(
    api: &HttpTodoApi,
    todolist_id: &str,
    title: &str,
) -> ApiResult<ResponseEnvelope<ItemPayload<Task>>> {
    api.send(api.request(Method::POST, &tasks_path(todolist_id)).json(&TitleArgs { title })).await
}

pub async fn update_task(
    api: &HttpTodoApi,
    todolist_id: &str,
    task_id: &str,
    model: &UpdateTaskModel,
) -> ApiResult<ResponseEnvelope<ItemPayload<Task>>> {
    let path = format!("{}/{}", tasks_path(todolist_id), task_id);
    api.send(api.request(Method::PUT, &path).json(model)).await
}

pub async fn delete_task(api: &HttpTodoApi, todolist_id: &str, task_id: &str) -> ApiResult<ResponseEnvelope<Empty>> {
    let path = format!("{}/{}", tasks_path(todolist_id), task_id);
    api.send(api.request(Method::DELETE, &path)).await
}
