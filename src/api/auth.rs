//! Auth Endpoints
//!
//! The session lives in a cookie; these calls only set or drop it.

use reqwest::Method;
use todo_sync::api::{ApiResult, Empty, LoginData, LoginParams, MeData, ResponseEnvelope};

use super::HttpTodoApi;

pub async fn login(api: &HttpTodoApi, params: &LoginParams) -> ApiResult<ResponseEnvelope<LoginData>> {
    api.send(api.request(Method::POST, "auth/login").json(params)).await
}

pub async fn logout(api: &HttpTodoApi) -> ApiResult<ResponseEnvelope<Empty>> {
    api.send(api.request(Method::DELETE, "auth/login")).await
}

pub async fn me(api: &HttpTodoApi) -> ApiResult<ResponseEnvelope<MeData>> {
    api.send(api.request(Method::GET, "auth/me")).await
}
