//! 管理员账号 API 路由。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use shopdesk_api_types::{CredentialsRequest, MessageResponse};
use tracing::info;

use super::error::ApiError;
use super::json::AppJson;
use super::state::AppState;
use super::validation::{self, CREDENTIALS_REQUIRED};
use crate::password;
use crate::repository::NewAdmin;

pub const ADMIN_CREATED: &str = "Admin created successfully";
pub const ADMIN_USERNAME_TAKEN: &str = "Admin username already exists";

/// 创建管理员 API 路由。
pub fn create_admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin", get(list_admins))
        .route("/admin/create", post(create_admin))
}

/// 创建管理员，密码以加盐哈希存储。
async fn create_admin(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<CredentialsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (username, password) =
        validation::credentials(request.username, request.password, CREDENTIALS_REQUIRED)?;
    let password_hash = password::hash(password).await?;

    let admin = state
        .admins
        .create(NewAdmin {
            username,
            password_hash,
        })
        .await
        .map_err(|err| ApiError::from_insert(err, ADMIN_USERNAME_TAKEN))?;

    info!(admin_id = %admin.id, username = %admin.username, "admin created");
    Ok(Json(MessageResponse::new(ADMIN_CREATED)))
}

/// 所有管理员用户名。
async fn list_admins(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, ApiError> {
    let admins = state.admins.list().await?;
    Ok(Json(admins.into_iter().map(|admin| admin.username).collect()))
}
