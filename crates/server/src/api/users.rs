//! 商城用户及其问题反馈 API 路由。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use shopdesk_api_types::{
    CredentialsRequest, ProblemResponse, ReportProblemRequest, UserResponse,
};
use shopdesk_core::domain::{ProblemDescription, UserId};
use tracing::info;

use super::error::ApiError;
use super::json::AppJson;
use super::problems::problem_response;
use super::state::AppState;
use super::validation::{self, CREDENTIALS_REQUIRED};
use crate::password;
use crate::repository::{NewProblem, NewUser};

pub const USER_NOT_FOUND: &str = "User not found";
pub const USERNAME_TAKEN: &str = "Username already exists";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";

/// 创建用户 API 路由。
pub fn create_users_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", post(register_user))
        .route(
            "/users/{user_id}/problems",
            get(list_user_problems).post(report_problem),
        )
}

/// 注册用户。
async fn register_user(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let (username, password) =
        validation::credentials(request.username, request.password, CREDENTIALS_REQUIRED)?;
    let password_hash = password::hash(password).await?;

    let user = state
        .users
        .create(NewUser {
            username,
            password_hash,
        })
        .await
        .map_err(|err| ApiError::from_insert(err, USERNAME_TAKEN))?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: user.id.into_inner(),
            username: user.username,
        }),
    ))
}

/// 用户反馈一个问题。
async fn report_problem(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
    AppJson(request): AppJson<ReportProblemRequest>,
) -> Result<(StatusCode, Json<ProblemResponse>), ApiError> {
    let description = request
        .description
        .and_then(|description| ProblemDescription::new(description).ok())
        .ok_or_else(|| ApiError::bad_request(DESCRIPTION_REQUIRED))?;
    let user_id = existing_user(&state, user_id).await?;

    let problem = state
        .problems
        .create(NewProblem {
            user_id,
            description,
        })
        .await?;

    info!(problem_id = %problem.id, %user_id, "problem reported");
    Ok((StatusCode::CREATED, Json(problem_response(problem))))
}

/// 用户反馈过的所有问题。
async fn list_user_problems(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<ProblemResponse>>, ApiError> {
    let user_id = existing_user(&state, user_id).await?;
    let problems = state.problems.list_by_user_id(user_id).await?;
    Ok(Json(problems.into_iter().map(problem_response).collect()))
}

async fn existing_user(state: &AppState, user_id: i32) -> Result<UserId, ApiError> {
    state
        .users
        .find_by_id(UserId::new(user_id))
        .await?
        .map(|user| user.id)
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))
}
