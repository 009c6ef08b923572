//! 问题与回复 API 路由。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use shopdesk_api_types::{
    ProblemResponse, ProblemWithAuthorResponse, ReviewProblemRequest, ReviewResponse,
};
use shopdesk_core::domain::ProblemId;
use tracing::info;

use super::error::ApiError;
use super::json::AppJson;
use super::state::AppState;
use crate::repository::{NewReview, ProblemRecord, ReviewRecord};

pub const PROBLEM_NOT_FOUND: &str = "Problem not found";

/// 创建问题 API 路由。
pub fn create_problems_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/problems", get(list_problems))
        .route(
            "/problems/{problem_id}/reviews",
            get(list_reviews).post(review_problem),
        )
}

/// 所有问题，附带反馈人的用户名。
async fn list_problems(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProblemWithAuthorResponse>>, ApiError> {
    let problems = state.problems.list_with_authors().await?;
    Ok(Json(
        problems
            .into_iter()
            .map(|problem| ProblemWithAuthorResponse {
                id: problem.id.into_inner(),
                user_id: problem.user_id.into_inner(),
                username: problem.username,
                description: problem.description,
            })
            .collect(),
    ))
}

/// 回复一个问题。`response` 可以为空。
async fn review_problem(
    State(state): State<Arc<AppState>>,
    Path(problem_id): Path<i32>,
    AppJson(request): AppJson<ReviewProblemRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), ApiError> {
    let problem_id = existing_problem(&state, problem_id).await?;

    let review = state
        .reviews
        .create(NewReview {
            problem_id,
            response: request.response,
        })
        .await?;

    info!(review_id = %review.id, %problem_id, "problem reviewed");
    Ok((StatusCode::CREATED, Json(review_response(review))))
}

/// 某个问题下的所有回复。
async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Path(problem_id): Path<i32>,
) -> Result<Json<Vec<ReviewResponse>>, ApiError> {
    let problem_id = existing_problem(&state, problem_id).await?;
    let reviews = state.reviews.list_by_problem_id(problem_id).await?;
    Ok(Json(reviews.into_iter().map(review_response).collect()))
}

async fn existing_problem(state: &AppState, problem_id: i32) -> Result<ProblemId, ApiError> {
    state
        .problems
        .find_by_id(ProblemId::new(problem_id))
        .await?
        .map(|problem| problem.id)
        .ok_or_else(|| ApiError::not_found(PROBLEM_NOT_FOUND))
}

pub(super) fn problem_response(problem: ProblemRecord) -> ProblemResponse {
    ProblemResponse {
        id: problem.id.into_inner(),
        user_id: problem.user_id.into_inner(),
        description: problem.description,
    }
}

fn review_response(review: ReviewRecord) -> ReviewResponse {
    ReviewResponse {
        id: review.id.into_inner(),
        problem_id: review.problem_id.into_inner(),
        response: review.response,
    }
}
