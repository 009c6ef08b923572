//! API 路由模块。
//!
//! 后台管理接口：公司审批、管理员、用户问题反馈。

pub mod admins;
pub mod companies;
pub mod error;
mod json;
pub mod problems;
pub mod state;
pub mod users;
mod validation;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use shopdesk_api_types::HealthCheckResponse;
use tower_http::trace::TraceLayer;

pub use admins::create_admin_router;
pub use companies::create_companies_router;
pub use error::ApiError;
pub use problems::create_problems_router;
pub use state::AppState;
pub use users::create_users_router;

/// 组装完整的路由。
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(create_companies_router())
        .merge(create_admin_router())
        .merge(create_users_router())
        .merge(create_problems_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::ok())
}
