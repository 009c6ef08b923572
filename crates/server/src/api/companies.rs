//! 公司审批 API 路由。
//!
//! 公司注册后处于待审批状态，管理员可以批准（标记为 approved）或拒绝（直接删除）。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use shopdesk_api_types::{
    CompanyActionRequest, CompanyResponse, MessageResponse, RegisterCompanyRequest,
};
use shopdesk_core::domain::CompanyId;
use tracing::{info, warn};

use super::error::ApiError;
use super::json::AppJson;
use super::state::AppState;
use super::validation::{self, COMPANY_ID_REQUIRED};
use crate::password;
use crate::repository::{CompanyRecord, NewCompany};

pub const COMPANY_APPROVED: &str = "Company approved successfully";
pub const COMPANY_REJECTED: &str = "Company rejected successfully";
pub const COMPANY_NOT_FOUND: &str = "Company not found";
pub const COMPANY_NAME_TAKEN: &str = "Company name already exists";

/// 创建公司审批 API 路由。
pub fn create_companies_router() -> Router<Arc<AppState>> {
    Router::new()
        // 注册公司
        .route("/companies", post(register_company))
        // 待审批公司列表
        .route("/companies/awaiting_approval", get(list_awaiting_approval))
        // 批准
        .route("/companies/approve", post(approve_company))
        // 拒绝
        .route("/companies/reject", post(reject_company))
        // 查询单个公司
        .route("/companies/{company_id}", get(get_company))
}

/// 待审批公司名称列表。
async fn list_awaiting_approval(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let companies = state.companies.list_pending().await?;
    Ok(Json(
        companies.into_iter().map(|company| company.name).collect(),
    ))
}

/// 批准公司。重复批准同一公司同样返回成功。
async fn approve_company(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<CompanyActionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let company_id = company_id(&request)?;

    match state.companies.approve(company_id).await? {
        Some(company) => {
            info!(company_id = %company.id, name = %company.name, "company approved");
            Ok(Json(MessageResponse::new(COMPANY_APPROVED)))
        }
        None => {
            warn!(%company_id, "approve requested for unknown company");
            Err(ApiError::not_found(COMPANY_NOT_FOUND))
        }
    }
}

/// 拒绝公司：永久删除记录。
async fn reject_company(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<CompanyActionRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let company_id = company_id(&request)?;

    if state.companies.delete(company_id).await? {
        info!(%company_id, "company rejected and deleted");
        Ok(Json(MessageResponse::new(COMPANY_REJECTED)))
    } else {
        warn!(%company_id, "reject requested for unknown company");
        Err(ApiError::not_found(COMPANY_NOT_FOUND))
    }
}

/// 注册公司，初始状态为待审批。
async fn register_company(
    State(state): State<Arc<AppState>>,
    AppJson(request): AppJson<RegisterCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse>), ApiError> {
    let (name, password) = validation::company_registration(request.name, request.password)?;
    let password_hash = password::hash(password).await?;

    let company = state
        .companies
        .create(NewCompany {
            name,
            password_hash,
        })
        .await
        .map_err(|err| ApiError::from_insert(err, COMPANY_NAME_TAKEN))?;

    info!(company_id = %company.id, name = %company.name, "company registered");
    Ok((StatusCode::CREATED, Json(company_response(company))))
}

/// 查询单个公司。
async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(company_id): Path<i32>,
) -> Result<Json<CompanyResponse>, ApiError> {
    state
        .companies
        .find_by_id(CompanyId::new(company_id))
        .await?
        .map(|company| Json(company_response(company)))
        .ok_or_else(|| ApiError::not_found(COMPANY_NOT_FOUND))
}

fn company_id(request: &CompanyActionRequest) -> Result<CompanyId, ApiError> {
    request
        .company_id
        .map(CompanyId::new)
        .ok_or_else(|| ApiError::bad_request(COMPANY_ID_REQUIRED))
}

fn company_response(company: CompanyRecord) -> CompanyResponse {
    CompanyResponse {
        id: company.id.into_inner(),
        name: company.name,
        approved: company.status.is_approved(),
    }
}
