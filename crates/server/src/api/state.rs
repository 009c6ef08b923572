//! 统一的应用状态。

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repository::{
    AdminRepository, CompanyRepository, ProblemRepository, ReviewRepository,
    SeaOrmAdminRepository, SeaOrmCompanyRepository, SeaOrmProblemRepository,
    SeaOrmReviewRepository, SeaOrmUserRepository, UserRepository,
};

/// 统一的应用状态，包含所有 handler 共享的仓储。
#[derive(Clone)]
pub struct AppState {
    /// 公司审批。
    pub companies: Arc<dyn CompanyRepository>,
    /// 管理员账号。
    pub admins: Arc<dyn AdminRepository>,
    /// 商城用户。
    pub users: Arc<dyn UserRepository>,
    /// 用户反馈的问题。
    pub problems: Arc<dyn ProblemRepository>,
    /// 问题的处理回复。
    pub reviews: Arc<dyn ReviewRepository>,
}

impl AppState {
    /// 基于同一个数据库连接池创建所有仓储。
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            companies: Arc::new(SeaOrmCompanyRepository::new(db.clone())),
            admins: Arc::new(SeaOrmAdminRepository::new(db.clone())),
            users: Arc::new(SeaOrmUserRepository::new(db.clone())),
            problems: Arc::new(SeaOrmProblemRepository::new(db.clone())),
            reviews: Arc::new(SeaOrmReviewRepository::new(db)),
        }
    }
}
