mod admin_repository;
mod company_repository;
mod problem_repository;
mod review_repository;
mod user_repository;

pub use admin_repository::{AdminRecord, AdminRepository, NewAdmin, SeaOrmAdminRepository};
pub use company_repository::{
    CompanyRecord, CompanyRepository, NewCompany, SeaOrmCompanyRepository,
};
pub use problem_repository::{
    NewProblem, ProblemRecord, ProblemRepository, ProblemWithAuthor, SeaOrmProblemRepository,
};
pub use review_repository::{NewReview, ReviewRecord, ReviewRepository, SeaOrmReviewRepository};
pub use user_repository::{NewUser, SeaOrmUserRepository, UserRecord, UserRepository};

use sea_orm::{DbErr, SqlErr};

/// Whether a repository error came from a unique constraint in the store.
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<DbErr>()
        .and_then(DbErr::sql_err)
        .is_some_and(|sql_err| matches!(sql_err, SqlErr::UniqueConstraintViolation(_)))
}
