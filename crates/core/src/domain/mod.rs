mod approval;
mod credentials;
mod error;
mod ids;
mod problem;

pub use approval::ApprovalStatus;
pub use credentials::{CompanyName, PlainPassword, Username};
pub use error::DomainError;
pub use ids::{AdminUserId, CompanyId, ProblemId, ReviewId, UserId};
pub use problem::ProblemDescription;
