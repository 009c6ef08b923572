pub mod admin_user;
pub mod company;
pub mod problem_review;
pub mod user;
pub mod user_problem;
