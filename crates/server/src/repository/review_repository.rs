use crate::entity::problem_review;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use shopdesk_core::domain::{ProblemId, ReviewId};

#[derive(Debug, Clone)]
pub struct ReviewRecord {
    pub id: ReviewId,
    pub problem_id: ProblemId,
    pub response: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub problem_id: ProblemId,
    pub response: Option<String>,
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, new_review: NewReview) -> Result<ReviewRecord>;
    async fn list_by_problem_id(&self, problem_id: ProblemId) -> Result<Vec<ReviewRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmReviewRepository {
    db: DatabaseConnection,
}

impl SeaOrmReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: problem_review::Model) -> ReviewRecord {
        ReviewRecord {
            id: ReviewId::new(model.id),
            problem_id: ProblemId::new(model.problem_id),
            response: model.response,
        }
    }
}

#[async_trait]
impl ReviewRepository for SeaOrmReviewRepository {
    async fn create(&self, new_review: NewReview) -> Result<ReviewRecord> {
        let active_model = problem_review::ActiveModel {
            problem_id: Set(new_review.problem_id.into_inner()),
            response: Set(new_review.response),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Self::map_model(model))
    }

    async fn list_by_problem_id(&self, problem_id: ProblemId) -> Result<Vec<ReviewRecord>> {
        let models = problem_review::Entity::find()
            .filter(problem_review::Column::ProblemId.eq(problem_id.into_inner()))
            .order_by_asc(problem_review::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::repository::{
        NewProblem, NewUser, ProblemRepository, SeaOrmProblemRepository, SeaOrmUserRepository,
        UserRepository,
    };
    use shopdesk_core::domain::{ProblemDescription, UserId, Username};

    async fn seed_user(db: &DatabaseConnection) -> UserId {
        SeaOrmUserRepository::new(db.clone())
            .create(NewUser {
                username: Username::new("carol").expect("valid username"),
                password_hash: "$argon2id$stub".to_string(),
            })
            .await
            .expect("create user")
            .id
    }

    async fn seed_problem(
        db: &DatabaseConnection,
        user_id: UserId,
        description: &str,
    ) -> ProblemId {
        SeaOrmProblemRepository::new(db.clone())
            .create(NewProblem {
                user_id,
                description: ProblemDescription::new(description).expect("valid description"),
            })
            .await
            .expect("create problem")
            .id
    }

    #[tokio::test]
    async fn reviews_are_scoped_to_their_problem() {
        let db = db::in_memory().await.expect("in-memory database");
        let carol = seed_user(&db).await;
        let late = seed_problem(&db, carol, "late delivery").await;
        let size = seed_problem(&db, carol, "wrong size").await;
        let repo = SeaOrmReviewRepository::new(db);

        repo.create(NewReview {
            problem_id: late,
            response: Some("courier contacted".to_string()),
        })
        .await
        .expect("create review");
        repo.create(NewReview {
            problem_id: size,
            response: None,
        })
        .await
        .expect("create review");

        let late_reviews = repo.list_by_problem_id(late).await.expect("list");
        let size_reviews = repo.list_by_problem_id(size).await.expect("list");

        assert_eq!(late_reviews.len(), 1);
        assert_eq!(late_reviews[0].response.as_deref(), Some("courier contacted"));
        assert_eq!(size_reviews.len(), 1);
        assert!(size_reviews[0].response.is_none());
    }
}
