use crate::entity::{user, user_problem};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use shopdesk_core::domain::{ProblemDescription, ProblemId, UserId};

#[derive(Debug, Clone)]
pub struct ProblemRecord {
    pub id: ProblemId,
    pub user_id: UserId,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ProblemWithAuthor {
    pub id: ProblemId,
    pub user_id: UserId,
    pub username: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewProblem {
    pub user_id: UserId,
    pub description: ProblemDescription,
}

#[derive(Debug, FromQueryResult)]
struct ProblemWithAuthorRow {
    id: i32,
    user_id: i32,
    username: String,
    description: String,
}

#[async_trait]
pub trait ProblemRepository: Send + Sync {
    async fn create(&self, new_problem: NewProblem) -> Result<ProblemRecord>;
    async fn find_by_id(&self, problem_id: ProblemId) -> Result<Option<ProblemRecord>>;
    async fn list_by_user_id(&self, user_id: UserId) -> Result<Vec<ProblemRecord>>;
    async fn list_with_authors(&self) -> Result<Vec<ProblemWithAuthor>>;
}

#[derive(Clone)]
pub struct SeaOrmProblemRepository {
    db: DatabaseConnection,
}

impl SeaOrmProblemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: user_problem::Model) -> ProblemRecord {
        ProblemRecord {
            id: ProblemId::new(model.id),
            user_id: UserId::new(model.user_id),
            description: model.description,
        }
    }

    fn map_row(row: ProblemWithAuthorRow) -> ProblemWithAuthor {
        ProblemWithAuthor {
            id: ProblemId::new(row.id),
            user_id: UserId::new(row.user_id),
            username: row.username,
            description: row.description,
        }
    }
}

#[async_trait]
impl ProblemRepository for SeaOrmProblemRepository {
    async fn create(&self, new_problem: NewProblem) -> Result<ProblemRecord> {
        let active_model = user_problem::ActiveModel {
            user_id: Set(new_problem.user_id.into_inner()),
            description: Set(new_problem.description.into_inner()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Self::map_model(model))
    }

    async fn find_by_id(&self, problem_id: ProblemId) -> Result<Option<ProblemRecord>> {
        let model = user_problem::Entity::find_by_id(problem_id.into_inner())
            .one(&self.db)
            .await?;

        Ok(model.map(Self::map_model))
    }

    async fn list_by_user_id(&self, user_id: UserId) -> Result<Vec<ProblemRecord>> {
        let models = user_problem::Entity::find()
            .filter(user_problem::Column::UserId.eq(user_id.into_inner()))
            .order_by_asc(user_problem::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn list_with_authors(&self) -> Result<Vec<ProblemWithAuthor>> {
        let rows = user_problem::Entity::find()
            .select_only()
            .column(user_problem::Column::Id)
            .column(user_problem::Column::UserId)
            .column(user_problem::Column::Description)
            .column_as(user::Column::Username, "username")
            .join(JoinType::InnerJoin, user_problem::Relation::User.def())
            .order_by_asc(user_problem::Column::Id)
            .into_model::<ProblemWithAuthorRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Self::map_row).collect())
    }
}
