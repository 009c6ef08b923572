use crate::entity::admin_user;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder};
use shopdesk_core::domain::{AdminUserId, Username};

#[derive(Debug, Clone)]
pub struct AdminRecord {
    pub id: AdminUserId,
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub username: Username,
    pub password_hash: String,
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create(&self, new_admin: NewAdmin) -> Result<AdminRecord>;
    async fn list(&self) -> Result<Vec<AdminRecord>>;
}

#[derive(Clone)]
pub struct SeaOrmAdminRepository {
    db: DatabaseConnection,
}

impl SeaOrmAdminRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: admin_user::Model) -> AdminRecord {
        AdminRecord {
            id: AdminUserId::new(model.id),
            username: model.username,
        }
    }
}

#[async_trait]
impl AdminRepository for SeaOrmAdminRepository {
    async fn create(&self, new_admin: NewAdmin) -> Result<AdminRecord> {
        let active_model = admin_user::ActiveModel {
            username: Set(new_admin.username.into_inner()),
            password_hash: Set(new_admin.password_hash),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Self::map_model(model))
    }

    async fn list(&self) -> Result<Vec<AdminRecord>> {
        let models = admin_user::Entity::find()
            .order_by_asc(admin_user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }
}
