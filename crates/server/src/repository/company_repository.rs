use crate::entity::company;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use shopdesk_core::domain::{ApprovalStatus, CompanyId, CompanyName};

#[derive(Debug, Clone)]
pub struct CompanyRecord {
    pub id: CompanyId,
    pub name: String,
    pub status: ApprovalStatus,
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: CompanyName,
    pub password_hash: String,
}

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, new_company: NewCompany) -> Result<CompanyRecord>;
    async fn find_by_id(&self, company_id: CompanyId) -> Result<Option<CompanyRecord>>;
    async fn list_pending(&self) -> Result<Vec<CompanyRecord>>;
    /// `None` when no company has this id.
    async fn approve(&self, company_id: CompanyId) -> Result<Option<CompanyRecord>>;
    /// Permanently removes the row. `false` when no company has this id.
    async fn delete(&self, company_id: CompanyId) -> Result<bool>;
}

#[derive(Clone)]
pub struct SeaOrmCompanyRepository {
    db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_model(model: company::Model) -> CompanyRecord {
        CompanyRecord {
            id: CompanyId::new(model.id),
            name: model.name,
            status: ApprovalStatus::from(model.approved),
        }
    }

    /// A row deleted between the lookup and the update counts as missing.
    fn map_update(
        result: std::result::Result<company::Model, DbErr>,
    ) -> Result<Option<CompanyRecord>> {
        match result {
            Ok(model) => Ok(Some(Self::map_model(model))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn create(&self, new_company: NewCompany) -> Result<CompanyRecord> {
        let active_model = company::ActiveModel {
            name: Set(new_company.name.into_inner()),
            password_hash: Set(new_company.password_hash),
            approved: Set(ApprovalStatus::Pending.into()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Self::map_model(model))
    }

    async fn find_by_id(&self, company_id: CompanyId) -> Result<Option<CompanyRecord>> {
        let model = company::Entity::find_by_id(company_id.into_inner())
            .one(&self.db)
            .await?;

        Ok(model.map(Self::map_model))
    }

    async fn list_pending(&self) -> Result<Vec<CompanyRecord>> {
        let models = company::Entity::find()
            .filter(company::Column::Approved.eq(false))
            .order_by_asc(company::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::map_model).collect())
    }

    async fn approve(&self, company_id: CompanyId) -> Result<Option<CompanyRecord>> {
        let Some(model) = company::Entity::find_by_id(company_id.into_inner())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: company::ActiveModel = model.into();
        active_model.approved = Set(ApprovalStatus::Approved.into());

        Self::map_update(active_model.update(&self.db).await)
    }

    async fn delete(&self, company_id: CompanyId) -> Result<bool> {
        let result = company::Entity::delete_by_id(company_id.into_inner())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
