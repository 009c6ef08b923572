use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "problem_review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub response: Option<String>,
    pub problem_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_problem::Entity",
        from = "Column::ProblemId",
        to = "super::user_problem::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    UserProblem,
}

impl Related<super::user_problem::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProblem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
