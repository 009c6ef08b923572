use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(pk_auto(Company::Id))
                    .col(string_len_uniq(Company::Name, 100))
                    .col(string_len(Company::PasswordHash, 128))
                    .col(boolean(Company::Approved).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AdminUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminUser::Id))
                    .col(string_len_uniq(AdminUser::Username, 100))
                    .col(string_len(AdminUser::PasswordHash, 128))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len_uniq(User::Username, 100))
                    .col(string_len(User::PasswordHash, 128))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserProblem::Table)
                    .if_not_exists()
                    .col(pk_auto(UserProblem::Id))
                    .col(text(UserProblem::Description))
                    .col(integer(UserProblem::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_problem-user_id")
                            .from(UserProblem::Table, UserProblem::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProblemReview::Table)
                    .if_not_exists()
                    .col(pk_auto(ProblemReview::Id))
                    .col(text_null(ProblemReview::Response))
                    .col(integer(ProblemReview::ProblemId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-problem_review-problem_id")
                            .from(ProblemReview::Table, ProblemReview::ProblemId)
                            .to(UserProblem::Table, UserProblem::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Pending companies are listed on every admin dashboard load.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_company_approved")
                    .table(Company::Table)
                    .col(Company::Approved)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_problem_user_id")
                    .table(UserProblem::Table)
                    .col(UserProblem::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_problem_review_problem_id")
                    .table(ProblemReview::Table)
                    .col(ProblemReview::ProblemId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProblemReview::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserProblem::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AdminUser::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
    Name,
    PasswordHash,
    Approved,
}

#[derive(DeriveIden)]
enum AdminUser {
    Table,
    Id,
    Username,
    PasswordHash,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Username,
    PasswordHash,
}

#[derive(DeriveIden)]
enum UserProblem {
    Table,
    Id,
    Description,
    UserId,
}

#[derive(DeriveIden)]
enum ProblemReview {
    Table,
    Id,
    Response,
    ProblemId,
}
