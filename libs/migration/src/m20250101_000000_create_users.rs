use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::FirstName))
                    .col(string(Users::LastName))
                    .col(string_uniq(Users::Email))
                    .col(date(Users::DateOfBirth))
                    .col(string_null(Users::Address))
                    .col(string_null(Users::PhoneNumber))
                    .to_owned(),
            )
            .await?;

        // Birthday range queries filter on this column
        manager
            .create_index(
                Index::create()
                    .name("idx_users_date_of_birth")
                    .table(Users::Table)
                    .col(Users::DateOfBirth)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    DateOfBirth,
    Address,
    PhoneNumber,
}
