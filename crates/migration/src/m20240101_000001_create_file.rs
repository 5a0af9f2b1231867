//! Create `file` table.
//!
//! Holds exactly one row; the CHECK pins the primary key to 1.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(File::Table)
                    .if_not_exists()
                    .col(
                        integer(File::Id)
                            .primary_key()
                            .check(Expr::col(File::Id).eq(1)),
                    )
                    .col(text(File::Content).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(File::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum File { Table, Id, Content }
