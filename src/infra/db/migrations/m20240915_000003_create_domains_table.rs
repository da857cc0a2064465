//! Migration: Create the domains table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Domains::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Domains::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Domains::DomainName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Domains::RegisteredPeriod)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Domains::RegisteredDate).date().not_null())
                    .col(ColumnDef::new(Domains::ExpiryDate).date().not_null())
                    .col(ColumnDef::new(Domains::DomainPrice).double().not_null())
                    .col(ColumnDef::new(Domains::UserId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_domains_user_id")
                            .from(Domains::Table, Domains::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Domains::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Domains {
    Table,
    Id,
    DomainName,
    RegisteredPeriod,
    RegisteredDate,
    ExpiryDate,
    DomainPrice,
    UserId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
