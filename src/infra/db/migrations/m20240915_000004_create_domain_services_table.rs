//! Migration: Create the domain_services attachment table.
//!
//! Deleting a domain cascades to its attachments; the price columns are
//! snapshots and carry no reference back to the live prices.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DomainServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DomainServices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DomainServices::DomainId).integer().not_null())
                    .col(
                        ColumnDef::new(DomainServices::ServiceId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DomainServices::DomainPrice)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DomainServices::ServicePrice)
                            .double()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_domain_services_domain_id")
                            .from(DomainServices::Table, DomainServices::DomainId)
                            .to(Domains::Table, Domains::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_domain_services_service_id")
                            .from(DomainServices::Table, DomainServices::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DomainServices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DomainServices {
    Table,
    Id,
    DomainId,
    ServiceId,
    DomainPrice,
    ServicePrice,
}

#[derive(Iden)]
enum Domains {
    Table,
    Id,
}

#[derive(Iden)]
enum Services {
    Table,
    Id,
}
