//! Domain-service attachment database entity for SeaORM.
//!
//! The price columns are snapshots written once at attach time; nothing
//! in the application updates this table after insertion.

use sea_orm::entity::prelude::*;

use crate::domain::Attachment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "domain_services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub domain_id: i32,
    pub service_id: i32,
    pub domain_price: f64,
    pub service_price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::domain::Entity",
        from = "Column::DomainId",
        to = "super::domain::Column::Id"
    )]
    Domain,
    #[sea_orm(
        belongs_to = "super::service::Entity",
        from = "Column::ServiceId",
        to = "super::service::Column::Id"
    )]
    Service,
}

impl Related<super::domain::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Domain.def()
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Attachment {
    fn from(model: Model) -> Self {
        Attachment {
            id: model.id,
            domain_id: model.domain_id,
            service_id: model.service_id,
            domain_price: model.domain_price,
            service_price: model.service_price,
        }
    }
}
