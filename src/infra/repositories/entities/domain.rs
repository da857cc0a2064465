//! Domain database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Domain;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "domains")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub domain_name: String,
    pub registered_period: i32,
    pub registered_date: Date,
    pub expiry_date: Date,
    pub domain_price: f64,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::domain_service::Entity")]
    DomainServices,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::domain_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DomainServices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Domain {
    fn from(model: Model) -> Self {
        Domain {
            id: model.id,
            domain_name: model.domain_name,
            registered_period: model.registered_period,
            registered_date: model.registered_date,
            expiry_date: model.expiry_date,
            domain_price: model.domain_price,
            user_id: model.user_id,
        }
    }
}
