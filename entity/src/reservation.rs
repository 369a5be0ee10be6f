use sea_orm::entity::prelude::*;

/// A booking of one catway, referenced by its number rather than its id.
///
/// Reservations are removed explicitly when their catway is deleted, so there is
/// no foreign key relation declared here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub berth_number: i32,
    pub client_name: String,
    pub boat_name: String,
    pub check_in: DateTimeUtc,
    pub check_out: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
