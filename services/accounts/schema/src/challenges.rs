use sea_orm::entity::prelude::*;

/// Live one-time-passcode challenge for an (email, purpose) pair.
/// At most one row per pair; re-issuing overwrites in place.
/// No foreign key to accounts: a challenge may precede registration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "challenges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub purpose: String,
    pub passcode: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub verified: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
