//! SeaORM entities for the accounts service database.

pub mod accounts;
pub mod challenges;
