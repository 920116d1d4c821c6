pub mod account;
pub mod challenge;
pub mod password;
pub mod profile;
pub mod token;
