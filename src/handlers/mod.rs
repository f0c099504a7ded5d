pub mod account;
pub mod health;
