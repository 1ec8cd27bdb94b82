#![doc = "The `taskkeep` library crate."]
#![doc = ""]
#![doc = "A multi-tenant task tracking API. Users register and log in to obtain a bearer"]
#![doc = "token; every task operation is scoped to the user proven by that token."]
#![doc = "The binary (`main.rs`) only loads configuration and starts the server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use crate::error::AppError;
