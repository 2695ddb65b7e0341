#![doc = "The `taskvault` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, authentication and authorization"]
#![doc = "mechanisms, persistence layer, routing configuration, and error handling for"]
#![doc = "the TaskVault application. It is used by the main binary (`main.rs`) to"]
#![doc = "construct and run the HTTP server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
