pub mod configuration;
pub mod database;
pub mod handlers;
pub mod models;
pub mod requests;
pub mod routes;
pub mod utils;
