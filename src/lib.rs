pub mod auth;
pub mod config;
pub mod db;
pub mod enums;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod templates_structs;
pub mod tenancy;
