pub mod auth;
pub mod components;
pub mod config;
pub mod controllers;
pub mod crypto;
pub mod db_ops;
pub mod errors;
pub mod extractors;
pub mod htmx;
pub mod lang;
pub mod middleware;
pub mod models;
pub mod pw;
pub mod routes;
pub mod session;
