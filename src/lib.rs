pub mod app;
pub mod config;
pub mod consts;
pub mod errors;
pub mod gemini_client;
pub mod handlers;
pub mod links;
pub mod models;
pub mod prompt;
pub mod service;
