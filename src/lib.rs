pub mod api;
pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod orchestrator;
pub mod repl;
pub mod session;
pub mod ui;
