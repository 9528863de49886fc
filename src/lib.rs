pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;
