pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod metrics;
pub mod pong;
pub mod routes;
pub mod service;
pub mod state;
pub mod utils;
