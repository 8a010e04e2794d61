pub mod api;
pub mod clean;
pub mod cli;
pub mod commands;
pub mod config;
pub mod crop;
pub mod error;
pub mod icon;
pub mod launcher;
pub mod logging;
pub mod logo;
pub mod mask;
pub mod seed;
