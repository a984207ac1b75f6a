pub mod api;
pub mod cli;
pub mod config;
pub mod data_models;
pub mod error;
pub mod proxy;
pub mod target;
pub mod upstream;
