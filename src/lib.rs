pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod output;
pub mod scanner;
