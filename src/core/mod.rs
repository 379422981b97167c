//! Core translation engine module

pub mod codes;
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod handler;
pub mod language;
pub mod models;
pub mod selector;
pub mod transport;
