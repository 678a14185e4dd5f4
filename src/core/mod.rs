//! Configuration and data model shared by every handler

pub mod config;
pub mod models;
