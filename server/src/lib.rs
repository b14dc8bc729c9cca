//! Demo HTTP server exposing query-string filtering over a SQLite users table

pub mod api;
pub mod app;
pub mod core;
pub mod data;
