// src/lib.rs
pub mod api;
pub mod config;
pub mod form;
pub mod handlers;
pub mod models;
pub mod render;
pub mod shell;
pub mod storage;
