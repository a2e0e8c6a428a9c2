// src/lib.rs

pub mod api;
pub mod classifier;
pub mod config;
pub mod gateway;
pub mod state;
pub mod store;
