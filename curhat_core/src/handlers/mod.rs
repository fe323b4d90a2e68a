//! HTTP handlers

pub mod curhat;
pub mod health;
pub mod metrics;
pub mod routes;
