//! Asteroid impact calculation service: closed-form models of orbital
//! position, impact consequences and deflection strategies, exposed as a
//! small JSON API for visualization clients.
pub mod config;
pub mod constants;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
