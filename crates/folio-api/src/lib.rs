//! Folio API — library crate for the portfolio site backend.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `folio-e2e-tests`) can access internal types like `AppState`,
//! `build_router`, and `ProcessBridge`.

pub mod assistant;
pub mod bridge;
pub mod catalog;
pub mod channel;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
