//! # Arch Compass
//!
//! Helps choose a software architecture pattern (monolith, microservices,
//! serverless, event-driven, layered, hexagonal) with a weighted
//! multi-criteria comparison.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌────────────────────┐   ┌───────────────┐
//! │ Catalog file │──▶│  SQLite `patterns`  │──▶│  Core engine  │
//! │ / built-ins  │   │   (SqliteStore)     │   │ score · rank  │
//! └──────────────┘   └────────────────────┘   │ explain       │
//!                                             └──────┬────────┘
//!                                  ┌─────────────────┤
//!                                  ▼                 ▼
//!                            ┌──────────┐      ┌──────────┐
//!                            │   CLI    │      │   HTTP   │
//!                            │(compass) │      │  (Axum)  │
//!                            └──────────┘      └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! compass init                               # create database
//! compass seed                               # load the built-in patterns
//! compass compare monolithic microservices --team-size small --budget low
//! compass serve                              # start HTTP server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`db`] | SQLite connection pool with WAL mode |
//! | [`migrate`] | Database schema migrations (idempotent) |
//! | [`sqlite_store`] | `PatternStore` over SQLite |
//! | [`import`] | Catalog file import and built-in seeding |
//! | [`patterns`] | Pattern listing, detail, and criteria commands |
//! | [`compare`] | Comparison command |
//! | [`server`] | JSON HTTP server (Axum) with CORS |
//!
//! The scoring engine itself lives in the `arch-compass-core` crate,
//! re-exported here as [`engine`].

pub mod compare;
pub mod config;
pub mod db;
pub mod import;
pub mod migrate;
pub mod patterns;
pub mod server;
pub mod sqlite_store;

pub use arch_compass_core as engine;
pub use arch_compass_core::store;
