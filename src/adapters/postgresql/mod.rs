//! PostgreSQL database integration
//!
//! This module loads catalog snapshots into PostgreSQL: one table per run
//! plus a row in the shared import log.

pub mod adapter;
pub mod client;
pub mod sql;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
