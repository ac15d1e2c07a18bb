//! Core library for the plant diagnosis service.
//!
//! The `diagnosis` module holds the knowledge base, the scoring engine, and
//! the service/router wrappers; `config`, `telemetry`, and `error` carry
//! the hosting concerns shared with the api binary.

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod telemetry;
