//! Core types shared across schemacmp facilities
//!
//! This crate provides the canonical field keys and event names used by
//! both the error facility and the logging facility, so that every crate
//! emits structurally identical log events.

pub mod schema;
