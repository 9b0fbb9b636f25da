//! Core types shared across depsnap facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error and logging facilities, so that structured log events carry the
//! same field keys regardless of which layer emits them.

pub mod schema;
