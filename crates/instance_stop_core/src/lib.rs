//! Shared configuration primitives for the instance stop lambda.
//!
//! This crate owns startup-time configuration parsing and validation.
//! It intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod config;
