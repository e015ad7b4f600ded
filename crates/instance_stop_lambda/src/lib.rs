//! AWS-oriented adapter and handler for the instance stop lambda.
//!
//! This crate owns runtime integration details (the Lambda entry point and
//! the EC2 compute adapter seam); configuration primitives live in
//! `instance_stop_core`.

pub mod adapters;
pub mod handlers;
