//! Tracing initialization for embedders and tests.
//!
//! The crate instruments its hot paths with `tracing` spans and events; this
//! module wires up a subscriber for hosts that do not install their own.

mod init;

pub use init::init_tracing;
