//! View models for the lesson pages.
//!
//! Each page owns one of these inside an `RwSignal` and only mutates it
//! through the methods here, so the rules of every demo are plain Rust and
//! can be tested without a browser.

pub mod cluster;
pub mod consistent;
pub mod gauge;
pub mod modulo;
pub mod quiz;
pub mod ui;
pub mod virtual_nodes;
