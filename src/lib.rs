//! Moviediff - compare media-center movie catalogs
//!
//! This library crate exposes the core functionality for integration testing.

pub mod compare;
pub mod config;
pub mod rename;
pub mod report;
