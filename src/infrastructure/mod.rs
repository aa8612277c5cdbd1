//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Resources: Property files on disk
//! - Adapters: Console sender for the toolkit shell

pub mod config;
pub mod resources;
pub mod adapters;
