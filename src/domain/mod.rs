//! Domain layer - Core types with no knowledge of files or terminals
//!
//! This layer contains:
//! - Entities: Colors, locale codes, styled text, command nodes
//! - Traits: The sender abstraction supplied by the host

pub mod entities;
pub mod traits;
