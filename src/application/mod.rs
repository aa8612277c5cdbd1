//! Application layer - Use cases built on the domain types
//!
//! This layer contains:
//! - Errors: Configuration, parse and command errors
//! - Messaging: Property parsing, template store, locale resolution, rendering
//! - Services: Command dispatch and sender feedback

pub mod errors;
pub mod messaging;
pub mod services;
