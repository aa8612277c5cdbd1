//! Command and messaging toolkit for server plugins
//!
//! Localized, color-styled messages rendered from property-file templates,
//! and hierarchical command trees dispatched with sender and permission checks.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{CommandError, ConfigError};
pub use application::messaging::{MessageRenderer, TemplateStore};
pub use application::services::{CommandService, Dispatch, MessageService};
pub use domain::entities::{CommandNode, LocaleCode, NamedColor, Rejection, Segment, StyledText};
pub use domain::traits::Sender;
