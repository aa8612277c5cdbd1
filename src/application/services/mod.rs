//! Application services - Command dispatch and sender feedback

pub mod command_service;
pub mod message_service;

pub use command_service::{CommandService, Dispatch};
pub use crate::domain::entities::Rejection;
pub use message_service::MessageService;
