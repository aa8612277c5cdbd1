//! Domain entities - Core business objects with no external dependencies

pub mod color;
pub mod locale;
pub mod message;
pub mod command;

pub use color::NamedColor;
pub use locale::LocaleCode;
pub use message::{Segment, StyledText};
pub use command::{CommandAction, CommandNode, CommandResult, Rejection};
