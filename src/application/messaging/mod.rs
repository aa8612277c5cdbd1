//! Message localization - Template loading, locale resolution, rendering

pub mod markup;
pub mod parser;
pub mod renderer;
pub mod resolver;
pub mod store;

pub use parser::parse_properties;
pub use renderer::MessageRenderer;
pub use resolver::LocaleResolver;
pub use store::{Bundle, TemplateStore};
