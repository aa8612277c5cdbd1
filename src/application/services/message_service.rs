use std::sync::Arc;

use crate::application::messaging::MessageRenderer;
use crate::domain::entities::{NamedColor, StyledText};
use crate::domain::traits::Sender;

pub const WRONG_SENDER_KEY: &str = "command.wrong_sender";
pub const NO_PERMISSION_KEY: &str = "command.no_permission";
pub const USAGE_KEY: &str = "command.usage";
pub const FAILED_KEY: &str = "command.failed";

const WRONG_SENDER_TEXT: &str = "You have to be a player to use this command!";
const NO_PERMISSION_TEXT: &str = "You don't have the permission to use this command!";

/// Service for sending feedback messages to senders
///
/// Without a renderer, or when a key renders to nothing, built-in English
/// texts are sent in dark red instead.
#[derive(Clone, Default)]
pub struct MessageService {
    renderer: Option<Arc<MessageRenderer>>,
}

impl MessageService {
    pub fn new(renderer: Arc<MessageRenderer>) -> Self {
        Self {
            renderer: Some(renderer),
        }
    }

    /// Service without localization
    pub fn unlocalized() -> Self {
        Self::default()
    }

    pub fn renderer(&self) -> Option<&MessageRenderer> {
        self.renderer.as_deref()
    }

    /// Render `key` in the sender's locale
    pub fn localize<S: AsRef<str>>(&self, sender: &dyn Sender, key: &str, args: &[S]) -> Option<StyledText> {
        let renderer = self.renderer.as_ref()?;
        let text = renderer.render(key, sender.locale(), args);
        (!text.is_empty()).then_some(text)
    }

    /// Send a localized message, or `fallback` when it cannot be rendered
    pub fn send_or<S: AsRef<str>>(&self, sender: &dyn Sender, key: &str, args: &[S], fallback: &str) {
        let text = self
            .localize(sender, key, args)
            .unwrap_or_else(|| StyledText::colored(NamedColor::DarkRed, fallback));
        sender.deliver(text);
    }

    /// Send a localized message; the key itself is the fallback text
    pub fn send<S: AsRef<str>>(&self, sender: &dyn Sender, key: &str, args: &[S]) {
        self.send_or(sender, key, args, key);
    }

    pub fn send_wrong_sender(&self, sender: &dyn Sender) {
        let none: &[&str] = &[];
        self.send_or(sender, WRONG_SENDER_KEY, none, WRONG_SENDER_TEXT);
    }

    pub fn send_no_permission(&self, sender: &dyn Sender) {
        let none: &[&str] = &[];
        self.send_or(sender, NO_PERMISSION_KEY, none, NO_PERMISSION_TEXT);
    }

    pub fn send_usage(&self, sender: &dyn Sender, usage: &str) {
        self.send_or(sender, USAGE_KEY, &[usage], &format!("Usage: {}", usage));
    }

    /// Send an error message by key with arguments
    pub fn send_error(&self, sender: &dyn Sender, key: &str, args: &[String]) {
        self.send(sender, key, args);
    }
}
