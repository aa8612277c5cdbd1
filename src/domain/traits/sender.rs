use crate::domain::entities::StyledText;

/// Sender trait - the host's view of whoever invoked a command
pub trait Sender {
    /// Display name, used in logs
    fn name(&self) -> &str;

    /// Interactive senders are players; the console is not
    fn is_interactive(&self) -> bool;

    /// Check an opaque permission string against the host's authorization facility
    fn has_permission(&self, permission: &str) -> bool;

    /// Locale requested by the sender, if any
    fn locale(&self) -> Option<&str> {
        None
    }

    /// Hand a rendered message to the host's output layer
    fn deliver(&self, text: StyledText);
}
