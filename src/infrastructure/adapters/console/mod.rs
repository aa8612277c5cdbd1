//! Console sender for the interactive toolkit shell

use std::collections::HashSet;
use std::io::Write;

use crate::domain::entities::StyledText;
use crate::domain::traits::Sender;

/// Sender writing delivered messages to stdout
///
/// By default it acts as the server console: non-interactive, holding every
/// permission. `as_player` switches to an interactive sender with an explicit
/// permission set.
pub struct ConsoleSender {
    name: String,
    interactive: bool,
    permissions: Option<HashSet<String>>,
    locale: Option<String>,
    color: bool,
}

impl ConsoleSender {
    pub fn new() -> Self {
        Self {
            name: "CONSOLE".to_string(),
            interactive: false,
            permissions: None,
            locale: None,
            color: true,
        }
    }

    pub fn as_player(mut self, name: impl Into<String>, permissions: Vec<String>) -> Self {
        self.name = name.into();
        self.interactive = true;
        self.permissions = Some(permissions.into_iter().collect());
        self
    }

    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Text as printed on the terminal
    pub fn format(&self, text: &StyledText) -> String {
        if self.color {
            text.to_ansi()
        } else {
            text.to_string()
        }
    }

    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        let _ = std::io::stdout().flush();
        let mut input = String::new();
        match std::io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(input.trim_end_matches(['\n', '\r']).to_string()),
        }
    }
}

impl Default for ConsoleSender {
    fn default() -> Self {
        Self::new()
    }
}

impl Sender for ConsoleSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .as_ref()
            .map_or(true, |perms| perms.contains(permission))
    }

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    fn deliver(&self, text: StyledText) {
        println!("{}", self.format(&text));
    }
}
