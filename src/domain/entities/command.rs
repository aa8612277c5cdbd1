use crate::application::errors::{CommandError, ConfigError};
use crate::domain::traits::Sender;
use std::collections::HashSet;
use std::fmt;

/// Result of running a command action
pub type CommandResult = Result<(), CommandError>;

/// Command action: receives the sender and the arguments left after subcommand resolution
pub type CommandAction = Box<dyn Fn(&dyn Sender, &[String]) -> CommandResult + Send + Sync>;

/// Why an invocation was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Console sender on a node that is not console-allowed
    WrongSender,
    /// Sender lacks the node's permission
    NoPermission,
}

/// A command or subcommand in a command tree
pub struct CommandNode {
    pub name: String,
    pub description: Option<String>,
    pub usage: Option<String>,
    pub permission: Option<String>,
    pub allow_console: bool,
    pub children: Vec<CommandNode>,
    action: CommandAction,
}

impl CommandNode {
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&dyn Sender, &[String]) -> CommandResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: None,
            usage: None,
            permission: None,
            allow_console: false,
            children: Vec::new(),
            action: Box::new(action),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Allow non-interactive senders (the console) to run this node
    pub fn allow_console(mut self) -> Self {
        self.allow_console = true;
        self
    }

    pub fn with_child(mut self, child: CommandNode) -> Self {
        self.children.push(child);
        self
    }

    /// First child with exactly this identifier, in registration order
    pub fn child(&self, name: &str) -> Option<&CommandNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Sender-kind gate first, then the permission gate
    pub fn gate(&self, sender: &dyn Sender) -> Option<Rejection> {
        if !self.allow_console && !sender.is_interactive() {
            return Some(Rejection::WrongSender);
        }
        match self.permission.as_deref() {
            Some(permission) if !sender.has_permission(permission) => Some(Rejection::NoPermission),
            _ => None,
        }
    }

    pub fn permits(&self, sender: &dyn Sender) -> bool {
        self.gate(sender).is_none()
    }

    pub fn run(&self, sender: &dyn Sender, args: &[String]) -> CommandResult {
        (self.action)(sender, args)
    }

    /// Check that identifiers are unique among siblings, for the whole subtree
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for child in &self.children {
            if !seen.insert(child.name.as_str()) {
                return Err(ConfigError::DuplicateCommand {
                    parent: self.name.clone(),
                    name: child.name.clone(),
                });
            }
            child.validate()?;
        }
        Ok(())
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("permission", &self.permission)
            .field("allow_console", &self.allow_console)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
