use crate::application::errors::{CommandError, ConfigError};
use crate::domain::entities::{CommandNode, Rejection};
use crate::domain::traits::Sender;
use super::message_service::{MessageService, FAILED_KEY};

/// Outcome of a single dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The action of the node at `path` ran with `args`
    Executed { path: Vec<String>, args: Vec<String> },
    /// Refused at the node at `path`; no action ran
    Rejected { path: Vec<String>, reason: Rejection },
    /// No root command with this name is registered
    Unknown(String),
}

/// Service for registering command trees and dispatching invocations
pub struct CommandService {
    roots: Vec<CommandNode>,
    messages: MessageService,
}

impl CommandService {
    pub fn new(messages: MessageService) -> Self {
        Self {
            roots: Vec::new(),
            messages,
        }
    }

    /// Register a root command; sibling identifiers must be unique throughout the tree
    pub fn register_root(&mut self, command: CommandNode) -> Result<(), ConfigError> {
        if self.roots.iter().any(|r| r.name == command.name) {
            return Err(ConfigError::DuplicateCommand {
                parent: "<root>".to_string(),
                name: command.name,
            });
        }
        command.validate()?;
        tracing::info!("Registered command: {}", command.name);
        self.roots.push(command);
        Ok(())
    }

    pub fn root(&self, name: &str) -> Option<&CommandNode> {
        self.roots.iter().find(|r| r.name == name)
    }

    pub fn commands(&self) -> impl Iterator<Item = &CommandNode> {
        self.roots.iter()
    }

    pub fn messages(&self) -> &MessageService {
        &self.messages
    }

    /// Resolve the deepest matching node for `args` and run its action
    ///
    /// Sender kind and permission are checked at every node on the way down.
    /// A token that matches no child is passed to the current node as an
    /// argument.
    pub fn dispatch(&self, command: &str, sender: &dyn Sender, args: &[String]) -> Dispatch {
        let Some(mut node) = self.root(command) else {
            tracing::warn!("Unknown command: {}", command);
            return Dispatch::Unknown(command.to_string());
        };
        let mut path = vec![node.name.clone()];
        let mut rest = args;

        loop {
            if let Some(reason) = node.gate(sender) {
                tracing::warn!("[{}] /{} rejected: {:?}", sender.name(), path.join(" "), reason);
                match reason {
                    Rejection::WrongSender => self.messages.send_wrong_sender(sender),
                    Rejection::NoPermission => self.messages.send_no_permission(sender),
                }
                return Dispatch::Rejected { path, reason };
            }

            if !node.has_children() {
                break;
            }
            let Some((head, tail)) = rest.split_first() else {
                break;
            };
            match node.child(head) {
                Some(child) => {
                    node = child;
                    path.push(child.name.clone());
                    rest = tail;
                }
                None => break,
            }
        }

        tracing::debug!("[{}] /{} args: {:?}", sender.name(), path.join(" "), rest);
        if let Err(e) = node.run(sender, rest) {
            self.report(node, sender, e);
        }
        Dispatch::Executed {
            path,
            args: rest.to_vec(),
        }
    }

    /// Suggest child identifiers for the last (partial) argument
    pub fn complete(&self, command: &str, sender: &dyn Sender, args: &[String]) -> Vec<String> {
        let Some(mut node) = self.root(command) else {
            return Vec::new();
        };
        let Some((partial, walked)) = args.split_last() else {
            return Vec::new();
        };
        if !node.permits(sender) {
            return Vec::new();
        }
        for token in walked {
            match node.child(token) {
                Some(child) if child.permits(sender) => node = child,
                _ => return Vec::new(),
            }
        }
        node.children
            .iter()
            .filter(|c| c.name.starts_with(partial.as_str()) && c.permits(sender))
            .map(|c| c.name.clone())
            .collect()
    }

    fn report(&self, node: &CommandNode, sender: &dyn Sender, error: CommandError) {
        match error {
            CommandError::Usage => {
                let usage = node.usage.clone().unwrap_or_else(|| format!("/{}", node.name));
                self.messages.send_usage(sender, &usage);
            }
            CommandError::Failed { key, args } => {
                self.messages.send_error(sender, &key, &args);
            }
            CommandError::ExecutionFailed(msg) => {
                tracing::error!("Command '{}' failed: {}", node.name, msg);
                self.messages.send_or(sender, FAILED_KEY, &[msg.as_str()], &msg);
            }
        }
    }
}
