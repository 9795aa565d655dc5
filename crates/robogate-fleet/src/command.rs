//! Named commands and per-entity command sets.
//!
//! A [`Command`] wraps a closure with the fixed signature
//! `Fn(Params) -> Result<Value, CommandError>`. Commands are registered by
//! name into a [`CommandSet`], which remembers registration order so that
//! capability listings are stable for clients.

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Parameter bundle passed to every command: parameter name to JSON value.
pub type Params = Map<String, Value>;

type CommandFn = dyn Fn(Params) -> Result<Value, CommandError> + Send + Sync;

/// Errors a command may return from its own execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A parameter the command cannot run without was absent.
    #[error("missing parameter: {0}")]
    MissingParam(String),

    /// A parameter was present but unusable.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParam {
        /// Parameter name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The command ran and failed.
    #[error("{0}")]
    Failed(String),
}

/// A named, invocable unit bound to one robot, device or the fleet itself.
///
/// Cloning is cheap; clones share the same callable.
#[derive(Clone)]
pub struct Command {
    inner: Arc<CommandFn>,
}

impl Command {
    /// Wrap a closure as a command.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Params) -> Result<Value, CommandError> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// A command that renders `template`, substituting `{key}` with the
    /// value of `key` from the parameter bundle.
    ///
    /// Strings are inserted as-is, other values as compact JSON, and absent
    /// or null keys as the empty string. The result is always a JSON string.
    pub fn template(template: impl Into<String>) -> Self {
        let template = template.into();
        Self::new(move |params| Ok(Value::String(render_template(&template, &params))))
    }

    /// Invoke the command with a parameter bundle.
    pub fn call(&self, params: Params) -> Result<Value, CommandError> {
        (self.inner)(params)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command").finish_non_exhaustive()
    }
}

/// Ordered, thread-safe mapping from command name to [`Command`].
///
/// Names are case-sensitive. Re-registering a name replaces the callable
/// but keeps the position of the first registration.
#[derive(Debug, Default)]
pub struct CommandSet {
    entries: RwLock<Vec<(String, Command)>>,
}

impl CommandSet {
    /// Create an empty command set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `command` under `name`.
    pub fn add(&self, name: impl Into<String>, command: Command) {
        let name = name.into();
        let mut entries = self.entries.write();
        match entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = command,
            None => entries.push((name, command)),
        }
    }

    /// Look up a command by exact name.
    pub fn get(&self, name: &str) -> Option<Command> {
        self.entries
            .read()
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, command)| command.clone())
    }

    /// Registered command names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .read()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Fetch a required parameter.
pub fn require<'a>(params: &'a Params, name: &str) -> Result<&'a Value, CommandError> {
    params
        .get(name)
        .ok_or_else(|| CommandError::MissingParam(name.to_string()))
}

fn render_template(template: &str, params: &Params) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            // Unbalanced brace: keep the remainder literally.
            out.push_str(&rest[open..]);
            return out;
        };
        match params.get(&after[..close]) {
            Some(Value::String(s)) => out.push_str(s),
            Some(Value::Null) | None => {}
            Some(other) => out.push_str(&other.to_string()),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
