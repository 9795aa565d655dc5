//! Devices and connections owned by a robot.

use crate::command::{Command, CommandSet};

/// A link between a robot and some hardware or transport.
///
/// Opaque to the gateway beyond its name and adaptor tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    name: String,
    adaptor: String,
}

impl Connection {
    /// Create a connection record.
    pub fn new(name: impl Into<String>, adaptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adaptor: adaptor.into(),
        }
    }

    /// Connection name, unique within its robot.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adaptor tag (e.g. "loopback").
    pub fn adaptor(&self) -> &str {
        &self.adaptor
    }
}

/// A sub-entity of a robot with its own command set.
#[derive(Debug)]
pub struct Device {
    name: String,
    driver: String,
    connection: Option<String>,
    commands: CommandSet,
}

impl Device {
    /// Create a device with an empty command set.
    pub fn new(
        name: impl Into<String>,
        driver: impl Into<String>,
        connection: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            driver: driver.into(),
            connection,
            commands: CommandSet::new(),
        }
    }

    /// Builder-style command registration.
    pub fn with_command(self, name: impl Into<String>, command: Command) -> Self {
        self.commands.add(name, command);
        self
    }

    /// Device name, unique within its robot.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Driver tag.
    pub fn driver(&self) -> &str {
        &self.driver
    }

    /// Name of the connection this device talks through, if any.
    pub fn connection(&self) -> Option<&str> {
        self.connection.as_deref()
    }

    /// Device-level commands.
    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }
}
