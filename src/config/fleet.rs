//! Fleet definition blocks and startup bootstrap.
//!
//! ```toml
//! [[robots]]
//! name = "Robot 1"
//!
//! [[robots.connections]]
//! name = "Connection 1"
//! adaptor = "loopback"
//!
//! [[robots.devices]]
//! name = "Device 1"
//! driver = "test"
//! connection = "Connection 1"
//!
//! [[robots.commands]]
//! name = "robotTestFunction"
//! template = "hey {robot}, {message}"
//! ```

use super::Config;
use robogate_fleet::{Command, DriverKind, Fleet, FleetError, Robot, RobotRegistry};
use serde::Deserialize;

/// A robot and everything it owns.
#[derive(Debug, Clone, Deserialize)]
pub struct RobotBlock {
    pub name: String,
    #[serde(default)]
    pub connections: Vec<ConnectionBlock>,
    #[serde(default)]
    pub devices: Vec<DeviceBlock>,
    #[serde(default)]
    pub commands: Vec<CommandBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionBlock {
    pub name: String,
    pub adaptor: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceBlock {
    pub name: String,
    pub driver: DriverKind,
    pub connection: Option<String>,
}

/// A command rendered from a `{param}` template.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandBlock {
    pub name: String,
    pub template: String,
}

impl RobotBlock {
    fn build(&self) -> Result<Robot, FleetError> {
        let mut builder = Robot::builder(&self.name);
        for conn in &self.connections {
            builder = builder.connection(&conn.name, &conn.adaptor);
        }
        for device in &self.devices {
            builder = builder.driver_device(&device.name, device.driver, device.connection.as_deref());
        }
        for cmd in &self.commands {
            builder = builder.command(&cmd.name, Command::template(&cmd.template));
        }
        builder.build()
    }
}

/// Build the registry described by `config`.
pub fn build_fleet(config: &Config) -> Result<Fleet, FleetError> {
    let fleet = Fleet::new();
    for cmd in &config.commands {
        fleet
            .commands()
            .add(&cmd.name, Command::template(&cmd.template));
    }
    for block in &config.robots {
        fleet.add_robot(block.build()?)?;
    }
    Ok(fleet)
}
