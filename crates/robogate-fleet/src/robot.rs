//! Robots and their builder.

use crate::command::{Command, CommandSet};
use crate::device::{Connection, Device};
use crate::drivers::DriverKind;
use crate::error::FleetError;
use std::sync::Arc;

/// Top-level managed entity: a name, connections, devices and commands.
///
/// Connections and devices are fixed once built; commands may be added at
/// runtime through [`Robot::add_command`].
#[derive(Debug)]
pub struct Robot {
    name: String,
    connections: Vec<Connection>,
    devices: Vec<Arc<Device>>,
    commands: CommandSet,
}

impl Robot {
    /// Start building a robot called `name`.
    pub fn builder(name: impl Into<String>) -> RobotBuilder {
        RobotBuilder {
            name: name.into(),
            connections: Vec::new(),
            devices: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Robot name, unique within the fleet.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Connections in registration order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Devices in registration order.
    pub fn devices(&self) -> &[Arc<Device>] {
        &self.devices
    }

    /// Find a device by exact name.
    pub fn device(&self, name: &str) -> Option<Arc<Device>> {
        self.devices.iter().find(|d| d.name() == name).cloned()
    }

    /// Find a connection by exact name.
    pub fn connection(&self, name: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.name() == name)
    }

    /// Robot-level commands.
    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    /// Register a robot-level command at runtime.
    pub fn add_command(&self, name: impl Into<String>, command: Command) {
        self.commands.add(name, command);
    }
}

/// Accumulates a robot's parts and validates them in [`RobotBuilder::build`].
#[derive(Debug)]
pub struct RobotBuilder {
    name: String,
    connections: Vec<Connection>,
    devices: Vec<Device>,
    commands: Vec<(String, Command)>,
}

impl RobotBuilder {
    /// Add a connection.
    pub fn connection(mut self, name: impl Into<String>, adaptor: impl Into<String>) -> Self {
        self.connections.push(Connection::new(name, adaptor));
        self
    }

    /// Add a pre-built device.
    pub fn device(mut self, device: Device) -> Self {
        self.devices.push(device);
        self
    }

    /// Add a device wired to one of the built-in drivers.
    pub fn driver_device(
        self,
        name: impl Into<String>,
        driver: DriverKind,
        connection: Option<&str>,
    ) -> Self {
        let device = driver.device(name, connection.map(str::to_string));
        self.device(device)
    }

    /// Add a robot-level command.
    pub fn command(mut self, name: impl Into<String>, command: Command) -> Self {
        self.commands.push((name.into(), command));
        self
    }

    /// Validate names and references, producing the robot.
    pub fn build(self) -> Result<Robot, FleetError> {
        for (i, conn) in self.connections.iter().enumerate() {
            if self.connections[..i].iter().any(|c| c.name() == conn.name()) {
                return Err(FleetError::DuplicateConnection {
                    robot: self.name,
                    connection: conn.name().to_string(),
                });
            }
        }

        for (i, device) in self.devices.iter().enumerate() {
            if self.devices[..i].iter().any(|d| d.name() == device.name()) {
                return Err(FleetError::DuplicateDevice {
                    robot: self.name,
                    device: device.name().to_string(),
                });
            }
            if let Some(wanted) = device.connection()
                && !self.connections.iter().any(|c| c.name() == wanted)
            {
                return Err(FleetError::UnknownConnection {
                    device: device.name().to_string(),
                    connection: wanted.to_string(),
                });
            }
        }

        let commands = CommandSet::new();
        for (name, command) in self.commands {
            commands.add(name, command);
        }

        Ok(Robot {
            name: self.name,
            connections: self.connections,
            devices: self.devices.into_iter().map(Arc::new).collect(),
            commands,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_preserves_device_order() {
        let robot = Robot::builder("r")
            .driver_device("c", DriverKind::Test, None)
            .driver_device("a", DriverKind::Test, None)
            .driver_device("b", DriverKind::Led, None)
            .build()
            .unwrap();
        let names: Vec<_> = robot.devices().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_duplicate_device_rejected() {
        let err = Robot::builder("r")
            .driver_device("Device 1", DriverKind::Test, None)
            .driver_device("Device 1", DriverKind::Led, None)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FleetError::DuplicateDevice {
                robot: "r".to_string(),
                device: "Device 1".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_connection_rejected() {
        let err = Robot::builder("r")
            .connection("bus", "loopback")
            .connection("bus", "serial")
            .build()
            .unwrap_err();
        assert!(matches!(err, FleetError::DuplicateConnection { .. }));
    }

    #[test]
    fn test_device_must_reference_known_connection() {
        let err = Robot::builder("r")
            .connection("bus", "loopback")
            .driver_device("led", DriverKind::Led, Some("usb"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FleetError::UnknownConnection {
                device: "led".to_string(),
                connection: "usb".to_string(),
            }
        );
    }

    #[test]
    fn test_lookups_are_exact() {
        let robot = Robot::builder("r")
            .connection("Connection 1", "loopback")
            .driver_device("Device 1", DriverKind::Test, Some("Connection 1"))
            .build()
            .unwrap();
        assert!(robot.device("Device 1").is_some());
        assert!(robot.device("device 1").is_none());
        assert!(robot.device("Device1").is_none());
        assert_eq!(robot.connection("Connection 1").unwrap().adaptor(), "loopback");
        assert!(robot.connection("connection 1").is_none());
    }

    #[test]
    fn test_runtime_command_registration() {
        let robot = Robot::builder("r")
            .command("first", Command::template("1"))
            .build()
            .unwrap();
        robot.add_command("second", Command::template("2"));
        assert_eq!(robot.commands().names(), vec!["first", "second"]);
    }
}
