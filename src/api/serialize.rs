//! JSON shapes for registry entities.
//!
//! Summaries are built from a point-in-time read of each entity. Lists keep
//! registration order; command names are never sorted.

use robogate_fleet::{Connection, Device, Robot};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RobotSummary {
    pub name: String,
    pub commands: Vec<String>,
    pub connections: Vec<ConnectionSummary>,
    pub devices: Vec<DeviceSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviceSummary {
    pub name: String,
    pub driver: String,
    pub connection: Option<String>,
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectionSummary {
    pub name: String,
    pub adaptor: String,
}

impl From<&Robot> for RobotSummary {
    fn from(robot: &Robot) -> Self {
        Self {
            name: robot.name().to_string(),
            commands: robot.commands().names(),
            connections: robot.connections().iter().map(ConnectionSummary::from).collect(),
            devices: robot
                .devices()
                .iter()
                .map(|d| DeviceSummary::from(d.as_ref()))
                .collect(),
        }
    }
}

impl From<&Device> for DeviceSummary {
    fn from(device: &Device) -> Self {
        Self {
            name: device.name().to_string(),
            driver: device.driver().to_string(),
            connection: device.connection().map(str::to_string),
            commands: device.commands().names(),
        }
    }
}

impl From<&Connection> for ConnectionSummary {
    fn from(conn: &Connection) -> Self {
        Self {
            name: conn.name().to_string(),
            adaptor: conn.adaptor().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robogate_fleet::{Command, DriverKind};
    use serde_json::json;

    #[test]
    fn test_robot_summary_shape() {
        let robot = Robot::builder("Robot 1")
            .connection("Connection 1", "loopback")
            .driver_device("Device 1", DriverKind::Test, Some("Connection 1"))
            .command("robotTestFunction", Command::template("hey"))
            .build()
            .unwrap();

        let value = serde_json::to_value(RobotSummary::from(&robot)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Robot 1",
                "commands": ["robotTestFunction"],
                "connections": [{"name": "Connection 1", "adaptor": "loopback"}],
                "devices": [{
                    "name": "Device 1",
                    "driver": "test",
                    "connection": "Connection 1",
                    "commands": ["TestDriverCommand", "DriverCommand"],
                }],
            })
        );
    }

    #[test]
    fn test_unconnected_device_serializes_null_connection() {
        let device = DriverKind::Led.device("Light", None);
        let value = serde_json::to_value(DeviceSummary::from(&device)).unwrap();
        assert_eq!(value["connection"], json!(null));
        assert_eq!(value["driver"], json!("led"));
    }
}
