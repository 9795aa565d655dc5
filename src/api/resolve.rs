//! Resource resolution: decoded path segments to registry entities.
//!
//! Lookups are exact string matches against names as stored. Each call is a
//! fresh point-in-time read of the registry; nothing is cached between
//! requests.

use crate::error::ApiError;
use robogate_fleet::{Connection, Device, Robot, RobotRegistry};
use std::sync::Arc;

/// Resolve a robot by name.
pub fn robot(registry: &dyn RobotRegistry, name: &str) -> Result<Arc<Robot>, ApiError> {
    registry
        .robot(name)
        .ok_or_else(|| ApiError::RobotNotFound(name.to_string()))
}

/// Resolve a device on a robot. The robot is resolved first; a missing
/// robot is reported before any device lookup happens.
pub fn device(
    registry: &dyn RobotRegistry,
    robot_name: &str,
    device_name: &str,
) -> Result<(Arc<Robot>, Arc<Device>), ApiError> {
    let robot = robot(registry, robot_name)?;
    let device = robot
        .device(device_name)
        .ok_or_else(|| ApiError::DeviceNotFound {
            robot: robot_name.to_string(),
            device: device_name.to_string(),
        })?;
    Ok((robot, device))
}

/// Resolve a connection on a robot.
pub fn connection(
    registry: &dyn RobotRegistry,
    robot_name: &str,
    connection_name: &str,
) -> Result<Connection, ApiError> {
    let robot = robot(registry, robot_name)?;
    robot
        .connection(connection_name)
        .cloned()
        .ok_or_else(|| ApiError::ConnectionNotFound {
            robot: robot_name.to_string(),
            connection: connection_name.to_string(),
        })
}
