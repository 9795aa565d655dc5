//! Registry construction errors.

use thiserror::Error;

/// Errors raised while building or mutating the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    /// A robot with this name is already registered.
    #[error("robot already registered: {0}")]
    DuplicateRobot(String),

    /// Two devices on one robot share a name.
    #[error("robot {robot} has duplicate device: {device}")]
    DuplicateDevice {
        /// Owning robot.
        robot: String,
        /// Repeated device name.
        device: String,
    },

    /// Two connections on one robot share a name.
    #[error("robot {robot} has duplicate connection: {connection}")]
    DuplicateConnection {
        /// Owning robot.
        robot: String,
        /// Repeated connection name.
        connection: String,
    },

    /// A device references a connection its robot does not own.
    #[error("device {device} references unknown connection: {connection}")]
    UnknownConnection {
        /// Offending device.
        device: String,
        /// Connection it asked for.
        connection: String,
    },

    /// A driver tag that no built-in driver answers to.
    #[error("unknown driver: {0}")]
    UnknownDriver(String),
}
