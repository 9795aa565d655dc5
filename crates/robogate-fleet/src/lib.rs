//! # robogate-fleet
//!
//! The entity registry behind the robogate gateway: robots, the devices
//! and connections they own, and the named commands each of them exposes.
//!
//! ## Model
//!
//! - A [`Fleet`] owns robots in registration order and implements the
//!   read-only [`RobotRegistry`] contract the gateway consumes.
//! - A [`Robot`] owns ordered [`Connection`]s and [`Device`]s plus a
//!   [`CommandSet`] of robot-level commands.
//! - A [`Device`] carries a driver tag and its own [`CommandSet`].
//! - A [`Command`] is a statically typed callable taking a JSON parameter
//!   bundle ([`Params`]) and returning a JSON value or a [`CommandError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use robogate_fleet::{Command, DriverKind, Fleet, Params, Robot, RobotRegistry};
//! use serde_json::json;
//!
//! let robot = Robot::builder("rover")
//!     .connection("loop", "loopback")
//!     .driver_device("led", DriverKind::Led, Some("loop"))
//!     .command("greet", Command::template("hey {robot}, {message}"))
//!     .build()
//!     .unwrap();
//!
//! let fleet = Fleet::new();
//! fleet.add_robot(robot).unwrap();
//!
//! let rover = fleet.robot("rover").unwrap();
//! let mut params = Params::new();
//! params.insert("robot".into(), json!("rover"));
//! params.insert("message".into(), json!("hi"));
//! let greet = rover.commands().get("greet").unwrap();
//! assert_eq!(greet.call(params).unwrap(), json!("hey rover, hi"));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod device;
pub mod drivers;
pub mod error;
pub mod fleet;
pub mod robot;

pub use command::{Command, CommandError, CommandSet, Params};
pub use device::{Connection, Device};
pub use drivers::DriverKind;
pub use error::FleetError;
pub use fleet::{Fleet, RobotRegistry};
pub use robot::{Robot, RobotBuilder};
