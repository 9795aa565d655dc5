//! The robot registry.

use crate::command::CommandSet;
use crate::error::FleetError;
use crate::robot::Robot;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// Read contract the gateway consumes.
///
/// Implementations must tolerate reads racing with mutation elsewhere.
/// Returned robots are point-in-time snapshots; callers must not hold them
/// beyond the request that fetched them.
pub trait RobotRegistry: Send + Sync {
    /// All robots, in registration order.
    fn robots(&self) -> Vec<Arc<Robot>>;

    /// Look up a robot by exact name.
    fn robot(&self, name: &str) -> Option<Arc<Robot>>;

    /// Fleet-level commands not bound to any robot.
    fn commands(&self) -> &CommandSet;
}

/// In-memory registry owning robots in registration order.
#[derive(Debug, Default)]
pub struct Fleet {
    robots: RwLock<Vec<Arc<Robot>>>,
    commands: CommandSet,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a robot. Names must be unique.
    pub fn add_robot(&self, robot: Robot) -> Result<Arc<Robot>, FleetError> {
        let mut robots = self.robots.write();
        if robots.iter().any(|r| r.name() == robot.name()) {
            return Err(FleetError::DuplicateRobot(robot.name().to_string()));
        }
        let robot = Arc::new(robot);
        robots.push(Arc::clone(&robot));
        info!(
            robot = %robot.name(),
            devices = robot.devices().len(),
            commands = robot.commands().len(),
            "Robot registered"
        );
        Ok(robot)
    }

    /// Unregister a robot, returning it if it was present.
    pub fn remove_robot(&self, name: &str) -> Option<Arc<Robot>> {
        let mut robots = self.robots.write();
        let index = robots.iter().position(|r| r.name() == name)?;
        let robot = robots.remove(index);
        info!(robot = %name, "Robot removed");
        Some(robot)
    }

    /// Number of registered robots.
    pub fn len(&self) -> usize {
        self.robots.read().len()
    }

    /// Whether the fleet has no robots.
    pub fn is_empty(&self) -> bool {
        self.robots.read().is_empty()
    }
}

impl RobotRegistry for Fleet {
    fn robots(&self) -> Vec<Arc<Robot>> {
        self.robots.read().clone()
    }

    fn robot(&self, name: &str) -> Option<Arc<Robot>> {
        self.robots.read().iter().find(|r| r.name() == name).cloned()
    }

    fn commands(&self) -> &CommandSet {
        &self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    fn robot(name: &str) -> Robot {
        Robot::builder(name).build().unwrap()
    }

    #[test]
    fn test_robots_keep_registration_order() {
        let fleet = Fleet::new();
        for name in ["Robot 3", "Robot 1", "Robot 2"] {
            fleet.add_robot(robot(name)).unwrap();
        }
        let names: Vec<_> = fleet.robots().iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, vec!["Robot 3", "Robot 1", "Robot 2"]);
    }

    #[test]
    fn test_duplicate_robot_rejected() {
        let fleet = Fleet::new();
        fleet.add_robot(robot("Robot 1")).unwrap();
        assert_eq!(
            fleet.add_robot(robot("Robot 1")).unwrap_err(),
            FleetError::DuplicateRobot("Robot 1".to_string())
        );
        assert_eq!(fleet.len(), 1);
    }

    #[test]
    fn test_lookup_has_no_normalization() {
        let fleet = Fleet::new();
        fleet.add_robot(robot("Robot 1")).unwrap();
        assert!(fleet.robot("Robot 1").is_some());
        assert!(fleet.robot("robot 1").is_none());
        assert!(fleet.robot("Robot%201").is_none());
        assert!(fleet.robot(" Robot 1").is_none());
    }

    #[test]
    fn test_snapshot_survives_removal() {
        let fleet = Fleet::new();
        fleet.add_robot(robot("Robot 1")).unwrap();
        let snapshot = fleet.robot("Robot 1").unwrap();

        assert!(fleet.remove_robot("Robot 1").is_some());
        assert!(fleet.robot("Robot 1").is_none());
        assert!(fleet.is_empty());
        assert_eq!(snapshot.name(), "Robot 1");
        assert!(fleet.remove_robot("Robot 1").is_none());
    }

    #[test]
    fn test_fleet_level_commands() {
        let fleet = Fleet::new();
        fleet.commands().add("ping", Command::template("pong"));
        assert_eq!(fleet.commands().names(), vec!["ping"]);
    }

    #[test]
    fn test_concurrent_reads_during_mutation() {
        let fleet = Arc::new(Fleet::new());
        let writer = {
            let fleet = Arc::clone(&fleet);
            std::thread::spawn(move || {
                for i in 0..100 {
                    fleet.add_robot(robot(&format!("r{i}"))).unwrap();
                }
            })
        };
        for _ in 0..100 {
            let robots = fleet.robots();
            for (i, r) in robots.iter().enumerate() {
                assert_eq!(r.name(), format!("r{i}"));
            }
        }
        writer.join().unwrap();
        assert_eq!(fleet.len(), 100);
    }
}
