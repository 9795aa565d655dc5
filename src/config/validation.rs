//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.name is required")]
    MissingServerName,
    #[error("robots[{0}].name is required")]
    MissingRobotName(usize),
    #[error("robot name registered twice: {0}")]
    DuplicateRobotName(String),
    #[error("robot {robot}: devices[{index}].name is required")]
    MissingDeviceName { robot: String, index: usize },
    #[error("commands[{0}].name is required")]
    MissingCommandName(usize),
    #[error("auth.username is required when [auth] is present")]
    MissingAuthUsername,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.name.is_empty() {
        errors.push(ValidationError::MissingServerName);
    }

    for (i, cmd) in config.commands.iter().enumerate() {
        if cmd.name.is_empty() {
            errors.push(ValidationError::MissingCommandName(i));
        }
    }

    for (i, robot) in config.robots.iter().enumerate() {
        if robot.name.is_empty() {
            errors.push(ValidationError::MissingRobotName(i));
        } else if config.robots[..i].iter().any(|r| r.name == robot.name) {
            errors.push(ValidationError::DuplicateRobotName(robot.name.clone()));
        }
        for (index, device) in robot.devices.iter().enumerate() {
            if device.name.is_empty() {
                errors.push(ValidationError::MissingDeviceName {
                    robot: robot.name.clone(),
                    index,
                });
            }
        }
    }

    if let Some(ref auth) = config.auth
        && auth.username.is_empty()
    {
        errors.push(ValidationError::MissingAuthUsername);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
