//! Built-in device drivers.
//!
//! A driver decides which commands a device exposes. Each call to
//! [`DriverKind::device`] produces a fresh device with its own state.

use crate::command::{Command, CommandError, require};
use crate::device::Device;
use crate::error::FleetError;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Driver tags understood by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverKind {
    /// Greeting driver used for smoke tests.
    Test,
    /// On/off light with a brightness level.
    Led,
}

impl DriverKind {
    /// The tag as written in configuration and device summaries.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Led => "led",
        }
    }

    /// Build a device using this driver.
    pub fn device(self, name: impl Into<String>, connection: Option<String>) -> Device {
        let device = Device::new(name, self.as_str(), connection);
        match self {
            Self::Test => test_driver(device),
            Self::Led => led_driver(device),
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverKind {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test" => Ok(Self::Test),
            "led" => Ok(Self::Led),
            other => Err(FleetError::UnknownDriver(other.to_string())),
        }
    }
}

fn test_driver(device: Device) -> Device {
    device
        .with_command("TestDriverCommand", Command::template("hello {name}"))
        .with_command("DriverCommand", Command::template("hello {name}"))
}

#[derive(Debug, Default)]
struct LedState {
    on: AtomicBool,
    level: AtomicU8,
}

fn led_driver(device: Device) -> Device {
    let state = Arc::new(LedState::default());

    let on = Arc::clone(&state);
    let off = Arc::clone(&state);
    let toggle = Arc::clone(&state);
    let query = Arc::clone(&state);
    let level = Arc::clone(&state);
    let brightness = state;

    device
        .with_command(
            "TurnOn",
            Command::new(move |_| {
                on.on.store(true, Ordering::SeqCst);
                Ok(Value::Bool(true))
            }),
        )
        .with_command(
            "TurnOff",
            Command::new(move |_| {
                off.on.store(false, Ordering::SeqCst);
                Ok(Value::Bool(false))
            }),
        )
        .with_command(
            "Toggle",
            Command::new(move |_| {
                let was = toggle.on.fetch_xor(true, Ordering::SeqCst);
                Ok(Value::Bool(!was))
            }),
        )
        .with_command(
            "State",
            Command::new(move |_| Ok(Value::Bool(query.on.load(Ordering::SeqCst)))),
        )
        .with_command(
            "Level",
            Command::new(move |_| Ok(Value::from(level.level.load(Ordering::SeqCst)))),
        )
        .with_command(
            "Brightness",
            Command::new(move |params| {
                let level = require(&params, "level")?
                    .as_u64()
                    .and_then(|n| u8::try_from(n).ok())
                    .ok_or_else(|| CommandError::InvalidParam {
                        name: "level".to_string(),
                        reason: "expected an integer between 0 and 255".to_string(),
                    })?;
                brightness.level.store(level, Ordering::SeqCst);
                Ok(Value::from(level))
            }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Params;
    use serde_json::json;

    fn call(device: &Device, command: &str, params: Value) -> Result<Value, CommandError> {
        let params = match params {
            Value::Object(map) => map,
            _ => Params::new(),
        };
        device.commands().get(command).unwrap().call(params)
    }

    #[test]
    fn test_driver_tag_parsing() {
        assert_eq!("test".parse::<DriverKind>().unwrap(), DriverKind::Test);
        assert_eq!("led".parse::<DriverKind>().unwrap(), DriverKind::Led);
        assert_eq!(
            "servo".parse::<DriverKind>().unwrap_err(),
            FleetError::UnknownDriver("servo".to_string())
        );
    }

    #[test]
    fn test_test_driver_commands() {
        let device = DriverKind::Test.device("Device 1", None);
        assert_eq!(device.driver(), "test");
        assert_eq!(
            device.commands().names(),
            vec!["TestDriverCommand", "DriverCommand"]
        );
        assert_eq!(
            call(&device, "TestDriverCommand", json!({"name": "human"})).unwrap(),
            json!("hello human")
        );
    }

    #[test]
    fn test_led_toggle_and_state() {
        let device = DriverKind::Led.device("led", None);
        assert_eq!(call(&device, "State", json!({})).unwrap(), json!(false));
        assert_eq!(call(&device, "Toggle", json!({})).unwrap(), json!(true));
        assert_eq!(call(&device, "State", json!({})).unwrap(), json!(true));
        assert_eq!(call(&device, "TurnOff", json!({})).unwrap(), json!(false));
        assert_eq!(call(&device, "Toggle", json!({})).unwrap(), json!(true));
    }

    #[test]
    fn test_led_devices_do_not_share_state() {
        let a = DriverKind::Led.device("a", None);
        let b = DriverKind::Led.device("b", None);
        call(&a, "TurnOn", json!({})).unwrap();
        assert_eq!(call(&b, "State", json!({})).unwrap(), json!(false));
    }

    #[test]
    fn test_led_brightness_validation() {
        let device = DriverKind::Led.device("led", None);
        assert_eq!(call(&device, "Level", json!({})).unwrap(), json!(0));
        assert_eq!(
            call(&device, "Brightness", json!({"level": 128})).unwrap(),
            json!(128)
        );
        assert_eq!(call(&device, "Level", json!({})).unwrap(), json!(128));
        assert_eq!(
            call(&device, "Brightness", json!({})).unwrap_err(),
            CommandError::MissingParam("level".to_string())
        );
        assert!(matches!(
            call(&device, "Brightness", json!({"level": 300})).unwrap_err(),
            CommandError::InvalidParam { .. }
        ));
        assert_eq!(call(&device, "Level", json!({})).unwrap(), json!(128));
    }
}
