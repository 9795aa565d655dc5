//! Command invocation.
//!
//! Looks up a command by exact name on the resolved target, decodes the
//! request body into a parameter bundle, binds the owning robot/device
//! names, and calls the command exactly once on the blocking pool. There
//! is no timeout and no retry.

use crate::telemetry::{CommandTimer, spans};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use robogate_fleet::{CommandError, CommandSet, Device, Params, Robot};
use serde_json::Value;
use tracing::{debug, warn};

/// Body returned when the command name is not registered on the target.
pub const UNKNOWN_COMMAND: &str = "Unknown Command";

/// Body returned when a command panicked.
pub const COMMAND_FAILED: &str = "Command Failed";

/// The entity a command is invoked on.
#[derive(Clone, Copy)]
pub enum Target<'a> {
    Fleet(&'a CommandSet),
    Robot(&'a Robot),
    Device(&'a Robot, &'a Device),
}

impl<'a> Target<'a> {
    pub fn scope(&self) -> &'static str {
        match self {
            Self::Fleet(_) => "fleet",
            Self::Robot(_) => "robot",
            Self::Device(..) => "device",
        }
    }

    fn commands(&self) -> &'a CommandSet {
        match *self {
            Self::Fleet(commands) => commands,
            Self::Robot(robot) => robot.commands(),
            Self::Device(_, device) => device.commands(),
        }
    }

    fn robot_name(&self) -> Option<&'a str> {
        match *self {
            Self::Fleet(_) => None,
            Self::Robot(robot) | Self::Device(robot, _) => Some(robot.name()),
        }
    }

    fn device_name(&self) -> Option<&'a str> {
        match *self {
            Self::Device(_, device) => Some(device.name()),
            _ => None,
        }
    }

    /// Inject the owning entity names, overriding client-supplied values.
    fn bind(&self, params: &mut Params) {
        if let Some(robot) = self.robot_name() {
            params.insert("robot".to_string(), Value::String(robot.to_string()));
        }
        if let Some(device) = self.device_name() {
            params.insert("device".to_string(), Value::String(device.to_string()));
        }
    }
}

/// Outcome of one invocation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// The command returned a value; it is serialized verbatim.
    Completed(Value),
    /// No command of that name on the target.
    UnknownCommand,
    /// The command returned an error.
    Failed(CommandError),
    /// The command panicked.
    Panicked,
}

impl IntoResponse for Invocation {
    fn into_response(self) -> Response {
        match self {
            Self::Completed(value) => (StatusCode::OK, Json(value)).into_response(),
            Self::UnknownCommand => (StatusCode::OK, Json(UNKNOWN_COMMAND)).into_response(),
            Self::Failed(e) => (StatusCode::INTERNAL_SERVER_ERROR, Json(e.to_string())).into_response(),
            Self::Panicked => (StatusCode::INTERNAL_SERVER_ERROR, Json(COMMAND_FAILED)).into_response(),
        }
    }
}

/// Decode a request body into a parameter bundle.
///
/// Anything other than a JSON object (empty body, malformed JSON, arrays,
/// scalars) yields an empty bundle.
pub fn decode_params(body: &[u8]) -> Params {
    if body.is_empty() {
        return Params::new();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(params)) => params,
        Ok(other) => {
            debug!(kind = json_kind(&other), "Non-object command body, using empty params");
            Params::new()
        }
        Err(e) => {
            debug!(error = %e, "Malformed command body, using empty params");
            Params::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Invoke `name` on `target` with the raw request body.
pub async fn invoke(target: Target<'_>, name: &str, body: &[u8]) -> Invocation {
    let scope = target.scope();

    let Some(command) = target.commands().get(name) else {
        debug!(scope, robot = target.robot_name(), device = target.device_name(), command = %name, "Unknown command");
        crate::metrics::record_command_error(scope, "unknown_command");
        return Invocation::UnknownCommand;
    };

    let mut params = decode_params(body);
    target.bind(&mut params);

    let span = spans::command(scope, target.robot_name(), target.device_name(), name);
    let _timer = CommandTimer::new(scope, name);

    let result = tokio::task::spawn_blocking(move || span.in_scope(|| command.call(params))).await;

    match result {
        Ok(Ok(value)) => Invocation::Completed(value),
        Ok(Err(e)) => {
            warn!(scope, robot = target.robot_name(), device = target.device_name(), command = %name, error = %e, "Command failed");
            crate::metrics::record_command_error(scope, "failed");
            Invocation::Failed(e)
        }
        Err(e) => {
            warn!(scope, robot = target.robot_name(), device = target.device_name(), command = %name, error = %e, "Command panicked");
            crate::metrics::record_command_error(scope, "panicked");
            Invocation::Panicked
        }
    }
}
