//! Route handlers: resolve, then list, show or invoke.

use super::AppState;
use super::body::CommandBody;
use super::invoke::{Invocation, Target, invoke};
use super::path::EntityPath;
use super::resolve;
use super::serialize::{ConnectionSummary, DeviceSummary, RobotSummary};
use crate::error::ApiError;
use axum::Json;
use axum::extract::State;

pub async fn list_robots(State(state): State<AppState>) -> Json<Vec<RobotSummary>> {
    let robots = state.registry.robots();
    Json(robots.iter().map(|r| RobotSummary::from(r.as_ref())).collect())
}

pub async fn show_robot(
    State(state): State<AppState>,
    EntityPath(robot): EntityPath<String>,
) -> Result<Json<RobotSummary>, ApiError> {
    let robot = resolve::robot(state.registry.as_ref(), &robot)?;
    Ok(Json(RobotSummary::from(robot.as_ref())))
}

pub async fn list_devices(
    State(state): State<AppState>,
    EntityPath(robot): EntityPath<String>,
) -> Result<Json<Vec<DeviceSummary>>, ApiError> {
    let robot = resolve::robot(state.registry.as_ref(), &robot)?;
    Ok(Json(
        robot
            .devices()
            .iter()
            .map(|d| DeviceSummary::from(d.as_ref()))
            .collect(),
    ))
}

pub async fn show_device(
    State(state): State<AppState>,
    EntityPath((robot, device)): EntityPath<(String, String)>,
) -> Result<Json<DeviceSummary>, ApiError> {
    let (_, device) = resolve::device(state.registry.as_ref(), &robot, &device)?;
    Ok(Json(DeviceSummary::from(device.as_ref())))
}

pub async fn list_connections(
    State(state): State<AppState>,
    EntityPath(robot): EntityPath<String>,
) -> Result<Json<Vec<ConnectionSummary>>, ApiError> {
    let robot = resolve::robot(state.registry.as_ref(), &robot)?;
    Ok(Json(
        robot
            .connections()
            .iter()
            .map(ConnectionSummary::from)
            .collect(),
    ))
}

pub async fn show_connection(
    State(state): State<AppState>,
    EntityPath((robot, connection)): EntityPath<(String, String)>,
) -> Result<Json<ConnectionSummary>, ApiError> {
    let connection = resolve::connection(state.registry.as_ref(), &robot, &connection)?;
    Ok(Json(ConnectionSummary::from(&connection)))
}

pub async fn fleet_commands(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.registry.commands().names())
}

pub async fn robot_commands(
    State(state): State<AppState>,
    EntityPath(robot): EntityPath<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let robot = resolve::robot(state.registry.as_ref(), &robot)?;
    Ok(Json(robot.commands().names()))
}

pub async fn device_commands(
    State(state): State<AppState>,
    EntityPath((robot, device)): EntityPath<(String, String)>,
) -> Result<Json<Vec<String>>, ApiError> {
    let (_, device) = resolve::device(state.registry.as_ref(), &robot, &device)?;
    Ok(Json(device.commands().names()))
}

pub async fn run_fleet_command(
    State(state): State<AppState>,
    EntityPath(command): EntityPath<String>,
    CommandBody(body): CommandBody,
) -> Invocation {
    invoke(Target::Fleet(state.registry.commands()), &command, &body).await
}

pub async fn run_robot_command(
    State(state): State<AppState>,
    EntityPath((robot, command)): EntityPath<(String, String)>,
    CommandBody(body): CommandBody,
) -> Result<Invocation, ApiError> {
    let robot = resolve::robot(state.registry.as_ref(), &robot)?;
    Ok(invoke(Target::Robot(&robot), &command, &body).await)
}

pub async fn run_device_command(
    State(state): State<AppState>,
    EntityPath((robot, device, command)): EntityPath<(String, String, String)>,
    CommandBody(body): CommandBody,
) -> Result<Invocation, ApiError> {
    let (robot, device) = resolve::device(state.registry.as_ref(), &robot, &device)?;
    Ok(invoke(Target::Device(&robot, &device), &command, &body).await)
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
