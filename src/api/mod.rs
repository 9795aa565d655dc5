//! HTTP API over the robot registry.
//!
//! Request flow is one-way: router, then [`resolve`], then [`invoke`] or a
//! listing, then [`serialize`]. The router holds only a handle to the
//! registry; every request re-reads it.
//!
//! | Route | Action |
//! |---|---|
//! | `GET /commands` | fleet command names |
//! | `GET, POST /commands/:command` | invoke a fleet command |
//! | `GET /robots` | list robots |
//! | `GET /robots/:robot` | show robot |
//! | `GET /robots/:robot/commands` | robot command names |
//! | `GET, POST /robots/:robot/commands/:command` | invoke robot command |
//! | `GET /robots/:robot/connections` | list connections |
//! | `GET /robots/:robot/connections/:connection` | show connection |
//! | `GET /robots/:robot/devices` | list devices |
//! | `GET /robots/:robot/devices/:device` | show device |
//! | `GET /robots/:robot/devices/:device/commands` | device command names |
//! | `GET, POST /robots/:robot/devices/:device/commands/:command` | invoke device command |

mod auth;
mod body;
mod handlers;
pub mod invoke;
mod path;
pub mod resolve;
pub mod serialize;


use crate::config::AuthConfig;
use axum::Router;
use axum::handler::Handler;
use axum::middleware;
use axum::routing::{MethodRouter, get};
use robogate_fleet::RobotRegistry;
use std::sync::Arc;

/// Shared state for all API routes.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn RobotRegistry>,
}

/// Build the API router. When `auth` is set, every route (including the
/// not-found fallback) requires HTTP Basic credentials.
pub fn router(registry: Arc<dyn RobotRegistry>, auth: Option<AuthConfig>) -> Router {
    use handlers::*;

    let app = Router::new()
        .route("/commands", read(fleet_commands))
        .route("/commands/:command", run(run_fleet_command))
        .route("/robots", read(list_robots))
        .route("/robots/:robot", read(show_robot))
        .route("/robots/:robot/commands", read(robot_commands))
        .route("/robots/:robot/commands/:command", run(run_robot_command))
        .route("/robots/:robot/connections", read(list_connections))
        .route(
            "/robots/:robot/connections/:connection",
            read(show_connection),
        )
        .route("/robots/:robot/devices", read(list_devices))
        .route("/robots/:robot/devices/:device", read(show_device))
        .route(
            "/robots/:robot/devices/:device/commands",
            read(device_commands),
        )
        .route(
            "/robots/:robot/devices/:device/commands/:command",
            run(run_device_command),
        )
        .fallback(not_found)
        .with_state(AppState { registry });

    match auth {
        Some(credentials) => app.layer(middleware::from_fn_with_state(
            Arc::new(credentials),
            auth::require_basic_auth,
        )),
        None => app,
    }
}

/// GET-only route; other methods get a JSON 405.
fn read<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).fallback(handlers::method_not_allowed)
}

/// Invocation route, reachable by GET and POST.
fn run<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler.clone())
        .post(handler)
        .fallback(handlers::method_not_allowed)
}
