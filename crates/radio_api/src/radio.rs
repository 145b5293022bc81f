use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use radio_core::{Channel, Direction, RadioConfig, StationStatus};
use radio_engine::{Button, MenuCommand, RadioCommand, RadioView, WindowEvent};
use serde::{Deserialize, Serialize};

use crate::SharedEngine;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStationRequest {
    pub direction: Direction,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRequest {
    #[serde(default)]
    pub pressed: Vec<Button>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameResponse {
    pub event: WindowEvent,
    pub view: Option<RadioView>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub commands: Vec<MenuCommand>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}

fn status_response(status: Option<StationStatus>) -> Response {
    match status {
        Some(status) => (StatusCode::OK, Json(status)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Radio has no stations configured".to_string(),
            }),
        )
            .into_response(),
    }
}

/// Get the current station and playback state
pub async fn get_radio_status(State(engine): State<SharedEngine>) -> Response {
    let engine = engine.lock().unwrap();
    status_response(engine.status())
}

/// Get the radio configuration loaded at startup
pub async fn get_radio_config(State(engine): State<SharedEngine>) -> Json<RadioConfig> {
    tracing::info!("Getting radio configuration");
    let engine = engine.lock().unwrap();
    Json(engine.config().clone())
}

/// Turn the radio on or off
pub async fn toggle_radio(State(engine): State<SharedEngine>) -> Response {
    let mut engine = engine.lock().unwrap();
    status_response(engine.toggle())
}

/// Tune to the previous or next station
pub async fn change_station(
    State(engine): State<SharedEngine>,
    Json(payload): Json<ChangeStationRequest>,
) -> Response {
    let mut engine = engine.lock().unwrap();
    status_response(engine.change_station(payload.direction))
}

/// Run a tagged radio command
pub async fn run_command(
    State(engine): State<SharedEngine>,
    Json(command): Json<RadioCommand>,
) -> Response {
    let mut engine = engine.lock().unwrap();
    status_response(engine.execute(command))
}

/// Advance the radio view by one host frame
pub async fn run_frame(
    State(engine): State<SharedEngine>,
    Json(payload): Json<FrameRequest>,
) -> Json<FrameResponse> {
    let mut engine = engine.lock().unwrap();
    let event = engine.frame(&payload.pressed);
    Json(FrameResponse {
        event,
        view: engine.view(),
    })
}

/// List the mixer channels backing the stations
pub async fn get_channels(State(engine): State<SharedEngine>) -> Json<Vec<Channel>> {
    let engine = engine.lock().unwrap();
    Json(engine.player().audio().channels().to_vec())
}

/// Menu entries contributed by the radio
pub async fn get_menu(State(engine): State<SharedEngine>) -> Json<MenuResponse> {
    let engine = engine.lock().unwrap();
    Json(MenuResponse {
        commands: engine.menu_commands(),
    })
}
