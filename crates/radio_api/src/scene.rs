use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use radio_core::SwitchId;
use radio_engine::{SceneHook, SceneKind};
use serde::{Deserialize, Serialize};

use crate::SharedEngine;
use crate::radio::ErrorResponse;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneRequest {
    pub scene: SceneKind,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchRequest {
    pub value: bool,
}

/// Notify the radio that a host scene was created
pub async fn create_scene(
    State(engine): State<SharedEngine>,
    Json(payload): Json<SceneRequest>,
) -> StatusCode {
    tracing::info!("Scene {:?} created", payload.scene);
    let mut engine = engine.lock().unwrap();
    engine.on_scene_create(payload.scene);
    StatusCode::NO_CONTENT
}

/// Notify the radio that a host scene was torn down
pub async fn terminate_scene(
    State(engine): State<SharedEngine>,
    Json(payload): Json<SceneRequest>,
) -> StatusCode {
    tracing::info!("Scene {:?} terminated", payload.scene);
    let mut engine = engine.lock().unwrap();
    engine.on_scene_terminate(payload.scene);
    StatusCode::NO_CONTENT
}

/// Set a host switch. Switch 0 means "no switch" and cannot be set.
pub async fn set_switch(
    State(engine): State<SharedEngine>,
    Path(switch_id): Path<u32>,
    Json(payload): Json<SwitchRequest>,
) -> Response {
    let Some(id) = SwitchId::from_raw(switch_id) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Switch 0 cannot be set".to_string(),
            }),
        )
            .into_response();
    };
    let mut engine = engine.lock().unwrap();
    engine.set_switch(id, payload.value);
    StatusCode::NO_CONTENT.into_response()
}
