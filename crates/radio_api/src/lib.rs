//! Radio API Library
//!
//! This library exposes the station radio over HTTP so a host engine (or a
//! developer with curl) can drive it.

mod radio;
mod scene;

use axum::{
    Router,
    routing::{get, post, put},
};
use radio_core::{Mixer, RadioConfig};
use radio_engine::RadioEngine;
use std::sync::{Arc, Mutex};
use tower_http::trace::TraceLayer;

pub type SharedEngine = Arc<Mutex<RadioEngine<Mixer>>>;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Create the application router with all endpoints
pub fn create_app(config: RadioConfig) -> Router {
    let shared_state = Arc::new(Mutex::new(RadioEngine::new(config, Mixer::new())));
    Router::new()
        .route("/health", get(health_check))
        .route("/radio/status", get(radio::get_radio_status))
        .route("/radio/config", get(radio::get_radio_config))
        .route("/radio/toggle", post(radio::toggle_radio))
        .route("/radio/station", post(radio::change_station))
        .route("/radio/channels", get(radio::get_channels))
        .route("/radio/command", post(radio::run_command))
        .route("/radio/frame", post(radio::run_frame))
        .route("/menu", get(radio::get_menu))
        .route("/scenes/create", post(scene::create_scene))
        .route("/scenes/terminate", post(scene::terminate_scene))
        .route("/switches/{switch_id}", put(scene::set_switch))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}
