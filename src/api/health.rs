use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use super::AppState;

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Ready once the repository is constructed; reports how many cells it holds.
pub async fn ready(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ready",
        "cells": state.repo.cell_count(),
    }))
}
