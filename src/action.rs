//! Actions - everything that can happen to the app

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherResult;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Form category =====
    /// Input text changed
    FormChange(String),

    /// Intent: look up the weather for this text (triggers async task)
    FormSubmit(String),

    // ===== Weather category =====
    /// Result: lookup succeeded
    WeatherDidLoad {
        request_id: u64,
        data: WeatherResult,
    },

    /// Result: lookup failed (already logged by the task)
    WeatherDidError { request_id: u64, error: String },

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Exit the application
    Quit,
}
