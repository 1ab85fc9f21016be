//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Form actions =====
        Action::FormChange(text) => {
            if state.query == text {
                DispatchResult::unchanged()
            } else {
                state.query = text;
                DispatchResult::changed()
            }
        }

        Action::FormSubmit(location) => {
            // Every submission gets a fresh id; only its response may land.
            state.request_seq = state.request_seq.wrapping_add(1);
            state.pending = Some(location.clone());
            state.query.clear();
            DispatchResult::changed_with(Effect::FetchWeather {
                request_id: state.request_seq,
                location,
            })
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad { request_id, data } => {
            if !state.is_current(request_id) {
                return DispatchResult::unchanged();
            }
            state.weather = Some(data);
            state.pending = None;
            DispatchResult::changed()
        }

        Action::WeatherDidError { request_id, .. } => {
            if !state.is_current(request_id) {
                return DispatchResult::unchanged();
            }
            // The previous result (if any) stays on screen.
            state.pending = None;
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}
