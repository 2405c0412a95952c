//! Render state - data structure sent from App layer to UI for rendering

use crate::app::focus::FocusTarget;
use crate::app::input::TextInput;
use crate::app::panel::ParamPanel;
use crate::app::response::ResponseView;
use crate::app::state::{AppState, Overlay};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub focus: FocusTarget,

    // Request panels
    pub url: TextInput,
    pub method: String,
    pub query: ParamPanel,
    pub body: ParamPanel,

    // Modal layer
    pub overlay: Overlay,

    // HTTP Response
    pub response: ResponseView,
    pub is_loading: bool,

    // Navigation bar
    pub hint: &'static str,
}

impl Default for RenderState {
    fn default() -> Self {
        AppState::new().to_render_state()
    }
}
