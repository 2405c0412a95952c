//! App state - the composition root. Pure data, no I/O.

use crate::app::composer::RequestComposer;
use crate::app::editor::CellEditor;
use crate::app::focus::FocusController;
use crate::app::input::TextInput;
use crate::app::method::{MethodList, MethodSelector};
use crate::app::panel::{ParamPanel, TableSlot};
use crate::app::response::ResponseView;
use crate::config::AppConfig;
use crate::constants::{BODY_TABLE_TITLE, QUERY_TABLE_TITLE};
use crate::messages::ui_events::OverlayKind;
use crate::messages::RenderState;
use crate::models::RequestDescriptor;

/// Modal layer above the panels
#[derive(Clone, Debug, Default)]
pub enum Overlay {
    #[default]
    None,
    CellEditor(CellEditor),
    MethodList(MethodList),
}

impl Overlay {
    pub fn kind(&self) -> OverlayKind {
        match self {
            Overlay::None => OverlayKind::None,
            Overlay::CellEditor(_) => OverlayKind::CellEditor,
            Overlay::MethodList(_) => OverlayKind::MethodList,
        }
    }
}

/// Main application state
pub struct AppState {
    // Panels
    pub url: TextInput,
    pub method: MethodSelector,
    pub query: ParamPanel,
    pub body: ParamPanel,

    // UI state
    pub focus: FocusController,
    pub overlay: Overlay,

    // HTTP Response
    pub response: ResponseView,
    pub is_loading: bool,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        AppState {
            url: TextInput::new(config.url.clone()),
            method: MethodSelector::new(config.method),
            query: ParamPanel::new(QUERY_TABLE_TITLE),
            body: ParamPanel::new(BODY_TABLE_TITLE),
            focus: FocusController::new(),
            overlay: Overlay::None,
            response: ResponseView::default(),
            is_loading: false,
            next_request_id: 1,
            pending_request_id: None,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn panel(&self, slot: TableSlot) -> &ParamPanel {
        match slot {
            TableSlot::Query => &self.query,
            TableSlot::Body => &self.body,
        }
    }

    pub fn panel_mut(&mut self, slot: TableSlot) -> &mut ParamPanel {
        match slot {
            TableSlot::Query => &mut self.query,
            TableSlot::Body => &mut self.body,
        }
    }

    /// Snapshot the panels into an outbound request
    pub fn compose(&self) -> RequestDescriptor {
        RequestComposer {
            url: self.url.text(),
            query: &self.query.table,
            method: &self.method,
            body: &self.body.table,
        }
        .compose()
    }

    /// Keybinding hint for whatever currently receives input
    pub fn hint(&self) -> &'static str {
        match self.overlay {
            Overlay::CellEditor(_) => " Enter: set value | Esc: cancel",
            Overlay::MethodList(_) => " j/k: move | a-e: pick | Enter: select | Esc: cancel",
            Overlay::None => self.focus.current().hint(),
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            focus: self.focus.current(),
            url: self.url.clone(),
            method: self.method.value().to_string(),
            query: self.query.clone(),
            body: self.body.clone(),
            overlay: self.overlay.clone(),
            response: self.response.clone(),
            is_loading: self.is_loading,
            hint: self.hint(),
        }
    }
}
