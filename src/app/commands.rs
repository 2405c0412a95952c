//! Command handlers - business logic for processing UI events
//!
//! Events are dispatched on the open overlay first, then on the pair of
//! focused panel and signal.

use crate::app::editor::CellEditor;
use crate::app::focus::FocusTarget;
use crate::app::method::MethodList;
use crate::app::panel::TableSlot;
use crate::app::state::{AppState, Overlay};
use crate::error::Result;
use crate::messages::{NetworkCommand, NetworkResponse, UiEvent};
use crate::models::HttpMethod;

impl AppState {
    /// Apply one UI event. Submitting yields a command for the network layer.
    pub fn handle_event(&mut self, event: UiEvent) -> Result<Option<NetworkCommand>> {
        match event {
            UiEvent::ScrollUp => {
                self.response.scroll_up();
                return Ok(None);
            }
            UiEvent::ScrollDown => {
                self.response.scroll_down();
                return Ok(None);
            }
            UiEvent::Quit => return Ok(None),
            _ => {}
        }

        match std::mem::take(&mut self.overlay) {
            Overlay::CellEditor(editor) => self.handle_cell_editor(editor, event).map(|_| None),
            Overlay::MethodList(list) => {
                self.handle_method_list(list, event);
                Ok(None)
            }
            Overlay::None => self.handle_panel_event(event),
        }
    }

    // ========================
    // Panels
    // ========================

    fn handle_panel_event(&mut self, event: UiEvent) -> Result<Option<NetworkCommand>> {
        match (self.focus.current(), event) {
            (_, UiEvent::MoveFocus) => {
                self.focus.advance(&mut self.query, &mut self.body);
            }
            (_, UiEvent::MoveFocusBack) => {
                self.focus.retreat(&mut self.query, &mut self.body);
            }

            (FocusTarget::UrlField, UiEvent::Confirm) => return Ok(self.submit()),
            (FocusTarget::UrlField, UiEvent::CharInput(c)) => self.url.insert(c),
            (FocusTarget::UrlField, UiEvent::Backspace) => self.url.backspace(),
            (FocusTarget::UrlField, UiEvent::Delete) => self.url.delete(),
            (FocusTarget::UrlField, UiEvent::CursorLeft) => self.url.move_left(),
            (FocusTarget::UrlField, UiEvent::CursorRight) => self.url.move_right(),
            (FocusTarget::UrlField, UiEvent::CursorHome) => self.url.move_home(),
            (FocusTarget::UrlField, UiEvent::CursorEnd) => self.url.move_end(),

            (FocusTarget::QueryTable, event) => self.handle_table_event(TableSlot::Query, event)?,
            (FocusTarget::BodyTable, event) => self.handle_table_event(TableSlot::Body, event)?,

            (FocusTarget::MethodSelector, UiEvent::Confirm) => {
                self.overlay = Overlay::MethodList(self.method.open());
            }

            _ => {}
        }
        Ok(None)
    }

    fn handle_table_event(&mut self, slot: TableSlot, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::Confirm => {
                let editor = CellEditor::open(slot, self.panel(slot))?;
                self.overlay = Overlay::CellEditor(editor);
            }
            UiEvent::CursorUp => self.panel_mut(slot).move_up(),
            UiEvent::CursorDown => self.panel_mut(slot).move_down(),
            UiEvent::CursorLeft => self.panel_mut(slot).move_left(),
            UiEvent::CursorRight => self.panel_mut(slot).move_right(),
            UiEvent::CursorHome => self.panel_mut(slot).move_top(),
            UiEvent::CursorEnd => self.panel_mut(slot).move_bottom(),
            UiEvent::DeleteRow => self.panel_mut(slot).delete_selected()?,
            _ => {}
        }
        Ok(())
    }

    // ========================
    // Overlays
    // ========================

    fn handle_cell_editor(&mut self, mut editor: CellEditor, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::Confirm => {
                let slot = editor.slot();
                editor.confirm(self.panel_mut(slot))?;
                return Ok(());
            }
            UiEvent::Cancel => return Ok(()),
            UiEvent::CharInput(c) => editor.input.insert(c),
            UiEvent::Backspace => editor.input.backspace(),
            UiEvent::Delete => editor.input.delete(),
            UiEvent::CursorLeft => editor.input.move_left(),
            UiEvent::CursorRight => editor.input.move_right(),
            UiEvent::CursorHome => editor.input.move_home(),
            UiEvent::CursorEnd => editor.input.move_end(),
            _ => {}
        }
        self.overlay = Overlay::CellEditor(editor);
        Ok(())
    }

    fn handle_method_list(&mut self, mut list: MethodList, event: UiEvent) {
        match event {
            UiEvent::Confirm => {
                if let Some(method) = list.choice() {
                    return self.select_method(method);
                }
            }
            UiEvent::PickMethod(method) => return self.select_method(method),
            UiEvent::Cancel => {
                self.focus_on(FocusTarget::MethodSelector);
                return;
            }
            UiEvent::CursorUp => list.move_up(),
            UiEvent::CursorDown => list.move_down(),
            _ => {}
        }
        self.overlay = Overlay::MethodList(list);
    }

    /// Selecting a method always returns focus to the method panel
    fn select_method(&mut self, method: HttpMethod) {
        self.method.select(method);
        self.focus_on(FocusTarget::MethodSelector);
    }

    fn focus_on(&mut self, target: FocusTarget) {
        self.focus.focus(target, &mut self.query, &mut self.body);
    }

    // ========================
    // Request sending
    // ========================

    /// Compose the request and hand it to the network layer
    pub fn submit(&mut self) -> Option<NetworkCommand> {
        if self.is_loading {
            tracing::debug!("submit ignored, request in flight");
            return None;
        }

        let request = self.compose();
        let id = self.next_id();
        tracing::info!(id, method = %request.method, url = %request.url, "submitting request");

        self.is_loading = true;
        self.pending_request_id = Some(id);
        self.response.set_loading();

        Some(NetworkCommand::Execute { id, request })
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "dropping stale response");
            return;
        }

        match response {
            NetworkResponse::Success { status, body, time_ms, .. } => {
                self.response.set_body(status, body, time_ms);
            }
            NetworkResponse::Error { message, time_ms, .. } => {
                tracing::warn!(%message, "transport error");
                self.response.set_error(message, time_ms);
            }
        }

        self.is_loading = false;
        self.pending_request_id = None;
    }
}
