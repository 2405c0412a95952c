//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::config::AppConfig;
use crate::error::Result;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        config: &AppConfig,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::with_config(config),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop. Returns the first unrecoverable error.
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) -> Result<()> {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    match self.handle_ui_event(event) {
                        Ok(false) => {}
                        Ok(true) => {
                            // Quit signal received
                            let _ = self.network_tx.send(NetworkCommand::Shutdown);
                            break;
                        }
                        Err(err) => {
                            tracing::error!(%err, "unrecoverable error, ending session");
                            let _ = self.network_tx.send(NetworkCommand::Shutdown);
                            return Err(err);
                        }
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }

        Ok(())
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> Result<bool> {
        if event == UiEvent::Quit {
            return Ok(true);
        }

        match self.state.handle_event(event) {
            Ok(Some(cmd)) => {
                let _ = self.network_tx.send(cmd);
            }
            Ok(None) => {}
            Err(err) if err.is_recoverable() => {
                tracing::warn!(%err, "ignored");
            }
            Err(err) => return Err(err),
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Overlay;
    use crate::error::Error;
    use crate::params::ParamTable;

    #[tokio::test]
    async fn test_submit_round_trip_through_channels() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new(&AppConfig::default(), net_cmd_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));

        let initial = render_rx.recv().await.unwrap();
        assert!(!initial.is_loading);

        ui_tx.send(UiEvent::Confirm).unwrap();
        let id = match net_cmd_rx.recv().await.unwrap() {
            NetworkCommand::Execute { id, request } => {
                assert_eq!(request.method, "GET");
                assert_eq!(request.url, "https://httpbin.org/get");
                id
            }
            other => panic!("expected execute command, got {other:?}"),
        };
        assert!(render_rx.recv().await.unwrap().is_loading);

        net_resp_tx
            .send(NetworkResponse::Error {
                id,
                message: "Request timed out".to_string(),
                time_ms: 30_000,
            })
            .unwrap();
        let rendered = render_rx.recv().await.unwrap();
        assert!(!rendered.is_loading);
        assert_eq!(rendered.response.text(), "Request timed out");

        ui_tx.send(UiEvent::Quit).unwrap();
        assert!(matches!(net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown)));
        assert!(handle.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_recoverable_errors_keep_session() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, _net_cmd_rx) = mpsc::unbounded_channel();
        let (_net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let mut actor = AppActor::new(&AppConfig::default(), net_cmd_tx, render_tx);
        // Deleting from an unfocused table has no selection to act on
        actor.state.focus.focus(
            crate::app::focus::FocusTarget::QueryTable,
            &mut actor.state.query,
            &mut actor.state.body,
        );
        actor.state.query.set_selectable(false);
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));
        render_rx.recv().await.unwrap();

        ui_tx.send(UiEvent::DeleteRow).unwrap();
        let rendered = render_rx.recv().await.unwrap();
        assert_eq!(rendered.query.table.row_count(), 1);

        ui_tx.send(UiEvent::Quit).unwrap();
        assert!(handle.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_out_of_range_edit_ends_session() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (_net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let mut actor = AppActor::new(&AppConfig::default(), net_cmd_tx, render_tx);
        actor.state.query.table = ParamTable::from_pairs([("a", "1")]);
        for event in [UiEvent::MoveFocus, UiEvent::CursorEnd, UiEvent::Confirm] {
            actor.state.handle_event(event).unwrap();
        }
        assert!(matches!(actor.state.overlay, Overlay::CellEditor(_)));

        // The row under the open editor disappears
        actor.state.query.table = ParamTable::new();
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));
        render_rx.recv().await.unwrap();

        ui_tx.send(UiEvent::Confirm).unwrap();
        let result = handle.await.unwrap();
        assert!(matches!(result, Err(Error::OutOfRange { row: 2, .. })));
        assert!(matches!(net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown)));
    }
}
