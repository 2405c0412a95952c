//! postman-tui - Actor-based terminal HTTP client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tracing_subscriber::EnvFilter;

use postman_tui::app::focus::FocusTarget;
use postman_tui::app::method::MethodList;
use postman_tui::app::state::Overlay;
use postman_tui::args::CommandLineArgs;
use postman_tui::constants::{APP_NAME, APP_VERSION};
use postman_tui::messages::ui_events::key_to_ui_event;
use postman_tui::network::client::create_client;
use postman_tui::ui::{centered_fixed, centered_rect, focus_border_style, method_color, render_param_table, status_color};
use postman_tui::{AppActor, AppConfig, NetworkActor, NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CommandLineArgs::get().config();

    // Initialize logging to file
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let log_name = config
        .log_file
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("invalid log file path: {}", config.log_file.display()))?;
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(version = APP_VERSION, url = %config.url, method = %config.method, "starting {}", APP_NAME);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run(&mut terminal, &config).await
}

/// Wire the actors together and drive the UI until quit or a fatal error
async fn run(terminal: &mut Terminal<impl Backend>, config: &AppConfig) -> anyhow::Result<()> {
    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(create_client(config.timeout), net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(config, net_cmd_tx, render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    run_ui_loop(terminal, ui_tx, &mut render_rx)?;

    app_handle.await??;
    tracing::info!("session ended");
    Ok(())
}

/// Run the synchronous UI rendering loop
fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.focus, current_state.overlay.kind()) {
                    let quit = event == UiEvent::Quit;
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        loop {
            match render_rx.try_recv() {
                Ok(state) => current_state = state,
                Err(TryRecvError::Empty) => break,
                // App actor ended on its own, most likely a fatal error
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Request + response
            Constraint::Length(1), // Navigation bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(5, 8), Constraint::Ratio(3, 8)])
        .split(main_chunks[0]);

    let request_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),     // Method + URL
            Constraint::Percentage(50), // Query params
            Constraint::Percentage(50), // Body params
        ])
        .split(columns[0]);

    draw_request_line(f, state, request_chunks[0]);
    f.render_widget(
        render_param_table(&state.query, state.focus == FocusTarget::QueryTable),
        request_chunks[1],
    );
    f.render_widget(
        render_param_table(&state.body, state.focus == FocusTarget::BodyTable),
        request_chunks[2],
    );
    draw_response(f, state, columns[1]);

    let nav = Paragraph::new(state.hint).style(Style::default().fg(Color::Yellow));
    f.render_widget(nav, main_chunks[1]);

    match &state.overlay {
        Overlay::None => {}
        Overlay::CellEditor(editor) => {
            let popup = centered_rect(60, 3, area);
            draw_text_input(f, popup, editor.label(), editor.input.text(), editor.input.cursor_column(), true);
        }
        Overlay::MethodList(list) => draw_method_list(f, list, area),
    }
}

fn draw_request_line(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 10), Constraint::Ratio(9, 10)])
        .split(area);

    let method_block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border_style(state.focus == FocusTarget::MethodSelector))
        .title(" HTTP ");
    let method = Paragraph::new(state.method.as_str())
        .style(Style::default().fg(method_color(&state.method)).bold())
        .alignment(Alignment::Center)
        .block(method_block);
    f.render_widget(method, chunks[0]);

    let url_focused = state.focus == FocusTarget::UrlField && matches!(state.overlay, Overlay::None);
    draw_text_input(
        f,
        chunks[1],
        " Request URL: ",
        state.url.text(),
        state.url.cursor_column(),
        url_focused,
    );
}

/// Bordered single-line input with a label, placing the cursor when focused
fn draw_text_input(f: &mut Frame, area: Rect, label: &str, text: &str, cursor: usize, is_focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border_style(is_focused));

    let line = Line::from(vec![
        Span::styled(label.to_string(), Style::default().fg(Color::LightRed)),
        Span::raw(text.to_string()),
    ]);

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(line).block(block), area);

    if is_focused {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + 1 + (label.chars().count() + cursor) as u16).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_method_list(f: &mut Frame, list: &MethodList, area: Rect) {
    let popup_area = centered_fixed(40, 13, area);

    let items: Vec<ListItem> = MethodList::items()
        .iter()
        .map(|m| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("({}) ", m.shortcut()), Style::default().fg(Color::DarkGray)),
                Span::styled(m.as_str(), Style::default().fg(method_color(m.as_str()))),
            ]))
        })
        .collect();

    let widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" HTTP Methods ")
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Green).bold());

    let mut list_state = ListState::default();
    list_state.select(list.highlighted());

    f.render_widget(Clear, popup_area);
    f.render_stateful_widget(widget, popup_area, &mut list_state);
}

fn draw_response(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = match state.response.status() {
        Some(code) => Span::styled(format!(" Response {} ", code), Style::default().fg(status_color(code)).bold()),
        None => Span::raw(" Response "),
    };

    let time_text = state
        .response
        .time_ms()
        .map(|ms| format!(" {}ms ", ms))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(Line::from(time_text).right_aligned());

    let style = if state.response.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let response = Paragraph::new(state.response.text())
        .style(style)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.response.scroll, 0));
    f.render_widget(response, area);
}
