use ratatui::{prelude::*, widgets::*};

use crate::app::panel::ParamPanel;
use crate::params::Column;

/// Border style for the single active panel
pub fn focus_border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

/// Renders a parameter table: index column, then Key and Value
pub fn render_param_table(panel: &ParamPanel, is_focused: bool) -> Table<'_> {
    let header_style = Style::default().fg(Color::LightRed).bold();
    let header = Row::new(vec![
        Cell::from(panel.title),
        Cell::from(Column::Key.header()),
        Cell::from(Column::Value.header()),
    ])
    .style(header_style);

    let selection = panel.selection();
    let rows: Vec<Row> = panel
        .table
        .rows()
        .map(|(idx, param)| {
            let cell = |column: Column, text: &str| {
                let selected = selection.is_some_and(|pos| pos.row == idx && pos.column == column);
                let style = if selected {
                    Style::default().fg(Color::Black).bg(Color::Green)
                } else {
                    Style::default()
                };
                Cell::from(text.to_string()).style(style)
            };

            Row::new(vec![
                Cell::from(idx.to_string()).style(Style::default().fg(Color::DarkGray)),
                cell(Column::Key, &param.key),
                cell(Column::Value, &param.value),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Ratio(1, 7),
            Constraint::Ratio(3, 7),
            Constraint::Ratio(3, 7),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border_style(is_focused)),
    )
}

/// Status code color
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500..=599 => Color::Magenta,
        _ => Color::Yellow,
    }
}

/// Method color
pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        "PUT" => Color::Blue,
        "PATCH" => Color::Cyan,
        "DELETE" => Color::Red,
        _ => Color::White,
    }
}

/// Popup of fixed size centered in `r`, clipped to it
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Popup spanning `percent_x` of the width, `height` rows tall
pub fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed_is_clipped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_fixed(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_fixed(40, 13, area), area);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(204), Color::Green);
        assert_eq!(status_color(404), Color::Red);
        assert_eq!(method_color("DELETE"), Color::Red);
    }
}
