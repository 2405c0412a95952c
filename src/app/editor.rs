//! Cell editor - modal input that edits one table cell in place

use crate::app::input::TextInput;
use crate::app::panel::{CellPos, ParamPanel, TableSlot};
use crate::error::{Error, Result};

/// An open cell edit. Input routes here until it is confirmed or cancelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellEditor {
    slot: TableSlot,
    pos: CellPos,
    label: String,
    pub input: TextInput,
}

impl CellEditor {
    /// Open on the panel's selected cell, pre-filled with its text
    pub fn open(slot: TableSlot, panel: &ParamPanel) -> Result<Self> {
        let pos = panel.selection().ok_or(Error::InvalidSelection)?;
        let text = panel.table.cell(pos.row, pos.column)?;
        let label = format!(" {} {} {}: ", panel.title, pos.column.header(), pos.row);

        Ok(CellEditor {
            slot,
            pos,
            label,
            input: TextInput::new(text),
        })
    }

    /// Table the editor was spawned from
    pub fn slot(&self) -> TableSlot {
        self.slot
    }

    pub fn pos(&self) -> CellPos {
        self.pos
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Commit the edited text into the owning table
    pub fn confirm(self, panel: &mut ParamPanel) -> Result<Option<usize>> {
        let appended = panel
            .table
            .commit_edit(self.pos.row, self.input.into_text(), self.pos.column)?;
        if let Some(row) = appended {
            tracing::debug!(table = panel.title, row, "appended blank row");
        }
        Ok(appended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Column, ParamTable};

    fn focused_panel() -> ParamPanel {
        let mut panel = ParamPanel::new("Query Params");
        panel.set_selectable(true);
        panel
    }

    #[test]
    fn test_open_without_selection_fails() {
        let panel = ParamPanel::new("Query Params");
        assert_eq!(
            CellEditor::open(TableSlot::Query, &panel),
            Err(Error::InvalidSelection)
        );
    }

    #[test]
    fn test_label_names_table_column_and_row() {
        let mut panel = focused_panel();
        panel.table = ParamTable::from_pairs([("a", "1")]);
        panel.move_right();

        let editor = CellEditor::open(TableSlot::Query, &panel).unwrap();
        assert_eq!(editor.label(), " Query Params Value 1: ");
        assert_eq!(editor.input.text(), "1");
        assert_eq!(editor.pos(), CellPos { row: 1, column: Column::Value });
    }

    #[test]
    fn test_confirm_on_last_row_appends_blank_row() {
        let mut panel = focused_panel();
        let mut editor = CellEditor::open(TableSlot::Query, &panel).unwrap();
        editor.input.insert('a');

        assert_eq!(editor.confirm(&mut panel).unwrap(), Some(2));
        assert_eq!(panel.table.cell(1, Column::Key).unwrap(), "a");
        assert!(panel.table.row(2).unwrap().is_blank());
    }

    #[test]
    fn test_confirm_empty_text_keeps_row_count() {
        let mut panel = focused_panel();
        let editor = CellEditor::open(TableSlot::Body, &panel).unwrap();
        assert_eq!(editor.slot(), TableSlot::Body);
        assert_eq!(editor.confirm(&mut panel).unwrap(), None);
        assert_eq!(panel.table.row_count(), 1);
    }
}
