//! Table panel - a `ParamTable` plus its cell selection

use crate::params::{Column, ParamTable};

/// Which of the two table slots a panel occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableSlot {
    Query,
    Body,
}

/// A selected data cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellPos {
    pub row: usize,
    pub column: Column,
}

impl Default for CellPos {
    fn default() -> Self {
        CellPos {
            row: 1,
            column: Column::Key,
        }
    }
}

/// A parameter table as shown on screen. Selection only moves while the
/// panel is selectable, which the focus controller grants on entry.
#[derive(Clone, Debug)]
pub struct ParamPanel {
    pub title: &'static str,
    pub table: ParamTable,
    cursor: CellPos,
    selectable: bool,
}

impl ParamPanel {
    pub fn new(title: &'static str) -> Self {
        ParamPanel {
            title,
            table: ParamTable::new(),
            cursor: CellPos::default(),
            selectable: false,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
        self.clamp();
    }

    /// The selected cell, if the panel currently allows selection
    pub fn selection(&self) -> Option<CellPos> {
        self.selectable.then_some(self.cursor)
    }

    pub fn move_up(&mut self) {
        if self.selectable {
            self.cursor.row = self.cursor.row.saturating_sub(1).max(1);
        }
    }

    pub fn move_down(&mut self) {
        if self.selectable {
            self.cursor.row = (self.cursor.row + 1).min(self.table.last_row());
        }
    }

    pub fn move_left(&mut self) {
        if self.selectable {
            self.cursor.column = Column::Key;
        }
    }

    pub fn move_right(&mut self) {
        if self.selectable {
            self.cursor.column = Column::Value;
        }
    }

    pub fn move_top(&mut self) {
        if self.selectable {
            self.cursor.row = 1;
        }
    }

    pub fn move_bottom(&mut self) {
        if self.selectable {
            self.cursor.row = self.table.last_row();
        }
    }

    /// Delete the selected row
    pub fn delete_selected(&mut self) -> crate::Result<()> {
        let Some(pos) = self.selection() else {
            return Err(crate::Error::InvalidSelection);
        };
        self.table.delete_row(pos.row)?;
        self.clamp();
        Ok(())
    }

    fn clamp(&mut self) {
        self.cursor.row = self.cursor.row.clamp(1, self.table.last_row());
    }
}
