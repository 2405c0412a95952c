//! Focus cycle across the four editable panels

use crate::app::panel::ParamPanel;

/// A focusable panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    UrlField,
    QueryTable,
    BodyTable,
    MethodSelector,
}

impl FocusTarget {
    pub const ALL: [FocusTarget; 4] = [
        FocusTarget::UrlField,
        FocusTarget::QueryTable,
        FocusTarget::BodyTable,
        FocusTarget::MethodSelector,
    ];

    pub fn next(&self) -> FocusTarget {
        match self {
            FocusTarget::UrlField => FocusTarget::QueryTable,
            FocusTarget::QueryTable => FocusTarget::BodyTable,
            FocusTarget::BodyTable => FocusTarget::MethodSelector,
            FocusTarget::MethodSelector => FocusTarget::UrlField,
        }
    }

    pub fn prev(&self) -> FocusTarget {
        match self {
            FocusTarget::UrlField => FocusTarget::MethodSelector,
            FocusTarget::QueryTable => FocusTarget::UrlField,
            FocusTarget::BodyTable => FocusTarget::QueryTable,
            FocusTarget::MethodSelector => FocusTarget::BodyTable,
        }
    }

    /// Keybinding hint for the navigation bar
    pub fn hint(&self) -> &'static str {
        match self {
            FocusTarget::UrlField => " Tab: move params table | Enter: send request | Ctrl+C: quit",
            FocusTarget::QueryTable => {
                " Tab: move body table | Enter: set query parameter | h/j/k/l: move | g/G: top/bottom | d: delete row"
            }
            FocusTarget::BodyTable => {
                " Tab: move method | Enter: set body parameter | h/j/k/l: move | g/G: top/bottom | d: delete row"
            }
            FocusTarget::MethodSelector => " Tab: move url field | Enter: change http method",
        }
    }
}

/// Owns which panel is active and grants table selectability on entry
#[derive(Clone, Debug, Default)]
pub struct FocusController {
    current: FocusTarget,
}

impl FocusController {
    pub fn new() -> Self {
        FocusController::default()
    }

    pub fn current(&self) -> FocusTarget {
        self.current
    }

    /// The single "who is active" highlight
    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.current == target
    }

    /// Move to the next panel in the cycle
    pub fn advance(&mut self, query: &mut ParamPanel, body: &mut ParamPanel) -> FocusTarget {
        self.focus(self.current.next(), query, body)
    }

    /// Move to the previous panel in the cycle
    pub fn retreat(&mut self, query: &mut ParamPanel, body: &mut ParamPanel) -> FocusTarget {
        self.focus(self.current.prev(), query, body)
    }

    /// Focus `target` directly. Only the focused table stays selectable.
    pub fn focus(
        &mut self,
        target: FocusTarget,
        query: &mut ParamPanel,
        body: &mut ParamPanel,
    ) -> FocusTarget {
        tracing::debug!(from = ?self.current, to = ?target, "focus");
        self.current = target;
        query.set_selectable(target == FocusTarget::QueryTable);
        body.set_selectable(target == FocusTarget::BodyTable);
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels() -> (ParamPanel, ParamPanel) {
        (ParamPanel::new("Query Params"), ParamPanel::new("Request Body"))
    }

    #[test]
    fn test_starts_on_url_field() {
        let focus = FocusController::new();
        assert_eq!(focus.current(), FocusTarget::UrlField);
    }

    #[test]
    fn test_four_moves_close_the_cycle() {
        let (mut query, mut body) = panels();
        let mut focus = FocusController::new();
        let mut seen = Vec::new();

        for _ in 0..4 {
            seen.push(focus.advance(&mut query, &mut body));
            let focused = FocusTarget::ALL.iter().filter(|t| focus.is_focused(**t)).count();
            assert_eq!(focused, 1);
        }

        assert_eq!(
            seen,
            vec![
                FocusTarget::QueryTable,
                FocusTarget::BodyTable,
                FocusTarget::MethodSelector,
                FocusTarget::UrlField,
            ]
        );
    }

    #[test]
    fn test_prev_inverts_next() {
        for target in FocusTarget::ALL {
            assert_eq!(target.next().prev(), target);
        }
    }

    #[test]
    fn test_selectability_follows_focus() {
        let (mut query, mut body) = panels();
        let mut focus = FocusController::new();
        assert!(!query.is_selectable() && !body.is_selectable());

        focus.advance(&mut query, &mut body);
        assert!(query.is_selectable());
        assert!(!body.is_selectable());

        focus.advance(&mut query, &mut body);
        assert!(!query.is_selectable());
        assert!(body.is_selectable());

        focus.advance(&mut query, &mut body);
        assert!(!query.is_selectable() && !body.is_selectable());
    }

    #[test]
    fn test_retreat_from_url_field_lands_on_method() {
        let (mut query, mut body) = panels();
        let mut focus = FocusController::new();
        assert_eq!(focus.retreat(&mut query, &mut body), FocusTarget::MethodSelector);
    }
}
