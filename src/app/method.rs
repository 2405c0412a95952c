//! Method selector panel and its pick-list overlay

use crate::error::{Error, Result};
use crate::models::HttpMethod;

/// Holds the method text shown in the method panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSelector {
    text: String,
}

impl Default for MethodSelector {
    fn default() -> Self {
        MethodSelector::new(HttpMethod::GET)
    }
}

impl MethodSelector {
    pub fn new(method: HttpMethod) -> Self {
        MethodSelector {
            text: method.as_str().to_string(),
        }
    }

    /// Current text, as sent on the wire
    pub fn value(&self) -> &str {
        &self.text
    }

    /// Replace the panel text without validation
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Open the pick-list with the current method highlighted. Text that
    /// matches no method leaves the list without a highlight.
    pub fn open(&self) -> MethodList {
        let highlighted = match MethodList::position_of(&self.text) {
            Ok(idx) => Some(idx),
            Err(err) => {
                tracing::warn!(%err, "method list opened without pre-selection");
                None
            }
        };
        MethodList { highlighted }
    }

    /// Set the held method from a pick-list choice
    pub fn select(&mut self, method: HttpMethod) {
        tracing::debug!(%method, "method selected");
        self.text = method.as_str().to_string();
    }
}

/// Pick-list overlay listing every method
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodList {
    highlighted: Option<usize>,
}

impl MethodList {
    pub fn items() -> &'static [HttpMethod] {
        &HttpMethod::ALL
    }

    /// Exact text search over the list
    pub fn position_of(text: &str) -> Result<usize> {
        HttpMethod::ALL
            .iter()
            .position(|m| m.as_str() == text)
            .ok_or_else(|| Error::NotFound(text.to_string()))
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn move_up(&mut self) {
        self.highlighted = Some(match self.highlighted {
            Some(i) if i > 0 => i - 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn move_down(&mut self) {
        let last = HttpMethod::ALL.len() - 1;
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1).min(last),
            None => 0,
        });
    }

    /// The highlighted method, if any
    pub fn choice(&self) -> Option<HttpMethod> {
        self.highlighted.and_then(|i| HttpMethod::ALL.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_highlights_current_method() {
        let selector = MethodSelector::new(HttpMethod::PUT);
        let list = selector.open();
        assert_eq!(list.highlighted(), Some(2));
        assert_eq!(list.choice(), Some(HttpMethod::PUT));
    }

    #[test]
    fn test_corrupted_text_opens_unhighlighted() {
        let mut selector = MethodSelector::default();
        selector.set_text("FETCH");
        assert_eq!(
            MethodList::position_of("FETCH"),
            Err(Error::NotFound("FETCH".to_string()))
        );

        let mut list = selector.open();
        assert_eq!(list.highlighted(), None);
        assert_eq!(list.choice(), None);

        list.move_down();
        assert_eq!(list.choice(), Some(HttpMethod::GET));
    }

    #[test]
    fn test_list_movement_is_bounded() {
        let mut list = MethodSelector::default().open();
        list.move_up();
        assert_eq!(list.choice(), Some(HttpMethod::GET));
        for _ in 0..10 {
            list.move_down();
        }
        assert_eq!(list.choice(), Some(HttpMethod::DELETE));
    }

    #[test]
    fn test_select_replaces_text() {
        let mut selector = MethodSelector::default();
        selector.select(HttpMethod::DELETE);
        assert_eq!(selector.value(), "DELETE");
    }
}
