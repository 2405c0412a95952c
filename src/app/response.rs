//! Response view - read-only, scrollable response text

use crate::constants::RESPONSE_BANNER;

/// What the response panel currently shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseContent {
    Banner,
    Loading,
    Body {
        status: u16,
        body: String,
        time_ms: u64,
    },
    TransportError {
        message: String,
        time_ms: u64,
    },
}

#[derive(Clone, Debug)]
pub struct ResponseView {
    pub content: ResponseContent,
    pub scroll: u16,
}

impl Default for ResponseView {
    fn default() -> Self {
        ResponseView {
            content: ResponseContent::Banner,
            scroll: 0,
        }
    }
}

impl ResponseView {
    pub fn set_loading(&mut self) {
        self.content = ResponseContent::Loading;
        self.scroll = 0;
    }

    pub fn set_body(&mut self, status: u16, body: String, time_ms: u64) {
        self.content = ResponseContent::Body { status, body, time_ms };
        self.scroll = 0;
    }

    pub fn set_error(&mut self, message: String, time_ms: u64) {
        self.content = ResponseContent::TransportError { message, time_ms };
        self.scroll = 0;
    }

    /// Text to draw
    pub fn text(&self) -> &str {
        match &self.content {
            ResponseContent::Banner => RESPONSE_BANNER,
            ResponseContent::Loading => "Loading...",
            ResponseContent::Body { body, .. } => body,
            ResponseContent::TransportError { message, .. } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self.content {
            ResponseContent::Body { status, .. } => Some(status),
            _ => None,
        }
    }

    pub fn time_ms(&self) -> Option<u64> {
        match self.content {
            ResponseContent::Body { time_ms, .. } | ResponseContent::TransportError { time_ms, .. } => Some(time_ms),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.content, ResponseContent::TransportError { .. })
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Stops on the last line of the text
    pub fn scroll_down(&mut self) {
        let last_line = u16::try_from(self.text().lines().count().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(last_line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_stops_at_last_line() {
        let mut view = ResponseView::default();
        view.set_body(200, "a\nb\nc".to_string(), 5);

        for _ in 0..10 {
            view.scroll_down();
        }
        assert_eq!(view.scroll, 2);

        view.scroll_up();
        assert_eq!(view.scroll, 1);
    }

    #[test]
    fn test_new_content_resets_scroll() {
        let mut view = ResponseView::default();
        view.set_body(200, "a\nb".to_string(), 5);
        view.scroll_down();
        assert_eq!(view.scroll, 1);

        view.set_error("Request timed out".to_string(), 30_000);
        assert_eq!(view.scroll, 0);
        view.scroll_down();
        assert_eq!(view.scroll, 0);
        assert!(view.is_error());
        assert_eq!(view.time_ms(), Some(30_000));
    }
}
