/// Distance from the top of the page inside which the header always shows.
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// Tracks scroll direction to decide whether the fixed header is hidden.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HeaderVisibility {
    last_scroll_top: f64,
    hidden: bool,
}

impl HeaderVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the current vertical offset and returns whether the header
    /// should now be hidden.
    pub fn on_scroll(&mut self, scroll_top: f64) -> bool {
        self.hidden = if scroll_top > SCROLL_THRESHOLD {
            scroll_top > self.last_scroll_top
        } else {
            false
        };
        self.last_scroll_top = scroll_top;
        self.hidden
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }
}
