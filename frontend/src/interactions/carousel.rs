/// Feature card width plus the gap between cards.
pub const FEATURE_CARD_STRIDE: f64 = 280.0 + 35.0;
/// Screenshot card width plus the gap between cards.
pub const SCREENSHOT_CARD_STRIDE: f64 = 350.0 + 35.0;

/// Which way a carousel track moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the first item.
    Previous,
    /// Toward the last item.
    Next,
}

/// Horizontal offset of a manually scrolled card track.
///
/// The offset is always within `[max_scroll, 0]`; `stride` is one card's
/// width plus the gap between cards.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselTrack {
    stride: f64,
    offset: f64,
}

impl CarouselTrack {
    pub fn new(stride: f64) -> Self {
        Self { stride, offset: 0.0 }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn stride(&self) -> f64 {
        self.stride
    }

    /// Leftmost offset for `item_count` cards in a viewport `viewport_width`
    /// pixels wide. Recomputed per call so resizes are picked up.
    pub fn max_scroll(&self, item_count: usize, viewport_width: f64) -> f64 {
        let visible = (viewport_width / self.stride).floor().max(0.0);
        let hidden = item_count as f64 - visible;
        if hidden > 0.0 {
            -(self.stride * hidden)
        } else {
            0.0
        }
    }

    /// Moves one card in `direction` and returns the new offset.
    pub fn scroll(&mut self, direction: Direction, item_count: usize, viewport_width: f64) -> f64 {
        self.offset = match direction {
            Direction::Previous => (self.offset + self.stride).min(0.0),
            Direction::Next => {
                let max_scroll = self.max_scroll(item_count, viewport_width);
                (self.offset - self.stride).max(max_scroll)
            }
        };
        self.offset
    }

    /// CSS transform placing the track at the current offset.
    pub fn transform(&self) -> String {
        format!("translateX({}px)", self.offset)
    }
}
