/// How long a statistic takes to count up from zero.
pub const COUNT_UP_DURATION_MS: f64 = 1500.0;

/// Parses the leading integer of a badge's text the way a lenient integer
/// parse does: leading whitespace, optional sign, then digits. Trailing text
/// such as `+` or `k` is ignored. Digit runs too long for an `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first().copied() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }
    // Only overflow can fail here; the run is non-empty ASCII digits.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * value)
}

/// Linear count-up keyed to frame timestamps rather than frame count.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    start: i64,
    end: i64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(end: i64) -> Self {
        Self::with_duration(0, end, COUNT_UP_DURATION_MS)
    }

    pub fn with_duration(start: i64, end: i64, duration_ms: f64) -> Self {
        Self { start, end, duration_ms, started_at: None }
    }

    /// Fraction of the animation elapsed at `timestamp`, clamped to 1. The
    /// first timestamp seen becomes the start time.
    pub fn progress(&mut self, timestamp: f64) -> f64 {
        let started_at = *self.started_at.get_or_insert(timestamp);
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((timestamp - started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Value to display at `timestamp` and whether the animation finished.
    pub fn frame(&mut self, timestamp: f64) -> (i64, bool) {
        let progress = self.progress(timestamp);
        let span = (self.end - self.start) as f64;
        let value = (progress * span + self.start as f64).floor() as i64;
        (value, progress >= 1.0)
    }
}
