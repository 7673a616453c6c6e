/// Fraction of the remaining distance covered each frame. Not scaled by
/// frame time, so the follow is faster on high refresh rate displays.
pub const SMOOTHING: f64 = 0.1;

/// Pixel multiplier step between the four speed tiers.
pub const SPEED_STEP: f64 = 15.0;

/// Cursor-follow state shared by the floating background elements.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Parallax {
    target_x: f64,
    target_y: f64,
    current_x: f64,
    current_y: f64,
}

impl Parallax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pointer as a fraction of the viewport centered on zero,
    /// roughly `[-0.5, 0.5]` on each axis.
    pub fn set_pointer(&mut self, client_x: f64, client_y: f64, viewport_width: f64, viewport_height: f64) {
        if viewport_width > 0.0 {
            self.target_x = client_x / viewport_width - 0.5;
        }
        if viewport_height > 0.0 {
            self.target_y = client_y / viewport_height - 0.5;
        }
    }

    pub fn target(&self) -> (f64, f64) {
        (self.target_x, self.target_y)
    }

    pub fn current(&self) -> (f64, f64) {
        (self.current_x, self.current_y)
    }

    /// Advances the smoothed position by one frame.
    pub fn step(&mut self) -> (f64, f64) {
        self.current_x += (self.target_x - self.current_x) * SMOOTHING;
        self.current_y += (self.target_y - self.current_y) * SMOOTHING;
        self.current()
    }

    /// Translation in pixels for the floating element at `index`.
    pub fn offset_for(&self, index: usize) -> (f64, f64) {
        let speed = speed_tier(index);
        (self.current_x * speed, self.current_y * speed)
    }

    pub fn transform_for(&self, index: usize) -> String {
        let (x, y) = self.offset_for(index);
        format!("translate({}px, {}px)", x, y)
    }
}

/// 15, 30, 45 or 60 depending on `index % 4`.
pub fn speed_tier(index: usize) -> f64 {
    ((index % 4) as f64 + 1.0) * SPEED_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_is_centered_on_viewport() {
        let mut parallax = Parallax::new();
        parallax.set_pointer(0.0, 600.0, 1200.0, 600.0);
        assert_eq!(parallax.target(), (-0.5, 0.5));
        parallax.set_pointer(600.0, 300.0, 1200.0, 600.0);
        assert_eq!(parallax.target(), (0.0, 0.0));
    }

    #[test]
    fn step_moves_a_tenth_of_the_way() {
        let mut parallax = Parallax::new();
        parallax.set_pointer(1000.0, 0.0, 1000.0, 1000.0);
        let (x, y) = parallax.step();
        assert!((x - 0.05).abs() < 1e-12);
        assert!((y + 0.05).abs() < 1e-12);
    }

    #[test]
    fn approaches_target_without_reaching_it() {
        let mut parallax = Parallax::new();
        parallax.set_pointer(1000.0, 1000.0, 1000.0, 1000.0);
        let mut previous_gap = f64::MAX;
        for _ in 0..200 {
            let (x, _) = parallax.step();
            let gap = 0.5 - x;
            assert!(gap > 0.0);
            assert!(gap < previous_gap);
            previous_gap = gap;
        }
        assert!(previous_gap < 1e-6);
    }

    #[test]
    fn speed_tiers_cycle_every_four_elements() {
        let tiers: Vec<f64> = (0..9).map(speed_tier).collect();
        assert_eq!(tiers, vec![15.0, 30.0, 45.0, 60.0, 15.0, 30.0, 45.0, 60.0, 15.0]);
    }

    #[test]
    fn offsets_scale_with_tier() {
        let mut parallax = Parallax::new();
        parallax.set_pointer(0.0, 0.0, 100.0, 100.0);
        parallax.step();
        let (x0, y0) = parallax.offset_for(0);
        let (x3, y3) = parallax.offset_for(3);
        assert!((x0 + 0.75).abs() < 1e-12);
        assert!((y0 + 0.75).abs() < 1e-12);
        assert!((x3 - 4.0 * x0).abs() < 1e-12);
        assert!((y3 - 4.0 * y0).abs() < 1e-12);
    }

    #[test]
    fn zero_sized_viewport_keeps_previous_target() {
        let mut parallax = Parallax::new();
        parallax.set_pointer(300.0, 300.0, 600.0, 600.0);
        parallax.set_pointer(10.0, 10.0, 0.0, 0.0);
        assert_eq!(parallax.target(), (0.0, 0.0));
    }
}
