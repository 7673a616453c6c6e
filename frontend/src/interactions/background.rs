use rand::seq::SliceRandom;
use rand::Rng;

pub const CONFETTI_COUNT: usize = 30;
pub const CONFETTI_COLORS: [&str; 5] = ["#ff6b6b", "#feca57", "#48dbfb", "#ff9ff3", "#1dd1a1"];

pub const TILE_COUNT: usize = 20;
pub const TILE_LABELS: [&str; 11] = [
    "2", "4", "8", "16", "32", "64", "128", "256", "512", "1024", "2048",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfettiShape {
    Circle,
    RoundedSquare,
}

impl ConfettiShape {
    pub fn border_radius(self) -> &'static str {
        match self {
            ConfettiShape::Circle => "50%",
            ConfettiShape::RoundedSquare => "2px",
        }
    }
}

/// One falling confetti piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Confetti {
    pub left_pct: f64,
    pub color: &'static str,
    pub delay_s: f64,
    pub duration_s: f64,
    pub shape: ConfettiShape,
}

impl Confetti {
    pub fn style(&self) -> String {
        format!(
            "left: {}%; background: {}; animation-delay: {}s; animation-duration: {}s; border-radius: {};",
            self.left_pct,
            self.color,
            self.delay_s,
            self.duration_s,
            self.shape.border_radius()
        )
    }
}

/// A floating game tile carrying a power of two.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingTile {
    pub label: &'static str,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl FloatingTile {
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s;",
            self.left_pct, self.top_pct, self.delay_s, self.duration_s
        )
    }
}

/// Everything appended to the background container at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub confetti: Vec<Confetti>,
    pub tiles: Vec<FloatingTile>,
}

impl Background {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let confetti = (0..CONFETTI_COUNT).map(|_| confetti(rng)).collect();
        let tiles = (0..TILE_COUNT).map(|i| tile(rng, i)).collect();
        Self { confetti, tiles }
    }
}

fn confetti<R: Rng + ?Sized>(rng: &mut R) -> Confetti {
    Confetti {
        left_pct: rng.gen::<f64>() * 100.0,
        color: CONFETTI_COLORS.choose(rng).copied().unwrap_or(CONFETTI_COLORS[0]),
        delay_s: rng.gen::<f64>() * 10.0,
        duration_s: 8.0 + rng.gen::<f64>() * 7.0,
        shape: if rng.gen_bool(0.5) {
            ConfettiShape::Circle
        } else {
            ConfettiShape::RoundedSquare
        },
    }
}

fn tile<R: Rng + ?Sized>(rng: &mut R, index: usize) -> FloatingTile {
    FloatingTile {
        label: TILE_LABELS[index % TILE_LABELS.len()],
        left_pct: rng.gen::<f64>() * 100.0,
        top_pct: rng.gen::<f64>() * 100.0,
        delay_s: rng.gen::<f64>() * 12.0,
        duration_s: 12.0 + rng.gen::<f64>() * 8.0,
    }
}
