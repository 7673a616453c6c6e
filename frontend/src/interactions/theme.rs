/// Delay before the preview panel is re-shown, so its reveal transition
/// plays again after the image swap.
pub const RESHOW_DELAY_MS: u32 = 50;

/// Source and alt text for the theme preview image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePreview {
    pub src: String,
    pub alt: String,
}

impl ThemePreview {
    /// Preview images live next to the page as `<theme>.png`.
    pub fn for_theme(theme_id: &str) -> Self {
        Self {
            src: format!("{}.png", theme_id),
            alt: format!("{} Theme", theme_id),
        }
    }
}

/// Mutually exclusive theme badge group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSelection {
    active: String,
}

impl ThemeSelection {
    pub fn new(initial: &str) -> Self {
        Self { active: initial.to_string() }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, theme_id: &str) -> bool {
        self.active == theme_id
    }

    pub fn preview(&self) -> ThemePreview {
        ThemePreview::for_theme(&self.active)
    }

    /// Marks `theme_id` as the only active badge and returns its preview.
    pub fn select(&mut self, theme_id: &str) -> ThemePreview {
        self.active = theme_id.to_string();
        self.preview()
    }
}
