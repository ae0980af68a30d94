use crate::color::{
    Color,
    text,
};

/// The currently selected color.
///
/// The RGB and hex texts are derived on every read. Anything that caches them
/// (e.g. a text field's edit buffer) should compare [`revision`][Self::revision]
/// against the revision it last saw, and refresh when it differs.
#[derive(Clone, Debug)]
pub struct ColorState {
    color: Color,
    revision: u64,
}

impl ColorState {
    pub fn new(color: Color) -> Self {
        Self { color, revision: 0 }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        if color != self.color {
            self.color = color;
            self.revision += 1;
        }
    }

    /// Increases every time the color changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn rgb_text(&self) -> String {
        text::format_rgb(self.color)
    }

    /// Sets the color from `R,G,B` text.
    ///
    /// Invalid text is ignored and leaves the color as it was. Returns whether
    /// the text was accepted.
    pub fn set_rgb_text(&mut self, rgb: &str) -> bool {
        text::parse_rgb(rgb)
            .map(|color| self.set_color(color))
            .is_ok()
    }

    pub fn hex_text(&self) -> String {
        text::format_hex(self.color)
    }

    /// Sets the color from `#RRGGBB` text.
    ///
    /// Invalid text is ignored and leaves the color as it was. Returns whether
    /// the text was accepted.
    pub fn set_hex_text(&mut self, hex: &str) -> bool {
        text::parse_hex(hex)
            .map(|color| self.set_color(color))
            .is_ok()
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(Color::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::color::{
        Color,
        state::ColorState,
    };

    #[test]
    fn defaults_to_red() {
        let state = ColorState::default();
        assert_eq!(state.color(), Color::RED);
        assert_eq!(state.rgb_text(), "255,0,0");
        assert_eq!(state.hex_text(), "#FF0000");
    }

    #[test]
    fn rgb_text_round_trips() {
        let mut state = ColorState::default();
        for (r, g, b) in [(0, 0, 0), (1, 2, 3), (255, 255, 255), (17, 128, 254)] {
            let text = ColorState::new(Color::new(r, g, b)).rgb_text();
            assert!(state.set_rgb_text(&text));
            assert_eq!(state.color(), Color::new(r, g, b));
        }
    }

    #[test]
    fn hex_text_round_trips() {
        let mut state = ColorState::default();
        let color = Color::new(0xab, 0xcd, 0xef);
        let hex = ColorState::new(color).hex_text();

        assert!(state.set_hex_text(&hex));
        assert_eq!(state.color(), color);

        state.set_color(Color::BLACK);
        assert!(state.set_hex_text(&hex.to_lowercase()));
        assert_eq!(state.color(), color);
    }

    #[test]
    fn invalid_text_leaves_color_unchanged() {
        let mut state = ColorState::new(Color::new(1, 2, 3));
        let revision = state.revision();

        assert!(!state.set_rgb_text("bad"));
        assert!(!state.set_rgb_text("1,2,300"));
        assert!(!state.set_hex_text("#12"));
        assert!(!state.set_hex_text("zzzzzz"));

        assert_eq!(state.color(), Color::new(1, 2, 3));
        assert_eq!(state.revision(), revision);
    }

    #[test]
    fn one_change_updates_all_derived_texts() {
        let mut state = ColorState::default();
        let revision = state.revision();

        assert!(state.set_rgb_text("0,128,255"));

        assert_eq!(state.hex_text(), "#0080FF");
        assert_eq!(state.rgb_text(), "0,128,255");
        assert_eq!(state.color(), Color::new(0, 128, 255));
        assert!(state.revision() > revision);
    }

    #[test]
    fn setting_the_same_color_keeps_revision() {
        let mut state = ColorState::default();
        let revision = state.revision();
        state.set_color(Color::RED);
        assert!(state.set_hex_text("#ff0000"));
        assert_eq!(state.revision(), revision);
    }
}
