use super::prefs::PreferenceStore;

/// Preference key the stored theme lives under.
pub const THEME_KEY: &str = "gaurav-theme-v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Only the literal "light" selects the light theme; anything else,
    /// absence included, is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn stored_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph shown on every theme toggle control.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "\u{2600}\u{fe0f}",
            Theme::Dark => "\u{1f319}",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Owns the persisted theme preference. Widget repaints happen in the UI
/// layer; this controller only tracks and stores the chosen theme.
pub struct ThemeController {
    store: PreferenceStore,
    current: Theme,
}

impl ThemeController {
    pub fn new(store: PreferenceStore) -> Self {
        let current = Theme::from_stored(store.get(THEME_KEY));
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.store.set(THEME_KEY, theme.stored_value());
    }

    /// Flip the current theme, persist it, and return the new value.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.flipped();
        self.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_controller() -> (tempfile::TempDir, ThemeController) {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open(dir.path().join("prefs.json"));
        (dir, ThemeController::new(store))
    }

    #[test]
    fn test_stored_light_selects_light() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn test_anything_else_is_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    }

    #[test]
    fn test_default_is_dark_with_moon_glyph() {
        let (_dir, controller) = temp_controller();
        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(controller.current().glyph(), "\u{1f319}");
    }

    #[test]
    fn test_light_glyph_is_sun() {
        assert_eq!(Theme::Light.glyph(), "\u{2600}\u{fe0f}");
    }

    #[test]
    fn test_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut controller = ThemeController::new(PreferenceStore::open(path.clone()));
        assert_eq!(controller.toggle(), Theme::Light);

        let reopened = ThemeController::new(PreferenceStore::open(path));
        assert_eq!(reopened.current(), Theme::Light);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut controller = ThemeController::new(PreferenceStore::open(path.clone()));
        let original = controller.current();
        controller.toggle();
        controller.toggle();
        assert_eq!(controller.current(), original);

        let reopened = ThemeController::new(PreferenceStore::open(path));
        assert_eq!(reopened.current(), original);
    }
}
