use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Self::Dark
    }
}

/// The active theme and whether the visitor picked it.
///
/// A stored choice always wins. Without one the theme follows the system
/// color-scheme preference, including live changes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    current: Theme,
    explicit: bool,
}

impl ThemePreference {
    /// `stored` is the raw value read from storage; unknown values are ignored.
    pub fn resolve(stored: Option<&str>, system_dark: bool) -> Self {
        match stored.and_then(Theme::parse) {
            Some(theme) => Self {
                current: theme,
                explicit: true,
            },
            None => Self {
                current: Theme::from_dark(system_dark),
                explicit: false,
            },
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Flips the theme. The result is an explicit choice to persist.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.explicit = true;
        self.current
    }

    /// Applies a system preference change. Returns the new theme if it changed.
    pub fn system_changed(&mut self, system_dark: bool) -> Option<Theme> {
        if self.explicit {
            return None;
        }
        let theme = Theme::from_dark(system_dark);
        if theme == self.current {
            return None;
        }
        self.current = theme;
        Some(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_choice_wins() {
        let preference = ThemePreference::resolve(Some("light"), true);
        assert_eq!(preference.current(), Theme::Light);
        assert!(preference.is_explicit());
    }

    #[test]
    fn test_falls_back_to_system() {
        assert_eq!(ThemePreference::resolve(None, true).current(), Theme::Dark);
        assert_eq!(ThemePreference::resolve(None, false).current(), Theme::Light);
    }

    #[test]
    fn test_unknown_stored_value_is_ignored() {
        let preference = ThemePreference::resolve(Some("sepia"), true);
        assert_eq!(preference.current(), Theme::Dark);
        assert!(!preference.is_explicit());
    }

    #[test]
    fn test_toggle_becomes_explicit() {
        let mut preference = ThemePreference::resolve(None, false);
        assert_eq!(preference.toggle(), Theme::Dark);
        assert_eq!(preference.system_changed(false), None);
        assert_eq!(preference.current(), Theme::Dark);
    }

    #[test]
    fn test_follows_system_without_choice() {
        let mut preference = ThemePreference::resolve(None, false);
        assert_eq!(preference.system_changed(true), Some(Theme::Dark));
        assert_eq!(preference.system_changed(true), None);
    }

    #[test]
    fn test_round_trips_storage_strings() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }
}
