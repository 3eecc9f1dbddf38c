//! Global display theme.

use serde::{Deserialize, Serialize};

/// Named visual variant of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Blue,
    Peach,
    Dark,
}

/// Display variables a theme pushes to the active rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Whether the platform color scheme should switch to dark.
    pub dark_scheme: bool,
    /// `(variable, value)` pairs, e.g. `("--primary", "oklch(0.5 0.2 250)")`.
    pub variables: [(&'static str, &'static str); 4],
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Blue, Self::Peach, Self::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Peach => "peach",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored token; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "blue" => Some(Self::Blue),
            "peach" => Some(Self::Peach),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Blue => "Biru Segar",
            Self::Peach => "Peach Hangat",
            Self::Dark => "Mode Gelap",
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Self::Blue => ThemePalette {
                dark_scheme: false,
                variables: [
                    ("--background", "oklch(0.98 0.005 250)"),
                    ("--foreground", "oklch(0.2 0.01 250)"),
                    ("--primary", "oklch(0.5 0.2 250)"),
                    ("--card", "oklch(1 0 0)"),
                ],
            },
            Self::Peach => ThemePalette {
                dark_scheme: false,
                variables: [
                    ("--background", "oklch(0.96 0.01 40)"),
                    ("--foreground", "oklch(0.2 0.01 40)"),
                    ("--primary", "oklch(0.6 0.15 40)"),
                    ("--card", "oklch(1 0 0)"),
                ],
            },
            Self::Dark => ThemePalette {
                dark_scheme: true,
                variables: [
                    ("--background", "oklch(0.2 0 0)"),
                    ("--foreground", "oklch(0.95 0 0)"),
                    ("--primary", "oklch(0.7 0.15 250)"),
                    ("--card", "oklch(0.15 0 0)"),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn parse_accepts_known_tokens_only() {
        for theme in Theme::ALL {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn only_dark_switches_color_scheme() {
        assert!(Theme::Dark.palette().dark_scheme);
        assert!(!Theme::Peach.palette().dark_scheme);
    }
}
