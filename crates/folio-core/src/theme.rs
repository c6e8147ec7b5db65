#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Explicit choice from markup; `Auto` defers to `prefers-color-scheme`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeOverride {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeOverride {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "system" | "" => Some(Self::Auto),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl Theme {
    pub fn detect(prefers_dark: bool, over: ThemeOverride) -> Self {
        match over {
            ThemeOverride::Light => Theme::Light,
            ThemeOverride::Dark => Theme::Dark,
            ThemeOverride::Auto if prefers_dark => Theme::Dark,
            ThemeOverride::Auto => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn other_class_name(self) -> &'static str {
        self.toggled().class_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_system() {
        assert_eq!(Theme::detect(true, ThemeOverride::Light), Theme::Light);
        assert_eq!(Theme::detect(false, ThemeOverride::Dark), Theme::Dark);
        assert_eq!(Theme::detect(true, ThemeOverride::Auto), Theme::Dark);
        assert_eq!(Theme::detect(false, ThemeOverride::Auto), Theme::Light);
    }

    #[test]
    fn parse_override() {
        assert_eq!(ThemeOverride::parse(" Dark "), Some(ThemeOverride::Dark));
        assert_eq!(ThemeOverride::parse("system"), Some(ThemeOverride::Auto));
        assert_eq!(ThemeOverride::parse("sepia"), None);
    }
}
