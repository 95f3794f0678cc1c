use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub text_muted: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub border_active: Color,
    pub border_normal: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Theme {
    /// Resolve a theme by its configured name, falling back to the default.
    ///
    pub fn by_name(name: &str) -> Theme {
        match name {
            "midnight" => Theme::midnight(),
            _ => Theme::honeycomb(),
        }
    }

    /// Default amber palette.
    ///
    pub fn honeycomb() -> Theme {
        Theme {
            name: "honeycomb".to_string(),
            primary: Color::Rgb(240, 178, 50),
            secondary: Color::Rgb(196, 134, 24),
            text: Color::Rgb(224, 218, 202),
            text_muted: Color::Rgb(140, 132, 114),
            success: Color::Rgb(122, 178, 92),
            warning: Color::Rgb(224, 164, 88),
            error: Color::Rgb(212, 86, 74),
            border_active: Color::Rgb(240, 178, 50),
            border_normal: Color::Rgb(110, 100, 82),
            highlight_fg: Color::Rgb(30, 26, 18),
            highlight_bg: Color::Rgb(240, 178, 50),
        }
    }

    /// Cool blue palette.
    ///
    pub fn midnight() -> Theme {
        Theme {
            name: "midnight".to_string(),
            primary: Color::Rgb(110, 168, 254),
            secondary: Color::Rgb(78, 120, 186),
            text: Color::Rgb(208, 214, 224),
            text_muted: Color::Rgb(120, 128, 142),
            success: Color::Rgb(104, 186, 140),
            warning: Color::Rgb(224, 180, 96),
            error: Color::Rgb(222, 96, 90),
            border_active: Color::Rgb(110, 168, 254),
            border_normal: Color::Rgb(84, 92, 108),
            highlight_fg: Color::Rgb(16, 20, 28),
            highlight_bg: Color::Rgb(110, 168, 254),
        }
    }
}

impl Default for Theme {
    fn default() -> Theme {
        Theme::honeycomb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_lookup_by_name() {
        assert_eq!(Theme::by_name("midnight").name, "midnight");
        assert_eq!(Theme::by_name("honeycomb").name, "honeycomb");
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        assert_eq!(Theme::by_name("no-such-theme").name, "honeycomb");
    }
}
