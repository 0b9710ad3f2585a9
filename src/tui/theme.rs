use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub income: Color,
    pub expense: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            income: Color::Rgb(34, 197, 94),
            expense: Color::Rgb(239, 68, 68),
        }
    }

    pub fn light() -> Self {
        Self {
            text: Color::Rgb(30, 30, 30),
            dim: Color::Rgb(110, 110, 110),
            accent: Color::Rgb(20, 110, 110),
            income: Color::Rgb(22, 140, 60),
            expense: Color::Rgb(190, 40, 40),
        }
    }

    /// Resolves the configured theme name; anything unrecognized is dark.
    pub fn named(name: Option<&str>) -> Self {
        match name {
            Some("light") => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
