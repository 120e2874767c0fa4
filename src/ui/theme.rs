use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // Base colors
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Green;
    pub const HIGHLIGHT: Color = Color::Cyan;

    // Status colors
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    // Domain colors
    pub const MOON: Color = Color::Yellow;
    pub const WAXING: Color = Color::Cyan;
    pub const WANING: Color = Color::Magenta;
    pub const RAIN: Color = Color::LightBlue;
    pub const TEMP_COLD: Color = Color::LightBlue;
    pub const TEMP_MILD: Color = Color::Green;
    pub const TEMP_WARM: Color = Color::Yellow;
    pub const TEMP_HOT: Color = Color::Red;

    // Styles
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Self::FG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    /// Temperature color on the coastal-lowland scale (°C).
    pub fn temp_color(temp_c: f64) -> Color {
        if temp_c < 15.0 {
            Self::TEMP_COLD
        } else if temp_c < 28.0 {
            Self::TEMP_MILD
        } else if temp_c < 33.0 {
            Self::TEMP_WARM
        } else {
            Self::TEMP_HOT
        }
    }

    pub fn precip_color(precip_mm: f64) -> Color {
        if precip_mm < 1.0 {
            Self::DIM
        } else if precip_mm <= 10.0 {
            Self::RAIN
        } else {
            Self::WARNING
        }
    }

    /// Color for a 0-100 crop recommendation level.
    pub fn level_color(level: u8) -> Color {
        if level > 60 {
            Self::SUCCESS
        } else if level >= 30 {
            Self::WARNING
        } else {
            Self::ERROR
        }
    }

    pub fn verdict_style(recommended: bool) -> Style {
        if recommended {
            Style::default().fg(Self::SUCCESS)
        } else {
            Style::default().fg(Self::ERROR)
        }
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }
}
