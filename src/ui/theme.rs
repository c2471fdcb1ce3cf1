use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// All available built-in theme names.
pub const BUILTIN_THEME_NAMES: &[&str] = &["default", "gruvbox", "nord", "solarized"];

/// Data-driven theme: every color in one struct.
/// Constructed from built-in presets or loaded from TOML files.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ── Brand / Primary ──────────────────────────────────────
    /// Header title (the yellow of the traffic signs).
    pub brand: Color,
    /// Header subtitle / secondary brand (the red of the traffic signs).
    pub brand_secondary: Color,
    /// Chat chrome and highlights.
    pub accent: Color,
    pub bg_dark: Color,

    // ── Text ─────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_dim: Color,
    pub text_muted: Color,

    // ── Card families ────────────────────────────────────────
    pub eco: Color,
    pub tip: Color,
    pub law: Color,
    pub penalty: Color,

    // ── Borders ──────────────────────────────────────────────
    pub border: Color,

    // ── Chat bubbles ─────────────────────────────────────────
    pub user_bubble: Color,
    pub bot_bubble: Color,
    pub bot_text: Color,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────

    /// Default dark theme: yellow/red header, green eco cards, blue chat.
    pub fn default_dark() -> Self {
        Self {
            name: "default".to_string(),
            brand: Color::Rgb(250, 204, 21),
            brand_secondary: Color::Rgb(239, 68, 68),
            accent: Color::Rgb(59, 130, 246),
            bg_dark: Color::Rgb(22, 22, 30),
            text_primary: Color::Rgb(220, 220, 235),
            text_dim: Color::Rgb(150, 150, 170),
            text_muted: Color::Rgb(90, 90, 110),
            eco: Color::Rgb(34, 197, 94),
            tip: Color::Rgb(234, 179, 8),
            law: Color::Rgb(239, 68, 68),
            penalty: Color::Rgb(250, 204, 21),
            border: Color::Rgb(60, 60, 80),
            user_bubble: Color::Rgb(59, 130, 246),
            bot_bubble: Color::Rgb(254, 240, 138),
            bot_text: Color::Rgb(230, 225, 200),
        }
    }

    /// Gruvbox dark palette.
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            brand: Color::Rgb(250, 189, 47),           // yellow bright
            brand_secondary: Color::Rgb(251, 73, 52),  // red
            accent: Color::Rgb(131, 165, 152),         // blue
            bg_dark: Color::Rgb(40, 40, 40),           // bg0
            text_primary: Color::Rgb(235, 219, 178),   // fg
            text_dim: Color::Rgb(168, 153, 132),       // fg4
            text_muted: Color::Rgb(102, 92, 84),       // bg4
            eco: Color::Rgb(142, 192, 124),            // green
            tip: Color::Rgb(215, 153, 33),             // yellow
            law: Color::Rgb(251, 73, 52),
            penalty: Color::Rgb(254, 128, 25),         // orange
            border: Color::Rgb(80, 73, 69),
            user_bubble: Color::Rgb(131, 165, 152),
            bot_bubble: Color::Rgb(215, 153, 33),
            bot_text: Color::Rgb(235, 219, 178),
        }
    }

    /// Nord palette.
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            brand: Color::Rgb(235, 203, 139),          // nord13 yellow
            brand_secondary: Color::Rgb(191, 97, 106), // nord11 red
            accent: Color::Rgb(136, 192, 208),         // nord8 frost
            bg_dark: Color::Rgb(46, 52, 64),           // nord0
            text_primary: Color::Rgb(229, 233, 240),   // nord5
            text_dim: Color::Rgb(182, 191, 204),
            text_muted: Color::Rgb(107, 112, 127),
            eco: Color::Rgb(163, 190, 140),            // nord14 green
            tip: Color::Rgb(235, 203, 139),
            law: Color::Rgb(191, 97, 106),
            penalty: Color::Rgb(208, 135, 112),        // nord12 orange
            border: Color::Rgb(76, 86, 106),           // nord3
            user_bubble: Color::Rgb(129, 161, 193),    // nord9
            bot_bubble: Color::Rgb(235, 203, 139),
            bot_text: Color::Rgb(216, 222, 233),       // nord4
        }
    }

    /// Solarized dark palette.
    pub fn solarized() -> Self {
        Self {
            name: "solarized".to_string(),
            brand: Color::Rgb(181, 137, 0),          // yellow
            brand_secondary: Color::Rgb(220, 50, 47), // red
            accent: Color::Rgb(38, 139, 210),        // blue
            bg_dark: Color::Rgb(0, 43, 54),          // base03
            text_primary: Color::Rgb(147, 161, 161), // base1
            text_dim: Color::Rgb(101, 123, 131),     // base00
            text_muted: Color::Rgb(88, 110, 117),    // base01
            eco: Color::Rgb(133, 153, 0),            // green
            tip: Color::Rgb(181, 137, 0),
            law: Color::Rgb(220, 50, 47),
            penalty: Color::Rgb(203, 75, 22),        // orange
            border: Color::Rgb(88, 110, 117),
            user_bubble: Color::Rgb(38, 139, 210),
            bot_bubble: Color::Rgb(181, 137, 0),
            bot_text: Color::Rgb(147, 161, 161),
        }
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_dark()),
            "gruvbox" => Some(Self::gruvbox()),
            "nord" => Some(Self::nord()),
            "solarized" => Some(Self::solarized()),
            _ => None,
        }
    }

    /// Cycle to the next built-in theme. Custom themes cycle back to the first built-in.
    pub fn next_builtin(&self) -> Self {
        let next_idx = BUILTIN_THEME_NAMES
            .iter()
            .position(|&n| n == self.name)
            .map_or(0, |idx| (idx + 1) % BUILTIN_THEME_NAMES.len());
        Self::by_name(BUILTIN_THEME_NAMES[next_idx]).unwrap_or_default()
    }

    /// Load a custom theme from a TOML file, falling back to default for missing fields.
    pub fn from_toml_file(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let file: ThemeFile = match toml::from_str(&content) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(path = %path.display(), "invalid theme file: {}", e);
                return None;
            }
        };
        Some(
            file.into_theme(
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("custom"),
            ),
        )
    }

    // ── Computed Styles ──────────────────────────────────────

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.brand)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_active_style(&self) -> Style {
        Style::default()
            .fg(self.bg_dark)
            .bg(self.brand)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_highlight_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn user_bubble_style(&self) -> Style {
        Style::default().fg(Color::White).bg(self.user_bubble)
    }

    pub fn bot_bubble_style(&self) -> Style {
        Style::default().fg(self.bot_text)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// ── TOML deserialization for custom themes ──────────────────

/// Intermediate struct for parsing theme TOML files.
/// All fields are optional; missing fields inherit from the default theme.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeFile {
    brand: Option<String>,
    brand_secondary: Option<String>,
    accent: Option<String>,
    bg_dark: Option<String>,
    text_primary: Option<String>,
    text_dim: Option<String>,
    text_muted: Option<String>,
    eco: Option<String>,
    tip: Option<String>,
    law: Option<String>,
    penalty: Option<String>,
    border: Option<String>,
    user_bubble: Option<String>,
    bot_bubble: Option<String>,
    bot_text: Option<String>,
}

impl ThemeFile {
    fn into_theme(self, name: &str) -> Theme {
        let base = Theme::default_dark();
        Theme {
            name: name.to_string(),
            brand: parse_color(&self.brand).unwrap_or(base.brand),
            brand_secondary: parse_color(&self.brand_secondary).unwrap_or(base.brand_secondary),
            accent: parse_color(&self.accent).unwrap_or(base.accent),
            bg_dark: parse_color(&self.bg_dark).unwrap_or(base.bg_dark),
            text_primary: parse_color(&self.text_primary).unwrap_or(base.text_primary),
            text_dim: parse_color(&self.text_dim).unwrap_or(base.text_dim),
            text_muted: parse_color(&self.text_muted).unwrap_or(base.text_muted),
            eco: parse_color(&self.eco).unwrap_or(base.eco),
            tip: parse_color(&self.tip).unwrap_or(base.tip),
            law: parse_color(&self.law).unwrap_or(base.law),
            penalty: parse_color(&self.penalty).unwrap_or(base.penalty),
            border: parse_color(&self.border).unwrap_or(base.border),
            user_bubble: parse_color(&self.user_bubble).unwrap_or(base.user_bubble),
            bot_bubble: parse_color(&self.bot_bubble).unwrap_or(base.bot_bubble),
            bot_text: parse_color(&self.bot_text).unwrap_or(base.bot_text),
        }
    }
}

/// Parse a hex color string like "#FF8800" or "FF8800" into a ratatui Color.
fn parse_color(opt: &Option<String>) -> Option<Color> {
    let s = opt.as_ref()?;
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
