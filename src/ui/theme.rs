use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub fg: String,
    pub title: String,
    pub border: String,
    pub border_focused: String,
    pub help: String,
    pub error: String,
    pub error_border: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("clicode")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => tracing::warn!(
                        path = %user_theme_path.display(),
                        %err,
                        "ignoring malformed user theme"
                    ),
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("clicode").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            fg: "252".to_string(),
            title: "230".to_string(),
            border: "63".to_string(),
            border_focused: "#eb650c".to_string(),
            help: "241".to_string(),
            error: "196".to_string(),
            error_border: "196".to_string(),
        }
    }
}

impl ThemeColors {
    /// Accepts `#rrggbb` or a terminal palette index (`0`-`255`).
    pub fn parse_color(value: &str) -> Color {
        if value.len() <= 3 {
            if let Ok(index) = value.parse::<u8>() {
                return Color::Indexed(index);
            }
        }
        let hex = value.trim_start_matches('#');
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn title(&self) -> Color { Self::parse_color(&self.title) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn help(&self) -> Color { Self::parse_color(&self.help) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn error_border(&self) -> Color { Self::parse_color(&self.error_border) }
}
