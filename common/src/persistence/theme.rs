use std::str::FromStr;

use super::error::SnapshotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const LIGHT_GRAY: Rgb = Rgb::new(192, 192, 192);
    pub const DARK_GRAY: Rgb = Rgb::new(64, 64, 64);
    pub const LIGHT_BLUE: Rgb = Rgb::new(173, 216, 230);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn packed(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    // Keeps the low 24 bits, dropping any alpha byte.
    pub fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreset {
    Classic,
    Dark,
    Light,
}

impl ThemePreset {
    pub fn colors(&self) -> (Rgb, Rgb) {
        match self {
            ThemePreset::Classic => (Rgb::LIGHT_GRAY, Rgb::WHITE),
            ThemePreset::Dark => (Rgb::DARK_GRAY, Rgb::BLACK),
            ThemePreset::Light => (Rgb::WHITE, Rgb::LIGHT_BLUE),
        }
    }
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" | "classic mode" => Ok(ThemePreset::Classic),
            "dark" | "dark mode" => Ok(ThemePreset::Dark),
            "light" | "light mode" => Ok(ThemePreset::Light),
            other => Err(format!("Unknown theme '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub button: Rgb,
    pub font_name: String,
    pub font_size: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb::LIGHT_GRAY,
            button: Rgb::WHITE,
            font_name: "Arial".to_string(),
            font_size: 60,
        }
    }
}

impl Theme {
    pub fn apply_preset(&mut self, preset: ThemePreset) {
        let (background, button) = preset.colors();
        self.background = background;
        self.button = button;
    }

    pub fn customize_font(&mut self, font_name: &str, font_size: &str) -> Result<(), String> {
        let font_name = font_name.trim();
        if font_name.is_empty() {
            return Ok(());
        }
        let font_size = parse_font_size(font_size)?;
        self.font_name = font_name.to_string();
        self.font_size = font_size;
        Ok(())
    }
}

fn parse_font_size(value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(format!("Font size must be a positive integer, got '{}'", value.trim())),
    }
}

pub fn serialize_theme(theme: &Theme) -> String {
    format!(
        "{}\n{}\n{}\n{}\n",
        theme.background.packed(),
        theme.button.packed(),
        theme.font_name,
        theme.font_size
    )
}

pub fn deserialize_theme(text: &str) -> Result<Theme, SnapshotError> {
    let mut lines = text.lines().map(str::trim);
    let mut next_line = |what: &str| {
        lines
            .next()
            .ok_or_else(|| missing(format!("missing {} line", what)))
    };

    let background = parse_color(next_line("background color")?)?;
    let button = parse_color(next_line("button color")?)?;

    let font_name = next_line("font name")?;
    if font_name.is_empty() {
        return Err(missing("font name is blank".to_string()));
    }

    let font_size = parse_font_size(next_line("font size")?).map_err(missing)?;

    Ok(Theme {
        background,
        button,
        font_name: font_name.to_string(),
        font_size,
    })
}

fn missing(reason: String) -> SnapshotError {
    SnapshotError::MissingPreferences(reason)
}

fn parse_color(value: &str) -> Result<Rgb, SnapshotError> {
    let packed = value
        .parse::<i64>()
        .ok()
        .filter(|v| *v >= i32::MIN as i64 && *v <= u32::MAX as i64)
        .ok_or_else(|| missing(format!("invalid color '{}'", value)))?;
    Ok(Rgb::from_packed(packed as u32))
}
