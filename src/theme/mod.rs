//! Color themes for the TUI.
//!
//! A theme is selected by name in the config file. Unknown names produce an
//! error with a closest-match suggestion.

use ratatui::style::Color;
use strsim::jaro_winkler;

/// Minimum similarity for a "did you mean" suggestion.
const SIMILARITY_THRESHOLD: f64 = 0.8;

const BUILTIN_THEMES: [&str; 2] = ["dark", "light"];

/// UI colors used across all views.
#[derive(Debug, Clone, PartialEq)]
pub struct UiColors {
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub primary: Color,
    pub selection_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

/// A resolved theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub ui: UiColors,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            name: "dark".into(),
            ui: UiColors {
                fg: Color::Gray,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::Blue,
                primary: Color::White,
                selection_bg: Color::DarkGray,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            },
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light".into(),
            ui: UiColors {
                fg: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                highlight: Color::Magenta,
                primary: Color::Black,
                selection_bg: Color::LightBlue,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            },
        }
    }

    /// Resolve a theme name from config. Unknown names get a closest-match
    /// suggestion in the error message.
    pub fn named(name: &str) -> Result<Theme, String> {
        match name {
            "dark" => Ok(Theme::dark()),
            "light" => Ok(Theme::light()),
            _ => {
                let suggestion = BUILTIN_THEMES
                    .iter()
                    .filter(|&&known| jaro_winkler(name, known) >= SIMILARITY_THRESHOLD)
                    .max_by(|a, b| {
                        jaro_winkler(name, a)
                            .partial_cmp(&jaro_winkler(name, b))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });
                match suggestion {
                    Some(s) => Err(format!("unknown theme: '{}'. Did you mean '{}'?", name, s)),
                    None => Err(format!(
                        "unknown theme: '{}'. Valid themes: dark, light",
                        name
                    )),
                }
            }
        }
    }
}

/// Parse a color string into a ratatui `Color`.
///
/// Supports named colors (`red`, `dark_gray`), hex (`#rrggbb` / `#rgb`) and
/// `"default"` for `Color::Reset`.
pub fn parse_color(s: &str) -> Result<Color, String> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("default") {
        return Ok(Color::Reset);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }
    parse_named_color(s)
}

fn parse_hex_color(hex: &str) -> Result<Color, String> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16)
                .map_err(|_| format!("invalid hex color: #{}", hex))?;
            let g = u8::from_str_radix(&hex[2..4], 16)
                .map_err(|_| format!("invalid hex color: #{}", hex))?;
            let b = u8::from_str_radix(&hex[4..6], 16)
                .map_err(|_| format!("invalid hex color: #{}", hex))?;
            Ok(Color::Rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16)
                .map_err(|_| format!("invalid hex color: #{}", hex))?;
            let g = u8::from_str_radix(&hex[1..2], 16)
                .map_err(|_| format!("invalid hex color: #{}", hex))?;
            let b = u8::from_str_radix(&hex[2..3], 16)
                .map_err(|_| format!("invalid hex color: #{}", hex))?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        _ => Err(format!("invalid hex color: #{}", hex)),
    }
}

fn parse_named_color(s: &str) -> Result<Color, String> {
    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "dark_gray" | "dark_grey" => Ok(Color::DarkGray),
        "white" => Ok(Color::White),
        "reset" => Ok(Color::Reset),
        _ => Err(format!("unknown color: '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_themes_resolve() {
        assert_eq!(Theme::named("dark").unwrap().name, "dark");
        assert_eq!(Theme::named("light").unwrap().name, "light");
    }

    #[test]
    fn test_unknown_theme_suggests_closest() {
        let err = Theme::named("drak").unwrap_err();
        assert!(err.contains("drak"));
        assert!(err.contains("dark"));
    }

    #[test]
    fn test_unknown_theme_without_close_match() {
        let err = Theme::named("zebra").unwrap_err();
        assert!(err.contains("Valid themes"));
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!(parse_color("red").unwrap(), Color::Red);
        assert_eq!(parse_color("DARK_GRAY").unwrap(), Color::DarkGray);
        assert_eq!(parse_color("default").unwrap(), Color::Reset);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_color("#ff0000").unwrap(), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#f00").unwrap(), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_parse_invalid_color() {
        assert!(parse_color("#zz0000").is_err());
        assert!(parse_color("chartreuse-ish").is_err());
    }
}
