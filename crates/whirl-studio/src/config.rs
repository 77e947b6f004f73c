use std::path::PathBuf;

use whirl_engine::paint::Color;

/// `env_logger` filter for the studio process.
pub const LOG_VAR: &str = "WHIRL_LOG";

/// Demo window and renderer settings.
///
/// Every field can be overridden from the environment. The log filter is
/// read separately from [`LOG_VAR`] before anything else runs.
///
/// | variable           | example         |
/// |--------------------|-----------------|
/// | `WHIRL_TITLE`      | `Whirl Studio`  |
/// | `WHIRL_SIZE`       | `1280x720`      |
/// | `WHIRL_CLEAR`      | `#1e1e2e`       |
/// | `WHIRL_SHADER_DIR` | `./shaders`     |
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: Color,
    pub shader_dir: Option<PathBuf>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "Whirl Studio".to_string(),
            width: 800,
            height: 600,
            clear_color: Color::rgb(0x1e, 0x1e, 0x2e),
            shader_dir: None,
        }
    }
}

impl StudioConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`; malformed values are logged and skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(title) = lookup("WHIRL_TITLE") {
            config.title = title;
        }
        if let Some(size) = lookup("WHIRL_SIZE") {
            match parse_size(&size) {
                Some((w, h)) => {
                    config.width = w;
                    config.height = h;
                }
                None => log::warn!("ignoring WHIRL_SIZE={size:?}: expected WIDTHxHEIGHT"),
            }
        }
        if let Some(clear) = lookup("WHIRL_CLEAR") {
            match parse_hex_color(&clear) {
                Some(color) => config.clear_color = color,
                None => log::warn!("ignoring WHIRL_CLEAR={clear:?}: expected #rrggbb or #rrggbbaa"),
            }
        }
        if let Some(dir) = lookup("WHIRL_SHADER_DIR") {
            config.shader_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

fn parse_size(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.trim().split_once(['x', 'X'])?;
    let w: u32 = w.trim().parse().ok()?;
    let h: u32 = h.trim().parse().ok()?;
    (w > 0 && h > 0).then_some((w, h))
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        6 => Some(Color((value << 8) | 0xff)),
        8 => Some(Color(value)),
        _ => None,
    }
}
