//! Color normalization for peer-supplied stroke and presence colors.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Channels used when neither a value nor its fallback parses.
const FALLBACK_RGB: (u8, u8, u8) = (0x22, 0x22, 0x22);

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => Some((
            doubled_nibble(&hex[0..1])?,
            doubled_nibble(&hex[1..2])?,
            doubled_nibble(&hex[2..3])?,
        )),
        6 => Some((
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        _ => None,
    }
}

/// Expand a single hex digit into its doubled two-digit channel value.
fn doubled_nibble(digit: &str) -> Option<u8> {
    let low = u8::from_str_radix(digit, 16).ok()?;
    Some((low << 4) | low)
}

/// Normalize a color to canonical lowercase `#rrggbb`.
///
/// Falls back to `fallback`, then to a neutral ink color, when parsing
/// fails.
#[must_use]
pub fn normalize_hex_color(value: &str, fallback: &str) -> String {
    let (r, g, b) = parse_hex_rgb(value)
        .or_else(|| parse_hex_rgb(fallback))
        .unwrap_or(FALLBACK_RGB);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// CSS `rgba()` string for `color` at `alpha`, as fed to canvas stroke
/// styles when drawing a fading segment.
///
/// Alpha is clamped to `[0.0, 1.0]`; non-finite alpha renders transparent.
#[must_use]
pub fn rgba_css(color: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex_rgb(color).unwrap_or(FALLBACK_RGB);
    let a = if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("rgba({r}, {g}, {b}, {a:.3})")
}
