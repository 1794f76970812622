//! Color parsing and brightness utilities for the Trellis component builder.
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! These helpers normalize the color forms that show up in style text
//! (`#rrggbb`, `rgb(r, g, b)`, named colors) into hex notation and shift
//! brightness per channel. They are exposed to event callbacks through the
//! component's helper set, so hover handlers can brighten a color on
//! mouseover and restore it on mouseout.
//!
//! All functions are pure and return `None` rather than failing on input
//! they cannot interpret.

mod named;

/// Look up an extended color keyword, case-insensitively.
///
/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
/// "All of these keywords are ASCII case-insensitive."
///
/// Returns the lowercase `#rrggbb` code, or `None` for an unknown name.
pub fn hex_code_for_name(name: &str) -> Option<&'static str> {
    let lowered = name.to_ascii_lowercase();
    named::NAMED_COLORS
        .binary_search_by(|(key, _)| key.cmp(&lowered.as_str()))
        .ok()
        .map(|index| named::NAMED_COLORS[index].1)
}

/// Normalize a color code to hex notation.
///
/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// - `#`-prefixed input passes through unchanged;
/// - `rgb(r, g, b)` input is converted digit-pair by digit-pair;
/// - anything else is tried as a named color.
///
/// Returns `None` when the input is an unknown name or a malformed `rgb()`
/// form.
pub fn rgb_to_hex(code: &str) -> Option<String> {
    if code.starts_with('#') {
        return Some(code.to_string());
    }
    if let Some(body) = code
        .trim()
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels: Vec<&str> = body.split(',').map(str::trim).collect();
        if channels.len() != 3 {
            return None;
        }
        return Some(format!(
            "#{}{}{}",
            hex_pair(channels[0]),
            hex_pair(channels[1]),
            hex_pair(channels[2])
        ));
    }
    hex_code_for_name(code).map(str::to_string)
}

/// Encode one color channel as a two-digit lowercase hex pair.
///
/// Input that does not parse as a byte (non-numeric text, out-of-range
/// values) encodes as `"00"`.
pub fn hex_pair(channel: &str) -> String {
    channel
        .trim()
        .parse::<u8>()
        .map_or_else(|_| "00".to_string(), |value| format!("{value:02x}"))
}

/// Shift the brightness of a `#rrggbb` color by a percentage.
///
/// Each channel is scaled independently to `channel * (100 - percent) / 100`
/// and clamped to the byte range, so a positive percentage darkens and a
/// negative percentage brightens. A percentage of zero returns the input
/// color unchanged.
///
/// Returns `None` when the input is not a six-digit hex color.
pub fn adjust_brightness(hex_code: &str, percent: i32) -> Option<String> {
    let hex = hex_code.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    let scale = |channel: u8| -> u8 {
        let shifted = f64::from(channel) * f64::from(100 - percent) / 100.0;
        shifted.floor().clamp(0.0, 255.0) as u8
    };

    Some(format!("#{:02x}{:02x}{:02x}", scale(r), scale(g), scale(b)))
}
