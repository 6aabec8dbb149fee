//! Colour conversion helpers used by style definitions and built-in themes.

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Greys map onto the 24-step grayscale ramp, everything else onto the
/// 6x6x6 colour cube.
///
/// # Example
///
/// ```rust
/// use termtint::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub const fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Splits a packed `0xRRGGBB` value into its channels.
pub const fn unpack_rgb(packed: u32) -> (u8, u8, u8) {
    (
        ((packed >> 16) & 0xff) as u8,
        ((packed >> 8) & 0xff) as u8,
        (packed & 0xff) as u8,
    )
}

/// Parses a `#rrggbb` or `#rgb` colour into an RGB triplet.
///
/// The leading `#` is required. Returns `None` for anything else.
///
/// # Example
///
/// ```rust
/// use termtint::parse_hex;
///
/// assert_eq!(parse_hex("#9cdcfe"), Some((0x9c, 0xdc, 0xfe)));
/// assert_eq!(parse_hex("#fff"), Some((0xff, 0xff, 0xff)));
/// assert_eq!(parse_hex("9cdcfe"), None);
/// ```
pub fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let digits = s.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => {
            let packed = u32::from_str_radix(digits, 16).ok()?;
            Some(unpack_rgb(packed))
        }
        3 => {
            // Each nibble is doubled: #abc == #aabbcc
            let mut channels = [0u8; 3];
            for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                let nibble = c.to_digit(16)? as u8;
                *slot = nibble * 17;
            }
            Some((channels[0], channels[1], channels[2]))
        }
        _ => None,
    }
}
