//! Pattern-based validation and normalization of raw color strings
//!
//! The structural formats (hex, rgb/rgba, hsl/hsla) are recognized with logos
//! patterns; a value is well-formed only when a single token spans the whole
//! input. Numeric range checks that patterns cannot express (channel bounds,
//! hue bounds) run after the pattern match. Every function here is total:
//! malformed input classifies as unknown, it never errors.

use logos::Logos;

/// Recognized color string formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Named,
    Unknown,
}

impl ColorFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Named => "named",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CSS keyword names accepted by [`is_valid_named_color`], compared
/// case-insensitively.
const NAMED_COLORS: [&str; 17] = [
    "red",
    "blue",
    "green",
    "yellow",
    "orange",
    "purple",
    "pink",
    "brown",
    "black",
    "white",
    "gray",
    "grey",
    "transparent",
    "inherit",
    "initial",
    "unset",
    "currentcolor",
];

/// Structural color patterns. Function names are lowercase, hex digits are
/// either case, channels are 1-3 digits with an optional percent sign, and
/// alpha is 0, 1, or a fraction between them.
#[derive(Logos, Debug, Clone, PartialEq)]
enum FormatToken {
    #[regex(r"#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})")]
    Hex,

    #[regex(
        r"rgba?\([ \t]*[0-9]{1,3}%?[ \t]*,[ \t]*[0-9]{1,3}%?[ \t]*,[ \t]*[0-9]{1,3}%?[ \t]*(,[ \t]*(0(\.[0-9]+)?|1(\.0+)?|\.[0-9]+)[ \t]*)?\)"
    )]
    Rgb,

    #[regex(
        r"hsla?\([ \t]*[0-9]{1,3}[ \t]*,[ \t]*[0-9]{1,3}%[ \t]*,[ \t]*[0-9]{1,3}%[ \t]*(,[ \t]*(0(\.[0-9]+)?|1(\.0+)?|\.[0-9]+)[ \t]*)?\)"
    )]
    Hsl,
}

/// Lex `value` and return its token only if the token spans the entire input.
fn whole_token(value: &str) -> Option<FormatToken> {
    let mut lexer = FormatToken::lexer(value);
    match lexer.next() {
        Some(Ok(token)) if lexer.span().end == value.len() => Some(token),
        _ => None,
    }
}

/// The comma-separated arguments between the parentheses, trimmed.
fn channel_args(value: &str) -> Vec<&str> {
    match (value.find('('), value.rfind(')')) {
        (Some(open), Some(close)) if open < close => {
            value[open + 1..close].split(',').map(str::trim).collect()
        }
        _ => Vec::new(),
    }
}

/// Bare integer channels must fall in 0..=255. Percent channels skip the
/// range check entirely, so `rgb(150%, 0%, 0%)` passes.
fn rgb_channels_in_range(value: &str) -> bool {
    channel_args(value).iter().take(3).all(|chan| {
        if chan.ends_with('%') {
            true
        } else {
            chan.parse::<u32>().map(|n| n <= 255).unwrap_or(false)
        }
    })
}

fn percent_in_range(raw: &str) -> bool {
    raw.strip_suffix('%')
        .and_then(|n| n.parse::<u32>().ok())
        .map(|n| n <= 100)
        .unwrap_or(false)
}

/// Hue must fall in 0..=360, saturation and lightness in 0..=100.
fn hsl_channels_in_range(value: &str) -> bool {
    let args = channel_args(value);
    if args.len() < 3 {
        return false;
    }
    let hue_ok = args[0].parse::<u32>().map(|n| n <= 360).unwrap_or(false);
    hue_ok && percent_in_range(args[1]) && percent_in_range(args[2])
}

/// Whether `value` is a `#RGB` or `#RRGGBB` hex color.
pub fn is_valid_hex_color(value: &str) -> bool {
    matches!(whole_token(value), Some(FormatToken::Hex))
}

/// Whether `value` is an `rgb(...)`/`rgba(...)` color with in-range bare
/// integer channels.
pub fn is_valid_rgb_color(value: &str) -> bool {
    matches!(whole_token(value), Some(FormatToken::Rgb)) && rgb_channels_in_range(value)
}

/// Whether `value` is an `hsl(...)`/`hsla(...)` color with in-range hue,
/// saturation, and lightness.
pub fn is_valid_hsl_color(value: &str) -> bool {
    matches!(whole_token(value), Some(FormatToken::Hsl)) && hsl_channels_in_range(value)
}

/// Whether `value` is one of the recognized CSS keyword names, ignoring case.
pub fn is_valid_named_color(value: &str) -> bool {
    NAMED_COLORS.iter().any(|name| value.eq_ignore_ascii_case(name))
}

/// Whether `value` is well-formed in any recognized format.
pub fn is_valid_color(value: &str) -> bool {
    color_format(value) != ColorFormat::Unknown
}

/// Classify a color string, trying hex, then rgb, then hsl, then named.
///
/// Agrees with the `is_valid_*` predicates: `color_format` returns a
/// category exactly when the matching predicate returns true.
///
/// # Example
///
/// ```
/// use inktype::{color_format, ColorFormat};
///
/// assert_eq!(color_format("#ff5722"), ColorFormat::Hex);
/// assert_eq!(color_format("rgb(255, 87, 34)"), ColorFormat::Rgb);
/// assert_eq!(color_format("rgb(256, 0, 0)"), ColorFormat::Unknown);
/// assert_eq!(color_format("Grey"), ColorFormat::Named);
/// ```
pub fn color_format(value: &str) -> ColorFormat {
    match whole_token(value) {
        Some(FormatToken::Hex) => ColorFormat::Hex,
        Some(FormatToken::Rgb) if rgb_channels_in_range(value) => ColorFormat::Rgb,
        Some(FormatToken::Hsl) if hsl_channels_in_range(value) => ColorFormat::Hsl,
        _ if is_valid_named_color(value) => ColorFormat::Named,
        _ => ColorFormat::Unknown,
    }
}

/// Normalize a color string to a canonical lowercase form.
///
/// Invalid input is returned unchanged. Three-digit hex expands each digit
/// (`#abc` becomes `#aabbcc`); every other valid form is lowercased. The
/// function is idempotent.
pub fn normalize_color(value: &str) -> String {
    match color_format(value) {
        ColorFormat::Unknown => value.to_string(),
        ColorFormat::Hex if value.len() == 4 => {
            let mut expanded = String::with_capacity(7);
            expanded.push('#');
            for digit in value[1..].chars() {
                let lower = digit.to_ascii_lowercase();
                expanded.push(lower);
                expanded.push(lower);
            }
            expanded
        }
        _ => value.to_ascii_lowercase(),
    }
}
