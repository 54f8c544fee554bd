//! Inktype - typography and color variant resolution over design tokens
//!
//! This library supplies a closed vocabulary of text style and text color
//! variants for component libraries, resolvers that map a variant plus a
//! caller-supplied token table to concrete style values, and validators for
//! raw color strings.
//!
//! # Example
//!
//! ```rust
//! use inktype::{resolve_text_color, resolve_text_style, DesignTokens, TextStyleVariant};
//!
//! let tokens = DesignTokens::default();
//!
//! let style = resolve_text_style(TextStyleVariant::HeadlineMedium, &tokens).unwrap();
//! assert_eq!(style.font_size, 28.0);
//! assert_eq!(style.font_weight, "400");
//!
//! let color = resolve_text_color(Some("onError"), &tokens).unwrap();
//! assert_eq!(color, "#ffffff");
//! ```

pub mod color;
pub mod error;
pub mod format;
pub mod tokens;
pub mod typography;
pub mod variant;

pub use color::ColorResolver;
pub use error::ResolveError;
pub use format::{
    color_format, is_valid_color, is_valid_hex_color, is_valid_hsl_color, is_valid_named_color,
    is_valid_rgb_color, normalize_color, ColorFormat,
};
pub use tokens::{DesignTokens, TextStyle, TokensError};
pub use typography::TypographyResolver;
pub use variant::{
    is_color_variant, is_text_style_variant, ColorVariant, TextStyleVariant, COLOR_VARIANTS,
    TEXT_STYLE_VARIANTS,
};

/// Resolve a color input with a throwaway resolver
///
/// Convenient for one-off lookups; construct a [`ColorResolver`] to keep
/// the memoization cache across calls.
pub fn resolve_text_color(
    color: Option<&str>,
    tokens: &DesignTokens,
) -> Result<String, ResolveError> {
    ColorResolver::new().resolve(color, tokens)
}

/// Resolve a text style variant with a throwaway resolver
///
/// Convenient for one-off lookups; construct a [`TypographyResolver`] to
/// keep the memoization cache across calls.
pub fn resolve_text_style(
    variant: TextStyleVariant,
    tokens: &DesignTokens,
) -> Result<TextStyle, ResolveError> {
    TypographyResolver::new().resolve(variant, tokens)
}
