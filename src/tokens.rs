//! Design token tables for typography and color resolution
//!
//! A token table is externally owned configuration: a `colors` map (field
//! name to color string) and a `typography` map (variant name to font
//! metrics). Tables can be loaded from TOML, and a built-in table provides
//! a Material-style type scale with light-theme text colors.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing token tables
#[derive(Error, Debug)]
pub enum TokensError {
    #[error("Failed to read token table file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse token table TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Font metrics for one text style variant
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in logical pixels
    pub font_size: f32,
    /// Font weight, kept as a string ("400", "500", "bold")
    pub font_weight: String,
}

impl TextStyle {
    /// Create a text style from a font size and weight
    pub fn new(font_size: f32, font_weight: impl Into<String>) -> Self {
        Self {
            font_size,
            font_weight: font_weight.into(),
        }
    }
}

/// A design token table mapping variant names to concrete values
///
/// Both sections are optional so that a partially populated table is
/// representable; resolving against a table whose relevant section is
/// missing is a configuration error, not a panic. Resolvers only read the
/// two maps and never validate the rest of the structure.
#[derive(Debug, Clone)]
pub struct DesignTokens {
    /// Optional name for the token table
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color tokens: field name -> color string
    pub colors: Option<HashMap<String, String>>,
    /// Typography tokens: variant name -> font metrics
    pub typography: Option<HashMap<String, TextStyle>>,
}

/// TOML structure for deserializing token tables
#[derive(Deserialize)]
struct TomlTokens {
    metadata: Option<TomlMetadata>,
    colors: Option<HashMap<String, String>>,
    typography: Option<HashMap<String, TextStyle>>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default token table - Material-style type scale, light-theme text colors
const DEFAULT_TOKENS: &str = r##"
[colors]
# Text roles
textPrimary = "#1c1b1f"
textSecondary = "#49454f"
textTertiary = "#79747e"
textDisabled = "#9e9e9e"
textInverse = "#ffffff"

# Contrast roles (content placed on a colored surface)
onSurface = "#1c1b1f"
onBackground = "#1c1b1f"
onPrimary = "#ffffff"
onSecondary = "#ffffff"
onSuccess = "#ffffff"
onError = "#ffffff"
onWarning = "#1c1b1f"
onInfo = "#ffffff"

# Status roles
success = "#2e7d32"
error = "#b3261e"
warning = "#f9a825"
info = "#0288d1"

[typography]
displayLarge = { fontSize = 57, fontWeight = "400" }
displayMedium = { fontSize = 45, fontWeight = "400" }
displaySmall = { fontSize = 36, fontWeight = "400" }
headlineLarge = { fontSize = 32, fontWeight = "400" }
headlineMedium = { fontSize = 28, fontWeight = "400" }
headlineSmall = { fontSize = 24, fontWeight = "400" }
titleLarge = { fontSize = 22, fontWeight = "400" }
titleMedium = { fontSize = 16, fontWeight = "500" }
titleSmall = { fontSize = 14, fontWeight = "500" }
bodyLarge = { fontSize = 16, fontWeight = "400" }
bodyMedium = { fontSize = 14, fontWeight = "400" }
bodySmall = { fontSize = 12, fontWeight = "400" }
labelLarge = { fontSize = 14, fontWeight = "500" }
labelMedium = { fontSize = 12, fontWeight = "500" }
labelSmall = { fontSize = 11, fontWeight = "500" }
"##;

impl DesignTokens {
    /// Load a token table from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, TokensError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a token table from a TOML string
    pub fn from_str(content: &str) -> Result<Self, TokensError> {
        let parsed: TomlTokens = toml::from_str(content)?;

        Ok(DesignTokens {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
            typography: parsed.typography,
        })
    }

    /// A table with no sections defined
    pub fn empty() -> Self {
        Self {
            name: None,
            description: None,
            colors: None,
            typography: None,
        }
    }

    /// Look up a color token by field name
    ///
    /// Returns None if the `colors` section or the field is missing.
    pub fn color(&self, field: &str) -> Option<&str> {
        self.colors.as_ref()?.get(field).map(|s| s.as_str())
    }

    /// Look up font metrics by variant name
    ///
    /// Returns None if the `typography` section or the entry is missing.
    pub fn text_style(&self, name: &str) -> Option<&TextStyle> {
        self.typography.as_ref()?.get(name)
    }

    /// Insert or replace a color token, creating the section if absent
    pub fn with_color(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors
            .get_or_insert_with(HashMap::new)
            .insert(field.into(), value.into());
        self
    }

    /// Insert or replace a text style, creating the section if absent
    pub fn with_text_style(mut self, variant: impl Into<String>, style: TextStyle) -> Self {
        self.typography
            .get_or_insert_with(HashMap::new)
            .insert(variant.into(), style);
        self
    }
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self::from_str(DEFAULT_TOKENS).expect("Default token table should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{COLOR_VARIANTS, TEXT_STYLE_VARIANTS};

    #[test]
    fn test_default_covers_every_variant() {
        let tokens = DesignTokens::default();
        for variant in TEXT_STYLE_VARIANTS {
            assert!(
                tokens.text_style(variant.as_str()).is_some(),
                "missing typography entry for {}",
                variant
            );
        }
        for variant in COLOR_VARIANTS {
            assert!(
                tokens.color(variant.token_field()).is_some(),
                "missing color field for {}",
                variant
            );
        }
    }

    #[test]
    fn test_default_text_styles_have_positive_sizes() {
        let tokens = DesignTokens::default();
        for variant in TEXT_STYLE_VARIANTS {
            let style = tokens.text_style(variant.as_str()).unwrap();
            assert!(style.font_size > 0.0);
            assert!(!style.font_weight.is_empty());
        }
    }

    #[test]
    fn test_color_lookup() {
        let tokens = DesignTokens::default();
        assert_eq!(tokens.color("textPrimary"), Some("#1c1b1f"));
        assert_eq!(tokens.color("error"), Some("#b3261e"));
        assert_eq!(tokens.color("nonexistent"), None);
    }

    #[test]
    fn test_text_style_lookup() {
        let tokens = DesignTokens::default();
        let style = tokens.text_style("headlineMedium").unwrap();
        assert_eq!(style, &TextStyle::new(28.0, "400"));
        assert_eq!(tokens.text_style("headlineHuge"), None);
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Night Theme"
description = "Dark mode tokens"

[colors]
textPrimary = "#e6e1e5"
"##;
        let tokens = DesignTokens::from_str(toml_str).expect("Should parse");
        assert_eq!(tokens.name, Some("Night Theme".to_string()));
        assert_eq!(tokens.description, Some("Dark mode tokens".to_string()));
        assert_eq!(tokens.color("textPrimary"), Some("#e6e1e5"));
        assert!(tokens.typography.is_none());
    }

    #[test]
    fn test_parse_toml_without_sections() {
        let tokens = DesignTokens::from_str("").expect("Should parse");
        assert!(tokens.colors.is_none());
        assert!(tokens.typography.is_none());
        assert_eq!(tokens.color("textPrimary"), None);
    }

    #[test]
    fn test_parse_typography_entries() {
        let toml_str = r##"
[typography]
bodyLarge = { fontSize = 18, fontWeight = "400" }
labelSmall = { fontSize = 10.5, fontWeight = "500" }
"##;
        let tokens = DesignTokens::from_str(toml_str).expect("Should parse");
        assert_eq!(tokens.text_style("bodyLarge"), Some(&TextStyle::new(18.0, "400")));
        assert_eq!(
            tokens.text_style("labelSmall"),
            Some(&TextStyle::new(10.5, "500"))
        );
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = DesignTokens::from_str(invalid);
        assert!(matches!(result, Err(TokensError::ParseError(_))));
    }

    #[test]
    fn test_from_file_missing_path_errors() {
        let path = std::env::temp_dir().join("inktype-missing").join("tokens.toml");
        let result = DesignTokens::from_file(&path);
        assert!(matches!(result, Err(TokensError::IoError(_))));
    }

    #[test]
    fn test_from_file_loads_table() {
        let toml_str = r##"
[colors]
textPrimary = "#123456"
"##;
        let path = std::env::temp_dir().join("inktype-tokens-from-file.toml");
        std::fs::write(&path, toml_str).expect("Should write");
        let tokens = DesignTokens::from_file(&path).expect("Should load");
        std::fs::remove_file(&path).ok();
        assert_eq!(tokens.color("textPrimary"), Some("#123456"));
        assert!(tokens.typography.is_none());
    }

    #[test]
    fn test_builder_helpers() {
        let tokens = DesignTokens::empty()
            .with_color("textPrimary", "#111111")
            .with_text_style("bodyLarge", TextStyle::new(17.0, "400"));
        assert_eq!(tokens.color("textPrimary"), Some("#111111"));
        assert_eq!(tokens.text_style("bodyLarge"), Some(&TextStyle::new(17.0, "400")));
        assert!(tokens.name.is_none());
    }
}
