//! Integration tests for variant resolution through the public API

use pretty_assertions::assert_eq;

use inktype::{
    resolve_text_color, resolve_text_style, ColorResolver, DesignTokens, ResolveError, TextStyle,
    TextStyleVariant, TypographyResolver, COLOR_VARIANTS, TEXT_STYLE_VARIANTS,
};

#[test]
fn test_default_table_end_to_end() {
    let tokens = DesignTokens::default();

    let style = resolve_text_style(TextStyleVariant::HeadlineMedium, &tokens).unwrap();
    assert_eq!(style, TextStyle::new(28.0, "400"));

    let on_error = resolve_text_color(Some("onError"), &tokens).unwrap();
    assert_eq!(on_error.as_str(), tokens.color("onError").unwrap());
}

#[test]
fn test_every_text_style_resolves_with_positive_size() {
    let tokens = DesignTokens::default();
    let mut resolver = TypographyResolver::new();
    for variant in TEXT_STYLE_VARIANTS {
        let style = resolver.resolve(variant, &tokens).unwrap();
        assert!(style.font_size > 0.0);
        assert_eq!(Some(&style), tokens.text_style(variant.as_str()));
    }
}

#[test]
fn test_variant_absent_from_custom_table_uses_body_large() {
    let toml = r#"
[typography]
bodyLarge = { fontSize = 18, fontWeight = "450" }
displayLarge = { fontSize = 64, fontWeight = "650" }
"#;
    let tokens = DesignTokens::from_str(toml).expect("Should parse");
    let mut resolver = TypographyResolver::new();

    let present = resolver
        .resolve(TextStyleVariant::DisplayLarge, &tokens)
        .unwrap();
    assert_eq!(present, TextStyle::new(64.0, "650"));

    let absent = resolver
        .resolve(TextStyleVariant::LabelMedium, &tokens)
        .unwrap();
    assert_eq!(absent, TextStyle::new(18.0, "450"));
}

#[test]
fn test_undefined_color_resolves_to_text_primary() {
    let tokens = DesignTokens::default();
    let primary = tokens.color("textPrimary").unwrap().to_string();
    assert_eq!(resolve_text_color(None, &tokens).unwrap(), primary);
    assert_eq!(resolve_text_color(Some(""), &tokens).unwrap(), primary);
}

#[test]
fn test_literal_color_passes_through() {
    let tokens = DesignTokens::default();
    assert_eq!(
        resolve_text_color(Some("#FF5722"), &tokens).unwrap(),
        "#FF5722"
    );
    assert_eq!(
        resolve_text_color(Some("hsl(10, 20%, 30%)"), &tokens).unwrap(),
        "hsl(10, 20%, 30%)"
    );
}

#[test]
fn test_legacy_alias_law_holds_for_any_table() {
    let tables = [
        DesignTokens::default(),
        DesignTokens::empty()
            .with_color("textPrimary", "#101010")
            .with_color("textSecondary", "#202020"),
    ];
    for tokens in &tables {
        let legacy = resolve_text_color(Some("surfaceVariant"), tokens).unwrap();
        let modern = resolve_text_color(Some("textSecondary"), tokens).unwrap();
        assert_eq!(legacy, modern);
    }
}

#[test]
fn test_custom_table_from_toml_metadata_and_values() {
    let toml = r##"
[metadata]
name = "Midnight"
description = "High-contrast dark theme"

[colors]
textPrimary = "#e6e1e5"
textSecondary = "#cac4d0"
onError = "#601410"

[typography]
bodyLarge = { fontSize = 16, fontWeight = "400" }
"##;
    let tokens = DesignTokens::from_str(toml).expect("Should parse");
    assert_eq!(tokens.name.as_deref(), Some("Midnight"));

    assert_eq!(
        resolve_text_color(Some("onError"), &tokens).unwrap(),
        "#601410"
    );
    assert_eq!(
        resolve_text_color(Some("textSecondary"), &tokens).unwrap(),
        "#cac4d0"
    );
    // Mapped field absent from this table: defensive textPrimary fallback.
    assert_eq!(
        resolve_text_color(Some("onInfo"), &tokens).unwrap(),
        "#e6e1e5"
    );
}

#[test]
fn test_stale_cache_until_cleared() {
    let mut tokens = DesignTokens::empty()
        .with_color("textPrimary", "#000000")
        .with_color("info", "#0000aa");
    let mut resolver = ColorResolver::new();

    assert_eq!(resolver.resolve(Some("info"), &tokens).unwrap(), "#0000aa");

    tokens
        .colors
        .as_mut()
        .unwrap()
        .insert("info".to_string(), "#0000bb".to_string());
    assert_eq!(resolver.resolve(Some("info"), &tokens).unwrap(), "#0000aa");

    resolver.clear_cache();
    assert_eq!(resolver.resolve(Some("info"), &tokens).unwrap(), "#0000bb");
}

#[test]
fn test_missing_sections_report_fixed_messages() {
    let tokens = DesignTokens::empty();

    let color_err = resolve_text_color(Some("textPrimary"), &tokens).unwrap_err();
    assert!(matches!(color_err, ResolveError::MissingColors));
    assert_eq!(color_err.to_string(), "design tokens have no `colors` table");

    let style_err = resolve_text_style(TextStyleVariant::BodyLarge, &tokens).unwrap_err();
    assert!(matches!(style_err, ResolveError::MissingTypography));
    assert_eq!(
        style_err.to_string(),
        "design tokens have no `typography` table"
    );
}

#[test]
fn test_one_shot_helpers_match_resolver_instances() {
    let tokens = DesignTokens::default();
    let mut typography = TypographyResolver::new();
    let mut colors = ColorResolver::new();

    for variant in TEXT_STYLE_VARIANTS {
        assert_eq!(
            resolve_text_style(variant, &tokens).unwrap(),
            typography.resolve(variant, &tokens).unwrap()
        );
    }
    for variant in COLOR_VARIANTS {
        assert_eq!(
            resolve_text_color(Some(variant.as_str()), &tokens).unwrap(),
            colors.resolve(Some(variant.as_str()), &tokens).unwrap()
        );
    }
}

#[test]
fn test_text_style_variant_listing_order() {
    let listing = TEXT_STYLE_VARIANTS
        .iter()
        .map(|variant| variant.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(listing, @r###"
    displayLarge
    displayMedium
    displaySmall
    headlineLarge
    headlineMedium
    headlineSmall
    titleLarge
    titleMedium
    titleSmall
    bodyLarge
    bodyMedium
    bodySmall
    labelLarge
    labelMedium
    labelSmall
    "###);
}
