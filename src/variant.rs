//! Closed vocabularies of text style and text color variants
//!
//! Variant names are the camelCase identifiers component callers pass around
//! (`"headlineMedium"`, `"textSecondary"`). Both vocabularies are closed enums,
//! so adding a variant is a compile-time event and mapping tables over them are
//! checked for exhaustiveness.

/// Text style variants: five tiers (display, headline, title, body, label),
/// three sizes each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyleVariant {
    DisplayLarge,
    DisplayMedium,
    DisplaySmall,
    HeadlineLarge,
    HeadlineMedium,
    HeadlineSmall,
    TitleLarge,
    TitleMedium,
    TitleSmall,
    BodyLarge,
    BodyMedium,
    BodySmall,
    LabelLarge,
    LabelMedium,
    LabelSmall,
}

impl TextStyleVariant {
    /// The camelCase token key for this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DisplayLarge => "displayLarge",
            Self::DisplayMedium => "displayMedium",
            Self::DisplaySmall => "displaySmall",
            Self::HeadlineLarge => "headlineLarge",
            Self::HeadlineMedium => "headlineMedium",
            Self::HeadlineSmall => "headlineSmall",
            Self::TitleLarge => "titleLarge",
            Self::TitleMedium => "titleMedium",
            Self::TitleSmall => "titleSmall",
            Self::BodyLarge => "bodyLarge",
            Self::BodyMedium => "bodyMedium",
            Self::BodySmall => "bodySmall",
            Self::LabelLarge => "labelLarge",
            Self::LabelMedium => "labelMedium",
            Self::LabelSmall => "labelSmall",
        }
    }

    /// Parse a token key back into a variant. Returns `None` for anything
    /// outside the vocabulary, including case mismatches.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "displayLarge" => Some(Self::DisplayLarge),
            "displayMedium" => Some(Self::DisplayMedium),
            "displaySmall" => Some(Self::DisplaySmall),
            "headlineLarge" => Some(Self::HeadlineLarge),
            "headlineMedium" => Some(Self::HeadlineMedium),
            "headlineSmall" => Some(Self::HeadlineSmall),
            "titleLarge" => Some(Self::TitleLarge),
            "titleMedium" => Some(Self::TitleMedium),
            "titleSmall" => Some(Self::TitleSmall),
            "bodyLarge" => Some(Self::BodyLarge),
            "bodyMedium" => Some(Self::BodyMedium),
            "bodySmall" => Some(Self::BodySmall),
            "labelLarge" => Some(Self::LabelLarge),
            "labelMedium" => Some(Self::LabelMedium),
            "labelSmall" => Some(Self::LabelSmall),
            _ => None,
        }
    }
}

impl std::fmt::Display for TextStyleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every text style variant, ordered by tier (display, headline, title, body,
/// label) and largest to smallest within a tier.
pub const TEXT_STYLE_VARIANTS: [TextStyleVariant; 15] = [
    TextStyleVariant::DisplayLarge,
    TextStyleVariant::DisplayMedium,
    TextStyleVariant::DisplaySmall,
    TextStyleVariant::HeadlineLarge,
    TextStyleVariant::HeadlineMedium,
    TextStyleVariant::HeadlineSmall,
    TextStyleVariant::TitleLarge,
    TextStyleVariant::TitleMedium,
    TextStyleVariant::TitleSmall,
    TextStyleVariant::BodyLarge,
    TextStyleVariant::BodyMedium,
    TextStyleVariant::BodySmall,
    TextStyleVariant::LabelLarge,
    TextStyleVariant::LabelMedium,
    TextStyleVariant::LabelSmall,
];

/// Whether `value` names a text style variant.
pub fn is_text_style_variant(value: &str) -> bool {
    TextStyleVariant::parse(value).is_some()
}

/// Text color variants: semantic roles plus six deprecated legacy aliases
/// kept for backward compatibility. Each alias routes to exactly one
/// canonical token field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorVariant {
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextDisabled,
    TextInverse,
    OnSurface,
    OnBackground,
    OnPrimary,
    OnSecondary,
    OnSuccess,
    OnError,
    OnWarning,
    OnInfo,
    Success,
    Error,
    Warning,
    Info,
    /// Deprecated alias for [`ColorVariant::TextPrimary`].
    Primary,
    /// Deprecated alias for [`ColorVariant::TextSecondary`].
    Secondary,
    /// Deprecated alias for [`ColorVariant::TextTertiary`].
    Tertiary,
    /// Deprecated alias for [`ColorVariant::TextDisabled`].
    Disabled,
    /// Deprecated alias for [`ColorVariant::TextInverse`].
    Inverse,
    /// Deprecated alias for [`ColorVariant::TextSecondary`].
    SurfaceVariant,
}

impl ColorVariant {
    /// The camelCase name callers use for this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextPrimary => "textPrimary",
            Self::TextSecondary => "textSecondary",
            Self::TextTertiary => "textTertiary",
            Self::TextDisabled => "textDisabled",
            Self::TextInverse => "textInverse",
            Self::OnSurface => "onSurface",
            Self::OnBackground => "onBackground",
            Self::OnPrimary => "onPrimary",
            Self::OnSecondary => "onSecondary",
            Self::OnSuccess => "onSuccess",
            Self::OnError => "onError",
            Self::OnWarning => "onWarning",
            Self::OnInfo => "onInfo",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Disabled => "disabled",
            Self::Inverse => "inverse",
            Self::SurfaceVariant => "surfaceVariant",
        }
    }

    /// Parse a variant name. Returns `None` for anything outside the
    /// vocabulary; literal colors like `"#FF5722"` land here.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "textPrimary" => Some(Self::TextPrimary),
            "textSecondary" => Some(Self::TextSecondary),
            "textTertiary" => Some(Self::TextTertiary),
            "textDisabled" => Some(Self::TextDisabled),
            "textInverse" => Some(Self::TextInverse),
            "onSurface" => Some(Self::OnSurface),
            "onBackground" => Some(Self::OnBackground),
            "onPrimary" => Some(Self::OnPrimary),
            "onSecondary" => Some(Self::OnSecondary),
            "onSuccess" => Some(Self::OnSuccess),
            "onError" => Some(Self::OnError),
            "onWarning" => Some(Self::OnWarning),
            "onInfo" => Some(Self::OnInfo),
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "tertiary" => Some(Self::Tertiary),
            "disabled" => Some(Self::Disabled),
            "inverse" => Some(Self::Inverse),
            "surfaceVariant" => Some(Self::SurfaceVariant),
            _ => None,
        }
    }

    /// The token-table field this variant reads from. Legacy aliases share
    /// the field of the canonical variant they stand for.
    ///
    /// # Example
    ///
    /// ```
    /// use inktype::ColorVariant;
    ///
    /// assert_eq!(ColorVariant::SurfaceVariant.token_field(), "textSecondary");
    /// assert_eq!(ColorVariant::OnError.token_field(), "onError");
    /// ```
    pub const fn token_field(self) -> &'static str {
        match self {
            Self::TextPrimary | Self::Primary => "textPrimary",
            Self::TextSecondary | Self::Secondary | Self::SurfaceVariant => "textSecondary",
            Self::TextTertiary | Self::Tertiary => "textTertiary",
            Self::TextDisabled | Self::Disabled => "textDisabled",
            Self::TextInverse | Self::Inverse => "textInverse",
            Self::OnSurface => "onSurface",
            Self::OnBackground => "onBackground",
            Self::OnPrimary => "onPrimary",
            Self::OnSecondary => "onSecondary",
            Self::OnSuccess => "onSuccess",
            Self::OnError => "onError",
            Self::OnWarning => "onWarning",
            Self::OnInfo => "onInfo",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// The canonical variant behind a legacy alias; canonical variants
    /// return themselves.
    pub const fn canonical(self) -> Self {
        match self {
            Self::Primary => Self::TextPrimary,
            Self::Secondary | Self::SurfaceVariant => Self::TextSecondary,
            Self::Tertiary => Self::TextTertiary,
            Self::Disabled => Self::TextDisabled,
            Self::Inverse => Self::TextInverse,
            other => other,
        }
    }

    /// Whether this variant is a deprecated legacy alias.
    pub const fn is_legacy(self) -> bool {
        matches!(
            self,
            Self::Primary
                | Self::Secondary
                | Self::Tertiary
                | Self::Disabled
                | Self::Inverse
                | Self::SurfaceVariant
        )
    }
}

impl std::fmt::Display for ColorVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every color variant, canonical roles first, legacy aliases last.
pub const COLOR_VARIANTS: [ColorVariant; 23] = [
    ColorVariant::TextPrimary,
    ColorVariant::TextSecondary,
    ColorVariant::TextTertiary,
    ColorVariant::TextDisabled,
    ColorVariant::TextInverse,
    ColorVariant::OnSurface,
    ColorVariant::OnBackground,
    ColorVariant::OnPrimary,
    ColorVariant::OnSecondary,
    ColorVariant::OnSuccess,
    ColorVariant::OnError,
    ColorVariant::OnWarning,
    ColorVariant::OnInfo,
    ColorVariant::Success,
    ColorVariant::Error,
    ColorVariant::Warning,
    ColorVariant::Info,
    ColorVariant::Primary,
    ColorVariant::Secondary,
    ColorVariant::Tertiary,
    ColorVariant::Disabled,
    ColorVariant::Inverse,
    ColorVariant::SurfaceVariant,
];

/// Whether `value` names a color variant (canonical or legacy).
pub fn is_color_variant(value: &str) -> bool {
    ColorVariant::parse(value).is_some()
}
