//! Memoized resolution of text style variants against a token table

use std::collections::HashMap;

use crate::error::ResolveError;
use crate::tokens::{DesignTokens, TextStyle};
use crate::variant::TextStyleVariant;

/// Table entry consulted when a variant has no entry of its own.
const FALLBACK_STYLE: &str = TextStyleVariant::BodyLarge.as_str();

/// Cache key: the variant plus two shallow signals from the current table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StyleCacheKey {
    variant: TextStyleVariant,
    table_len: usize,
    anchor_size_bits: u32,
}

/// Resolves text style variants to font metrics, memoizing lookups.
///
/// The cache key combines the variant with the table's entry count and its
/// `bodyLarge` font size. Those are heuristic invalidation signals, not a
/// content hash: a table edit that moves neither signal can serve stale
/// values until [`TypographyResolver::clear_cache`] is called. Callers that
/// swap token tables should clear the cache at the swap point.
///
/// A resolver owns its cache, so lifetime and thread-safety are the
/// caller's choice: keep one per thread, or guard a shared one with a
/// `Mutex`.
#[derive(Debug, Default)]
pub struct TypographyResolver {
    cache: HashMap<StyleCacheKey, TextStyle>,
}

impl TypographyResolver {
    /// Create a new resolver with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a variant to its font metrics.
    ///
    /// A variant missing from the table falls back to the table's
    /// `bodyLarge` entry. Errors only when the `typography` section is
    /// absent, or when the fallback is needed but the table has no
    /// `bodyLarge` either.
    pub fn resolve(
        &mut self,
        variant: TextStyleVariant,
        tokens: &DesignTokens,
    ) -> Result<TextStyle, ResolveError> {
        let typography = tokens
            .typography
            .as_ref()
            .ok_or(ResolveError::MissingTypography)?;

        let key = StyleCacheKey {
            variant,
            table_len: typography.len(),
            anchor_size_bits: typography
                .get(FALLBACK_STYLE)
                .map(|style| style.font_size.to_bits())
                .unwrap_or(0),
        };
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit.clone());
        }

        let style = match typography.get(variant.as_str()) {
            Some(style) => style.clone(),
            None => {
                log::debug!(
                    "text style `{}` has no table entry, using `{}`",
                    variant,
                    FALLBACK_STYLE
                );
                typography
                    .get(FALLBACK_STYLE)
                    .cloned()
                    .ok_or(ResolveError::MissingFallbackStyle)?
            }
        };
        self.cache.insert(key, style.clone());
        Ok(style)
    }

    /// Drop every memoized entry. Safe to call repeatedly.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
