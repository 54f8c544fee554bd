//! Memoized resolution of color variants against a token table

use std::collections::HashMap;

use crate::error::ResolveError;
use crate::tokens::DesignTokens;
use crate::variant::ColorVariant;

/// Field consulted for empty input and for the defensive fallback.
const ANCHOR_FIELD: &str = ColorVariant::TextPrimary.token_field();

/// Cache key: the raw input plus two shallow signals from the current table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ColorCacheKey {
    input: String,
    table_len: usize,
    anchor: String,
}

/// Resolves color variants to concrete color strings, memoizing lookups.
///
/// The cache key combines the input with the table's entry count and its
/// current `textPrimary` value. Those are heuristic invalidation signals,
/// not a content hash: a table edit that moves neither signal can serve
/// stale values until [`ColorResolver::clear_cache`] is called. Callers
/// that swap token tables should clear the cache at the swap point.
#[derive(Debug, Default)]
pub struct ColorResolver {
    cache: HashMap<ColorCacheKey, String>,
}

impl ColorResolver {
    /// Create a new resolver with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a color input to a concrete color string.
    ///
    /// `None` and the empty string resolve to the table's `textPrimary`.
    /// A recognized [`ColorVariant`] name resolves through its token field,
    /// with legacy aliases routed to their canonical field. Any other
    /// non-empty string is returned unchanged, so literal colors like
    /// `"#FF5722"` and foreign token names survive resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use inktype::{ColorResolver, DesignTokens};
    ///
    /// let tokens = DesignTokens::default();
    /// let mut resolver = ColorResolver::new();
    ///
    /// let secondary = resolver.resolve(Some("surfaceVariant"), &tokens).unwrap();
    /// assert_eq!(secondary, "#49454f");
    ///
    /// let literal = resolver.resolve(Some("#FF5722"), &tokens).unwrap();
    /// assert_eq!(literal, "#FF5722");
    /// ```
    pub fn resolve(
        &mut self,
        color: Option<&str>,
        tokens: &DesignTokens,
    ) -> Result<String, ResolveError> {
        let colors = tokens.colors.as_ref().ok_or(ResolveError::MissingColors)?;

        let input = color.unwrap_or("");
        if input.is_empty() {
            return self.lookup(input, ANCHOR_FIELD, colors);
        }
        match ColorVariant::parse(input) {
            Some(variant) => self.lookup(input, variant.token_field(), colors),
            // Pass-through values resolve to themselves; no point caching that.
            None => Ok(input.to_string()),
        }
    }

    /// Resolve a variant directly, skipping the string classification.
    pub fn resolve_variant(
        &mut self,
        variant: ColorVariant,
        tokens: &DesignTokens,
    ) -> Result<String, ResolveError> {
        let colors = tokens.colors.as_ref().ok_or(ResolveError::MissingColors)?;
        self.lookup(variant.as_str(), variant.token_field(), colors)
    }

    fn lookup(
        &mut self,
        input: &str,
        field: &str,
        colors: &HashMap<String, String>,
    ) -> Result<String, ResolveError> {
        let key = ColorCacheKey {
            input: input.to_string(),
            table_len: colors.len(),
            anchor: colors.get(ANCHOR_FIELD).cloned().unwrap_or_default(),
        };
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit.clone());
        }

        let value = match colors.get(field) {
            Some(value) => value.clone(),
            None => {
                if field != ANCHOR_FIELD {
                    log::warn!(
                        "color token `{}` is not in the table, falling back to `{}`",
                        field,
                        ANCHOR_FIELD
                    );
                }
                colors
                    .get(ANCHOR_FIELD)
                    .cloned()
                    .ok_or(ResolveError::MissingFallbackColor)?
            }
        };
        self.cache.insert(key, value.clone());
        Ok(value)
    }

    /// Drop every memoized entry. Safe to call repeatedly.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
