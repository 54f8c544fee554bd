//! Error types for token resolution

use thiserror::Error;

/// Configuration errors raised when a token table cannot satisfy a lookup.
///
/// Only missing or malformed token tables produce errors. Malformed color
/// *strings* never do; the format predicates classify them as invalid and
/// the resolvers pass them through untouched.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The token table has no `colors` section.
    #[error("design tokens have no `colors` table")]
    MissingColors,

    /// The token table has no `typography` section.
    #[error("design tokens have no `typography` table")]
    MissingTypography,

    /// The colors table defines neither the requested field nor the
    /// `textPrimary` fallback.
    #[error("color table defines neither the requested token nor the `textPrimary` fallback")]
    MissingFallbackColor,

    /// The typography table defines neither the requested variant nor the
    /// `bodyLarge` fallback.
    #[error("typography table defines neither the requested variant nor the `bodyLarge` fallback")]
    MissingFallbackStyle,
}
