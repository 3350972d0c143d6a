//! The accent color-settings seam.
//!
//! The OS exposes the user's accent color as a small family of named
//! categories: the base accent plus three lighter tints and three darker
//! shades. A [ColorSettingsBackend] knows whether the service exists on this
//! system and hands out bound [ColorSettingsSource] instances; the source is
//! a counted external resource, so it is wrapped in a [SourceGuard] that
//! releases it exactly once.

use peniko::Color;
use thiserror::Error;

/// A named color category queryable from the settings source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    /// The base accent color.
    Accent,
    /// First lighter tint of the accent.
    AccentLight1,
    /// Second lighter tint of the accent.
    AccentLight2,
    /// Third lighter tint of the accent.
    AccentLight3,
    /// First darker shade of the accent.
    AccentDark1,
    /// Second darker shade of the accent.
    AccentDark2,
    /// Third darker shade of the accent.
    AccentDark3,
}

impl ColorCategory {
    /// The six accent-derived categories, tints first.
    pub const DERIVED: [ColorCategory; 6] = [
        ColorCategory::AccentLight1,
        ColorCategory::AccentLight2,
        ColorCategory::AccentLight3,
        ColorCategory::AccentDark1,
        ColorCategory::AccentDark2,
        ColorCategory::AccentDark3,
    ];
}

/// Errors reported by a color-settings source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source is not bound, or was already released.
    #[error("color settings source is unavailable")]
    Unavailable,
    /// A single category query failed at the provider level.
    #[error("query for {category:?} failed: {details}")]
    QueryFailed {
        /// The category that was being queried.
        category: ColorCategory,
        /// Provider-level failure details.
        details: String,
    },
    /// Releasing the bound source failed.
    #[error("failed to release color settings source: {0}")]
    ReleaseFailed(String),
}

/// A bound platform color-settings object.
pub trait ColorSettingsSource {
    /// Query one named color category.
    fn color_value(&self, category: ColorCategory) -> Result<Color, SourceError>;

    /// Release the underlying OS resource.
    ///
    /// Called exactly once by [SourceGuard]; implementations do not need to
    /// guard against double release themselves.
    fn release(&mut self) -> Result<(), SourceError> {
        Ok(())
    }
}

/// Factory for bound color-settings sources.
///
/// `is_supported` is expected to be computed once per process by the
/// implementation; a backend that failed its support probe keeps answering
/// `false` for the process lifetime.
pub trait ColorSettingsBackend {
    /// Whether the platform settings service can be instantiated at all.
    fn is_supported(&self) -> bool;

    /// Bind to the settings service.
    ///
    /// Returns `None` when binding yields no usable object, including when
    /// the returned object lacks the extended color-query capability.
    fn bind(&self) -> Option<Box<dyn ColorSettingsSource>>;
}

/// Scoped-release wrapper around a bound [ColorSettingsSource].
///
/// The source is released on [SourceGuard::close] or, if close was never
/// called, when the guard is dropped. Release errors are swallowed: release
/// runs on teardown paths where no caller can act on them.
pub struct SourceGuard {
    source: Option<Box<dyn ColorSettingsSource>>,
}

impl SourceGuard {
    /// Wrap a freshly bound source.
    pub fn new(source: Box<dyn ColorSettingsSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Whether the source has not been released yet.
    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    /// Query one named color category from the bound source.
    pub fn color_value(&self, category: ColorCategory) -> Result<Color, SourceError> {
        match &self.source {
            Some(source) => source.color_value(category),
            None => Err(SourceError::Unavailable),
        }
    }

    /// Release the bound source now. Safe to call more than once.
    pub fn close(&mut self) {
        if let Some(mut source) = self.source.take() {
            if let Err(err) = source.release() {
                log::debug!("color settings source release failed: {err}");
            }
        }
    }
}

impl Drop for SourceGuard {
    fn drop(&mut self) {
        self.close();
    }
}
