//! The personalization-store seam.

/// Read access to the OS personalization state the theme engine samples.
///
/// The store is a key-value surface; the methods here name the handful of
/// entries the engine cares about. Absent keys are `None`, never defaults,
/// so the engine keeps control over fallback semantics.
pub trait PersonalizationStore {
    /// The current OS theme file name, e.g. `"aero.theme"` or
    /// `"hcwhite.theme"`. `None` when the store has no entry.
    fn current_theme_name(&self) -> Option<String>;

    /// The per-application light-theme preference, as the raw integer the
    /// store holds. `None` when the key is absent.
    fn apps_use_light_theme(&self) -> Option<i32>;

    /// The system-wide light-theme preference, read as a fallback when
    /// [PersonalizationStore::apps_use_light_theme] is absent.
    fn system_uses_light_theme(&self) -> Option<i32>;

    /// Whether a system high-contrast theme is active.
    fn high_contrast(&self) -> bool {
        false
    }
}
