#![warn(missing_docs)]

//! Window-chrome theming for desktop UI toolkits with Rust.

pub use peniko as color;

pub use glaze_platform as platform;
pub use glaze_theme as theme;

/// A "prelude" for users of the glaze chrome stack.
///
/// Importing this module brings into scope the types needed to wire the
/// theming subsystem into a toolkit.
///
/// ```rust
/// use glaze::prelude::*;
/// ```
pub mod prelude {
    // Platform seams
    pub use crate::platform::{
        BackdropMaterial, ChromeWindow, ColorCategory, ColorSettingsBackend, ColorSettingsSource,
        Compositor, CompositorError, FrameMargins, OsCapabilities, OsVersion, PersonalizationStore,
        SourceError, SourceGuard, WindowHandle,
    };

    // Theming
    pub use crate::theme::{
        fallback_accent, AccentColorProvider, AccentPalette, Backdrop, BackdropManager,
        ChromeConfig, ChromeError, ChromeResult, LogicalTheme, MergeStats, ResourceTable,
        ResourceValue, ThemeDictionary, ThemeEngine, ThemeState, ThemeVariant,
    };

    // Color
    pub use peniko::Color;
}
