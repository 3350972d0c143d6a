#![warn(missing_docs)]

//! # Glaze Chrome Theming
//!
//! System theme, accent palette and backdrop management for desktop
//! windows. This crate holds the decision logic of the glaze stack:
//!
//! - **[AccentColorProvider](accent::AccentColorProvider)**: wraps the
//!   platform color-settings source and presents a stable, defaulted
//!   accent palette of seven tones.
//! - **[BackdropManager](backdrop::BackdropManager)**: gates translucent
//!   backdrop materials by OS capability and applies per-window chrome
//!   attributes idempotently.
//! - **[ThemeEngine](engine::ThemeEngine)**: samples OS theme state,
//!   resolves the chrome variant (light, dark or one of four high-contrast
//!   renditions), overlays resource dictionaries and synchronizes every
//!   open window's titlebar mode and backdrop.
//!
//! All OS access goes through the seams defined in `glaze-platform`, so
//! every decision in this crate is testable against in-memory fakes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use glaze_theme::config::ChromeConfig;
//! use glaze_theme::engine::ThemeEngine;
//! use glaze_theme::resources::ResourceTable;
//! use glaze_platform::OsVersion;
//!
//! # fn demo(
//! #     backend: &dyn glaze_platform::ColorSettingsBackend,
//! #     store: Box<dyn glaze_platform::PersonalizationStore>,
//! #     compositor: Box<dyn glaze_platform::Compositor>,
//! #     windows: &[&dyn glaze_platform::ChromeWindow],
//! # ) -> Result<(), glaze_theme::error::ChromeError> {
//! let mut resources = ResourceTable::new();
//! let mut engine = ThemeEngine::new(
//!     backend,
//!     store,
//!     compositor,
//!     OsVersion::WINDOWS_11_INSIDER_1.capabilities(),
//!     ChromeConfig::from_env_or_default(),
//!     &resources,
//! )?;
//!
//! // on window activation or a settings-changed event:
//! engine.apply_system_theme(&mut resources, windows, false);
//! # Ok(())
//! # }
//! ```

/// Contains the [accent::AccentColorProvider] and accent palette types.
pub mod accent;
/// Contains the [backdrop::BackdropManager] and backdrop styles.
pub mod backdrop;
/// Contains the [config::ChromeConfig] host switches.
pub mod config;
/// Contains the [engine::ThemeEngine] orchestration and theme state.
pub mod engine;
/// Contains error types for the chrome theming system.
pub mod error;
/// Contains the resource table and theme dictionaries.
pub mod resources;
/// Contains hex (de)serialization for colors.
pub mod serde_color;
/// Contains the built-in chrome theme variants.
pub mod variants;

pub use accent::{fallback_accent, AccentColorProvider, AccentPalette};
pub use backdrop::{Backdrop, BackdropManager};
pub use config::ChromeConfig;
pub use engine::{ThemeEngine, ThemeState, DEFAULT_THEME_NAME, FLUENT_THEME_MARKER};
pub use error::{ChromeError, ChromeResult};
pub use resources::{MergeStats, ResourceTable, ResourceValue, ThemeDictionary};
pub use variants::{ChromePalette, LogicalTheme, ThemeVariant};
