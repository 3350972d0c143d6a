#![warn(missing_docs)]

//! # Glaze Platform Seams
//!
//! Trait definitions and value types for the operating-system services the
//! glaze theming stack talks to: the color-settings source that exposes the
//! system accent palette, the personalization store holding theme name and
//! light/dark preference, and the compositor attribute API that controls
//! per-window backdrop materials and titlebar mode.
//!
//! Everything here is an injectable seam. Production backends wrap the real
//! OS services; tests substitute in-memory fakes. None of the decision logic
//! in `glaze-theme` touches the OS directly, so the whole subsystem can be
//! exercised without a compositor.

/// Contains the [capability::OsCapabilities] flag set and version thresholds.
pub mod capability;
/// Contains the accent color-settings source traits and release guard.
pub mod color_source;
/// Contains the [compositor::Compositor] window-attribute seam.
pub mod compositor;
/// Contains the [personalization::PersonalizationStore] seam.
pub mod personalization;
/// Contains window handle and window access types.
pub mod window;

pub use capability::{OsCapabilities, OsVersion};
pub use color_source::{ColorCategory, ColorSettingsBackend, ColorSettingsSource, SourceError, SourceGuard};
pub use compositor::{BackdropMaterial, Compositor, CompositorError, FrameMargins};
pub use personalization::PersonalizationStore;
pub use window::{ChromeWindow, WindowHandle};
