//! The compositor window-attribute seam.
//!
//! Covers the three per-window attributes the chrome managers mutate: the
//! backdrop material behind the client area, the light/dark titlebar flag,
//! and the glass-frame extension margins. A fourth call controls the color
//! the composition target paints behind the window content, which must be
//! transparent while a material is active.

use peniko::Color;
use thiserror::Error;

use crate::window::WindowHandle;

/// The backdrop material the compositor paints behind a window.
///
/// This is the attribute-level value; the user-facing backdrop selection
/// lives in `glaze-theme` and maps onto these materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackdropMaterial {
    /// No material; the window paints its own background.
    None,
    /// The standard main-window material.
    MainWindow,
    /// The material for transient surfaces such as popups and flyouts.
    TransientWindow,
    /// The material for tabbed windows.
    TabbedWindow,
}

/// Four-sided glass-frame extension margins.
///
/// All-negative margins signal "extend the frame into the full client
/// area"; all-zero margins retract the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameMargins {
    /// Left margin width.
    pub left: i32,
    /// Top margin height.
    pub top: i32,
    /// Right margin width.
    pub right: i32,
    /// Bottom margin height.
    pub bottom: i32,
}

impl FrameMargins {
    /// No glass-frame extension.
    pub const NONE: FrameMargins = FrameMargins::uniform(0);
    /// Extend the glass frame into the entire client area.
    pub const FULL_EXTENSION: FrameMargins = FrameMargins::uniform(-1);

    /// Margins with the same value on all four edges.
    pub const fn uniform(value: i32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// Errors reported by the compositor attribute API.
#[derive(Error, Debug)]
pub enum CompositorError {
    /// The compositor rejected the attribute change.
    #[error("compositor rejected {attribute} for window {window:?}: {details}")]
    AttributeRejected {
        /// The attribute that was being set.
        attribute: &'static str,
        /// The window the change targeted.
        window: WindowHandle,
        /// OS-level failure details.
        details: String,
    },
    /// No composition target exists for the window.
    #[error("window {0:?} has no composition target")]
    NoCompositionTarget(WindowHandle),
}

/// Mutation of per-window compositor attributes.
///
/// All calls are synchronous and expected to be fast. Failures surface as
/// [CompositorError]; callers in `glaze-theme` convert them into boolean
/// results per their contract and never retry.
pub trait Compositor {
    /// Set the backdrop material attribute of a window.
    fn set_backdrop_material(
        &mut self,
        window: WindowHandle,
        material: BackdropMaterial,
    ) -> Result<(), CompositorError>;

    /// Set or clear the dark-titlebar flag of a window.
    fn set_dark_titlebar(&mut self, window: WindowHandle, dark: bool) -> Result<(), CompositorError>;

    /// Extend or retract the glass frame by the given margins.
    fn extend_frame(
        &mut self,
        window: WindowHandle,
        margins: FrameMargins,
    ) -> Result<(), CompositorError>;

    /// Set the color the composition target paints behind the window.
    fn set_composition_background(
        &mut self,
        window: WindowHandle,
        color: Color,
    ) -> Result<(), CompositorError>;

    /// The OS default window background color.
    fn system_window_color(&self) -> Color {
        Color::WHITE
    }
}
