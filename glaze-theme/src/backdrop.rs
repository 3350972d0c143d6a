//! Per-window backdrop and titlebar chrome management.
//!
//! Decides whether a backdrop style is available on the running OS, and
//! mutates the compositor attributes of individual windows: backdrop
//! material, glass-frame extension, composition background and the
//! dark-titlebar flag. All mutation is idempotent at the OS level; refused
//! or failed calls surface as `false` returns, never as errors.

use glaze_platform::{
    BackdropMaterial, ChromeWindow, Compositor, FrameMargins, OsCapabilities, WindowHandle,
};
use peniko::Color;

/// A window backdrop style selectable by the host or the theme engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    /// No backdrop; the window paints an opaque background.
    None,
    /// Let the compositor pick a material for the window kind.
    Auto,
    /// The standard main-window material.
    MainWindow,
    /// The material for transient surfaces such as popups.
    TransientWindow,
    /// The material for tabbed windows.
    TabbedWindow,
}

impl Backdrop {
    /// The compositor material this style maps onto.
    ///
    /// `Auto` resolves to the tabbed material, which the compositor itself
    /// adapts per window kind.
    pub fn material(self) -> BackdropMaterial {
        match self {
            Backdrop::None => BackdropMaterial::None,
            Backdrop::Auto => BackdropMaterial::TabbedWindow,
            Backdrop::MainWindow => BackdropMaterial::MainWindow,
            Backdrop::TransientWindow => BackdropMaterial::TransientWindow,
            Backdrop::TabbedWindow => BackdropMaterial::TabbedWindow,
        }
    }
}

/// Applies backdrop and titlebar chrome to windows through the compositor.
///
/// Holds the injected capability set and the process-lifetime enablement
/// gate. Single-thread affinity: the manager takes `&mut self` for every
/// mutation, so a multi-threaded host must wrap it in its own lock.
pub struct BackdropManager {
    compositor: Box<dyn Compositor>,
    capabilities: OsCapabilities,
    enabled: bool,
}

impl BackdropManager {
    /// Create a manager over the given compositor.
    ///
    /// The enablement gate is computed here, once: backdrops stay off for
    /// the manager's lifetime when the host opted out, when the OS lacks
    /// the extended material set, or when the fluent chrome theme is not
    /// enabled.
    pub fn new(
        compositor: Box<dyn Compositor>,
        capabilities: OsCapabilities,
        backdrop_disabled: bool,
        fluent_enabled: bool,
    ) -> Self {
        let enabled = !backdrop_disabled
            && capabilities.contains(OsCapabilities::BACKDROP_MATERIALS_FULL)
            && fluent_enabled;
        Self {
            compositor,
            capabilities,
            enabled,
        }
    }

    /// Whether a backdrop style is available on the running OS.
    pub fn is_supported(&self, backdrop: Backdrop) -> bool {
        match backdrop {
            Backdrop::Auto | Backdrop::TabbedWindow => self
                .capabilities
                .contains(OsCapabilities::BACKDROP_MATERIALS_FULL),
            Backdrop::MainWindow => self.capabilities.contains(OsCapabilities::BACKDROP_MATERIALS),
            Backdrop::TransientWindow => self.capabilities.contains(OsCapabilities::GLASS_FRAME),
            Backdrop::None => true,
        }
    }

    /// Whether backdrop application is globally enabled for this process.
    pub fn is_backdrop_enabled(&self) -> bool {
        self.enabled
    }

    /// Apply a backdrop style to a window.
    ///
    /// Refuses without side effects when the window is absent, the style is
    /// unsupported on this OS, the window composites its own transparency,
    /// backdrops are globally disabled, or the native handle is not
    /// realized yet. Otherwise reports whether the compositor accepted the
    /// material change.
    pub fn set_backdrop(&mut self, window: Option<&dyn ChromeWindow>, backdrop: Backdrop) -> bool {
        let Some(window) = window else {
            return false;
        };
        if !self.is_supported(backdrop) || window.allows_transparency() || !self.enabled {
            return false;
        }

        let handle = window.handle();
        if !handle.is_realized() {
            return false;
        }

        self.apply(handle, backdrop)
    }

    /// Set or clear a window's dark-titlebar flag.
    ///
    /// Returns `false` for absent or unrealized windows, else whether the
    /// compositor accepted the flag.
    pub fn set_dark_titlebar(&mut self, window: Option<&dyn ChromeWindow>, dark: bool) -> bool {
        let Some(window) = window else {
            return false;
        };
        let handle = window.handle();
        if !handle.is_realized() {
            return false;
        }

        match self.compositor.set_dark_titlebar(handle, dark) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("dark titlebar change failed: {err}");
                false
            }
        }
    }

    fn apply(&mut self, handle: WindowHandle, backdrop: Backdrop) -> bool {
        if backdrop == Backdrop::None {
            self.set_background(handle, self.compositor.system_window_color());
            self.update_glass_frame(handle, FrameMargins::NONE);
            self.set_material(handle, BackdropMaterial::None)
        } else {
            self.set_background(handle, Color::TRANSPARENT);
            self.update_glass_frame(handle, FrameMargins::FULL_EXTENSION);
            self.set_material(handle, backdrop.material())
        }
    }

    // Background and frame results do not affect the reported outcome; the
    // material attribute is the one that decides success.
    fn set_background(&mut self, handle: WindowHandle, color: Color) {
        if let Err(err) = self.compositor.set_composition_background(handle, color) {
            log::debug!("composition background change failed: {err}");
        }
    }

    fn update_glass_frame(&mut self, handle: WindowHandle, margins: FrameMargins) {
        if let Err(err) = self.compositor.extend_frame(handle, margins) {
            log::debug!("glass frame change failed: {err}");
        }
    }

    fn set_material(&mut self, handle: WindowHandle, material: BackdropMaterial) -> bool {
        match self.compositor.set_backdrop_material(handle, material) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("backdrop material change failed: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glaze_platform::{CompositorError, OsVersion};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Material(WindowHandle, BackdropMaterial),
        DarkTitlebar(WindowHandle, bool),
        Frame(WindowHandle, FrameMargins),
        Background(WindowHandle, [u8; 4]),
    }

    #[derive(Default, Clone)]
    struct CallLog(Rc<RefCell<Vec<Call>>>);

    impl CallLog {
        fn calls(&self) -> Vec<Call> {
            self.0.borrow().clone()
        }
    }

    #[derive(Default)]
    struct RecordingCompositor {
        log: CallLog,
        reject_material: bool,
    }

    impl Compositor for RecordingCompositor {
        fn set_backdrop_material(
            &mut self,
            window: WindowHandle,
            material: BackdropMaterial,
        ) -> Result<(), CompositorError> {
            self.log.0.borrow_mut().push(Call::Material(window, material));
            if self.reject_material {
                Err(CompositorError::AttributeRejected {
                    attribute: "backdrop material",
                    window,
                    details: "rejected".into(),
                })
            } else {
                Ok(())
            }
        }

        fn set_dark_titlebar(
            &mut self,
            window: WindowHandle,
            dark: bool,
        ) -> Result<(), CompositorError> {
            self.log.0.borrow_mut().push(Call::DarkTitlebar(window, dark));
            Ok(())
        }

        fn extend_frame(
            &mut self,
            window: WindowHandle,
            margins: FrameMargins,
        ) -> Result<(), CompositorError> {
            self.log.0.borrow_mut().push(Call::Frame(window, margins));
            Ok(())
        }

        fn set_composition_background(
            &mut self,
            window: WindowHandle,
            color: Color,
        ) -> Result<(), CompositorError> {
            let rgba = color.to_rgba8();
            self.log
                .0
                .borrow_mut()
                .push(Call::Background(window, [rgba.r, rgba.g, rgba.b, rgba.a]));
            Ok(())
        }
    }

    struct FakeWindow {
        handle: WindowHandle,
        transparency: bool,
    }

    impl FakeWindow {
        fn realized() -> Self {
            Self {
                handle: WindowHandle(0x51),
                transparency: false,
            }
        }
    }

    impl ChromeWindow for FakeWindow {
        fn handle(&self) -> WindowHandle {
            self.handle
        }

        fn allows_transparency(&self) -> bool {
            self.transparency
        }
    }

    fn manager(caps: OsCapabilities) -> (BackdropManager, CallLog) {
        let log = CallLog::default();
        let compositor = RecordingCompositor {
            log: log.clone(),
            reject_material: false,
        };
        (BackdropManager::new(Box::new(compositor), caps, false, true), log)
    }

    fn insider_manager() -> (BackdropManager, CallLog) {
        manager(OsVersion::WINDOWS_11_INSIDER_1.capabilities())
    }

    #[test]
    fn test_support_table() {
        let (win10, _) = manager(OsVersion::new(10, 0, 19045).capabilities());
        assert!(win10.is_supported(Backdrop::None));
        assert!(win10.is_supported(Backdrop::TransientWindow));
        assert!(!win10.is_supported(Backdrop::Auto));
        assert!(!win10.is_supported(Backdrop::MainWindow));

        let (win11, _) = manager(OsVersion::WINDOWS_11.capabilities());
        assert!(win11.is_supported(Backdrop::MainWindow));
        assert!(!win11.is_supported(Backdrop::TabbedWindow));

        let (insider, _) = insider_manager();
        assert!(insider.is_supported(Backdrop::Auto));
        assert!(insider.is_supported(Backdrop::TabbedWindow));

        let (bare, _) = manager(OsCapabilities::empty());
        assert!(bare.is_supported(Backdrop::None));
        assert!(!bare.is_supported(Backdrop::TransientWindow));
    }

    #[test]
    fn test_refusals_have_no_side_effects() {
        let (mut manager, log) = insider_manager();

        assert!(!manager.set_backdrop(None, Backdrop::MainWindow));

        let transparent = FakeWindow {
            handle: WindowHandle(0x51),
            transparency: true,
        };
        assert!(!manager.set_backdrop(Some(&transparent), Backdrop::MainWindow));

        let unrealized = FakeWindow {
            handle: WindowHandle::NULL,
            transparency: false,
        };
        assert!(!manager.set_backdrop(Some(&unrealized), Backdrop::MainWindow));

        assert!(log.calls().is_empty());
    }

    #[test]
    fn test_disabled_gate_refuses() {
        let log = CallLog::default();
        let mut manager = BackdropManager::new(
            Box::new(RecordingCompositor {
                log: log.clone(),
                reject_material: false,
            }),
            OsVersion::WINDOWS_11_INSIDER_1.capabilities(),
            true,
            true,
        );
        assert!(!manager.is_backdrop_enabled());
        assert!(!manager.set_backdrop(Some(&FakeWindow::realized()), Backdrop::MainWindow));
        assert!(log.calls().is_empty());

        let without_fluent = BackdropManager::new(
            Box::new(RecordingCompositor::default()),
            OsVersion::WINDOWS_11_INSIDER_1.capabilities(),
            false,
            false,
        );
        assert!(!without_fluent.is_backdrop_enabled());
    }

    #[test]
    fn test_apply_sets_transparent_background_and_full_frame() {
        let (mut manager, log) = insider_manager();
        let window = FakeWindow::realized();

        assert!(manager.set_backdrop(Some(&window), Backdrop::MainWindow));
        assert_eq!(
            log.calls(),
            vec![
                Call::Background(window.handle, [0, 0, 0, 0]),
                Call::Frame(window.handle, FrameMargins::FULL_EXTENSION),
                Call::Material(window.handle, BackdropMaterial::MainWindow),
            ]
        );
    }

    #[test]
    fn test_clearing_restores_background_and_frame() {
        let (mut manager, log) = insider_manager();
        let window = FakeWindow::realized();

        manager.set_backdrop(Some(&window), Backdrop::TabbedWindow);
        assert!(manager.set_backdrop(Some(&window), Backdrop::None));

        let calls = log.calls();
        assert_eq!(
            calls[3..],
            [
                Call::Background(window.handle, [255, 255, 255, 255]),
                Call::Frame(window.handle, FrameMargins::NONE),
                Call::Material(window.handle, BackdropMaterial::None),
            ]
        );
    }

    #[test]
    fn test_material_rejection_reports_failure() {
        let mut manager = BackdropManager::new(
            Box::new(RecordingCompositor {
                log: CallLog::default(),
                reject_material: true,
            }),
            OsVersion::WINDOWS_11_INSIDER_1.capabilities(),
            false,
            true,
        );
        let window = FakeWindow::realized();
        assert!(!manager.set_backdrop(Some(&window), Backdrop::MainWindow));
        assert!(!manager.set_backdrop(Some(&window), Backdrop::None));
    }

    #[test]
    fn test_dark_titlebar_requires_realized_window() {
        let (mut manager, log) = insider_manager();
        assert!(!manager.set_dark_titlebar(None, true));

        let unrealized = FakeWindow {
            handle: WindowHandle::NULL,
            transparency: false,
        };
        assert!(!manager.set_dark_titlebar(Some(&unrealized), true));

        let window = FakeWindow::realized();
        assert!(manager.set_dark_titlebar(Some(&window), true));
        assert_eq!(log.calls(), vec![Call::DarkTitlebar(window.handle, true)]);
    }
}
