//! Theme-selection orchestration.
//!
//! The engine samples OS theme state, decides the logical theme and chrome
//! variant, overlays the variant's resource dictionary into the host's
//! resource table and pushes chrome attributes to every open window. The
//! whole operation is idempotent: unchanged inputs produce no resource
//! mutation and no window attribute calls.

use glaze_platform::{
    ChromeWindow, ColorCategory, ColorSettingsBackend, Compositor, OsCapabilities,
    PersonalizationStore,
};

use crate::accent::AccentColorProvider;
use crate::backdrop::{Backdrop, BackdropManager};
use crate::config::ChromeConfig;
use crate::error::ChromeError;
use crate::resources::{ResourceTable, ThemeDictionary};
use crate::variants::{self, LogicalTheme};

/// Merged-dictionary source suffix that marks the fluent chrome theme as
/// enabled for the application.
pub const FLUENT_THEME_MARKER: &str = "fluent.toml";

/// Theme name assumed when the personalization store has no entry.
pub const DEFAULT_THEME_NAME: &str = "aero.theme";

/// Last-applied theme state, owned by the engine.
///
/// Initialized at engine construction, mutated only by the apply
/// operation, and alive for as long as the engine. Single-thread affinity:
/// the engine takes `&mut self` for every mutation.
#[derive(Debug, Clone)]
pub struct ThemeState {
    current_theme_name: String,
    use_light_mode: bool,
    fluent_enabled: bool,
    registered_sources: Vec<String>,
}

impl ThemeState {
    /// The last-applied OS theme name.
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// The last-applied light/dark mode.
    pub fn use_light_mode(&self) -> bool {
        self.use_light_mode
    }

    /// Whether the fluent chrome theme was enabled at engine construction.
    pub fn fluent_enabled(&self) -> bool {
        self.fluent_enabled
    }

    /// Source identities of externally registered dictionaries, in
    /// registration order. Append-only.
    pub fn registered_sources(&self) -> &[String] {
        &self.registered_sources
    }
}

/// Orchestrates system theme application across windows and resources.
pub struct ThemeEngine {
    store: Box<dyn PersonalizationStore>,
    accent: AccentColorProvider,
    backdrop: BackdropManager,
    config: ChromeConfig,
    state: ThemeState,
}

impl ThemeEngine {
    /// Create an engine over the injected platform seams.
    ///
    /// Binds the accent provider (failing with
    /// [ChromeError::PlatformUnsupported] when the color-settings service
    /// is unavailable) and computes the one-time gates: fluent enablement
    /// is detected from the host's already-merged dictionaries, so the host
    /// must merge its fluent base dictionary before constructing the
    /// engine.
    pub fn new(
        backend: &dyn ColorSettingsBackend,
        store: Box<dyn PersonalizationStore>,
        compositor: Box<dyn Compositor>,
        capabilities: OsCapabilities,
        config: ChromeConfig,
        resources: &ResourceTable,
    ) -> Result<Self, ChromeError> {
        let accent = AccentColorProvider::new(backend)?;
        let fluent_enabled = resources
            .merged_dictionaries()
            .iter()
            .any(|dict| dict.source().ends_with(FLUENT_THEME_MARKER));
        let backdrop = BackdropManager::new(
            compositor,
            capabilities,
            config.disable_window_backdrop,
            fluent_enabled,
        );
        let current_theme_name = store
            .current_theme_name()
            .unwrap_or_else(|| DEFAULT_THEME_NAME.to_string());

        Ok(Self {
            store,
            accent,
            backdrop,
            config,
            state: ThemeState {
                current_theme_name,
                use_light_mode: true,
                fluent_enabled,
                registered_sources: Vec::new(),
            },
        })
    }

    /// The last-applied theme state.
    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    /// Whether the fluent chrome theme is enabled.
    pub fn is_fluent_enabled(&self) -> bool {
        self.state.fluent_enabled
    }

    /// The accent-color provider.
    pub fn accent(&self) -> &AccentColorProvider {
        &self.accent
    }

    /// The backdrop manager, for hosts that drive per-window backdrops
    /// directly.
    pub fn backdrop_mut(&mut self) -> &mut BackdropManager {
        &mut self.backdrop
    }

    /// Sample the OS theme state and apply it to all given windows.
    pub fn apply_system_theme(
        &mut self,
        resources: &mut ResourceTable,
        windows: &[&dyn ChromeWindow],
        force: bool,
    ) {
        let theme_name = self.sample_theme_name();
        let use_light = self.use_light_theme();
        self.apply_theme(resources, windows, &theme_name, use_light, force);
    }

    /// Sample the OS theme state and apply it to a single window.
    pub fn apply_system_theme_to_window(
        &mut self,
        resources: &mut ResourceTable,
        window: &dyn ChromeWindow,
        force: bool,
    ) {
        let theme_name = self.sample_theme_name();
        let use_light = self.use_light_theme();
        self.apply_theme(resources, &[window], &theme_name, use_light, force);
    }

    /// Apply a requested theme to the given windows.
    ///
    /// Re-applies only when forced, when the live accent differs from the
    /// committed one (refreshing the palette first), or when the requested
    /// name or light/dark mode differs from the last-applied state;
    /// otherwise the call is a no-op.
    pub fn apply_theme(
        &mut self,
        resources: &mut ResourceTable,
        windows: &[&dyn ChromeWindow],
        requested_theme: &str,
        requested_light: bool,
        force: bool,
    ) {
        let mut needs_update = force;

        let (accent_ok, sampled_accent) = self.accent.color_value(ColorCategory::Accent);
        if accent_ok && !self.accent.matches_committed(sampled_accent) {
            self.accent.refresh_accent_colors();
            needs_update = true;
        }

        if needs_update
            || requested_theme != self.state.current_theme_name
            || requested_light != self.state.use_light_mode
        {
            let high_contrast = self.store.high_contrast();
            let (variant, logical) = variants::resolve(requested_theme, requested_light, high_contrast);
            let backdrop = if logical == LogicalTheme::HighContrast {
                Backdrop::None
            } else {
                Backdrop::MainWindow
            };

            let dictionary = variants::dictionary(variant, &self.accent.palette());
            let stats = resources.merge_values(&dictionary);
            log::debug!(
                "applied chrome theme {}: {} added, {} replaced",
                variant.resource_name(),
                stats.added,
                stats.replaced
            );

            for window in windows {
                self.backdrop.set_dark_titlebar(Some(*window), !requested_light);
                self.backdrop.set_backdrop(Some(*window), backdrop);
            }

            self.state.current_theme_name = requested_theme.to_owned();
            self.state.use_light_mode = requested_light;
        }
    }

    /// Register an externally supplied theme dictionary.
    ///
    /// Appends the dictionary to the host's merged list once per distinct
    /// source identity, and only while the fluent chrome theme is enabled.
    /// Returns whether the dictionary was added.
    pub fn register_theme_dictionary(
        &mut self,
        resources: &mut ResourceTable,
        dictionary: ThemeDictionary,
    ) -> bool {
        if !self.state.fluent_enabled {
            return false;
        }
        if self
            .state
            .registered_sources
            .iter()
            .any(|source| source == dictionary.source())
        {
            return false;
        }

        self.state
            .registered_sources
            .push(dictionary.source().to_owned());
        resources.push_merged(dictionary);
        true
    }

    /// The light/dark preference in effect.
    ///
    /// A host override wins; otherwise the store's per-application key
    /// decides, and when that key is absent the system-wide key is read as
    /// a fallback where only an explicit zero selects dark.
    pub fn use_light_theme(&self) -> bool {
        if let Some(forced) = self.config.force_light_mode {
            return forced;
        }
        match self.store.apps_use_light_theme() {
            Some(value) => value != 0,
            None => self.store.system_uses_light_theme() != Some(0),
        }
    }

    fn sample_theme_name(&self) -> String {
        self.store
            .current_theme_name()
            .unwrap_or_else(|| DEFAULT_THEME_NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeStore {
        theme_name: Option<String>,
        apps_light: RefCell<Option<i32>>,
        system_light: RefCell<Option<i32>>,
        high_contrast: bool,
    }

    impl PersonalizationStore for FakeStore {
        fn current_theme_name(&self) -> Option<String> {
            self.theme_name.clone()
        }

        fn apps_use_light_theme(&self) -> Option<i32> {
            *self.apps_light.borrow()
        }

        fn system_uses_light_theme(&self) -> Option<i32> {
            *self.system_light.borrow()
        }

        fn high_contrast(&self) -> bool {
            self.high_contrast
        }
    }

    fn engine_with_store(store: FakeStore, config: ChromeConfig) -> ThemeEngine {
        // only use_light_theme is exercised here; the store is the sole
        // seam these tests need to be real
        struct NullSource;
        impl glaze_platform::ColorSettingsSource for NullSource {
            fn color_value(
                &self,
                category: ColorCategory,
            ) -> Result<peniko::Color, glaze_platform::SourceError> {
                let _ = category;
                Ok(peniko::Color::from_rgb8(0, 0x78, 0xd4))
            }
        }
        struct NullBackend;
        impl ColorSettingsBackend for NullBackend {
            fn is_supported(&self) -> bool {
                true
            }
            fn bind(&self) -> Option<Box<dyn glaze_platform::ColorSettingsSource>> {
                Some(Box::new(NullSource))
            }
        }
        struct NullCompositor;
        impl Compositor for NullCompositor {
            fn set_backdrop_material(
                &mut self,
                _: glaze_platform::WindowHandle,
                _: glaze_platform::BackdropMaterial,
            ) -> Result<(), glaze_platform::CompositorError> {
                Ok(())
            }
            fn set_dark_titlebar(
                &mut self,
                _: glaze_platform::WindowHandle,
                _: bool,
            ) -> Result<(), glaze_platform::CompositorError> {
                Ok(())
            }
            fn extend_frame(
                &mut self,
                _: glaze_platform::WindowHandle,
                _: glaze_platform::FrameMargins,
            ) -> Result<(), glaze_platform::CompositorError> {
                Ok(())
            }
            fn set_composition_background(
                &mut self,
                _: glaze_platform::WindowHandle,
                _: peniko::Color,
            ) -> Result<(), glaze_platform::CompositorError> {
                Ok(())
            }
        }

        ThemeEngine::new(
            &NullBackend,
            Box::new(store),
            Box::new(NullCompositor),
            OsCapabilities::all(),
            config,
            &ResourceTable::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_use_light_theme_two_key_fallback() {
        let store = FakeStore::default();
        store.apps_light.replace(Some(1));
        let engine = engine_with_store(store, ChromeConfig::default());
        assert!(engine.use_light_theme());

        let store = FakeStore::default();
        store.apps_light.replace(Some(0));
        let engine = engine_with_store(store, ChromeConfig::default());
        assert!(!engine.use_light_theme());

        // first key absent: the second key decides, dark only on explicit zero
        let store = FakeStore::default();
        store.system_light.replace(Some(0));
        let engine = engine_with_store(store, ChromeConfig::default());
        assert!(!engine.use_light_theme());

        let store = FakeStore::default();
        store.system_light.replace(Some(1));
        let engine = engine_with_store(store, ChromeConfig::default());
        assert!(engine.use_light_theme());

        // both keys absent: light
        let engine = engine_with_store(FakeStore::default(), ChromeConfig::default());
        assert!(engine.use_light_theme());
    }

    #[test]
    fn test_config_override_wins() {
        let store = FakeStore::default();
        store.apps_light.replace(Some(1));
        let engine = engine_with_store(
            store,
            ChromeConfig {
                disable_window_backdrop: false,
                force_light_mode: Some(false),
            },
        );
        assert!(!engine.use_light_theme());
    }

    #[test]
    fn test_default_theme_name() {
        let engine = engine_with_store(FakeStore::default(), ChromeConfig::default());
        assert_eq!(engine.state().current_theme_name(), DEFAULT_THEME_NAME);

        let engine = engine_with_store(
            FakeStore {
                theme_name: Some("custom.theme".into()),
                ..FakeStore::default()
            },
            ChromeConfig::default(),
        );
        assert_eq!(engine.state().current_theme_name(), "custom.theme");
    }
}
