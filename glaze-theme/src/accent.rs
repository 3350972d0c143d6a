//! The system accent-color provider.
//!
//! Wraps a bound platform color-settings source and presents a stable,
//! defaulted accent palette: the base accent plus three lighter tints and
//! three darker shades. Individual query failures never escape this module;
//! the palette degrades to a fixed fallback color as a whole instead.

use glaze_platform::{ColorCategory, ColorSettingsBackend, SourceGuard};
use peniko::Color;

use crate::error::ChromeError;

/// The fixed fallback accent, substituted whenever the platform source
/// fails or the palette is masked.
pub fn fallback_accent() -> Color {
    Color::from_rgba8(0x00, 0x78, 0xd4, 0xff)
}

fn same_color(a: Color, b: Color) -> bool {
    a.to_rgba8() == b.to_rgba8()
}

/// The seven accent-derived tones of the system palette.
///
/// Either all seven values come from the same refresh pass, or the owning
/// provider masks the whole palette with the fallback color. Callers never
/// observe a mix of stale and fresh tones.
#[derive(Debug, Clone, Copy)]
pub struct AccentPalette {
    /// The base accent color.
    pub accent: Color,
    /// First lighter tint.
    pub light1: Color,
    /// Second lighter tint.
    pub light2: Color,
    /// Third lighter tint.
    pub light3: Color,
    /// First darker shade.
    pub dark1: Color,
    /// Second darker shade.
    pub dark2: Color,
    /// Third darker shade.
    pub dark3: Color,
}

impl AccentPalette {
    /// A palette with the same color in every slot.
    pub fn splat(color: Color) -> Self {
        Self {
            accent: color,
            light1: color,
            light2: color,
            light3: color,
            dark1: color,
            dark2: color,
            dark3: color,
        }
    }
}

impl Default for AccentPalette {
    fn default() -> Self {
        Self::splat(fallback_accent())
    }
}

/// Provider over the platform color-settings source.
///
/// Construction binds to the source through the injected backend; the bound
/// source is held behind a release guard so the underlying OS resource is
/// freed exactly once, on [AccentColorProvider::close] or on drop.
pub struct AccentColorProvider {
    source: SourceGuard,
    palette: AccentPalette,
    // Base accent committed by the last full refresh pass. `None` until the
    // first pass so the skip optimization cannot trigger before one ran.
    committed_accent: Option<Color>,
    use_fallback: bool,
}

impl AccentColorProvider {
    /// Bind to the platform color-settings source.
    ///
    /// Fails with [ChromeError::PlatformUnsupported] when the backend's
    /// support probe is negative or binding yields no usable source.
    pub fn new(backend: &dyn ColorSettingsBackend) -> Result<Self, ChromeError> {
        if !backend.is_supported() {
            return Err(ChromeError::PlatformUnsupported);
        }
        let source = backend.bind().ok_or(ChromeError::PlatformUnsupported)?;
        Ok(Self {
            source: SourceGuard::new(source),
            palette: AccentPalette::default(),
            committed_accent: None,
            use_fallback: true,
        })
    }

    /// Query one named color category from the bound source.
    ///
    /// Provider-level failures never propagate: the result is `false`
    /// together with the fallback color.
    pub fn color_value(&self, category: ColorCategory) -> (bool, Color) {
        match self.source.color_value(category) {
            Ok(color) => (true, color),
            Err(err) => {
                log::debug!("accent query for {category:?} failed: {err}");
                (false, fallback_accent())
            }
        }
    }

    /// The live system accent, or the fallback color when the query fails.
    pub fn system_accent(&self) -> Color {
        self.color_value(ColorCategory::Accent).1
    }

    /// Whether `color` equals the base accent committed by the last refresh.
    pub fn matches_committed(&self, color: Color) -> bool {
        self.committed_accent
            .map(|committed| same_color(committed, color))
            .unwrap_or(false)
    }

    /// Refresh the cached palette from the source.
    ///
    /// Queries the base accent first; when it is unchanged since the last
    /// pass the six derived queries are skipped and the current masking
    /// state is kept. When it changed, all six derived tones are re-queried
    /// and the palette is committed only if every query succeeded;
    /// otherwise the whole palette stays masked until a later pass with yet
    /// another base accent succeeds in full.
    pub fn refresh_accent_colors(&mut self) {
        let (ok, sampled) = self.color_value(ColorCategory::Accent);
        if !ok {
            self.use_fallback = true;
            return;
        }
        if self.matches_committed(sampled) {
            return;
        }

        let mut fresh = AccentPalette::splat(sampled);
        let mut complete = true;
        for category in ColorCategory::DERIVED {
            let (ok, color) = self.color_value(category);
            complete &= ok;
            match category {
                ColorCategory::AccentLight1 => fresh.light1 = color,
                ColorCategory::AccentLight2 => fresh.light2 = color,
                ColorCategory::AccentLight3 => fresh.light3 = color,
                ColorCategory::AccentDark1 => fresh.dark1 = color,
                ColorCategory::AccentDark2 => fresh.dark2 = color,
                ColorCategory::AccentDark3 => fresh.dark3 = color,
                ColorCategory::Accent => {}
            }
        }

        self.committed_accent = Some(sampled);
        if complete {
            self.palette = fresh;
            self.use_fallback = false;
        } else {
            self.use_fallback = true;
        }
    }

    /// Whether the palette is currently masked with the fallback color.
    pub fn uses_fallback(&self) -> bool {
        self.use_fallback
    }

    /// The effective palette: the cached tones, or the fallback color in
    /// every slot while the palette is masked.
    pub fn palette(&self) -> AccentPalette {
        if self.use_fallback {
            AccentPalette::splat(fallback_accent())
        } else {
            self.palette
        }
    }

    /// The base accent color.
    pub fn accent(&self) -> Color {
        self.masked(self.palette.accent)
    }

    /// First lighter tint of the accent.
    pub fn accent_light1(&self) -> Color {
        self.masked(self.palette.light1)
    }

    /// Second lighter tint of the accent.
    pub fn accent_light2(&self) -> Color {
        self.masked(self.palette.light2)
    }

    /// Third lighter tint of the accent.
    pub fn accent_light3(&self) -> Color {
        self.masked(self.palette.light3)
    }

    /// First darker shade of the accent.
    pub fn accent_dark1(&self) -> Color {
        self.masked(self.palette.dark1)
    }

    /// Second darker shade of the accent.
    pub fn accent_dark2(&self) -> Color {
        self.masked(self.palette.dark2)
    }

    /// Third darker shade of the accent.
    pub fn accent_dark3(&self) -> Color {
        self.masked(self.palette.dark3)
    }

    /// Release the bound source now instead of waiting for drop.
    pub fn close(&mut self) {
        self.source.close();
    }

    fn masked(&self, color: Color) -> Color {
        if self.use_fallback {
            fallback_accent()
        } else {
            color
        }
    }
}
