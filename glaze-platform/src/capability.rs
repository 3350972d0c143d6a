//! OS capability flags for window-chrome features.
//!
//! Backdrop materials and glass-frame extension depend on the running OS
//! build. Rather than sprinkling version comparisons through the theming
//! code, the host resolves an [OsCapabilities] set once at startup (from
//! [OsVersion::capabilities] or by constructing flags directly in tests) and
//! injects it wherever chrome decisions are made.

use bitflags::bitflags;

bitflags! {
    /// Window-chrome features available on the running OS.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OsCapabilities: u32 {
        /// Compositor glass-frame extension and transient (popup) backdrops.
        ///
        /// Present on Windows 7 and newer.
        const GLASS_FRAME = 1 << 0;
        /// The main-window backdrop material.
        ///
        /// Present on Windows 11 RTM and newer.
        const BACKDROP_MATERIALS = 1 << 1;
        /// Auto and tabbed-window backdrop materials, and the per-window
        /// material attribute the global backdrop gate requires.
        ///
        /// Present on the first Windows 11 insider preview build and newer.
        const BACKDROP_MATERIALS_FULL = 1 << 2;
    }
}

/// An OS version as reported by the platform, compared lexicographically as
/// `(major, minor, build)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OsVersion {
    /// Major version number.
    pub major: u32,
    /// Minor version number.
    pub minor: u32,
    /// Build number.
    pub build: u32,
}

impl OsVersion {
    /// Windows 7 RTM.
    pub const WINDOWS_7: OsVersion = OsVersion::new(6, 1, 7600);
    /// Windows 11 RTM.
    pub const WINDOWS_11: OsVersion = OsVersion::new(10, 0, 22000);
    /// First Windows 11 insider preview build carrying the extended
    /// backdrop-material attribute set.
    pub const WINDOWS_11_INSIDER_1: OsVersion = OsVersion::new(10, 0, 22523);

    /// Create a version from its components.
    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        Self { major, minor, build }
    }

    /// Resolve the capability flags this version grants.
    pub fn capabilities(self) -> OsCapabilities {
        let mut caps = OsCapabilities::empty();
        if self >= Self::WINDOWS_7 {
            caps |= OsCapabilities::GLASS_FRAME;
        }
        if self >= Self::WINDOWS_11 {
            caps |= OsCapabilities::BACKDROP_MATERIALS;
        }
        if self >= Self::WINDOWS_11_INSIDER_1 {
            caps |= OsCapabilities::BACKDROP_MATERIALS_FULL;
        }
        caps
    }
}
