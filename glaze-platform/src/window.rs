//! Window identity types used by the chrome managers.

/// An opaque native window identity.
///
/// The value is whatever the platform hands out for a realized window; zero
/// means the window exists as a toolkit object but has not been realized
/// natively yet. Handles are borrowed for the duration of a single call and
/// never stored by the theming code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    /// The handle of a window that has not been realized yet.
    pub const NULL: WindowHandle = WindowHandle(0);

    /// Whether the native window behind this handle exists.
    pub fn is_realized(self) -> bool {
        self.0 != 0
    }
}

/// Access to the window properties the chrome managers need.
///
/// Implemented by the toolkit's window type. Only read access is required;
/// all mutation goes through the [compositor](crate::compositor::Compositor)
/// seam using the handle.
pub trait ChromeWindow {
    /// The native handle, [WindowHandle::NULL] until the window is realized.
    fn handle(&self) -> WindowHandle;

    /// Whether the window opted into per-pixel transparency compositing.
    ///
    /// Backdrop materials and transparency compositing are mutually
    /// exclusive at the OS level.
    fn allows_transparency(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_handle_is_unrealized() {
        assert!(!WindowHandle::NULL.is_realized());
        assert!(WindowHandle(0x1a2b).is_realized());
    }
}
