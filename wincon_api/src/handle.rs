// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Newtype handles for the console resources the OS hands out.
//!
//! Handles are opaque OS-owned identifiers: this layer never dereferences
//! them, never assumes exclusive ownership, and never frees a handle it did
//! not allocate. The types are `Copy` and carry no `Drop` — release is an
//! explicit call (`screen::close` for caller-created screen buffers,
//! `pseudo::close` for pseudo-consoles), made exactly once by the caller.

use wincon_ffi::{HANDLE, HPCON, HWND, INVALID_HANDLE_VALUE};

/// Console input handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHandle(pub HANDLE);

/// Console output or screen-buffer handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputHandle(pub HANDLE);

/// Pseudo-console handle. Released with the pseudo-console close entry
/// point, never the generic handle close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PseudoHandle(pub HPCON);

/// Console window handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle(pub HWND);

impl InputHandle {
    pub fn is_valid(&self) -> bool {
        self.0 != INVALID_HANDLE_VALUE && self.0 != 0
    }
}

impl OutputHandle {
    pub fn is_valid(&self) -> bool {
        self.0 != INVALID_HANDLE_VALUE && self.0 != 0
    }
}

impl WindowHandle {
    /// The OS reports "no attached console window" as a null handle.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_validity() {
        assert!(InputHandle(0x1000).is_valid());
        assert!(!InputHandle(INVALID_HANDLE_VALUE).is_valid());
        assert!(!OutputHandle(0).is_valid());
    }

    #[test]
    fn test_window_handle_null() {
        assert!(WindowHandle(0).is_null());
        assert!(!WindowHandle(0xBEEF).is_null());
    }
}
