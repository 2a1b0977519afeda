// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Primitive aliases and fixed-layout console records.
//!
//! Field names keep their Win32 spellings so the declarations can be read
//! against the SDK headers directly.

use core::ffi::c_void;

pub type BOOL = i32;
pub type SHORT = i16;
pub type WORD = u16;
pub type DWORD = u32;
pub type UINT = u32;
pub type WCHAR = u16;
pub type HRESULT = i32;

/// Opaque OS-owned handle. Pointer-sized so the sentinel values
/// (`INVALID_HANDLE_VALUE` is all-ones) keep their native representation.
pub type HANDLE = isize;
pub type HWND = isize;
/// Pseudo-console handle, distinct from ordinary console handles: it is
/// released with `ClosePseudoConsole`, never `CloseHandle`.
pub type HPCON = isize;

/// RGB packed as `0x00BBGGRR` in a 32-bit value.
pub type COLORREF = DWORD;

pub type LPCWSTR = *const WCHAR;
pub type LPVOID = *mut c_void;

/// Control-event callback installed with `SetConsoleCtrlHandler`. The OS
/// dictates the signature and calling convention; the registered function
/// must stay valid for as long as it is installed.
pub type PHANDLER_ROUTINE = Option<unsafe extern "system" fn(CtrlType: DWORD) -> BOOL>;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct COORD {
    pub X: SHORT,
    pub Y: SHORT,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SMALL_RECT {
    pub Left: SHORT,
    pub Top: SHORT,
    pub Right: SHORT,
    pub Bottom: SHORT,
}

/// One character cell: UTF-16 code unit plus attribute word. The OS header
/// overlays an ANSI `CHAR` on the character field; only the wide
/// interpretation is carried here, which has the identical 4-byte layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CHAR_INFO {
    pub UnicodeChar: WCHAR,
    pub Attributes: WORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CONSOLE_CURSOR_INFO {
    /// Percentage (1-100) of the cell filled by the cursor.
    pub dwSize: DWORD,
    pub bVisible: BOOL,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CONSOLE_FONT_INFO {
    pub nFont: DWORD,
    pub dwFontSize: COORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CONSOLE_FONT_INFOEX {
    /// Must be set to `size_of::<CONSOLE_FONT_INFOEX>()` before the call.
    pub cbSize: DWORD,
    pub nFont: DWORD,
    pub dwFontSize: COORD,
    pub FontFamily: UINT,
    pub FontWeight: UINT,
    pub FaceName: [WCHAR; LF_FACESIZE],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CONSOLE_HISTORY_INFO {
    /// Must be set to `size_of::<CONSOLE_HISTORY_INFO>()` before the call.
    pub cbSize: UINT,
    pub HistoryBufferSize: UINT,
    pub NumberOfHistoryBuffers: UINT,
    pub dwFlags: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CONSOLE_READCONSOLE_CONTROL {
    /// Must be set to `size_of::<CONSOLE_READCONSOLE_CONTROL>()`.
    pub nLength: DWORD,
    pub nInitialChars: DWORD,
    pub dwCtrlWakeupMask: DWORD,
    pub dwControlKeyState: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CONSOLE_SCREEN_BUFFER_INFO {
    pub dwSize: COORD,
    pub dwCursorPosition: COORD,
    pub wAttributes: WORD,
    pub srWindow: SMALL_RECT,
    pub dwMaximumWindowSize: COORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CONSOLE_SCREEN_BUFFER_INFOEX {
    /// Must be set to `size_of::<CONSOLE_SCREEN_BUFFER_INFOEX>()`.
    pub cbSize: DWORD,
    pub dwSize: COORD,
    pub dwCursorPosition: COORD,
    pub wAttributes: WORD,
    pub srWindow: SMALL_RECT,
    pub dwMaximumWindowSize: COORD,
    pub wPopupAttributes: WORD,
    pub bFullscreenSupported: BOOL,
    pub ColorTable: [COLORREF; 16],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CONSOLE_SELECTION_INFO {
    pub dwFlags: DWORD,
    pub dwSelectionAnchor: COORD,
    pub srSelection: SMALL_RECT,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KEY_EVENT_RECORD {
    pub bKeyDown: BOOL,
    pub wRepeatCount: WORD,
    pub wVirtualKeyCode: WORD,
    pub wVirtualScanCode: WORD,
    pub UnicodeChar: WCHAR,
    pub dwControlKeyState: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MOUSE_EVENT_RECORD {
    pub dwMousePosition: COORD,
    pub dwButtonState: DWORD,
    pub dwControlKeyState: DWORD,
    pub dwEventFlags: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WINDOW_BUFFER_SIZE_RECORD {
    pub dwSize: COORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MENU_EVENT_RECORD {
    pub dwCommandId: UINT,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FOCUS_EVENT_RECORD {
    pub bSetFocus: BOOL,
}

/// Overlapping payload of an `INPUT_RECORD`: one memory region, five
/// interpretations. Which member is valid is selected by the `EventType`
/// tag of the enclosing record; reading any other member is undefined.
#[repr(C)]
#[derive(Clone, Copy)]
pub union INPUT_RECORD_EVENT {
    pub KeyEvent: KEY_EVENT_RECORD,
    pub MouseEvent: MOUSE_EVENT_RECORD,
    pub WindowBufferSizeEvent: WINDOW_BUFFER_SIZE_RECORD,
    pub MenuEvent: MENU_EVENT_RECORD,
    pub FocusEvent: FOCUS_EVENT_RECORD,
}

/// Tagged-union input event as the OS delivers it. The payload union starts
/// at offset 4 (the `WORD` tag is padded out to the union's alignment).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct INPUT_RECORD {
    pub EventType: WORD,
    pub Event: INPUT_RECORD_EVENT,
}

/// Maximum face-name length in `CONSOLE_FONT_INFOEX`, in `WCHAR`s.
pub const LF_FACESIZE: usize = 32;
