// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Record Layout Tests
//!
//! Verify that every fixed-layout record matches the size, alignment, and
//! field offsets the console ABI documents. A mismatch here would corrupt
//! data silently at the call boundary rather than fail at runtime.

use core::mem::{align_of, size_of};

use memoffset::offset_of;
use static_assertions::*;
use wincon_ffi::*;

// Compile-time size assertions for the primitive aliases.
assert_eq_size!(BOOL, i32);
assert_eq_size!(WORD, u16);
assert_eq_size!(DWORD, u32);
assert_eq_size!(WCHAR, u16);
assert_eq_size!(COLORREF, u32);
assert_eq_size!(HANDLE, *mut core::ffi::c_void);

#[test]
fn test_coord_layout() {
    // Two 16-bit signed fields, nothing more.
    assert_eq!(size_of::<COORD>(), 4, "COORD must be exactly 4 bytes");
    assert_eq!(align_of::<COORD>(), 2);
    assert_eq!(offset_of!(COORD, X), 0);
    assert_eq!(offset_of!(COORD, Y), 2);
}

#[test]
fn test_small_rect_layout() {
    assert_eq!(size_of::<SMALL_RECT>(), 8);
    assert_eq!(offset_of!(SMALL_RECT, Left), 0);
    assert_eq!(offset_of!(SMALL_RECT, Top), 2);
    assert_eq!(offset_of!(SMALL_RECT, Right), 4);
    assert_eq!(offset_of!(SMALL_RECT, Bottom), 6);
}

#[test]
fn test_char_info_layout() {
    assert_eq!(size_of::<CHAR_INFO>(), 4);
    assert_eq!(offset_of!(CHAR_INFO, UnicodeChar), 0);
    assert_eq!(offset_of!(CHAR_INFO, Attributes), 2);
}

#[test]
fn test_cursor_info_layout() {
    assert_eq!(size_of::<CONSOLE_CURSOR_INFO>(), 8);
    assert_eq!(offset_of!(CONSOLE_CURSOR_INFO, dwSize), 0);
    assert_eq!(offset_of!(CONSOLE_CURSOR_INFO, bVisible), 4);
}

#[test]
fn test_font_info_layout() {
    assert_eq!(size_of::<CONSOLE_FONT_INFO>(), 8);
    assert_eq!(offset_of!(CONSOLE_FONT_INFO, nFont), 0);
    assert_eq!(offset_of!(CONSOLE_FONT_INFO, dwFontSize), 4);
}

#[test]
fn test_font_infoex_layout() {
    // 5 dword-sized leading fields plus a 32-WCHAR face name.
    assert_eq!(size_of::<CONSOLE_FONT_INFOEX>(), 84);
    assert_eq!(offset_of!(CONSOLE_FONT_INFOEX, cbSize), 0);
    assert_eq!(offset_of!(CONSOLE_FONT_INFOEX, nFont), 4);
    assert_eq!(offset_of!(CONSOLE_FONT_INFOEX, dwFontSize), 8);
    assert_eq!(offset_of!(CONSOLE_FONT_INFOEX, FontFamily), 12);
    assert_eq!(offset_of!(CONSOLE_FONT_INFOEX, FontWeight), 16);
    assert_eq!(offset_of!(CONSOLE_FONT_INFOEX, FaceName), 20);
}

#[test]
fn test_history_info_layout() {
    assert_eq!(size_of::<CONSOLE_HISTORY_INFO>(), 16);
    assert_eq!(offset_of!(CONSOLE_HISTORY_INFO, cbSize), 0);
    assert_eq!(offset_of!(CONSOLE_HISTORY_INFO, HistoryBufferSize), 4);
    assert_eq!(offset_of!(CONSOLE_HISTORY_INFO, NumberOfHistoryBuffers), 8);
    assert_eq!(offset_of!(CONSOLE_HISTORY_INFO, dwFlags), 12);
}

#[test]
fn test_readconsole_control_layout() {
    assert_eq!(size_of::<CONSOLE_READCONSOLE_CONTROL>(), 16);
    assert_eq!(offset_of!(CONSOLE_READCONSOLE_CONTROL, nLength), 0);
    assert_eq!(offset_of!(CONSOLE_READCONSOLE_CONTROL, nInitialChars), 4);
    assert_eq!(offset_of!(CONSOLE_READCONSOLE_CONTROL, dwCtrlWakeupMask), 8);
    assert_eq!(
        offset_of!(CONSOLE_READCONSOLE_CONTROL, dwControlKeyState),
        12
    );
}

#[test]
fn test_screen_buffer_info_layout() {
    // No dword fields, so the struct packs on 2-byte alignment to 22 bytes.
    assert_eq!(size_of::<CONSOLE_SCREEN_BUFFER_INFO>(), 22);
    assert_eq!(align_of::<CONSOLE_SCREEN_BUFFER_INFO>(), 2);
    assert_eq!(offset_of!(CONSOLE_SCREEN_BUFFER_INFO, dwSize), 0);
    assert_eq!(offset_of!(CONSOLE_SCREEN_BUFFER_INFO, dwCursorPosition), 4);
    assert_eq!(offset_of!(CONSOLE_SCREEN_BUFFER_INFO, wAttributes), 8);
    assert_eq!(offset_of!(CONSOLE_SCREEN_BUFFER_INFO, srWindow), 10);
    assert_eq!(
        offset_of!(CONSOLE_SCREEN_BUFFER_INFO, dwMaximumWindowSize),
        18
    );
}

#[test]
fn test_screen_buffer_infoex_layout() {
    assert_eq!(size_of::<CONSOLE_SCREEN_BUFFER_INFOEX>(), 96);
    assert_eq!(offset_of!(CONSOLE_SCREEN_BUFFER_INFOEX, cbSize), 0);
    assert_eq!(offset_of!(CONSOLE_SCREEN_BUFFER_INFOEX, dwSize), 4);
    assert_eq!(
        offset_of!(CONSOLE_SCREEN_BUFFER_INFOEX, dwCursorPosition),
        8
    );
    assert_eq!(offset_of!(CONSOLE_SCREEN_BUFFER_INFOEX, wAttributes), 12);
    assert_eq!(offset_of!(CONSOLE_SCREEN_BUFFER_INFOEX, srWindow), 14);
    assert_eq!(
        offset_of!(CONSOLE_SCREEN_BUFFER_INFOEX, dwMaximumWindowSize),
        22
    );
    assert_eq!(
        offset_of!(CONSOLE_SCREEN_BUFFER_INFOEX, wPopupAttributes),
        26
    );
    // BOOL realigns to 4 after the popup attribute word.
    assert_eq!(
        offset_of!(CONSOLE_SCREEN_BUFFER_INFOEX, bFullscreenSupported),
        28
    );
    assert_eq!(offset_of!(CONSOLE_SCREEN_BUFFER_INFOEX, ColorTable), 32);
}

#[test]
fn test_selection_info_layout() {
    assert_eq!(size_of::<CONSOLE_SELECTION_INFO>(), 16);
    assert_eq!(offset_of!(CONSOLE_SELECTION_INFO, dwFlags), 0);
    assert_eq!(offset_of!(CONSOLE_SELECTION_INFO, dwSelectionAnchor), 4);
    assert_eq!(offset_of!(CONSOLE_SELECTION_INFO, srSelection), 8);
}

#[test]
fn test_key_event_record_layout() {
    assert_eq!(size_of::<KEY_EVENT_RECORD>(), 16);
    assert_eq!(offset_of!(KEY_EVENT_RECORD, bKeyDown), 0);
    assert_eq!(offset_of!(KEY_EVENT_RECORD, wRepeatCount), 4);
    assert_eq!(offset_of!(KEY_EVENT_RECORD, wVirtualKeyCode), 6);
    assert_eq!(offset_of!(KEY_EVENT_RECORD, wVirtualScanCode), 8);
    assert_eq!(offset_of!(KEY_EVENT_RECORD, UnicodeChar), 10);
    // Control-key state realigns to the next dword boundary.
    assert_eq!(offset_of!(KEY_EVENT_RECORD, dwControlKeyState), 12);
}

#[test]
fn test_mouse_event_record_layout() {
    assert_eq!(size_of::<MOUSE_EVENT_RECORD>(), 16);
    assert_eq!(offset_of!(MOUSE_EVENT_RECORD, dwMousePosition), 0);
    assert_eq!(offset_of!(MOUSE_EVENT_RECORD, dwButtonState), 4);
    assert_eq!(offset_of!(MOUSE_EVENT_RECORD, dwControlKeyState), 8);
    assert_eq!(offset_of!(MOUSE_EVENT_RECORD, dwEventFlags), 12);
}

#[test]
fn test_small_event_records_layout() {
    assert_eq!(size_of::<WINDOW_BUFFER_SIZE_RECORD>(), 4);
    assert_eq!(size_of::<MENU_EVENT_RECORD>(), 4);
    assert_eq!(size_of::<FOCUS_EVENT_RECORD>(), 4);
}

#[test]
fn test_input_record_layout() {
    // WORD tag, padding, then the 16-byte overlapping payload at offset 4.
    assert_eq!(size_of::<INPUT_RECORD>(), 20);
    assert_eq!(size_of::<INPUT_RECORD_EVENT>(), 16);
    assert_eq!(offset_of!(INPUT_RECORD, EventType), 0);
    assert_eq!(offset_of!(INPUT_RECORD, Event), 4);
}

#[test]
fn test_access_rights_values() {
    assert_eq!(GENERIC_WRITE, 0x4000_0000, "generic write access flag");
    assert_eq!(GENERIC_READ, 0x8000_0000, "generic read access flag");
}

#[test]
fn test_std_device_values() {
    // (DWORD)-10, -11, -12 in the headers.
    assert_eq!(STD_INPUT_HANDLE, (-10i32) as u32);
    assert_eq!(STD_OUTPUT_HANDLE, (-11i32) as u32);
    assert_eq!(STD_ERROR_HANDLE, (-12i32) as u32);
}

#[test]
fn test_event_tag_values() {
    assert_eq!(KEY_EVENT, 0x1);
    assert_eq!(MOUSE_EVENT, 0x2);
    assert_eq!(WINDOW_BUFFER_SIZE_EVENT, 0x4);
    assert_eq!(MENU_EVENT, 0x8);
    assert_eq!(FOCUS_EVENT, 0x10);
}

#[test]
fn test_ctrl_event_values() {
    // Note the gap: 3 and 4 are not assigned.
    assert_eq!(CTRL_C_EVENT, 0);
    assert_eq!(CTRL_BREAK_EVENT, 1);
    assert_eq!(CTRL_CLOSE_EVENT, 2);
    assert_eq!(CTRL_LOGOFF_EVENT, 5);
    assert_eq!(CTRL_SHUTDOWN_EVENT, 6);
}

#[test]
fn test_mode_bit_values() {
    assert_eq!(ENABLE_PROCESSED_INPUT, 0x1);
    assert_eq!(ENABLE_VIRTUAL_TERMINAL_INPUT, 0x200);
    assert_eq!(ENABLE_VIRTUAL_TERMINAL_PROCESSING, 0x4);
    assert_eq!(ENABLE_LVB_GRID_WORLDWIDE, 0x10);
}

#[test]
fn test_invalid_handle_value() {
    assert_eq!(INVALID_HANDLE_VALUE, -1);
    assert_eq!(ATTACH_PARENT_PROCESS, u32::MAX);
}
