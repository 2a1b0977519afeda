// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Flag sets and scalar enumerations of the console ABI.
//!
//! Every bit value comes from the corresponding `wincon_ffi` constant, so
//! the numeric contract lives in exactly one place. Decoding from raw uses
//! `from_bits_retain`: the OS is free to report bits newer than this
//! declaration set, and dropping them would falsify round-trips.

use bitflags::bitflags;
use wincon_ffi as ffi;

bitflags! {
    /// Desired access for a new screen buffer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AccessRights: u32 {
        const READ = ffi::GENERIC_READ;
        const WRITE = ffi::GENERIC_WRITE;
    }

    /// Share mode for a new screen buffer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ShareMode: u32 {
        const READ = ffi::FILE_SHARE_READ;
        const WRITE = ffi::FILE_SHARE_WRITE;
    }

    /// Screen-buffer kind. The OS defines exactly one.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ScreenBufferFlags: u32 {
        const TEXTMODE = ffi::CONSOLE_TEXTMODE_BUFFER;
    }

    /// Mode bits of a console input handle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InputMode: u32 {
        const PROCESSED_INPUT = ffi::ENABLE_PROCESSED_INPUT;
        const LINE_INPUT = ffi::ENABLE_LINE_INPUT;
        const ECHO_INPUT = ffi::ENABLE_ECHO_INPUT;
        const WINDOW_INPUT = ffi::ENABLE_WINDOW_INPUT;
        const MOUSE_INPUT = ffi::ENABLE_MOUSE_INPUT;
        const INSERT_MODE = ffi::ENABLE_INSERT_MODE;
        const QUICK_EDIT_MODE = ffi::ENABLE_QUICK_EDIT_MODE;
        const EXTENDED_FLAGS = ffi::ENABLE_EXTENDED_FLAGS;
        const AUTO_POSITION = ffi::ENABLE_AUTO_POSITION;
        const VIRTUAL_TERMINAL_INPUT = ffi::ENABLE_VIRTUAL_TERMINAL_INPUT;
    }

    /// Mode bits of a screen-buffer (output) handle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OutputMode: u32 {
        const PROCESSED_OUTPUT = ffi::ENABLE_PROCESSED_OUTPUT;
        const WRAP_AT_EOL_OUTPUT = ffi::ENABLE_WRAP_AT_EOL_OUTPUT;
        const VIRTUAL_TERMINAL_PROCESSING = ffi::ENABLE_VIRTUAL_TERMINAL_PROCESSING;
        const DISABLE_NEWLINE_AUTO_RETURN = ffi::DISABLE_NEWLINE_AUTO_RETURN;
        const LVB_GRID_WORLDWIDE = ffi::ENABLE_LVB_GRID_WORLDWIDE;
    }

    /// Per-cell color and grid attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CharacterAttributes: u16 {
        const FOREGROUND_BLUE = ffi::FOREGROUND_BLUE;
        const FOREGROUND_GREEN = ffi::FOREGROUND_GREEN;
        const FOREGROUND_RED = ffi::FOREGROUND_RED;
        const FOREGROUND_INTENSITY = ffi::FOREGROUND_INTENSITY;
        const BACKGROUND_BLUE = ffi::BACKGROUND_BLUE;
        const BACKGROUND_GREEN = ffi::BACKGROUND_GREEN;
        const BACKGROUND_RED = ffi::BACKGROUND_RED;
        const BACKGROUND_INTENSITY = ffi::BACKGROUND_INTENSITY;
        const LEADING_BYTE = ffi::COMMON_LVB_LEADING_BYTE;
        const TRAILING_BYTE = ffi::COMMON_LVB_TRAILING_BYTE;
        const GRID_HORIZONTAL = ffi::COMMON_LVB_GRID_HORIZONTAL;
        const GRID_LVERTICAL = ffi::COMMON_LVB_GRID_LVERTICAL;
        const GRID_RVERTICAL = ffi::COMMON_LVB_GRID_RVERTICAL;
        const REVERSE_VIDEO = ffi::COMMON_LVB_REVERSE_VIDEO;
        const UNDERSCORE = ffi::COMMON_LVB_UNDERSCORE;
    }

    /// Modifier and lock-key state delivered with key and mouse events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ControlKeyState: u32 {
        const RIGHT_ALT = ffi::RIGHT_ALT_PRESSED;
        const LEFT_ALT = ffi::LEFT_ALT_PRESSED;
        const RIGHT_CTRL = ffi::RIGHT_CTRL_PRESSED;
        const LEFT_CTRL = ffi::LEFT_CTRL_PRESSED;
        const SHIFT = ffi::SHIFT_PRESSED;
        const NUMLOCK_ON = ffi::NUMLOCK_ON;
        const SCROLLLOCK_ON = ffi::SCROLLLOCK_ON;
        const CAPSLOCK_ON = ffi::CAPSLOCK_ON;
        const ENHANCED_KEY = ffi::ENHANCED_KEY;
    }

    /// Mouse buttons currently pressed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MouseButtons: u32 {
        const LEFT_1ST = ffi::FROM_LEFT_1ST_BUTTON_PRESSED;
        const RIGHTMOST = ffi::RIGHTMOST_BUTTON_PRESSED;
        const LEFT_2ND = ffi::FROM_LEFT_2ND_BUTTON_PRESSED;
        const LEFT_3RD = ffi::FROM_LEFT_3RD_BUTTON_PRESSED;
        const LEFT_4TH = ffi::FROM_LEFT_4TH_BUTTON_PRESSED;
    }

    /// What kind of mouse event was delivered; empty means button press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MouseEventFlags: u32 {
        const MOVED = ffi::MOUSE_MOVED;
        const DOUBLE_CLICK = ffi::DOUBLE_CLICK;
        const WHEELED = ffi::MOUSE_WHEELED;
        const HWHEELED = ffi::MOUSE_HWHEELED;
    }

    /// Selection state of the attached console.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SelectionFlags: u32 {
        const IN_PROGRESS = ffi::CONSOLE_SELECTION_IN_PROGRESS;
        const NOT_EMPTY = ffi::CONSOLE_SELECTION_NOT_EMPTY;
        const MOUSE_SELECTION = ffi::CONSOLE_MOUSE_SELECTION;
        const MOUSE_DOWN = ffi::CONSOLE_MOUSE_DOWN;
    }

    /// Display mode as reported by the OS.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DisplayMode: u32 {
        const FULLSCREEN = ffi::CONSOLE_FULLSCREEN;
        const FULLSCREEN_HARDWARE = ffi::CONSOLE_FULLSCREEN_HARDWARE;
    }

    /// Command-history behavior switches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct HistoryFlags: u32 {
        const NO_DUP = ffi::HISTORY_NO_DUP_FLAG;
    }

    /// Pseudo-console creation switches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PseudoConsoleFlags: u32 {
        const INHERIT_CURSOR = ffi::PSEUDOCONSOLE_INHERIT_CURSOR;
    }
}

/// Standard device index for the std-handle entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum StandardDevice {
    Input = 0xFFFF_FFF6,
    Output = 0xFFFF_FFF5,
    Error = 0xFFFF_FFF4,
}

/// Control signal delivered to handler routines and to
/// `GenerateConsoleCtrlEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CtrlEvent {
    CtrlC = 0,
    CtrlBreak = 1,
    Close = 2,
    Logoff = 5,
    Shutdown = 6,
}

impl CtrlEvent {
    /// Decode the raw signal number; values 3 and 4 are unassigned.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::CtrlC),
            1 => Some(Self::CtrlBreak),
            2 => Some(Self::Close),
            5 => Some(Self::Logoff),
            6 => Some(Self::Shutdown),
            _ => None,
        }
    }
}

/// Display mode request for `SetConsoleDisplayMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DisplayModeChange {
    Fullscreen = 1,
    Windowed = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_rights_values() {
        assert_eq!(AccessRights::WRITE.bits(), 0x4000_0000);
        assert_eq!(AccessRights::READ.bits(), 0x8000_0000);
        assert_eq!(
            (AccessRights::READ | AccessRights::WRITE).bits(),
            0xC000_0000
        );
    }

    #[test]
    fn test_input_mode_ops() {
        let cooked = InputMode::PROCESSED_INPUT | InputMode::LINE_INPUT | InputMode::ECHO_INPUT;
        assert_eq!(cooked.bits(), 0x7);
        assert!(cooked.contains(InputMode::LINE_INPUT));

        let raw = cooked & !InputMode::LINE_INPUT;
        assert!(!raw.contains(InputMode::LINE_INPUT));
        assert!(raw.contains(InputMode::PROCESSED_INPUT));
    }

    #[test]
    fn test_output_mode_values() {
        assert_eq!(OutputMode::VIRTUAL_TERMINAL_PROCESSING.bits(), 0x4);
        assert_eq!(OutputMode::LVB_GRID_WORLDWIDE.bits(), 0x10);
    }

    #[test]
    fn test_unknown_bits_retained() {
        // A future OS may report bits this declaration set predates.
        let mode = InputMode::from_bits_retain(0x8000_0001);
        assert!(mode.contains(InputMode::PROCESSED_INPUT));
        assert_eq!(mode.bits(), 0x8000_0001);
    }

    #[test]
    fn test_character_attribute_values() {
        assert_eq!(CharacterAttributes::FOREGROUND_BLUE.bits(), 0x1);
        assert_eq!(CharacterAttributes::UNDERSCORE.bits(), 0x8000);
        let white = CharacterAttributes::FOREGROUND_RED
            | CharacterAttributes::FOREGROUND_GREEN
            | CharacterAttributes::FOREGROUND_BLUE;
        assert_eq!(white.bits(), 0x7);
    }

    #[test]
    fn test_standard_device_matches_ffi() {
        assert_eq!(StandardDevice::Input as u32, wincon_ffi::STD_INPUT_HANDLE);
        assert_eq!(StandardDevice::Output as u32, wincon_ffi::STD_OUTPUT_HANDLE);
        assert_eq!(StandardDevice::Error as u32, wincon_ffi::STD_ERROR_HANDLE);
    }

    #[test]
    fn test_ctrl_event_decode() {
        assert_eq!(CtrlEvent::from_raw(0), Some(CtrlEvent::CtrlC));
        assert_eq!(CtrlEvent::from_raw(6), Some(CtrlEvent::Shutdown));
        assert_eq!(CtrlEvent::from_raw(3), None);
        assert_eq!(CtrlEvent::from_raw(4), None);
        assert_eq!(CtrlEvent::from_raw(7), None);
    }

    #[test]
    fn test_ctrl_event_matches_ffi() {
        assert_eq!(CtrlEvent::Shutdown as u32, wincon_ffi::CTRL_SHUTDOWN_EVENT);
        assert_eq!(CtrlEvent::Logoff as u32, wincon_ffi::CTRL_LOGOFF_EVENT);
    }
}
