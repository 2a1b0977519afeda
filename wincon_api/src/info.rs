// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Typed mirrors of the console information records.
//!
//! Conversions to and from the raw records are lossless. Records that carry
//! a `cbSize` field get it stamped in `to_raw`, matching the OS requirement
//! that the caller declare the structure revision before the call.

use core::mem::size_of;

use wincon_ffi::{
    CHAR_INFO, CONSOLE_CURSOR_INFO, CONSOLE_FONT_INFO, CONSOLE_FONT_INFOEX, CONSOLE_HISTORY_INFO,
    CONSOLE_READCONSOLE_CONTROL, CONSOLE_SCREEN_BUFFER_INFO, CONSOLE_SCREEN_BUFFER_INFOEX,
    CONSOLE_SELECTION_INFO, LF_FACESIZE,
};

use crate::flags::{CharacterAttributes, ControlKeyState, HistoryFlags, SelectionFlags};
use crate::geom::{Coord, Rect};

/// One character cell for fills and scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    pub unicode_char: u16,
    pub attributes: CharacterAttributes,
}

impl CharInfo {
    pub fn new(unicode_char: u16, attributes: CharacterAttributes) -> Self {
        Self {
            unicode_char,
            attributes,
        }
    }

    pub fn to_raw(self) -> CHAR_INFO {
        CHAR_INFO {
            UnicodeChar: self.unicode_char,
            Attributes: self.attributes.bits(),
        }
    }
}

impl From<CHAR_INFO> for CharInfo {
    fn from(raw: CHAR_INFO) -> Self {
        Self {
            unicode_char: raw.UnicodeChar,
            attributes: CharacterAttributes::from_bits_retain(raw.Attributes),
        }
    }
}

/// Cursor shape and visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorInfo {
    /// Percentage (1-100) of the cell the cursor fills.
    pub size: u32,
    pub visible: bool,
}

impl CursorInfo {
    pub fn to_raw(self) -> CONSOLE_CURSOR_INFO {
        CONSOLE_CURSOR_INFO {
            dwSize: self.size,
            bVisible: self.visible.into(),
        }
    }
}

impl From<CONSOLE_CURSOR_INFO> for CursorInfo {
    fn from(raw: CONSOLE_CURSOR_INFO) -> Self {
        Self {
            size: raw.dwSize,
            visible: raw.bVisible != 0,
        }
    }
}

/// Basic screen-buffer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBufferInfo {
    pub size: Coord,
    pub cursor_position: Coord,
    pub attributes: CharacterAttributes,
    /// Visible window, in buffer coordinates.
    pub window: Rect,
    pub maximum_window_size: Coord,
}

impl From<CONSOLE_SCREEN_BUFFER_INFO> for ScreenBufferInfo {
    fn from(raw: CONSOLE_SCREEN_BUFFER_INFO) -> Self {
        Self {
            size: raw.dwSize.into(),
            cursor_position: raw.dwCursorPosition.into(),
            attributes: CharacterAttributes::from_bits_retain(raw.wAttributes),
            window: raw.srWindow.into(),
            maximum_window_size: raw.dwMaximumWindowSize.into(),
        }
    }
}

/// Extended screen-buffer state, including the 16-entry color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBufferInfoEx {
    pub size: Coord,
    pub cursor_position: Coord,
    pub attributes: CharacterAttributes,
    pub window: Rect,
    pub maximum_window_size: Coord,
    pub popup_attributes: CharacterAttributes,
    pub fullscreen_supported: bool,
    /// Palette entries packed `0x00BBGGRR`.
    pub color_table: [u32; 16],
}

impl ScreenBufferInfoEx {
    pub fn to_raw(self) -> CONSOLE_SCREEN_BUFFER_INFOEX {
        CONSOLE_SCREEN_BUFFER_INFOEX {
            cbSize: size_of::<CONSOLE_SCREEN_BUFFER_INFOEX>() as u32,
            dwSize: self.size.into(),
            dwCursorPosition: self.cursor_position.into(),
            wAttributes: self.attributes.bits(),
            srWindow: self.window.into(),
            dwMaximumWindowSize: self.maximum_window_size.into(),
            wPopupAttributes: self.popup_attributes.bits(),
            bFullscreenSupported: self.fullscreen_supported.into(),
            ColorTable: self.color_table,
        }
    }
}

impl From<CONSOLE_SCREEN_BUFFER_INFOEX> for ScreenBufferInfoEx {
    fn from(raw: CONSOLE_SCREEN_BUFFER_INFOEX) -> Self {
        Self {
            size: raw.dwSize.into(),
            cursor_position: raw.dwCursorPosition.into(),
            attributes: CharacterAttributes::from_bits_retain(raw.wAttributes),
            window: raw.srWindow.into(),
            maximum_window_size: raw.dwMaximumWindowSize.into(),
            popup_attributes: CharacterAttributes::from_bits_retain(raw.wPopupAttributes),
            fullscreen_supported: raw.bFullscreenSupported != 0,
            color_table: raw.ColorTable,
        }
    }
}

/// Current font of a screen buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontInfo {
    pub index: u32,
    pub size: Coord,
}

impl From<CONSOLE_FONT_INFO> for FontInfo {
    fn from(raw: CONSOLE_FONT_INFO) -> Self {
        Self {
            index: raw.nFont,
            size: raw.dwFontSize.into(),
        }
    }
}

/// Extended font description. `face_name` is NUL-padded UTF-16.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontInfoEx {
    pub index: u32,
    pub size: Coord,
    pub family: u32,
    pub weight: u32,
    pub face_name: [u16; LF_FACESIZE],
}

impl FontInfoEx {
    pub fn to_raw(self) -> CONSOLE_FONT_INFOEX {
        CONSOLE_FONT_INFOEX {
            cbSize: size_of::<CONSOLE_FONT_INFOEX>() as u32,
            nFont: self.index,
            dwFontSize: self.size.into(),
            FontFamily: self.family,
            FontWeight: self.weight,
            FaceName: self.face_name,
        }
    }

    /// Face name with the NUL padding stripped.
    pub fn face_name_string(&self) -> String {
        let end = self
            .face_name
            .iter()
            .position(|&u| u == 0)
            .unwrap_or(LF_FACESIZE);
        String::from_utf16_lossy(&self.face_name[..end])
    }
}

impl From<CONSOLE_FONT_INFOEX> for FontInfoEx {
    fn from(raw: CONSOLE_FONT_INFOEX) -> Self {
        Self {
            index: raw.nFont,
            size: raw.dwFontSize.into(),
            family: raw.FontFamily,
            weight: raw.FontWeight,
            face_name: raw.FaceName,
        }
    }
}

/// Command-history configuration of the attached console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryInfo {
    pub buffer_size: u32,
    pub buffer_count: u32,
    pub flags: HistoryFlags,
}

impl HistoryInfo {
    pub fn to_raw(self) -> CONSOLE_HISTORY_INFO {
        CONSOLE_HISTORY_INFO {
            cbSize: size_of::<CONSOLE_HISTORY_INFO>() as u32,
            HistoryBufferSize: self.buffer_size,
            NumberOfHistoryBuffers: self.buffer_count,
            dwFlags: self.flags.bits(),
        }
    }
}

impl From<CONSOLE_HISTORY_INFO> for HistoryInfo {
    fn from(raw: CONSOLE_HISTORY_INFO) -> Self {
        Self {
            buffer_size: raw.HistoryBufferSize,
            buffer_count: raw.NumberOfHistoryBuffers,
            flags: HistoryFlags::from_bits_retain(raw.dwFlags),
        }
    }
}

/// Current selection state of the attached console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionInfo {
    pub flags: SelectionFlags,
    pub anchor: Coord,
    pub selection: Rect,
}

impl From<CONSOLE_SELECTION_INFO> for SelectionInfo {
    fn from(raw: CONSOLE_SELECTION_INFO) -> Self {
        Self {
            flags: SelectionFlags::from_bits_retain(raw.dwFlags),
            anchor: raw.dwSelectionAnchor.into(),
            selection: raw.srSelection.into(),
        }
    }
}

/// Cooked-read control block for `ReadConsoleW`: seed characters already in
/// the buffer and a mask of control characters that end the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadControl {
    pub initial_chars: u32,
    pub ctrl_wakeup_mask: u32,
    pub control_keys: ControlKeyState,
}

impl ReadControl {
    pub fn to_raw(self) -> CONSOLE_READCONSOLE_CONTROL {
        CONSOLE_READCONSOLE_CONTROL {
            nLength: size_of::<CONSOLE_READCONSOLE_CONTROL>() as u32,
            nInitialChars: self.initial_chars,
            dwCtrlWakeupMask: self.ctrl_wakeup_mask,
            dwControlKeyState: self.control_keys.bits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cb_size_is_stamped() {
        let raw = ScreenBufferInfoEx {
            size: Coord::new(80, 300),
            cursor_position: Coord::default(),
            attributes: CharacterAttributes::empty(),
            window: Rect::default(),
            maximum_window_size: Coord::new(80, 25),
            popup_attributes: CharacterAttributes::empty(),
            fullscreen_supported: false,
            color_table: [0; 16],
        }
        .to_raw();
        assert_eq!(raw.cbSize, 96);

        assert_eq!(
            HistoryInfo {
                buffer_size: 50,
                buffer_count: 4,
                flags: HistoryFlags::NO_DUP,
            }
            .to_raw()
            .cbSize,
            16
        );

        assert_eq!(ReadControl::default().to_raw().nLength, 16);
    }

    #[test]
    fn test_screen_buffer_info_from_raw() {
        let raw = CONSOLE_SCREEN_BUFFER_INFO {
            dwSize: Coord::new(80, 300).into(),
            dwCursorPosition: Coord::new(0, 12).into(),
            wAttributes: 0x7,
            srWindow: Rect::new(0, 0, 79, 24).into(),
            dwMaximumWindowSize: Coord::new(80, 25).into(),
        };
        let info = ScreenBufferInfo::from(raw);
        assert_eq!(info.size, Coord::new(80, 300));
        assert_eq!(info.window.width(), 80);
        assert!(info.attributes.contains(CharacterAttributes::FOREGROUND_RED));
    }

    #[test]
    fn test_face_name_string_stops_at_nul() {
        let mut name = [0u16; LF_FACESIZE];
        for (dst, src) in name.iter_mut().zip("Consolas".encode_utf16()) {
            *dst = src;
        }
        let font = FontInfoEx {
            index: 0,
            size: Coord::new(8, 16),
            family: 54,
            weight: 400,
            face_name: name,
        };
        assert_eq!(font.face_name_string(), "Consolas");
    }
}
