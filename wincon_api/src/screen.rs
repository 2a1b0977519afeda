// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Screen-buffer wrappers: creation and activation, geometry, cursor,
//! fonts, and selection state.

use core::mem::{self, size_of};

use wincon_ffi as ffi;

use crate::call::{check_bool, check_handle};
use crate::flags::{AccessRights, ScreenBufferFlags, ShareMode};
use crate::geom::{Coord, Rect};
use crate::handle::OutputHandle;
use crate::info::{
    CursorInfo, FontInfo, FontInfoEx, ScreenBufferInfo, ScreenBufferInfoEx, SelectionInfo,
};
use crate::Result;

/// Create a new screen buffer. The caller owns the returned handle and
/// must release it with [`close`] exactly once.
pub fn create(
    access: AccessRights,
    share: ShareMode,
    flags: ScreenBufferFlags,
) -> Result<OutputHandle> {
    // Security attributes and buffer data are reserved null per the OS
    // contract for text-mode buffers.
    let handle = check_handle("CreateConsoleScreenBuffer", unsafe {
        ffi::CreateConsoleScreenBuffer(
            access.bits(),
            share.bits(),
            core::ptr::null(),
            flags.bits(),
            core::ptr::null_mut(),
        )
    })?;
    Ok(OutputHandle(handle))
}

/// Make `handle` the buffer the console displays.
pub fn set_active(handle: OutputHandle) -> Result<()> {
    check_bool("SetConsoleActiveScreenBuffer", unsafe {
        ffi::SetConsoleActiveScreenBuffer(handle.0)
    })
}

/// Release a screen buffer created with [`create`]. Must not be called on
/// the standard handles — the OS owns those.
pub fn close(handle: OutputHandle) -> Result<()> {
    check_bool("CloseHandle", unsafe { ffi::CloseHandle(handle.0) })
}

/// Size, cursor, attributes, and window of a screen buffer.
pub fn info(handle: OutputHandle) -> Result<ScreenBufferInfo> {
    let mut raw: ffi::CONSOLE_SCREEN_BUFFER_INFO = unsafe { mem::zeroed() };
    check_bool("GetConsoleScreenBufferInfo", unsafe {
        ffi::GetConsoleScreenBufferInfo(handle.0, &mut raw)
    })?;
    Ok(raw.into())
}

/// Extended info including popup attributes and the color table.
pub fn info_ex(handle: OutputHandle) -> Result<ScreenBufferInfoEx> {
    let mut raw: ffi::CONSOLE_SCREEN_BUFFER_INFOEX = unsafe { mem::zeroed() };
    // The OS validates the structure revision before filling it.
    raw.cbSize = size_of::<ffi::CONSOLE_SCREEN_BUFFER_INFOEX>() as u32;
    check_bool("GetConsoleScreenBufferInfoEx", unsafe {
        ffi::GetConsoleScreenBufferInfoEx(handle.0, &mut raw)
    })?;
    Ok(raw.into())
}

pub fn set_info_ex(handle: OutputHandle, info: ScreenBufferInfoEx) -> Result<()> {
    let raw = info.to_raw();
    check_bool("SetConsoleScreenBufferInfoEx", unsafe {
        ffi::SetConsoleScreenBufferInfoEx(handle.0, &raw)
    })
}

/// Resize the buffer. Both dimensions must cover the current window.
pub fn set_size(handle: OutputHandle, size: Coord) -> Result<()> {
    check_bool("SetConsoleScreenBufferSize", unsafe {
        ffi::SetConsoleScreenBufferSize(handle.0, size.into())
    })
}

/// Move or resize the visible window within the buffer. With `absolute`
/// false the rectangle is a delta against the current window.
pub fn set_window_info(handle: OutputHandle, absolute: bool, window: Rect) -> Result<()> {
    let raw: ffi::SMALL_RECT = window.into();
    check_bool("SetConsoleWindowInfo", unsafe {
        ffi::SetConsoleWindowInfo(handle.0, absolute.into(), &raw)
    })
}

/// Largest window the current font and display allow. Direct-value entry
/// point: the OS reports failure as a zero size, not through last-error.
pub fn largest_window_size(handle: OutputHandle) -> Coord {
    unsafe { ffi::GetLargestConsoleWindowSize(handle.0) }.into()
}

pub fn cursor_info(handle: OutputHandle) -> Result<CursorInfo> {
    let mut raw: ffi::CONSOLE_CURSOR_INFO = unsafe { mem::zeroed() };
    check_bool("GetConsoleCursorInfo", unsafe {
        ffi::GetConsoleCursorInfo(handle.0, &mut raw)
    })?;
    Ok(raw.into())
}

pub fn set_cursor_info(handle: OutputHandle, info: CursorInfo) -> Result<()> {
    let raw = info.to_raw();
    check_bool("SetConsoleCursorInfo", unsafe {
        ffi::SetConsoleCursorInfo(handle.0, &raw)
    })
}

pub fn set_cursor_position(handle: OutputHandle, position: Coord) -> Result<()> {
    check_bool("SetConsoleCursorPosition", unsafe {
        ffi::SetConsoleCursorPosition(handle.0, position.into())
    })
}

/// Index and cell size of the current font. With `maximum_window` the size
/// is reported for a maximized window.
pub fn current_font(handle: OutputHandle, maximum_window: bool) -> Result<FontInfo> {
    let mut raw: ffi::CONSOLE_FONT_INFO = unsafe { mem::zeroed() };
    check_bool("GetCurrentConsoleFont", unsafe {
        ffi::GetCurrentConsoleFont(handle.0, maximum_window.into(), &mut raw)
    })?;
    Ok(raw.into())
}

pub fn current_font_ex(handle: OutputHandle, maximum_window: bool) -> Result<FontInfoEx> {
    let mut raw: ffi::CONSOLE_FONT_INFOEX = unsafe { mem::zeroed() };
    raw.cbSize = size_of::<ffi::CONSOLE_FONT_INFOEX>() as u32;
    check_bool("GetCurrentConsoleFontEx", unsafe {
        ffi::GetCurrentConsoleFontEx(handle.0, maximum_window.into(), &mut raw)
    })?;
    Ok(raw.into())
}

pub fn set_font_ex(handle: OutputHandle, maximum_window: bool, font: FontInfoEx) -> Result<()> {
    let raw = font.to_raw();
    check_bool("SetCurrentConsoleFontEx", unsafe {
        ffi::SetCurrentConsoleFontEx(handle.0, maximum_window.into(), &raw)
    })
}

/// Cell size of the font at `index` in the console's font table. Direct
/// value; a zero size means the index was out of range.
pub fn font_size(handle: OutputHandle, index: u32) -> Coord {
    unsafe { ffi::GetConsoleFontSize(handle.0, index) }.into()
}

/// Current mouse-selection state of the attached console.
pub fn selection_info() -> Result<SelectionInfo> {
    let mut raw: ffi::CONSOLE_SELECTION_INFO = unsafe { mem::zeroed() };
    check_bool("GetConsoleSelectionInfo", unsafe {
        ffi::GetConsoleSelectionInfo(&mut raw)
    })?;
    Ok(raw.into())
}
