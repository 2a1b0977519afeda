// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Output-side wrappers: text writes, cell runs, attributes, scrolling.
//!
//! Cell-run functions address the screen buffer by coordinate and length;
//! runs wrap at the end of a row and continue on the next. The buffer-size
//! parameter handed to the OS always equals the allocation made here.

use core::ptr;

use wincon_ffi as ffi;

use crate::call::check_bool;
use crate::flags::{CharacterAttributes, OutputMode};
use crate::geom::{Coord, Rect};
use crate::handle::OutputHandle;
use crate::info::CharInfo;
use crate::Result;

/// Current mode bits of a screen-buffer handle.
pub fn mode(handle: OutputHandle) -> Result<OutputMode> {
    let mut raw: u32 = 0;
    check_bool("GetConsoleMode", unsafe {
        ffi::GetConsoleMode(handle.0, &mut raw)
    })?;
    Ok(OutputMode::from_bits_retain(raw))
}

pub fn set_mode(handle: OutputHandle, mode: OutputMode) -> Result<()> {
    check_bool("SetConsoleMode", unsafe {
        ffi::SetConsoleMode(handle.0, mode.bits())
    })
}

/// Write text at the cursor; returns the number of UTF-16 units written.
pub fn write_text(handle: OutputHandle, text: &str) -> Result<usize> {
    let units: Vec<u16> = text.encode_utf16().collect();
    if units.is_empty() {
        return Ok(0);
    }
    let mut written: u32 = 0;
    check_bool("WriteConsoleW", unsafe {
        ffi::WriteConsoleW(
            handle.0,
            units.as_ptr().cast(),
            units.len() as u32,
            &mut written,
            ptr::null_mut(),
        )
    })?;
    Ok(written as usize)
}

/// Repeat one attribute over `count` cells starting at `start`.
pub fn fill_attribute(
    handle: OutputHandle,
    attribute: CharacterAttributes,
    count: u32,
    start: Coord,
) -> Result<usize> {
    let mut written: u32 = 0;
    check_bool("FillConsoleOutputAttribute", unsafe {
        ffi::FillConsoleOutputAttribute(handle.0, attribute.bits(), count, start.into(), &mut written)
    })?;
    Ok(written as usize)
}

/// Repeat one UTF-16 unit over `count` cells starting at `start`.
pub fn fill_char(handle: OutputHandle, unit: u16, count: u32, start: Coord) -> Result<usize> {
    let mut written: u32 = 0;
    check_bool("FillConsoleOutputCharacterW", unsafe {
        ffi::FillConsoleOutputCharacterW(handle.0, unit, count, start.into(), &mut written)
    })?;
    Ok(written as usize)
}

/// Read `count` cell attributes starting at `start`.
pub fn read_attributes(
    handle: OutputHandle,
    count: usize,
    start: Coord,
) -> Result<Vec<CharacterAttributes>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let mut buf = vec![0u16; count];
    let mut read: u32 = 0;
    check_bool("ReadConsoleOutputAttribute", unsafe {
        ffi::ReadConsoleOutputAttribute(
            handle.0,
            buf.as_mut_ptr(),
            count as u32,
            start.into(),
            &mut read,
        )
    })?;
    Ok(buf[..read as usize]
        .iter()
        .map(|&bits| CharacterAttributes::from_bits_retain(bits))
        .collect())
}

/// Read `count` cell characters starting at `start`.
pub fn read_chars(handle: OutputHandle, count: usize, start: Coord) -> Result<String> {
    if count == 0 {
        return Ok(String::new());
    }
    let mut buf = vec![0u16; count];
    let mut read: u32 = 0;
    check_bool("ReadConsoleOutputCharacterW", unsafe {
        ffi::ReadConsoleOutputCharacterW(
            handle.0,
            buf.as_mut_ptr(),
            count as u32,
            start.into(),
            &mut read,
        )
    })?;
    Ok(String::from_utf16_lossy(&buf[..read as usize]))
}

/// Write a run of attributes starting at `start`, leaving characters alone.
pub fn write_attributes(
    handle: OutputHandle,
    attributes: &[CharacterAttributes],
    start: Coord,
) -> Result<usize> {
    if attributes.is_empty() {
        return Ok(0);
    }
    let raw: Vec<u16> = attributes.iter().map(|a| a.bits()).collect();
    let mut written: u32 = 0;
    check_bool("WriteConsoleOutputAttribute", unsafe {
        ffi::WriteConsoleOutputAttribute(
            handle.0,
            raw.as_ptr(),
            raw.len() as u32,
            start.into(),
            &mut written,
        )
    })?;
    Ok(written as usize)
}

/// Write a run of characters starting at `start`, leaving attributes alone.
pub fn write_chars(handle: OutputHandle, text: &str, start: Coord) -> Result<usize> {
    let units: Vec<u16> = text.encode_utf16().collect();
    if units.is_empty() {
        return Ok(0);
    }
    let mut written: u32 = 0;
    check_bool("WriteConsoleOutputCharacterW", unsafe {
        ffi::WriteConsoleOutputCharacterW(
            handle.0,
            units.as_ptr(),
            units.len() as u32,
            start.into(),
            &mut written,
        )
    })?;
    Ok(written as usize)
}

/// Attribute applied to text written after this call.
pub fn set_text_attribute(handle: OutputHandle, attributes: CharacterAttributes) -> Result<()> {
    check_bool("SetConsoleTextAttribute", unsafe {
        ffi::SetConsoleTextAttribute(handle.0, attributes.bits())
    })
}

/// Move a block of cells; vacated cells are filled with `fill`. An optional
/// clip rectangle bounds both the source and the destination.
pub fn scroll(
    handle: OutputHandle,
    scroll_rect: Rect,
    clip_rect: Option<Rect>,
    destination: Coord,
    fill: CharInfo,
) -> Result<()> {
    let scroll_raw: ffi::SMALL_RECT = scroll_rect.into();
    let clip_raw = clip_rect.map(ffi::SMALL_RECT::from);
    let clip_ptr = clip_raw
        .as_ref()
        .map_or(ptr::null(), |r| r as *const ffi::SMALL_RECT);
    let fill_raw = fill.to_raw();
    check_bool("ScrollConsoleScreenBufferW", unsafe {
        ffi::ScrollConsoleScreenBufferW(
            handle.0,
            &scroll_raw,
            clip_ptr,
            destination.into(),
            &fill_raw,
        )
    })
}
