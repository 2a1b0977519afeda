// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Input-side wrappers: modes, cooked reads, and the event queue.

use core::mem;
use core::ptr;

use wincon_ffi as ffi;

use crate::call::check_bool;
use crate::event::InputEvent;
use crate::flags::InputMode;
use crate::handle::InputHandle;
use crate::info::ReadControl;
use crate::Result;

/// Current mode bits of an input handle.
pub fn mode(handle: InputHandle) -> Result<InputMode> {
    let mut raw: u32 = 0;
    check_bool("GetConsoleMode", unsafe {
        ffi::GetConsoleMode(handle.0, &mut raw)
    })?;
    Ok(InputMode::from_bits_retain(raw))
}

pub fn set_mode(handle: InputHandle, mode: InputMode) -> Result<()> {
    check_bool("SetConsoleMode", unsafe {
        ffi::SetConsoleMode(handle.0, mode.bits())
    })
}

/// Cooked read of up to `max_chars` UTF-16 units, honoring the handle's
/// line/echo mode. The optional control block seeds the buffer and names
/// the control characters that end the read.
pub fn read_text(
    handle: InputHandle,
    max_chars: usize,
    control: Option<ReadControl>,
) -> Result<String> {
    if max_chars == 0 {
        return Ok(String::new());
    }
    let mut buf = vec![0u16; max_chars];
    let mut read: u32 = 0;
    let raw_control = control.map(ReadControl::to_raw);
    let control_ptr = raw_control
        .as_ref()
        .map_or(ptr::null(), |c| c as *const ffi::CONSOLE_READCONSOLE_CONTROL);
    check_bool("ReadConsoleW", unsafe {
        ffi::ReadConsoleW(
            handle.0,
            buf.as_mut_ptr().cast(),
            max_chars as u32,
            &mut read,
            control_ptr,
        )
    })?;
    Ok(String::from_utf16_lossy(&buf[..read as usize]))
}

/// Remove and decode up to `max_events` events from the input queue.
/// Blocks until at least one event is available.
pub fn read_events(handle: InputHandle, max_events: usize) -> Result<Vec<InputEvent>> {
    fetch_events(handle, max_events, "ReadConsoleInputW", |h, buf, len, n| unsafe {
        ffi::ReadConsoleInputW(h, buf, len, n)
    })
}

/// Decode up to `max_events` events without removing them from the queue.
pub fn peek_events(handle: InputHandle, max_events: usize) -> Result<Vec<InputEvent>> {
    fetch_events(handle, max_events, "PeekConsoleInputW", |h, buf, len, n| unsafe {
        ffi::PeekConsoleInputW(h, buf, len, n)
    })
}

fn fetch_events(
    handle: InputHandle,
    max_events: usize,
    function: &'static str,
    raw_call: impl Fn(ffi::HANDLE, *mut ffi::INPUT_RECORD, u32, *mut u32) -> ffi::BOOL,
) -> Result<Vec<InputEvent>> {
    if max_events == 0 {
        return Ok(Vec::new());
    }
    // Zeroed records are safe to hand to the OS as an output buffer; only
    // the leading `read` entries come back meaningful.
    let mut records: Vec<ffi::INPUT_RECORD> = vec![unsafe { mem::zeroed() }; max_events];
    let mut read: u32 = 0;
    check_bool(
        function,
        raw_call(handle.0, records.as_mut_ptr(), max_events as u32, &mut read),
    )?;
    records[..read as usize]
        .iter()
        .map(InputEvent::decode)
        .collect()
}

/// Inject events into the input queue; returns how many were written.
pub fn write_events(handle: InputHandle, events: &[InputEvent]) -> Result<usize> {
    if events.is_empty() {
        return Ok(0);
    }
    let records: Vec<ffi::INPUT_RECORD> = events.iter().map(InputEvent::encode).collect();
    let mut written: u32 = 0;
    check_bool("WriteConsoleInputW", unsafe {
        ffi::WriteConsoleInputW(
            handle.0,
            records.as_ptr(),
            records.len() as u32,
            &mut written,
        )
    })?;
    Ok(written as usize)
}

/// Discard everything in the input queue.
pub fn flush(handle: InputHandle) -> Result<()> {
    check_bool("FlushConsoleInputBuffer", unsafe {
        ffi::FlushConsoleInputBuffer(handle.0)
    })
}

/// Number of unread events in the input queue.
pub fn pending_events(handle: InputHandle) -> Result<usize> {
    let mut count: u32 = 0;
    check_bool("GetNumberOfConsoleInputEvents", unsafe {
        ffi::GetNumberOfConsoleInputEvents(handle.0, &mut count)
    })?;
    Ok(count as usize)
}

/// Number of buttons on the console's mouse.
pub fn mouse_button_count() -> Result<u32> {
    let mut count: u32 = 0;
    check_bool("GetNumberOfConsoleMouseButtons", unsafe {
        ffi::GetNumberOfConsoleMouseButtons(&mut count)
    })?;
    Ok(count)
}
