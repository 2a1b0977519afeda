// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Console lifecycle and process-level state: allocation and attachment,
//! standard handles, code pages, the console window, control events, and
//! the title.
//!
//! Nothing here is cached. The console is shared process-wide state that
//! other attached processes may mutate at any time, so every accessor goes
//! back to the OS.

use core::ptr;

use wincon_ffi as ffi;

use crate::call::{check_bool, check_nonzero, last_error, wide};
use crate::flags::{CtrlEvent, DisplayMode, DisplayModeChange, StandardDevice};
use crate::geom::Coord;
use crate::handle::{InputHandle, OutputHandle, WindowHandle};
use crate::two_call::{query_then_fill, FillOutcome};
use crate::{ConsoleError, Result};

/// Allocate a new console for the calling process.
pub fn alloc() -> Result<()> {
    check_bool("AllocConsole", unsafe { ffi::AllocConsole() })
}

/// Detach the calling process from its console.
pub fn free() -> Result<()> {
    check_bool("FreeConsole", unsafe { ffi::FreeConsole() })
}

/// Attach to the console of another process, or of the parent when `pid`
/// is `None`.
pub fn attach(pid: Option<u32>) -> Result<()> {
    let id = pid.unwrap_or(ffi::ATTACH_PARENT_PROCESS);
    check_bool("AttachConsole", unsafe { ffi::AttachConsole(id) })
}

fn std_handle(device: StandardDevice) -> Result<ffi::HANDLE> {
    // GetStdHandle reports failure as INVALID_HANDLE_VALUE; a null handle
    // means the process has no standard device, which callers also cannot
    // use, so both are rejected.
    let handle = unsafe { ffi::GetStdHandle(device as u32) };
    if handle == ffi::INVALID_HANDLE_VALUE {
        return Err(ConsoleError::Api {
            function: "GetStdHandle",
            code: last_error(),
        });
    }
    Ok(handle)
}

/// The current standard input handle, re-queried from the OS on every call.
pub fn std_input() -> Result<InputHandle> {
    std_handle(StandardDevice::Input).map(InputHandle)
}

/// The current standard output handle, re-queried from the OS on every call.
pub fn std_output() -> Result<OutputHandle> {
    std_handle(StandardDevice::Output).map(OutputHandle)
}

/// The current standard error handle, re-queried from the OS on every call.
pub fn std_error() -> Result<OutputHandle> {
    std_handle(StandardDevice::Error).map(OutputHandle)
}

/// Redirect a standard device to the given handle.
pub fn set_std_handle(device: StandardDevice, handle: ffi::HANDLE) -> Result<()> {
    check_bool("SetStdHandle", unsafe {
        ffi::SetStdHandle(device as u32, handle)
    })
}

/// Window handle of the attached console; null when there is none.
pub fn window() -> WindowHandle {
    WindowHandle(unsafe { ffi::GetConsoleWindow() })
}

/// Input code page of the attached console.
pub fn input_code_page() -> Result<u32> {
    check_nonzero("GetConsoleCP", unsafe { ffi::GetConsoleCP() })
}

pub fn set_input_code_page(code_page: u32) -> Result<()> {
    check_bool("SetConsoleCP", unsafe { ffi::SetConsoleCP(code_page) })
}

/// Output code page of the attached console.
pub fn output_code_page() -> Result<u32> {
    check_nonzero("GetConsoleOutputCP", unsafe { ffi::GetConsoleOutputCP() })
}

pub fn set_output_code_page(code_page: u32) -> Result<()> {
    check_bool("SetConsoleOutputCP", unsafe {
        ffi::SetConsoleOutputCP(code_page)
    })
}

/// Send a ctrl signal to a process group sharing this console. Group 0
/// signals every process attached to the console.
pub fn generate_ctrl_event(event: CtrlEvent, process_group: u32) -> Result<()> {
    check_bool("GenerateConsoleCtrlEvent", unsafe {
        ffi::GenerateConsoleCtrlEvent(event as u32, process_group)
    })
}

/// Install or remove a control-event handler.
///
/// The routine must stay valid for as long as it is installed — with a
/// plain `extern "system" fn` that holds by construction. Passing `None`
/// with `add` toggles the default Ctrl+C ignore behavior instead.
pub fn set_ctrl_handler(handler: ffi::PHANDLER_ROUTINE, add: bool) -> Result<()> {
    check_bool("SetConsoleCtrlHandler", unsafe {
        ffi::SetConsoleCtrlHandler(handler, add.into())
    })
}

/// Current display mode of the attached console.
pub fn display_mode() -> Result<DisplayMode> {
    let mut raw: u32 = 0;
    check_bool("GetConsoleDisplayMode", unsafe {
        ffi::GetConsoleDisplayMode(&mut raw)
    })?;
    Ok(DisplayMode::from_bits_retain(raw))
}

/// Switch the display mode; returns the new screen-buffer dimensions.
pub fn set_display_mode(output: OutputHandle, change: DisplayModeChange) -> Result<Coord> {
    let mut dims = ffi::COORD::default();
    check_bool("SetConsoleDisplayMode", unsafe {
        ffi::SetConsoleDisplayMode(output.0, change as u32, &mut dims)
    })?;
    Ok(dims.into())
}

/// Identifiers of every process attached to this console.
///
/// The count function and the fill share one entry point; a list that
/// grows between the sizing call and the copy is reported as
/// [`ConsoleError::BufferGrew`].
pub fn process_list() -> Result<Vec<u32>> {
    // The calling process is always attached, so one slot is the floor.
    let mut buf = vec![0u32; 16];
    let count =
        unsafe { ffi::GetConsoleProcessList(buf.as_mut_ptr(), buf.len() as u32) } as usize;
    if count == 0 {
        return Err(ConsoleError::Api {
            function: "GetConsoleProcessList",
            code: last_error(),
        });
    }
    if count <= buf.len() {
        buf.truncate(count);
        return Ok(buf);
    }

    // Undersized: size exactly and try once more.
    let required = count;
    buf.resize(required, 0);
    let count =
        unsafe { ffi::GetConsoleProcessList(buf.as_mut_ptr(), buf.len() as u32) } as usize;
    if count == 0 {
        return Err(ConsoleError::Api {
            function: "GetConsoleProcessList",
            code: last_error(),
        });
    }
    if count > required {
        return Err(ConsoleError::BufferGrew {
            first: required,
            second: count,
        });
    }
    buf.truncate(count);
    Ok(buf)
}

/// Raw title query: fills `buf` and returns the character count the OS
/// reports. A zero-length destination yields the required length without
/// being written.
pub fn title_raw(buf: &mut [u16]) -> Result<usize> {
    let ret = unsafe { ffi::GetConsoleTitleW(buf.as_mut_ptr(), buf.len() as u32) };
    if ret == 0 {
        let code = last_error();
        if code != ffi::ERROR_SUCCESS {
            return Err(ConsoleError::Api {
                function: "GetConsoleTitleW",
                code,
            });
        }
    }
    Ok(ret as usize)
}

/// Raw original-title query, same contract as [`title_raw`].
pub fn original_title_raw(buf: &mut [u16]) -> Result<usize> {
    let ret = unsafe { ffi::GetConsoleOriginalTitleW(buf.as_mut_ptr(), buf.len() as u32) };
    if ret == 0 {
        let code = last_error();
        if code != ffi::ERROR_SUCCESS {
            return Err(ConsoleError::Api {
                function: "GetConsoleOriginalTitleW",
                code,
            });
        }
    }
    Ok(ret as usize)
}

/// Title of the attached console, via both halves of the two-call idiom.
pub fn title() -> Result<String> {
    fetch_title("GetConsoleTitleW", |buf, len| unsafe {
        ffi::GetConsoleTitleW(buf, len)
    })
}

/// Title the console was created with, before any `set_title`.
pub fn original_title() -> Result<String> {
    fetch_title("GetConsoleOriginalTitleW", |buf, len| unsafe {
        ffi::GetConsoleOriginalTitleW(buf, len)
    })
}

fn fetch_title(
    function: &'static str,
    raw_call: impl Fn(*mut u16, u32) -> u32,
) -> Result<String> {
    let units = query_then_fill(
        || {
            let required = raw_call(ptr::null_mut(), 0) as usize;
            if required == 0 {
                let code = last_error();
                if code != ffi::ERROR_SUCCESS {
                    return Err(ConsoleError::Api { function, code });
                }
            }
            // One extra unit for the terminator the fill call appends.
            Ok(if required == 0 { 0 } else { required + 1 })
        },
        |buf| {
            let ret = raw_call(buf.as_mut_ptr(), buf.len() as u32) as usize;
            if ret == 0 {
                let code = last_error();
                if code != ffi::ERROR_SUCCESS {
                    return Err(ConsoleError::Api { function, code });
                }
            }
            if ret >= buf.len() {
                // The OS is reporting a requirement beyond our allocation:
                // the title grew between the calls.
                Ok(FillOutcome::NeedsCapacity(ret))
            } else {
                Ok(FillOutcome::Filled(ret))
            }
        },
    )?;
    Ok(String::from_utf16_lossy(&units))
}

/// Set the title of the attached console.
pub fn set_title(title: &str) -> Result<()> {
    let wide_title = wide(title);
    check_bool("SetConsoleTitleW", unsafe {
        ffi::SetConsoleTitleW(wide_title.as_ptr())
    })
}
