// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Command history and alias wrappers.
//!
//! The listing functions are the canonical two-call surface: a length
//! entry point reporting a byte requirement, then a fill over a
//! caller-allocated buffer. Both halves are exposed raw; the combined
//! wrappers allocate, fill, and split, reporting growth between the calls
//! instead of truncating. History and alias state is keyed by executable
//! name, matching the OS model of per-program history buffers.

use wincon_ffi as ffi;

use crate::call::{check_bool, last_error, wide};
use crate::info::HistoryInfo;
use crate::two_call::{query_then_fill, split_nul_delimited, FillOutcome};
use crate::{ConsoleError, Result};

/// History configuration of the attached console.
pub fn info() -> Result<HistoryInfo> {
    let mut raw: ffi::CONSOLE_HISTORY_INFO = unsafe { core::mem::zeroed() };
    raw.cbSize = core::mem::size_of::<ffi::CONSOLE_HISTORY_INFO>() as u32;
    check_bool("GetConsoleHistoryInfo", unsafe {
        ffi::GetConsoleHistoryInfo(&mut raw)
    })?;
    Ok(raw.into())
}

pub fn set_info(info: HistoryInfo) -> Result<()> {
    let raw = info.to_raw();
    check_bool("SetConsoleHistoryInfo", unsafe {
        ffi::SetConsoleHistoryInfo(&raw)
    })
}

/// Cap the number of history entries kept for `exe_name`.
pub fn set_command_count(count: u32, exe_name: &str) -> Result<()> {
    let exe = wide(exe_name);
    check_bool("SetConsoleNumberOfCommandsW", unsafe {
        ffi::SetConsoleNumberOfCommandsW(count, exe.as_ptr())
    })
}

/// Drop every stored history entry for `exe_name`. The entry point has no
/// failure channel.
pub fn expunge(exe_name: &str) {
    let exe = wide(exe_name);
    unsafe { ffi::ExpungeConsoleCommandHistoryW(exe.as_ptr()) };
}

/// Byte length required to hold the history listing for `exe_name`.
pub fn commands_length(exe_name: &str) -> usize {
    let exe = wide(exe_name);
    unsafe { ffi::GetConsoleCommandHistoryLengthW(exe.as_ptr()) as usize }
}

/// Raw fill half of the history listing; returns the bytes copied.
pub fn commands_raw(buf: &mut [u16], exe_name: &str) -> Result<usize> {
    let exe = wide(exe_name);
    let copied = unsafe {
        ffi::GetConsoleCommandHistoryW(
            buf.as_mut_ptr(),
            (buf.len() * 2) as u32,
            exe.as_ptr(),
        )
    };
    if copied == 0 && !buf.is_empty() {
        let code = last_error();
        if code != ffi::ERROR_SUCCESS {
            return Err(ConsoleError::Api {
                function: "GetConsoleCommandHistoryW",
                code,
            });
        }
    }
    Ok(copied as usize)
}

/// Stored history entries for `exe_name`, oldest first.
pub fn commands(exe_name: &str) -> Result<Vec<String>> {
    let units = query_then_fill(
        || Ok(commands_length(exe_name) / 2),
        |buf| {
            let copied_bytes = commands_raw(buf, exe_name)?;
            let units_now = copied_bytes / 2;
            if units_now > buf.len() {
                Ok(FillOutcome::NeedsCapacity(units_now))
            } else {
                Ok(FillOutcome::Filled(units_now))
            }
        },
    )?;
    Ok(split_nul_delimited(&units))
}

/// Define (or with `target` `None`, delete) an alias for `exe_name`.
pub fn add_alias(source: &str, target: Option<&str>, exe_name: &str) -> Result<()> {
    let source_w = wide(source);
    let target_w = target.map(wide);
    let target_ptr = target_w
        .as_ref()
        .map_or(core::ptr::null(), |t| t.as_ptr());
    let exe = wide(exe_name);
    check_bool("AddConsoleAliasW", unsafe {
        ffi::AddConsoleAliasW(source_w.as_ptr(), target_ptr, exe.as_ptr())
    })
}

/// Expansion of one alias. There is no length query for a single alias, so
/// an undersized attempt is retried with the OS-reported requirement.
pub fn alias(source: &str, exe_name: &str) -> Result<String> {
    let source_w = wide(source);
    let exe = wide(exe_name);

    let mut capacity = 256usize; // units, doubled once on growth
    loop {
        let mut buf = vec![0u16; capacity];
        let copied_bytes = unsafe {
            ffi::GetConsoleAliasW(
                source_w.as_ptr(),
                buf.as_mut_ptr(),
                (buf.len() * 2) as u32,
                exe.as_ptr(),
            )
        } as usize;
        if copied_bytes == 0 {
            let code = last_error();
            if code == ffi::ERROR_INSUFFICIENT_BUFFER && capacity < 0x10000 {
                capacity *= 2;
                continue;
            }
            if code != ffi::ERROR_SUCCESS {
                return Err(ConsoleError::Api {
                    function: "GetConsoleAliasW",
                    code,
                });
            }
        }
        let units = &buf[..(copied_bytes / 2).min(buf.len())];
        let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
        return Ok(String::from_utf16_lossy(&units[..end]));
    }
}

/// Byte length required for the `source=target` alias listing of
/// `exe_name`.
pub fn aliases_length(exe_name: &str) -> usize {
    let exe = wide(exe_name);
    unsafe { ffi::GetConsoleAliasesLengthW(exe.as_ptr()) as usize }
}

/// Raw fill half of the alias listing; returns the bytes copied.
pub fn aliases_raw(buf: &mut [u16], exe_name: &str) -> Result<usize> {
    let exe = wide(exe_name);
    let copied = unsafe {
        ffi::GetConsoleAliasesW(buf.as_mut_ptr(), (buf.len() * 2) as u32, exe.as_ptr())
    };
    if copied == 0 && !buf.is_empty() {
        let code = last_error();
        if code != ffi::ERROR_SUCCESS {
            return Err(ConsoleError::Api {
                function: "GetConsoleAliasesW",
                code,
            });
        }
    }
    Ok(copied as usize)
}

/// All aliases defined for `exe_name`, as `source=target` pairs.
pub fn aliases(exe_name: &str) -> Result<Vec<(String, String)>> {
    let units = query_then_fill(
        || Ok(aliases_length(exe_name) / 2),
        |buf| {
            let copied_bytes = aliases_raw(buf, exe_name)?;
            let units_now = copied_bytes / 2;
            if units_now > buf.len() {
                Ok(FillOutcome::NeedsCapacity(units_now))
            } else {
                Ok(FillOutcome::Filled(units_now))
            }
        },
    )?;
    Ok(split_nul_delimited(&units)
        .into_iter()
        .map(|entry| match entry.split_once('=') {
            Some((source, target)) => (source.to_string(), target.to_string()),
            None => (entry, String::new()),
        })
        .collect())
}

/// Byte length required for the listing of executables that have aliases.
pub fn alias_exes_length() -> usize {
    unsafe { ffi::GetConsoleAliasExesLengthW() as usize }
}

/// Raw fill half of the alias-executable listing; returns the bytes copied.
pub fn alias_exes_raw(buf: &mut [u16]) -> Result<usize> {
    let copied =
        unsafe { ffi::GetConsoleAliasExesW(buf.as_mut_ptr(), (buf.len() * 2) as u32) };
    if copied == 0 && !buf.is_empty() {
        let code = last_error();
        if code != ffi::ERROR_SUCCESS {
            return Err(ConsoleError::Api {
                function: "GetConsoleAliasExesW",
                code,
            });
        }
    }
    Ok(copied as usize)
}

/// Names of every executable with console aliases defined.
pub fn alias_exes() -> Result<Vec<String>> {
    let units = query_then_fill(
        || Ok(alias_exes_length() / 2),
        |buf| {
            let copied_bytes = alias_exes_raw(buf)?;
            let units_now = copied_bytes / 2;
            if units_now > buf.len() {
                Ok(FillOutcome::NeedsCapacity(units_now))
            } else {
                Ok(FillOutcome::Filled(units_now))
            }
        },
    )?;
    Ok(split_nul_delimited(&units))
}
