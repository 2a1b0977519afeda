// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Return-value checking and UTF-16 argument marshaling.
//!
//! The last-error value is thread-local OS state overwritten by any
//! intervening call, so the check helpers take the raw return value as an
//! argument: the pattern `check_bool("F", unsafe { ffi::F(..) })` keeps the
//! error fetch immediately adjacent to the failing call with nothing in
//! between.

use wincon_ffi as ffi;

use crate::{ConsoleError, Result};

pub(crate) fn check_bool(function: &'static str, ret: ffi::BOOL) -> Result<()> {
    if ret == 0 {
        Err(ConsoleError::Api {
            function,
            code: unsafe { ffi::GetLastError() },
        })
    } else {
        Ok(())
    }
}

pub(crate) fn check_handle(function: &'static str, handle: ffi::HANDLE) -> Result<ffi::HANDLE> {
    if handle == ffi::INVALID_HANDLE_VALUE || handle == 0 {
        Err(ConsoleError::Api {
            function,
            code: unsafe { ffi::GetLastError() },
        })
    } else {
        Ok(handle)
    }
}

/// Code pages and similar direct-value functions report failure as zero.
pub(crate) fn check_nonzero(function: &'static str, ret: u32) -> Result<u32> {
    if ret == 0 {
        Err(ConsoleError::Api {
            function,
            code: unsafe { ffi::GetLastError() },
        })
    } else {
        Ok(ret)
    }
}

pub(crate) fn check_hresult(function: &'static str, hr: ffi::HRESULT) -> Result<()> {
    if hr < 0 {
        Err(ConsoleError::Hresult { function, code: hr })
    } else {
        Ok(())
    }
}

/// NUL-terminated UTF-16 for `LPCWSTR` parameters.
pub(crate) fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(core::iter::once(0)).collect()
}

pub(crate) fn last_error() -> u32 {
    unsafe { ffi::GetLastError() }
}
