// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Pseudo-console wrappers.
//!
//! A pseudo-console redirects another process's console I/O through a pair
//! of caller-supplied pipe handles. Unlike the rest of the console surface
//! these entry points report failure through an `HRESULT`, not the
//! boolean/last-error pair, and the handle is released with its own close
//! entry point — exactly once, by the caller.

use wincon_ffi as ffi;

use crate::call::check_hresult;
use crate::flags::PseudoConsoleFlags;
use crate::geom::Coord;
use crate::handle::PseudoHandle;
use crate::Result;

/// Create a pseudo-console of the given cell size. `input` is the read end
/// the host writes keystrokes into; `output` is the write end the hosted
/// process's rendering arrives on. Both pipe handles stay owned by the
/// caller.
pub fn create(
    size: Coord,
    input: ffi::HANDLE,
    output: ffi::HANDLE,
    flags: PseudoConsoleFlags,
) -> Result<PseudoHandle> {
    let mut raw: ffi::HPCON = 0;
    check_hresult("CreatePseudoConsole", unsafe {
        ffi::CreatePseudoConsole(size.into(), input, output, flags.bits(), &mut raw)
    })?;
    Ok(PseudoHandle(raw))
}

/// Resize the pseudo-console's screen buffer.
pub fn resize(handle: PseudoHandle, size: Coord) -> Result<()> {
    check_hresult("ResizePseudoConsole", unsafe {
        ffi::ResizePseudoConsole(handle.0, size.into())
    })
}

/// Release a pseudo-console. The entry point has no failure channel.
pub fn close(handle: PseudoHandle) {
    unsafe { ffi::ClosePseudoConsole(handle.0) };
}
