// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Raw declarations for the Windows Console API surface of `kernel32.dll`.
//!
//! This crate contains no logic: it mirrors the OS contract bit for bit —
//! primitive aliases, `#[repr(C)]` records, numeric constants, and the
//! `extern "system"` entry points. Every record's field order, size, and
//! alignment must match the published ABI exactly; a deviation here is a
//! silent correctness bug at the call boundary, not a catchable error.
//!
//! The entry-point block is only compiled on Windows. The data declarations
//! compile on every host so layout tests can run anywhere.

#![no_std]
#![allow(non_snake_case, non_camel_case_types, non_upper_case_globals)]

mod consts;
mod types;

pub use consts::*;
pub use types::*;

#[cfg(windows)]
mod funcs;

#[cfg(windows)]
pub use funcs::*;
