// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Safe typed surface over the Windows Console API.
//!
//! This crate wraps the raw declarations in `wincon_ffi` with memory-safe,
//! language-native equivalents: newtype handles, explicit flag sets, a sum
//! type for the tagged-union input record, and one checked wrapper per OS
//! entry point. The layer is stateless — every call is an independent
//! synchronous pass-through to the OS, nothing is cached, and both OS error
//! channels (boolean returns and the thread-local last-error value) are
//! surfaced as-is through [`ConsoleError`].
//!
//! The wrapper functions themselves only exist on Windows. The typed
//! vocabulary (flags, events, records) and the [`tracing`] stack compile on
//! every host, so the decoding and observability layers are testable
//! anywhere.

use thiserror::Error;

pub mod api;
pub mod event;
pub mod flags;
pub mod geom;
pub mod handle;
pub mod info;
pub mod tracing;
pub mod two_call;

#[cfg(windows)]
mod call;

#[cfg(windows)]
pub mod history;
#[cfg(windows)]
pub mod input;
#[cfg(windows)]
pub mod lifecycle;
#[cfg(windows)]
pub mod output;
#[cfg(windows)]
pub mod pseudo;
#[cfg(windows)]
pub mod screen;

pub use api::ConsoleApi;
pub use event::{InputEvent, KeyEvent, MouseEvent};
pub use geom::{Coord, Rect};
pub use handle::{InputHandle, OutputHandle, PseudoHandle, WindowHandle};

#[cfg(windows)]
pub use api::Win32Console;

/// Binding-surface errors.
///
/// Only the OS's own failure channels are represented; this layer
/// synthesizes no error categories of its own beyond the two decode
/// conditions the safe surface introduces (an unknown union discriminant
/// and the two-call idiom's size-changed case).
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A `BOOL`/sentinel-returning entry point failed; `code` is the
    /// thread-local last-error value fetched immediately after the call.
    #[error("{function} failed with last-error {code}")]
    Api { function: &'static str, code: u32 },

    /// A pseudo-console entry point returned a failing `HRESULT`.
    #[error("{function} failed with HRESULT 0x{code:08X}")]
    Hresult { function: &'static str, code: i32 },

    /// An `INPUT_RECORD` discriminant matched none of the five event kinds.
    #[error("unknown input event type 0x{0:X}")]
    UnknownEventType(u16),

    /// The required buffer length reported by the fill call exceeded the
    /// length obtained from the query call.
    #[error("required length grew between query and fill ({first} -> {second})")]
    BufferGrew { first: usize, second: usize },
}

pub type Result<T> = core::result::Result<T, ConsoleError>;
