// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Call/return tracing for the console binding surface.
//!
//! Wrapping a [`crate::ConsoleApi`] value in [`TracedConsole`] logs every
//! operation with its arguments and result, filtered by function name or
//! category, formatted as text or JSON, to stdout or a file.

pub mod config;
pub mod event;
pub mod filter;
pub mod formatter;
pub mod tracer;
pub mod wrapper;

pub use config::{TraceConfig, TraceFormat, TraceOutput};
pub use event::{ApiCategory, TraceEvent, TracePhase};
pub use filter::{FilterRule, TraceFilter};
pub use formatter::{JsonFormatter, TextFormatter, TraceFormatter};
pub use tracer::Tracer;
pub use wrapper::TracedConsole;
