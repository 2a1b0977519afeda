// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Trace event definitions

use std::fmt;
use std::time::SystemTime;

/// Category of traced console operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCategory {
    /// Text reads and writes
    Io,
    /// Input-event queue and input modes
    Input,
    /// Screen-buffer state and output modes
    ScreenBuffer,
    /// Window and title
    Window,
    /// Command history and aliases
    History,
    /// Pseudo-console control
    PseudoConsole,
    /// Allocation, attachment, handles, code pages
    Lifecycle,
    /// Unknown/uncategorized
    Unknown,
}

impl fmt::Display for ApiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiCategory::Io => write!(f, "io"),
            ApiCategory::Input => write!(f, "input"),
            ApiCategory::ScreenBuffer => write!(f, "screen_buffer"),
            ApiCategory::Window => write!(f, "window"),
            ApiCategory::History => write!(f, "history"),
            ApiCategory::PseudoConsole => write!(f, "pseudo_console"),
            ApiCategory::Lifecycle => write!(f, "lifecycle"),
            ApiCategory::Unknown => write!(f, "unknown"),
        }
    }
}

/// Whether the event marks the call or the return of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracePhase {
    Call,
    Return,
}

impl fmt::Display for TracePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TracePhase::Call => write!(f, "CALL"),
            TracePhase::Return => write!(f, "RETURN"),
        }
    }
}

/// A traced console operation
#[derive(Debug, Clone)]
pub struct TraceEvent {
    /// Timestamp of the event
    pub timestamp: SystemTime,
    /// Thread ID (if available)
    pub thread_id: Option<u64>,
    /// Call or return
    pub phase: TracePhase,
    /// Operation category
    pub category: ApiCategory,
    /// Function name
    pub function: String,
    /// Arguments (formatted as string)
    pub args: Option<String>,
    /// Return value (formatted as string)
    pub return_value: Option<String>,
}

impl TraceEvent {
    /// Create a new call event
    pub fn call(function: &str, category: ApiCategory) -> Self {
        Self {
            timestamp: SystemTime::now(),
            thread_id: None,
            phase: TracePhase::Call,
            category,
            function: function.to_string(),
            args: None,
            return_value: None,
        }
    }

    /// Create a new return event
    pub fn return_event(function: &str, category: ApiCategory) -> Self {
        Self {
            timestamp: SystemTime::now(),
            thread_id: None,
            phase: TracePhase::Return,
            category,
            function: function.to_string(),
            args: None,
            return_value: None,
        }
    }

    /// Set the arguments for this event
    #[must_use]
    pub fn with_args(mut self, args: String) -> Self {
        self.args = Some(args);
        self
    }

    /// Set the return value for this event
    #[must_use]
    pub fn with_return_value(mut self, return_value: String) -> Self {
        self.return_value = Some(return_value);
        self
    }

    /// Set the thread ID for this event
    #[must_use]
    pub fn with_thread_id(mut self, thread_id: u64) -> Self {
        self.thread_id = Some(thread_id);
        self
    }
}
