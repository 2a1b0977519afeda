// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Tracing wrapper for the console API seam.
//!
//! [`TracedConsole`] implements [`ConsoleApi`] by delegating to an inner
//! implementation, emitting a call event before and a return event after
//! each operation. Events carry the OS entry-point name so traces read
//! against the SDK documentation.

use crate::api::ConsoleApi;
use crate::event::InputEvent;
use crate::flags::{InputMode, OutputMode};
use crate::geom::Coord;
use crate::info::ScreenBufferInfo;
use crate::tracing::{ApiCategory, TraceEvent, Tracer};
use crate::Result;
use std::sync::Arc;

/// Wrapper for a [`ConsoleApi`] implementation that adds tracing
pub struct TracedConsole<T: ConsoleApi> {
    inner: T,
    tracer: Arc<Tracer>,
}

impl<T: ConsoleApi> TracedConsole<T> {
    /// Create a new traced wrapper
    pub fn new(inner: T, tracer: Arc<Tracer>) -> Self {
        Self { inner, tracer }
    }

    /// Get a reference to the inner implementation
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Get a mutable reference to the inner implementation
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Run one operation between a call event and a return event.
    fn traced<R>(
        &mut self,
        function: &'static str,
        category: ApiCategory,
        args: String,
        call: impl FnOnce(&mut T) -> Result<R>,
        describe: impl FnOnce(&R) -> String,
    ) -> Result<R> {
        if self.tracer.is_enabled() {
            self.tracer
                .trace(TraceEvent::call(function, category).with_args(args));
        }

        let result = call(&mut self.inner);

        if self.tracer.is_enabled() {
            let ret = match &result {
                Ok(value) => format!("Ok({})", describe(value)),
                Err(e) => format!("Err({})", e),
            };
            self.tracer
                .trace(TraceEvent::return_event(function, category).with_return_value(ret));
        }

        result
    }
}

impl<T: ConsoleApi> ConsoleApi for TracedConsole<T> {
    fn write(&mut self, text: &str) -> Result<usize> {
        self.traced(
            "WriteConsoleW",
            ApiCategory::Io,
            format!("text=\"{}\"", text.escape_debug()),
            |api| api.write(text),
            |n| format!("units_written={}", n),
        )
    }

    fn read(&mut self, max_chars: usize) -> Result<String> {
        self.traced(
            "ReadConsoleW",
            ApiCategory::Io,
            format!("max_chars={}", max_chars),
            |api| api.read(max_chars),
            |s| format!("\"{}\"", s.escape_debug()),
        )
    }

    fn read_input(&mut self, max_events: usize) -> Result<Vec<InputEvent>> {
        self.traced(
            "ReadConsoleInputW",
            ApiCategory::Input,
            format!("max_events={}", max_events),
            |api| api.read_input(max_events),
            |events| format!("events={}", events.len()),
        )
    }

    fn peek_input(&mut self, max_events: usize) -> Result<Vec<InputEvent>> {
        self.traced(
            "PeekConsoleInputW",
            ApiCategory::Input,
            format!("max_events={}", max_events),
            |api| api.peek_input(max_events),
            |events| format!("events={}", events.len()),
        )
    }

    fn write_input(&mut self, events: &[InputEvent]) -> Result<usize> {
        self.traced(
            "WriteConsoleInputW",
            ApiCategory::Input,
            format!("events={}", events.len()),
            |api| api.write_input(events),
            |n| format!("events_written={}", n),
        )
    }

    fn flush_input(&mut self) -> Result<()> {
        self.traced(
            "FlushConsoleInputBuffer",
            ApiCategory::Input,
            String::new(),
            |api| api.flush_input(),
            |_| "()".to_string(),
        )
    }

    fn pending_input(&mut self) -> Result<usize> {
        self.traced(
            "GetNumberOfConsoleInputEvents",
            ApiCategory::Input,
            String::new(),
            |api| api.pending_input(),
            |n| format!("pending={}", n),
        )
    }

    fn input_mode(&mut self) -> Result<InputMode> {
        self.traced(
            "GetConsoleMode",
            ApiCategory::Input,
            "handle=input".to_string(),
            |api| api.input_mode(),
            |mode| format!("mode=0x{:X}", mode.bits()),
        )
    }

    fn set_input_mode(&mut self, mode: InputMode) -> Result<()> {
        self.traced(
            "SetConsoleMode",
            ApiCategory::Input,
            format!("handle=input, mode=0x{:X}", mode.bits()),
            |api| api.set_input_mode(mode),
            |_| "()".to_string(),
        )
    }

    fn output_mode(&mut self) -> Result<OutputMode> {
        self.traced(
            "GetConsoleMode",
            ApiCategory::ScreenBuffer,
            "handle=output".to_string(),
            |api| api.output_mode(),
            |mode| format!("mode=0x{:X}", mode.bits()),
        )
    }

    fn set_output_mode(&mut self, mode: OutputMode) -> Result<()> {
        self.traced(
            "SetConsoleMode",
            ApiCategory::ScreenBuffer,
            format!("handle=output, mode=0x{:X}", mode.bits()),
            |api| api.set_output_mode(mode),
            |_| "()".to_string(),
        )
    }

    fn screen_buffer_info(&mut self) -> Result<ScreenBufferInfo> {
        self.traced(
            "GetConsoleScreenBufferInfo",
            ApiCategory::ScreenBuffer,
            String::new(),
            |api| api.screen_buffer_info(),
            |info| {
                format!(
                    "size={}x{}, cursor=({},{})",
                    info.size.x, info.size.y, info.cursor_position.x, info.cursor_position.y
                )
            },
        )
    }

    fn set_cursor_position(&mut self, position: Coord) -> Result<()> {
        self.traced(
            "SetConsoleCursorPosition",
            ApiCategory::ScreenBuffer,
            format!("position=({},{})", position.x, position.y),
            |api| api.set_cursor_position(position),
            |_| "()".to_string(),
        )
    }

    fn title(&mut self) -> Result<String> {
        self.traced(
            "GetConsoleTitleW",
            ApiCategory::Window,
            String::new(),
            |api| api.title(),
            |title| format!("\"{}\"", title.escape_debug()),
        )
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.traced(
            "SetConsoleTitleW",
            ApiCategory::Window,
            format!("title=\"{}\"", title.escape_debug()),
            |api| api.set_title(title),
            |_| "()".to_string(),
        )
    }
}
