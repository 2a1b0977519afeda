// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! The console API seam.
//!
//! [`ConsoleApi`] gathers the core stateless console operations behind a
//! trait so the tracing wrapper and tests can interpose on them. The
//! Windows implementation is a pure pass-through to the wrapper modules;
//! it holds nothing but the pair of handles it was constructed over.

use crate::event::InputEvent;
use crate::flags::{InputMode, OutputMode};
use crate::geom::Coord;
use crate::info::ScreenBufferInfo;
use crate::Result;

/// Core console operations. Each call is an independent synchronous
/// pass-through; implementations must not cache modes, sizes, or any other
/// console state the OS owns.
pub trait ConsoleApi {
    /// Write text at the cursor; returns UTF-16 units written.
    fn write(&mut self, text: &str) -> Result<usize>;

    /// Cooked read of up to `max_chars` UTF-16 units.
    fn read(&mut self, max_chars: usize) -> Result<String>;

    /// Remove and decode up to `max_events` input events.
    fn read_input(&mut self, max_events: usize) -> Result<Vec<InputEvent>>;

    /// Decode up to `max_events` input events without consuming them.
    fn peek_input(&mut self, max_events: usize) -> Result<Vec<InputEvent>>;

    /// Inject events into the input queue; returns how many were written.
    fn write_input(&mut self, events: &[InputEvent]) -> Result<usize>;

    /// Discard all pending input events.
    fn flush_input(&mut self) -> Result<()>;

    /// Number of unread events in the input queue.
    fn pending_input(&mut self) -> Result<usize>;

    fn input_mode(&mut self) -> Result<InputMode>;

    fn set_input_mode(&mut self, mode: InputMode) -> Result<()>;

    fn output_mode(&mut self) -> Result<OutputMode>;

    fn set_output_mode(&mut self, mode: OutputMode) -> Result<()>;

    /// Size, cursor, attributes, and window of the output buffer.
    fn screen_buffer_info(&mut self) -> Result<ScreenBufferInfo>;

    fn set_cursor_position(&mut self, position: Coord) -> Result<()>;

    fn title(&mut self) -> Result<String>;

    fn set_title(&mut self, title: &str) -> Result<()>;
}

#[cfg(windows)]
pub use win32::Win32Console;

#[cfg(windows)]
mod win32 {
    use super::ConsoleApi;
    use crate::event::InputEvent;
    use crate::flags::{InputMode, OutputMode};
    use crate::geom::Coord;
    use crate::handle::{InputHandle, OutputHandle};
    use crate::info::ScreenBufferInfo;
    use crate::{input, lifecycle, output, screen};
    use crate::Result;

    /// Console API over a concrete pair of OS handles.
    ///
    /// The handles are borrowed from the OS for the lifetime of the value;
    /// nothing is closed on drop. [`Win32Console::std`] re-queries the
    /// standard handles at construction rather than reading any cached
    /// global, since redirection may have changed them.
    #[derive(Debug, Clone, Copy)]
    pub struct Win32Console {
        input: InputHandle,
        output: OutputHandle,
    }

    impl Win32Console {
        /// Bind to the process's current standard input and output.
        pub fn std() -> Result<Self> {
            Ok(Self {
                input: lifecycle::std_input()?,
                output: lifecycle::std_output()?,
            })
        }

        /// Bind to explicit handles, e.g. a freshly created screen buffer.
        pub fn from_handles(input: InputHandle, output: OutputHandle) -> Self {
            Self { input, output }
        }

        pub fn input_handle(&self) -> InputHandle {
            self.input
        }

        pub fn output_handle(&self) -> OutputHandle {
            self.output
        }
    }

    impl ConsoleApi for Win32Console {
        fn write(&mut self, text: &str) -> Result<usize> {
            output::write_text(self.output, text)
        }

        fn read(&mut self, max_chars: usize) -> Result<String> {
            input::read_text(self.input, max_chars, None)
        }

        fn read_input(&mut self, max_events: usize) -> Result<Vec<InputEvent>> {
            input::read_events(self.input, max_events)
        }

        fn peek_input(&mut self, max_events: usize) -> Result<Vec<InputEvent>> {
            input::peek_events(self.input, max_events)
        }

        fn write_input(&mut self, events: &[InputEvent]) -> Result<usize> {
            input::write_events(self.input, events)
        }

        fn flush_input(&mut self) -> Result<()> {
            input::flush(self.input)
        }

        fn pending_input(&mut self) -> Result<usize> {
            input::pending_events(self.input)
        }

        fn input_mode(&mut self) -> Result<InputMode> {
            input::mode(self.input)
        }

        fn set_input_mode(&mut self, mode: InputMode) -> Result<()> {
            input::set_mode(self.input, mode)
        }

        fn output_mode(&mut self) -> Result<OutputMode> {
            output::mode(self.output)
        }

        fn set_output_mode(&mut self, mode: OutputMode) -> Result<()> {
            output::set_mode(self.output, mode)
        }

        fn screen_buffer_info(&mut self) -> Result<ScreenBufferInfo> {
            screen::info(self.output)
        }

        fn set_cursor_position(&mut self, position: Coord) -> Result<()> {
            screen::set_cursor_position(self.output, position)
        }

        fn title(&mut self) -> Result<String> {
            lifecycle::title()
        }

        fn set_title(&mut self, title: &str) -> Result<()> {
            lifecycle::set_title(title)
        }
    }
}
