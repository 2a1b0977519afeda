// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Integration tests for the console API seam and its tracing wrapper.

use std::sync::Arc;

use wincon_api::event::{InputEvent, KeyEvent};
use wincon_api::flags::{CharacterAttributes, ControlKeyState, InputMode, OutputMode};
use wincon_api::geom::{Coord, Rect};
use wincon_api::info::ScreenBufferInfo;
use wincon_api::tracing::{
    ApiCategory, FilterRule, TraceConfig, TraceFilter, TraceFormat, TracedConsole, Tracer,
};
use wincon_api::{ConsoleApi, Result};

/// In-memory console standing in for the OS.
struct MockConsole {
    written: String,
    queue: Vec<InputEvent>,
    input_mode: InputMode,
    output_mode: OutputMode,
    title: String,
    cursor: Coord,
}

impl MockConsole {
    fn new() -> Self {
        Self {
            written: String::new(),
            queue: Vec::new(),
            input_mode: InputMode::PROCESSED_INPUT | InputMode::LINE_INPUT | InputMode::ECHO_INPUT,
            output_mode: OutputMode::PROCESSED_OUTPUT | OutputMode::WRAP_AT_EOL_OUTPUT,
            title: "mock".to_string(),
            cursor: Coord::default(),
        }
    }
}

impl ConsoleApi for MockConsole {
    fn write(&mut self, text: &str) -> Result<usize> {
        self.written.push_str(text);
        Ok(text.encode_utf16().count())
    }

    fn read(&mut self, max_chars: usize) -> Result<String> {
        Ok("input line\n".chars().take(max_chars).collect())
    }

    fn read_input(&mut self, max_events: usize) -> Result<Vec<InputEvent>> {
        let take = max_events.min(self.queue.len());
        Ok(self.queue.drain(..take).collect())
    }

    fn peek_input(&mut self, max_events: usize) -> Result<Vec<InputEvent>> {
        Ok(self.queue.iter().take(max_events).copied().collect())
    }

    fn write_input(&mut self, events: &[InputEvent]) -> Result<usize> {
        self.queue.extend_from_slice(events);
        Ok(events.len())
    }

    fn flush_input(&mut self) -> Result<()> {
        self.queue.clear();
        Ok(())
    }

    fn pending_input(&mut self) -> Result<usize> {
        Ok(self.queue.len())
    }

    fn input_mode(&mut self) -> Result<InputMode> {
        Ok(self.input_mode)
    }

    fn set_input_mode(&mut self, mode: InputMode) -> Result<()> {
        self.input_mode = mode;
        Ok(())
    }

    fn output_mode(&mut self) -> Result<OutputMode> {
        Ok(self.output_mode)
    }

    fn set_output_mode(&mut self, mode: OutputMode) -> Result<()> {
        self.output_mode = mode;
        Ok(())
    }

    fn screen_buffer_info(&mut self) -> Result<ScreenBufferInfo> {
        Ok(ScreenBufferInfo {
            size: Coord::new(80, 300),
            cursor_position: self.cursor,
            attributes: CharacterAttributes::FOREGROUND_RED
                | CharacterAttributes::FOREGROUND_GREEN
                | CharacterAttributes::FOREGROUND_BLUE,
            window: Rect::new(0, 0, 79, 24),
            maximum_window_size: Coord::new(80, 25),
        })
    }

    fn set_cursor_position(&mut self, position: Coord) -> Result<()> {
        self.cursor = position;
        Ok(())
    }

    fn title(&mut self) -> Result<String> {
        Ok(self.title.clone())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = title.to_string();
        Ok(())
    }
}

fn key(ch: u16) -> InputEvent {
    InputEvent::Key(KeyEvent {
        key_down: true,
        repeat_count: 1,
        virtual_key_code: ch,
        virtual_scan_code: 0,
        unicode_char: ch,
        control_keys: ControlKeyState::empty(),
    })
}

#[test]
fn test_traced_passthrough_disabled() {
    let tracer = Arc::new(Tracer::new(TraceConfig::default(), TraceFilter::default()).unwrap());
    let mut console = TracedConsole::new(MockConsole::new(), tracer);

    let written = console.write("hello").unwrap();
    assert_eq!(written, 5);
    assert_eq!(console.inner().written, "hello");
}

#[test]
fn test_traced_passthrough_enabled() {
    let config = TraceConfig::enabled().with_format(TraceFormat::Text);
    let tracer = Arc::new(Tracer::new(config, TraceFilter::new()).unwrap());
    let mut console = TracedConsole::new(MockConsole::new(), tracer);

    console.set_title("traced").unwrap();
    assert_eq!(console.title().unwrap(), "traced");
}

#[test]
fn test_traced_input_queue_round_trip() {
    let config = TraceConfig::enabled();
    let filter = TraceFilter::new().add_rule(FilterRule::Category(vec![ApiCategory::Input]));
    let tracer = Arc::new(Tracer::new(config, filter).unwrap());
    let mut console = TracedConsole::new(MockConsole::new(), tracer);

    let events = [key(b'h' as u16), key(b'i' as u16)];
    assert_eq!(console.write_input(&events).unwrap(), 2);
    assert_eq!(console.pending_input().unwrap(), 2);

    let peeked = console.peek_input(8).unwrap();
    assert_eq!(peeked.len(), 2);
    assert_eq!(console.pending_input().unwrap(), 2, "peek must not consume");

    let read = console.read_input(1).unwrap();
    assert_eq!(read.len(), 1);
    assert_eq!(console.pending_input().unwrap(), 1);

    console.flush_input().unwrap();
    assert_eq!(console.pending_input().unwrap(), 0);
}

#[test]
fn test_traced_mode_round_trip() {
    let tracer = Arc::new(Tracer::new(TraceConfig::enabled(), TraceFilter::new()).unwrap());
    let mut console = TracedConsole::new(MockConsole::new(), tracer);

    let raw = console.input_mode().unwrap() & !InputMode::LINE_INPUT & !InputMode::ECHO_INPUT;
    console.set_input_mode(raw).unwrap();
    assert!(!console.input_mode().unwrap().contains(InputMode::LINE_INPUT));

    let vt = console.output_mode().unwrap() | OutputMode::VIRTUAL_TERMINAL_PROCESSING;
    console.set_output_mode(vt).unwrap();
    assert!(console
        .output_mode()
        .unwrap()
        .contains(OutputMode::VIRTUAL_TERMINAL_PROCESSING));
}

#[test]
fn test_traced_screen_buffer_info() {
    let tracer = Arc::new(Tracer::new(TraceConfig::enabled(), TraceFilter::new()).unwrap());
    let mut console = TracedConsole::new(MockConsole::new(), tracer);

    console.set_cursor_position(Coord::new(10, 4)).unwrap();
    let info = console.screen_buffer_info().unwrap();
    assert_eq!(info.cursor_position, Coord::new(10, 4));
    assert_eq!(info.window.width(), 80);
}
