// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Trace event formatters

use super::config::TraceConfig;
use super::event::{TraceEvent, TracePhase};
use std::io::{self, Write};
use std::time::SystemTime;

/// Trait for formatting trace events
pub trait TraceFormatter {
    /// Format a trace event to the output
    fn format(
        &self,
        event: &TraceEvent,
        config: &TraceConfig,
        writer: &mut dyn Write,
    ) -> io::Result<()>;
}

/// Text formatter - human-readable output
pub struct TextFormatter;

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self
    }

    fn format_timestamp(timestamp: SystemTime) -> String {
        match timestamp.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(duration) => format!("{}.{:03}", duration.as_secs(), duration.subsec_millis()),
            Err(_) => "0.000".to_string(),
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceFormatter for TextFormatter {
    fn format(
        &self,
        event: &TraceEvent,
        config: &TraceConfig,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        let mut line = String::new();

        if config.include_timestamps {
            line.push_str(&format!("[{}] ", Self::format_timestamp(event.timestamp)));
        }

        if config.include_thread_ids {
            match event.thread_id {
                Some(tid) => line.push_str(&format!("[TID:{:04}] ", tid)),
                None => line.push_str("[TID:main] "),
            }
        }

        line.push_str(&format!("{:<6} ", event.phase));
        line.push_str(&event.function);

        match event.args {
            Some(ref args) => line.push_str(&format!("({})", args)),
            None => line.push_str("()"),
        }

        if let Some(ref ret) = event.return_value {
            line.push_str(&format!(" -> {}", ret));
        }

        writeln!(writer, "{}", line)
    }
}

/// JSON formatter - machine-parseable output, one object per line
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }

    fn escape(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(
        &self,
        event: &TraceEvent,
        config: &TraceConfig,
        writer: &mut dyn Write,
    ) -> io::Result<()> {
        write!(writer, "{{")?;

        if config.include_timestamps {
            match event.timestamp.duration_since(SystemTime::UNIX_EPOCH) {
                Ok(duration) => write!(
                    writer,
                    "\"timestamp\":{}.{:09},",
                    duration.as_secs(),
                    duration.subsec_nanos()
                )?,
                Err(_) => write!(writer, "\"timestamp\":0.0,")?,
            }
        }

        if config.include_thread_ids {
            match event.thread_id {
                Some(tid) => write!(writer, "\"thread_id\":{},", tid)?,
                None => write!(writer, "\"thread_id\":null,")?,
            }
        }

        let phase = match event.phase {
            TracePhase::Call => "call",
            TracePhase::Return => "return",
        };
        write!(writer, "\"event\":\"{}\"", phase)?;
        write!(writer, ",\"category\":\"{}\"", event.category)?;
        write!(writer, ",\"function\":\"{}\"", Self::escape(&event.function))?;

        if let Some(ref args) = event.args {
            write!(writer, ",\"args\":\"{}\"", Self::escape(args))?;
        }

        if let Some(ref ret) = event.return_value {
            write!(writer, ",\"return\":\"{}\"", Self::escape(ret))?;
        }

        writeln!(writer, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracing::event::ApiCategory;

    #[test]
    fn test_text_formatter() {
        let formatter = TextFormatter::new();
        let config = TraceConfig::default();
        let event = TraceEvent::call("WriteConsoleW", ApiCategory::Io)
            .with_args("text=\"hello\", units=5".to_string());

        let mut output = Vec::new();
        formatter.format(&event, &config, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("CALL"));
        assert!(output_str.contains("WriteConsoleW"));
        assert!(output_str.contains("hello"));
    }

    #[test]
    fn test_text_formatter_return_value() {
        let formatter = TextFormatter::new();
        let config = TraceConfig::default().with_timestamps(false).with_thread_ids(false);
        let event = TraceEvent::return_event("GetConsoleTitleW", ApiCategory::Window)
            .with_return_value("Ok(\"shell\")".to_string());

        let mut output = Vec::new();
        formatter.format(&event, &config, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.starts_with("RETURN"));
        assert!(output_str.contains("-> Ok(\"shell\")"));
    }

    #[test]
    fn test_json_formatter() {
        let formatter = JsonFormatter::new();
        let config = TraceConfig::default();
        let event = TraceEvent::call("ReadConsoleInputW", ApiCategory::Input)
            .with_args("max_events=16".to_string());

        let mut output = Vec::new();
        formatter.format(&event, &config, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("\"event\":\"call\""));
        assert!(output_str.contains("\"function\":\"ReadConsoleInputW\""));
        assert!(output_str.contains("\"category\":\"input\""));
    }

    #[test]
    fn test_json_escape() {
        assert_eq!(JsonFormatter::escape("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(JsonFormatter::escape("a\\b"), "a\\\\b");
        assert_eq!(JsonFormatter::escape("line\nbreak"), "line\\nbreak");
    }
}
