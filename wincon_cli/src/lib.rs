// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! CLI for inspecting and exercising the attached console.
//!
//! Every piece of state printed here is read from the OS at the moment of
//! the call; nothing is cached between invocations.

use anyhow::{anyhow, Result};
use clap::Parser;
use std::sync::Arc;
use wincon_api::tracing::{
    ApiCategory, FilterRule, TraceConfig, TraceFilter, TraceFormat, TraceOutput, Tracer,
};

/// Inspect and exercise the attached Windows console
#[derive(Parser, Debug)]
#[command(name = "wincon")]
pub struct CliArgs {
    /// Set the console title before printing state
    #[arg(long)]
    pub set_title: Option<String>,

    /// Enable virtual-terminal processing on the output handle
    #[arg(long, default_value = "false")]
    pub enable_vt: bool,

    /// Read and print this many input events before exiting
    #[arg(long)]
    pub watch_input: Option<usize>,

    /// List aliases and command history for this executable name
    #[arg(long)]
    pub history_exe: Option<String>,

    /// Enable API tracing
    #[arg(long, default_value = "false")]
    pub trace_apis: bool,

    /// Trace output format (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub trace_format: String,

    /// Trace output file (default: stdout)
    #[arg(long)]
    pub trace_output: Option<String>,

    /// Filter traced functions by pattern (e.g. "Get*TitleW")
    #[arg(long)]
    pub trace_filter: Option<String>,

    /// Filter traced functions by category (io, input, screen_buffer,
    /// window, history, pseudo_console, lifecycle)
    #[arg(long)]
    pub trace_category: Option<String>,
}

/// Build the tracer described by the CLI arguments.
pub fn build_tracer(args: &CliArgs) -> Result<Arc<Tracer>> {
    let mut trace_config = if args.trace_apis {
        TraceConfig::enabled()
    } else {
        TraceConfig::default()
    };

    if args.trace_apis {
        trace_config = match args.trace_format.as_str() {
            "json" => trace_config.with_format(TraceFormat::Json),
            _ => trace_config.with_format(TraceFormat::Text),
        };

        if let Some(ref output_file) = args.trace_output {
            trace_config = trace_config.with_output(TraceOutput::File(output_file.into()));
        }
    }

    let mut trace_filter = TraceFilter::new();
    if let Some(ref pattern) = args.trace_filter {
        trace_filter = trace_filter.add_rule(FilterRule::Pattern(pattern.clone()));
    }
    if let Some(ref category_str) = args.trace_category {
        let category = parse_category(category_str)?;
        trace_filter = trace_filter.add_rule(FilterRule::Category(vec![category]));
    }

    Ok(Arc::new(Tracer::new(trace_config, trace_filter)?))
}

fn parse_category(name: &str) -> Result<ApiCategory> {
    match name {
        "io" => Ok(ApiCategory::Io),
        "input" => Ok(ApiCategory::Input),
        "screen_buffer" => Ok(ApiCategory::ScreenBuffer),
        "window" => Ok(ApiCategory::Window),
        "history" => Ok(ApiCategory::History),
        "pseudo_console" => Ok(ApiCategory::PseudoConsole),
        "lifecycle" => Ok(ApiCategory::Lifecycle),
        _ => Err(anyhow!(
            "Unknown category: {}. Valid options: io, input, screen_buffer, window, history, pseudo_console, lifecycle",
            name
        )),
    }
}

/// Run the inspection against the attached console.
#[cfg(windows)]
pub fn run(args: CliArgs) -> Result<()> {
    use wincon_api::flags::OutputMode;
    use wincon_api::tracing::TracedConsole;
    use wincon_api::{history, lifecycle, ConsoleApi, Win32Console};

    let tracer = build_tracer(&args)?;
    let console = Win32Console::std()?;
    let mut console = TracedConsole::new(console, tracer);

    if let Some(ref title) = args.set_title {
        console.set_title(title)?;
    }

    if args.enable_vt {
        let mode = console.output_mode()? | OutputMode::VIRTUAL_TERMINAL_PROCESSING;
        console.set_output_mode(mode)?;
    }

    let info = console.screen_buffer_info()?;
    println!("Console state");
    println!("  Title: {}", console.title()?);
    println!("  Buffer size: {}x{}", info.size.x, info.size.y);
    println!(
        "  Cursor: ({}, {})",
        info.cursor_position.x, info.cursor_position.y
    );
    println!(
        "  Window: ({}, {})-({}, {}), {}x{} cells",
        info.window.left,
        info.window.top,
        info.window.right,
        info.window.bottom,
        info.window.width(),
        info.window.height()
    );
    println!("  Input mode: 0x{:X}", console.input_mode()?.bits());
    println!("  Output mode: 0x{:X}", console.output_mode()?.bits());
    println!("  Input code page: {}", lifecycle::input_code_page()?);
    println!("  Output code page: {}", lifecycle::output_code_page()?);
    println!("  Attached processes: {:?}", lifecycle::process_list()?);

    if let Some(ref exe) = args.history_exe {
        println!("History for {}:", exe);
        for command in history::commands(exe)? {
            println!("  {}", command);
        }
        println!("Aliases for {}:", exe);
        for (source, target) in history::aliases(exe)? {
            println!("  {}={}", source, target);
        }
    }

    if let Some(count) = args.watch_input {
        println!("Waiting for {} input events...", count);
        let mut seen = 0;
        while seen < count {
            for event in console.read_input(16)? {
                println!("  {:?}", event);
                seen += 1;
                if seen >= count {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// The console surface only exists on Windows hosts.
#[cfg(not(windows))]
pub fn run(_args: CliArgs) -> Result<()> {
    Err(anyhow!(
        "wincon inspects the Windows console API and requires a Windows host"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parse() {
        let args = CliArgs::parse_from([
            "wincon",
            "--set-title",
            "probe",
            "--trace-apis",
            "--trace-format",
            "json",
            "--trace-category",
            "window",
        ]);
        assert_eq!(args.set_title.as_deref(), Some("probe"));
        assert!(args.trace_apis);
        assert_eq!(args.trace_format, "json");
        assert_eq!(args.trace_category.as_deref(), Some("window"));
    }

    #[test]
    fn test_parse_category() {
        assert!(parse_category("screen_buffer").is_ok());
        assert!(parse_category("io").is_ok());
        assert!(parse_category("file_io").is_err());
    }

    #[test]
    fn test_build_tracer_disabled_by_default() {
        let args = CliArgs::parse_from(["wincon"]);
        let tracer = build_tracer(&args).unwrap();
        assert!(!tracer.is_enabled());
    }

    #[test]
    fn test_build_tracer_enabled() {
        let args = CliArgs::parse_from(["wincon", "--trace-apis", "--trace-filter", "Get*"]);
        let tracer = build_tracer(&args).unwrap();
        assert!(tracer.is_enabled());
    }
}
