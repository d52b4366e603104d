//! Crashlens - Entry Point

use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

use crashlens::state::ThreadSelection;
use crashlens::view_state::{resolve_display, DisplayToggles};

/// Crashlens - resolve what a crash report should display
#[derive(Parser, Debug)]
#[command(name = "crashlens")]
#[command(version)]
#[command(about = "Resolves thread selection, stack view, and display capabilities for a crash-report event")]
pub struct Args {
    /// Path to event JSON document (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Pin the selection to a specific thread id instead of the default policy
    #[arg(short, long)]
    pub thread: Option<i64>,

    /// Show unprocessed frames (overrides every other view toggle)
    #[arg(long)]
    pub raw: bool,

    /// Force the full frame list over the app-only heuristic
    #[arg(long)]
    pub full: bool,

    /// Prefer the minified stacktrace variant
    #[arg(long)]
    pub minified: bool,

    /// Order frames newest first
    #[arg(long, conflicts_with = "oldest_first")]
    pub newest_first: bool,

    /// Order frames oldest first
    #[arg(long)]
    pub oldest_first: bool,

    /// Emit the resolution as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Ordering override, `None` when neither flag was passed.
    fn newest_first_override(&self) -> Option<bool> {
        if self.newest_first {
            Some(true)
        } else if self.oldest_first {
            Some(false)
        } else {
            None
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = crashlens::config::load_config_with_precedence(args.config.clone())?;
        let merged = crashlens::config::merge_config(config_file);
        let with_env = crashlens::config::apply_env_overrides(merged);
        crashlens::config::apply_cli_overrides(with_env, args.newest_first_override())
    };

    crashlens::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let input = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let event = crashlens::parser::parse_event(&input)?;

    let selection = match args.thread {
        Some(id) => ThreadSelection::pinned(id),
        None => ThreadSelection::Best,
    };
    let toggles = DisplayToggles {
        raw: args.raw,
        full_stack_trace: args.full,
        minified: args.minified,
    };

    let resolved = resolve_display(&event, &selection, &toggles, config.newest_first);

    if args.json {
        let caps = resolved.capabilities;
        let output = serde_json::json!({
            "activeThreadId": resolved.active_thread_id.map(|id| id.get()),
            "source": resolved.source.as_str(),
            "stackView": resolved.stack_view.map(|view| view.as_str()),
            "newestFirst": resolved.newest_first,
            "platform": resolved.platform.as_str(),
            "stackTraceNotFound": resolved.stack_trace_not_found(),
            "capabilities": {
                "minified": caps.minified_exists,
                "verboseFunctionNames": caps.verbose_function_names_exist,
                "absolutePaths": caps.absolute_paths_exist,
                "absoluteAddresses": caps.absolute_addresses_exist,
                "appOnlyFrames": caps.app_only_frames_exist,
                "newestFirst": caps.newest_first_eligible,
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_summary(&resolved);
    }

    Ok(())
}

fn print_summary(resolved: &crashlens::view_state::ResolvedDisplay) {
    match resolved.active_thread_id {
        Some(id) => println!("active thread: {id}"),
        None => println!("active thread: none"),
    }
    println!("source:        {}", resolved.source.as_str());
    match resolved.stack_view {
        Some(view) => println!("stack view:    {}", view.as_str()),
        None => println!("stack view:    n/a"),
    }
    println!("platform:      {}", resolved.platform.as_str());
    println!(
        "ordering:      {}",
        if resolved.newest_first {
            "newest first"
        } else {
            "oldest first"
        }
    );
    if resolved.stack_trace_not_found() {
        println!("stack trace not found");
    }

    let caps = resolved.capabilities;
    println!("capabilities:");
    println!("  minified:               {}", caps.minified_exists);
    println!("  verbose function names: {}", caps.verbose_function_names_exist);
    println!("  absolute paths:         {}", caps.absolute_paths_exist);
    println!("  absolute addresses:     {}", caps.absolute_addresses_exist);
    println!("  app-only frames:        {}", caps.app_only_frames_exist);
    println!("  newest-first toggle:    {}", caps.newest_first_eligible);
}
