//! CLI entry point for espalier

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::sync::{Arc, Mutex};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use espalier::{
    Collector, GlyphSet, PrinterConfig, TreePrinter, WalkReport, Walker, print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Branch glyph vocabulary
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Charset {
    /// Box-drawing connectors
    #[default]
    Unicode,
    /// Plain-ASCII connectors
    Ascii,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "espalier")]
#[command(about = "A tree-style directory renderer with pluggable branch glyphs")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Branch glyph vocabulary
    #[arg(long, value_enum, default_value_t = Charset::Unicode)]
    charset: Charset,

    /// Control color output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Emit visited entries as JSON records instead of a rendered tree
    #[arg(long)]
    json: bool,

    /// Suppress the "N directories, M files" trailer
    #[arg(long)]
    no_summary: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();

    if !args.path.exists() {
        eprintln!(
            "espalier: cannot access '{}': No such file or directory",
            args.path.display()
        );
        process::exit(1);
    }

    let glyphs = match args.charset {
        Charset::Unicode => GlyphSet::unicode(),
        Charset::Ascii => GlyphSet::ascii(),
    };
    let walker = Walker::with_decorator(glyphs);

    let result = if args.json {
        let collector = Arc::new(Mutex::new(Collector::new()));
        walker.add_listener(collector.clone());

        let report = walk_or_exit(&walker, &args.path);
        report_failures(&report);

        let collector = collector.lock().unwrap_or_else(|poison| poison.into_inner());
        print_json(collector.records())
    } else {
        let printer = Arc::new(Mutex::new(TreePrinter::new(PrinterConfig {
            use_color: should_use_color(args.color),
            summary: !args.no_summary,
        })));
        walker.add_listener(printer.clone());

        let report = walk_or_exit(&walker, &args.path);
        report_failures(&report);

        let mut printer = printer.lock().unwrap_or_else(|poison| poison.into_inner());
        printer.summary(&report)
    };

    if let Err(e) = result {
        eprintln!("espalier: error writing output: {}", e);
        process::exit(1);
    }
}

fn walk_or_exit(walker: &Walker, path: &std::path::Path) -> WalkReport {
    match walker.walk(path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("espalier: {}", e);
            process::exit(1);
        }
    }
}

/// Recovered listing failures go to stderr; the traversal itself completed,
/// so they do not change the exit code.
fn report_failures(report: &WalkReport) {
    for failure in &report.failures {
        eprintln!("espalier: {}", failure);
    }
}
