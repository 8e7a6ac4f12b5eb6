//! Console printer listener

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{EntryKind, TraversalEvent, TreeListener, WalkReport};

/// Configuration for console output.
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub use_color: bool,
    /// Print the `N directories, M files` trailer after the walk.
    pub summary: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            summary: true,
        }
    }
}

/// Listener that prints one `prefix + name` line per event, the way `tree`
/// does. Directories are colored bold blue; a directory whose children could
/// not be listed is annotated with ` [error opening dir]`.
pub struct TreePrinter {
    config: PrinterConfig,
    stdout: StandardStream,
}

impl TreePrinter {
    pub fn new(config: PrinterConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            config,
            stdout: StandardStream::stdout(choice),
        }
    }

    /// Print the summary trailer for a finished walk.
    pub fn summary(&mut self, report: &WalkReport) -> io::Result<()> {
        if !self.config.summary {
            return Ok(());
        }
        writeln!(self.stdout)?;
        writeln!(
            self.stdout,
            "{} directories, {} files",
            report.dirs, report.files
        )?;
        Ok(())
    }
}

impl TreeListener for TreePrinter {
    fn entry_found(
        &mut self,
        event: &TraversalEvent<'_>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        write!(self.stdout, "{}", event.prefix)?;

        // The root line shows the caller-supplied path, deeper lines just
        // the file name.
        let name = if event.prefix.depth() == 0 {
            event.entry.path.display().to_string()
        } else {
            event.entry.name()
        };

        if event.entry.kind == EntryKind::Dir {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(self.stdout, "{}", name)?;
            self.stdout.reset()?;
        } else {
            write!(self.stdout, "{}", name)?;
        }

        if event.listing_failed {
            write!(self.stdout, " [error opening dir]")?;
        }
        writeln!(self.stdout)?;
        Ok(())
    }
}
