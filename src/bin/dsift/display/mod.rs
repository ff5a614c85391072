mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::Progress;
pub use tables::{print_flagged_by_file, print_run_summary, print_summary};

/// How this invocation talks to the terminal.
///
/// Interactive runs get the banner, a spinner, and summary tables on stderr;
/// piped or `--quiet` runs emit only the data outputs of the command.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self { interactive: false }
        } else {
            self
        }
    }

    /// Progress reporter sized for a batch of `total` input files.
    pub fn progress(&self, total: usize) -> Progress {
        Progress::new(self.interactive, total)
    }
}
