use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

pub struct FileSpinner {
    bar: Option<ProgressBar>,
    start: Instant,
    current: usize,
    total: usize,
    file_start: Instant,
}

impl FileSpinner {
    pub fn new(total: usize) -> Self {
        let now = Instant::now();
        Self {
            bar: None,
            start: now,
            current: 0,
            total,
            file_start: now,
        }
    }

    pub fn begin(&mut self, description: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }

        self.current += 1;
        self.file_start = Instant::now();

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .expect("invalid template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        bar.set_message(format!(
            "[{}/{}] {}...",
            self.current, self.total, description
        ));

        self.bar = Some(bar);
    }

    pub fn complete(&mut self, description: &str, notes: &[String]) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }

        let elapsed = self.file_start.elapsed();
        let mut stderr = io::stderr().lock();

        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>5.1}s",
            description,
            elapsed.as_secs_f64()
        );

        for note in notes {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {}", note);
        }
    }

    pub fn finish(mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }

        print_footer(self.start.elapsed());
    }
}

fn print_footer(elapsed: Duration) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "  \x1b[2m╺━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╸\x1b[0m"
    );
    let _ = writeln!(stderr);
    let _ = writeln!(
        stderr,
        "  \x1b[32m✓\x1b[0m Sift complete {:>36}",
        format!("Total: {:.2}s", elapsed.as_secs_f64())
    );
    let _ = writeln!(stderr);
}

pub struct SilentProgress {}

impl SilentProgress {
    pub fn new() -> Self {
        Self {}
    }

    pub fn begin(&mut self, _description: &str) {}

    pub fn complete(&mut self, _description: &str, _notes: &[String]) {}
}

impl Default for SilentProgress {
    fn default() -> Self {
        Self::new()
    }
}

pub enum Progress {
    Interactive(FileSpinner),
    Silent(SilentProgress),
}

impl Progress {
    pub fn new(interactive: bool, total: usize) -> Self {
        if interactive {
            Self::Interactive(FileSpinner::new(total))
        } else {
            Self::Silent(SilentProgress::new())
        }
    }

    pub fn begin(&mut self, description: &str) {
        match self {
            Self::Interactive(s) => s.begin(description),
            Self::Silent(s) => s.begin(description),
        }
    }

    pub fn complete(&mut self, description: &str, notes: &[String]) {
        match self {
            Self::Interactive(s) => s.complete(description, notes),
            Self::Silent(s) => s.complete(description, notes),
        }
    }

    pub fn finish(self) {
        match self {
            Self::Interactive(s) => s.finish(),
            Self::Silent(_) => {}
        }
    }
}
