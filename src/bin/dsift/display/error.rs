use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_mol2_hints(err);
        collector.collect_tables_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_mol2_hints(&mut self, err: &Error) {
        use dock_sift::Mol2Error;

        let Some(mol2_err) = err.downcast_ref::<Mol2Error>() else {
            return;
        };

        self.mark_typed();
        self.add_mol2_hints(mol2_err);
    }

    fn add_mol2_hints(&mut self, err: &dock_sift::Mol2Error) {
        use dock_sift::Mol2Error;

        match err {
            Mol2Error::Io { source } => {
                self.collect_std_io_hints(source);
            }

            Mol2Error::Parse { line, .. } => {
                self.add(format!("Parser encountered an issue near line {}", line));
                self.add("Inspect the file around that line for malformed records");
                self.add("Atom lines need at least an id, a name, and x y z fields");
                self.add("Substructure sections must end with a '0 ROOT' line");
            }

            Mol2Error::MissingDescriptor { label, .. } => {
                self.add(format!(
                    "No '##########  {}:' header found for that molecule",
                    label
                ));
                self.add("Check the label spelling against the file's headers");
                self.add("Use --on-missing blank to emit empty cells instead");
                self.add("Use --on-missing drop to skip molecules lacking it");
            }

            Mol2Error::MissingName { .. } => {
                self.add("Every @<TRIPOS>MOLECULE section needs a name line");
                self.add("The file may be truncated mid-molecule");
            }

            Mol2Error::MissingFrequency { label, .. } => {
                self.add(format!(
                    "Each fragment needs a '{}' header before the next record",
                    label
                ));
                self.add("Regenerate the library with frequency annotations");
            }

            Mol2Error::Frequency { .. } => {
                self.add("Frequency values must be plain unsigned integers");
                self.add("Inspect the 'FREQ:' line near the reported position");
            }
        }
    }

    fn collect_tables_hints(&mut self, err: &Error) {
        use dock_sift::tables::Error as TablesError;

        let Some(tables_err) = err.downcast_ref::<TablesError>() else {
            return;
        };

        self.mark_typed();

        match tables_err {
            TablesError::Mol2(inner) => {
                self.add_mol2_hints(inner);
            }

            TablesError::Csv(_) => {
                self.add("Writing the CSV table failed");
                self.add("Check the output path and available disk space");
            }

            TablesError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            TablesError::UnknownNameColumn(_) => {
                self.add("--name-column must match an extracted descriptor label");
                self.add("Add the column to your --descriptors file");
                self.add("Or drop the flag to use the default Name_DOCK");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("Input file or directory not found");
                self.add("Check the path against the run directory's contents");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied on the file");
                self.add("Check ownership and mode with `ls -la`");
                self.add("Outputs copied from a cluster may need their modes fixed");
            }

            ErrorKind::AlreadyExists => {
                self.add("The output path already exists");
                self.add("Pick another path or remove the existing file first");
            }

            ErrorKind::InvalidData => {
                self.add("The file holds bytes that are not valid text");
                self.add("DOCK mol2 output is plain text; check for truncation");
            }

            ErrorKind::UnexpectedEof => {
                self.add("The file ended in the middle of a record");
                self.add("An interrupted docking run leaves truncated output");
            }

            ErrorKind::WriteZero => {
                self.add("The write could not make progress (disk full?)");
                self.add("Check free space where the artifacts are written");
            }

            ErrorKind::BrokenPipe => {
                self.add("Output consumer closed the pipe early");
                self.add("Expected when piping to commands like `head`");
            }

            _ => {
                self.add("The operation failed at the I/O layer");
                self.add("Check the path, permissions, and free space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check the input path");
            self.add("Run from the directory holding the docking outputs");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Inspect the file's mode with `ls -la`");
            self.add("Inputs need read access, artifact paths write access");
            return;
        }

        if msg.contains("utf-8") || msg.contains("utf8") {
            self.add("Input must be plain text");
            self.add("DOCK writes ASCII mol2; the file may be binary or corrupt");
            return;
        }

        if msg.contains("empty") && !self.has_typed_hints {
            self.add("The input looks empty");
            self.add("Verify the input contains mol2 molecule records");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}
