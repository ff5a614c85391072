use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    Ok(BufReader::new(file))
}

pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Discovers the `restart<N>` files of a DOCK run directory, ordered by N.
///
/// DOCK anchor-and-grow runs write `restart0.mol2`, `restart1.mol2`, ... as
/// they go; scanning them in numeric order keeps the report aligned with
/// the run. Lexicographic order would put `restart10` before `restart2`.
pub fn discover_restart_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut numbered: Vec<(u64, PathBuf)> = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(digits) = stem.strip_prefix("restart") else {
            continue;
        };
        let Ok(number) = digits.parse::<u64>() else {
            continue;
        };
        numbered.push((number, path));
    }

    numbered.sort();
    Ok(numbered.into_iter().map(|(_, path)| path).collect())
}
