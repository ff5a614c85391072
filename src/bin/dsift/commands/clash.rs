use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use dock_sift::LineStream;
use dock_sift::clash::{FileSummary, RunSummary, find_clashes};
use dock_sift::mol2::molecule::read_molecules;

use crate::cli::ClashArgs;
use crate::display::{Context as DisplayContext, print_flagged_by_file, print_run_summary};
use crate::io::{discover_restart_files, open_input};

pub fn run_clash(args: ClashArgs, ctx: DisplayContext) -> Result<()> {
    let files = resolve_files(&args)?;

    let mut progress = ctx.progress(files.len());
    let mut run = RunSummary::default();
    let mut flagged_by_file: Vec<(String, usize)> = Vec::new();

    for path in &files {
        let label = file_label(path);
        progress.begin(&label);

        let summary = scan_file(path, args.cutoff)?;

        progress.complete(
            &label,
            &[format!(
                "{} molecules, {} flagged",
                summary.molecules, summary.flagged
            )],
        );

        flagged_by_file.push((label, summary.flagged));
        run.absorb(summary);
    }

    println!("Final total of bad molecules: {}", run.flagged);

    progress.finish();

    if ctx.interactive {
        print_run_summary(&run);
        if files.len() > 1 {
            print_flagged_by_file(&flagged_by_file, run.flagged);
        }
    }

    Ok(())
}

fn resolve_files(args: &ClashArgs) -> Result<Vec<PathBuf>> {
    if let Some(dir) = &args.restart_dir {
        if !args.files.is_empty() {
            bail!("Pass either FILE arguments or --restart-dir, not both.");
        }
        let files = discover_restart_files(dir)?;
        if files.is_empty() {
            bail!("No restart<N> files found in '{}'.", dir.display());
        }
        return Ok(files);
    }

    if args.files.is_empty() {
        bail!(
            "No input files specified.\n\nUsage: dsift clash <FILE>... or dsift clash --restart-dir <DIR>."
        );
    }

    Ok(args.files.clone())
}

/// Scans one file, printing its clash report to stdout in the growth-run
/// format: the file path, one line per close pair, then the file total.
fn scan_file(path: &Path, cutoff: f64) -> Result<FileSummary> {
    let reader = open_input(path)?;
    let stream = LineStream::from_reader(reader)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let molecules = read_molecules(&stream)
        .with_context(|| format!("Failed to parse '{}'", path.display()))?;

    println!("{}", path.display());

    let mut summary = FileSummary::default();
    for molecule in &molecules {
        let clashes = find_clashes(&molecule.atoms, cutoff);
        for clash in &clashes {
            println!("{}", clash.report_line(&molecule.name));
        }
        summary.record(&clashes);
    }

    println!("Total bad molecules for this file: {}", summary.flagged);

    Ok(summary)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
