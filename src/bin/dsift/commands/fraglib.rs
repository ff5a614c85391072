use std::path::Path;

use anyhow::{Context, Result};

use dock_sift::LineStream;
use dock_sift::fraglib::{self, Fragment};

use crate::cli::FraglibArgs;
use crate::display::{Context as DisplayContext, print_summary};
use crate::io::{create_output, open_input};
use crate::util::path::with_stem_suffix;

pub fn run_fraglib(args: FraglibArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = ctx.progress(args.files.len());

    let mut total_seen = 0usize;
    let mut total_kept = 0usize;

    for path in &args.files {
        let label = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        progress.begin(&label);

        let (seen, kept) = filter_file(path, &args)?;

        progress.complete(&label, &[format!("kept {} of {} fragments", kept, seen)]);
        total_seen += seen;
        total_kept += kept;
    }

    progress.finish();

    if ctx.interactive {
        print_summary(
            "Fraglib Summary",
            &[
                ("Libraries", args.files.len().to_string()),
                ("Fragments", total_seen.to_string()),
                ("Kept", total_kept.to_string()),
                ("Frequency cutoff", format!("> {}", args.cutoff)),
            ],
        );
    }

    Ok(())
}

fn filter_file(path: &Path, args: &FraglibArgs) -> Result<(usize, usize)> {
    let reader = open_input(path)?;
    let stream = LineStream::from_reader(reader)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    let all = fraglib::fragments(&stream)
        .with_context(|| format!("Failed to parse '{}'", path.display()))?;
    let kept: Vec<Fragment> = all
        .iter()
        .copied()
        .filter(|f| f.frequency > args.cutoff)
        .collect();

    let out_path = with_stem_suffix(path, &args.suffix);
    let mut writer = create_output(&out_path)?;
    for fragment in &kept {
        stream
            .write_segment(fragment.segment, &mut writer)
            .with_context(|| format!("Failed to write '{}'", out_path.display()))?;
    }

    Ok((all.len(), kept.len()))
}
