use std::path::PathBuf;

use anyhow::{Context, Result};

use dock_sift::LineStream;
use dock_sift::mol2::{self, molecule};

use crate::cli::SplitArgs;
use crate::display::{Context as DisplayContext, print_summary};
use crate::io::{create_output, open_input};
use crate::util::path::sanitize_file_name;

pub fn run_split(args: SplitArgs, ctx: DisplayContext) -> Result<()> {
    let label = args
        .input
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();

    let mut progress = ctx.progress(1);
    progress.begin(&label);

    let reader = open_input(&args.input)?;
    let stream = LineStream::from_reader(reader)
        .with_context(|| format!("Failed to read '{}'", args.input.display()))?;

    let segments = mol2::segment::by_end_sentinel(&stream, |l| l.contains(mol2::END_OF_MOLECULE));

    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let mut written = 0usize;
    for (index, segment) in segments.iter().enumerate() {
        let name = molecule::section_name(&stream, *segment)
            .map(|n| sanitize_file_name(&n))
            .unwrap_or_else(|| format!("mol_{}", index + 1));

        let file_name = format!("{}.mol2", name);
        let path = match &args.out_dir {
            Some(dir) => dir.join(&file_name),
            None => PathBuf::from(&file_name),
        };

        let mut writer = create_output(&path)?;
        stream
            .write_segment(*segment, &mut writer)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        written += 1;
    }

    progress.complete(&label, &[format!("{} molecules written", written)]);
    progress.finish();

    if ctx.interactive {
        let out_dir = args
            .out_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| ".".to_string());

        print_summary(
            "Split Summary",
            &[
                ("Input", args.input.display().to_string()),
                ("Molecules", written.to_string()),
                ("Output dir", out_dir),
            ],
        );
    }

    Ok(())
}
