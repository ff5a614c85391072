use anyhow::{Context, Result};

use dock_sift::LineStream;
use dock_sift::report::{self, ReportGenerator};

use crate::cli::ReportArgs;
use crate::display::{Context as DisplayContext, print_summary};
use crate::io::{create_output, open_input};

pub fn run_report(args: ReportArgs, ctx: DisplayContext) -> Result<()> {
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

    let descriptors = report::default_descriptors();
    let rows = report::build_rows(&stream, &descriptors, args.images.as_deref())
        .with_context(|| format!("Failed to extract poses from '{}'", args.input.display()))?;

    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("html"));

    let generator = ReportGenerator::new(&args.title, &args.input.display().to_string());
    let mut writer = create_output(&out_path)?;
    generator
        .generate(&mut writer, descriptors.labels(), &rows)
        .with_context(|| format!("Failed to write '{}'", out_path.display()))?;

    progress.complete(
        &label,
        &[
            format!("{} poses", rows.len()),
            format!("Report → {}", out_path.display()),
        ],
    );
    progress.finish();

    if ctx.interactive {
        let images = args
            .images
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());

        print_summary(
            "Report Summary",
            &[
                ("Input", args.input.display().to_string()),
                ("Poses", rows.len().to_string()),
                ("Images", images),
                ("Output", out_path.display().to_string()),
            ],
        );
    }

    Ok(())
}
