use std::fs;

use anyhow::{Context, Result};

use dock_sift::{DescriptorSet, DescriptorTable, LineStream};

use crate::cli::TablesArgs;
use crate::display::{Context as DisplayContext, print_summary};
use crate::io::{create_output, open_input};
use crate::util::path::positions_path;

pub fn run_tables(args: TablesArgs, ctx: DisplayContext) -> Result<()> {
    let label = args
        .input
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();

    let mut progress = ctx.progress(1);
    progress.begin(&label);

    let set = load_descriptors(&args)?;

    let reader = open_input(&args.input)?;
    let stream = LineStream::from_reader(reader)
        .with_context(|| format!("Failed to read '{}'", args.input.display()))?;

    let table = DescriptorTable::build(&stream, &set, args.on_missing.into()).with_context(|| {
        format!(
            "Failed to extract descriptors from '{}'",
            args.input.display()
        )
    })?;

    let csv_path = args
        .csv
        .clone()
        .unwrap_or_else(|| args.input.with_extension("csv"));
    let positions = args
        .positions
        .clone()
        .unwrap_or_else(|| positions_path(&args.input));

    let writer = create_output(&csv_path)?;
    table
        .write_csv(writer)
        .with_context(|| format!("Failed to write '{}'", csv_path.display()))?;

    let mut writer = create_output(&positions)?;
    table
        .write_positions(&mut writer, &args.name_column)
        .with_context(|| format!("Failed to write '{}'", positions.display()))?;

    progress.complete(
        &label,
        &[
            format!(
                "{} molecules, {} columns",
                table.row_count(),
                set.field_count()
            ),
            format!("CSV → {}", csv_path.display()),
            format!("Positions → {}", positions.display()),
        ],
    );
    progress.finish();

    if ctx.interactive {
        print_summary(
            "Tables Summary",
            &[
                ("Input", args.input.display().to_string()),
                ("Molecules", table.row_count().to_string()),
                ("Columns", set.field_count().to_string()),
                ("CSV", csv_path.display().to_string()),
                ("Positions", positions.display().to_string()),
            ],
        );
    }

    Ok(())
}

fn load_descriptors(args: &TablesArgs) -> Result<DescriptorSet> {
    let Some(path) = &args.descriptors else {
        return Ok(DescriptorSet::dock6());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor file: {}", path.display()))?;
    DescriptorSet::from_toml_str(&text)
        .with_context(|| format!("Failed to parse descriptor file: {}", path.display()))
}
