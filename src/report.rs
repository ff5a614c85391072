//! HTML reports for docking runs.
//!
//! One row per docked pose: rank, name, selected header descriptors, and
//! the pose's 2-D depiction when an image directory is supplied. Depictions
//! are rendered out of band (the DOCK convention is `zzz.figures/<rank>.png`
//! with 1-based ranks); the report only references them, and degrades to a
//! text-only table when no directory is given. Inline CSS, no external
//! assets.

use crate::mol2::{DescriptorSet, LineStream, OnMissing};
use crate::tables::{self, DescriptorTable};
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::Path;

/// Descriptor columns shown by default: the DOCK6 score summary plus SMILES.
pub fn default_descriptors() -> DescriptorSet {
    DescriptorSet::new([
        "TotalScore_(FPS+DCE)",
        "Continuous_Score",
        "Footprint_Similarity_Score",
        "SMILES",
    ])
}

/// One pose row of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// 1-based rank, matching the pose's position in the input file.
    pub rank: usize,
    pub name: String,
    /// One value per report descriptor, in declared order.
    pub values: Vec<String>,
    /// Relative or absolute path of the 2-D depiction, when available.
    pub image: Option<String>,
}

/// Extracts report rows from a docking output stream.
///
/// Pose names come from the `Name_DOCK` column; descriptor gaps render as
/// blank cells rather than aborting the report. Image references follow the
/// `<dir>/<rank>.png` convention.
pub fn build_rows(
    stream: &LineStream,
    descriptors: &DescriptorSet,
    images: Option<&Path>,
) -> Result<Vec<ReportRow>, tables::Error> {
    let mut labels = vec![tables::DEFAULT_NAME_COLUMN.to_string()];
    labels.extend(descriptors.labels().iter().cloned());
    let set = DescriptorSet::new(labels);

    let table = DescriptorTable::build(stream, &set, OnMissing::Blank)?;

    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let rank = index + 1;
            ReportRow {
                rank,
                name: row.values[0].clone(),
                values: row.values[1..].to_vec(),
                image: images.map(|dir| format!("{}/{}.png", dir.display(), rank)),
            }
        })
        .collect();

    Ok(rows)
}

/// HTML report writer.
pub struct ReportGenerator {
    pub title: String,
    /// Input file shown in the report header.
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

impl ReportGenerator {
    pub fn new(title: &str, source: &str) -> Self {
        Self {
            title: title.to_string(),
            source: source.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Writes the complete document.
    pub fn generate<W: Write>(
        &self,
        writer: &mut W,
        labels: &[String],
        rows: &[ReportRow],
    ) -> std::io::Result<()> {
        self.write_header(writer)?;
        self.write_summary(writer, rows.len())?;
        self.write_pose_table(writer, labels, rows)?;
        self.write_footer(writer)
    }

    fn write_header<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write!(
            writer,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
    <style>
        body {{
            font-family: -apple-system, 'Segoe UI', Roboto, Helvetica, sans-serif;
            margin: 0;
            color: #22303c;
            background: #f4f6f8;
        }}

        .page {{
            max-width: 1100px;
            margin: 0 auto;
            padding: 32px 20px;
        }}

        .header {{
            border-bottom: 3px solid #3a6ea5;
            padding-bottom: 14px;
            margin-bottom: 28px;
        }}

        .header h1 {{
            font-size: 26px;
            margin: 0 0 6px 0;
        }}

        .header .meta {{
            color: #5f6b76;
            font-size: 15px;
        }}

        .summary {{
            background: white;
            border: 1px solid #d7dee5;
            border-radius: 6px;
            padding: 14px 18px;
            margin-bottom: 24px;
            font-size: 15px;
        }}

        table {{
            width: 100%;
            border-collapse: collapse;
            background: white;
            border: 1px solid #d7dee5;
        }}

        th, td {{
            padding: 10px 12px;
            text-align: left;
            border-bottom: 1px solid #d7dee5;
            font-size: 14px;
        }}

        th {{
            background: #eef2f6;
            text-transform: uppercase;
            font-size: 12px;
            letter-spacing: 0.4px;
            color: #5f6b76;
        }}

        tr:nth-child(even) td {{
            background: #fafbfc;
        }}

        td.rank {{
            font-weight: 600;
            white-space: nowrap;
        }}

        td.name {{
            font-family: monospace;
            font-size: 13px;
        }}

        td img {{
            max-width: 220px;
            max-height: 160px;
            display: block;
        }}

        .empty {{
            color: #5f6b76;
            font-style: italic;
        }}

        .footer {{
            margin-top: 28px;
            padding-top: 12px;
            border-top: 1px solid #d7dee5;
            color: #5f6b76;
            font-size: 13px;
            text-align: center;
        }}
    </style>
</head>
<body>
    <div class="page">
        <div class="header">
            <h1>{}</h1>
            <div class="meta">Source: <strong>{}</strong> | Generated: {}</div>
        </div>
"#,
            escape(&self.title),
            escape(&self.title),
            escape(&self.source),
            self.timestamp.format("%Y-%m-%d %H:%M UTC")
        )
    }

    fn write_summary<W: Write>(&self, writer: &mut W, poses: usize) -> std::io::Result<()> {
        write!(
            writer,
            r#"        <div class="summary">Poses in this report: <strong>{}</strong></div>
"#,
            poses
        )
    }

    fn write_pose_table<W: Write>(
        &self,
        writer: &mut W,
        labels: &[String],
        rows: &[ReportRow],
    ) -> std::io::Result<()> {
        if rows.is_empty() {
            return write!(
                writer,
                r#"        <p class="empty">No molecules found in the input file.</p>
"#
            );
        }

        let with_images = rows.iter().any(|row| row.image.is_some());

        write!(
            writer,
            r#"        <table>
            <thead>
                <tr>
                    <th>Rank</th>
                    <th>Name</th>
"#
        )?;
        for label in labels {
            writeln!(writer, "                    <th>{}</th>", escape(label))?;
        }
        if with_images {
            writeln!(writer, "                    <th>Structure</th>")?;
        }
        write!(
            writer,
            r#"                </tr>
            </thead>
            <tbody>
"#
        )?;

        for row in rows {
            writeln!(writer, "                <tr>")?;
            writeln!(writer, "                    <td class=\"rank\">#{}</td>", row.rank)?;
            writeln!(
                writer,
                "                    <td class=\"name\">{}</td>",
                escape(&row.name)
            )?;
            for value in &row.values {
                writeln!(writer, "                    <td>{}</td>", escape(value))?;
            }
            if with_images {
                match &row.image {
                    Some(path) => writeln!(
                        writer,
                        "                    <td><img src=\"{}\" alt=\"2-D structure of {}\"></td>",
                        escape(path),
                        escape(&row.name)
                    )?,
                    None => writeln!(writer, "                    <td></td>")?,
                }
            }
            writeln!(writer, "                </tr>")?;
        }

        write!(
            writer,
            r#"            </tbody>
        </table>
"#
        )
    }

    fn write_footer<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write!(
            writer,
            r#"        <div class="footer">Generated by dock-sift</div>
    </div>
</body>
</html>
"#
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
