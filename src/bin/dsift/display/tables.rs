use std::io::{self, Write};

use dock_sift::RunSummary;

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_FILE_ROWS: usize = 15;

pub fn print_run_summary(summary: &RunSummary) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Files scanned", format!("{}", summary.files)),
        ("Molecules", format!("{}", summary.molecules)),
        ("Flagged molecules", format!("{}", summary.flagged)),
        ("Clash pairs", format!("{}", summary.pairs)),
    ];

    print_kv_table(&mut out, "Clash Scan Summary", &rows);
}

pub fn print_summary(title: &str, rows: &[(&str, String)]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    print_kv_table(&mut out, title, rows);
}

/// Per-file flagged counts with a share bar, for multi-file scans.
pub fn print_flagged_by_file(data: &[(String, usize)], total_flagged: usize) {
    if data.is_empty() || total_flagged == 0 {
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();

    let name_w = 14usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let share_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = share_w.saturating_sub(8).min(20);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate("Flagged Molecules by File", SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{name_line}┬{count_line}┬{share_line}┐",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        share_line = "─".repeat(share_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<share_w$} │",
        INDENT,
        "File",
        "Flagged",
        "Share",
        name_w = name_w,
        count_w = count_w,
        share_w = share_w
    );
    let _ = writeln!(
        out,
        "{}├{name_line}┼{count_line}┼{share_line}┤",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        share_line = "─".repeat(share_w + 2)
    );

    for (name, count) in data.iter().take(MAX_FILE_ROWS) {
        let pct = (*count as f64 / total_flagged as f64) * 100.0;
        let bar = make_bar(pct, max_bar_width);
        let name_s = truncate(name, name_w);
        let share_cell = format!("{}  {:>5.1}%", bar, pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<share_w$} │",
            INDENT,
            name_s,
            count,
            share_cell,
            name_w = name_w,
            count_w = count_w,
            share_w = share_w
        );
    }

    if data.len() > MAX_FILE_ROWS {
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<share_w$} │",
            INDENT,
            "...",
            "...",
            format!("({} more files)", data.len() - MAX_FILE_ROWS),
            name_w = name_w,
            count_w = count_w,
            share_w = share_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{name_line}┴{count_line}┴{share_line}┘",
        INDENT,
        name_line = "─".repeat(name_w + 2),
        count_line = "─".repeat(count_w + 2),
        share_line = "─".repeat(share_w + 2)
    );
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 18usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT,
        "Metric",
        "Value",
        key_w = key_w,
        val_w = val_w
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
