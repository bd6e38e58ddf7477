use std::fmt::Write;

use crate::error::{HuffmanError, Result};
use crate::frequency::{FrequencyTable, Symbol};
use crate::huffman::{CodeTable, Node};
use crate::metrics::Metrics;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub symbol: Symbol,
    pub count: u64,
    pub total: u64,
    pub frequency: f64,
    pub code: String,
    pub length: usize,
}

impl ReportRow {
    /// Frequency as the fraction `count/total`, e.g. `5/11`.
    pub fn frequency_display(&self) -> String {
        format!("{}/{}", self.count, self.total)
    }
}

/// Rows sorted by code length, ties kept in first-occurrence order. Every
/// counted symbol must have a code.
pub fn order_rows(codes: &CodeTable, frequencies: &FrequencyTable) -> Result<Vec<ReportRow>> {
    let total = frequencies.total();
    let mut rows = frequencies
        .iter()
        .map(|entry| {
            let code = codes
                .get(&entry.symbol)
                .ok_or(HuffmanError::MissingCode(entry.symbol))?;
            Ok(ReportRow {
                symbol: entry.symbol,
                count: entry.count,
                total,
                frequency: entry.count as f64 / total as f64,
                code: code.clone(),
                length: code.len(),
            })
        })
        .collect::<Result<Vec<ReportRow>>>()?;

    // stable: equal lengths keep the iteration (first-occurrence) order
    rows.sort_by_key(|row| row.length);
    Ok(rows)
}

pub fn display_symbol(symbol: Symbol) -> String {
    match symbol {
        ' ' => String::from("' '"),
        '\n' => String::from("\\n"),
        '\r' => String::from("\\r"),
        '\t' => String::from("\\t"),
        c if c.is_control() => c.escape_default().to_string(),
        c => c.to_string(),
    }
}

const HEADERS: [&str; 4] = ["Symbol", "Frequency", "Code", "Length"];

pub fn render_table(rows: &[ReportRow]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                display_symbol(row.symbol),
                row.frequency_display(),
                row.code.clone(),
                row.length.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

pub fn render_summary(metrics: &Metrics, precision: usize) -> String {
    let pct_precision = precision.saturating_sub(2);
    format!(
        "Average Code Length: {:.p$} bits\n\
         Entropy:             {:.p$} bits/symbol\n\
         Efficiency:          {:.q$}%\n",
        metrics.average_length,
        metrics.entropy,
        metrics.efficiency * 100.0,
        p = precision,
        q = pct_precision,
    )
}

pub fn render_formulas() -> String {
    String::from(
        "Formulas:\n\
         1. Average Code Length (L) = Σ (frequency * code length)\n\
         2. Entropy (H) = Σ (frequency * log2(1 / frequency))\n\
         3. Efficiency (η) = H / L\n",
    )
}

/// Indented tree view. Internal nodes are labelled with their relative
/// frequency, leaves with their symbol.
pub fn render_tree(root: &Node, total: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", node_label(root, total));
    if let Node::Internal { left, right, .. } = root {
        render_children(&mut out, left, right, total, "");
    }
    out
}

fn render_children(out: &mut String, left: &Node, right: &Node, total: u64, indent: &str) {
    for (bit, child, last) in [('0', left, false), ('1', right, true)] {
        let branch = if last { "└─" } else { "├─" };
        let _ = writeln!(out, "{}{}{}─ {}", indent, branch, bit, node_label(child, total));
        if let Node::Internal { left, right, .. } = child {
            let next = format!("{}{}", indent, if last { "    " } else { "│   " });
            render_children(out, left, right, total, &next);
        }
    }
}

fn node_label(node: &Node, total: u64) -> String {
    match node {
        Node::Leaf { symbol, .. } => display_symbol(*symbol),
        Node::Internal { .. } => format!("({:.2})", node.frequency(total)),
    }
}
