use std::io::Write;

use anyhow::Result;
use portgrid::{Port, SearchState};
use serde_json::json;
use unicode_width::UnicodeWidthStr;

use super::{Column, OutputFormat};

const MISSING: &str = "-";
const COLUMN_GAP: &str = "  ";

/// Renders the visible ports of a search state after every input event.
#[derive(Debug, Clone)]
pub(crate) struct GridPrinter {
    format: OutputFormat,
    columns: Vec<Column>,
}

impl GridPrinter {
    pub(crate) fn new(format: OutputFormat, columns: Vec<Column>) -> Self {
        Self { format, columns }
    }

    pub(crate) fn print(&self, state: &SearchState, out: &mut impl Write) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Plain => self.format_plain(state),
            OutputFormat::Json => format_state_json(state)?,
        };
        writeln!(out, "{rendered}")?;
        Ok(())
    }

    /// Format the visible ports as an aligned grid preceded by a summary line.
    pub(crate) fn format_plain(&self, state: &SearchState) -> String {
        if state.is_empty() {
            return format!("No ports match '{}'", state.term());
        }

        let mut lines = vec![summary_line(state)];
        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|column| column.header().to_string())
            .collect();
        let rows: Vec<Vec<String>> = state
            .visible_ports()
            .map(|port| self.columns.iter().map(|column| cell(port, *column)).collect())
            .collect();

        let widths = column_widths(&headers, &rows);
        lines.push(align_row(&headers, &widths));
        lines.extend(rows.iter().map(|row| align_row(row, &widths)));
        lines.join("\n")
    }
}

fn summary_line(state: &SearchState) -> String {
    let total = state.catalog().len();
    let visible = state.visible_len();
    if state.term().is_empty() {
        format!("All {total} ports")
    } else {
        format!("{visible} of {total} ports match '{}'", state.term())
    }
}

fn cell(port: &Port, column: Column) -> String {
    let value = match column {
        Column::Name => Some(port.name.clone()),
        Column::Project => Some(port.project_name.clone()),
        Column::Repository => port.repository_url.clone(),
        Column::Release => port
            .release_latest
            .as_ref()
            .map(|release| release.version.clone()),
        Column::Stars => port.stargazers.map(|stars| stars.to_string()),
        Column::Url => port.url.clone(),
        Column::Logo => port.logo.clone(),
    };
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| MISSING.to_string())
}

fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            rows.iter()
                .filter_map(|row| row.get(idx))
                .map(|value| value.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or_default()
        })
        .collect()
}

fn align_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    let last = cells.len().saturating_sub(1);
    for (idx, value) in cells.iter().enumerate() {
        line.push_str(value);
        if idx < last {
            let width = widths.get(idx).copied().unwrap_or_default();
            let padding = width.saturating_sub(value.width());
            line.extend(std::iter::repeat_n(' ', padding));
            line.push_str(COLUMN_GAP);
        }
    }
    line
}

/// Format the state as a JSON document with every field of the visible ports.
pub(crate) fn format_state_json(state: &SearchState) -> Result<String> {
    let ports: Vec<&Port> = state.visible_ports().collect();
    let payload = json!({
        "term": state.term(),
        "count": state.visible_len(),
        "total": state.catalog().len(),
        "ports": ports,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}
