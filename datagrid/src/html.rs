//! Writes a row tree as an HTML `<table>`.
//!
//! Header segments go into `<thead>`, data segments into `<tbody>`, and nested child rows turn
//! into `rowspan` attributes.

use alloc::string::String;
use core::fmt::Write;

use crate::{CellContext, FlatCell, FlatRow, Renderer, Row, Segment, flatten, split_segments};

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders `rows` with the default cell renderer.
pub fn render_table<M>(rows: &[Row<M>], meta: &M) -> String {
    render_table_with(rows, meta, &Renderer::Default)
}

/// Renders `rows`, using `fallback` for cells with neither a cell nor a row renderer.
pub fn render_table_with<M>(rows: &[Row<M>], meta: &M, fallback: &Renderer<M>) -> String {
    let flat = flatten(rows);
    let mut out = String::from("<table>");
    for segment in split_segments(&flat) {
        write_segment(&mut out, segment, meta, fallback);
    }
    out.push_str("</table>");
    out
}

fn write_segment<M>(
    out: &mut String,
    segment: Segment<'_, FlatRow<'_, M>>,
    meta: &M,
    fallback: &Renderer<M>,
) {
    let section = if segment.is_header { "thead" } else { "tbody" };
    let _ = write!(out, "<{section}>");
    for row in segment.rows {
        out.push_str("<tr>");
        for cell in &row.cells {
            write_cell(out, cell, meta, fallback);
        }
        out.push_str("</tr>");
    }
    let _ = write!(out, "</{section}>");
}

fn write_cell<M>(out: &mut String, fc: &FlatCell<'_, M>, meta: &M, fallback: &Renderer<M>) {
    let tag = if fc.is_header() { "th" } else { "td" };
    let _ = write!(out, "<{tag}");
    if fc.is_header() {
        let scope = if fc.is_header_row { "col" } else { "row" };
        let _ = write!(out, " scope=\"{scope}\"");
    }
    if fc.row_span > 1 {
        let _ = write!(out, " rowspan=\"{}\"", fc.row_span);
    }
    if fc.cell.column_span > 1 {
        let _ = write!(out, " colspan=\"{}\"", fc.cell.column_span);
    }
    if let Some(sort) = fc.cell.prop("aria-sort").and_then(|v| v.as_str()) {
        let _ = write!(out, " aria-sort=\"{}\"", escape(sort));
    }
    out.push('>');

    let children = fc.cell.content.resolve(meta);
    let cx = CellContext {
        row_id: fc.row_id(),
        cells: &fc.row.cells,
        cell_index: fc.cell_index,
        meta,
        children: &children,
    };
    let text = fc.renderer().unwrap_or(fallback).render(&cx);
    out.push_str(&escape(&text));
    let _ = write!(out, "</{tag}>");
}
