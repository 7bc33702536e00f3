// Example: nested rows laid out on a CSS grid and flattened into a table.
use datagrid::{Cell, Row, flatten, grid_extent, html, layout, split_segments, validate};

fn main() {
    let rows: Vec<Row> = vec![
        Row::new(
            "header",
            vec![
                Cell::new("assay", "Assay").with_header_cell(true),
                Cell::new("target", "Target").with_header_cell(true),
                Cell::new("count", "Count").with_header_cell(true),
            ],
        )
        .with_header_row(true),
        Row::new("rna", vec![Cell::new("assay", "RNA-seq")]).with_child_rows(vec![
            Row::new("rna-bulk", vec![Cell::new("target", "bulk"), Cell::new("count", 12)]),
            Row::new("rna-single", vec![Cell::new("target", "single cell"), Cell::new("count", 4)]),
        ]),
        Row::new(
            "chip",
            vec![
                Cell::new("assay", "ChIP-seq"),
                Cell::new("target", "CTCF"),
                Cell::new("count", 7),
            ],
        ),
    ];

    let issues = validate(&rows, Some(3));
    println!("issues={issues:?}");

    let cells = layout(&rows);
    for p in &cells {
        println!(
            "{:<16} grid-row: {:<6} grid-column: {}",
            p.key(),
            p.rows.css(),
            p.columns.css()
        );
    }
    println!("extent={:?}", grid_extent(&cells));

    let flat = flatten(&rows);
    for segment in split_segments(&flat) {
        let ids: Vec<&str> = segment.rows.iter().map(|r| r.id).collect();
        println!("header={} rows={ids:?}", segment.is_header);
    }

    println!("{}", html::render_table(&rows, &()));
}
