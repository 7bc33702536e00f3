// Example: records sorted and paged by a controller, then rendered as HTML.
use std::collections::BTreeMap;

use datagrid::{Value, html};
use datagrid_adapter::{
    Column, Controller, DisplayContext, GridOptions, InitialSort, PageItem, SortDirection,
};

type Rec = BTreeMap<String, Value>;

fn record(accession: &str, assay: &str, size: i64) -> Rec {
    let mut r = Rec::new();
    r.insert("accession".into(), Value::from(accession));
    r.insert("assay".into(), Value::from(assay));
    r.insert("size".into(), Value::Int(size));
    r
}

fn main() {
    let records: Vec<Rec> = (0..23)
        .map(|i| {
            let assay = ["RNA-seq", "ATAC-seq", "ChIP-seq"][i % 3];
            record(&format!("ENCFF{i:03}"), assay, (i as i64 * 37) % 100)
        })
        .collect();

    let columns: Vec<Column<Rec>> = vec![
        Column::new("accession", "Accession"),
        Column::new("assay", "Assay")
            .with_value(|r: &Rec| r.get("assay").cloned().unwrap_or_default()),
        Column::new("size", "Size").with_display(|cx: &DisplayContext<'_, Rec, ()>| {
            let size = cx.source.get("size").cloned().unwrap_or_default();
            Value::from(format!("{size} MB"))
        }),
    ];

    let options = GridOptions::new()
        .with_key_prop("accession")
        .with_initial_sort(InitialSort::by("size", SortDirection::Desc));
    let mut controller = Controller::new(columns, options);

    let view = controller.view(&records, &());
    println!("total={} pages={}", view.total, view.page_count);
    println!("{}", html::render_table(&view.into_grid(), &()));

    controller.click_header("assay");
    controller.set_page_index(2);
    let view = controller.view(&records, &());
    let pager: Vec<String> = view
        .page_numbers()
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == view.page_index + 1 => format!("[{n}]"),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "...".into(),
        })
        .collect();
    println!("pager: {}", pager.join(" "));
    println!("{}", html::render_table(&view.into_grid(), &()));

    println!("state={:?}", controller.state());
}
