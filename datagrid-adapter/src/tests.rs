use crate::*;

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use datagrid::{Content, Renderer, Row, Value, flatten, html, render_cell, split_segments};

type Rec = BTreeMap<String, Value>;

fn rec(fields: &[(&str, Value)]) -> Rec {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn ki(k: i64, i: i64) -> Rec {
    rec(&[("k", Value::Int(k)), ("i", Value::Int(i))])
}

fn field_i(records: &[&Rec]) -> Vec<i64> {
    records
        .iter()
        .map(|r| match r.field("i") {
            Value::Int(i) => i,
            other => panic!("unexpected {other:?}"),
        })
        .collect()
}

fn numbered(n: usize) -> Vec<Rec> {
    (0..n)
        .map(|i| {
            rec(&[
                ("id", Value::from(format!("r{i}"))),
                ("n", Value::from(i)),
                ("name", Value::from(format!("item {i:02}"))),
            ])
        })
        .collect()
}

fn ab_columns() -> Vec<Column<Rec>> {
    vec![Column::new("k", "A"), Column::new("i", "B")]
}

#[test]
fn sort_is_stable_ascending() {
    let records = vec![ki(1, 0), ki(1, 1), ki(0, 2)];
    let columns = ab_columns();
    let sorted = sort_records(&records, &columns[0], SortDirection::Asc, &());
    assert_eq!(field_i(&sorted), vec![2, 0, 1]);
}

#[test]
fn sort_descending_keeps_ties_in_input_order() {
    let records = vec![ki(1, 0), ki(2, 1), ki(1, 2), ki(0, 3), ki(2, 4)];
    let columns = ab_columns();
    let sorted = sort_records(&records, &columns[0], SortDirection::Desc, &());
    assert_eq!(field_i(&sorted), vec![1, 4, 0, 2, 3]);

    // Input untouched.
    let original: Vec<&Rec> = records.iter().collect();
    assert_eq!(field_i(&original), vec![0, 1, 2, 3, 4]);
}

#[test]
fn sort_key_prefers_sorter_then_lowercased_value_then_field() {
    let records = vec![
        rec(&[("name", Value::from("Beta"))]),
        rec(&[("name", Value::from("alpha"))]),
        rec(&[("name", Value::from("Gamma"))]),
    ];
    let names = |sorted: Vec<&Rec>| -> Vec<String> {
        sorted.iter().map(|r| r.field("name").to_string()).collect()
    };

    let raw: Column<Rec> = Column::new("name", "Name");
    assert_eq!(
        names(sort_records(&records, &raw, SortDirection::Asc, &())),
        vec!["Beta", "Gamma", "alpha"]
    );

    let by_value = raw.clone().with_value(|r: &Rec| r.field("name"));
    assert_eq!(
        names(sort_records(&records, &by_value, SortDirection::Asc, &())),
        vec!["alpha", "Beta", "Gamma"]
    );

    let by_len = by_value.with_sorter(|r: &Rec, _: &()| {
        Value::from(r.field("name").to_string().len())
    });
    assert_eq!(
        names(sort_records(&records, &by_len, SortDirection::Asc, &())),
        vec!["Beta", "alpha", "Gamma"]
    );
}

#[test]
fn sorter_receives_meta() {
    struct Meta {
        pivot: i64,
    }
    let records = vec![ki(1, 0), ki(5, 1), ki(3, 2)];
    let column: Column<Rec, Meta> = Column::new("k", "K").with_sorter(|r: &Rec, m: &Meta| {
        match r.field("k") {
            Value::Int(k) => Value::Int((k - m.pivot).abs()),
            other => other,
        }
    });
    let sorted = sort_records(&records, &column, SortDirection::Asc, &Meta { pivot: 4 });
    assert_eq!(field_i(&sorted), vec![1, 2, 0]);
}

#[test]
fn sort_by_unknown_column_keeps_input_order() {
    let records = vec![ki(2, 0), ki(1, 1)];
    let sorted = sort_by_column(&records, &ab_columns(), "missing", SortDirection::Asc, &());
    assert_eq!(field_i(&sorted), vec![0, 1]);
}

#[test]
fn display_takes_precedence_over_value_and_field() {
    let shared = alloc::sync::Arc::new(rec(&[("size", Value::Int(2048))]));

    let both: Column<Rec> = Column::new("size", "Size")
        .with_value(|r: &Rec| Value::from(format!("{} B", r.field("size"))))
        .with_display(|cx: &DisplayContext<'_, Rec, ()>| {
            let kb = cx.source.field("size").as_f64().unwrap_or(0.0) / 1024.0;
            Value::from(format!("{kb} KB"))
        });
    let content = both.content(&shared);
    assert!(content.is_render());
    assert_eq!(content.resolve(&()), Value::from("2 KB"));

    let mut value_only = both.clone();
    value_only.display = None;
    assert_eq!(value_only.content(&shared).resolve(&()), Value::from("2048 B"));

    let mut raw = value_only.clone();
    raw.value = None;
    assert_eq!(raw.content(&shared).resolve(&()), Value::Int(2048));

    let missing: Column<Rec> = Column::new("absent", "Absent");
    assert!(matches!(missing.content(&shared), Content::Empty));
}

#[test]
fn to_grid_keys_rows_by_prop_or_index() {
    let records = vec![
        rec(&[("accession", Value::from("ENC1")), ("n", Value::Int(1))]),
        rec(&[("n", Value::Int(2))]),
    ];
    let columns: Vec<Column<Rec>> = vec![Column::new("n", "N"), Column::new("accession", "Acc")];

    let rows: Vec<Row> = to_grid(&records, &columns, Some("accession"));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "ENC1");
    assert_eq!(rows[1].id, "1");
    assert!(rows.iter().all(|r| !r.is_header_row && !r.has_child_rows()));
    let cell_ids: Vec<&str> = rows[0].cells.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(cell_ids, vec!["n", "accession"]);
    assert!(matches!(rows[1].cells[1].content, Content::Empty));

    let rows: Vec<Row> = to_grid(&records, &columns, None);
    assert_eq!(rows[0].id, "0");

    let none: Vec<Rec> = Vec::new();
    assert!(to_grid::<Rec, (), _>(&none, &columns, None).is_empty());
}

#[test]
fn header_row_lists_titles() {
    let columns = ab_columns();
    let row = header_row::<Rec, (), _>(&columns);
    assert_eq!(row.id, HEADER_ROW_ID);
    assert!(row.is_header_row);
    assert!(row.cells.iter().all(|c| c.is_header_cell));
    assert_eq!(render_cell(&row, 1, &(), &Renderer::Default).unwrap(), "B");
}

#[test]
fn clicking_a_header_cycles_direction() {
    let records = vec![ki(2, 0), ki(1, 1), ki(3, 2)];
    let mut c = Controller::new(ab_columns(), GridOptions::default());
    c.sync(&records, &());
    assert_eq!(c.sort_state().unwrap().column_id, "k");

    let mut seen = Vec::new();
    for _ in 0..3 {
        assert!(c.click_header("i"));
        let s = c.sort_state().unwrap();
        seen.push((s.column_id.clone(), s.direction));
    }
    assert_eq!(
        seen,
        vec![
            ("i".to_string(), SortDirection::Asc),
            ("i".to_string(), SortDirection::Desc),
            ("i".to_string(), SortDirection::Asc),
        ]
    );

    assert!(c.click_header("k"));
    assert_eq!(
        c.sort_state(),
        Some(&SortState {
            column_id: "k".into(),
            direction: SortDirection::Asc,
        })
    );
}

#[test]
fn hidden_sort_column_falls_back_to_first_active() {
    let records = vec![ki(1, 0), ki(2, 1)];
    let options =
        GridOptions::default().with_initial_sort(InitialSort::by("i", SortDirection::Desc));
    let mut c = Controller::new(ab_columns(), options);
    c.sync(&records, &());
    assert_eq!(c.sort_state().unwrap().column_id, "i");

    c.set_column_hidden("i", true);
    c.sync(&records, &());
    assert!(!c.is_active("i"));
    assert_eq!(
        c.sort_state(),
        Some(&SortState {
            column_id: "k".into(),
            direction: SortDirection::Desc,
        })
    );
    assert!(!c.click_header("i"));
}

#[test]
fn hide_predicates_see_records_columns_and_meta() {
    struct Meta {
        compact: bool,
    }
    let columns: Vec<Column<Rec, Meta>> = vec![
        Column::new("k", "A"),
        Column::new("i", "B").with_hide(|_: &[Rec], _: &[Column<Rec, Meta>], m: &Meta| m.compact),
        Column::new("x", "X").with_hide(
            |records: &[Rec], columns: &[Column<Rec, Meta>], _: &Meta| {
                columns.len() == 3 && records.iter().all(|r| r.field("x").is_null())
            },
        ),
    ];
    let records = vec![ki(1, 0), ki(2, 1)];

    let ids = |meta: Meta| -> Vec<String> {
        active_columns(&columns, &records, &meta, &[])
            .iter()
            .map(|&i| columns[i].id.clone())
            .collect()
    };
    assert_eq!(ids(Meta { compact: false }), vec!["k", "i"]);
    assert_eq!(ids(Meta { compact: true }), vec!["k"]);
}

#[test]
fn hiding_every_column_forces_the_first() {
    let always = |_: &[Rec], _: &[Column<Rec>], _: &()| true;
    let columns: Vec<Column<Rec>> = vec![
        Column::new("a", "A").with_hide(always),
        Column::new("b", "B").with_hide(always),
    ];
    assert_eq!(active_columns(&columns, &[ki(0, 0)], &(), &[]), vec![0]);

    let mut c = Controller::new(columns, GridOptions::default());
    c.set_column_hidden("a", true);
    let view = c.view(&[ki(0, 0), ki(1, 1)], &());
    assert_eq!(view.header.cells.len(), 1);
    assert_eq!(view.header.cells[0].id, "a");
    assert!(view.rows.iter().all(|r| r.cells.len() == 1));

    let empty: Vec<Column<Rec>> = Vec::new();
    assert!(active_columns(&empty, &[], &(), &[]).is_empty());
    let mut c = Controller::new(empty, GridOptions::default());
    c.sync(&[], &());
    assert!(c.sort_state().is_none());
}

#[test]
fn sortability_needs_two_records_and_no_opt_out() {
    let columns: Vec<Column<Rec>> = vec![
        Column::new("k", "A"),
        Column::new("i", "B").with_sortable(false),
    ];
    let mut c = Controller::new(columns, GridOptions::default());

    c.sync(&[ki(0, 0)], &());
    assert!(!c.is_sortable("k"));
    assert!(!c.click_header("k"));

    c.sync(&[ki(0, 0), ki(1, 1)], &());
    assert!(c.is_sortable("k"));
    assert!(!c.is_sortable("i"));
    assert!(!c.click_header("i"));
    assert!(!c.click_header("nope"));

    let header = c.header_row();
    assert_eq!(header.cells[0].prop(PROP_SORTABLE), Some(&Value::Bool(true)));
    assert_eq!(header.cells[1].prop(PROP_SORTABLE), Some(&Value::Bool(false)));
    assert_eq!(header.cells[0].prop(PROP_ARIA_SORT), Some(&Value::from("ascending")));
    assert_eq!(header.cells[1].prop(PROP_ARIA_SORT), Some(&Value::from("none")));
}

#[test]
fn page_windows_records() {
    let records: Vec<usize> = (0..25).collect();
    assert_eq!(page(&records, 0, 10), &records[0..10]);
    assert_eq!(page(&records, 2, 10), &records[20..25]);
    assert_eq!(page(&records, 2, 10).len(), 5);
    assert!(page(&records, 3, 10).is_empty());
    assert_eq!(page(&records, 0, 0), &records[0..1]);
    assert_eq!(page_count(25, 10), 3);
    assert!(is_pager_visible(25, 10));
    assert!(!is_pager_visible(10, 10));
    assert_eq!(page_count(0, 10), 0);
    assert!(page::<usize>(&[], 0, 10).is_empty());
}

#[test]
fn page_numbers_stay_compact() {
    use PageItem::{Ellipsis as E, Page as P};

    assert_eq!(page_numbers(6, 9), (1..=9).map(P).collect::<Vec<_>>());
    assert!(page_numbers(1, 0).is_empty());
    assert_eq!(page_numbers(3, 20), vec![P(1), P(2), P(3), P(4), P(5), P(6), P(7), E, P(20)]);
    assert_eq!(
        page_numbers(16, 20),
        vec![P(1), E, P(14), P(15), P(16), P(17), P(18), P(19), P(20)]
    );
    assert_eq!(
        page_numbers(13, 20),
        vec![P(1), E, P(11), P(12), P(13), P(14), P(15), E, P(20)]
    );
    for current in 1..=20 {
        assert_eq!(page_numbers(current, 20).len(), 9);
    }
}

#[test]
fn record_count_change_resets_page() {
    let mut c = Controller::new(vec![Column::<Rec>::new("n", "N")], GridOptions::default());
    let records = numbered(25);
    c.sync(&records, &());
    assert_eq!(c.page_count(), 3);
    assert_eq!(c.set_page_index(2), 2);
    assert!(!c.next_page());
    assert_eq!(c.set_page_index(10), 2);

    c.sync(&records, &());
    assert_eq!(c.page_index(), 2);

    c.sync(&records[..24], &());
    assert_eq!(c.page_index(), 0);
    assert!(!c.previous_page());
    assert!(c.next_page());
    assert_eq!(c.page_index(), 1);
}

#[test]
fn view_sorts_pages_and_builds_rows() {
    let columns: Vec<Column<Rec>> = vec![
        Column::new("name", "Name"),
        Column::new("n", "N").with_display(|cx: &DisplayContext<'_, Rec, ()>| {
            Value::from(format!("#{}", cx.source.field("n")))
        }),
    ];
    let options = GridOptions::default()
        .with_key_prop("id")
        .with_initial_sort(InitialSort::by("n", SortDirection::Desc));
    let mut c = Controller::new(columns, options);
    let records = numbered(25);

    let view = c.view(&records, &());
    assert_eq!(view.total, 25);
    assert_eq!(view.page_count, 3);
    assert!(view.is_pager_visible);
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.rows[0].id, "r24");
    assert_eq!(view.rows[9].id, "r15");
    assert_eq!(render_cell(&view.rows[0], 1, &(), &Renderer::Default).unwrap(), "#24");
    assert_eq!(render_cell(&view.header, 1, &(), &Renderer::Default).unwrap(), "N ▼");
    assert_eq!(render_cell(&view.header, 0, &(), &Renderer::Default).unwrap(), "Name");

    c.set_page_index(2);
    let view = c.view(&records, &());
    assert_eq!(view.rows.len(), 5);
    assert_eq!(view.rows[4].id, "r0");
    assert_eq!(
        view.page_numbers(),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
    );

    let grid = view.into_grid();
    assert_eq!(grid.len(), 6);
    let flat = flatten(&grid);
    let segments = split_segments(&flat);
    assert_eq!(segments.len(), 2);
    assert!(segments[0].is_header);
    assert_eq!(segments[1].rows.len(), 5);
}

#[test]
fn pager_hidden_shows_everything() {
    let options = GridOptions::default().with_pager_hidden(true).with_page_size(5);
    let mut c = Controller::new(vec![Column::<Rec>::new("n", "N")], options);
    let view = c.view(&numbered(12), &());
    assert_eq!(view.rows.len(), 12);
    assert_eq!(view.page_count, 1);
    assert!(!view.is_pager_visible);
}

#[test]
fn suppressed_sorting_keeps_input_order() {
    let options = GridOptions::default().with_initial_sort(InitialSort::suppressed());
    let mut c = Controller::new(ab_columns(), options);
    let records = vec![ki(3, 0), ki(1, 1), ki(2, 2)];
    c.sync(&records, &());
    assert!(c.click_header("k"));
    assert_eq!(field_i(&c.sorted(&records, &())), vec![0, 1, 2]);
}

#[test]
fn state_round_trips_through_restore() {
    let records = numbered(30);
    let mut c = Controller::new(ab_columns(), GridOptions::default());
    c.sync(&records, &());
    c.click_header("i");
    c.click_header("i");
    c.set_page_index(1);
    c.toggle_column("k");

    let state = c.state();
    assert_eq!(state.hidden, vec!["k".to_string()]);
    assert_eq!(state.page.page_index, 1);

    let mut restored = Controller::new(ab_columns(), GridOptions::default());
    restored.restore(state.clone());
    restored.sync(&records, &());
    assert_eq!(restored.state(), state);
    assert!(!restored.is_active("k"));

    restored.show_all_columns();
    restored.sync(&records, &());
    assert!(restored.is_active("k"));
}

#[test]
fn view_renders_as_html_table() {
    let columns: Vec<Column<Rec>> = vec![Column::new("name", "Name"), Column::new("n", "N")];
    let mut c = Controller::new(columns, GridOptions::default().with_key_prop("id"));
    let records = vec![
        rec(&[("id", Value::from("b")), ("name", Value::from("<b>")), ("n", Value::Int(2))]),
        rec(&[("id", Value::from("a")), ("name", Value::from("a&a")), ("n", Value::Int(1))]),
    ];
    let grid = c.view(&records, &()).into_grid();
    let out = html::render_table(&grid, &());
    assert_eq!(
        out,
        "<table>\
         <thead><tr>\
         <th scope=\"col\" aria-sort=\"ascending\">Name ▲</th>\
         <th scope=\"col\" aria-sort=\"none\">N</th>\
         </tr></thead>\
         <tbody>\
         <tr><td>&lt;b&gt;</td><td>2</td></tr>\
         <tr><td>a&amp;a</td><td>1</td></tr>\
         </tbody>\
         </table>"
    );
}

#[cfg(feature = "json")]
#[test]
fn json_records_expose_fields() {
    let record = serde_json::json!({ "name": "ATAC", "count": 3, "ratio": 0.5, "tags": ["a"] });
    assert_eq!(record.field("name"), Value::from("ATAC"));
    assert_eq!(record.field("count"), Value::Int(3));
    assert_eq!(record.field("ratio"), Value::Float(0.5));
    assert_eq!(record.field("tags"), Value::from("[\"a\"]"));
    assert_eq!(record.field("missing"), Value::Null);
}
