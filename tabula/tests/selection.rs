use tabula::table::{Record, Row, Selection, SelectionAggregate, Value};

#[derive(Debug, PartialEq)]
struct Item {
    label: &'static str,
}

impl Record for Item {
    fn field(&self, accessor: &str) -> Option<Value> {
        match accessor {
            "label" => Some(self.label.into()),
            _ => None,
        }
    }
}

fn items(labels: &[&'static str]) -> Vec<Row<Item>> {
    Row::from_records(labels.iter().map(|&label| Item { label }))
}

fn labels(rows: &[Row<Item>]) -> Vec<&'static str> {
    rows.iter().map(|r| r.label).collect()
}

#[test]
fn test_toggle_row_adds_and_removes() {
    let data = items(&["a", "b", "c"]);
    let mut selection = Selection::new();

    assert!(selection.toggle_row(&data[1], true));
    assert!(selection.is_selected(&data[1]));
    assert!(!selection.is_selected(&data[0]));

    assert!(selection.toggle_row(&data[1], false));
    assert!(selection.is_empty());
}

#[test]
fn test_toggle_row_is_idempotent() {
    let data = items(&["a", "b"]);
    let mut selection = Selection::new();

    selection.toggle_row(&data[0], true);
    assert!(!selection.toggle_row(&data[0], true));
    assert_eq!(selection.len(), 1);

    selection.toggle_row(&data[0], false);
    assert!(!selection.toggle_row(&data[0], false));
    assert_eq!(selection.len(), 0);
}

#[test]
fn test_identity_not_value() {
    let data = items(&["same", "same"]);
    assert_eq!(*data[0], *data[1]);

    let mut selection = Selection::new();
    selection.toggle_row(&data[0], true);
    assert!(selection.is_selected(&data[0]));
    assert!(!selection.is_selected(&data[1]));
    assert!(selection.is_selected(&data[0].clone()));
}

#[test]
fn test_rows_in_selection_order() {
    let data = items(&["a", "b", "c", "d"]);
    let mut selection = Selection::new();
    selection.toggle_row(&data[2], true);
    selection.toggle_row(&data[0], true);
    selection.toggle_row(&data[3], true);
    selection.toggle_row(&data[0], false);

    assert_eq!(labels(&selection.rows()), ["c", "d"]);
}

#[test]
fn test_toggle_all_overwrites() {
    let first = items(&["a", "b", "c"]);
    let second = items(&["x", "y"]);
    let mut selection = Selection::new();

    selection.toggle_all(&first, true);
    assert_eq!(labels(&selection.rows()), ["a", "b", "c"]);

    selection.toggle_all(&second, true);
    assert_eq!(labels(&selection.rows()), ["x", "y"]);
    assert!(!selection.is_selected(&first[0]));

    selection.toggle_all(&second, false);
    assert!(selection.is_empty());
}

#[test]
fn test_toggle_all_on_empty_data() {
    let data: Vec<Row<Item>> = Vec::new();
    let mut selection = Selection::new();
    selection.toggle_all(&data, true);

    assert!(selection.is_empty());
    assert_eq!(
        SelectionAggregate::derive(&data, &selection),
        SelectionAggregate::NoneSelected
    );
}

#[test]
fn test_aggregate_all_some_none() {
    let data = items(&["a", "b", "c"]);
    let mut selection = Selection::new();
    assert_eq!(
        SelectionAggregate::derive(&data, &selection),
        SelectionAggregate::NoneSelected
    );

    selection.toggle_row(&data[0], true);
    let aggregate = SelectionAggregate::derive(&data, &selection);
    assert!(aggregate.some_selected());
    assert!(!aggregate.all_selected());

    selection.toggle_all(&data, true);
    assert!(SelectionAggregate::derive(&data, &selection).all_selected());
}

#[test]
fn test_select_all_then_uncheck_one() {
    let data = items(&["a", "b", "c", "d", "e"]);
    let mut selection = Selection::new();
    selection.toggle_all(&data, true);
    selection.toggle_row(&data[0], false);

    assert_eq!(selection.len(), data.len() - 1);
    let aggregate = SelectionAggregate::derive(&data, &selection);
    assert!(aggregate.some_selected());
    assert!(!aggregate.all_selected());
}

#[test]
fn test_aggregate_requires_superset_not_just_count() {
    let data = items(&["a", "b"]);
    let other = items(&["x"]);
    let mut selection = Selection::new();
    selection.toggle_row(&data[0], true);
    selection.toggle_row(&other[0], true);

    assert_eq!(selection.len(), data.len());
    assert_eq!(
        SelectionAggregate::derive(&data, &selection),
        SelectionAggregate::SomeSelected
    );
}

#[test]
fn test_retain_present_prunes_stale_rows() {
    let data = items(&["a", "b", "c"]);
    let mut selection = Selection::new();
    selection.toggle_all(&data, true);

    let remaining = vec![data[0].clone(), data[2].clone()];
    assert_eq!(selection.retain_present(&remaining), 1);
    assert_eq!(labels(&selection.rows()), ["a", "c"]);
    assert_eq!(selection.retain_present(&remaining), 0);
}
