use tabula::table::{
    Record, Row, SortDirection, SortDirective, Value, compare_values, compute_order,
};

#[derive(Debug)]
struct User {
    name: &'static str,
    role: &'static str,
    age: Option<i64>,
}

impl Record for User {
    fn field(&self, accessor: &str) -> Option<Value> {
        match accessor {
            "name" => Some(self.name.into()),
            "role" => Some(self.role.into()),
            "age" => self.age.map(Value::from),
            _ => None,
        }
    }
}

fn user(name: &'static str, role: &'static str, age: Option<i64>) -> User {
    User { name, role, age }
}

fn sample() -> Vec<Row<User>> {
    Row::from_records([
        user("Alice", "Admin", Some(34)),
        user("Bob", "User", Some(27)),
        user("Carol", "Moderator", None),
        user("Dave", "User", Some(41)),
        user("Eve", "Admin", Some(27)),
    ])
}

fn names(rows: &[Row<User>]) -> Vec<&'static str> {
    rows.iter().map(|r| r.name).collect()
}

#[test]
fn test_no_field_keeps_input_order() {
    let data = sample();
    let ordered = compute_order(&data, &SortDirective::none());
    assert_eq!(names(&ordered), ["Alice", "Bob", "Carol", "Dave", "Eve"]);
    assert!(ordered.iter().zip(&data).all(|(a, b)| a.same(b)));
}

#[test]
fn test_sort_by_role_ascending_keeps_ties_in_input_order() {
    let data = sample();
    let ordered = compute_order(&data, &SortDirective::ascending("role"));
    assert_eq!(names(&ordered), ["Alice", "Eve", "Carol", "Bob", "Dave"]);
}

#[test]
fn test_sort_by_role_descending_keeps_ties_in_input_order() {
    let data = sample();
    let ordered = compute_order(&data, &SortDirective::descending("role"));
    assert_eq!(names(&ordered), ["Bob", "Dave", "Carol", "Alice", "Eve"]);
}

#[test]
fn test_repeated_direction_toggles_do_not_reorder_ties() {
    let data = sample();
    let mut directive = SortDirective::ascending("role");
    let first = names(&compute_order(&data, &directive));
    for _ in 0..4 {
        directive = directive.toggled("role");
    }
    assert_eq!(names(&compute_order(&data, &directive)), first);
}

#[test]
fn test_absent_values_sort_lowest() {
    let data = sample();
    let asc = compute_order(&data, &SortDirective::ascending("age"));
    assert_eq!(names(&asc), ["Carol", "Bob", "Eve", "Alice", "Dave"]);

    let desc = compute_order(&data, &SortDirective::descending("age"));
    assert_eq!(names(&desc), ["Dave", "Alice", "Bob", "Eve", "Carol"]);
}

#[test]
fn test_field_missing_everywhere_is_a_stable_no_op() {
    let data = sample();
    let ordered = compute_order(&data, &SortDirective::ascending("nickname"));
    assert_eq!(names(&ordered), ["Alice", "Bob", "Carol", "Dave", "Eve"]);
}

#[test]
fn test_input_is_not_mutated() {
    let data = sample();
    let before: Vec<Row<User>> = data.clone();
    let ordered = compute_order(&data, &SortDirective::descending("name"));

    assert_eq!(ordered.len(), data.len());
    assert!(data.iter().zip(&before).all(|(a, b)| a.same(b)));
    assert!(ordered.iter().all(|r| data.contains(r)));
}

#[test]
fn test_empty_data() {
    let data: Vec<Row<User>> = Vec::new();
    assert!(compute_order(&data, &SortDirective::ascending("name")).is_empty());
}

#[test]
fn test_direction_cycling() {
    let mut directive = SortDirective::none();
    let mut seen = Vec::new();
    for _ in 0..5 {
        directive = directive.toggled("name");
        seen.push(directive.direction);
    }
    assert_eq!(
        seen,
        [
            SortDirection::Ascending,
            SortDirection::Descending,
            SortDirection::Ascending,
            SortDirection::Descending,
            SortDirection::Ascending,
        ]
    );

    let other = directive.toggled("role");
    assert_eq!(other, SortDirective::ascending("role"));
}

#[test]
fn test_compare_values_numbers_across_kinds() {
    use std::cmp::Ordering;

    let two = Value::Int(2);
    let two_and_half = Value::Float(2.5);
    assert_eq!(compare_values(Some(&two), Some(&two_and_half)), Ordering::Less);
    assert_eq!(compare_values(Some(&Value::Float(2.0)), Some(&two)), Ordering::Equal);
}

#[test]
fn test_compare_values_mixed_kinds_rank() {
    use std::cmp::Ordering;

    let flag = Value::Bool(true);
    let number = Value::Int(-100);
    let text = Value::Text("a".into());
    assert_eq!(compare_values(Some(&flag), Some(&number)), Ordering::Less);
    assert_eq!(compare_values(Some(&number), Some(&text)), Ordering::Less);
    assert_eq!(compare_values(None, Some(&flag)), Ordering::Less);
    assert_eq!(compare_values(None, None), Ordering::Equal);
}

#[test]
fn test_compare_values_nan_is_ordered() {
    use std::cmp::Ordering;

    let nan = Value::Float(f64::NAN);
    let one = Value::Float(1.0);
    assert_eq!(compare_values(Some(&nan), Some(&nan)), Ordering::Equal);
    assert_ne!(compare_values(Some(&nan), Some(&one)), Ordering::Equal);
}
