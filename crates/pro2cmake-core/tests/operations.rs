use proptest::prelude::*;

use pro2cmake_core::normalize::identity;
use pro2cmake_core::operation::{Operation, OperationKind};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn add_operation_appends_with_duplicates() {
    let op = Operation::new(OperationKind::Add, ["bar", "buz"]);
    let result = op.process(&strings(&["foo", "bar"]), &strings(&["foo", "bar"]), identity);

    assert_eq!(result, strings(&["foo", "bar", "bar", "buz"]));
}

#[test]
fn unique_add_operation_skips_existing() {
    let op = Operation::new(OperationKind::UniqueAdd, ["bar", "buz"]);
    let result = op.process(&strings(&["foo", "bar"]), &strings(&["foo", "bar"]), identity);

    assert_eq!(result, strings(&["foo", "bar", "buz"]));
}

#[test]
fn set_operation_replaces() {
    let op = Operation::new(OperationKind::Set, ["bar", "buz"]);
    let result = op.process(&strings(&["foo", "bar"]), &strings(&["foo", "bar"]), identity);

    assert_eq!(result, strings(&["bar", "buz"]));
}

#[test]
fn remove_operation_marks_only_absent_values() {
    let op = Operation::new(OperationKind::Remove, ["bar", "buz"]);
    let result = op.process(&strings(&["foo", "bar"]), &strings(&["foo", "bar"]), identity);

    assert_eq!(result, strings(&["foo", "-buz"]));
}

#[test]
fn remove_compares_normalized_values() {
    let op = Operation::new(OperationKind::Remove, ["gui"]);
    let result = op.process(&strings(&["Qt::Core", "Qt::Gui"]), &[], |v| match v {
        "gui" => "Qt::Gui".to_string(),
        other => other.to_string(),
    });

    assert_eq!(result, strings(&["Qt::Core"]));
}

fn value_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..6)
}

/// Values drawn from a different alphabet than `value_list`, so the two never overlap
fn disjoint_value_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z]{1,6}", 0..6)
}

proptest! {
    /// Add: result is new followed by the operation's values
    #[test]
    fn add_is_concatenation(new in value_list(), old in value_list(), v in value_list()) {
        let op = Operation::new(OperationKind::Add, v.clone());
        let mut expected = new.clone();
        expected.extend(v);
        prop_assert_eq!(op.process(&new, &old, identity), expected);
    }

    /// UniqueAdd onto disjoint values behaves like Add when v has no repeats
    #[test]
    fn unique_add_disjoint_appends(new in value_list(), old in value_list(), v in prop::collection::hash_set("[A-Z]{1,6}", 0..6)) {
        let v: Vec<String> = v.into_iter().collect();
        let op = Operation::new(OperationKind::UniqueAdd, v.clone());
        let mut expected = new.clone();
        expected.extend(v);
        prop_assert_eq!(op.process(&new, &old, identity), expected);
    }

    /// UniqueAdd of values already present changes nothing
    #[test]
    fn unique_add_present_is_noop(new in value_list(), old in value_list(), picks in prop::collection::vec(any::<prop::sample::Index>(), 0..4)) {
        prop_assume!(!new.is_empty());
        let v: Vec<String> = picks.iter().map(|i| i.get(&new).clone()).collect();
        let op = Operation::new(OperationKind::UniqueAdd, v);
        prop_assert_eq!(op.process(&new, &old, identity), new);
    }

    /// Set ignores both tracks
    #[test]
    fn set_ignores_state(new in value_list(), old in value_list(), v in value_list()) {
        let op = Operation::new(OperationKind::Set, v.clone());
        prop_assert_eq!(op.process(&new, &old, identity), v);
    }

    /// Remove of values absent from new appends one marker per value
    #[test]
    fn remove_disjoint_appends_markers(new in value_list(), old in value_list(), v in disjoint_value_list()) {
        let op = Operation::new(OperationKind::Remove, v.clone());
        let mut expected = new.clone();
        expected.extend(v.iter().map(|x| format!("-{x}")));
        prop_assert_eq!(op.process(&new, &old, identity), expected);
    }

    /// The operation's own values survive processing
    #[test]
    fn process_leaves_operation_untouched(kind in prop::sample::select(OperationKind::ALL.to_vec()), new in value_list(), v in value_list()) {
        let op = Operation::new(kind, v.clone());
        let _ = op.process(&new, &new, |x| x.to_uppercase());
        prop_assert_eq!(op.values(), v.as_slice());
    }

    /// Operator and name both parse back to the same kind
    #[test]
    fn kind_parse_roundtrip(kind in prop::sample::select(OperationKind::ALL.to_vec())) {
        prop_assert_eq!(kind.operator().parse::<OperationKind>().unwrap(), kind);
        prop_assert_eq!(kind.to_string().parse::<OperationKind>().unwrap(), kind);
    }
}
