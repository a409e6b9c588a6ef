use super::*;

#[test]
fn years_of_operation_spans_first_to_last_milestone() {
    assert_eq!(years_of_operation(TIMELINE), 5);
}

#[test]
fn years_of_operation_is_zero_for_empty_timeline() {
    assert_eq!(years_of_operation(&[]), 0);
}

#[test]
fn years_of_operation_ignores_entry_order() {
    let timeline = [
        Milestone { year: 2023, title: "b", description: "" },
        Milestone { year: 2015, title: "a", description: "" },
    ];
    assert_eq!(years_of_operation(&timeline), 8);
}

#[test]
fn stats_append_derived_figures() {
    let stats = stats(TEAM, TIMELINE);
    assert_eq!(stats.len(), FIXED_STATS.len() + 2);
    assert_eq!(stats[FIXED_STATS.len()], Stat { value: "5+".to_owned(), label: "Năm hoạt động" });
    assert_eq!(stats[FIXED_STATS.len() + 1].value, TEAM.len().to_string());
}

#[test]
fn stats_keep_fixed_figures_first() {
    let stats = stats(&[], &[]);
    assert_eq!(stats[0].value, "12.000+");
    assert_eq!(stats.last().map(|s| s.value.as_str()), Some("0"));
}
