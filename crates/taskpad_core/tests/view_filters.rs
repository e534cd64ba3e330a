use taskpad_core::{derive_view, Priority, PriorityFilter, StatusFilter, Task, ViewFilter};

fn task(text: &str, done: bool, priority: Priority) -> Task {
    let mut task = Task::new(text, None, priority);
    task.done = done;
    task
}

fn search(term: &str) -> ViewFilter {
    ViewFilter {
        search: term.to_string(),
        ..ViewFilter::default()
    }
}

#[test]
fn empty_search_matches_all_tasks() {
    let tasks = vec![
        task("Buy Milk", false, Priority::Medium),
        task("pay rent", false, Priority::Medium),
    ];

    assert_eq!(derive_view(&tasks, &ViewFilter::default()).len(), 2);
}

#[test]
fn search_is_case_insensitive_substring_match() {
    let tasks = vec![
        task("Buy Milk", false, Priority::Medium),
        task("pay rent", false, Priority::Medium),
    ];

    for term in ["milk", "MILK", "Milk"] {
        let view = derive_view(&tasks, &search(term));
        assert_eq!(view.len(), 1, "term `{term}` should match exactly one");
        assert_eq!(view[0].text, "Buy Milk");
    }

    assert!(derive_view(&tasks, &search("bread")).is_empty());
}

#[test]
fn status_filter_selects_by_completion() {
    let tasks = vec![
        task("open", false, Priority::Medium),
        task("closed", true, Priority::Medium),
    ];

    let done = derive_view(
        &tasks,
        &ViewFilter {
            status: StatusFilter::Done,
            ..ViewFilter::default()
        },
    );
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].text, "closed");

    let not_done = derive_view(
        &tasks,
        &ViewFilter {
            status: StatusFilter::NotDone,
            ..ViewFilter::default()
        },
    );
    assert_eq!(not_done.len(), 1);
    assert_eq!(not_done[0].text, "open");
}

#[test]
fn priority_filter_matches_exactly() {
    let tasks = vec![
        task("urgent", false, Priority::High),
        task("whenever", false, Priority::Low),
    ];

    let view = derive_view(
        &tasks,
        &ViewFilter {
            priority: PriorityFilter::Only(Priority::High),
            ..ViewFilter::default()
        },
    );
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].text, "urgent");
}

#[test]
fn incomplete_tasks_precede_complete_ones_stably() {
    let tasks = vec![
        task("A", false, Priority::Medium),
        task("B", true, Priority::Medium),
        task("C", false, Priority::Medium),
    ];

    let view = derive_view(&tasks, &ViewFilter::default());
    let order: Vec<&str> = view.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(order, ["A", "C", "B"]);
}

#[test]
fn derivation_is_pure_and_leaves_canonical_order_intact() {
    let tasks = vec![
        task("A", false, Priority::Medium),
        task("B", true, Priority::Medium),
        task("C", false, Priority::Medium),
    ];
    let filter = search("");

    let first: Vec<_> = derive_view(&tasks, &filter)
        .iter()
        .map(|t| t.id)
        .collect();
    let second: Vec<_> = derive_view(&tasks, &filter)
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(first, second);

    // Canonical insertion order is untouched by derivation.
    let canonical: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(canonical, ["A", "B", "C"]);
}

#[test]
fn filters_compose() {
    let tasks = vec![
        task("buy milk", false, Priority::High),
        task("buy bread", true, Priority::High),
        task("buy stamps", false, Priority::Low),
        task("pay rent", false, Priority::High),
    ];

    let view = derive_view(
        &tasks,
        &ViewFilter {
            search: "buy".to_string(),
            status: StatusFilter::NotDone,
            priority: PriorityFilter::Only(Priority::High),
        },
    );

    assert_eq!(view.len(), 1);
    assert_eq!(view[0].text, "buy milk");
}
