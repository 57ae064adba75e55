use studyplan_core::{add_subject, add_topic, daily_plan, mark_complete, Collection, Weekday};

fn build(topics: &[(&str, f64, &str)]) -> Collection {
    let mut collection = add_subject(&Collection::new(), "Math").unwrap();
    for (name, hours, day) in topics {
        collection = add_topic(&collection, 0, name, *hours, day).unwrap();
    }
    collection
}

fn allocations(plan: &studyplan_core::DailyPlan) -> Vec<(&str, f64)> {
    plan.items
        .iter()
        .map(|item| (item.topic_name.as_str(), item.hours))
        .collect()
}

#[test]
fn budget_is_split_greedily_in_insertion_order() {
    let collection = build(&[("A", 2.0, "Mon"), ("B", 2.0, "Mon")]);

    let plan = daily_plan(&collection, Weekday::Mon, 3.0);

    assert_eq!(allocations(&plan), [("A", 2.0), ("B", 1.0)]);
    assert_eq!(plan.remaining_hours, 0.0);
    assert!(!plan.is_nothing_scheduled());
}

#[test]
fn completed_topics_leave_nothing_scheduled() {
    let collection = build(&[("A", 1.0, "Mon")]);
    let collection = mark_complete(&collection, 0, 0).unwrap();

    let plan = daily_plan(&collection, Weekday::Mon, 4.0);

    assert!(plan.items.is_empty());
    assert!(plan.is_nothing_scheduled());
    assert_eq!(plan.remaining_hours, 4.0);
}

#[test]
fn other_days_are_skipped() {
    let collection = build(&[("A", 1.0, "Tue"), ("B", 1.0, "Mon"), ("C", 1.0, "Sun")]);

    let plan = daily_plan(&collection, Weekday::Mon, 5.0);

    assert_eq!(allocations(&plan), [("B", 1.0)]);
    assert_eq!(plan.day, Weekday::Mon);
}

#[test]
fn exhausted_budget_skips_later_topics() {
    let collection = build(&[("A", 2.0, "Mon"), ("B", 1.0, "Mon"), ("C", 0.5, "Mon")]);

    let plan = daily_plan(&collection, Weekday::Mon, 2.0);

    assert_eq!(allocations(&plan), [("A", 2.0)]);
}

#[test]
fn traversal_follows_subject_order() {
    let collection = add_subject(&Collection::new(), "First").unwrap();
    let collection = add_subject(&collection, "Second").unwrap();
    let collection = add_topic(&collection, 1, "Late", 1.0, "Fri").unwrap();
    let collection = add_topic(&collection, 0, "Early", 1.0, "Fri").unwrap();

    let plan = daily_plan(&collection, Weekday::Fri, 10.0);

    assert_eq!(allocations(&plan), [("Early", 1.0), ("Late", 1.0)]);
    assert_eq!(plan.items[0].subject_id, collection.subjects()[0].id);
}

#[test]
fn allocation_never_exceeds_budget() {
    let collection = build(&[
        ("A", 0.75, "Wed"),
        ("B", 1.25, "Wed"),
        ("C", 3.0, "Wed"),
        ("D", 0.5, "Wed"),
    ]);
    for budget in [0.5, 1.0, 2.0, 2.5, 4.0, 10.0] {
        let plan = daily_plan(&collection, Weekday::Wed, budget);
        assert!(plan.allocated_hours() <= budget + 1e-9);
        assert!(plan.items.iter().all(|item| item.hours > 0.0));
    }
}
