use studyplan_core::{
    add_subject, add_topic, mark_complete, overall_progress, subject_progress, Collection,
};

fn collection_with(topics: &[(usize, &str, f64, &str)], subjects: &[&str]) -> Collection {
    let mut collection = Collection::new();
    for name in subjects {
        collection = add_subject(&collection, name).unwrap();
    }
    for (subject_index, name, hours, day) in topics {
        collection = add_topic(&collection, *subject_index, name, *hours, day).unwrap();
    }
    collection
}

#[test]
fn empty_collections_report_zero() {
    assert_eq!(overall_progress(&Collection::new()), 0);

    let collection = collection_with(&[], &["Math", "Art"]);
    assert_eq!(overall_progress(&collection), 0);
    for subject in collection.subjects() {
        assert_eq!(subject_progress(subject), 0);
    }
}

#[test]
fn subject_with_half_topics_done_reports_fifty() {
    let collection = collection_with(
        &[(0, "Limits", 1.0, "Mon"), (0, "Series", 2.0, "Tue")],
        &["Math"],
    );
    let collection = mark_complete(&collection, 0, 0).unwrap();

    assert_eq!(subject_progress(&collection.subjects()[0]), 50);
    assert_eq!(overall_progress(&collection), 50);
}

#[test]
fn overall_progress_spans_subjects() {
    let collection = collection_with(
        &[
            (0, "Limits", 1.0, "Mon"),
            (0, "Series", 1.0, "Mon"),
            (1, "Optics", 1.0, "Tue"),
        ],
        &["Math", "Physics"],
    );
    let collection = mark_complete(&collection, 1, 0).unwrap();

    assert_eq!(overall_progress(&collection), 33);
    assert_eq!(subject_progress(&collection.subjects()[0]), 0);
    assert_eq!(subject_progress(&collection.subjects()[1]), 100);
}

#[test]
fn completing_topics_never_decreases_progress() {
    let mut collection = collection_with(
        &[
            (0, "A", 1.0, "Mon"),
            (0, "B", 1.0, "Mon"),
            (1, "C", 1.0, "Mon"),
            (1, "D", 1.0, "Mon"),
            (1, "E", 1.0, "Mon"),
        ],
        &["One", "Two"],
    );
    let mut last = overall_progress(&collection);
    for (subject_index, topic_index) in [(1, 2), (0, 0), (1, 2), (1, 0), (0, 1), (1, 1)] {
        collection = mark_complete(&collection, subject_index, topic_index).unwrap();
        let now = overall_progress(&collection);
        assert!(now >= last);
        assert!(now <= 100);
        last = now;
    }
    assert_eq!(last, 100);
}
