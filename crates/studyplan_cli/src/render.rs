//! Plain-text rendering of planner view models.

use studyplan_core::{subject_progress, Collection, DailyPlan, Dashboard, WeeklySummary, Weekday};

pub fn daily_plan(plan: &DailyPlan) -> String {
    if plan.is_nothing_scheduled() {
        return "No study scheduled today.\n".to_string();
    }
    plan.items
        .iter()
        .map(|item| format!("• {} — {}h\n", item.topic_name, item.hours))
        .collect()
}

pub fn weekly_summary(week: &WeeklySummary) -> String {
    week.days()
        .iter()
        .map(|entry| {
            let topics = if entry.is_free() {
                "—".to_string()
            } else {
                entry.topics.join(", ")
            };
            format!("{}: {topics}\n", entry.day)
        })
        .collect()
}

/// Subjects and topics of a snapshot; needs no logged-in user.
pub fn collection(collection: &Collection) -> String {
    let mut out = String::new();
    for (subject_index, subject) in collection.subjects().iter().enumerate() {
        out.push_str(&subject_header(
            subject_index,
            &subject.name,
            subject_progress(subject),
        ));
        for (topic_index, topic) in subject.topics.iter().enumerate() {
            out.push_str(&topic_line(
                topic_index,
                &topic.name,
                topic.hours,
                topic.day,
                topic.completed,
            ));
        }
    }
    out
}

pub fn dashboard(dashboard: &Dashboard) -> String {
    let mut out = format!(
        "Welcome, {}\nOverall progress: {}%\n",
        dashboard.user.name, dashboard.overall_progress
    );

    for (subject_index, subject) in dashboard.subjects.iter().enumerate() {
        out.push('\n');
        out.push_str(&subject_header(subject_index, &subject.name, subject.progress));
        for (topic_index, topic) in subject.topics.iter().enumerate() {
            out.push_str(&topic_line(
                topic_index,
                &topic.name,
                topic.hours,
                topic.day,
                topic.completed,
            ));
        }
    }

    out.push_str(&format!("\nToday ({}):\n", dashboard.today.day));
    out.push_str(&daily_plan(&dashboard.today));
    out.push_str("\nThis week:\n");
    out.push_str(&weekly_summary(&dashboard.week));
    out
}

fn subject_header(index: usize, name: &str, progress: u8) -> String {
    format!("{}. {name} — {progress}% completed\n", index + 1)
}

fn topic_line(index: usize, name: &str, hours: f64, day: Weekday, completed: bool) -> String {
    let state = if completed { "done" } else { "pending" };
    format!("   {}. {name} ({hours}h) — {day} [{state}]\n", index + 1)
}

#[cfg(test)]
mod tests {
    use studyplan_core::{
        add_subject, add_topic, daily_plan, mark_complete, weekly_summary, Collection, Weekday,
    };

    #[test]
    fn empty_plan_renders_sentinel_message() {
        let plan = daily_plan(&Collection::new(), Weekday::Mon, 2.0);
        assert_eq!(super::daily_plan(&plan), "No study scheduled today.\n");
    }

    #[test]
    fn daily_plan_lists_allocations() {
        let collection = add_subject(&Collection::new(), "Math").unwrap();
        let collection = add_topic(&collection, 0, "Limits", 2.0, "Mon").unwrap();
        let collection = add_topic(&collection, 0, "Series", 2.0, "Mon").unwrap();

        let plan = daily_plan(&collection, Weekday::Mon, 3.0);

        assert_eq!(super::daily_plan(&plan), "• Limits — 2h\n• Series — 1h\n");
    }

    #[test]
    fn weekly_summary_marks_free_days() {
        let collection = add_subject(&Collection::new(), "Math").unwrap();
        let collection = add_topic(&collection, 0, "Limits", 2.0, "Mon").unwrap();

        let text = super::weekly_summary(&weekly_summary(&collection));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Mon: Limits (2h)");
        assert_eq!(lines[6], "Sun: —");
    }

    #[test]
    fn collection_lists_numbered_topics_with_state() {
        let collection = add_subject(&Collection::new(), "Math").unwrap();
        let collection = add_topic(&collection, 0, "Limits", 2.0, "Mon").unwrap();
        let collection = add_topic(&collection, 0, "Series", 1.5, "Tue").unwrap();
        let collection = mark_complete(&collection, 0, 0).unwrap();

        assert_eq!(
            super::collection(&collection),
            "1. Math — 50% completed\n   1. Limits (2h) — Mon [done]\n   2. Series (1.5h) — Tue [pending]\n"
        );
    }
}
