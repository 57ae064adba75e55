//! Completion percentages at collection and subject granularity.

use crate::model::study::{Collection, Subject};

/// Raw completion counts behind a percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressTally {
    pub done: usize,
    pub total: usize,
}

impl ProgressTally {
    pub fn of_collection(collection: &Collection) -> Self {
        collection
            .subjects()
            .iter()
            .map(Self::of_subject)
            .fold(Self::default(), |acc, tally| Self {
                done: acc.done + tally.done,
                total: acc.total + tally.total,
            })
    }

    pub fn of_subject(subject: &Subject) -> Self {
        let (done, total) = subject.completion_counts();
        Self { done, total }
    }

    /// `round(100 * done / total)` with halves rounded up; `0` when empty.
    pub fn percent(self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let done = self.done.min(self.total) as u128;
        let total = self.total as u128;
        // Integer half-up rounding keeps 50% boundaries exact.
        ((200 * done + total) / (2 * total)) as u8
    }
}

/// Percentage of completed topics across every subject.
pub fn overall_progress(collection: &Collection) -> u8 {
    ProgressTally::of_collection(collection).percent()
}

/// Percentage of completed topics in one subject.
pub fn subject_progress(subject: &Subject) -> u8 {
    ProgressTally::of_subject(subject).percent()
}

#[cfg(test)]
mod tests {
    use super::ProgressTally;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(ProgressTally { done: 1, total: 8 }.percent(), 13);
        assert_eq!(ProgressTally { done: 1, total: 3 }.percent(), 33);
        assert_eq!(ProgressTally { done: 2, total: 3 }.percent(), 67);
        assert_eq!(ProgressTally { done: 1, total: 200 }.percent(), 1);
    }

    #[test]
    fn percent_is_zero_without_topics() {
        assert_eq!(ProgressTally::default().percent(), 0);
    }

    #[test]
    fn percent_is_bounded() {
        assert_eq!(ProgressTally { done: 7, total: 7 }.percent(), 100);
        assert_eq!(ProgressTally { done: 0, total: 7 }.percent(), 0);
    }
}
