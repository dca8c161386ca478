use std::collections::{HashMap, HashSet};

use crate::model::Round;

pub const UNKNOWN_MONTH: &str = "Unknown date";

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    /// e.g. "March 2024"
    pub label: String,
    pub rounds: Vec<Round>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    pub groups: Vec<MonthGroup>,
    pub total_rounds: usize,
    pub courses_played: usize,
}

#[must_use]
pub fn month_label(round: &Round) -> String {
    round
        .checked_in()
        .map_or_else(|| UNKNOWN_MONTH.to_string(), |ts| ts.format("%B %Y").to_string())
}

/// "Mar 2" style date for a single round row.
#[must_use]
pub fn short_date(round: &Round) -> Option<(String, String)> {
    round
        .checked_in()
        .map(|ts| (ts.format("%b").to_string(), ts.format("%-d").to_string()))
}

/// "Saturday, March 2, 2024"
#[must_use]
pub fn full_date(round: &Round) -> Option<String> {
    round
        .checked_in()
        .map(|ts| ts.format("%A, %B %-d, %Y").to_string())
}

/// Bucket rounds by month. Groups come out in the order their first round
/// appears, and each keeps its rounds in input order; nothing is sorted, so
/// feed it newest-first history to get a newest-first page.
#[must_use]
pub fn group_by_month(rounds: &[Round]) -> Vec<MonthGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<MonthGroup> = Vec::new();
    for round in rounds {
        let label = month_label(round);
        let slot = *index.entry(label.clone()).or_insert_with(|| {
            groups.push(MonthGroup {
                label,
                rounds: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].rounds.push(round.clone());
    }
    groups
}

#[must_use]
pub fn distinct_courses(rounds: &[Round]) -> usize {
    rounds
        .iter()
        .map(|r| r.course_name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[must_use]
pub fn summarize(rounds: &[Round]) -> History {
    History {
        groups: group_by_month(rounds),
        total_rounds: rounds.len(),
        courses_played: distinct_courses(rounds),
    }
}
