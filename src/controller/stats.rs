use futures::try_join;
use std::f64::consts::PI;

use crate::controller::api::ParPassApi;
use crate::error::ParPassError;
use crate::model::{MonthlyRounds, OverviewStats, PopularCourse, TierBreakdown, TopMember};

/// Radius of the tier donut in its 100x100 view box.
pub const DONUT_RADIUS: f64 = 40.0;

#[must_use]
pub fn donut_circumference() -> f64 {
    2.0 * PI * DONUT_RADIUS
}

/// Each value as a percentage of the largest one. The denominator never
/// drops below 1, so all-zero input gives all-zero widths.
#[must_use]
pub fn proportional_widths(values: &[u64]) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0).max(1) as f64;
    values.iter().map(|&v| v as f64 / max * 100.0).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseBar {
    pub course: PopularCourse,
    pub width_percent: f64,
}

#[must_use]
pub fn popular_course_bars(courses: &[PopularCourse]) -> Vec<CourseBar> {
    let rounds: Vec<u64> = courses.iter().map(|c| c.total_rounds).collect();
    courses
        .iter()
        .zip(proportional_widths(&rounds))
        .map(|(course, width_percent)| CourseBar {
            course: course.clone(),
            width_percent,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthBar {
    pub month: MonthlyRounds,
    pub height_percent: f64,
}

#[must_use]
pub fn monthly_bars(months: &[MonthlyRounds]) -> Vec<MonthBar> {
    let rounds: Vec<u64> = months.iter().map(|m| m.rounds).collect();
    months
        .iter()
        .zip(proportional_widths(&rounds))
        .map(|(month, height_percent)| MonthBar {
            month: month.clone(),
            height_percent,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierArc {
    pub tier: String,
    pub rounds: u64,
    /// Fraction of all rounds, `0.0..=1.0`.
    pub share: f64,
    pub dash_length: f64,
    /// Distance along the circle where this arc starts.
    pub start_offset: f64,
    pub premium: bool,
}

impl TierArc {
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.share * 100.0
    }
}

/// Lay the tiers around the circle in input order, each arc starting where
/// the previous ones end.
#[must_use]
pub fn tier_donut(tiers: &[TierBreakdown], circumference: f64) -> Vec<TierArc> {
    let total = tiers.iter().map(|t| t.rounds as f64).sum::<f64>().max(1.0);
    let mut preceding = 0.0;
    tiers
        .iter()
        .map(|tier| {
            let share = tier.rounds as f64 / total;
            let arc = TierArc {
                tier: tier.tier.clone(),
                rounds: tier.rounds,
                share,
                dash_length: share * circumference,
                start_offset: preceding * circumference,
                premium: tier.is_premium(),
            };
            preceding += share;
            arc
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub overview: OverviewStats,
    pub popular: Vec<CourseBar>,
    pub monthly: Vec<MonthBar>,
    pub tiers: Vec<TierArc>,
    pub top_members: Vec<TopMember>,
}

impl Dashboard {
    #[must_use]
    pub fn build(
        overview: OverviewStats,
        popular: &[PopularCourse],
        monthly: &[MonthlyRounds],
        tiers: &[TierBreakdown],
        top_members: Vec<TopMember>,
    ) -> Self {
        Self {
            overview,
            popular: popular_course_bars(popular),
            monthly: monthly_bars(monthly),
            tiers: tier_donut(tiers, donut_circumference()),
            top_members,
        }
    }
}

/// Fetch all five stat groups concurrently.
///
/// # Errors
///
/// Returns the first failing stats call; the dashboard is all or nothing.
pub async fn load_dashboard(api: &dyn ParPassApi) -> Result<Dashboard, ParPassError> {
    let (overview, popular, monthly, tiers, top_members) = try_join!(
        api.overview_stats(),
        api.popular_courses(),
        api.rounds_by_month(),
        api.tier_breakdown(),
        api.top_members()
    )?;
    Ok(Dashboard::build(overview, &popular, &monthly, &tiers, top_members))
}
