pub mod course;
pub mod member;
pub mod review;
pub mod round;
pub mod stats;

pub use course::{Course, CourseRating, RecommendedCourse, TierFilter};
pub use member::{Member, Tier, Usage};
pub use review::{NewReview, Rating, Review};
pub use round::Round;
pub use stats::{
    MonthlyRounds, OverviewStats, PopularCourse, TierBreakdown, TopMember, lenient_count,
    lenient_rating, parse_count,
};
