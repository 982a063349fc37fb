use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{XpReason, XpTransaction};

pub const XP_COURSE_COMPLETED: u32 = 50;
pub const XP_CERTIFICATE_UPLOADED: u32 = 20;
pub const XP_FIRST_COURSE_BONUS: u32 = 25;
pub const XP_MILESTONE_5_COURSES: u32 = 100;
pub const XP_MILESTONE_10_COURSES: u32 = 200;
pub const XP_DAILY_STREAK_BONUS: u32 = 5;

/// flags for a course-completion award; the caller owns their accuracy
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseXpOptions {
    pub is_first_course: bool,
    pub has_certificate: bool,
    /// completed count at the time of the event; milestone bonuses fire on
    /// exact counts (5, 10), not thresholds
    pub courses_completed: Option<u32>,
}

/// one itemized line of an award
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpBreakdownItem {
    pub reason: &'static str,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseXpAward {
    pub base_xp: u32,
    pub bonus_xp: u32,
    pub total_xp: u32,
    /// insertion order: base, certificate, first course, milestones
    pub breakdown: Vec<XpBreakdownItem>,
}

/// XP earned for completing a course, with itemized breakdown
pub fn calculate_course_xp(options: &CourseXpOptions) -> CourseXpAward {
    let base_xp = XP_COURSE_COMPLETED;
    let mut bonus_xp = 0;
    let mut breakdown = vec![XpBreakdownItem {
        reason: "Curso finalizado",
        amount: base_xp,
    }];

    if options.has_certificate {
        bonus_xp += XP_CERTIFICATE_UPLOADED;
        breakdown.push(XpBreakdownItem {
            reason: "Certificado enviado",
            amount: XP_CERTIFICATE_UPLOADED,
        });
    }

    if options.is_first_course {
        bonus_xp += XP_FIRST_COURSE_BONUS;
        breakdown.push(XpBreakdownItem {
            reason: "Bônus primeiro curso",
            amount: XP_FIRST_COURSE_BONUS,
        });
    }

    if options.courses_completed == Some(5) {
        bonus_xp += XP_MILESTONE_5_COURSES;
        breakdown.push(XpBreakdownItem {
            reason: "Marco: 5 cursos",
            amount: XP_MILESTONE_5_COURSES,
        });
    }

    if options.courses_completed == Some(10) {
        bonus_xp += XP_MILESTONE_10_COURSES;
        breakdown.push(XpBreakdownItem {
            reason: "Marco: 10 cursos",
            amount: XP_MILESTONE_10_COURSES,
        });
    }

    CourseXpAward {
        base_xp,
        bonus_xp,
        total_xp: base_xp + bonus_xp,
        breakdown,
    }
}

/// ledger entry for an XP-changing event; timestamp injected by the caller
pub fn create_xp_transaction(
    user_id: &str,
    amount: i64,
    reason: XpReason,
    related_id: Option<String>,
    now: DateTime<Utc>,
) -> XpTransaction {
    XpTransaction {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        amount,
        reason,
        related_id,
        timestamp: now,
    }
}

/// total XP held in a ledger
pub fn sum_xp_transactions(transactions: &[XpTransaction]) -> i64 {
    transactions.iter().map(|t| t.amount).sum()
}

/// streak after an activity on `today`:
/// same day keeps it, the day after extends it, a gap resets to 1
pub fn update_streak(
    last_activity: Option<NaiveDate>,
    today: NaiveDate,
    current_streak: u32,
) -> u32 {
    match last_activity {
        None => 1,
        Some(last) => match (today - last).num_days() {
            0 => current_streak.max(1),
            1 => current_streak + 1,
            _ => 1,
        },
    }
}
