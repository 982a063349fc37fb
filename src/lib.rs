//! Gamification engine for the Emprega Amapá course platform:
//! XP awards and level progression, achievement unlocking, and the
//! XP leaderboard with filters, podium and motivational messaging.
//!
//! Every function is a pure transformation over caller-supplied snapshots;
//! the only injected effects are timestamps (passed explicitly as
//! `DateTime<Utc>`) and v4 ids for ledger entries.

pub mod achievements;
pub mod data;
pub mod levels;
pub mod models;
pub mod ranking;
pub mod xp;

pub use achievements::{
    ACHIEVEMENTS, AchievementError, AchievementProgress, calculate_achievement_progress,
    check_achievement_unlocks, create_unlocked_achievement, get_all_achievements,
    get_badge_rarity_border_color, get_badge_rarity_color, get_recent_achievements,
    sort_achievements_by_rarity,
};
pub use levels::{
    LEVELS, LevelProgress, LevelUp, NextLevel, calculate_level, calculate_level_progress,
    check_level_up, format_xp, get_level_category, get_next_level,
};
pub use models::{
    Achievement, AchievementDef, BadgeRarity, LevelCategory, MedalColor, MedalType, RankingUser,
    UserGamificationProfile, XpLevel, XpReason, XpTransaction,
};
pub use ranking::{
    DEFAULT_CONTEXT_SIZE, DEFAULT_TOP_LIMIT, Podium, RankingFilters, RankingStats, UserPosition,
    add_ranking_positions,
    apply_ranking_filters, filter_by_level_range, filter_by_municipality, filter_by_specialty,
    find_user_position, get_medal_color, get_medal_type, get_motivational_message, get_podium,
    get_ranking_context, get_ranking_stats, get_top_ranking, get_xp_to_next_position, is_in_top_n,
    sort_users_by_xp,
};
pub use xp::{
    CourseXpAward, CourseXpOptions, XpBreakdownItem, calculate_course_xp, create_xp_transaction,
    sum_xp_transactions, update_streak,
};
