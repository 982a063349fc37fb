use std::collections::HashSet;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::models::{Achievement, AchievementDef, BadgeRarity, UserGamificationProfile};

/// all unlockable achievements, evaluated in this order
pub static ACHIEVEMENTS: [AchievementDef; 12] = [
    AchievementDef {
        id: "first-course",
        title: "Primeira Jornada",
        description: "Complete seu primeiro curso",
        icon: "GraduationCap",
        rarity: BadgeRarity::Common,
        xp_reward: 25,
    },
    AchievementDef {
        id: "courses-5",
        title: "Aprendiz Dedicado",
        description: "Complete 5 cursos",
        icon: "BookOpen",
        rarity: BadgeRarity::Rare,
        xp_reward: 100,
    },
    AchievementDef {
        id: "courses-10",
        title: "Especialista em Formação",
        description: "Complete 10 cursos",
        icon: "Award",
        rarity: BadgeRarity::Epic,
        xp_reward: 200,
    },
    AchievementDef {
        id: "courses-25",
        title: "Mestre do Conhecimento",
        description: "Complete 25 cursos",
        icon: "Trophy",
        rarity: BadgeRarity::Legendary,
        xp_reward: 500,
    },
    AchievementDef {
        id: "certificate-first",
        title: "Certificado Conquistado",
        description: "Envie seu primeiro certificado",
        icon: "FileCheck",
        rarity: BadgeRarity::Common,
        xp_reward: 20,
    },
    AchievementDef {
        id: "certificate-5",
        title: "Colecionador de Diplomas",
        description: "Envie 5 certificados",
        icon: "FileStack",
        rarity: BadgeRarity::Rare,
        xp_reward: 100,
    },
    AchievementDef {
        id: "level-5",
        title: "Qualificado",
        description: "Alcance o nível 5",
        icon: "Star",
        rarity: BadgeRarity::Rare,
        xp_reward: 50,
    },
    AchievementDef {
        id: "level-10",
        title: "Lendário",
        description: "Alcance o nível máximo (10)",
        icon: "Crown",
        rarity: BadgeRarity::Legendary,
        xp_reward: 300,
    },
    AchievementDef {
        id: "streak-7",
        title: "Semana Intensa",
        description: "Mantenha 7 dias consecutivos de atividade",
        icon: "Flame",
        rarity: BadgeRarity::Rare,
        xp_reward: 75,
    },
    AchievementDef {
        id: "streak-30",
        title: "Dedicação Total",
        description: "Mantenha 30 dias consecutivos de atividade",
        icon: "Zap",
        rarity: BadgeRarity::Epic,
        xp_reward: 250,
    },
    AchievementDef {
        id: "top-10",
        title: "Top 10",
        description: "Entre no top 10 do ranking",
        icon: "Medal",
        rarity: BadgeRarity::Epic,
        xp_reward: 150,
    },
    AchievementDef {
        id: "top-3",
        title: "Pódio",
        description: "Entre no top 3 do ranking",
        icon: "Podium",
        rarity: BadgeRarity::Legendary,
        xp_reward: 300,
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AchievementError {
    /// catalog/id mismatch; a bug in the caller, not a user error
    #[error("achievement `{0}` not found in catalog")]
    UnknownAchievement(String),
}

/// unlock condition for a catalog id; all thresholds are monotonic
/// (>= for counters, <= for ranking position), unlike the exact-match
/// milestone bonuses in the XP calculator
fn condition_met(id: &str, profile: &UserGamificationProfile) -> bool {
    match id {
        "first-course" => profile.courses_completed >= 1,
        "courses-5" => profile.courses_completed >= 5,
        "courses-10" => profile.courses_completed >= 10,
        "courses-25" => profile.courses_completed >= 25,
        "certificate-first" => profile.certificates_uploaded >= 1,
        "certificate-5" => profile.certificates_uploaded >= 5,
        "level-5" => profile.level.level >= 5,
        "level-10" => profile.level.level >= 10,
        "streak-7" => profile.streak_days >= 7,
        "streak-30" => profile.streak_days >= 30,
        "top-10" => profile.ranking_position.is_some_and(|p| p <= 10),
        "top-3" => profile.ranking_position.is_some_and(|p| p <= 3),
        _ => false,
    }
}

fn unlocked_ids(achievements: &[Achievement]) -> HashSet<&str> {
    achievements
        .iter()
        .filter(|a| !a.is_locked)
        .map(|a| a.id.as_str())
        .collect()
}

/// Newly unlocked achievements for a profile snapshot.
///
/// An unlock fires only if its condition holds AND the id is absent from the
/// unlocked set of both the current profile and the optional previous
/// snapshot, so repeated calls never re-emit an already-unlocked id.
pub fn check_achievement_unlocks(
    profile: &UserGamificationProfile,
    previous: Option<&UserGamificationProfile>,
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    let current = unlocked_ids(&profile.achievements);
    let before = previous.map(|p| unlocked_ids(&p.achievements)).unwrap_or_default();

    let newly: Vec<Achievement> = ACHIEVEMENTS
        .iter()
        .filter(|def| {
            condition_met(def.id, profile)
                && !current.contains(def.id)
                && !before.contains(def.id)
        })
        .map(|def| Achievement::unlocked(def, now))
        .collect();

    if !newly.is_empty() {
        debug!(
            user_id = %profile.user_id,
            count = newly.len(),
            "achievements unlocked"
        );
    }
    newly
}

/// Unlocked instance for a catalog id, stamped at `now`.
///
/// An unknown id means the caller holds an id the catalog does not.
pub fn create_unlocked_achievement(
    id: &str,
    now: DateTime<Utc>,
) -> Result<Achievement, AchievementError> {
    ACHIEVEMENTS
        .iter()
        .find(|def| def.id == id)
        .map(|def| Achievement::unlocked(def, now))
        .ok_or_else(|| AchievementError::UnknownAchievement(id.to_string()))
}

/// full catalog materialized with lock state for the given unlocked ids
pub fn get_all_achievements(unlocked: &[String], now: DateTime<Utc>) -> Vec<Achievement> {
    ACHIEVEMENTS
        .iter()
        .map(|def| {
            if unlocked.iter().any(|id| id == def.id) {
                Achievement::unlocked(def, now)
            } else {
                Achievement::locked(def)
            }
        })
        .collect()
}

/// CSS variable for a rarity tint
pub fn get_badge_rarity_color(rarity: BadgeRarity) -> &'static str {
    match rarity {
        BadgeRarity::Common => "var(--badge-common)",
        BadgeRarity::Rare => "var(--badge-rare)",
        BadgeRarity::Epic => "var(--badge-epic)",
        BadgeRarity::Legendary => "var(--badge-legendary)",
    }
}

/// CSS variable for a rarity border
pub fn get_badge_rarity_border_color(rarity: BadgeRarity) -> &'static str {
    match rarity {
        BadgeRarity::Common => "var(--badge-common-border)",
        BadgeRarity::Rare => "var(--badge-rare-border)",
        BadgeRarity::Epic => "var(--badge-epic-border)",
        BadgeRarity::Legendary => "var(--badge-legendary-border)",
    }
}

/// sort weight, rarer first
fn rarity_rank(rarity: BadgeRarity) -> u8 {
    match rarity {
        BadgeRarity::Legendary => 0,
        BadgeRarity::Epic => 1,
        BadgeRarity::Rare => 2,
        BadgeRarity::Common => 3,
    }
}

/// rarest first, stable among equals
pub fn sort_achievements_by_rarity(achievements: &[Achievement]) -> Vec<Achievement> {
    let mut sorted = achievements.to_vec();
    sorted.sort_by_key(|a| rarity_rank(a.rarity));
    sorted
}

/// unlocked achievements, newest first, capped at `limit`
pub fn get_recent_achievements(achievements: &[Achievement], limit: usize) -> Vec<Achievement> {
    let mut unlocked: Vec<Achievement> = achievements
        .iter()
        .filter(|a| !a.is_locked && a.unlocked_at.is_some())
        .cloned()
        .collect();
    unlocked.sort_by(|a, b| b.unlocked_at.cmp(&a.unlocked_at));
    unlocked.truncate(limit);
    unlocked
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementProgress {
    pub unlocked: usize,
    pub total: usize,
    /// 0..=100, floor; 0 for an empty set
    pub percentage: u32,
}

pub fn calculate_achievement_progress(achievements: &[Achievement]) -> AchievementProgress {
    let unlocked = achievements.iter().filter(|a| !a.is_locked).count();
    let total = achievements.len();
    let percentage = if total == 0 {
        0
    } else {
        (unlocked * 100 / total) as u32
    };

    AchievementProgress {
        unlocked,
        total,
        percentage,
    }
}
