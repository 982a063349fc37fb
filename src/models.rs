use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelCategory {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl LevelCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelCategory::Beginner => "beginner",
            LevelCategory::Intermediate => "intermediate",
            LevelCategory::Advanced => "advanced",
            LevelCategory::Expert => "expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl BadgeRarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeRarity::Common => "common",
            BadgeRarity::Rare => "rare",
            BadgeRarity::Epic => "epic",
            BadgeRarity::Legendary => "legendary",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "rare" => BadgeRarity::Rare,
            "epic" => BadgeRarity::Epic,
            "legendary" => BadgeRarity::Legendary,
            _ => BadgeRarity::Common,
        }
    }
}

/// one of the 10 static level catalog entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XpLevel {
    pub level: u32,
    pub title: &'static str,
    pub xp_required: u32,
    pub category: LevelCategory,
}

/// static achievement catalog entry (no unlock state)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: BadgeRarity,
    pub xp_reward: u32,
}

/// achievement instance attached to a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub rarity: BadgeRarity,
    pub xp_reward: u32,
    pub unlocked_at: Option<DateTime<Utc>>,
    pub is_locked: bool,
}

impl Achievement {
    /// locked instance from a catalog entry
    pub fn locked(def: &AchievementDef) -> Self {
        Self {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            icon: def.icon.to_string(),
            rarity: def.rarity,
            xp_reward: def.xp_reward,
            unlocked_at: None,
            is_locked: true,
        }
    }

    /// unlocked instance from a catalog entry, stamped at `now`
    pub fn unlocked(def: &AchievementDef, now: DateTime<Utc>) -> Self {
        Self {
            unlocked_at: Some(now),
            is_locked: false,
            ..Self::locked(def)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserGamificationProfile {
    pub user_id: String,
    pub xp: u32,
    pub level: XpLevel,
    pub achievements: Vec<Achievement>,
    pub courses_completed: u32,
    pub certificates_uploaded: u32,
    pub streak_days: u32,
    pub ranking_position: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingUser {
    pub user_id: String,
    pub name: String,
    pub xp: u32,
    pub level: XpLevel,
    pub courses_completed: u32,
    pub achievements: Vec<Achievement>,
    /// always overwritten by the ranking sort, never trusted from input
    pub position: u32,
    pub municipality: Option<String>,
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XpReason {
    CourseCompleted,
    CertificateUploaded,
    Milestone,
    Streak,
}

impl XpReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            XpReason::CourseCompleted => "course_completed",
            XpReason::CertificateUploaded => "certificate_uploaded",
            XpReason::Milestone => "milestone",
            XpReason::Streak => "streak",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "certificate_uploaded" => XpReason::CertificateUploaded,
            "milestone" => XpReason::Milestone,
            "streak" => XpReason::Streak,
            _ => XpReason::CourseCompleted,
        }
    }
}

/// append-only XP ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpTransaction {
    pub id: String,
    pub user_id: String,
    pub amount: i64,
    pub reason: XpReason,
    pub related_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedalType {
    Gold,
    Silver,
    Bronze,
}

impl MedalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedalType::Gold => "gold",
            MedalType::Silver => "silver",
            MedalType::Bronze => "bronze",
        }
    }
}

/// three-tone medal palette (CSS variable references)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MedalColor {
    pub base: &'static str,
    pub shine: &'static str,
    pub shadow: &'static str,
}
