use std::cmp::Ordering;

use tracing::debug;

use crate::models::{MedalColor, MedalType, RankingUser};

pub const DEFAULT_TOP_LIMIT: usize = 10;
pub const DEFAULT_CONTEXT_SIZE: usize = 2;

/// Collation key for Portuguese names: lowercased with diacritics folded,
/// so "Álvaro" sorts next to "Alvaro" instead of after "Zé".
fn collation_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            _ => c,
        })
        .collect()
}

fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b)).then_with(|| a.cmp(b))
}

/// Ranking order: xp desc, then courses completed desc, then name asc.
/// Input order is never a tie-break; two fully tied users are ordered by name.
pub fn sort_users_by_xp(users: &[RankingUser]) -> Vec<RankingUser> {
    let mut sorted = users.to_vec();
    sorted.sort_by(|a, b| {
        b.xp.cmp(&a.xp)
            .then_with(|| b.courses_completed.cmp(&a.courses_completed))
            .then_with(|| compare_names(&a.name, &b.name))
    });
    sorted
}

/// sort and stamp 1-based positions; input positions are ignored
pub fn add_ranking_positions(users: &[RankingUser]) -> Vec<RankingUser> {
    let mut ranked = sort_users_by_xp(users);
    for (i, user) in ranked.iter_mut().enumerate() {
        user.position = i as u32 + 1;
    }
    ranked
}

/// case-insensitive exact match; empty filter passes everything through
pub fn filter_by_municipality(users: &[RankingUser], municipality: &str) -> Vec<RankingUser> {
    if municipality.is_empty() {
        return users.to_vec();
    }
    let wanted = municipality.to_lowercase();
    users
        .iter()
        .filter(|u| {
            u.municipality
                .as_deref()
                .is_some_and(|m| m.to_lowercase() == wanted)
        })
        .cloned()
        .collect()
}

/// case-insensitive exact match; empty filter passes everything through
pub fn filter_by_specialty(users: &[RankingUser], specialty: &str) -> Vec<RankingUser> {
    if specialty.is_empty() {
        return users.to_vec();
    }
    let wanted = specialty.to_lowercase();
    users
        .iter()
        .filter(|u| {
            u.specialty
                .as_deref()
                .is_some_and(|s| s.to_lowercase() == wanted)
        })
        .cloned()
        .collect()
}

/// inclusive range on the user's level number
pub fn filter_by_level_range(users: &[RankingUser], min_level: u32, max_level: u32) -> Vec<RankingUser> {
    users
        .iter()
        .filter(|u| u.level.level >= min_level && u.level.level <= max_level)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct RankingFilters {
    pub municipality: Option<String>,
    pub specialty: Option<String>,
    pub min_level: Option<u32>,
    pub max_level: Option<u32>,
}

/// Composes municipality, specialty, then level range (only when both bounds
/// are set), and re-ranks the survivors. Positions come out relative to the
/// filtered population, not the global roster.
pub fn apply_ranking_filters(users: &[RankingUser], filters: &RankingFilters) -> Vec<RankingUser> {
    let mut filtered = users.to_vec();

    if let Some(municipality) = filters.municipality.as_deref() {
        filtered = filter_by_municipality(&filtered, municipality);
    }
    if let Some(specialty) = filters.specialty.as_deref() {
        filtered = filter_by_specialty(&filtered, specialty);
    }
    if let (Some(min), Some(max)) = (filters.min_level, filters.max_level) {
        filtered = filter_by_level_range(&filtered, min, max);
    }

    debug!(
        input = users.len(),
        output = filtered.len(),
        "ranking filters applied"
    );
    add_ranking_positions(&filtered)
}

/// ranked top `limit`
pub fn get_top_ranking(users: &[RankingUser], limit: usize) -> Vec<RankingUser> {
    let mut ranked = add_ranking_positions(users);
    ranked.truncate(limit);
    ranked
}

#[derive(Debug, Clone, Default)]
pub struct Podium {
    pub first: Option<RankingUser>,
    pub second: Option<RankingUser>,
    pub third: Option<RankingUser>,
}

/// top three slots; missing slots are None, never an error
pub fn get_podium(users: &[RankingUser]) -> Podium {
    let ranked = add_ranking_positions(users);
    Podium {
        first: ranked.first().cloned(),
        second: ranked.get(1).cloned(),
        third: ranked.get(2).cloned(),
    }
}

#[derive(Debug, Clone)]
pub struct UserPosition {
    /// 1-based; 0 is the explicit not-found sentinel
    pub position: u32,
    pub user: Option<RankingUser>,
    pub total_users: usize,
}

pub fn find_user_position(users: &[RankingUser], user_id: &str) -> UserPosition {
    let ranked = add_ranking_positions(users);
    let total_users = ranked.len();
    let user = ranked.into_iter().find(|u| u.user_id == user_id);

    UserPosition {
        position: user.as_ref().map(|u| u.position).unwrap_or(0),
        user,
        total_users,
    }
}

/// ranked window centered on `position`, clamped to the roster bounds;
/// shorter than 2*context_size+1 near the edges
pub fn get_ranking_context(
    users: &[RankingUser],
    position: u32,
    context_size: usize,
) -> Vec<RankingUser> {
    let ranked = add_ranking_positions(users);
    let position = position as usize;
    let start = position.saturating_sub(context_size + 1).min(ranked.len());
    let end = (position + context_size).min(ranked.len()).max(start);
    ranked[start..end].to_vec()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankingStats {
    pub total_users: usize,
    /// floor of the mean
    pub average_xp: u32,
    /// floor of the mean
    pub average_courses_completed: u32,
    pub top_xp: u32,
}

/// aggregate stats; all zero for an empty roster
pub fn get_ranking_stats(users: &[RankingUser]) -> RankingStats {
    if users.is_empty() {
        return RankingStats::default();
    }

    let total_xp: u64 = users.iter().map(|u| u.xp as u64).sum();
    let total_courses: u64 = users.iter().map(|u| u.courses_completed as u64).sum();
    let count = users.len() as u64;

    RankingStats {
        total_users: users.len(),
        average_xp: (total_xp / count) as u32,
        average_courses_completed: (total_courses / count) as u32,
        top_xp: users.iter().map(|u| u.xp).max().unwrap_or(0),
    }
}

/// gold/silver/bronze for positions 1/2/3
pub fn get_medal_type(position: u32) -> Option<MedalType> {
    match position {
        1 => Some(MedalType::Gold),
        2 => Some(MedalType::Silver),
        3 => Some(MedalType::Bronze),
        _ => None,
    }
}

/// medal palette for a position, None off the podium
pub fn get_medal_color(position: u32) -> Option<MedalColor> {
    get_medal_type(position).map(|medal| match medal {
        MedalType::Gold => MedalColor {
            base: "var(--medal-gold)",
            shine: "var(--medal-gold-shine)",
            shadow: "var(--medal-gold-shadow)",
        },
        MedalType::Silver => MedalColor {
            base: "var(--medal-silver)",
            shine: "var(--medal-silver-shine)",
            shadow: "var(--medal-silver-shadow)",
        },
        MedalType::Bronze => MedalColor {
            base: "var(--medal-bronze)",
            shine: "var(--medal-bronze-shine)",
            shadow: "var(--medal-bronze-shadow)",
        },
    })
}

/// position 0 (not found) is never inside any top N
pub fn is_in_top_n(position: u32, n: u32) -> bool {
    position > 0 && position <= n
}

/// XP missing to overtake the user one position above; the +1 makes the
/// overtake strict rather than a tie. 0 if the user is missing or first.
pub fn get_xp_to_next_position(users: &[RankingUser], user_id: &str) -> u32 {
    let ranked = add_ranking_positions(users);
    let Some(index) = ranked.iter().position(|u| u.user_id == user_id) else {
        return 0;
    };
    if index == 0 {
        return 0;
    }
    ranked[index - 1].xp - ranked[index].xp + 1
}

/// Motivation tiers, checked in fixed priority order: 1st place, podium,
/// top 10, then percentile bands. The podium check wins even when the
/// percentile bands would also match.
pub fn get_motivational_message(position: u32, total_users: usize) -> &'static str {
    if position == 1 {
        return "🏆 Você está em primeiro lugar! Continue assim!";
    }
    if position <= 3 {
        return "🥇 Você está no pódio! Excelente trabalho!";
    }
    if position <= 10 {
        return "⭐ Você está no top 10! Muito bem!";
    }
    if total_users == 0 {
        return "🎯 Continue finalizando cursos para subir no ranking!";
    }

    let percentile = position as usize * 100 / total_users;
    if percentile <= 25 {
        return "💪 Você está entre os 25% melhores!";
    }
    if percentile <= 50 {
        return "📈 Você está na metade superior! Continue se aprimorando!";
    }
    "🎯 Continue finalizando cursos para subir no ranking!"
}
