//! Static mock data standing in for the absent persistence layer.
//! Rosters and profiles would come from a store in a real deployment;
//! here they are deterministic fixtures for the presentation layer.

use crate::achievements::ACHIEVEMENTS;
use crate::levels::calculate_level;
use crate::models::{Achievement, RankingUser, UserGamificationProfile};

const FIRST_NAMES: [&str; 10] = [
    "Maria", "Pedro", "Ana", "Carlos", "Juliana", "Roberto", "Fernanda", "Lucas", "Camila",
    "Rafael",
];
const LAST_NAMES: [&str; 8] = [
    "Silva", "Santos", "Oliveira", "Souza", "Costa", "Lima", "Pereira", "Ferreira",
];
const MUNICIPALITIES: [&str; 4] = ["Macapá", "Santana", "Laranjal do Jari", "Oiapoque"];
const SPECIALTIES: [&str; 4] = ["TI", "Gestão", "Saúde", "Educação"];

/// 20-user demo roster, xp descending from 1000 in steps of 40
pub fn mock_ranking_users() -> Vec<RankingUser> {
    (0..20)
        .map(|i| {
            let xp = 1000 - i as u32 * 40;
            RankingUser {
                user_id: format!("user-{}", i + 1),
                name: format!("{} {}", FIRST_NAMES[i % 10], LAST_NAMES[i % 8]),
                xp,
                level: calculate_level(xp),
                courses_completed: 25 - i as u32,
                achievements: Vec::new(),
                position: i as u32 + 1,
                municipality: Some(MUNICIPALITIES[i % 4].to_string()),
                specialty: Some(SPECIALTIES[i % 4].to_string()),
            }
        })
        .collect()
}

/// the logged-in demo user, one completed course and nothing unlocked yet
pub fn mock_profile() -> UserGamificationProfile {
    let xp = 50;
    UserGamificationProfile {
        user_id: "current-user".to_string(),
        xp,
        level: calculate_level(xp),
        achievements: ACHIEVEMENTS.iter().map(Achievement::locked).collect(),
        courses_completed: 1,
        certificates_uploaded: 0,
        streak_days: 0,
        ranking_position: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{add_ranking_positions, get_ranking_stats};

    #[test]
    fn test_roster_shape() {
        let roster = mock_ranking_users();
        assert_eq!(roster.len(), 20);
        assert_eq!(roster[0].xp, 1000);
        assert_eq!(roster[19].xp, 240);
        assert!(roster.iter().all(|u| u.municipality.is_some()));
    }

    #[test]
    fn test_roster_is_already_in_xp_order() {
        let ranked = add_ranking_positions(&mock_ranking_users());
        let xps: Vec<_> = ranked.iter().map(|u| u.xp).collect();
        let mut expected = xps.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(xps, expected);
        assert_eq!(ranked[0].position, 1);
        assert_eq!(ranked[19].position, 20);
    }

    #[test]
    fn test_roster_stats_non_zero() {
        let stats = get_ranking_stats(&mock_ranking_users());
        assert_eq!(stats.total_users, 20);
        assert_eq!(stats.top_xp, 1000);
        assert!(stats.average_xp > 0);
    }

    #[test]
    fn test_profile_level_matches_xp() {
        let profile = mock_profile();
        assert_eq!(profile.level, calculate_level(profile.xp));
        assert_eq!(profile.achievements.len(), 12);
        assert!(profile.achievements.iter().all(|a| a.is_locked));
    }
}
