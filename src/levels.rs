use crate::models::{LevelCategory, XpLevel};

/// the 10 progression levels, ordered by xp_required ascending
pub static LEVELS: [XpLevel; 10] = [
    XpLevel { level: 1, title: "Iniciante", xp_required: 0, category: LevelCategory::Beginner },
    XpLevel { level: 2, title: "Aprendiz", xp_required: 100, category: LevelCategory::Beginner },
    XpLevel { level: 3, title: "Explorador", xp_required: 250, category: LevelCategory::Beginner },
    XpLevel { level: 4, title: "Competente", xp_required: 500, category: LevelCategory::Intermediate },
    XpLevel { level: 5, title: "Qualificado", xp_required: 800, category: LevelCategory::Intermediate },
    XpLevel { level: 6, title: "Profissional", xp_required: 1200, category: LevelCategory::Intermediate },
    XpLevel { level: 7, title: "Especialista", xp_required: 1700, category: LevelCategory::Advanced },
    XpLevel { level: 8, title: "Mestre", xp_required: 2300, category: LevelCategory::Advanced },
    XpLevel { level: 9, title: "Elite", xp_required: 3000, category: LevelCategory::Advanced },
    XpLevel { level: 10, title: "Lenda", xp_required: 4000, category: LevelCategory::Expert },
];

/// next level lookup result; `next_level` is None at the level cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextLevel {
    pub next_level: Option<XpLevel>,
    pub xp_needed: u32,
}

/// progress within the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    /// 0..=100, floor
    pub percentage: u32,
    /// xp accrued inside the current level
    pub current_xp: u32,
    /// xp still missing to reach the next level
    pub xp_to_next: u32,
    /// xp span of the current level
    pub xp_needed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub leveled_up: bool,
    pub previous_level: XpLevel,
    pub new_level: XpLevel,
    pub levels_gained: u32,
}

/// highest level whose xp_required <= xp
pub fn calculate_level(xp: u32) -> XpLevel {
    LEVELS
        .iter()
        .rev()
        .find(|l| xp >= l.xp_required)
        .copied()
        .unwrap_or(LEVELS[0])
}

/// level following `current_level`, None/0 at the cap
pub fn get_next_level(current_level: u32) -> NextLevel {
    match LEVELS.iter().find(|l| l.level == current_level + 1) {
        Some(next) => NextLevel {
            next_level: Some(*next),
            xp_needed: next.xp_required,
        },
        None => NextLevel {
            next_level: None,
            xp_needed: 0,
        },
    }
}

/// progress towards the next level; pinned to 100% at the cap
pub fn calculate_level_progress(xp: u32) -> LevelProgress {
    let current = calculate_level(xp);
    let Some(next) = get_next_level(current.level).next_level else {
        return LevelProgress {
            percentage: 100,
            current_xp: xp,
            xp_to_next: 0,
            xp_needed: 0,
        };
    };

    // span is never zero: xp_required strictly increases across the catalog
    let xp_in_level = xp - current.xp_required;
    let span = next.xp_required - current.xp_required;

    LevelProgress {
        percentage: xp_in_level * 100 / span,
        current_xp: xp_in_level,
        xp_to_next: span - xp_in_level,
        xp_needed: span,
    }
}

/// did the jump from previous_xp to new_xp cross a level boundary?
pub fn check_level_up(previous_xp: u32, new_xp: u32) -> LevelUp {
    let previous_level = calculate_level(previous_xp);
    let new_level = calculate_level(new_xp);
    let levels_gained = new_level.level.saturating_sub(previous_level.level);

    LevelUp {
        leveled_up: levels_gained > 0,
        previous_level,
        new_level,
        levels_gained,
    }
}

/// category for a level number, beginner for anything outside the catalog
pub fn get_level_category(level: u32) -> LevelCategory {
    LEVELS
        .iter()
        .find(|l| l.level == level)
        .map(|l| l.category)
        .unwrap_or(LevelCategory::Beginner)
}

/// pt-BR display formatting: 1234 -> "1.234"
pub fn format_xp(xp: u32) -> String {
    let digits = xp.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(LEVELS.len(), 10);
        assert_eq!(LEVELS[0].xp_required, 0);
        for pair in LEVELS.windows(2) {
            assert!(pair[1].xp_required > pair[0].xp_required);
            assert_eq!(pair[1].level, pair[0].level + 1);
        }
    }

    #[test]
    fn test_calculate_level_boundaries() {
        assert_eq!(calculate_level(0).level, 1);
        assert_eq!(calculate_level(99).level, 1);
        assert_eq!(calculate_level(100).level, 2);
        assert_eq!(calculate_level(799).level, 4);
        assert_eq!(calculate_level(800).level, 5);
        assert_eq!(calculate_level(800).title, "Qualificado");
        assert_eq!(calculate_level(4000).level, 10);
        assert_eq!(calculate_level(999_999).level, 10);
    }

    #[test]
    fn test_calculate_level_is_maximal() {
        for xp in [0u32, 50, 100, 250, 799, 800, 3999, 4000, 10_000] {
            let level = calculate_level(xp);
            assert!(level.xp_required <= xp);
            for other in LEVELS.iter() {
                if other.xp_required <= xp {
                    assert!(other.xp_required <= level.xp_required);
                }
            }
        }
    }

    #[test]
    fn test_next_level() {
        let next = get_next_level(1);
        assert_eq!(next.next_level.map(|l| l.level), Some(2));
        assert_eq!(next.xp_needed, 100);
    }

    #[test]
    fn test_next_level_at_cap() {
        let next = get_next_level(10);
        assert!(next.next_level.is_none());
        assert_eq!(next.xp_needed, 0);
    }

    #[test]
    fn test_progress_midway() {
        // level 1 spans 0..100
        let p = calculate_level_progress(50);
        assert_eq!(p.percentage, 50);
        assert_eq!(p.current_xp, 50);
        assert_eq!(p.xp_to_next, 50);
        assert_eq!(p.xp_needed, 100);
    }

    #[test]
    fn test_progress_at_level_start() {
        let p = calculate_level_progress(100);
        assert_eq!(p.percentage, 0);
        assert_eq!(p.current_xp, 0);
        assert_eq!(p.xp_needed, 150);
    }

    #[test]
    fn test_progress_at_cap() {
        let p = calculate_level_progress(4500);
        assert_eq!(p.percentage, 100);
        assert_eq!(p.xp_to_next, 0);
        assert_eq!(p.xp_needed, 0);
    }

    #[test]
    fn test_progress_percentage_bounded() {
        for xp in (0..5000).step_by(37) {
            let p = calculate_level_progress(xp);
            assert!(p.percentage <= 100);
            if calculate_level(xp).level == 10 {
                assert_eq!(p.percentage, 100);
            }
        }
    }

    #[test]
    fn test_level_up_detection() {
        let up = check_level_up(90, 120);
        assert!(up.leveled_up);
        assert_eq!(up.previous_level.level, 1);
        assert_eq!(up.new_level.level, 2);
        assert_eq!(up.levels_gained, 1);
    }

    #[test]
    fn test_no_level_up_within_level() {
        let up = check_level_up(100, 240);
        assert!(!up.leveled_up);
        assert_eq!(up.levels_gained, 0);
    }

    #[test]
    fn test_multi_level_jump() {
        let up = check_level_up(0, 800);
        assert_eq!(up.levels_gained, 4);
    }

    #[test]
    fn test_level_category() {
        assert_eq!(get_level_category(1), LevelCategory::Beginner);
        assert_eq!(get_level_category(5), LevelCategory::Intermediate);
        assert_eq!(get_level_category(9), LevelCategory::Advanced);
        assert_eq!(get_level_category(10), LevelCategory::Expert);
        assert_eq!(get_level_category(99), LevelCategory::Beginner);
    }

    #[test]
    fn test_format_xp() {
        assert_eq!(format_xp(0), "0");
        assert_eq!(format_xp(999), "999");
        assert_eq!(format_xp(1234), "1.234");
        assert_eq!(format_xp(1_234_567), "1.234.567");
    }
}
