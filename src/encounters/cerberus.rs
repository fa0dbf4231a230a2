//! Cerberus: specials derived from the 28-attack rotation

use super::{Attack, Encounter, PhaseTable};
use crate::error::InvalidTableError;

/// Cerberus attacks on a six-tick cycle
pub const ATTACK_INTERVAL_MS: u64 = 3600;
pub const TICK_MS: u64 = 100;

const LAVA: &str = "Only if < 200 HP";
const GHOSTS: &str = "Only if < 400 HP";

const ROTATION: [Attack<'static>; 28] = [
    Attack::special(1, "COMBO", ""),
    Attack::auto(2),
    Attack::auto(3),
    Attack::auto(4),
    Attack::special(5, "LAVA", LAVA),
    Attack::auto(6),
    Attack::special(7, "GHOSTS", GHOSTS),
    Attack::auto(8),
    Attack::auto(9),
    Attack::special(10, "LAVA", LAVA),
    Attack::special(11, "COMBO", ""),
    Attack::auto(12),
    Attack::auto(13),
    Attack::special(14, "GHOSTS", GHOSTS),
    Attack::special(15, "LAVA", LAVA),
    Attack::auto(16),
    Attack::auto(17),
    Attack::auto(18),
    Attack::auto(19),
    Attack::special(20, "LAVA", LAVA),
    Attack::special(21, "COMBO", ""),
    Attack::auto(22),
    Attack::auto(23),
    Attack::auto(24),
    Attack::special(25, "LAVA", LAVA),
    Attack::auto(26),
    Attack::auto(27),
    Attack::special(28, "GHOSTS", GHOSTS),
];

const GUIDE: &[&str] = &[
    "Cerberus has a special attack pattern that determines how she uses her attacks.",
    "As mentioned in each attack section, Cerberus' mechanics are initiated after the following, \
     quickly summarized here:",
    "The triple attack is performed as the first attack, then after every ten normal attacks.",
    "The summoned souls attack is performed every seventh attack, but only after Cerberus has under 400 hitpoints.",
    "The lava pools are deployed every fifth attack, but only after Cerberus has under 200 hitpoints.",
    "If the attacks end up overlapping with each other (e.g a triple attack and summoned souls on attack #21), \
     Cerberus will instead prioritise the attacks in the following order: Triple attack > Summoned Souls > Lava pools.",
    "There is also a 10% chance that Cerberus will not use the summoned souls or lava pools special attacks \
     when she is supposed to, and will use a regular attack instead.",
    "Cerberus attacks on a six-tick (3.6s) cycle.",
];

pub fn encounter() -> Result<Encounter, InvalidTableError> {
    Ok(Encounter {
        slug: "cerberus",
        title: "Cerberus",
        guide: GUIDE,
        table: PhaseTable::from_attack_sequence(&ROTATION, ATTACK_INTERVAL_MS)?,
        tick_ms: TICK_MS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_specials_in_order() {
        let encounter = encounter().unwrap();
        let ordinals: Vec<u32> = encounter.table.iter().map(|p| p.ordinal).collect();
        assert_eq!(ordinals, vec![1, 5, 7, 10, 11, 14, 15, 20, 21, 25, 28]);
        assert!(encounter.table.iter().all(|p| p.label != "Auto"));
    }

    #[test]
    fn conditions_carry_through() {
        let encounter = encounter().unwrap();
        let lava = encounter.table.get(1).unwrap();
        assert_eq!(lava.label, "LAVA");
        assert_eq!(lava.description, LAVA);
        assert_eq!(lava.duration_ms, 2 * ATTACK_INTERVAL_MS);
    }

    #[test]
    fn guide_keeps_rule_paragraphs() {
        let encounter = encounter().unwrap();
        assert_eq!(encounter.guide.len(), 8);
        assert!(encounter.guide[1].starts_with("As mentioned in each attack section"));
        assert!(encounter.guide[1].ends_with("quickly summarized here:"));
    }
}
