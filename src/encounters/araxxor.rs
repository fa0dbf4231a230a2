//! Araxxor: four mechanics on a fixed six-second rotation

use super::{Encounter, PhaseSpec, PhaseTable};
use crate::error::InvalidTableError;

pub const ACTION_INTERVAL_MS: u64 = 6000;
pub const TICK_MS: u64 = 1000;

const PATTERN: [PhaseSpec<'static>; 4] = [
    PhaseSpec {
        ordinal: 1,
        label: "Acid Webs",
        description: "Webs that damage and restrict movement; avoid standing in webs.",
        attacks_between: 1,
    },
    PhaseSpec {
        ordinal: 2,
        label: "Leap & Bite",
        description: "Araxxor leaps and does a frontal bite/cleave; dodge or tank with prayers.",
        attacks_between: 1,
    },
    PhaseSpec {
        ordinal: 3,
        label: "Spawn Minions",
        description: "Spiderlings spawn that must be cleared quickly.",
        attacks_between: 1,
    },
    PhaseSpec {
        ordinal: 4,
        label: "Web Explosion / Reconfiguration",
        description: "Araxxor places dangerous web zones; reposition.",
        attacks_between: 1,
    },
];

const GUIDE: &[&str] = &[
    "Acid Webs: Avoid standing in webs; clear webs with movement.",
    "Leap & Bite: Telegraphed leap, move or protect from melee.",
    "Spawn Minions: Spiderlings appear, kill or kite them quickly.",
    "Web Explosion / Reconfiguration: Reposition to safe ground.",
];

pub fn encounter() -> Result<Encounter, InvalidTableError> {
    Ok(Encounter {
        slug: "araxxor",
        title: "Araxxor",
        guide: GUIDE,
        table: PhaseTable::from_attack_counts(&PATTERN, ACTION_INTERVAL_MS)?,
        tick_ms: TICK_MS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mechanic_lasts_six_seconds() {
        let encounter = encounter().unwrap();
        assert_eq!(encounter.table.len(), 4);
        assert!(encounter.table.iter().all(|p| p.duration_ms == 6000));
        assert_eq!(
            encounter.table.cycle_summary(),
            "Acid Webs → Leap & Bite → Spawn Minions → Web Explosion / Reconfiguration"
        );
    }
}
