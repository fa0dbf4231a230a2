//! Encounter definitions
//!
//! Each boss is described by a phase table, the tick granularity its timer
//! runs at, and the guide text shown alongside it. Adding a boss only needs a
//! new module returning an [`Encounter`].

pub mod araxxor;
pub mod cerberus;
pub mod phase;

pub use phase::{Attack, Phase, PhaseSpec, PhaseTable};

use crate::error::InvalidTableError;

/// Static description of one boss encounter
#[derive(Debug, Clone)]
pub struct Encounter {
    /// URL-safe identifier, e.g. `cerberus`
    pub slug: &'static str,
    pub title: &'static str,
    /// Strategy notes, one paragraph per entry
    pub guide: &'static [&'static str],
    pub table: PhaseTable,
    pub tick_ms: u64,
}

/// Build every known encounter
pub fn all() -> Result<Vec<Encounter>, InvalidTableError> {
    Ok(vec![cerberus::encounter()?, araxxor::encounter()?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        let encounters = all().unwrap();
        let mut slugs: Vec<_> = encounters.iter().map(|e| e.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), encounters.len());
    }

    #[test]
    fn ticks_divide_every_duration() {
        for encounter in all().unwrap() {
            for phase in encounter.table.iter() {
                assert_eq!(
                    phase.duration_ms % encounter.tick_ms,
                    0,
                    "{} phase {}",
                    encounter.slug,
                    phase.ordinal
                );
            }
        }
    }
}
