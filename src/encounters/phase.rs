//! Phase tables and their construction

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::InvalidTableError;

/// A single entry in an encounter's special-attack cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Position of the phase in the encounter, unique within a table
    pub ordinal: u32,
    pub label: String,
    /// Display-only explanation or condition
    pub description: String,
    /// Time from this phase becoming current until the next one begins
    pub duration_ms: u64,
}

impl Phase {
    pub fn new(ordinal: u32, label: &str, description: &str, duration_ms: u64) -> Self {
        Self {
            ordinal,
            label: label.to_string(),
            description: description.to_string(),
            duration_ms,
        }
    }
}

/// A phase described by the number of attacks until the next phase
#[derive(Debug, Clone, Copy)]
pub struct PhaseSpec<'a> {
    pub ordinal: u32,
    pub label: &'a str,
    pub description: &'a str,
    pub attacks_between: u64,
}

/// One attack in a boss's full attack sequence
#[derive(Debug, Clone, Copy)]
pub struct Attack<'a> {
    pub number: u32,
    pub label: &'a str,
    pub description: &'a str,
    pub special: bool,
}

impl<'a> Attack<'a> {
    /// A plain auto-attack, skipped when deriving phases
    pub const fn auto(number: u32) -> Self {
        Self {
            number,
            label: "Auto",
            description: "",
            special: false,
        }
    }

    pub const fn special(number: u32, label: &'a str, description: &'a str) -> Self {
        Self {
            number,
            label,
            description,
            special: true,
        }
    }
}

/// Ordered, non-empty, cyclic list of phases. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTable {
    phases: Vec<Phase>,
}

impl PhaseTable {
    /// Validate and wrap a list of phases
    pub fn new(phases: Vec<Phase>) -> Result<Self, InvalidTableError> {
        if phases.is_empty() {
            return Err(InvalidTableError::Empty);
        }

        let mut seen = HashSet::with_capacity(phases.len());
        for phase in &phases {
            if phase.duration_ms == 0 {
                return Err(InvalidTableError::NonPositiveDuration {
                    ordinal: phase.ordinal,
                });
            }
            if !seen.insert(phase.ordinal) {
                return Err(InvalidTableError::DuplicateOrdinal {
                    ordinal: phase.ordinal,
                });
            }
        }

        Ok(Self { phases })
    }

    /// Build a table where each phase lasts `attacks_between * per_attack_ms`
    pub fn from_attack_counts(
        specs: &[PhaseSpec<'_>],
        per_attack_ms: u64,
    ) -> Result<Self, InvalidTableError> {
        let phases = specs
            .iter()
            .map(|spec| {
                let duration_ms = spec
                    .attacks_between
                    .checked_mul(per_attack_ms)
                    .ok_or(InvalidTableError::DurationOverflow {
                        ordinal: spec.ordinal,
                    })?;
                Ok(Phase::new(spec.ordinal, spec.label, spec.description, duration_ms))
            })
            .collect::<Result<Vec<_>, InvalidTableError>>()?;

        Self::new(phases)
    }

    /// Derive a specials-only table from a full attack sequence.
    ///
    /// Each special lasts for the forward circular gap to the next special in
    /// the full sequence. A lone special spans the whole sequence.
    pub fn from_attack_sequence(
        sequence: &[Attack<'_>],
        per_attack_ms: u64,
    ) -> Result<Self, InvalidTableError> {
        let total = sequence.len() as u64;
        let specials: Vec<usize> = sequence
            .iter()
            .enumerate()
            .filter(|(_, attack)| attack.special)
            .map(|(position, _)| position)
            .collect();

        let specs: Vec<PhaseSpec<'_>> = specials
            .iter()
            .enumerate()
            .map(|(i, &position)| {
                let next = specials[(i + 1) % specials.len()];
                let gap = match (next as u64 + total - position as u64) % total {
                    0 => total,
                    gap => gap,
                };
                let attack = &sequence[position];
                PhaseSpec {
                    ordinal: attack.number,
                    label: attack.label,
                    description: attack.description,
                    attacks_between: gap,
                }
            })
            .collect();

        Self::from_attack_counts(&specs, per_attack_ms)
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Always false for a constructed table
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    pub fn first(&self) -> &Phase {
        &self.phases[0]
    }

    /// Phase at `index`, wrapped into range
    pub fn at(&self, index: usize) -> &Phase {
        &self.phases[index % self.phases.len()]
    }

    /// Phase following `index`, wrapping after the last
    pub fn phase_after(&self, index: usize) -> &Phase {
        self.at(index + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Phase> {
        self.phases.iter()
    }

    /// Labels joined in cycle order, e.g. `COMBO → LAVA → GHOSTS`
    pub fn cycle_summary(&self) -> String {
        self.phases
            .iter()
            .map(|phase| phase.label.as_str())
            .collect::<Vec<_>>()
            .join(" → ")
    }
}
