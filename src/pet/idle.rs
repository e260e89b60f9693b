use rand::seq::SliceRandom;
use rand::Rng;

use crate::pet::model::IdleKind;

const STANDING_PROBABILITY: f64 = 0.2;
const SLEEP_PROBABILITY: f64 = 0.1;
const STRETCHING_PROBABILITY: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdlePlan {
    pub kind: IdleKind,
    pub cycles: u32,
}

/// Map a uniform draw in `[0, 1)` onto an idle kind. Draws past the last
/// threshold mean "keep walking".
pub fn classify_roll(roll: f64) -> Option<IdleKind> {
    if roll < STANDING_PROBABILITY {
        Some(IdleKind::Standing)
    } else if roll < STANDING_PROBABILITY + SLEEP_PROBABILITY {
        Some(IdleKind::Sleeping)
    } else if roll < STANDING_PROBABILITY + SLEEP_PROBABILITY + STRETCHING_PROBABILITY {
        Some(IdleKind::Stretching)
    } else {
        None
    }
}

/// Swap a repeated choice for one of the two other idle kinds.
pub fn avoid_repeat<R: Rng + ?Sized>(
    choice: IdleKind,
    last: Option<IdleKind>,
    rng: &mut R,
) -> IdleKind {
    if last != Some(choice) {
        return choice;
    }
    let others: Vec<IdleKind> = IdleKind::ALL
        .into_iter()
        .filter(|kind| *kind != choice)
        .collect();
    others.choose(rng).copied().unwrap_or(choice)
}

pub fn sample_cycles<R: Rng + ?Sized>(kind: IdleKind, rng: &mut R) -> u32 {
    let (min, max) = kind.cycle_range();
    rng.gen_range(min..=max)
}

/// One idle check: roll, dodge the previous idle kind, then pick how many
/// cycles to run.
pub fn plan_idle<R: Rng + ?Sized>(rng: &mut R, last: Option<IdleKind>) -> Option<IdlePlan> {
    let roll: f64 = rng.gen();
    let kind = avoid_repeat(classify_roll(roll)?, last, rng);
    Some(IdlePlan {
        kind,
        cycles: sample_cycles(kind, rng),
    })
}
