//! Fight resolution: skill scoring and the logistic win model.
//!
//! Everything here is a pure function of the two boxers and one random draw,
//! so it can be exercised without a ring or a repository.

use crate::domain::model::Boxer;

/// Full account of a resolved fight, in ring order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bout {
    pub boxer_1: Boxer,
    pub boxer_2: Boxer,
    pub skill_1: f64,
    pub skill_2: f64,
    /// Absolute skill gap, never negative.
    pub delta: f64,
    /// Logistic transform of `delta`, in `[0.5, 1.0]`.
    pub probability: f64,
    pub draw: f64,
    pub winner: Boxer,
    pub loser: Boxer,
}

impl Bout {
    /// True when the first entrant took the fight.
    pub fn first_entrant_won(&self) -> bool {
        self.winner.id() == self.boxer_1.id()
    }
}

/// -1 under 25, -2 over 35, otherwise 0.
pub fn age_modifier(age: u32) -> f64 {
    if age < 25 {
        -1.0
    } else if age > 35 {
        -2.0
    } else {
        0.0
    }
}

/// `weight * name_length + reach / 10 + age_modifier`.
///
/// The first term is an integer product; only the reach term is fractional.
pub fn fighting_skill(boxer: &Boxer) -> f64 {
    let name_length = boxer.name().chars().count() as u64;
    let base = u64::from(boxer.weight()) * name_length;
    base as f64 + boxer.reach() / 10.0 + age_modifier(boxer.age())
}

/// `1 / (1 + e^-delta)` over the absolute gap.
pub fn win_probability(delta: f64) -> f64 {
    1.0 / (1.0 + (-delta).exp())
}

/// Decides a fight between the first and second entrant.
///
/// The probability only measures how large the skill gap is, and it is always
/// compared in favour of `boxer_1`, whichever of the two is actually stronger.
pub fn resolve(boxer_1: &Boxer, boxer_2: &Boxer, draw: f64) -> Bout {
    let skill_1 = fighting_skill(boxer_1);
    let skill_2 = fighting_skill(boxer_2);
    let delta = (skill_1 - skill_2).abs();
    let probability = win_probability(delta);

    let (winner, loser) = if draw < probability {
        (boxer_1, boxer_2)
    } else {
        (boxer_2, boxer_1)
    };

    tracing::debug!(
        "Skills: {}={:.2}, {}={:.2}, delta={:.4}, p={:.6}, draw={:.6}",
        boxer_1.name(),
        skill_1,
        boxer_2.name(),
        skill_2,
        delta,
        probability,
        draw
    );

    Bout {
        boxer_1: boxer_1.clone(),
        boxer_2: boxer_2.clone(),
        skill_1,
        skill_2,
        delta,
        probability,
        draw,
        winner: winner.clone(),
        loser: loser.clone(),
    }
}
