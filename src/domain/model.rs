use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::{BoxingError, Result};

/// Lightest weight (in pounds) that maps to a weight class.
pub const MIN_WEIGHT: u32 = 125;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxerId(pub u64);

impl fmt::Display for BoxerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightClass {
    Featherweight,
    Lightweight,
    Middleweight,
    Heavyweight,
}

impl WeightClass {
    pub fn from_weight(weight: u32) -> Result<Self> {
        let class = match weight {
            w if w >= 203 => WeightClass::Heavyweight,
            w if w >= 166 => WeightClass::Middleweight,
            w if w >= 133 => WeightClass::Lightweight,
            w if w >= MIN_WEIGHT => WeightClass::Featherweight,
            _ => {
                tracing::error!("Invalid weight: {}. Must be at least {}.", weight, MIN_WEIGHT);
                return Err(BoxingError::InvalidWeight { weight });
            }
        };
        tracing::debug!("Assigned weight class {} for weight {}", class, weight);
        Ok(class)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightClass::Featherweight => "FEATHERWEIGHT",
            WeightClass::Lightweight => "LIGHTWEIGHT",
            WeightClass::Middleweight => "MIDDLEWEIGHT",
            WeightClass::Heavyweight => "HEAVYWEIGHT",
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome recorded against one boxer after a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FightResult {
    Win,
    Loss,
}

impl FightResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            FightResult::Win => "win",
            FightResult::Loss => "loss",
        }
    }
}

impl fmt::Display for FightResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A boxer as seen by the ring.
///
/// Fields are read-only so the weight class can never drift from the weight
/// it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Boxer {
    id: BoxerId,
    name: String,
    weight: u32,
    height: u32,
    reach: f64,
    age: u32,
    weight_class: WeightClass,
}

impl Boxer {
    pub fn new(
        id: BoxerId,
        name: impl Into<String>,
        weight: u32,
        height: u32,
        reach: f64,
        age: u32,
    ) -> Result<Self> {
        let weight_class = WeightClass::from_weight(weight)?;
        // NaN and infinities have no JSON form.
        if !reach.is_finite() {
            tracing::error!("Invalid reach for boxer ID {}: {}", id, reach);
            return Err(BoxingError::InvalidReach { reach });
        }
        Ok(Self {
            id,
            name: name.into(),
            weight,
            height,
            reach,
            age,
            weight_class,
        })
    }

    pub fn id(&self) -> BoxerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn reach(&self) -> f64 {
        self.reach
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight_class(&self) -> WeightClass {
        self.weight_class
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxerStats {
    pub fights: u32,
    pub wins: u32,
}

impl BoxerStats {
    pub fn record(&mut self, result: FightResult) {
        self.fights += 1;
        if result == FightResult::Win {
            self.wins += 1;
        }
    }
}
