//! Per-slot burner inputs: the scheduled well diameters and the behavior
//! kinds, plus the minimum-diameter policy that ties them together.

use crate::error::OptionsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the scheduled well diameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BurnerSize {
    In13,
    In15,
    In17,
    In19,
    In21,
}

impl BurnerSize {
    pub const ALL: [BurnerSize; 5] = [
        BurnerSize::In13,
        BurnerSize::In15,
        BurnerSize::In17,
        BurnerSize::In19,
        BurnerSize::In21,
    ];

    pub const fn inches(self) -> u32 {
        match self {
            BurnerSize::In13 => 13,
            BurnerSize::In15 => 15,
            BurnerSize::In17 => 17,
            BurnerSize::In19 => 19,
            BurnerSize::In21 => 21,
        }
    }

    #[inline]
    pub fn inches_f32(self) -> f32 {
        self.inches() as f32
    }
}

impl TryFrom<u32> for BurnerSize {
    type Error = OptionsError;

    fn try_from(inches: u32) -> Result<Self, Self::Error> {
        BurnerSize::ALL
            .into_iter()
            .find(|s| s.inches() == inches)
            .ok_or_else(|| OptionsError::UnsupportedDiameter(inches.to_string()))
    }
}

impl From<BurnerSize> for u32 {
    fn from(size: BurnerSize) -> u32 {
        size.inches()
    }
}

impl FromStr for BurnerSize {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('"');
        trimmed
            .parse::<u32>()
            .map_err(|_| OptionsError::UnsupportedDiameter(s.to_string()))
            .and_then(BurnerSize::try_from)
    }
}

impl fmt::Display for BurnerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\"", self.inches())
    }
}

/// Flame behavior of a burner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BurnerKind {
    #[serde(rename = "straight", alias = "straight-shoot")]
    StraightShoot,
    #[serde(rename = "spread-120")]
    Spread120,
    #[serde(rename = "spread-160")]
    Spread160,
    #[serde(rename = "focused")]
    Focused,
    #[serde(rename = "slow-cook")]
    SlowCook,
}

impl BurnerKind {
    pub const ALL: [BurnerKind; 5] = [
        BurnerKind::StraightShoot,
        BurnerKind::Spread120,
        BurnerKind::Spread160,
        BurnerKind::Focused,
        BurnerKind::SlowCook,
    ];

    /// Tag used by the options form and the JSON options format.
    pub const fn tag(self) -> &'static str {
        match self {
            BurnerKind::StraightShoot => "straight",
            BurnerKind::Spread120 => "spread-120",
            BurnerKind::Spread160 => "spread-160",
            BurnerKind::Focused => "focused",
            BurnerKind::SlowCook => "slow-cook",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BurnerKind::StraightShoot => "Straight-shoot",
            BurnerKind::Spread120 => "Spread 120°",
            BurnerKind::Spread160 => "Spread 160°",
            BurnerKind::Focused => "Focused",
            BurnerKind::SlowCook => "Slow-cook",
        }
    }

    /// Smallest well this kind is rated for, if it has one.
    pub const fn min_diameter(self) -> Option<BurnerSize> {
        match self {
            BurnerKind::Spread160 | BurnerKind::SlowCook => Some(BurnerSize::In17),
            BurnerKind::StraightShoot | BurnerKind::Spread120 | BurnerKind::Focused => None,
        }
    }

    pub fn admits(self, size: BurnerSize) -> bool {
        self.min_diameter().map_or(true, |min| size >= min)
    }
}

impl FromStr for BurnerKind {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "straight" | "straight-shoot" => Ok(BurnerKind::StraightShoot),
            "spread-120" | "spread120" => Ok(BurnerKind::Spread120),
            "spread-160" | "spread160" => Ok(BurnerKind::Spread160),
            "focused" => Ok(BurnerKind::Focused),
            "slow-cook" | "slowcook" => Ok(BurnerKind::SlowCook),
            _ => Err(OptionsError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for BurnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One burner slot as chosen on the options form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnerSpec {
    pub size: BurnerSize,
    pub kind: BurnerKind,
}

impl BurnerSpec {
    pub const fn new(size: BurnerSize, kind: BurnerKind) -> Self {
        Self { size, kind }
    }

    #[inline]
    pub fn meets_minimum(&self) -> bool {
        self.kind.admits(self.size)
    }
}

/// `17` or `17:spread-160`; the kind defaults to straight-shoot.
impl FromStr for BurnerSpec {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((size, kind)) => Ok(Self::new(size.parse()?, kind.parse()?)),
            None => Ok(Self::new(s.parse()?, BurnerKind::StraightShoot)),
        }
    }
}

impl Default for BurnerSpec {
    fn default() -> Self {
        Self::new(BurnerSize::In15, BurnerKind::StraightShoot)
    }
}
