//! Animation slots offered for mapping.
//!
//! The store accepts any non-empty slot name; this enum is the fixed set the
//! editor and the command line present to users.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A logical animation role a model can bind a file to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimSlot {
  Idle,
  Walk,
  Sprint,
  Air,
  Sneak,
  Swim,
  Crawl,
  Climb,
  Ride,
  Sleep,
  Die,
  ElytraFly,
  LieDown,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown animation slot: {0}")]
pub struct UnknownSlot(pub String);

impl AnimSlot {
  /// Every slot, in display order.
  pub const ALL: [AnimSlot; 13] = [
    AnimSlot::Idle,
    AnimSlot::Walk,
    AnimSlot::Sprint,
    AnimSlot::Air,
    AnimSlot::Sneak,
    AnimSlot::Swim,
    AnimSlot::Crawl,
    AnimSlot::Climb,
    AnimSlot::Ride,
    AnimSlot::Sleep,
    AnimSlot::Die,
    AnimSlot::ElytraFly,
    AnimSlot::LieDown,
  ];

  /// Property name used as the key in mapping files.
  pub fn name(&self) -> &'static str {
    match self {
      Self::Idle => "idle",
      Self::Walk => "walk",
      Self::Sprint => "sprint",
      Self::Air => "air",
      Self::Sneak => "sneak",
      Self::Swim => "swim",
      Self::Crawl => "crawl",
      Self::Climb => "climb",
      Self::Ride => "ride",
      Self::Sleep => "sleep",
      Self::Die => "die",
      Self::ElytraFly => "elytra_fly",
      Self::LieDown => "lie_down",
    }
  }
}

impl fmt::Display for AnimSlot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for AnimSlot {
  type Err = UnknownSlot;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .iter()
      .copied()
      .find(|slot| slot.name() == s)
      .ok_or_else(|| UnknownSlot(s.to_string()))
  }
}
