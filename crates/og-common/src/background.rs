//! Background photo selection.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the three background photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackgroundVariant {
    First,
    Second,
    Third,
}

impl BackgroundVariant {
    pub const ALL: [BackgroundVariant; 3] = [Self::First, Self::Second, Self::Third];

    /// Map a 1-based index to a variant.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }

    /// 1-based index of this variant.
    pub fn index(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// Pick a variant uniformly from {1, 2, 3}.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let index: u8 = rng.gen_range(1..=3);
        // gen_range(1..=3) only yields 1, 2 or 3
        Self::from_index(index).unwrap_or(Self::First)
    }

    /// Pick a variant using the thread-local generator.
    pub fn random() -> Self {
        Self::choose(&mut rand::thread_rng())
    }

    /// Label used in logs and metrics ("1", "2", "3").
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "1",
            Self::Second => "2",
            Self::Third => "3",
        }
    }
}

impl std::fmt::Display for BackgroundVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
