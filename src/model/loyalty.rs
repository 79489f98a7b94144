use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoyaltyTier {
    Standard,
    Silver,
    Gold,
}

impl LoyaltyTier {
    const SILVER_THRESHOLD: u64 = 500;
    const GOLD_THRESHOLD: u64 = 1500;

    pub fn for_points(points: u64) -> Self {
        if points >= Self::GOLD_THRESHOLD {
            Self::Gold
        } else if points >= Self::SILVER_THRESHOLD {
            Self::Silver
        } else {
            Self::Standard
        }
    }

    /// Points needed to reach the next tier, `None` at the top.
    pub fn points_to_next(points: u64) -> Option<u64> {
        match Self::for_points(points) {
            Self::Standard => Some(Self::SILVER_THRESHOLD - points),
            Self::Silver => Some(Self::GOLD_THRESHOLD - points),
            Self::Gold => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Silver => "Argent",
            Self::Gold => "Or",
        }
    }
}

/// Loyalty balance for the signed-in customer.
///
/// The tier is derived from points on decode; a tier sent by the backend
/// is ignored so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LoyaltyWire")]
pub struct LoyaltyAccount {
    pub points: u64,
    pub tier: LoyaltyTier,
    pub points_to_next_tier: Option<u64>,
}

#[derive(Deserialize)]
struct LoyaltyWire {
    points: u64,
}

impl From<LoyaltyWire> for LoyaltyAccount {
    fn from(wire: LoyaltyWire) -> Self {
        Self::from_points(wire.points)
    }
}

impl LoyaltyAccount {
    pub fn from_points(points: u64) -> Self {
        Self {
            points,
            tier: LoyaltyTier::for_points(points),
            points_to_next_tier: LoyaltyTier::points_to_next(points),
        }
    }
}
