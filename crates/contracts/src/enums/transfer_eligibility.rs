use serde::{Deserialize, Serialize};

/// Outcome of the transfer eligibility check for a collectible.
///
/// Closed set: four blocking statuses plus `Eligible`. The blocking
/// variants are ordered by priority — authentication before ownership,
/// ownership before platform locks, freeze before the minting cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransferEligibility {
    /// No authenticated viewer
    NoUser,
    /// Viewer is not the current owner
    NotOwner,
    /// Administrative freeze, blocks transfer unconditionally
    Frozen,
    /// Minting cooldown window still open
    MintedRecently,
    /// Transfer permitted
    Eligible,
}

impl TransferEligibility {
    /// Stable wire code
    pub fn code(&self) -> &'static str {
        match self {
            TransferEligibility::NoUser => "noUser",
            TransferEligibility::NotOwner => "notOwner",
            TransferEligibility::Frozen => "frozen",
            TransferEligibility::MintedRecently => "mintedRecently",
            TransferEligibility::Eligible => "eligible",
        }
    }

    /// Message catalog key for a blocking status, `None` when eligible.
    ///
    /// Every blocking variant has exactly one key; the eligible case is
    /// an explicit absence, not a lookup miss.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            TransferEligibility::NoUser => Some("cannotTransfer.noUser"),
            TransferEligibility::NotOwner => Some("cannotTransfer.notOwner"),
            TransferEligibility::Frozen => Some("cannotTransfer.frozen"),
            TransferEligibility::MintedRecently => Some("cannotTransfer.mintedRecently"),
            TransferEligibility::Eligible => None,
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, TransferEligibility::Eligible)
    }

    /// The four blocking statuses, in check priority order
    pub fn blocking() -> Vec<TransferEligibility> {
        vec![
            TransferEligibility::NoUser,
            TransferEligibility::NotOwner,
            TransferEligibility::Frozen,
            TransferEligibility::MintedRecently,
        ]
    }

    pub fn all() -> Vec<TransferEligibility> {
        let mut statuses = Self::blocking();
        statuses.push(TransferEligibility::Eligible);
        statuses
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "noUser" => Some(TransferEligibility::NoUser),
            "notOwner" => Some(TransferEligibility::NotOwner),
            "frozen" => Some(TransferEligibility::Frozen),
            "mintedRecently" => Some(TransferEligibility::MintedRecently),
            "eligible" => Some(TransferEligibility::Eligible),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransferEligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
