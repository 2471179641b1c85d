//! User-facing explanations for blocked transfers.
//!
//! Total over the blocking statuses: every blocking status resolves to
//! exactly one message, the eligible case to `None`. Localization
//! happens downstream, keyed by [`TransferEligibility::message_key`];
//! this catalog is the built-in English fallback.

use chrono::{DateTime, Utc};

use crate::enums::TransferEligibility;
use crate::shared::date_utils::format_datetime;

/// Explanation for a blocked transfer, `None` when the transfer is
/// permitted. `transferrable_at` feeds the minted-recently message.
pub fn transfer_message(
    status: TransferEligibility,
    transferrable_at: DateTime<Utc>,
) -> Option<String> {
    match status {
        TransferEligibility::NoUser => {
            Some("Sign in to transfer this collectible.".to_string())
        }
        TransferEligibility::NotOwner => {
            Some("Only the current owner can transfer this collectible.".to_string())
        }
        TransferEligibility::Frozen => {
            Some("This collectible is frozen and cannot be transferred.".to_string())
        }
        TransferEligibility::MintedRecently => Some(format!(
            "This collectible was minted recently and can be transferred after {}.",
            format_datetime(transferrable_at)
        )),
        TransferEligibility::Eligible => None,
    }
}
