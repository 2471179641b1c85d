use serde::{Deserialize, Serialize};

use crate::enums::TransferEligibility;

/// Transfer eligibility check outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferEligibilityResponse {
    /// Classification, first matching rule in priority order
    pub status: TransferEligibility,

    /// Convenience flag: `status == Eligible`
    #[serde(rename = "isTransferrable")]
    pub is_transferrable: bool,

    /// Explanation for a blocked transfer, absent when eligible
    pub message: Option<String>,
}
