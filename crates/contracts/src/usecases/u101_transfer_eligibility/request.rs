use serde::{Deserialize, Serialize};

use crate::domain::a001_collectible::Collectible;
use crate::domain::common::AccountAddress;

/// Transfer eligibility check input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferEligibilityRequest {
    /// The collectible under evaluation, already resolved upstream
    pub collectible: Collectible,

    /// Address of the authenticated viewer, absent when not signed in
    #[serde(rename = "viewerAddress")]
    pub viewer_address: Option<AccountAddress>,
}
