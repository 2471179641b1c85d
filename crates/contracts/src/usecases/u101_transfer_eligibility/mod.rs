pub mod request;
pub mod response;

pub use request::TransferEligibilityRequest;
pub use response::TransferEligibilityResponse;

use chrono::{DateTime, Utc};

use crate::shared::messages;
use crate::usecases::common::UseCaseMetadata;

pub struct TransferEligibilityCheck;

impl UseCaseMetadata for TransferEligibilityCheck {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "transfer_eligibility"
    }

    fn display_name() -> &'static str {
        "Transfer eligibility check"
    }

    fn description() -> &'static str {
        "Classifies whether the viewer may transfer a collectible: authentication, ownership, administrative freeze, minting cooldown"
    }
}

impl TransferEligibilityCheck {
    /// Pure evaluation seam: the caller supplies the instant.
    pub fn evaluate_at(
        request: &TransferEligibilityRequest,
        now: DateTime<Utc>,
    ) -> TransferEligibilityResponse {
        let status = request
            .collectible
            .transfer_eligibility(request.viewer_address.as_ref(), now);
        TransferEligibilityResponse {
            status,
            is_transferrable: status.is_eligible(),
            message: messages::transfer_message(status, request.collectible.transferrable_at),
        }
    }

    /// Convenience wrapper reading the wall clock once, at the boundary
    pub fn evaluate(request: &TransferEligibilityRequest) -> TransferEligibilityResponse {
        Self::evaluate_at(request, Utc::now())
    }
}
