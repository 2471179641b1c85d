pub mod transfer_eligibility;

pub use transfer_eligibility::TransferEligibility;
