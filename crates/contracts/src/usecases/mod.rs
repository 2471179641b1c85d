pub mod common;
pub mod u101_transfer_eligibility;
