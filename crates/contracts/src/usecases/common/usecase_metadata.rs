/// Identification and documentation metadata for a UseCase
pub trait UseCaseMetadata {
    /// UseCase index (for example, "u101")
    fn usecase_index() -> &'static str;

    /// Technical name (for example, "transfer_eligibility")
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name in the form "u101_transfer_eligibility"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
