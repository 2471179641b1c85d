//! Application route templates and link construction.
//!
//! Route templates use `:param` placeholders, filled by exact string
//! substitution. The presentation layer receives ready-made links and
//! never builds paths itself.

pub const HOME: &str = "/";
pub const NFT_TRANSFER: &str = "/nft/:templateId/transfer/:assetId";
pub const PROFILE_SHOWCASE: &str = "/profile/:username";

/// Fill `:param` placeholders in a route template
pub fn fill_route(template: &str, params: &[(&str, &str)]) -> String {
    let mut route = template.to_string();
    for (name, value) in params {
        route = route.replace(name, value);
    }
    route
}

/// Link to the transfer page of a claimed collectible
pub fn nft_transfer_url(template_id: &str, asset_id: u64) -> String {
    fill_route(
        NFT_TRANSFER,
        &[
            (":templateId", template_id),
            (":assetId", &asset_id.to_string()),
        ],
    )
}

/// Link to the owner's public showcase
pub fn profile_showcase_url(username: &str) -> String {
    fill_route(PROFILE_SHOWCASE, &[(":username", username)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nft_transfer_url_fills_both_params() {
        let url = nft_transfer_url("3b5f8c10-6f4e-4a1d-9c7b-0a1b2c3d4e5f", 7_014_233);
        assert_eq!(
            url,
            "/nft/3b5f8c10-6f4e-4a1d-9c7b-0a1b2c3d4e5f/transfer/7014233"
        );
        assert!(!url.contains(':'));
    }

    #[test]
    fn test_profile_showcase_url() {
        assert_eq!(profile_showcase_url("collector42"), "/profile/collector42");
    }
}
