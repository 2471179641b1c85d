//! Detail view assembly for the collectible page.
//!
//! Produces the serializable view model the presentation layer renders:
//! ready-made links, enabled/disabled action flags and the explanatory
//! message for a blocked transfer. The renderer itself lives outside
//! this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_collectible::Collectible;
use crate::domain::common::AccountAddress;
use crate::enums::TransferEligibility;
use crate::shared::environment::Environment;
use crate::shared::{messages, urls};

/// Owner row of the metadata list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerLink {
    pub username: String,
    #[serde(rename = "profileUrl")]
    pub profile_url: String,
}

/// Action buttons, present only for an authenticated viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectibleActions {
    #[serde(rename = "sellUrl")]
    pub sell_url: String,
    #[serde(rename = "sellEnabled")]
    pub sell_enabled: bool,
    #[serde(rename = "transferUrl")]
    pub transfer_url: String,
    #[serde(rename = "transferEnabled")]
    pub transfer_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectibleDetailView {
    pub title: String,
    pub image: String,
    pub body: String,

    #[serde(rename = "collectionName")]
    pub collection_name: Option<String>,

    #[serde(rename = "rarityName")]
    pub rarity_name: Option<String>,

    /// "Edition X of Y"
    #[serde(rename = "editionLabel")]
    pub edition_label: String,

    pub owner: Option<OwnerLink>,

    #[serde(rename = "explorerUrl")]
    pub explorer_url: String,

    pub eligibility: TransferEligibility,

    pub actions: Option<CollectibleActions>,

    #[serde(rename = "transferMessage")]
    pub transfer_message: Option<String>,
}

/// Assemble the detail view for one collectible and one viewer.
///
/// Pure with respect to `now`: callers pass the instant, typically
/// `Utc::now()` at the request boundary.
pub fn build_detail_view(
    collectible: &Collectible,
    viewer: Option<&AccountAddress>,
    env: &Environment,
    now: DateTime<Utc>,
) -> CollectibleDetailView {
    let eligibility = collectible.transfer_eligibility(viewer, now);

    // Actions are only rendered for an authenticated viewer; the
    // explanatory message follows the same rule in the original page
    let actions = viewer.map(|_| CollectibleActions {
        sell_url: urls::HOME.to_string(),
        // TODO: enable once the secondary marketplace ships
        sell_enabled: false,
        transfer_url: urls::nft_transfer_url(
            &collectible.template_id.to_string(),
            collectible.address,
        ),
        transfer_enabled: eligibility.is_eligible(),
    });
    let transfer_message = viewer
        .and_then(|_| messages::transfer_message(eligibility, collectible.transferrable_at));

    CollectibleDetailView {
        title: collectible.title.clone(),
        image: collectible.image.clone(),
        body: collectible.body.clone(),
        collection_name: collectible.collection.as_ref().map(|c| c.name.clone()),
        rarity_name: collectible.rarity.as_ref().map(|r| r.name.clone()),
        edition_label: format!(
            "Edition {} of {}",
            collectible.edition, collectible.total_editions
        ),
        owner: collectible.current_owner.as_ref().map(|username| OwnerLink {
            username: username.clone(),
            profile_url: urls::profile_showcase_url(username),
        }),
        explorer_url: env.explorer_asset_url(collectible.address),
        eligibility,
        actions,
        transfer_message,
    }
}
