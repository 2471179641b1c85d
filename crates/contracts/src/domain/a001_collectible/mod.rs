//! Collectible Domain Module
//!
//! A claimed collectible as shown on its detail page: ownership,
//! freeze and cooldown attributes that drive the transfer eligibility
//! decision, plus the display passthrough fields.

pub mod aggregate;
pub mod view;

pub use aggregate::{
    Collectible, CollectibleDto, CollectibleTemplateId, CollectionInfo, RarityInfo,
};
pub use view::{build_detail_view, CollectibleActions, CollectibleDetailView, OwnerLink};
