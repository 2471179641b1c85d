use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AccountAddress;
use crate::enums::TransferEligibility;
use crate::usecases::common::{UseCaseError, UseCaseResult};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectibleTemplateId(pub Uuid);

impl CollectibleTemplateId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for CollectibleTemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Nested display records
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RarityInfo {
    pub name: String,
}

// ============================================================================
// Aggregate
// ============================================================================

/// A claimed collectible. Read-only to this crate once constructed:
/// every evaluation recomputes from these fields, nothing is cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    #[serde(rename = "templateId")]
    pub template_id: CollectibleTemplateId,

    /// On-chain asset id
    pub address: u64,

    pub title: String,

    #[serde(default)]
    pub body: String,

    pub image: String,

    pub edition: u32,

    #[serde(rename = "totalEditions")]
    pub total_editions: u32,

    pub collection: Option<CollectionInfo>,

    pub rarity: Option<RarityInfo>,

    /// Username of the current owner, for the profile link
    #[serde(rename = "currentOwner")]
    pub current_owner: Option<String>,

    #[serde(rename = "currentOwnerAddress")]
    pub current_owner_address: Option<AccountAddress>,

    #[serde(rename = "isFrozen", default)]
    pub is_frozen: bool,

    /// Earliest instant a transfer is permitted (minting cooldown)
    #[serde(rename = "transferrableAt")]
    pub transferrable_at: DateTime<Utc>,
}

impl Collectible {
    /// Classify whether `viewer` may transfer this collectible at `now`.
    ///
    /// Checks run in strict priority order, first match wins:
    /// authentication, then ownership, then the administrative freeze,
    /// then the minting cooldown. A non-owner is reported as such even
    /// when the item is also frozen or cooling down; a frozen item is
    /// reported frozen even when the cooldown is also open.
    ///
    /// Pure: reads only its arguments, never the wall clock.
    pub fn transfer_eligibility(
        &self,
        viewer: Option<&AccountAddress>,
        now: DateTime<Utc>,
    ) -> TransferEligibility {
        let Some(viewer) = viewer else {
            return TransferEligibility::NoUser;
        };
        // An absent owner address never matches any viewer
        if self.current_owner_address.as_ref() != Some(viewer) {
            return TransferEligibility::NotOwner;
        }
        if self.is_frozen {
            return TransferEligibility::Frozen;
        }
        // Strictly before the cooldown end blocks; the boundary instant
        // itself is already transferrable
        if now < self.transferrable_at {
            return TransferEligibility::MintedRecently;
        }
        TransferEligibility::Eligible
    }

    /// Build from the wire DTO, rejecting malformed records up front.
    ///
    /// A collectible with an unparseable timestamp must never reach the
    /// evaluator, so construction fails instead of defaulting.
    pub fn from_dto(dto: CollectibleDto) -> UseCaseResult<Self> {
        let template_id = dto
            .template_id
            .ok_or_else(|| UseCaseError::validation("templateId is required"))?;
        let template_id = Uuid::parse_str(&template_id).map_err(|e| {
            UseCaseError::validation("templateId is not a valid UUID").with_details(e.to_string())
        })?;

        let address = dto
            .address
            .ok_or_else(|| UseCaseError::validation("address is required"))?;

        let transferrable_at = dto
            .transferrable_at
            .ok_or_else(|| UseCaseError::validation("transferrableAt is required"))?;
        let transferrable_at = DateTime::parse_from_rfc3339(&transferrable_at)
            .map_err(|e| {
                UseCaseError::validation("transferrableAt is not a valid RFC 3339 timestamp")
                    .with_details(e.to_string())
            })?
            .with_timezone(&Utc);

        let collectible = Self {
            template_id: CollectibleTemplateId::new(template_id),
            address,
            title: dto.title,
            body: dto.body.unwrap_or_default(),
            image: dto.image.unwrap_or_default(),
            edition: dto.edition,
            total_editions: dto.total_editions,
            collection: dto.collection,
            rarity: dto.rarity,
            current_owner: dto.current_owner,
            current_owner_address: dto.current_owner_address.map(AccountAddress),
            is_frozen: dto.is_frozen,
            transferrable_at,
        };
        collectible.validate().map_err(UseCaseError::validation)?;
        Ok(collectible)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title must not be empty".into());
        }
        if self.edition == 0 {
            return Err("Edition numbering starts at 1".into());
        }
        if self.edition > self.total_editions {
            return Err("Edition exceeds the total edition count".into());
        }
        Ok(())
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CollectibleDto {
    #[serde(rename = "templateId")]
    pub template_id: Option<String>,
    pub address: Option<u64>,
    pub title: String,
    pub body: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub edition: u32,
    #[serde(rename = "totalEditions", default)]
    pub total_editions: u32,
    pub collection: Option<CollectionInfo>,
    pub rarity: Option<RarityInfo>,
    #[serde(rename = "currentOwner")]
    pub current_owner: Option<String>,
    #[serde(rename = "currentOwnerAddress")]
    pub current_owner_address: Option<String>,
    #[serde(rename = "isFrozen", default)]
    pub is_frozen: bool,
    #[serde(rename = "transferrableAt")]
    pub transferrable_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn collectible(owner: Option<&str>, is_frozen: bool, transferrable_at: DateTime<Utc>) -> Collectible {
        Collectible {
            template_id: CollectibleTemplateId::new_v4(),
            address: 7_014_233,
            title: "Sunset Run #3".to_string(),
            body: String::new(),
            image: "https://cdn.example.com/sunset-run-3.png".to_string(),
            edition: 3,
            total_editions: 100,
            collection: None,
            rarity: None,
            current_owner: owner.map(|_| "collector42".to_string()),
            current_owner_address: owner.map(AccountAddress::from),
            is_frozen,
            transferrable_at,
        }
    }

    #[test]
    fn test_no_viewer_is_no_user() {
        let item = collectible(Some("A"), false, now() - Duration::hours(1));
        assert_eq!(
            item.transfer_eligibility(None, now()),
            TransferEligibility::NoUser
        );
    }

    #[test]
    fn test_different_address_is_not_owner() {
        let item = collectible(Some("B"), false, now() - Duration::hours(1));
        let viewer = AccountAddress::from("A");
        assert_eq!(
            item.transfer_eligibility(Some(&viewer), now()),
            TransferEligibility::NotOwner
        );
    }

    #[test]
    fn test_owner_of_frozen_item_is_frozen() {
        let item = collectible(Some("A"), true, now() - Duration::hours(1));
        let viewer = AccountAddress::from("A");
        assert_eq!(
            item.transfer_eligibility(Some(&viewer), now()),
            TransferEligibility::Frozen
        );
    }

    #[test]
    fn test_cooldown_still_open_is_minted_recently() {
        let item = collectible(Some("A"), false, now() + Duration::hours(1));
        let viewer = AccountAddress::from("A");
        assert_eq!(
            item.transfer_eligibility(Some(&viewer), now()),
            TransferEligibility::MintedRecently
        );
    }

    #[test]
    fn test_owner_past_cooldown_is_eligible() {
        let item = collectible(Some("A"), false, now() - Duration::hours(1));
        let viewer = AccountAddress::from("A");
        assert_eq!(
            item.transfer_eligibility(Some(&viewer), now()),
            TransferEligibility::Eligible
        );
    }

    #[test]
    fn test_cooldown_boundary_is_not_blocking() {
        // transferrableAt == now: only strictly future instants block
        let item = collectible(Some("A"), false, now());
        let viewer = AccountAddress::from("A");
        assert_eq!(
            item.transfer_eligibility(Some(&viewer), now()),
            TransferEligibility::Eligible
        );
    }

    #[test]
    fn test_not_owner_wins_over_frozen() {
        let item = collectible(Some("B"), true, now() + Duration::hours(1));
        let viewer = AccountAddress::from("A");
        assert_eq!(
            item.transfer_eligibility(Some(&viewer), now()),
            TransferEligibility::NotOwner
        );
    }

    #[test]
    fn test_frozen_wins_over_cooldown() {
        let item = collectible(Some("A"), true, now() + Duration::hours(1));
        let viewer = AccountAddress::from("A");
        assert_eq!(
            item.transfer_eligibility(Some(&viewer), now()),
            TransferEligibility::Frozen
        );
    }

    #[test]
    fn test_absent_owner_address_never_matches() {
        let item = collectible(None, false, now() - Duration::hours(1));
        let viewer = AccountAddress::from("A");
        assert_eq!(
            item.transfer_eligibility(Some(&viewer), now()),
            TransferEligibility::NotOwner
        );
    }

    fn valid_dto() -> CollectibleDto {
        CollectibleDto {
            template_id: Some("3b5f8c10-6f4e-4a1d-9c7b-0a1b2c3d4e5f".to_string()),
            address: Some(7_014_233),
            title: "Sunset Run #3".to_string(),
            edition: 3,
            total_editions: 100,
            current_owner_address: Some("A".to_string()),
            transferrable_at: Some("2024-06-01T12:00:00Z".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_dto_builds_a_valid_collectible() {
        let item = Collectible::from_dto(valid_dto()).unwrap();
        assert_eq!(item.address, 7_014_233);
        assert_eq!(
            item.transferrable_at,
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(item.current_owner_address, Some(AccountAddress::from("A")));
    }

    #[test]
    fn test_from_dto_rejects_bad_timestamp() {
        let mut dto = valid_dto();
        dto.transferrable_at = Some("next tuesday".to_string());
        let err = Collectible::from_dto(dto).unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_from_dto_rejects_missing_timestamp() {
        let mut dto = valid_dto();
        dto.transferrable_at = None;
        assert!(Collectible::from_dto(dto).is_err());
    }

    #[test]
    fn test_from_dto_rejects_bad_template_id() {
        let mut dto = valid_dto();
        dto.template_id = Some("not-a-uuid".to_string());
        assert!(Collectible::from_dto(dto).is_err());
    }

    #[test]
    fn test_validate_rejects_edition_out_of_range() {
        let mut item = collectible(Some("A"), false, now());
        item.edition = 101;
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let item = collectible(Some("A"), false, now());
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("currentOwnerAddress").is_some());
        assert!(json.get("transferrableAt").is_some());
        assert!(json.get("isFrozen").is_some());
        assert!(json.get("totalEditions").is_some());
    }
}
