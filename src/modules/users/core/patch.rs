use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::modules::users::core::user::User;

// Serde collapses both an absent key and an explicit `null` into `None` for
// a plain `Option`. Nullable fields deserialize through this wrapper so the
// two stay distinguishable: absent => `None`, `null` => `Some(None)`.
fn some_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// A partial update as it arrives on the wire. Absent keys leave the
/// corresponding field untouched; unrecognized keys (email included) are
/// ignored. The birth date stays a raw string until `resolve_patch` parses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "some_or_null")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "some_or_null")]
    pub phone_number: Option<Option<String>>,
    pub birth_date: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("birth date `{0}` is not a valid yyyy-mm-dd date")]
    UnparsableBirthDate(String),

    #[error("birth date must not be in the future")]
    BirthDateInFuture,
}

/// A patch with its birth date parsed and checked, ready to merge into a
/// stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<Option<String>>,
    pub phone_number: Option<Option<String>>,
    pub birth_date: Option<NaiveDate>,
}

impl UserChanges {
    pub fn apply_to(self, user: &mut User) {
        if let Some(v) = self.first_name {
            user.first_name = v;
        }
        if let Some(v) = self.last_name {
            user.last_name = v;
        }
        if let Some(v) = self.address {
            user.address = v;
        }
        if let Some(v) = self.phone_number {
            user.phone_number = v;
        }
        if let Some(v) = self.birth_date {
            user.birth_date = v;
        }
    }
}

/// Parse and check a raw patch. A patched birth date may be `today` but never
/// later; the minimum-age floor does not apply to patches. Provided names are
/// assigned as-is, without the non-empty check create runs.
pub fn resolve_patch(patch: UserPatch, today: NaiveDate) -> Result<UserChanges, PatchError> {
    let birth_date = match patch.birth_date {
        Some(raw) => {
            let parsed = raw
                .parse::<NaiveDate>()
                .map_err(|_| PatchError::UnparsableBirthDate(raw))?;
            if parsed > today {
                return Err(PatchError::BirthDateInFuture);
            }
            Some(parsed)
        }
        None => None,
    };
    Ok(UserChanges {
        first_name: patch.first_name,
        last_name: patch.last_name,
        address: patch.address,
        phone_number: patch.phone_number,
        birth_date,
    })
}
