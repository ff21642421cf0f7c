use uuid::Uuid;

use crate::error::CoreError;

pub mod gratitude;
pub mod interpretation;
pub mod mood;
pub mod record;

/// Namespace for ids derived from client-generated keys.
pub const CLIENT_ID_NAMESPACE: Uuid = Uuid::from_u128(0x8f3b_6c1e_2d4a_4f7b_9e05_6a1d_c2b7_e410);

/// Resolve an id sent by a syncing client.
///
/// Uuids are kept as sent. Offline clients key records by millisecond
/// strings such as `"1767225600000"`; those map to a v5 uuid, so the same
/// key always lands on the same record.
pub fn resolve_client_id(id: &str) -> Result<Uuid, CoreError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CoreError::MissingId);
    }
    Ok(Uuid::parse_str(id).unwrap_or_else(|_| Uuid::new_v5(&CLIENT_ID_NAMESPACE, id.as_bytes())))
}
