// Normalized identity returned by every provider's profile mapper.

use serde::{Deserialize, Serialize};

/// The application's view of a provider identity.
///
/// `email` is always present in the serialized form, as `null` when the
/// provider does not supply one. Mappers must not invent a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Provider-specific user ID (numeric IDs are stringified).
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
