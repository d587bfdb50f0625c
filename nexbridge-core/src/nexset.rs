use serde::{Deserialize, Serialize};

/// Read-only projection of a Nexla data set ("nexset").
///
/// Exactly the four fields the bridge exposes to the front-end. Upstream
/// payloads carry many more; deserialization drops them, which is the whole
/// projection. The string fields are nullable upstream and stay nullable
/// here, serialized as explicit `null`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Nexset {
    /// Numeric identifier assigned by the Nexla platform.
    pub id: i64,
    /// Human-readable name, when set.
    pub name: Option<String>,
    /// Free-form description, when set.
    pub description: Option<String>,
    /// Platform lifecycle status (e.g. `"ACTIVE"`, `"PAUSED"`).
    pub status: Option<String>,
}
