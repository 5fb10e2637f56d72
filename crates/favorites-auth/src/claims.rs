use serde::{Deserialize, Serialize};

/// Claims embedded in an access token.
///
/// Serialized in camelCase (`userId`), the shape tokens issued by the
/// users service already use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Identifier of the authenticated user
    pub user_id: i64,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
