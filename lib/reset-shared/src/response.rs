use serde::{Deserialize, Serialize};

/// The body of a successful reset endpoint response.
///
/// The endpoint promises structured data but no particular
/// shape, so the body is kept as a raw json value. The
/// submit logic never reads a field of it; it only shows up
/// in the success diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResetResponse(pub serde_json::Value);
