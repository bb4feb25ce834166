use serde::{Deserialize, Serialize};

/// Window selection for record queries. Explicit `start`/`end` (epoch millis)
/// win over the named `range`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RangeParams {
    pub range: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
}
