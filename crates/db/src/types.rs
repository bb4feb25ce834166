/// Last cumulative foreground total seen for a package on a given local day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageCursor {
    pub package_name: String,
    pub day: String,
    pub foreground_millis: i64,
    pub observed_at: i64,
}
