use serde::Serialize;

/// Label given when the portal publishes no warnings at all
pub const NO_ANNOUNCEMENTS: &str = "発表なし";

/// Generic category label used for the no-warnings sentinel
pub const GENERIC_CATEGORY: &str = "警報・注意報";

/// Alarm type used for the no-warnings sentinel
pub const NONE_ISSUED: &str = "無し";

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct WarnInfo {
    pub label: String,
    pub alarm_type: String,
}

impl WarnInfo {
    pub fn new(label: &str, alarm_type: &str) -> WarnInfo {
        WarnInfo { label: label.to_string(), alarm_type: alarm_type.to_string() }
    }

    /// Returns the sentinel pair meaning that no warnings are issued
    pub fn none_issued() -> WarnInfo {
        WarnInfo::new(GENERIC_CATEGORY, NONE_ISSUED)
    }
}
