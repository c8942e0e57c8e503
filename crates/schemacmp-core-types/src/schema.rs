//! Field keys and event names shared by every structured log line.
//!
//! Log consumers and the test capture match on these strings, so they are
//! part of the tool's observable interface.

// Operation envelope
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Which input, which file, which category
pub const FIELD_SIDE: &str = "side";
pub const FIELD_PATH: &str = "path";
pub const FIELD_CATEGORY: &str = "category";

// Sizes
pub const FIELD_BYTES: &str = "bytes";
pub const FIELD_ELEMENT_COUNT: &str = "element_count";
pub const FIELD_COMMON_LEN: &str = "common_len";
pub const FIELD_ONLY_LOCAL_LEN: &str = "only_local_len";
pub const FIELD_ONLY_COMPLETE_LEN: &str = "only_complete_len";

// Set by log_op_error!
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_unique() {
        let keys = [
            FIELD_COMPONENT,
            FIELD_OP,
            FIELD_EVENT,
            FIELD_DURATION_MS,
            FIELD_SIDE,
            FIELD_PATH,
            FIELD_CATEGORY,
            FIELD_BYTES,
            FIELD_ELEMENT_COUNT,
            FIELD_COMMON_LEN,
            FIELD_ONLY_LOCAL_LEN,
            FIELD_ONLY_COMPLETE_LEN,
            FIELD_ERR_KIND,
            FIELD_ERR_CODE,
        ];
        let unique: std::collections::BTreeSet<&str> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn test_event_lifecycle_names() {
        assert_eq!([EVENT_START, EVENT_END, EVENT_END_ERROR], ["start", "end", "end_error"]);
        assert!(FIELD_ERR_KIND.starts_with("err."));
        assert!(FIELD_ERR_CODE.starts_with("err."));
    }
}
