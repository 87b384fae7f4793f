//! Default value functions for configuration.

/// Returns `true` (for serde defaults).
pub fn default_true() -> bool {
    true
}

// =============================================================================
// Input Defaults
// =============================================================================

pub fn default_address() -> String {
    "fibs.com:4321".to_string()
}

pub fn default_max_line_len() -> usize {
    fibs_cookie::DEFAULT_MAX_LINE_LEN
}

pub fn default_client() -> String {
    "fibscm".to_string()
}

// =============================================================================
// Log Defaults
// =============================================================================

pub fn default_log_filter() -> String {
    "info".to_string()
}
