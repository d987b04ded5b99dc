//! Code-to-label lookup tables
//!
//! The audit store encodes what happened as two small integers: an action
//! (what changed) and an operation (the kind of audit event). Both tables are
//! closed and versioned with this code rather than fetched at runtime. Codes
//! outside the known set fall back to `Unknown (<code>)` instead of failing
//! the run.

/// Resolve an operation code to its display label.
///
/// Pure function: the same code always yields the same label.
pub fn operation_label(code: i32) -> String {
    match code {
        1 => "Create".to_string(),
        2 => "Update".to_string(),
        3 => "Delete".to_string(),
        4 => "Access".to_string(),
        other => format!("Unknown ({})", other),
    }
}

/// Resolve an action code to its display label.
///
/// Pure function: the same code always yields the same label. The table covers
/// the platform's fixed audit-action set, including the login-audit actions.
pub fn action_label(code: i32) -> String {
    match code {
        0 => "Unknown".to_string(),
        1 => "Create".to_string(),
        2 => "Update".to_string(),
        3 => "Delete".to_string(),
        4 => "Activate".to_string(),
        5 => "Deactivate".to_string(),
        11 => "Cascade".to_string(),
        12 => "Merge".to_string(),
        13 => "Assign".to_string(),
        14 => "Share".to_string(),
        15 => "Retrieve".to_string(),
        16 => "Close".to_string(),
        17 => "Cancel".to_string(),
        18 => "Complete".to_string(),
        20 => "Resolve".to_string(),
        21 => "Reopen".to_string(),
        22 => "Fulfill".to_string(),
        23 => "Paid".to_string(),
        24 => "Qualify".to_string(),
        25 => "Disqualify".to_string(),
        26 => "Submit".to_string(),
        27 => "Reject".to_string(),
        28 => "Approve".to_string(),
        29 => "Invoice".to_string(),
        30 => "Hold".to_string(),
        31 => "Add Member".to_string(),
        32 => "Remove Member".to_string(),
        33 => "Associate Entities".to_string(),
        34 => "Disassociate Entities".to_string(),
        35 => "Add Members".to_string(),
        36 => "Remove Members".to_string(),
        37 => "Add Item".to_string(),
        38 => "Remove Item".to_string(),
        39 => "Add Substitute".to_string(),
        40 => "Remove Substitute".to_string(),
        41 => "Set State".to_string(),
        42 => "Renew".to_string(),
        43 => "Revise".to_string(),
        44 => "Win".to_string(),
        45 => "Lose".to_string(),
        46 => "Internal Processing".to_string(),
        47 => "Reschedule".to_string(),
        48 => "Modify Share".to_string(),
        49 => "Pause".to_string(),
        50 => "Resume".to_string(),
        51 => "Cancel Entity".to_string(),
        52 => "Delete Entity".to_string(),
        53 => "Enable Audit".to_string(),
        54 => "Disable Audit".to_string(),
        55 => "Delete Audit Data".to_string(),
        64 => "User Access via Web".to_string(),
        65 => "User Access via Web Services".to_string(),
        112 => "User Access Audit Started".to_string(),
        113 => "User Access Audit Stopped".to_string(),
        other => format!("Unknown ({})", other),
    }
}
