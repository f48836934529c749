//! Per-HELLO sanity checks

/// Whether two 16-bit timestamps are within `tolerance_secs` of each other,
/// taking the 16-bit wrap into account.
pub fn time16_within_tolerance(a: u16, b: u16, tolerance_secs: u64) -> bool {
    let forward = a.wrapping_sub(b);
    let backward = b.wrapping_sub(a);
    u64::from(forward.min(backward)) <= tolerance_secs
}

/// Whether the reception epoch is at most one epoch away from the EBID epoch.
pub fn epoch_matches(reception_epoch: i32, ebid_epoch: i32) -> bool {
    (i64::from(reception_epoch) - i64::from(ebid_epoch)).abs() <= 1
}
