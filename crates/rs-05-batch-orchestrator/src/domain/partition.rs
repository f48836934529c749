//! # Id-Range Partitioning
//!
//! Splits an inclusive primary-key range into contiguous, disjoint
//! sub-ranges whose sizes differ by at most one:
//!
//! ```text
//! [0 ........................................ 9]   workers = 3
//! [0 ... 3] [4 ... 6] [7 ... 9]
//! ```

use shared_types::IdRange;

/// Split `range` into at most `workers` sub-ranges covering it exactly once.
///
/// Ranges smaller than `workers` yield one sub-range per key; an empty range
/// yields none. `workers == 0` is treated as 1.
pub fn partition(range: IdRange, workers: usize) -> Vec<IdRange> {
    if range.is_empty() {
        return Vec::new();
    }
    let parts = (workers.max(1) as u64).min(range.len());
    let base = range.len() / parts;
    let remainder = range.len() % parts;

    let mut out = Vec::with_capacity(parts as usize);
    let mut start = range.min;
    for i in 0..parts {
        let size = base + u64::from(i < remainder);
        let end = start + (size - 1);
        out.push(IdRange::new(start, end));
        if end == range.max {
            break;
        }
        start = end + 1;
    }
    out
}
