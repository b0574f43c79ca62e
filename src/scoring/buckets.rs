/// Employee-count bucket.
///
/// Maps an inclusive `min..=max` range of employees to a string id used in
/// scoring configs (e.g. "51-500").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBucket {
    pub id: &'static str,
    pub min: u64,
    pub max: u64,
}

impl SizeBucket {
    pub fn contains(&self, employee_count: u64) -> bool {
        employee_count >= self.min && employee_count <= self.max
    }
}

/// Fixed bucket catalog, ordered by size. Ranges do not overlap.
pub const SIZE_BUCKETS: [SizeBucket; 4] = [
    SizeBucket { id: "0-50", min: 0, max: 50 },
    SizeBucket { id: "51-500", min: 51, max: 500 },
    SizeBucket { id: "501-5000", min: 501, max: 5000 },
    SizeBucket { id: "5001-100000", min: 5001, max: 100_000 },
];

/// Look up a catalog bucket by id
pub fn find_bucket(id: &str) -> Option<&'static SizeBucket> {
    SIZE_BUCKETS.iter().find(|b| b.id == id)
}

/// Check whether an employee count falls into the bucket with the given id.
/// Unknown ids and absent counts never match.
pub fn in_bucket(employee_count: Option<u64>, bucket_id: &str) -> bool {
    let Some(count) = employee_count else {
        return false;
    };
    find_bucket(bucket_id).is_some_and(|b| b.contains(count))
}
