/// Number of analyses the batch runner executes simultaneously unless the
/// caller sizes the pool explicitly.
pub const DEFAULT_BATCH_CONCURRENCY: usize = 5;

/// A full, unfiltered percentage distribution sums to this.
pub const PERCENT_TOTAL: f64 = 100.0;

/// Tolerance when checking that a distribution sums to [`PERCENT_TOTAL`].
pub const PERCENT_SUM_EPSILON: f64 = 1e-9;
