use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Debug)]
pub struct Counters {
    /// The total number of passes through the fixed-point loop, across every solve of the
    /// context.
    pub total_iterations: usize,

    /// A count of values derived by the complement rule.
    pub complement_deductions: usize,

    /// A count of values derived by the partition rule in difference mode.
    pub difference_deductions: usize,

    /// A count of values derived by the partition rule in union mode.
    pub union_deductions: usize,

    /// The time taken during a solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_iterations: 0,

            complement_deductions: 0,
            difference_deductions: 0,
            union_deductions: 0,

            time: Duration::from_secs(0),
        }
    }
}
