//! Rate limit information.

/// Rate limit information for the GitHub core API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the rate limit resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Fraction of the window's quota already spent, in `0.0..=1.0`.
    #[must_use]
    pub fn used_fraction(&self) -> f64 {
        if self.limit == 0 {
            return 1.0;
        }
        f64::from(self.limit.saturating_sub(self.remaining)) / f64::from(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn used_fraction_reflects_quota() {
        let info = RateLimitInfo {
            remaining: 1250,
            reset: 1234567890,
            limit: 5000,
        };
        assert!((info.used_fraction() - 0.75).abs() < f64::EPSILON);

        let empty = RateLimitInfo {
            remaining: 0,
            reset: 0,
            limit: 0,
        };
        assert!((empty.used_fraction() - 1.0).abs() < f64::EPSILON);
    }
}
