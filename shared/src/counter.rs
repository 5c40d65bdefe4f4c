use crate::constants::COUNTER_DURATION_MS;

/// Linear count-up from zero to a target, used for headline statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u64,
    duration_ms: f64,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, COUNTER_DURATION_MS)
    }

    pub fn with_duration(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        if self.is_done(elapsed_ms) {
            return self.target;
        }
        let progress = (elapsed_ms / self.duration_ms).max(0.0);
        ((self.target as f64 * progress).floor() as u64).min(self.target)
    }

    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_linearly() {
        let counter = CountUp::new(500);
        assert_eq!(counter.value_at(0.0), 0);
        assert_eq!(counter.value_at(1000.0), 250);
        assert_eq!(counter.value_at(1999.0), 499);
        assert_eq!(counter.value_at(2500.0), 500);
    }

    #[test]
    fn test_zero_duration_shows_target() {
        let counter = CountUp::with_duration(42, 0.0);
        assert!(counter.is_done(0.0));
        assert_eq!(counter.value_at(0.0), 42);
    }
}
