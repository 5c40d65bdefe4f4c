use std::collections::HashSet;
use std::hash::Hash;

/// Tracks which elements have already been revealed.
///
/// Reveal is one-way: the first intersection of a key yields its delay, any
/// later one yields nothing and the host stops observing the element.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    revealed: HashSet<K>,
}

impl<K: Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            revealed: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the delay in ms before showing `key`, or `None` if there is
    /// nothing to do.
    pub fn on_intersect(&mut self, key: K, is_intersecting: bool, delay_ms: u32) -> Option<u32> {
        if !is_intersecting {
            return None;
        }
        self.revealed.insert(key).then_some(delay_ms)
    }
}

/// Parses a CSS time such as `0.2s` or `150ms` into milliseconds.
/// Anything unparseable is no delay.
pub fn parse_delay(value: &str) -> u32 {
    let value = value.trim();
    let (number, scale) = if let Some(ms) = value.strip_suffix("ms") {
        (ms, 1.0)
    } else if let Some(s) = value.strip_suffix('s') {
        (s, 1000.0)
    } else {
        (value, 1000.0)
    };
    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
        .map_or(0, |n| (n * scale).round() as u32)
}
