/// Rate limiter for outgoing window position updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionThrottle {
    min_interval_ms: u64,
    last_sent_ms: Option<u64>,
}

impl PositionThrottle {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_sent_ms: None,
        }
    }

    /// Returns true when an update may go out now and records it as sent.
    pub fn admit(&mut self, now_ms: u64, force: bool) -> bool {
        let due = match self.last_sent_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.min_interval_ms,
            None => true,
        };
        if force || due {
            self.last_sent_ms = Some(now_ms);
            true
        } else {
            false
        }
    }

    pub fn last_sent_ms(&self) -> Option<u64> {
        self.last_sent_ms
    }
}

impl Default for PositionThrottle {
    fn default() -> Self {
        Self::new(crate::pet::model::MIN_UPDATE_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_always_passes() {
        let mut throttle = PositionThrottle::new(24);
        assert!(throttle.admit(5, false));
        assert_eq!(throttle.last_sent_ms(), Some(5));
    }

    #[test]
    fn updates_inside_interval_are_dropped() {
        let mut throttle = PositionThrottle::new(24);
        assert!(throttle.admit(100, false));
        assert!(!throttle.admit(110, false));
        assert!(!throttle.admit(123, false));
        assert!(throttle.admit(124, false));
        assert_eq!(throttle.last_sent_ms(), Some(124));
    }

    #[test]
    fn forced_updates_bypass_and_restart_interval() {
        let mut throttle = PositionThrottle::new(24);
        assert!(throttle.admit(100, false));
        assert!(throttle.admit(101, true));
        assert!(!throttle.admit(120, false));
        assert!(throttle.admit(125, false));
    }
}
