use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Speed used when a ride is created without one.
pub const DEFAULT_SPEED: u32 = 30;

/// Number of rides currently running. Cloning shares the same count.
///
/// Create one per process (or per test) and hand it to every [`Ride`].
/// There is no floor: stopping more rides than were started goes negative.
#[derive(Debug, Clone, Default)]
pub struct RideCounter {
    active: Arc<AtomicI64>,
}

impl RideCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> i64 {
        self.active.load(Ordering::SeqCst)
    }

    fn increment(&self) -> i64 {
        self.active.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn decrement(&self) -> i64 {
        self.active.fetch_sub(1, Ordering::SeqCst) - 1
    }
}

#[derive(Debug, Clone)]
pub struct Ride {
    counter: RideCounter,
    speed: Option<u32>,
}

impl Ride {
    pub fn new(counter: &RideCounter) -> Self {
        Self {
            counter: counter.clone(),
            speed: None,
        }
    }

    pub fn with_speed(counter: &RideCounter, speed: Option<u32>) -> Self {
        Self {
            counter: counter.clone(),
            speed,
        }
    }

    pub fn start(&self) {
        let active = self.counter.increment();
        tracing::debug!("Ride started, {} active", active);
    }

    pub fn stop(&self) {
        let active = self.counter.decrement();
        tracing::debug!("Ride stopped, {} active", active);
    }

    pub fn speed(&self) -> u32 {
        self.speed.unwrap_or(DEFAULT_SPEED)
    }

    pub fn active_rides(&self) -> i64 {
        self.counter.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_start_then_stop_leaves_count_unchanged() {
        let counter = RideCounter::new();
        let ride = Ride::new(&counter);
        ride.start();
        ride.stop();
        assert_eq!(counter.active(), 0);
    }

    #[test]
    fn test_count_is_shared_between_rides() {
        let counter = RideCounter::new();
        let rides: Vec<Ride> = (0..4).map(|_| Ride::new(&counter)).collect();
        for ride in &rides {
            ride.start();
        }

        assert_eq!(counter.active(), 4);
        assert_eq!(rides[0].active_rides(), 4);
        assert_eq!(rides[3].active_rides(), 4);
    }

    #[test]
    fn test_counters_are_independent() {
        let a = RideCounter::new();
        let b = RideCounter::new();
        Ride::new(&a).start();
        assert_eq!(a.active(), 1);
        assert_eq!(b.active(), 0);
    }

    #[test]
    fn test_count_can_go_negative() {
        let counter = RideCounter::new();
        Ride::new(&counter).stop();
        assert_eq!(counter.active(), -1);
    }

    #[test]
    fn test_concurrent_starts() {
        let counter = RideCounter::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ride = Ride::new(&counter);
                thread::spawn(move || {
                    for _ in 0..100 {
                        ride.start();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counter.active(), 800);
    }

    #[test]
    fn test_speed_defaults_when_missing() {
        let counter = RideCounter::new();
        assert_eq!(Ride::new(&counter).speed(), DEFAULT_SPEED);
        assert_eq!(Ride::with_speed(&counter, None).speed(), 30);
        assert_eq!(Ride::with_speed(&counter, Some(0)).speed(), 0);
        assert_eq!(Ride::with_speed(&counter, Some(55)).speed(), 55);
    }
}
