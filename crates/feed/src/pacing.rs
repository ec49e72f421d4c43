use std::thread;
use std::time::Duration;

/// Waits between two records of the feed.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Blocks the calling thread for the whole delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Pacer for ThreadSleeper {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}
