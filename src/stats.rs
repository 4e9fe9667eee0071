//! Shared counter drain and throughput reporting.
//!
//! Workers bump one shared `AtomicU64` per iteration. Once per second the
//! reporter drains it with a single `swap(0)`, so no increment is lost and
//! none is counted twice across a reset.

use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::Local;

/// Interval between throughput reports.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

pub struct ThroughputReporter {
    generated: Arc<AtomicU64>,
    total: u64,
}

impl ThroughputReporter {
    pub fn new(generated: Arc<AtomicU64>) -> Self {
        Self {
            generated,
            total: 0,
        }
    }

    /// One cycle: read-and-reset the shared counter in a single atomic swap
    /// and fold the value into the cumulative total.
    pub fn drain(&mut self) -> (u64, u64) {
        let count = self.generated.swap(0, Ordering::Relaxed);
        self.total += count;
        (count, self.total)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Report until the shutdown token is set, then drain once more so the
    /// final total covers the tail. Console failures are swallowed; the
    /// reporter never takes workers down.
    pub fn run(&mut self, shutdown: &AtomicBool) {
        while !shutdown.load(Ordering::Relaxed) {
            thread::sleep(REPORT_INTERVAL);
            let (count, total) = self.drain();
            let mut out = stdout();
            writeln!(out, "{}", report_line(count, total)).ok();
        }
        self.drain();
    }
}

fn report_line(count: u64, total: u64) -> String {
    format!(
        "{} Speed {} per second, total: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        count,
        total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_reports_every_increment_exactly_once() {
        let generated = Arc::new(AtomicU64::new(0));
        let mut reporter = ThroughputReporter::new(generated.clone());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generated = generated.clone();
                thread::spawn(move || {
                    for _ in 0..10_000 {
                        generated.fetch_add(1, Ordering::Relaxed);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(reporter.drain(), (80_000, 80_000));
        assert_eq!(generated.load(Ordering::Relaxed), 0);
        assert_eq!(reporter.drain(), (0, 80_000));
    }

    #[test]
    fn cumulative_total_is_the_sum_of_drained_counts() {
        let generated = Arc::new(AtomicU64::new(0));
        let mut reporter = ThroughputReporter::new(generated.clone());

        generated.fetch_add(5, Ordering::Relaxed);
        assert_eq!(reporter.drain(), (5, 5));

        generated.fetch_add(7, Ordering::Relaxed);
        assert_eq!(reporter.drain(), (7, 12));
        assert_eq!(reporter.total(), 12);
    }

    #[test]
    fn report_line_carries_count_and_total() {
        let line = report_line(42, 99);
        assert!(line.ends_with("Speed 42 per second, total: 99"));
    }

    #[test]
    fn run_drains_the_tail_on_shutdown() {
        let generated = Arc::new(AtomicU64::new(3));
        let mut reporter = ThroughputReporter::new(generated.clone());

        let shutdown = AtomicBool::new(true);
        reporter.run(&shutdown);

        assert_eq!(reporter.total(), 3);
        assert_eq!(generated.load(Ordering::Relaxed), 0);
    }
}
