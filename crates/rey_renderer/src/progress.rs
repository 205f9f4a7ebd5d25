//! Render progress reporting.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts finished pixels and logs every tenth of the way.
#[derive(Debug)]
pub struct Progress {
    total: usize,
    step: usize,
    completed: AtomicUsize,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            step: (total / 10).max(1),
            completed: AtomicUsize::new(0),
        }
    }

    /// Record one finished pixel and return the new count.
    pub fn complete_one(&self) -> usize {
        let done = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        if done % self.step == 0 || done == self.total {
            log::info!(
                "Rendered {}/{} pixels ({:.1}%)",
                done,
                self.total,
                100.0 * done as f64 / self.total.max(1) as f64
            );
        }
        done
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Completed share in `[0, 1]`; an empty job counts as done.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed() as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_completions() {
        let progress = Progress::new(4);
        assert_eq!(progress.fraction(), 0.0);
        assert_eq!(progress.complete_one(), 1);
        assert_eq!(progress.complete_one(), 2);
        assert_eq!(progress.completed(), 2);
        assert_eq!(progress.fraction(), 0.5);
        assert_eq!(progress.total(), 4);
    }

    #[test]
    fn test_empty_job_is_done() {
        assert_eq!(Progress::new(0).fraction(), 1.0);
    }
}
