// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::monitor::search_monitor::{
    LifecycleMonitor, SearchEventMonitor, SearchMonitor, TerminationCheck,
};
use crate::stats::SearchStatistics;
use course_alloc_core::prelude::{Distribution, Rank};
use std::time::{Duration, Instant};

/// Terminates the search after a wall-clock budget, measured from
/// `on_search_start`. Checked at batch boundaries.
#[derive(Debug, Clone)]
pub struct TimeLimitMonitor {
    limit: Duration,
    started: Option<Instant>,
}

impl TimeLimitMonitor {
    #[inline]
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            started: None,
        }
    }

    #[inline]
    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl TerminationCheck for TimeLimitMonitor {
    #[inline]
    fn should_terminate_search(&self) -> bool {
        match self.started {
            Some(started) => started.elapsed() >= self.limit,
            None => false,
        }
    }
}

impl LifecycleMonitor for TimeLimitMonitor {
    #[inline]
    fn on_search_start(&mut self) {
        self.started = Some(Instant::now());
    }

    #[inline]
    fn on_search_end(&mut self) {
        self.started = None;
    }
}

impl<T: Copy + Ord> SearchEventMonitor<T> for TimeLimitMonitor {
    #[inline]
    fn on_batch_completed(&mut self, _stats: &SearchStatistics) {}

    #[inline]
    fn on_incumbent_improved(
        &mut self,
        _distribution: &Distribution<Rank<T>>,
        _stats: &SearchStatistics,
    ) {
    }
}

impl<T: Copy + Ord> SearchMonitor<T> for TimeLimitMonitor {
    #[inline]
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_does_not_terminate_before_start() {
        let m = TimeLimitMonitor::new(Duration::ZERO);
        assert!(!m.should_terminate_search());
    }

    #[test]
    fn test_zero_budget_terminates_once_started() {
        let mut m = TimeLimitMonitor::new(Duration::ZERO);
        m.on_search_start();
        assert!(m.should_terminate_search());
    }

    #[test]
    fn test_generous_budget_does_not_terminate() {
        let mut m = TimeLimitMonitor::new(Duration::from_secs(3600));
        m.on_search_start();
        assert!(!m.should_terminate_search());
    }

    #[test]
    fn test_search_end_disarms() {
        let mut m = TimeLimitMonitor::new(Duration::ZERO);
        m.on_search_start();
        m.on_search_end();
        assert!(!m.should_terminate_search());
    }
}
