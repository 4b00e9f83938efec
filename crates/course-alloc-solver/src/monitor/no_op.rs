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

/// A monitor that observes nothing and never terminates the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl TerminationCheck for NoOperationMonitor {
    #[inline]
    fn should_terminate_search(&self) -> bool {
        false
    }
}

impl LifecycleMonitor for NoOperationMonitor {
    #[inline]
    fn on_search_start(&mut self) {}

    #[inline]
    fn on_search_end(&mut self) {}
}

impl<T: Copy + Ord> SearchEventMonitor<T> for NoOperationMonitor {
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

impl<T: Copy + Ord> SearchMonitor<T> for NoOperationMonitor {
    #[inline]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_terminates() {
        let m = NoOperationMonitor::new();
        assert!(!m.should_terminate_search());
    }

    #[test]
    fn test_usable_as_trait_object() {
        let mut m = NoOperationMonitor::new();
        let mon: &mut dyn SearchMonitor<i64> = &mut m;
        mon.on_search_start();
        mon.on_batch_completed(&SearchStatistics::default());
        mon.on_search_end();
        assert_eq!(mon.name(), "NoOperationMonitor");
    }
}
