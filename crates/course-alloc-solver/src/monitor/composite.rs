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

/// Fans every event out to a list of monitors; requests termination as
/// soon as any member does.
#[derive(Default)]
pub struct CompositeMonitor<T: Copy + Ord> {
    monitors: Vec<Box<dyn SearchMonitor<T>>>,
}

impl<T: Copy + Ord> CompositeMonitor<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    #[inline]
    pub fn with<M>(mut self, monitor: M) -> Self
    where
        M: SearchMonitor<T> + 'static,
    {
        self.monitors.push(Box::new(monitor));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<T: Copy + Ord> TerminationCheck for CompositeMonitor<T> {
    #[inline]
    fn should_terminate_search(&self) -> bool {
        self.monitors.iter().any(|m| m.should_terminate_search())
    }
}

impl<T: Copy + Ord> LifecycleMonitor for CompositeMonitor<T> {
    #[inline]
    fn on_search_start(&mut self) {
        for m in self.monitors.iter_mut() {
            m.on_search_start();
        }
    }

    #[inline]
    fn on_search_end(&mut self) {
        for m in self.monitors.iter_mut() {
            m.on_search_end();
        }
    }
}

impl<T: Copy + Ord> SearchEventMonitor<T> for CompositeMonitor<T> {
    #[inline]
    fn on_batch_completed(&mut self, stats: &SearchStatistics) {
        for m in self.monitors.iter_mut() {
            m.on_batch_completed(stats);
        }
    }

    #[inline]
    fn on_incumbent_improved(
        &mut self,
        distribution: &Distribution<Rank<T>>,
        stats: &SearchStatistics,
    ) {
        for m in self.monitors.iter_mut() {
            m.on_incumbent_improved(distribution, stats);
        }
    }
}

impl<T: Copy + Ord> SearchMonitor<T> for CompositeMonitor<T> {
    #[inline]
    fn name(&self) -> &str {
        "CompositeMonitor"
    }
}
