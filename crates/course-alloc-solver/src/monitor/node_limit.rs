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

/// Terminates the search once the given number of nodes has been
/// expanded. Limits are checked at batch boundaries, so the actual
/// node count may overshoot by up to one batch.
#[derive(Debug, Clone)]
pub struct NodeLimitMonitor {
    node_limit: u64,
    nodes_seen: u64,
}

impl NodeLimitMonitor {
    #[inline]
    pub fn new(node_limit: u64) -> Self {
        Self {
            node_limit,
            nodes_seen: 0,
        }
    }

    #[inline]
    pub fn node_limit(&self) -> u64 {
        self.node_limit
    }

    #[inline]
    pub fn nodes_seen(&self) -> u64 {
        self.nodes_seen
    }
}

impl TerminationCheck for NodeLimitMonitor {
    #[inline]
    fn should_terminate_search(&self) -> bool {
        self.nodes_seen >= self.node_limit
    }
}

impl LifecycleMonitor for NodeLimitMonitor {
    #[inline]
    fn on_search_start(&mut self) {
        // Fresh count per search run.
        self.nodes_seen = 0;
    }

    #[inline]
    fn on_search_end(&mut self) {}
}

impl<T: Copy + Ord> SearchEventMonitor<T> for NodeLimitMonitor {
    #[inline]
    fn on_batch_completed(&mut self, stats: &SearchStatistics) {
        self.nodes_seen = stats.nodes_expanded;
    }

    #[inline]
    fn on_incumbent_improved(
        &mut self,
        _distribution: &Distribution<Rank<T>>,
        _stats: &SearchStatistics,
    ) {
    }
}

impl<T: Copy + Ord> SearchMonitor<T> for NodeLimitMonitor {
    #[inline]
    fn name(&self) -> &str {
        "NodeLimitMonitor"
    }
}
