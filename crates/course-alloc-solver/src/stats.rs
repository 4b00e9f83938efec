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

use std::time::Duration;

/// Counters collected while the search runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Nodes taken off the stack and examined.
    pub nodes_expanded: u64,
    /// The deepest stack observed.
    pub max_depth: u64,
    /// Complete assignments that improved (or installed) the best
    /// distribution.
    pub solutions_found: u64,
    /// Complete assignments that tied the best distribution.
    pub ties_recorded: u64,
    /// Complete assignments worse than the best, dropped on arrival.
    pub leaves_discarded: u64,
    /// Subtrees cut because their optimistic bound was already worse
    /// than the best.
    pub prunings_bound: u64,
    /// Subtrees cut because no completion exists below them.
    pub prunings_infeasible: u64,
    /// Wall time of the whole run; set by the driver.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_expanded(&mut self) {
        self.nodes_expanded = self.nodes_expanded.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_tie_recorded(&mut self) {
        self.ties_recorded = self.ties_recorded.saturating_add(1);
    }

    #[inline]
    pub fn on_leaf_discarded(&mut self) {
        self.leaves_discarded = self.leaves_discarded.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_infeasible(&mut self) {
        self.prunings_infeasible = self.prunings_infeasible.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Leximin Search Statistics:")?;
        writeln!(f, "  Nodes expanded:        {}", self.nodes_expanded)?;
        writeln!(f, "  Max depth reached:     {}", self.max_depth)?;
        writeln!(f, "  Solutions found:       {}", self.solutions_found)?;
        writeln!(f, "  Ties recorded:         {}", self.ties_recorded)?;
        writeln!(f, "  Leaves discarded:      {}", self.leaves_discarded)?;
        writeln!(f, "  Prunings (bound):      {}", self.prunings_bound)?;
        writeln!(f, "  Prunings (infeasible): {}", self.prunings_infeasible)?;
        writeln!(f, "  Total time:            {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let s = SearchStatistics::default();
        assert_eq!(s.nodes_expanded, 0);
        assert_eq!(s.max_depth, 0);
        assert_eq!(s.solutions_found, 0);
        assert_eq!(s.time_total, Duration::ZERO);
    }

    #[test]
    fn test_mutators_increment() {
        let mut s = SearchStatistics::default();
        s.on_node_expanded();
        s.on_node_expanded();
        s.on_solution_found();
        s.on_tie_recorded();
        s.on_leaf_discarded();
        s.on_pruning_bound();
        s.on_pruning_infeasible();
        assert_eq!(s.nodes_expanded, 2);
        assert_eq!(s.solutions_found, 1);
        assert_eq!(s.ties_recorded, 1);
        assert_eq!(s.leaves_discarded, 1);
        assert_eq!(s.prunings_bound, 1);
        assert_eq!(s.prunings_infeasible, 1);
    }

    #[test]
    fn test_depth_update_keeps_maximum() {
        let mut s = SearchStatistics::default();
        s.on_depth_update(3);
        s.on_depth_update(1);
        assert_eq!(s.max_depth, 3);
    }

    #[test]
    fn test_display_lists_all_counters() {
        let text = SearchStatistics::default().to_string();
        assert!(text.contains("Nodes expanded"));
        assert!(text.contains("Prunings (bound)"));
        assert!(text.contains("Total time"));
    }
}
