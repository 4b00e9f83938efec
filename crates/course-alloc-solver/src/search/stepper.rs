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

use crate::model::solver_model::SolverModel;
use crate::search::{
    best::{MergeVerdict, ResultAggregator},
    bound, selector,
};
use crate::state::space::SearchSpace;
use crate::stats::SearchStatistics;
use course_alloc_core::prelude::{Distribution, Rank, leximin_cmp};
use course_alloc_model::prelude::{Assignment, Placement, Solution};
use std::cmp::Ordering;

/// The result of a single search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// One branch-or-backtrack unit of work was performed.
    Advanced,
    /// The tree is exhausted; further calls are no-ops.
    Finished,
}

impl std::fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepOutcome::Advanced => write!(f, "Advanced"),
            StepOutcome::Finished => write!(f, "Finished"),
        }
    }
}

/// The resumable search: an explicit LIFO stack of nodes (the
/// continuation of branches yet to try), the best result so far, and
/// the run's counters.
///
/// One [`step`](Self::step) call examines exactly one node, so a host
/// can interleave the search with other work at any granularity —
/// typically a four-digit batch of steps between UI frames. The value
/// is self contained: dropping it cancels the search, nothing needs
/// tearing down, and for a fixed model the visit order and the final
/// tie set are fully reproducible.
#[derive(Debug, Clone)]
pub struct SearchState<'m, T: Copy + Ord> {
    model: &'m SolverModel<T>,
    stack: Vec<SearchSpace<T>>,
    aggregator: ResultAggregator<T>,
    stats: SearchStatistics,
}

impl<'m, T: Copy + Ord + std::fmt::Debug> SearchState<'m, T> {
    /// Seeds the root node and applies the model's fixed placements
    /// eagerly, in ascending (person, course) index order. A fixed
    /// preference that an earlier fix already invalidated — course out
    /// of slots, person already placed — is skipped; validation has
    /// warned about such conflicts upstream.
    pub fn new(model: &'m SolverModel<T>) -> Self {
        let mut root = SearchSpace::root(model);
        for (p, c) in model.iter_fixed() {
            if let Some(r) = root.pref(p, c) {
                root.assign(p, c, r);
            }
        }

        Self {
            model,
            stack: vec![root],
            aggregator: ResultAggregator::new(),
            stats: SearchStatistics::default(),
        }
    }

    /// Advances the search by one branch-or-backtrack unit:
    ///
    /// - nothing left on the stack → [`StepOutcome::Finished`],
    /// - node with no branchable placement → merge it if complete,
    ///   discard it as a dead end otherwise,
    /// - node whose optimistic bound cannot beat the best → discard,
    /// - otherwise commit the branch: push the "preference removed"
    ///   sibling, then the "placement taken" child on top of it.
    pub fn step(&mut self) -> StepOutcome {
        let Some(space) = self.stack.pop() else {
            return StepOutcome::Finished;
        };
        self.stats.on_node_expanded();

        let Some(branch) = selector::select(&space) else {
            if space.is_complete() {
                self.record_complete(&space);
            } else {
                self.stats.on_pruning_infeasible();
            }
            return StepOutcome::Advanced;
        };

        if self.should_prune(&space) {
            return StepOutcome::Advanced;
        }

        let mut sibling = space.clone();
        sibling.drop_pref(branch.person, branch.course);
        let mut taken = space;
        taken.assign(branch.person, branch.course, branch.rank);

        self.stack.push(sibling);
        self.stack.push(taken);
        self.stats.on_depth_update(self.stack.len() as u64);

        StepOutcome::Advanced
    }

    /// True once the whole tree has been examined; the result is final
    /// from then on.
    #[inline]
    pub fn finished(&self) -> bool {
        self.stack.is_empty()
    }

    /// Nodes still awaiting examination.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.stats
    }

    #[inline]
    pub(crate) fn statistics_mut(&mut self) -> &mut SearchStatistics {
        &mut self.stats
    }

    /// The best distribution discovered so far, if any complete
    /// assignment was reached yet.
    #[inline]
    pub fn best_distribution(&self) -> Option<&Distribution<Rank<T>>> {
        self.aggregator.best().map(|b| b.distribution())
    }

    /// The best result translated back to identifiers: the optimal
    /// rank distribution and every tied complete assignment. `None`
    /// while no complete assignment has been discovered (and finally,
    /// when the problem admits none at all).
    pub fn result(&self) -> Option<Solution<T>> {
        let best = self.aggregator.best()?;
        let index = self.model.index();

        let mut assignments = Vec::with_capacity(best.num_ties());
        for placements in best.assignments() {
            let mut assignment = Assignment::new();
            for &(p, c, r) in placements {
                let (Some(person), Some(course)) = (index.person_id(p), index.course_id(c))
                else {
                    debug_assert!(false, "best result references an unindexed entity");
                    continue;
                };
                assignment.insert(person.clone(), Placement::new(course.clone(), r));
            }
            assignments.push(assignment);
        }

        Some(Solution::new(best.distribution().clone(), assignments))
    }

    #[inline]
    fn record_complete(&mut self, space: &SearchSpace<T>) {
        let distribution = space.committed().clone();
        let assignment = space.iter_assigned().collect();
        match self.aggregator.merge(distribution, assignment) {
            MergeVerdict::Installed | MergeVerdict::Replaced => self.stats.on_solution_found(),
            MergeVerdict::Appended => self.stats.on_tie_recorded(),
            MergeVerdict::Discarded => self.stats.on_leaf_discarded(),
        }
    }

    /// The pruning test of the branch step: an absent bound (no
    /// completion exists below) always prunes; otherwise the node
    /// survives unless its optimistic bound is already worse than the
    /// best known distribution.
    #[inline]
    fn should_prune(&mut self, space: &SearchSpace<T>) -> bool {
        let Some(bound) = bound::subtree_bound(space) else {
            self.stats.on_pruning_infeasible();
            return true;
        };
        let Some(best) = self.aggregator.best() else {
            return false;
        };
        if leximin_cmp(&bound, best.distribution()) == Ordering::Greater {
            self.stats.on_pruning_bound();
            return true;
        }
        false
    }
}
