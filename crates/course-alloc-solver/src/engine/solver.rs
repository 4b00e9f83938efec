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
use crate::monitor::search_monitor::SearchMonitor;
use crate::result::{SolverOutcome, TerminationReason};
use crate::search::stepper::{SearchState, StepOutcome};
use course_alloc_core::prelude::{Distribution, Rank};
use std::time::Instant;

/// Convenience driver over [`SearchState`]: runs step batches until
/// the tree is exhausted or a monitor calls the run off, then packages
/// the outcome. Hosts that want to interleave the search with their
/// own scheduling drive a `SearchState` directly instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeximinSolver {
    step_batch: usize,
}

impl Default for LeximinSolver {
    fn default() -> Self {
        Self { step_batch: 1024 }
    }
}

impl LeximinSolver {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps between two monitor checks (at least one).
    #[inline]
    pub fn with_step_batch(mut self, step_batch: usize) -> Self {
        self.step_batch = step_batch.max(1);
        self
    }

    #[inline]
    pub fn step_batch(&self) -> usize {
        self.step_batch
    }

    pub fn solve<T, M>(&self, model: &SolverModel<T>, monitor: &mut M) -> SolverOutcome<T>
    where
        T: Copy + Ord + std::fmt::Display + std::fmt::Debug,
        M: SearchMonitor<T>,
    {
        let mut state = SearchState::new(model);
        let mut last_best: Option<Distribution<Rank<T>>> = None;

        tracing::info!(
            people = model.num_people(),
            courses = model.num_courses(),
            slots = model.total_slots(),
            "leximin search started"
        );
        monitor.on_search_start();
        let started = Instant::now();

        let reason = 'run: loop {
            if monitor.should_terminate_search() {
                break TerminationReason::Aborted(format!(
                    "terminated by monitor {}",
                    monitor.name()
                ));
            }

            for _ in 0..self.step_batch {
                if state.step() == StepOutcome::Finished {
                    break 'run if state.best_distribution().is_some() {
                        TerminationReason::OptimalityProven
                    } else {
                        TerminationReason::InfeasibilityProven
                    };
                }
            }

            if state.best_distribution() != last_best.as_ref() {
                if let Some(best) = state.best_distribution() {
                    tracing::debug!(distribution = %best, "incumbent improved");
                    monitor.on_incumbent_improved(best, state.statistics());
                    last_best = Some(best.clone());
                }
            }
            monitor.on_batch_completed(state.statistics());
        };

        state.statistics_mut().set_total_time(started.elapsed());
        monitor.on_search_end();
        tracing::info!(
            nodes = state.statistics().nodes_expanded,
            reason = %reason,
            "leximin search ended"
        );

        let statistics = state.statistics().clone();
        match reason {
            TerminationReason::OptimalityProven => {
                let solution = state
                    .result()
                    .expect("expected a solution when termination is OptimalityProven");
                SolverOutcome::optimal(solution, statistics)
            }
            TerminationReason::InfeasibilityProven => SolverOutcome::infeasible(statistics),
            TerminationReason::Aborted(reason) => {
                SolverOutcome::aborted(state.result(), reason, statistics)
            }
        }
    }
}
