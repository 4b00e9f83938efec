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

use crate::stats::SearchStatistics;
use course_alloc_core::prelude::{Distribution, Rank};

/// Asks a monitor whether the driver should stop the search. Checked
/// between step batches; the search state itself is never touched.
pub trait TerminationCheck {
    fn should_terminate_search(&self) -> bool;
}

/// Start/end notifications for one search run.
pub trait LifecycleMonitor {
    fn on_search_start(&mut self);
    fn on_search_end(&mut self);
}

/// Progress events emitted by the driver. Monitors observe; they must
/// not assume any influence on the search result.
pub trait SearchEventMonitor<T: Copy + Ord> {
    /// A batch of steps finished; `stats` is the run's current state.
    fn on_batch_completed(&mut self, stats: &SearchStatistics);

    /// The best known distribution changed.
    fn on_incumbent_improved(
        &mut self,
        distribution: &Distribution<Rank<T>>,
        stats: &SearchStatistics,
    );
}

/// The full monitor interface the driver accepts.
pub trait SearchMonitor<T: Copy + Ord>:
    TerminationCheck + LifecycleMonitor + SearchEventMonitor<T>
{
    fn name(&self) -> &str;
}
