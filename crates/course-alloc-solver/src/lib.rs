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

//! # Course-Alloc Solver
//!
//! A deterministic branch-and-bound solver for leximin-optimal course
//! allocation. The search provably returns *every* complete assignment
//! whose rank distribution is leximin-optimal.
//!
//! Core flow
//! - Compile a `course_alloc_model::problem::Problem` into a dense
//!   [`model::solver_model::SolverModel`].
//! - Either drive a [`search::stepper::SearchState`] yourself, one
//!   branch-or-backtrack unit per `step()` call (interleaving search
//!   with other work), or hand everything to
//!   [`engine::solver::LeximinSolver`], which batches steps between
//!   monitor checks.
//!
//! Design highlights
//! - The search is single threaded and purely computational: a state
//!   value plus a `step` function. Cancellation is "stop calling
//!   `step`"; dropping the state releases everything.
//! - Branching is binary: take the selected (person, course) placement
//!   or remove exactly that preference and try again. Every feasible
//!   complete assignment is visited exactly once.
//! - Selector, bound and aggregation are deterministic, so the
//!   enumeration order and the final tie set are reproducible.

pub mod engine;
pub mod model;
pub mod monitor;
pub mod result;
pub mod search;
pub mod state;
pub mod stats;
