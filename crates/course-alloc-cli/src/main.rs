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

use chrono::{DateTime, Utc};
use course_alloc_model::prelude::{ProblemLoader, Solution};
use course_alloc_solver::engine::solver::LeximinSolver;
use course_alloc_solver::model::solver_model::SolverModel;
use course_alloc_solver::monitor::{CompositeMonitor, TimeLimitMonitor};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[derive(Serialize)]
struct RunRecord {
    iteration: usize,
    filename: String,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    termination: String,
    /// (rank, count) pairs, best rank first; empty when no solution.
    distribution: Vec<(i64, u32)>,
    ties: usize,
}

fn print_solution(solution: &Solution<i64>) {
    println!("Best rank distribution: {}", solution.distribution());
    println!(
        "Leximin-optimal assignments ({} tied):",
        solution.num_ties()
    );

    let tidied = solution.tidied();
    for (i, assignment) in tidied.iter().enumerate() {
        if i == 0 {
            println!("  #1:");
        } else {
            println!("  #{} (differences against #1):", i + 1);
        }
        for (person, placement) in assignment.iter() {
            println!(
                "    {:<24} -> {} (rank {})",
                person.as_str(),
                placement.course().as_str(),
                placement.rank().value()
            );
        }
    }
}

fn main() {
    enable_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: course-alloc-cli <instance>...");
        std::process::exit(2);
    }

    let mut results: Vec<RunRecord> = Vec::new();

    for (iter, file) in args.iter().enumerate() {
        let iteration = iter + 1;

        let (problem, report) = match ProblemLoader::new().from_path(file) {
            Ok(loaded) => loaded.into_parts(),
            Err(e) => {
                tracing::error!("Failed to load [{}] {}: {}", iteration, file, e);
                continue;
            }
        };
        for warning in report.iter() {
            tracing::warn!("{}: {}", file, warning);
        }

        tracing::info!(
            "Solving [{}] {} with {} people, {} courses, {} slots",
            iteration,
            file,
            problem.num_people(),
            problem.num_courses(),
            problem.total_slots()
        );

        let model = SolverModel::from(&problem);
        let mut monitor =
            CompositeMonitor::new().with(TimeLimitMonitor::new(Duration::from_secs(120)));

        let start_ts = Utc::now();
        let t0 = Instant::now();
        let outcome = LeximinSolver::new().solve(&model, &mut monitor);
        let runtime = t0.elapsed();
        let end_ts = Utc::now();

        match outcome.result().solution() {
            Some(solution) => {
                print_solution(solution);
                tracing::info!(
                    "Finished [{}] {}: {} in {:?}",
                    iteration,
                    file,
                    outcome.termination_reason(),
                    runtime
                );
            }
            None => {
                println!("No complete assignment exists for {file}.");
                tracing::info!(
                    "Finished [{}] {}: {} in {:?}",
                    iteration,
                    file,
                    outcome.termination_reason(),
                    runtime
                );
            }
        }
        print!("{}", outcome.statistics());

        let (distribution, ties) = match outcome.result().solution() {
            Some(solution) => (
                solution
                    .distribution()
                    .iter()
                    .map(|(rank, count)| (rank.value(), count))
                    .collect(),
                solution.num_ties(),
            ),
            None => (Vec::new(), 0),
        };
        results.push(RunRecord {
            iteration,
            filename: file.clone(),
            start_ts,
            end_ts,
            runtime_ms: runtime.as_millis(),
            termination: outcome.termination_reason().to_string(),
            distribution,
            ties,
        });
    }

    let out_path = PathBuf::from("results.json");
    match serde_json::to_string_pretty(&results) {
        Ok(json) => {
            let write = File::create(&out_path).and_then(|mut f| f.write_all(json.as_bytes()));
            match write {
                Ok(()) => tracing::info!("Wrote {}", out_path.display()),
                Err(e) => {
                    tracing::error!("Failed to write results to {}: {}", out_path.display(), e)
                }
            }
        }
        Err(e) => tracing::error!("Failed to serialize results: {}", e),
    }
}
