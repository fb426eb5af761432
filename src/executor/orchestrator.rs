//! Category orchestration
//!
//! Fans the test categories out across a bounded worker pool, runs each
//! category's subcommand chain sequentially, joins all workers, and merges
//! their results into a single run summary.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::categories::CategorySpec;
use crate::config::OrchestratorConfig;
use crate::executor::command::run_command;
use crate::models::{CategoryResult, Summary};
use crate::utils::Timer;

/// Concurrent multi-category test orchestrator
pub struct Orchestrator {
    config: OrchestratorConfig,
}

impl Orchestrator {
    pub fn new(config: OrchestratorConfig) -> Self {
        Self { config }
    }

    /// Run every category through the worker pool and aggregate the outcomes.
    ///
    /// Categories race against each other, bounded by the pool capacity;
    /// subcommands within a category run in listed order. A category task
    /// that panics is logged and contributes an empty result set. The
    /// summary is only built after every worker has been joined.
    pub async fn run_all(&self, categories: Vec<CategorySpec>) -> Summary {
        info!(
            "Dispatching {} categories (max {} concurrent)",
            categories.len(),
            self.config.max_concurrent
        );

        let timer = Timer::start();
        let config = self.config.clone();

        let per_category =
            dispatch_bounded(self.config.max_concurrent, categories, move |spec| {
                let config = config.clone();
                async move { run_category(&config, &spec).await }
            })
            .await;

        let summary = Summary::new(Utc::now(), timer.elapsed_secs(), per_category);

        info!(
            "Run completed in {:.1}s - Pass: {}/{} ({:.1}%)",
            summary.total_duration_seconds,
            summary.totals.passed,
            summary.totals.total,
            summary.success_rate_percent
        );

        summary
    }
}

/// Bounded fan-out/fan-in over category workers.
///
/// Each category is spawned as its own task but only starts its body once a
/// semaphore permit is held, so at most `max_concurrent` categories run at a
/// time. The join barrier collects every worker before the map is merged; a
/// panicked worker is recorded as an empty result set for its category.
async fn dispatch_bounded<F, Fut>(
    max_concurrent: usize,
    categories: Vec<CategorySpec>,
    worker: F,
) -> BTreeMap<String, CategoryResult>
where
    F: Fn(CategorySpec) -> Fut,
    Fut: Future<Output = CategoryResult> + Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(max_concurrent));

    let mut names = Vec::new();
    let mut handles = Vec::new();

    for spec in categories {
        let semaphore = semaphore.clone();
        names.push(spec.name.clone());
        let work = worker(spec);

        handles.push(tokio::spawn(async move {
            let _permit = semaphore.acquire().await.unwrap();
            work.await
        }));
    }

    // Join barrier: collect every worker's results, then merge single-threaded.
    let mut per_category = BTreeMap::new();
    for (name, joined) in names.into_iter().zip(join_all(handles).await) {
        match joined {
            Ok(result) => {
                per_category.insert(result.category.clone(), result);
            }
            Err(e) => {
                error!("Category {name} crashed: {e}");
                per_category.insert(name.clone(), CategoryResult::empty(name));
            }
        }
    }

    per_category
}

/// Run one category's subcommands in listed order.
///
/// A failed subcommand is recorded and the chain continues; nothing in a
/// category short-circuits.
async fn run_category(config: &OrchestratorConfig, spec: &CategorySpec) -> CategoryResult {
    info!("[{}] starting ({} commands)", spec.name, spec.commands.len());

    let mut results = Vec::with_capacity(spec.commands.len());

    for command in &spec.commands {
        let result = run_command(
            command,
            &config.project_root,
            config.go_root.as_deref(),
            config.timeout_secs,
        )
        .await;

        if result.succeeded {
            info!("[{}] {result}", spec.name);
        } else {
            warn!("[{}] {result}", spec.name);
        }

        results.push(result);
    }

    let category = CategoryResult::new(&spec.name, results);
    info!("[{}] done: {category}", spec.name);
    category
}
