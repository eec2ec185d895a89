//! Worker-pool executor.
//!
//! [`run_batch`] is the single entry point every primitive and the
//! [`Union`](crate::Union) combinator use to execute a batch of independent
//! tasks. With `n_jobs == 1` tasks run in order on the calling thread; with
//! `n_jobs > 1` they are handed to a rayon pool. Either way the returned
//! vector is in task order, and the first failing task fails the whole batch.

use crate::error::Error;
use crate::options::{Backend, ExecOptions};
use crate::progress;
use anyhow::Result;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, info, trace};

/// Run `f` over every task and collect the results in task order.
///
/// `label` names the batch in log events. Remaining tasks are abandoned
/// best-effort once one fails; no partial results are returned.
pub fn run_batch<T, R, F>(
    label: &'static str,
    tasks: Vec<T>,
    f: F,
    opts: &ExecOptions,
) -> Result<Vec<R>>
where
    T: Send,
    R: Send,
    F: Fn(T) -> Result<R> + Send + Sync,
{
    opts.validate()?;
    let total = tasks.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    if !opts.is_parallel() {
        debug!(label, tasks = total, "running batch sequentially");
        return progress::wrap(tasks, opts.progress_enabled(), label)
            .map(f)
            .collect();
    }

    debug!(
        label,
        tasks = total,
        n_jobs = opts.n_jobs,
        backend = ?opts.backend,
        batch_size = ?opts.batch_size,
        "dispatching batch to worker pool"
    );
    let started = Instant::now();
    let out = match opts.backend {
        Backend::Pool => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(opts.n_jobs)
                .thread_name(|i| format!("daprs-worker-{i}"))
                .build()
                .map_err(Error::Pool)?;
            pool.install(|| exec_parallel(label, tasks, &f, opts))
        }
        Backend::Global => exec_parallel(label, tasks, &f, opts),
    }?;

    if opts.progress_enabled() {
        info!(
            label,
            tasks = total,
            n_jobs = opts.n_jobs,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "batch complete"
        );
    }
    Ok(out)
}

/// Indexed parallel collect: rayon writes each result into its task's slot,
/// so completion order never leaks into the output.
fn exec_parallel<T, R, F>(
    label: &'static str,
    tasks: Vec<T>,
    f: &F,
    opts: &ExecOptions,
) -> Result<Vec<R>>
where
    T: Send,
    R: Send,
    F: Fn(T) -> Result<R> + Send + Sync,
{
    let total = tasks.len();
    let report = opts.reports_tasks();
    let completed = AtomicUsize::new(0);
    let task = |t: T| {
        let out = f(t);
        if report {
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            trace!(label, done, total, ok = out.is_ok(), "task finished");
        }
        out
    };

    let iter = tasks.into_par_iter();
    match opts.batch_size {
        Some(min) => iter.with_min_len(min.max(1)).map(task).collect(),
        None => iter.map(task).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::sync::atomic::AtomicUsize;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn sequential_preserves_order() -> Result<()> {
        let opts = ExecOptions::sequential();
        let out = run_batch("t", (0..10).collect(), |x: i32| Ok(x * x), &opts)?;
        assert_eq!(out, (0..10).map(|x| x * x).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn parallel_preserves_order_even_when_tasks_finish_out_of_order() -> Result<()> {
        let out = run_batch(
            "t",
            (0..16u64).collect(),
            |x| {
                // later tasks finish first
                thread::sleep(Duration::from_millis(16 - x));
                Ok(x)
            },
            &ExecOptions::parallel(4),
        )?;
        assert_eq!(out, (0..16).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn global_backend_and_batch_size() -> Result<()> {
        let opts = ExecOptions::parallel(2)
            .with_backend(Backend::Global)
            .with_batch_size(3)
            .with_verbose(11);
        let out = run_batch("t", (0..100).collect(), |x: i32| Ok(x + 1), &opts)?;
        assert_eq!(out, (1..=100).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn sequential_failure_stops_the_loop() {
        let calls = AtomicUsize::new(0);
        let res = run_batch(
            "t",
            (0..10).collect(),
            |x: i32| {
                calls.fetch_add(1, Ordering::SeqCst);
                if x == 3 {
                    bail!("bad item {x}");
                }
                Ok(x)
            },
            &ExecOptions::sequential(),
        );
        assert_eq!(res.unwrap_err().to_string(), "bad item 3");
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn parallel_failure_fails_the_batch() {
        let res = run_batch(
            "t",
            (0..50).collect(),
            |x: i32| if x == 17 { bail!("bad item {x}") } else { Ok(x) },
            &ExecOptions::parallel(4),
        );
        assert_eq!(res.unwrap_err().to_string(), "bad item 17");
    }

    #[test]
    fn zero_jobs_is_rejected_before_running() {
        let calls = AtomicUsize::new(0);
        let res = run_batch(
            "t",
            vec![1, 2],
            |x: i32| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(x)
            },
            &ExecOptions::parallel(0),
        );
        let err = res.unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::InvalidJobs)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_batch_returns_empty() -> Result<()> {
        let out: Vec<i32> = run_batch("t", Vec::<i32>::new(), Ok, &ExecOptions::parallel(8))?;
        assert!(out.is_empty());
        Ok(())
    }
}
