//! Progress reporting for sequential loops.
//!
//! [`wrap`] is a transparent iterator adaptor: it yields exactly the items of
//! the wrapped iterator and, when enabled, emits `tracing` events on the
//! `daprs::progress` target as they are consumed (roughly every tenth of the
//! known length, plus one on completion).

use std::time::Instant;
use tracing::info;

pub struct Progress<I> {
    inner: I,
    enabled: bool,
    label: &'static str,
    done: usize,
    total: Option<usize>,
    every: usize,
    started: Instant,
    finished: bool,
}

pub fn wrap<I: IntoIterator>(iter: I, enabled: bool, label: &'static str) -> Progress<I::IntoIter> {
    let inner = iter.into_iter();
    let total = match inner.size_hint() {
        (lo, Some(hi)) if lo == hi => Some(hi),
        _ => None,
    };
    let every = total.map_or(1, |t| (t / 10).max(1));
    Progress {
        inner,
        enabled,
        label,
        done: 0,
        total,
        every,
        started: Instant::now(),
        finished: false,
    }
}

impl<I> Progress<I> {
    fn tick(&mut self) {
        self.done += 1;
        if self.done % self.every == 0 {
            info!(
                target: "daprs::progress",
                label = self.label,
                done = self.done,
                total = ?self.total,
                "progress"
            );
        }
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        info!(
            target: "daprs::progress",
            label = self.label,
            done = self.done,
            elapsed_ms = self.started.elapsed().as_millis() as u64,
            "finished"
        );
    }
}

impl<I: Iterator> Iterator for Progress<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next();
        if self.enabled {
            match item {
                Some(_) => self.tick(),
                None => self.finish(),
            }
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
