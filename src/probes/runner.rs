//! Concurrent probe execution.
//!
//! Probes are independent, so each primary runs on its own worker thread
//! and reports through a channel; the runner joins them at a barrier
//! bounded by a global deadline. Results land in per-probe slots keyed by
//! registration index, so the final ordering is deterministic no matter
//! how the threads interleave. A probe still pending at the deadline is
//! recorded as a timeout Error, never silently dropped.
//!
//! Dependent sub-probes run after the barrier: each consults its primary's
//! buffered result and only performs its own network call when the
//! primary succeeded.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use super::Probe;
use crate::report::{Status, ValidationResult};

/// Default budget for the whole probe phase.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(15);

/// Handle to a registered primary probe, used to attach dependents.
#[derive(Debug, Clone, Copy)]
pub struct ProbeId(usize);

enum Entry {
    Primary(Box<dyn Probe>),
    Dependent {
        primary: usize,
        probe: Box<dyn Probe>,
    },
}

/// Runs registered probes concurrently and merges results in order.
pub struct ProbeRunner {
    entries: Vec<Entry>,
    deadline: Duration,
}

impl ProbeRunner {
    /// Create a runner with the default global deadline.
    pub fn new() -> Self {
        Self::with_deadline(DEFAULT_DEADLINE)
    }

    /// Create a runner with a custom global deadline.
    pub fn with_deadline(deadline: Duration) -> Self {
        Self {
            entries: Vec::new(),
            deadline,
        }
    }

    /// Register a primary probe. Display order follows registration order.
    pub fn register(&mut self, probe: Box<dyn Probe>) -> ProbeId {
        self.entries.push(Entry::Primary(probe));
        ProbeId(self.entries.len() - 1)
    }

    /// Register a probe that only runs if its primary succeeded.
    pub fn register_dependent(&mut self, primary: ProbeId, probe: Box<dyn Probe>) {
        self.entries.push(Entry::Dependent {
            primary: primary.0,
            probe,
        });
    }

    /// Run all probes and return one result per registration, in order.
    pub fn run(self) -> Vec<ValidationResult> {
        let services: Vec<&'static str> = self
            .entries
            .iter()
            .map(|entry| match entry {
                Entry::Primary(probe) | Entry::Dependent { probe, .. } => probe.service(),
            })
            .collect();

        let mut slots: Vec<Option<ValidationResult>> = vec![None; self.entries.len()];
        let mut dependents: Vec<(usize, usize, Box<dyn Probe>)> = Vec::new();

        let (tx, rx) = mpsc::channel();
        let mut pending = 0usize;

        for (index, entry) in self.entries.into_iter().enumerate() {
            match entry {
                Entry::Primary(probe) => {
                    pending += 1;
                    let tx = tx.clone();
                    thread::spawn(move || {
                        let result = probe.run();
                        // Receiver may be gone after the deadline; nothing to do.
                        let _ = tx.send((index, result));
                    });
                }
                Entry::Dependent { primary, probe } => {
                    dependents.push((index, primary, probe));
                }
            }
        }
        drop(tx);

        let deadline_at = Instant::now() + self.deadline;
        while pending > 0 {
            let remaining = deadline_at.saturating_duration_since(Instant::now());
            match rx.recv_timeout(remaining) {
                Ok((index, result)) => {
                    tracing::debug!(service = services[index], "probe completed");
                    slots[index] = Some(result);
                    pending -= 1;
                }
                Err(_) => break,
            }
        }

        // Anything still pending missed the global deadline.
        for (index, slot) in slots.iter_mut().enumerate() {
            if slot.is_none() && !dependents.iter().any(|(dep, _, _)| *dep == index) {
                tracing::warn!(service = services[index], "probe missed the global deadline");
                *slot = Some(ValidationResult::error(services[index], "timed out"));
            }
        }

        // Dependents run after the barrier, against buffered primary results.
        for (index, primary, probe) in dependents {
            let result = match &slots[primary] {
                Some(result) if result.status == Status::Success => probe.run(),
                _ => ValidationResult::warning(
                    services[index],
                    format!("skipped, {} check did not succeed", services[primary]),
                ),
            };
            slots[index] = Some(result);
        }

        slots.into_iter().flatten().collect()
    }
}

impl Default for ProbeRunner {
    fn default() -> Self {
        Self::new()
    }
}
