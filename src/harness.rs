//! Size-sweep timing harness.
//!
//! For every queue size in the sweep, fills a fresh [`BoundedHeap`] with
//! random priorities and then drains it, timing both phases. Each size is
//! measured several times and the mean wall-clock milliseconds are
//! reported.
//!
//! The harness only talks to the queue through `enqueue`, `dequeue` and
//! `is_empty`.

use std::fmt::Write as _;
use std::hint::black_box;
use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pqueue::BoundedHeap;
use crate::QueueError;

/// Errors raised by the timing harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The sweep parameters are unusable.
    InvalidConfig(&'static str),
    /// A drain returned entries out of order or the wrong number of them.
    OrderViolation { size: usize, position: usize },
    /// The queue rejected an operation.
    Queue(QueueError),
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(why) => write!(f, "invalid benchmark config: {why}"),
            Self::OrderViolation { size, position } => write!(
                f,
                "drain of {size} entries out of order at position {position}"
            ),
            Self::Queue(e) => write!(f, "queue error: {e}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Queue(e) => Some(e),
            _ => None,
        }
    }
}

impl From<QueueError> for HarnessError {
    fn from(e: QueueError) -> Self {
        Self::Queue(e)
    }
}

/// Sweep parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// First queue size measured.
    pub start_size: usize,
    /// Last queue size measured (inclusive, if reached by `step`).
    pub end_size: usize,
    /// Increment between sizes.
    pub step: usize,
    /// Repetitions averaged per size.
    pub measurements: usize,
    /// Lowest random priority (inclusive).
    pub min_priority: i32,
    /// Highest random priority (inclusive).
    pub max_priority: i32,
    /// Fixed RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            start_size: 1000,
            end_size: 10_000,
            step: 1000,
            measurements: 5,
            min_priority: 1,
            max_priority: 1000,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.start_size == 0 {
            return Err(HarnessError::InvalidConfig("start size must be positive"));
        }
        if self.start_size > self.end_size {
            return Err(HarnessError::InvalidConfig(
                "start size exceeds end size",
            ));
        }
        if self.step == 0 {
            return Err(HarnessError::InvalidConfig("step must be positive"));
        }
        if self.measurements == 0 {
            return Err(HarnessError::InvalidConfig(
                "measurements must be positive",
            ));
        }
        if self.min_priority > self.max_priority {
            return Err(HarnessError::InvalidConfig(
                "min priority exceeds max priority",
            ));
        }
        Ok(())
    }

    /// Queue sizes visited by the sweep, in order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        (self.start_size..=self.end_size).step_by(self.step.max(1))
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Mean timings for one queue size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeTiming {
    pub size: usize,
    /// Mean milliseconds to enqueue `size` entries into an empty queue.
    pub enqueue_ms: f64,
    /// Mean milliseconds to drain those `size` entries.
    pub dequeue_ms: f64,
}

/// Run the sweep described by `config`.
pub fn measure(config: &BenchConfig) -> Result<Vec<SizeTiming>, HarnessError> {
    config.validate()?;
    let mut rng = config.rng();
    let mut results = Vec::new();

    for size in config.sizes() {
        let mut total_enqueue = 0.0;
        let mut total_dequeue = 0.0;

        for round in 0..config.measurements {
            let (enqueue_ms, dequeue_ms) = measure_once(config, size, &mut rng)?;
            debug!("size {size} round {round}: enqueue {enqueue_ms:.3} ms, dequeue {dequeue_ms:.3} ms");
            total_enqueue += enqueue_ms;
            total_dequeue += dequeue_ms;
        }

        let timing = SizeTiming {
            size,
            enqueue_ms: total_enqueue / config.measurements as f64,
            dequeue_ms: total_dequeue / config.measurements as f64,
        };
        debug!("{timing:?}");
        results.push(timing);
    }

    info!(
        "measured {} sizes x {} rounds",
        results.len(),
        config.measurements
    );
    Ok(results)
}

/// Fill a fresh queue with `size` random entries and drain it.
///
/// Returns `(enqueue_ms, dequeue_ms)`.
fn measure_once<R: Rng>(
    config: &BenchConfig,
    size: usize,
    rng: &mut R,
) -> Result<(f64, f64), HarnessError> {
    // Inputs are generated up front so the timed loop covers only the queue.
    let inputs: Vec<(i32, String)> = (0..size)
        .map(|i| {
            (
                rng.gen_range(config.min_priority..=config.max_priority),
                format!("Task{i}"),
            )
        })
        .collect();

    let mut queue = BoundedHeap::new();
    let start = Instant::now();
    for (priority, payload) in inputs {
        queue.enqueue(priority, payload);
    }
    let enqueue_ms = start.elapsed().as_secs_f64() * 1000.0;

    let mut drained = Vec::with_capacity(size);
    let start = Instant::now();
    while !queue.is_empty() {
        drained.push(black_box(queue.dequeue()?).priority);
    }
    let dequeue_ms = start.elapsed().as_secs_f64() * 1000.0;

    check_drain(size, &drained)?;
    Ok((enqueue_ms, dequeue_ms))
}

/// Verify a drain produced `size` priorities in non-increasing order.
fn check_drain(size: usize, priorities: &[i32]) -> Result<(), HarnessError> {
    if priorities.len() != size {
        return Err(HarnessError::OrderViolation {
            size,
            position: priorities.len(),
        });
    }
    match priorities.windows(2).position(|w| w[0] < w[1]) {
        Some(i) => Err(HarnessError::OrderViolation {
            size,
            position: i + 1,
        }),
        None => Ok(()),
    }
}

/// Render timings as the console table printed by the CLI.
pub fn render_table(timings: &[SizeTiming]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "size | enqueue (ms) | dequeue (ms)");
    let _ = writeln!(out, "-------------------------------------");
    for t in timings {
        let _ = writeln!(
            out,
            "{} | {:.4} | {:.4}",
            t.size, t.enqueue_ms, t.dequeue_ms
        );
    }
    out
}
