//! Sample-task walkthrough of the queue API.
//!
//! Enqueues a handful of chores, shows which one comes next, then works
//! through them highest priority first.

use std::io::{self, Write};

use crate::pqueue::{BoundedHeap, Entry};
use crate::QueueResult;

/// The fixed task list used by the walkthrough.
pub const SAMPLE_TASKS: [(i32, &str); 4] = [
    (3, "wash dishes"),
    (1, "buy bread"),
    (4, "homework"),
    (2, "call mom"),
];

/// Build a queue holding [`SAMPLE_TASKS`].
pub fn sample_queue() -> BoundedHeap {
    SAMPLE_TASKS.iter().copied().collect()
}

/// Run the walkthrough, writing progress to `out`.
///
/// Returns the tasks in the order they were completed.
pub fn run_demo<W: Write>(out: &mut W) -> io::Result<Vec<Entry>> {
    let mut queue = sample_queue();

    writeln!(out, "=== priority queue walkthrough ===")?;
    let next = queue.peek().map_err(queue_to_io)?;
    writeln!(
        out,
        "next task: {} (priority: {})",
        next.payload, next.priority
    )?;

    writeln!(out)?;
    writeln!(out, "processing tasks by priority:")?;
    let mut done = Vec::with_capacity(queue.len());
    while !queue.is_empty() {
        let task = queue.dequeue().map_err(queue_to_io)?;
        writeln!(out, "done: {} (priority: {})", task.payload, task.priority)?;
        done.push(task);
    }
    Ok(done)
}

fn queue_to_io(e: crate::QueueError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e)
}

/// Drain `queue` into a vector, highest priority first.
pub fn drain(queue: &mut BoundedHeap) -> QueueResult<Vec<Entry>> {
    let mut out = Vec::with_capacity(queue.len());
    while !queue.is_empty() {
        out.push(queue.dequeue()?);
    }
    Ok(out)
}
