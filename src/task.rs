//! Cooperative generation task primitives.

/// Outcome of resuming a time-sliced generation task.
///
/// Tasks suspend after every batch of emitted units; the driving scheduler
/// resumes them once per tick. Cancellation is dropping the task, which is
/// why there is no explicit cancel operation here.
#[derive(Debug)]
pub enum Progress<T> {
    /// The batch budget is used up; resume again on the next tick.
    Pending,
    /// The task ran to completion and produced its output. Drop the task
    /// afterwards; resuming a finished task yields an empty result.
    Done(T),
}
