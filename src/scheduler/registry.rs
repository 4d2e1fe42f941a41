//! Task Registry
//!
//! Pending tasks, the set of claimed ids and the one-shot result slots all live behind a
//! single coarse lock. The lock is only held for map reads and writes; nobody waits on a
//! result slot while holding it.

use super::types::*;
use crate::error::{CalcError, CalcResult};

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use tokio::sync::oneshot;

/// Reading end of a task's result slot. Resolves once a worker reports.
pub type ResultSlot = oneshot::Receiver<f64>;

#[derive(Default)]
struct RegistryState {
    tasks: HashMap<TaskId, Task>,
    claimed: HashSet<TaskId>,
    result_slots: HashMap<TaskId, oneshot::Sender<f64>>,
}

/// The scheduler core shared by evaluations (submitters) and workers (fetch/report).
#[derive(Default)]
pub struct TaskRegistry {
    state: Mutex<RegistryState>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an unclaimed task with a fresh result slot and returns the slot's reader.
    /// Never blocks.
    pub fn submit(&self, task: Task) -> ResultSlot {
        let (tx, rx) = oneshot::channel();
        let id = task.id.clone();

        let mut state = self.state.lock();
        state.result_slots.insert(id.clone(), tx);
        state.tasks.insert(id.clone(), task);
        drop(state);

        tracing::debug!("Submitted task {}", id);
        rx
    }

    /// Claims the first unclaimed task.
    ///
    /// Returns `NotFound` when every pending task is already claimed or none exist.
    /// Never waits for work to appear; callers poll.
    pub fn fetch(&self) -> CalcResult<Task> {
        let mut state = self.state.lock();

        let task = state
            .tasks
            .values()
            .find(|task| !state.claimed.contains(&task.id))
            .cloned()
            .ok_or(CalcError::NotFound)?;

        state.claimed.insert(task.id.clone());
        tracing::debug!(
            "Claimed task {} ({} {} {})",
            task.id,
            task.operand1,
            task.operator,
            task.operand2
        );

        Ok(task)
    }

    /// Every pending task with its claim flag. Does not change any state.
    pub fn fetch_all(&self) -> Vec<TaskSnapshot> {
        let state = self.state.lock();

        state
            .tasks
            .values()
            .map(|task| TaskSnapshot {
                task: task.clone(),
                claimed: state.claimed.contains(&task.id),
            })
            .collect()
    }

    /// Delivers `value` to the evaluation waiting on task `id` and forgets the task.
    ///
    /// Returns `NotFound` for an unknown id, including one that was already reported.
    pub fn report(&self, id: &TaskId, value: f64) -> CalcResult<()> {
        let mut state = self.state.lock();

        let slot = state.result_slots.remove(id).ok_or(CalcError::NotFound)?;
        state.tasks.remove(id);
        state.claimed.remove(id);
        drop(state);

        if slot.send(value).is_err() {
            // The waiting evaluation is gone; the value has nowhere to go.
            tracing::warn!("Result for task {} arrived after its evaluation ended", id);
        } else {
            tracing::debug!("Reported result {} for task {}", value, id);
        }

        Ok(())
    }

    pub fn pending_count(&self) -> usize {
        self.state.lock().tasks.len()
    }

    pub fn claimed_count(&self) -> usize {
        self.state.lock().claimed.len()
    }
}
