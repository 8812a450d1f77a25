//! Deferred actions keyed to session time.
//!
//! Every entry is stamped with the session generation that scheduled it.
//! Entries from another generation are discarded instead of run, so a
//! timer left over from a finished session can never touch a new one.

use starguard_core::types::SimTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Increment the wave counter and spawn the new wave.
    AdvanceWave,
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduledEvent {
    pub due_secs: f64,
    pub generation: u64,
    pub action: ScheduledAction,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<ScheduledEvent>,
}

impl Scheduler {
    pub fn schedule(&mut self, due_secs: f64, generation: u64, action: ScheduledAction) {
        self.pending.push(ScheduledEvent {
            due_secs,
            generation,
            action,
        });
    }

    /// Remove and return the actions of `generation` due at or before `time`,
    /// in due order. Entries of any other generation are dropped.
    pub fn take_due(&mut self, time: &SimTime, generation: u64) -> Vec<ScheduledAction> {
        let now = time.elapsed_secs;
        let mut due = Vec::new();
        self.pending.retain(|event| {
            if event.generation != generation {
                log::trace!(
                    "Dropping stale {:?} from session {} (current {})",
                    event.action,
                    event.generation,
                    generation
                );
                return false;
            }
            if event.due_secs <= now {
                due.push(*event);
                return false;
            }
            true
        });
        due.sort_by(|a, b| a.due_secs.total_cmp(&b.due_secs));
        due.into_iter().map(|e| e.action).collect()
    }

    /// Earliest due time among `generation`'s entries.
    pub fn next_due(&self, generation: u64) -> Option<f64> {
        self.pending
            .iter()
            .filter(|e| e.generation == generation)
            .map(|e| e.due_secs)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
