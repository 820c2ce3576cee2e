use core::ops::Range;

/// Where a [`FrameBudgetScheduler`] stands between ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchedulerState {
    #[default]
    Idle,
    Batching {
        cursor: usize,
    },
    /// A newer range arrived while batching; the current pass runs to the end and then starts
    /// over.
    BatchingWithPendingRestart {
        cursor: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BatchOutcome {
    /// More batches follow.
    Continue,
    /// The pass reached the end with a restart pending; the cursor is back at 0.
    Restarted,
    /// The pass is complete and the scheduler is idle.
    Done,
}

/// One tick's worth of work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch {
    /// Positions in the current display list to create or update.
    pub range: Range<usize>,
    pub outcome: BatchOutcome,
}

/// Spreads per-item work across ticks, at most `budget` items per tick.
///
/// Given `N` items and no restart request, [`FrameBudgetScheduler::advance`] yields exactly
/// `ceil(N / budget)` batches, the last one reporting [`BatchOutcome::Done`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameBudgetScheduler {
    budget: usize,
    len: usize,
    state: SchedulerState,
}

impl FrameBudgetScheduler {
    /// A `budget` of 0 disables frame budgeting.
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            len: 0,
            state: SchedulerState::Idle,
        }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn is_enabled(&self) -> bool {
        self.budget > 0
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SchedulerState::Idle
    }

    /// Length of the display list the scheduler is working through.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Hands the scheduler a display list of `len` items.
    ///
    /// An in-flight pass is not abandoned: it keeps its cursor, adopts the new length, and
    /// restarts from 0 once it reaches the end.
    pub fn enqueue(&mut self, len: usize) {
        self.len = len;
        self.state = match self.state {
            SchedulerState::Idle => SchedulerState::Batching { cursor: 0 },
            SchedulerState::Batching { cursor }
            | SchedulerState::BatchingWithPendingRestart { cursor } => {
                SchedulerState::BatchingWithPendingRestart { cursor }
            }
        };
        rtrace!(len, state = ?self.state, "scheduler enqueued");
    }

    /// Produces the next batch, or `None` when idle.
    ///
    /// `input_active` reports whether the user is still scrolling. A pending restart keeps
    /// itself pending while input is active; once input stops, one final full pass runs.
    pub fn advance(&mut self, input_active: bool) -> Option<Batch> {
        let (cursor, pending) = match self.state {
            SchedulerState::Idle => return None,
            SchedulerState::Batching { cursor } => (cursor, false),
            SchedulerState::BatchingWithPendingRestart { cursor } => (cursor, true),
        };

        let start = cursor.min(self.len);
        let end = start.saturating_add(self.budget.max(1)).min(self.len);

        let outcome = if end < self.len {
            self.state = if pending {
                SchedulerState::BatchingWithPendingRestart { cursor: end }
            } else {
                SchedulerState::Batching { cursor: end }
            };
            BatchOutcome::Continue
        } else if pending {
            self.state = if input_active {
                SchedulerState::BatchingWithPendingRestart { cursor: 0 }
            } else {
                SchedulerState::Batching { cursor: 0 }
            };
            BatchOutcome::Restarted
        } else {
            self.state = SchedulerState::Idle;
            BatchOutcome::Done
        };

        rtrace!(start, end, outcome = ?outcome, "scheduler advanced");
        Some(Batch {
            range: start..end,
            outcome,
        })
    }

    pub fn reset(&mut self) {
        self.len = 0;
        self.state = SchedulerState::Idle;
    }
}
