use crate::search::NodeId;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Which nodes of the other direction a newly generated state is compared
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingPolicy {
    /// The other direction's frontier, plus the given number of ancestor
    /// levels above each frontier node. With 0 only the frontier itself is
    /// checked, which can miss states the other side popped a moment ago.
    Overrun(usize),
    /// Every node the other direction has generated so far.
    AnyGenerated,
}

impl Default for MeetingPolicy {
    fn default() -> Self {
        MeetingPolicy::Overrun(1)
    }
}

/// Two nodes denoting the same state, one in each direction's search space.
/// `backward` is `None` when the forward direction reached a goal state on
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Meeting {
    pub forward: NodeId,
    pub backward: Option<NodeId>,
}

/// Exactly one direction gets to settle the search, either by reporting a
/// meeting or by proving there is none. The flag is checked before every
/// frontier mutation so the other worker stops as soon as possible.
#[derive(Debug, Default)]
pub(crate) struct MeetingClaim {
    claimed: AtomicBool,
    meeting: Mutex<Option<Meeting>>,
}

impl MeetingClaim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }

    /// Returns whether this call won the claim. Later calls leave the stored
    /// meeting untouched.
    pub fn claim(&self, meeting: Meeting) -> bool {
        if self
            .claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            *self.meeting.lock() = Some(meeting);
            true
        } else {
            false
        }
    }

    /// Settle the search without a meeting. Returns false if a meeting was
    /// claimed first.
    pub fn give_up(&self) -> bool {
        self.claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn into_meeting(self) -> Option<Meeting> {
        self.meeting.into_inner()
    }
}
