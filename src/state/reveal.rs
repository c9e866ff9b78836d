//! One-shot reveal tracking for fade-in elements.
//!
//! Each registered element is either `Pending` or `Revealed`. The first
//! intersecting notification moves it to `Revealed` and tells the caller to
//! stop observing it; later notifications are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Index of a tracked element, stored on the element as a data attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealKey(pub usize);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Pending,
    Revealed,
}

/// What the observer callback should do for one notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the `visible` class and unobserve the element.
    Reveal,
    Ignore,
}

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    phases: Vec<RevealPhase>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> RevealKey {
        self.phases.push(RevealPhase::Pending);
        RevealKey(self.phases.len() - 1)
    }

    #[cfg(test)]
    fn phase(&self, key: RevealKey) -> Option<RevealPhase> {
        self.phases.get(key.0).copied()
    }

    /// Apply one intersection notification. Unknown keys are ignored.
    pub fn on_intersection(&mut self, key: RevealKey, is_intersecting: bool) -> RevealAction {
        if !is_intersecting {
            return RevealAction::Ignore;
        }
        match self.phases.get_mut(key.0) {
            Some(phase) if *phase == RevealPhase::Pending => {
                *phase = RevealPhase::Revealed;
                RevealAction::Reveal
            }
            _ => RevealAction::Ignore,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Elements still waiting for their first intersection. Once this
    /// reaches zero the observer has nothing left to do.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.phases.iter().filter(|p| **p == RevealPhase::Pending).count()
    }
}

/// Merge the `.fade-in` and `.section` matches into one list, in order, with
/// each element once. An element carrying both classes keeps its first slot.
#[must_use]
pub fn reveal_candidates<T: PartialEq>(fade_ins: Vec<T>, sections: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(fade_ins.len() + sections.len());
    for item in fade_ins.into_iter().chain(sections) {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
