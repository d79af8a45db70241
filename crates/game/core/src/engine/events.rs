use arrayvec::ArrayVec;

use crate::combat::Resolution;
use crate::state::{Element, Side};

use super::PhaseKind;

/// Something observable that happened during one poll or input delivery.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    CursorMoved {
        index: usize,
    },
    ActionStarted {
        actor: Side,
        move_index: usize,
        effect: Element,
    },
    EffectResolved {
        actor: Side,
        resolution: Resolution,
    },
    TweenFinished {
        target: Side,
        hp: u32,
    },
    PhaseChanged {
        from: PhaseKind,
        to: PhaseKind,
    },
    BattleEnded {
        winner: Side,
    },
    SessionRestarted {
        generation: u64,
    },
}

const REPORT_CAPACITY: usize = 8;

/// Events produced by a single engine step, in the order they happened.
///
/// A step produces at most a handful of events; the fixed capacity keeps
/// reports allocation-free.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    events: ArrayVec<BattleEvent, REPORT_CAPACITY>,
}

impl StepReport {
    pub const CAPACITY: usize = REPORT_CAPACITY;

    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: BattleEvent) {
        if let Err(err) = self.events.try_push(event) {
            tracing::warn!(event = ?err.element(), "step report full, dropping event");
        }
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// The phase the step ended in, if it changed phase at all.
    pub fn last_phase_change(&self) -> Option<PhaseKind> {
        self.events.iter().rev().find_map(|event| match event {
            BattleEvent::PhaseChanged { to, .. } => Some(*to),
            _ => None,
        })
    }

    pub fn resolutions(&self) -> impl Iterator<Item = (Side, &Resolution)> {
        self.events.iter().filter_map(|event| match event {
            BattleEvent::EffectResolved { actor, resolution } => Some((*actor, resolution)),
            _ => None,
        })
    }
}

impl IntoIterator for StepReport {
    type Item = BattleEvent;
    type IntoIter = arrayvec::IntoIter<BattleEvent, REPORT_CAPACITY>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
