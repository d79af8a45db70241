//! Battle state machine.
//!
//! [`BattleEngine`] is the only code that mutates a [`BattleSession`]. It
//! borrows the session for one step, either a poll or an input delivery, and
//! reports what happened in a [`StepReport`].
//!
//! Every transition is a function of the caller's timestamp and the deadlines
//! stored in the current phase. Nothing counts polls, so a host that stalls
//! for several seconds sees overdue timers expire on its next poll.

mod events;
mod input;
mod messages;
mod phase;
mod turns;

pub use events::{BattleEvent, StepReport};
pub use input::{BattleInput, CursorDirection, MenuCursor};
pub use phase::{BattlePhase, PendingAction, PhaseKind};

pub(crate) use messages::prompt as prompt_message;

use core::mem;

use crate::error::SessionError;
use crate::session::BattleSession;
use crate::timing::Timestamp;

/// Drives one [`BattleSession`] through its phases.
pub struct BattleEngine<'a> {
    session: &'a mut BattleSession,
}

impl<'a> BattleEngine<'a> {
    pub fn new(session: &'a mut BattleSession) -> Self {
        Self { session }
    }

    /// Advances the session to `now`.
    ///
    /// Finished tweens and flashes are settled first. Then at most one phase
    /// transition is taken: an expired effect resolves its action, or an
    /// expired wait hands the turn on.
    pub fn poll(&mut self, now: Timestamp) -> StepReport {
        let mut report = StepReport::new();
        self.settle_timers(now, &mut report);

        let current = mem::replace(&mut self.session.phase, BattlePhase::Selecting);
        let from = current.kind();
        let next = match current {
            BattlePhase::Animating { effect, action } if effect.is_finished(now) => {
                self.complete_action(action, now, &mut report)
            }
            BattlePhase::PostActionWait { deadline } if now >= deadline => {
                self.hand_off(now, &mut report)
            }
            unchanged => {
                self.session.phase = unchanged;
                return report;
            }
        };

        self.enter(from, next, &mut report);
        report
    }

    /// Applies one input event.
    ///
    /// Inputs the current phase does not accept are dropped without touching
    /// the session. Only a restart can fail, when the roster no longer yields
    /// a valid pair.
    pub fn handle_input(
        &mut self,
        input: BattleInput,
        now: Timestamp,
    ) -> Result<StepReport, SessionError> {
        let mut report = StepReport::new();
        if !self.session.phase.accepts(&input) {
            tracing::trace!(?input, phase = %self.session.phase.kind(), "input ignored");
            return Ok(report);
        }

        match input {
            BattleInput::MoveCursor(direction) => {
                self.session.cursor = self.session.cursor.moved(direction);
                report.push(BattleEvent::CursorMoved {
                    index: self.session.cursor.index(),
                });
            }
            BattleInput::Confirm => self.commit(now, &mut report),
            BattleInput::Restart => self.restart(&mut report)?,
        }
        Ok(report)
    }

    fn settle_timers(&mut self, now: Timestamp, report: &mut StepReport) {
        if let Some(tween) = self.session.tween.take_if(|tween| tween.is_finished(now)) {
            let (target, hp) = (tween.target(), tween.end_hp());
            self.session.combatant_mut(target).settle_display(hp);
            report.push(BattleEvent::TweenFinished { target, hp });
        }
        if self
            .session
            .flash
            .as_ref()
            .is_some_and(|flash| flash.is_finished(now))
        {
            self.session.flash = None;
        }
    }

    fn enter(&mut self, from: PhaseKind, next: BattlePhase, report: &mut StepReport) {
        let to = next.kind();
        if from != to {
            tracing::debug!(%from, %to, round = self.session.round, "phase transition");
            report.push(BattleEvent::PhaseChanged { from, to });
        }
        if let BattlePhase::BattleEnded { winner } = next {
            report.push(BattleEvent::BattleEnded { winner });
        }
        self.session.phase = next;
    }

    fn restart(&mut self, report: &mut StepReport) -> Result<(), SessionError> {
        let fresh = self.session.restarted()?;
        tracing::info!(
            generation = fresh.generation,
            player = fresh.player.name(),
            opponent = fresh.opponent.name(),
            "battle restarted"
        );
        *self.session = fresh;
        report.push(BattleEvent::PhaseChanged {
            from: PhaseKind::BattleEnded,
            to: PhaseKind::Selecting,
        });
        report.push(BattleEvent::SessionRestarted {
            generation: self.session.generation,
        });
        Ok(())
    }
}
