//! Action lifecycle: commit, start, resolve and hand-off.

use crate::combat::{ResolutionKind, ResolutionTarget, resolve};
use crate::env::{RngContext, compute_seed};
use crate::state::Side;
use crate::timing::{DamageFlash, EffectTimer, HealthTween, Timestamp};

use super::{BattleEngine, BattleEvent, BattlePhase, PendingAction, PhaseKind, StepReport, messages};

impl BattleEngine<'_> {
    /// Locks in the player's selection and the opponent's reply, then starts
    /// the player's action.
    pub(super) fn commit(&mut self, now: Timestamp, report: &mut StepReport) {
        let index = self.session.cursor.index();
        if self.session.player.move_at(index).is_none() {
            tracing::warn!(index, "selected move index out of range, ignoring confirm");
            return;
        }

        let seed = compute_seed(
            self.session.seed,
            self.session.round,
            Side::Opponent.index(),
            RngContext::OpponentMove,
        );
        let reply = self
            .session
            .rng
            .pick_index(seed, self.session.opponent.moves().len());
        self.session.pending_opponent_move = Some(reply);
        self.session.round += 1;
        self.session.turn_owner = Side::Player;

        if let Some(next) = self.start_action(Side::Player, index, now, report) {
            self.enter(PhaseKind::Selecting, next, report);
        }
    }

    /// Builds the animating phase for `actor`'s move at `index`.
    ///
    /// Heals play on the actor's own anchor; everything else travels to the
    /// other side.
    pub(super) fn start_action(
        &mut self,
        actor: Side,
        index: usize,
        now: Timestamp,
        report: &mut StepReport,
    ) -> Option<BattlePhase> {
        let session = &mut *self.session;
        let mv = session.combatant(actor).move_at(index)?.clone();

        let from = session.anchor(actor);
        let to = if mv.is_heal() {
            from
        } else {
            session.anchor(actor.opponent())
        };
        let effect = EffectTimer::new(
            mv.effect_kind(),
            from,
            to,
            now,
            session.config.effect_duration_secs,
        );

        session.message = messages::action_started(session.combatant(actor).name(), &mv);
        tracing::debug!(%actor, move_name = %mv.name, kind = %mv.effect_kind(), "action started");
        report.push(BattleEvent::ActionStarted {
            actor,
            move_index: index,
            effect: mv.effect_kind(),
        });

        Some(BattlePhase::Animating {
            effect,
            action: PendingAction {
                actor,
                move_index: index,
                mv,
            },
        })
    }

    /// Applies a finished action's outcome and picks the following phase.
    pub(super) fn complete_action(
        &mut self,
        action: PendingAction,
        now: Timestamp,
        report: &mut StepReport,
    ) -> BattlePhase {
        let session = &mut *self.session;
        let actor = action.actor;
        let resolution = resolve(
            &action.mv,
            session.combatant(actor),
            session.combatant(actor.opponent()),
        );
        let target = match resolution.target {
            ResolutionTarget::Attacker => actor,
            ResolutionTarget::Defender => actor.opponent(),
        };

        // A tween still in flight snaps to its end before the next one starts.
        if let Some(previous) = session.tween.take() {
            session
                .combatant_mut(previous.target())
                .settle_display(previous.end_hp());
        }
        session.combatant_mut(target).set_hp(resolution.new_hp);
        let start_hp = session.combatant(target).displayed_hp();
        session.tween = Some(HealthTween::new(
            target,
            start_hp,
            resolution.new_hp,
            now,
            session.config.tween_duration_secs,
        ));
        if resolution.kind == ResolutionKind::Damage {
            session.flash = Some(DamageFlash::new(
                target,
                now,
                session.config.flash_duration_secs,
            ));
        }

        session.message = messages::resolved(
            session.combatant(actor).name(),
            session.combatant(target).name(),
            &resolution,
        );
        tracing::debug!(
            %actor,
            %target,
            kind = %resolution.kind,
            applied = resolution.applied,
            hp = resolution.new_hp,
            "action resolved"
        );
        report.push(BattleEvent::EffectResolved { actor, resolution });

        if resolution.fainted {
            tracing::info!(winner = session.combatant(actor).name(), "battle ended");
            return BattlePhase::BattleEnded { winner: actor };
        }
        BattlePhase::PostActionWait {
            deadline: now.after(session.config.post_action_wait_secs),
        }
    }

    /// Passes the turn on once the post-action wait has run out.
    ///
    /// After the player's action the opponent plays its pre-picked reply;
    /// after the opponent's, control returns to the move menu.
    pub(super) fn hand_off(&mut self, now: Timestamp, report: &mut StepReport) -> BattlePhase {
        if self.session.turn_owner == Side::Player && !self.session.opponent.is_fainted() {
            if let Some(index) = self.session.pending_opponent_move.take() {
                self.session.turn_owner = Side::Opponent;
                if let Some(next) = self.start_action(Side::Opponent, index, now, report) {
                    return next;
                }
            }
        }

        self.session.turn_owner = Side::Player;
        self.session.message = messages::prompt(self.session.player.name());
        BattlePhase::Selecting
    }
}
