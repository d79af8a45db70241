//! Session slot owned by a host.
//!
//! An [`Arena`] keeps what is needed to (re)build sessions and at most one
//! live [`BattleSession`]. Polling or sending input before a session exists
//! is reported as [`SessionError::NoActiveSession`].

use std::sync::Arc;

use crate::config::BattleConfig;
use crate::engine::{BattleInput, StepReport};
use crate::env::RosterOracle;
use crate::error::SessionError;
use crate::session::BattleSession;
use crate::snapshot::RenderSnapshot;
use crate::timing::Timestamp;

pub struct Arena {
    roster: Arc<dyn RosterOracle>,
    config: BattleConfig,
    seed: u64,
    session: Option<BattleSession>,
}

impl Arena {
    pub fn new(roster: Arc<dyn RosterOracle>, config: BattleConfig, seed: u64) -> Self {
        Self {
            roster,
            config,
            seed,
            session: None,
        }
    }

    /// Builds a fresh session, replacing any current one.
    pub fn start(&mut self) -> Result<&mut BattleSession, SessionError> {
        let session = BattleSession::new(Arc::clone(&self.roster), self.config.clone(), self.seed)?;
        Ok(self.session.insert(session))
    }

    /// Drops the current session.
    pub fn end(&mut self) -> Option<BattleSession> {
        self.session.take()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&BattleSession> {
        self.session.as_ref()
    }

    pub fn poll(&mut self, now: Timestamp) -> Result<StepReport, SessionError> {
        Ok(self.active_mut()?.poll(now))
    }

    pub fn handle_input(
        &mut self,
        input: BattleInput,
        now: Timestamp,
    ) -> Result<StepReport, SessionError> {
        self.active_mut()?.handle_input(input, now)
    }

    pub fn snapshot(&self, now: Timestamp) -> Result<RenderSnapshot, SessionError> {
        self.session
            .as_ref()
            .map(|session| session.snapshot(now))
            .ok_or(SessionError::NoActiveSession)
    }

    fn active_mut(&mut self) -> Result<&mut BattleSession, SessionError> {
        self.session.as_mut().ok_or(SessionError::NoActiveSession)
    }
}
