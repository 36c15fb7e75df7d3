//! Event-driven game session
//!
//! [`Session`] binds a [`GameState`] to an opponent policy and turns the
//! game into a pure state machine over discrete triggers: a human click, a
//! timer firing, or a reset. It never sleeps or spawns anything itself;
//! instead it hands [`Effect`]s back to the runtime, which executes them and
//! feeds the resulting events back in. One logical writer, no locks.
//!
//! The cosmetic "thinking" delay works through [`TimerToken`]s: arming a
//! timer mints a fresh token, and a fired timer is honored only while its
//! token is still the pending one. Reset clears the pending token, so a
//! timer that was in flight when the player reset fires as a stale no-op.

use std::time::Duration;

use crate::{Result, board::Player, policy::MovePolicy, state::GameState};

/// Identity of one armed opponent timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// External triggers a session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The human clicked cell 0-8
    CellClicked(usize),
    /// A previously scheduled opponent timer elapsed
    TimerFired(TimerToken),
    /// The reset control was pressed
    ResetPressed,
}

/// Instructions for the runtime driving this session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Wait `delay`, then feed back [`Event::TimerFired`] with this token
    ScheduleOpponent { delay: Duration, token: TimerToken },
    /// The timer with this token no longer matters; drop it if possible
    CancelTimer(TimerToken),
}

/// A single human-versus-computer game session
pub struct Session {
    state: GameState,
    policy: Box<dyn MovePolicy>,
    delay: Duration,
    pending: Option<TimerToken>,
    next_token: u64,
}

impl Session {
    pub const HUMAN: Player = Player::X;
    pub const COMPUTER: Player = Player::O;

    /// Create a session with the given opponent policy and thinking delay
    pub fn new(policy: Box<dyn MovePolicy>, delay: Duration) -> Self {
        Self {
            state: GameState::new(),
            policy,
            delay,
            pending: None,
            next_token: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether an opponent timer is currently armed
    pub fn opponent_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the session currently accepts human clicks
    pub fn accepts_input(&self) -> bool {
        !self.state.is_terminal()
            && self.state.current_player() == Self::HUMAN
            && self.pending.is_none()
    }

    fn arm_timer(&mut self) -> Effect {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(token);
        Effect::ScheduleOpponent {
            delay: self.delay,
            token,
        }
    }

    /// Process one trigger and return the effects for the runtime.
    ///
    /// Invalid triggers (clicking out of turn, on an occupied cell, after
    /// the game ended, or a stale timer) produce no effects and leave the
    /// state unchanged.
    ///
    /// # Errors
    ///
    /// Propagates a policy failure, which indicates a broken policy: the
    /// session only consults it while the game is in progress.
    pub fn handle(&mut self, event: Event) -> Result<Vec<Effect>> {
        match event {
            Event::CellClicked(pos) => self.on_click(pos),
            Event::TimerFired(token) => self.on_timer(token),
            Event::ResetPressed => Ok(self.on_reset()),
        }
    }

    fn on_click(&mut self, pos: usize) -> Result<Vec<Effect>> {
        // Clicks while the computer is thinking or moving are out of turn.
        if !self.accepts_input() || !self.state.apply_move(pos) {
            return Ok(Vec::new());
        }

        if self.state.is_terminal() {
            return Ok(Vec::new());
        }

        debug_assert_eq!(self.state.current_player(), Self::COMPUTER);
        Ok(vec![self.arm_timer()])
    }

    fn on_timer(&mut self, token: TimerToken) -> Result<Vec<Effect>> {
        if self.pending != Some(token) {
            // Stale timer from before a reset. Ignore.
            return Ok(Vec::new());
        }
        self.pending = None;

        let pos = self.policy.select_move(self.state.board(), Self::COMPUTER)?;
        self.state.apply_move(pos);
        Ok(Vec::new())
    }

    fn on_reset(&mut self) -> Vec<Effect> {
        let effects = match self.pending.take() {
            Some(token) => vec![Effect::CancelTimer(token)],
            None => Vec::new(),
        };
        self.state.reset();
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Cell, policy::HeuristicPolicy, state::Status};

    fn session() -> Session {
        Session::new(
            Box::new(HeuristicPolicy::with_seed(42)),
            Duration::from_millis(500),
        )
    }

    fn fire_pending(session: &mut Session, effects: &[Effect]) {
        let &[Effect::ScheduleOpponent { token, .. }] = effects else {
            panic!("expected exactly one schedule effect, got {effects:?}");
        };
        session.handle(Event::TimerFired(token)).unwrap();
    }

    #[test]
    fn test_human_move_schedules_opponent() {
        let mut s = session();
        let effects = s.handle(Event::CellClicked(0)).unwrap();

        assert!(matches!(
            effects.as_slice(),
            [Effect::ScheduleOpponent { delay, .. }] if *delay == Duration::from_millis(500)
        ));
        assert!(s.opponent_pending());
        assert!(!s.accepts_input());
    }

    #[test]
    fn test_timer_fires_opponent_move() {
        let mut s = session();
        let effects = s.handle(Event::CellClicked(0)).unwrap();
        fire_pending(&mut s, &effects);

        // Seeded heuristic takes the center on its first move.
        assert_eq!(s.state().board().get(4), Cell::O);
        assert!(s.accepts_input());
    }

    #[test]
    fn test_clicks_ignored_while_opponent_thinks() {
        let mut s = session();
        let effects = s.handle(Event::CellClicked(0)).unwrap();

        assert!(s.handle(Event::CellClicked(1)).unwrap().is_empty());
        assert!(s.state().board().is_empty(1));

        fire_pending(&mut s, &effects);
        assert_eq!(s.state().board().get(1), Cell::Empty);
    }

    #[test]
    fn test_reset_cancels_pending_timer() {
        let mut s = session();
        let effects = s.handle(Event::CellClicked(0)).unwrap();
        let &[Effect::ScheduleOpponent { token, .. }] = effects.as_slice() else {
            panic!("expected schedule effect");
        };

        let reset_effects = s.handle(Event::ResetPressed).unwrap();
        assert_eq!(reset_effects, vec![Effect::CancelTimer(token)]);
        assert_eq!(*s.state(), GameState::new());

        // The cancelled timer firing anyway must be a no-op.
        assert!(s.handle(Event::TimerFired(token)).unwrap().is_empty());
        assert_eq!(*s.state(), GameState::new());
    }

    #[test]
    fn test_stale_token_after_new_game_is_ignored() {
        let mut s = session();
        let first = s.handle(Event::CellClicked(0)).unwrap();
        let &[Effect::ScheduleOpponent { token: stale, .. }] = first.as_slice() else {
            panic!("expected schedule effect");
        };

        s.handle(Event::ResetPressed).unwrap();
        let second = s.handle(Event::CellClicked(8)).unwrap();

        // Old token must not trigger a move even though a timer is pending.
        assert!(s.handle(Event::TimerFired(stale)).unwrap().is_empty());
        assert!(s.opponent_pending());

        fire_pending(&mut s, &second);
        assert!(!s.opponent_pending());
    }

    #[test]
    fn test_terminal_game_leaves_no_timer_armed() {
        let mut s = session();
        // X: 0 draws O to the center; X: 1 forces the block at 2; X: 3
        // hands O the 2-4-6 diagonal, which tier 1 takes immediately.
        for pos in [0, 1, 3] {
            let effects = s.handle(Event::CellClicked(pos)).unwrap();
            fire_pending(&mut s, &effects);
        }

        assert_eq!(s.state().winner(), Some(Player::O));
        assert!(!s.opponent_pending());
        assert!(!s.accepts_input());
        // Clicks after the game ended neither move nor schedule anything.
        assert!(s.handle(Event::CellClicked(5)).unwrap().is_empty());
        assert!(s.state().board().is_empty(5));
    }

    #[test]
    fn test_full_game_reaches_terminal_state() {
        let mut s = session();
        // The human plays the lowest empty cell forever; the session must
        // reach a terminal state within nine plies without hanging.
        for _ in 0..9 {
            if s.state().is_terminal() {
                break;
            }
            let pos = s
                .state()
                .board()
                .empty_positions()
                .into_iter()
                .next()
                .unwrap();
            let effects = s.handle(Event::CellClicked(pos)).unwrap();
            if let [Effect::ScheduleOpponent { token, .. }] = effects.as_slice() {
                s.handle(Event::TimerFired(*token)).unwrap();
            }
        }

        assert!(s.state().is_terminal());
        assert_ne!(s.state().status(), Status::InProgress);
    }
}
