use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::{JoinError, JoinHandle};

use crate::error::EngineError;
use crate::games::{Board, Mark, Outcome, SessionRng, compute_opponent_move};
use crate::engine::session::{MatchBroadcaster, MatchEvent, MatchMode, MatchSettings, TurnState};

/// The human always plays X and always opens.
const HUMAN_MARK: Mark = Mark::X;

struct MatchState {
    board: Board,
    current: Mark,
    outcome: Outcome,
    turn: TurnState,
    /// Bumped on every reset; a computed move is applied only if the epoch
    /// it was computed for is still current.
    epoch: u64,
    pending: Option<JoinHandle<()>>,
}

impl MatchState {
    fn fresh(settings: &MatchSettings, epoch: u64) -> Self {
        Self {
            board: Board::new(settings.geometry),
            current: HUMAN_MARK,
            outcome: Outcome::InProgress,
            turn: TurnState::AwaitingHuman,
            epoch,
            pending: None,
        }
    }
}

/// One match between a human and either a friend at the same terminal or
/// the computer. Cheap to clone; clones share the same match.
#[derive(Clone)]
pub struct MatchSession<B: MatchBroadcaster> {
    settings: MatchSettings,
    state: Arc<Mutex<MatchState>>,
    rng: Arc<Mutex<SessionRng>>,
    broadcaster: B,
}

impl<B: MatchBroadcaster> MatchSession<B> {
    pub fn new(settings: MatchSettings, broadcaster: B, rng: SessionRng) -> Result<Self, EngineError> {
        settings.validate()?;
        Ok(Self {
            state: Arc::new(Mutex::new(MatchState::fresh(&settings, 0))),
            settings,
            rng: Arc::new(Mutex::new(rng)),
            broadcaster,
        })
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub async fn board(&self) -> Board {
        self.state.lock().await.board
    }

    pub async fn outcome(&self) -> Outcome {
        self.state.lock().await.outcome.clone()
    }

    pub async fn turn_state(&self) -> TurnState {
        self.state.lock().await.turn
    }

    pub async fn current_mark(&self) -> Mark {
        self.state.lock().await.current
    }

    /// Plays `mv` for whoever is to move. Rejected unless a human move is
    /// expected; an illegal move leaves the match untouched.
    pub async fn submit_move(&self, mv: usize) -> Result<(), EngineError> {
        let mut state = self.state.lock().await;
        if state.turn != TurnState::AwaitingHuman {
            return Err(EngineError::OutOfTurn(state.turn));
        }

        let mover = state.current;
        state.board.apply_move(mv, mover)?;
        self.broadcaster
            .broadcast(MatchEvent::MoveApplied {
                board: state.board,
                mover,
            })
            .await;

        if self.finish_if_over(&mut state).await {
            return Ok(());
        }

        state.current = next_mark(mover);
        if self.settings.mode == MatchMode::VsComputer {
            state.turn = TurnState::OpponentThinking;
            state.pending = Some(self.spawn_opponent_turn(state.epoch));
        }
        Ok(())
    }

    /// Starts over from any state. A move still being computed for the old
    /// board is dropped.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
        let epoch = state.epoch + 1;
        *state = MatchState::fresh(&self.settings, epoch);
        crate::log!("Match reset ({}, epoch {})", self.settings.geometry, epoch);
    }

    fn spawn_opponent_turn(&self, epoch: u64) -> JoinHandle<()> {
        let session = self.clone();
        tokio::spawn(async move {
            session.play_opponent_turn(epoch).await;
        })
    }

    async fn play_opponent_turn(&self, epoch: u64) {
        tokio::time::sleep(self.settings.thinking_delay).await;

        let (board, mark) = {
            let state = self.state.lock().await;
            if state.epoch != epoch || state.turn != TurnState::OpponentThinking {
                return;
            }
            (state.board, state.current)
        };

        let rng = self.rng.clone();
        let opponent = self.settings.opponent;
        let computed = tokio::task::spawn_blocking(move || {
            let mut rng = rng.blocking_lock();
            compute_opponent_move(&board, mark, &opponent, &mut rng)
        })
        .await;

        let mut state = self.state.lock().await;
        if state.epoch != epoch {
            crate::log!("Discarding opponent move computed before a reset");
            return;
        }
        state.pending = None;

        let applied = worker_result(computed)
            .and_then(|mv| state.board.apply_move(mv, mark).map(|_| mv));

        match applied {
            Ok(mv) => {
                crate::log!("Opponent {} played {} on {}", mark, mv, state.board);
                self.broadcaster
                    .broadcast(MatchEvent::MoveApplied {
                        board: state.board,
                        mover: mark,
                    })
                    .await;
                if !self.finish_if_over(&mut state).await {
                    state.current = next_mark(mark);
                    state.turn = TurnState::AwaitingHuman;
                }
            }
            Err(e) => {
                crate::log!("Opponent failed to move: {}", e);
                state.turn = TurnState::GameOver;
                self.broadcaster.broadcast(MatchEvent::OpponentFailed(e)).await;
            }
        }
    }

    async fn finish_if_over(&self, state: &mut MatchState) -> bool {
        let outcome = state.board.outcome();
        if !outcome.is_over() {
            return false;
        }
        state.outcome = outcome.clone();
        state.turn = TurnState::GameOver;
        self.broadcaster.broadcast(MatchEvent::GameEnded(outcome)).await;
        true
    }
}

/// Flattens the blocking worker's outcome; a panicked or cancelled worker
/// becomes `OpponentTask`.
fn worker_result(computed: Result<Result<usize, EngineError>, JoinError>) -> Result<usize, EngineError> {
    computed.unwrap_or_else(|e| {
        crate::log!("Opponent worker did not finish: {}", e);
        Err(EngineError::OpponentTask(e.to_string()))
    })
}

fn next_mark(mark: Mark) -> Mark {
    mark.opponent().unwrap_or(HUMAN_MARK)
}
