mod match_session;

use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::error::EngineError;
use crate::games::{Board, Geometry, Mark, OpponentConfig, Outcome};

pub use match_session::MatchSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingHuman,
    OpponentThinking,
    GameOver,
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnState::AwaitingHuman => write!(f, "awaiting a human move"),
            TurnState::OpponentThinking => write!(f, "opponent is thinking"),
            TurnState::GameOver => write!(f, "the game is over"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent {
    MoveApplied { board: Board, mover: Mark },
    GameEnded(Outcome),
    /// The computer could not produce a move; the match stops.
    OpponentFailed(EngineError),
}

pub trait MatchBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast(&self, event: MatchEvent) -> impl Future<Output = ()> + Send;
}

/// Forwards events into an unbounded channel for a single UI consumer.
#[derive(Debug, Clone)]
pub struct ChannelBroadcaster {
    sender: mpsc::UnboundedSender<MatchEvent>,
}

impl ChannelBroadcaster {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<MatchEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl MatchBroadcaster for ChannelBroadcaster {
    async fn broadcast(&self, event: MatchEvent) {
        // A closed receiver means the UI is gone; nothing left to notify.
        let _ = self.sender.send(event);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    VsFriend,
    VsComputer,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSettings {
    pub geometry: Geometry,
    pub mode: MatchMode,
    pub opponent: OpponentConfig,
    pub thinking_delay: Duration,
}

impl MatchSettings {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.opponent.geometry() != self.geometry {
            return Err(EngineError::Configuration(format!(
                "{} opponent configured for a {} match",
                self.opponent.geometry(),
                self.geometry
            )));
        }
        Ok(())
    }
}
