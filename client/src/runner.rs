use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use arcade_common::engine::session::{ChannelBroadcaster, MatchEvent, MatchSession, TurnState};
use arcade_common::games::Geometry;
use arcade_common::log;

use crate::renderer::{outcome_message, prompt, render_board};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Move(usize),
    Reset,
    Quit,
    Invalid(String),
}

/// Moves are typed 1-based; the engine is 0-based.
fn parse_command(input: &str, geometry: Geometry) -> Command {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "r" | "reset" => return Command::Reset,
        "q" | "quit" => return Command::Quit,
        _ => {}
    }

    let limit = if geometry.has_gravity() {
        geometry.width()
    } else {
        geometry.cell_count()
    };
    match input.parse::<usize>() {
        Ok(n) if (1..=limit).contains(&n) => Command::Move(n - 1),
        _ => Command::Invalid(format!("expected a number from 1 to {}, r or q", limit)),
    }
}

async fn show_prompt(session: &MatchSession<ChannelBroadcaster>) {
    match session.turn_state().await {
        TurnState::AwaitingHuman => {
            println!("{}", prompt(session.settings().geometry, session.current_mark().await));
        }
        TurnState::OpponentThinking => println!("Computer is thinking..."),
        TurnState::GameOver => {}
    }
}

/// Events are sent under the match lock, so once `reset` returns every
/// event from the old board is already queued.
fn drain_stale_events(events: &mut UnboundedReceiver<MatchEvent>) -> usize {
    let mut drained = 0;
    while events.try_recv().is_ok() {
        drained += 1;
    }
    drained
}

pub async fn run_match(
    session: MatchSession<ChannelBroadcaster>,
    mut events: UnboundedReceiver<MatchEvent>,
) -> std::io::Result<()> {
    let geometry = session.settings().geometry;
    let mode = session.settings().mode;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", render_board(&session.board().await));
    show_prompt(&session).await;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_command(&line, geometry) {
                    Command::Quit => break,
                    Command::Reset => {
                        session.reset().await;
                        drain_stale_events(&mut events);
                        println!("{}", render_board(&session.board().await));
                        show_prompt(&session).await;
                    }
                    Command::Move(mv) => {
                        if let Err(e) = session.submit_move(mv).await {
                            println!("{}", e);
                        }
                    }
                    Command::Invalid(message) => println!("{}", message),
                }
            }
            Some(event) = events.recv() => {
                match event {
                    MatchEvent::MoveApplied { board, mover } => {
                        println!("{} played:\n{}", mover, render_board(&board));
                        show_prompt(&session).await;
                    }
                    MatchEvent::GameEnded(outcome) => {
                        println!("{}", outcome_message(&outcome, mode));
                    }
                    MatchEvent::OpponentFailed(e) => {
                        log!("Opponent error: {}", e);
                        println!("The computer could not move ({}). Press r to start over.", e);
                    }
                }
            }
        }
    }

    Ok(())
}
