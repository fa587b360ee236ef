//! Async session runtime.
//!
//! Runs a [`GameLoop`] inside a tokio task. Commands arrive over an `mpsc`
//! channel, gravity is a `sleep` to the next deadline, and every change is
//! published on a `watch` channel. Dropping the command side ends the task.

use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::core::GameSnapshot;
use crate::driver::GameLoop;
use crate::types::GameAction;

/// Handle to a running session task.
pub struct SessionHandle {
    commands: mpsc::Sender<GameAction>,
    snapshots: watch::Receiver<GameSnapshot>,
    task: JoinHandle<GameLoop>,
}

impl SessionHandle {
    /// Queue a command, waiting for channel capacity.
    pub async fn send(&self, action: GameAction) -> Result<()> {
        self.commands
            .send(action)
            .await
            .context("game session has stopped")
    }

    /// Queue a command without waiting. Returns false if the queue is full or
    /// the session has stopped.
    pub fn try_send(&self, action: GameAction) -> bool {
        self.commands.try_send(action).is_ok()
    }

    /// A receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshots.clone()
    }

    /// Most recently published snapshot.
    pub fn latest(&self) -> GameSnapshot {
        *self.snapshots.borrow()
    }

    /// Close the command channel and wait for the task to hand back its loop.
    pub async fn shutdown(self) -> Result<GameLoop> {
        drop(self.commands);
        self.task.await.context("game session task failed")
    }
}

/// Spawn `game` onto the current tokio runtime.
///
/// `capacity` bounds the command queue (at least 1).
pub fn spawn_session(game: GameLoop, capacity: usize) -> SessionHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel(capacity.max(1));
    let (snap_tx, snap_rx) = watch::channel(game.snapshot());
    let task = tokio::spawn(run_session(game, cmd_rx, snap_tx));

    SessionHandle {
        commands: cmd_tx,
        snapshots: snap_rx,
        task,
    }
}

async fn run_session(
    mut game: GameLoop,
    mut commands: mpsc::Receiver<GameAction>,
    snapshots: watch::Sender<GameSnapshot>,
) -> GameLoop {
    let mut last = Instant::now();

    loop {
        let pending = game.remaining_ms();
        let deadline = last + Duration::from_millis(pending.unwrap_or(0) as u64);

        tokio::select! {
            cmd = commands.recv() => {
                catch_up(&mut game, &mut last);
                match cmd {
                    Some(action) => {
                        game.handle(action);
                    }
                    None => break,
                }
            }
            _ = sleep_until(deadline), if pending.is_some() => {
                catch_up(&mut game, &mut last);
            }
        }

        publish(&game, &snapshots);
    }

    debug!("game session stopped after {} ticks", game.ticks());
    game
}

/// Feed the whole milliseconds elapsed since `last` into the loop. The
/// sub-millisecond remainder stays on the clock for the next call.
fn catch_up(game: &mut GameLoop, last: &mut Instant) {
    let elapsed = Instant::now().saturating_duration_since(*last);
    let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
    *last += Duration::from_millis(ms as u64);
    game.advance(ms);
}

fn publish(game: &GameLoop, snapshots: &watch::Sender<GameSnapshot>) {
    let next = game.snapshot();
    snapshots.send_if_modified(|current| {
        if *current == next {
            return false;
        }
        *current = next;
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameStatus;

    #[tokio::test(start_paused = true)]
    async fn test_gravity_follows_virtual_clock() {
        let session = spawn_session(GameLoop::new(5), 8);
        session.send(GameAction::Start).await.unwrap();

        tokio::time::sleep(Duration::from_millis(1250 * 3 + 10)).await;
        let snap = session.latest();
        assert_eq!(snap.status, GameStatus::Playing);
        assert_eq!(snap.active.map(|a| a.y), Some(3));

        let game = session.shutdown().await.unwrap();
        assert_eq!(game.ticks(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paused_session_does_not_fall() {
        let session = spawn_session(GameLoop::new(5), 8);
        session.send(GameAction::Start).await.unwrap();
        session.send(GameAction::TogglePause).await.unwrap();

        tokio::time::sleep(Duration::from_secs(30)).await;
        let snap = session.latest();
        assert_eq!(snap.status, GameStatus::Paused);
        assert_eq!(snap.active.map(|a| a.y), Some(0));

        session.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_sees_updates() {
        let session = spawn_session(GameLoop::new(5), 8);
        let mut rx = session.subscribe();
        assert_eq!(rx.borrow_and_update().status, GameStatus::Menu);

        session.send(GameAction::Start).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().status, GameStatus::Playing);

        session.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_returns_final_loop() {
        let session = spawn_session(GameLoop::new(9), 1);
        session.send(GameAction::Start).await.unwrap();
        session.send(GameAction::MoveRight).await.unwrap();

        let game = session.shutdown().await.unwrap();
        assert!(game.state().is_playing());
        assert_eq!(game.state().active().map(|p| p.x), Some(crate::types::SPAWN_X + 1));
    }
}
