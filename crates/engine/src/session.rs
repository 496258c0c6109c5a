//! Game loop: input events in, incremental redraws out.
//!
//! The whole scene is drawn once by [`Session::start`]. After that the map
//! never changes on screen, so each event only restores the vacated cell (if
//! the avatar moved) and redraws the avatar.

use std::time::Duration;

use anyhow::Result;
use log::{debug, info, warn};
use tokio::sync::mpsc;

use crate::core::{LoopState, Outcome, World};
use crate::term::{flush_scene, flush_single, restore_cell, Drawable, Surface};
use crate::types::{InputEvent, IDLE_TICK_MS};

pub struct Session<S> {
    world: World,
    surface: S,
}

impl<S: Surface> Session<S> {
    pub fn new(world: World, surface: S) -> Self {
        Self { world, surface }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Full render: clear, grid, avatar, flush.
    pub fn start(&mut self) -> Result<()> {
        let grid = self.world.grid();
        info!(
            "session started: {}x{} grid, avatar at {:?}",
            grid.width(),
            grid.height(),
            self.world.player().position()
        );
        let layers: [&dyn Drawable; 2] = [grid, self.world.player()];
        flush_scene(&layers, &mut self.surface)
    }

    /// Process one event and redraw what it changed.
    pub fn handle(&mut self, event: InputEvent) -> Result<LoopState> {
        match self.world.apply(event) {
            Outcome::Quit => {
                info!("quit requested at {:?}", self.world.player().position());
                return Ok(LoopState::Terminated);
            }
            Outcome::Moved { from, to } => {
                debug!("moved {:?} -> {:?}", from, to);
                restore_cell(self.world.grid(), from.x, from.y, &mut self.surface);
            }
            Outcome::Blocked { at, direction } => {
                debug!("blocked {} at {:?}", direction.as_str(), at);
            }
            Outcome::Ignored => {}
        }

        self.redraw_player()?;
        Ok(self.world.state())
    }

    /// Redraw the avatar only.
    pub fn redraw_player(&mut self) -> Result<()> {
        flush_single(self.world.player(), &mut self.surface)
    }

    /// Drive the loop until the quit key arrives or the event channel closes.
    ///
    /// Waits for the next event or the idle tick, whichever comes first; an
    /// idle tick just redraws the avatar.
    pub async fn run(&mut self, events: &mut mpsc::UnboundedReceiver<InputEvent>) -> Result<()> {
        let idle = Duration::from_millis(IDLE_TICK_MS);

        while self.world.is_running() {
            tokio::select! {
                biased;
                event = events.recv() => match event {
                    Some(event) => {
                        self.handle(event)?;
                    }
                    None => {
                        warn!("event channel closed, leaving the game loop");
                        break;
                    }
                },
                _ = tokio::time::sleep(idle) => self.redraw_player()?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, Player};
    use crate::term::FrameBuffer;
    use crate::types::{Command, Direction, Point};

    fn session(width: u16, height: u16, start: Point) -> Session<FrameBuffer> {
        let mut grid = Grid::new(width, height);
        grid.fill_uniform();
        let mut session = Session::new(
            World::new(grid, Player::new(start)),
            FrameBuffer::new(width, height),
        );
        session.start().unwrap();
        session
    }

    fn mv(direction: Direction) -> InputEvent {
        InputEvent::Command(Command::Move(direction))
    }

    #[test]
    fn start_draws_grid_then_avatar() {
        let session = session(10, 10, Point::new(5, 5));
        let fb = session.surface();
        assert_eq!(fb.get(5, 5).unwrap().ch, '@');
        assert_eq!(fb.get(0, 0).unwrap().ch, '#');
        assert_eq!(fb.get(4, 5).unwrap().ch, '.');
        assert_eq!(fb.flushes(), 1);
    }

    #[test]
    fn move_restores_vacated_cell() {
        let mut session = session(10, 10, Point::new(5, 5));
        let state = session.handle(mv(Direction::Right)).unwrap();

        assert_eq!(state, LoopState::Running);
        let fb = session.surface();
        assert_eq!(fb.get(5, 5).unwrap().ch, '.');
        assert_eq!(fb.get(6, 5).unwrap().ch, '@');
    }

    #[test]
    fn blocked_move_still_redraws_avatar() {
        let mut session = session(3, 3, Point::new(1, 1));
        session.handle(mv(Direction::Up)).unwrap();

        let fb = session.surface();
        assert_eq!(fb.get(1, 1).unwrap().ch, '@');
        assert_eq!(fb.get(1, 0).unwrap().ch, '#');
        assert_eq!(fb.flushes(), 2);
    }

    #[test]
    fn quit_skips_the_redraw() {
        let mut session = session(10, 10, Point::new(5, 5));
        let state = session.handle(InputEvent::Command(Command::Quit)).unwrap();
        assert_eq!(state, LoopState::Terminated);
        assert_eq!(session.surface().flushes(), 1);
    }

    #[tokio::test]
    async fn run_stops_on_quit_and_drops_later_events() {
        let mut session = session(10, 10, Point::new(5, 5));
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(mv(Direction::Down)).unwrap();
        tx.send(InputEvent::Command(Command::Quit)).unwrap();
        tx.send(mv(Direction::Down)).unwrap();

        session.run(&mut rx).await.unwrap();

        assert_eq!(session.world().player().position(), Point::new(5, 6));
        assert_eq!(session.world().state(), LoopState::Terminated);
        // The event after quit was never consumed.
        assert_eq!(rx.try_recv().ok(), Some(mv(Direction::Down)));
    }

    #[tokio::test]
    async fn run_ends_when_channel_closes() {
        let mut session = session(10, 10, Point::new(5, 5));
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(mv(Direction::Left)).unwrap();
        drop(tx);

        session.run(&mut rx).await.unwrap();

        assert_eq!(session.world().player().position(), Point::new(4, 5));
        assert_eq!(session.world().state(), LoopState::Running);
    }

    #[test]
    fn idle_ticks_redraw_the_avatar() {
        let mut session = session(10, 10, Point::new(5, 5));
        let (tx, mut rx) = mpsc::unbounded_channel::<InputEvent>();

        tokio_test::block_on(async {
            let quit_later = async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                tx.send(InputEvent::Command(Command::Quit)).unwrap();
            };
            let (result, ()) = tokio::join!(session.run(&mut rx), quit_later);
            result.unwrap();
        });

        // Initial render plus at least one idle redraw before quit arrived.
        assert!(session.surface().flushes() >= 2);
    }
}
