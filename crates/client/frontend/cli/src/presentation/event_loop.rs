//! Fixed-rate frame loop: input, update, draw.
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::app::{ArcadeApp, Flow};
use crate::presentation::{terminal::Tui, ui};

pub struct EventLoop {
    app: ArcadeApp,
    started: Instant,
}

impl EventLoop {
    pub fn new(app: ArcadeApp) -> Self {
        Self {
            app,
            started: Instant::now(),
        }
    }

    /// Runs until the player quits. Returns the app for inspection.
    ///
    /// Ticks missed while the process was stalled are skipped rather than
    /// replayed; games catch up from the elapsed time on the next frame.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<ArcadeApp> {
        let mut ticker = time::interval(self.app.config().frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            let now = self.started.elapsed();

            if self.drain_input(now)? == Flow::Quit {
                break;
            }
            self.app.tick(now);

            let screens = self.app.screens(now);
            terminal.draw(|frame| ui::draw(frame, &self.app, screens.as_ref()))?;
        }

        Ok(self.app)
    }

    fn drain_input(&mut self, now: Duration) -> Result<Flow> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.app.on_key(key, now) == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                _ => {}
            }
        }
        Ok(Flow::Continue)
    }
}
