pub mod input;
pub mod render;
pub mod state;

pub use state::{App, PolicyKind};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ecosys_tui::Tui;
use std::time::{Duration, Instant};

impl App {
    /// Interactive loop: draws every frame and steps the world at `render_fps`.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();

        while self.running {
            tui.terminal.draw(|f| self.draw(f))?;

            let tick_rate = self.tick_rate();
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if !self.paused {
                    self.tick()?;
                }
                last_tick = Instant::now();
            }
        }
        Ok(())
    }
}
