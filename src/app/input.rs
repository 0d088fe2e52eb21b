use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('n') if self.paused => {
                if let Err(e) = self.tick() {
                    tracing::warn!(error = %e, "Manual step failed");
                }
            }
            KeyCode::Char('r') => {
                if let Err(e) = self.restart_episode() {
                    tracing::warn!(error = %e, "Episode restart failed");
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.time_scale = (self.time_scale * 2.0).min(16.0);
            }
            KeyCode::Char('-') => {
                self.time_scale = (self.time_scale / 2.0).max(0.125);
            }
            _ => {}
        }
    }
}
