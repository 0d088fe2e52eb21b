use crate::app::state::App;
use ecosys_tui::renderer::GridWidget;
use ecosys_tui::views::status::StatusWidget;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

impl App {
    pub fn draw(&self, f: &mut Frame) {
        let Some(snapshot) = &self.latest_snapshot else {
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(32)])
            .split(rows[0]);

        f.render_widget(GridWidget::new(snapshot), columns[0]);
        f.render_widget(
            StatusWidget {
                policy: self.policy.name(),
                episode: self.episode,
                step: snapshot.step,
                resources_remaining: snapshot.resources.len(),
                last_reward: self.last_reward,
                episode_reward: self.episode_reward,
                running_reward: self.metrics.running_mean(),
                observation: &self.observation,
                paused: self.paused,
            },
            columns[1],
        );

        let help = if self.is_finished() {
            " all episodes played | [r] new layout [q] quit"
        } else {
            " [space] pause [n] step [r] restart [+/-] speed [q] quit"
        };
        f.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            rows[1],
        );
    }
}
