use ecosys_core::observation::Observation;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Side panel with episode progress and the current observation.
pub struct StatusWidget<'a> {
    pub policy: &'a str,
    pub episode: u64,
    pub step: u64,
    pub resources_remaining: usize,
    pub last_reward: f64,
    pub episode_reward: f64,
    pub running_reward: f64,
    pub observation: &'a Observation,
    pub paused: bool,
}

impl StatusWidget<'_> {
    fn flag_row(label: &str, row: &[u8; 4]) -> Line<'static> {
        let mut spans = vec![Span::raw(format!("{label:<5}"))];
        for &v in row {
            let style = if v == 1 {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {v}"), style));
        }
        Line::from(spans)
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default().title("Status").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(4)])
            .split(inner);

        let state = if self.paused { "paused" } else { "running" };
        let reward_color = if self.last_reward >= 0.0 {
            Color::Green
        } else {
            Color::Red
        };
        Paragraph::new(vec![
            Line::from(format!("Policy:   {} ({state})", self.policy)),
            Line::from(format!("Episode:  {}", self.episode)),
            Line::from(format!("Step:     {}", self.step)),
            Line::from(format!("Food:     {}", self.resources_remaining)),
            Line::from(vec![
                Span::raw("Reward:   "),
                Span::styled(
                    format!("{:+.3}", self.last_reward),
                    Style::default().fg(reward_color),
                ),
            ]),
            Line::from(format!("Return:   {:+.2}", self.episode_reward)),
            Line::from(format!("Running:  {:+.2}", self.running_reward)),
        ])
        .render(sections[0], buf);

        Paragraph::new(vec![
            Line::from("       U R D L"),
            Self::flag_row("food", &self.observation.food),
            Self::flag_row("wall", &self.observation.wall),
        ])
        .render(sections[1], buf);
    }
}
