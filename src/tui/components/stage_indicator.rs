//! # Stage Indicator Component
//!
//! One line per load stage: a spinner while the stage is in flight, the
//! error text while it has failed, nothing otherwise.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::pipeline::LoadStatus;
use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What the indicator line shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indicator {
    Hidden,
    Loading,
    Error(String),
}

impl Indicator {
    pub fn for_status<T>(status: &LoadStatus<T>) -> Self {
        match status {
            LoadStatus::InFlight => Indicator::Loading,
            LoadStatus::Failed(message) => Indicator::Error(message.clone()),
            LoadStatus::NotStarted | LoadStatus::Succeeded(_) => Indicator::Hidden,
        }
    }
}

pub struct StageIndicator<'a> {
    indicator: Indicator,
    label: &'a str,
    spinner_frame: usize,
}

impl<'a> StageIndicator<'a> {
    pub fn new(indicator: Indicator, label: &'a str, spinner_frame: usize) -> Self {
        Self {
            indicator,
            label,
            spinner_frame,
        }
    }
}

impl Component for StageIndicator<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = match &self.indicator {
            Indicator::Hidden => return,
            Indicator::Loading => {
                let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
                Line::from(vec![
                    Span::styled(spinner, Style::default().fg(Color::Blue)),
                    Span::raw(format!(" Loading {}...", self.label)),
                ])
            }
            Indicator::Error(message) => {
                Line::from(Span::styled(message.as_str(), Style::default().fg(Color::Red)))
            }
        };
        frame.render_widget(line.centered(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(indicator: Indicator) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|f| StageIndicator::new(indicator, "products", 3).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_indicator_follows_status() {
        assert_eq!(Indicator::for_status::<()>(&LoadStatus::NotStarted), Indicator::Hidden);
        assert_eq!(Indicator::for_status::<()>(&LoadStatus::InFlight), Indicator::Loading);
        assert_eq!(Indicator::for_status(&LoadStatus::Succeeded(1)), Indicator::Hidden);
        assert_eq!(
            Indicator::for_status::<()>(&LoadStatus::Failed("boom".into())),
            Indicator::Error("boom".into())
        );
    }

    #[test]
    fn test_loading_shows_spinner_and_label() {
        let text = rendered(Indicator::Loading);
        assert!(text.contains("⠸"));
        assert!(text.contains("Loading products..."));
    }

    #[test]
    fn test_error_shows_message() {
        let text = rendered(Indicator::Error("HTTP error! Status: 500".into()));
        assert!(text.contains("HTTP error! Status: 500"));
    }

    #[test]
    fn test_hidden_renders_blank() {
        assert!(rendered(Indicator::Hidden).trim().is_empty());
    }
}
