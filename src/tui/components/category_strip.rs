//! # Category Strip Component
//!
//! Horizontal paged carousel of category labels. Every category occupies one
//! full viewport width, so the horizontal offset maps directly onto a
//! category index (see `core::selection`).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CategoryStripState` lives in `TuiState` (offset, layout cache)
//! - `CategoryStrip` is created each frame with borrowed state and props
//!
//! Cells are identified by their index in the category list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Category;
use crate::core::selection::ScrollSample;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Events emitted by the strip.
#[derive(Debug, Clone, PartialEq)]
pub enum StripEvent {
    /// The horizontal offset changed.
    Scrolled(ScrollSample),
    /// A category cell was clicked or Enter was pressed on it.
    Tap(usize),
}

/// Persistent strip state.
#[derive(Debug, Default)]
pub struct CategoryStripState {
    /// Horizontal offset in columns.
    pub offset: u16,
    /// Columns moved per Left/Right.
    pub step: u16,
    /// Number of categories, synced from the app each loop.
    pub count: usize,
    /// Inner width at last render. One category is this wide.
    viewport_width: u16,
    /// Inner area at last render, for hit testing.
    area: Rect,
}

impl CategoryStripState {
    pub fn new(step: u16) -> Self {
        Self {
            step,
            ..Default::default()
        }
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    /// Largest offset: the left edge of the last page.
    pub fn max_offset(&self) -> u16 {
        let max = self.count.saturating_sub(1) * self.viewport_width as usize;
        max.min(u16::MAX as usize) as u16
    }

    /// Records the inner width. Keeps the current page in view when the
    /// terminal is resized.
    pub fn set_viewport(&mut self, width: u16) {
        if width == self.viewport_width {
            return;
        }
        if self.viewport_width > 0 {
            let scaled = self.offset as u32 * width as u32 / self.viewport_width as u32;
            self.offset = scaled.min(u16::MAX as u32) as u16;
        }
        self.viewport_width = width;
        self.offset = self.offset.min(self.max_offset());
    }

    /// The current position as a scroll sample.
    pub fn sample(&self) -> ScrollSample {
        ScrollSample::paged(
            self.offset as f64,
            self.viewport_width as f64,
            self.count,
        )
    }

    /// Index of the page that covers most of the viewport.
    pub fn page(&self) -> Option<usize> {
        if self.count == 0 || self.viewport_width == 0 {
            return None;
        }
        let width = self.viewport_width as usize;
        let page = (self.offset as usize + width / 2) / width;
        Some(page.min(self.count - 1))
    }

    pub fn scroll_to_page(&mut self, index: usize) {
        let target = index * self.viewport_width as usize;
        self.offset = (target.min(u16::MAX as usize) as u16).min(self.max_offset());
    }

    /// Finds the category under a screen position.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.area;
        if self.viewport_width == 0
            || column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }
        let content_x = self.offset as usize + (column - area.x) as usize;
        let index = content_x / self.viewport_width as usize;
        (index < self.count).then_some(index)
    }

    fn scroll_to(&mut self, offset: u16) -> Option<StripEvent> {
        if self.count == 0 || self.viewport_width == 0 {
            return None;
        }
        let offset = offset.min(self.max_offset());
        if offset == self.offset {
            return None;
        }
        self.offset = offset;
        Some(StripEvent::Scrolled(self.sample()))
    }

    fn tap(&mut self, index: usize) -> Option<StripEvent> {
        self.scroll_to_page(index);
        Some(StripEvent::Tap(index))
    }
}

impl EventHandler for CategoryStripState {
    type Event = StripEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<StripEvent> {
        match event {
            TuiEvent::StripLeft => self.scroll_to(self.offset.saturating_sub(self.step)),
            TuiEvent::StripRight => self.scroll_to(self.offset.saturating_add(self.step)),
            TuiEvent::StripHome => self.scroll_to(0),
            TuiEvent::StripEnd => self.scroll_to(self.max_offset()),
            TuiEvent::Submit => self.page().and_then(|index| self.tap(index)),
            TuiEvent::MouseClick(column, row) => {
                self.hit_test(*column, *row).and_then(|index| self.tap(index))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the strip.
pub struct CategoryStrip<'a> {
    state: &'a mut CategoryStripState,
    labels: &'a [Category],
    selected: Option<usize>,
}

impl<'a> CategoryStrip<'a> {
    pub fn new(
        state: &'a mut CategoryStripState,
        labels: &'a [Category],
        selected: Option<usize>,
    ) -> Self {
        Self {
            state,
            labels,
            selected,
        }
    }
}

impl Component for CategoryStrip<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::bordered()
            .title(" Categories ")
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        self.state.area = inner;
        self.state.count = self.labels.len();
        self.state.set_viewport(inner.width);

        if let Some(page) = self.state.page() {
            block = block.title_bottom(
                Line::from(format!(" {}/{} ", page + 1, self.labels.len())).right_aligned(),
            );
        }

        let width = inner.width as usize;
        let spans: Vec<Span> = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let style = if Some(i) == self.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
                };
                Span::styled(center_in(label, width), style)
            })
            .collect();

        let paragraph = Paragraph::new(Line::from(spans))
            .block(block)
            .scroll((0, self.state.offset));
        frame.render_widget(paragraph, area);
    }
}

/// Centers `label` in a cell `width` columns wide, truncating with "..."
/// when it does not fit.
fn center_in(label: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let text = truncate_to_width(label, width.saturating_sub(2));
    let text_width = text.width();
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn labels(names: &[&str]) -> Vec<Category> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// State as it would be after rendering into a 42-wide strip at row 0.
    fn rendered_state(count: usize) -> CategoryStripState {
        let mut state = CategoryStripState::new(10);
        state.count = count;
        state.area = Rect::new(1, 1, 40, 1);
        state.set_viewport(40);
        state
    }

    #[test]
    fn test_right_emits_sample_and_clamps_at_end() {
        let mut state = rendered_state(2);
        let event = state.handle_event(&TuiEvent::StripRight);
        assert_eq!(
            event,
            Some(StripEvent::Scrolled(ScrollSample::paged(10.0, 40.0, 2)))
        );
        state.handle_event(&TuiEvent::StripEnd);
        assert_eq!(state.offset, 40);
        // Already at the end: no new position, no sample
        assert_eq!(state.handle_event(&TuiEvent::StripRight), None);
    }

    #[test]
    fn test_left_at_start_is_silent() {
        let mut state = rendered_state(3);
        assert_eq!(state.handle_event(&TuiEvent::StripLeft), None);
    }

    #[test]
    fn test_empty_strip_ignores_scroll() {
        let mut state = rendered_state(0);
        assert_eq!(state.handle_event(&TuiEvent::StripRight), None);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_click_hits_partially_visible_neighbour() {
        let mut state = rendered_state(3);
        state.offset = 30;
        // Column 1 is content x=30 (page 0); column 15 is x=44 (page 1)
        assert_eq!(state.hit_test(1, 1), Some(0));
        assert_eq!(state.hit_test(15, 1), Some(1));
        assert_eq!(state.hit_test(15, 5), None);
        assert_eq!(state.hit_test(0, 1), None);
    }

    #[test]
    fn test_click_taps_and_snaps_to_page() {
        let mut state = rendered_state(3);
        state.offset = 30;
        let event = state.handle_event(&TuiEvent::MouseClick(15, 1));
        assert_eq!(event, Some(StripEvent::Tap(1)));
        assert_eq!(state.offset, 40);
    }

    #[test]
    fn test_submit_taps_current_page() {
        let mut state = rendered_state(3);
        state.offset = 65; // page 2 covers most of the viewport
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(StripEvent::Tap(2)));
    }

    #[test]
    fn test_resize_keeps_page() {
        let mut state = rendered_state(4);
        state.offset = 80; // page 2
        state.set_viewport(20);
        assert_eq!(state.offset, 40);
        assert_eq!(state.page(), Some(2));
    }

    #[test]
    fn test_center_and_truncate() {
        assert_eq!(center_in("ab", 6), "  ab  ");
        assert_eq!(center_in("abcdefghij", 8), " abc... ");
        assert_eq!(center_in("x", 0), "");
    }

    #[test]
    fn test_render_shows_first_label_and_page_counter() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = CategoryStripState::new(4);
        let names = labels(&["smartphones", "laptops"]);
        terminal
            .draw(|f| {
                CategoryStrip::new(&mut state, &names, None).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let middle: String = (0..30u16).map(|x| buffer[(x, 1)].symbol().to_string()).collect();
        assert!(middle.contains("smartphones"));
        assert!(!middle.contains("laptops"));
        let bottom: String = (0..30u16).map(|x| buffer[(x, 2)].symbol().to_string()).collect();
        assert!(bottom.contains("1/2"));
        assert_eq!(state.viewport_width(), 28);
    }
}
