//! # Product List Component
//!
//! Vertically scrolling list of product summary cards (title, description,
//! price, rating, brand). Rendered into a `tui_scrollview::ScrollView` so
//! cards of different heights scroll smoothly.
//!
//! Cards are identified by product id. When the set of ids on screen
//! changes (a new category loaded), the scroll position resets to the top.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Product;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Lines in a card besides the wrapped description: price, rating, brand.
const DETAIL_LINES: u16 = 3;
/// Top and bottom border.
const BORDER_LINES: u16 = 2;

/// Persistent product list state.
#[derive(Default)]
pub struct ProductListState {
    pub scroll_state: ScrollViewState,
    shown_ids: Vec<u64>,
}

impl ProductListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets scrolling when the products on screen are a different set.
    fn sync(&mut self, products: &[Product]) {
        let same = self.shown_ids.len() == products.len()
            && self.shown_ids.iter().zip(products).all(|(id, p)| *id == p.id);
        if !same {
            self.shown_ids = products.iter().map(|p| p.id).collect();
            self.scroll_state.scroll_to_top();
        }
    }
}

impl EventHandler for ProductListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

/// One rendered card and its height.
struct ProductCard<'a> {
    paragraph: Paragraph<'a>,
    height: u16,
}

impl<'a> ProductCard<'a> {
    fn new(product: &'a Product, width: u16) -> Self {
        let inner_width = width.saturating_sub(2).max(1) as usize;

        let mut lines: Vec<Line> = textwrap::wrap(&product.description, inner_width)
            .into_iter()
            .map(|line| Line::styled(line.into_owned(), Style::default().fg(Color::Gray)))
            .collect();
        let description_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let height = description_lines
            .saturating_add(DETAIL_LINES)
            .saturating_add(BORDER_LINES);

        lines.push(Line::from(Span::styled(
            format!("Price: ${}", product.price),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("Rating: {}", product.rating),
            Style::default().fg(Color::Blue),
        )));
        lines.push(Line::from(Span::styled(
            format!("Brand: {}", product.brand),
            Style::default().fg(Color::Red),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::bordered()
                .title(Span::styled(
                    product.title.as_str(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM)),
        );

        ProductCard { paragraph, height }
    }
}

/// Transient render wrapper for the product list.
pub struct ProductList<'a> {
    state: &'a mut ProductListState,
    products: &'a [Product],
}

impl<'a> ProductList<'a> {
    pub fn new(state: &'a mut ProductListState, products: &'a [Product]) -> Self {
        Self { state, products }
    }
}

impl Component for ProductList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync(self.products);
        if self.products.is_empty() {
            return;
        }

        // Leave one column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let cards: Vec<ProductCard> = self
            .products
            .iter()
            .map(|p| ProductCard::new(p, content_width))
            .collect();
        let total_height = cards
            .iter()
            .fold(0u16, |total, card| total.saturating_add(card.height));

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for card in cards {
            // Cards past the u16 canvas limit are not drawn
            let height = card.height.min(total_height - y_offset);
            if height == 0 {
                break;
            }
            let rect = Rect::new(0, y_offset, content_width, height);
            y_offset = y_offset.saturating_add(height);
            scroll_view.render_widget(card.paragraph, rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
