//! # Screen Layout
//!
//! Splits the terminal into the catalog screen's regions and renders each
//! component into its slot, passing props from `App` and `TuiState`.
//!
//! ```text
//! ┌ title bar ──────────────────┐
//! │ categories stage indicator  │
//! │ category strip (3 rows)     │
//! │ Selected Category: ...      │
//! │ products stage indicator    │
//! │ product cards (rest)        │
//! └ help line ──────────────────┘
//! ```

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CategoryStrip, Indicator, ProductList, StageIndicator, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const HELP_TEXT: &str = " ←/→ scroll  Enter/click select  ↑/↓ products  r reload  q quit ";

/// Screen regions, top to bottom.
struct ScreenLayout {
    title: Rect,
    categories_status: Rect,
    strip: Rect,
    selected: Rect,
    products_status: Rect,
    products: Rect,
    help: Rect,
}

fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [title, categories_status, strip, selected, products_status, products, help] =
        Layout::vertical([
            Length(1),
            Length(1),
            Length(3),
            Length(1),
            Length(1),
            Min(0),
            Length(1),
        ])
        .areas(area);
    ScreenLayout {
        title,
        categories_status,
        strip,
        selected,
        products_status,
        products,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let layout = screen_layout(frame.area());

    TitleBar::new(app.status_message.clone()).render(frame, layout.title);

    StageIndicator::new(
        Indicator::for_status(app.categories.status()),
        "categories",
        spinner_frame,
    )
    .render(frame, layout.categories_status);

    CategoryStrip::new(&mut tui.strip, app.category_labels(), app.selected_index())
        .render(frame, layout.strip);

    if let Some(selected) = &app.selection {
        let line = Line::from(vec![
            Span::raw("Selected Category: "),
            Span::styled(
                selected.as_str(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(line.centered(), layout.selected);
    }

    StageIndicator::new(
        Indicator::for_status(app.products.status()),
        "products",
        spinner_frame,
    )
    .render(frame, layout.products_status);

    ProductList::new(&mut tui.products, app.visible_products()).render(frame, layout.products);

    frame.render_widget(
        Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
        layout.help,
    );
}
