//! # TUI Components
//!
//! All UI components for the catalog screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: heading and status message
//! - `StageIndicator`: spinner or error text for one load stage
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `CategoryStrip`: horizontal paged carousel, emits scroll samples and taps
//! - `ProductList`: scrollable list of product cards
//!
//! Stateful components split into a persistent `*State` that lives in
//! `TuiState` and a transient wrapper built each frame from borrowed state
//! plus props.
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into the
//! core `App`:
//!
//! ```rust,ignore
//! CategoryStrip::new(&mut tui.strip, app.category_labels(), app.selected_index())
//!     .render(frame, strip_area);
//! ```

pub mod category_strip;
pub mod product_list;
pub mod stage_indicator;
pub mod title_bar;

pub use category_strip::{CategoryStrip, CategoryStripState, StripEvent};
pub use product_list::{ProductList, ProductListState};
pub use stage_indicator::{Indicator, StageIndicator};
pub use title_bar::TitleBar;
