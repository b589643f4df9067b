//! One renderer per view block.

mod comparison;
mod correlation;
mod data;
mod interpretability;
mod models;
mod overview;

pub use comparison::render_comparison;
pub use correlation::render_correlation;
pub use data::render_data;
pub use interpretability::render_interpretability;
pub use models::render_category;
pub use overview::render_overview;

use crate::config::ChartConfig;
use crate::tui::widgets::render_empty_state;
use crate::view::ViewBlock;
use ratatui::prelude::*;

/// Draw `block` into `area`.
pub fn render_block(frame: &mut Frame, area: Rect, block: &ViewBlock, charts: ChartConfig) {
    match block {
        ViewBlock::Overview(v) => render_overview(frame, area, v),
        ViewBlock::Correlation(v) => render_correlation(frame, area, v),
        ViewBlock::ModelsWithoutLag(v) | ViewBlock::ModelsWithLag(v) => {
            render_category(frame, area, v, charts);
        }
        ViewBlock::Comparison(v) => render_comparison(frame, area, v, charts),
        ViewBlock::Interpretability(v) => render_interpretability(frame, area, v),
        ViewBlock::Data(v) => render_data(frame, area, v),
        ViewBlock::NotFound { id } => render_empty_state(
            frame,
            area,
            &format!("Content not found: '{id}'"),
            Some("Press 1-7 or Tab to pick a tab"),
        ),
    }
}
