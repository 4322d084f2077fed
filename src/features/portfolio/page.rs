//! Portfolio Section
//!
//! Project gallery laid out on a three-column grid; large tiles span two
//! columns. The compact layout falls back to a single column.

use gpui::{
    Context, InteractiveElement, IntoElement, ObjectFit, ParentElement, Render, SharedString,
    Styled, StyledImage, Window, div, img, prelude::*, px, rgb, white,
};

use crate::app::entities::AppEntities;
use crate::components::composite::section_header::SectionHeader;
use crate::components::layout::navbar::is_compact;
use crate::components::layout::section;
use crate::domain::project::{PROJECTS, Project};
use crate::theme::colors::Palette;

/// Grid columns for the current layout
fn grid_columns(compact: bool) -> u16 {
    if compact { 1 } else { 3 }
}

/// Portfolio section view
pub struct PortfolioSection {
    entities: AppEntities,
}

impl PortfolioSection {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.theme, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_tile(
        &self,
        ix: usize,
        project: &Project,
        compact: bool,
        palette: Palette,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let span = project.size.columns().min(grid_columns(compact));
        let accent = rgb(project.accent);
        let group = SharedString::from(format!("project-{ix}"));

        div()
            .id(group.clone())
            .group(group.clone())
            .col_span(span)
            .relative()
            .h(px(project.size.height()))
            .rounded_2xl()
            .overflow_hidden()
            .bg(palette.surface)
            .border_1()
            .border_color(palette.border)
            .hover(|s| s.border_color(accent))
            .child(
                img(project.image_url)
                    .size_full()
                    .object_fit(ObjectFit::Cover),
            )
            .child(
                div()
                    .absolute()
                    .left_0()
                    .right_0()
                    .bottom_0()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .p_6()
                    .bg(palette.scrim)
                    .child(
                        div()
                            .text_xs()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(accent)
                            .child(self.entities.text(cx, project.category_key)),
                    )
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(white())
                            .child(self.entities.text(cx, project.title_key)),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(white().opacity(0.7))
                            .group_hover(group, |s| s.text_color(accent))
                            .child(format!("{} →", self.entities.text(cx, "portfolio.view"))),
                    ),
            )
    }
}

impl Render for PortfolioSection {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = self.entities.palette(cx);
        let compact = is_compact(window);

        let header = SectionHeader::new(
            self.entities.text(cx, "portfolio.label"),
            self.entities.text(cx, "portfolio.title.1"),
            self.entities.text(cx, "portfolio.title.2"),
        )
        .description(self.entities.text(cx, "portfolio.description"));

        let tiles = PROJECTS
            .iter()
            .enumerate()
            .map(|(ix, project)| self.render_tile(ix, project, compact, palette, cx));

        section::band(palette.background, compact).child(
            section::column().child(header).child(
                div()
                    .grid()
                    .grid_cols(grid_columns(compact))
                    .gap_6()
                    .children(tiles),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::TileSize;

    #[test]
    fn test_spans_fit_the_grid() {
        assert_eq!(TileSize::Large.columns().min(grid_columns(false)), 2);
        assert_eq!(TileSize::Large.columns().min(grid_columns(true)), 1);
    }
}
