// SPDX-License-Identifier: MPL-2.0
//! Inspector rendering: the detail sheet, the article pager, the image
//! preview, and the expanded pan/zoom overlay.

use super::component::{Message, State};
use super::detail_fetch::DetailState;
use super::image_resource::{ArticleImage, ImageState};
use crate::api::Article;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::TransformedImage;
use iced::widget::{button, mouse_area, Column, Container, Row, Scrollable, Stack, Text};
use iced::{alignment, Color, Element, Length};

pub fn view(state: &State) -> Element<'_, Message> {
    let sheet = detail_sheet(state);

    match (state.is_expanded(), state.image()) {
        (true, Some(image)) => {
            let overlay = expanded_overlay(state, image);
            Stack::new().push(sheet).push(overlay).into()
        }
        _ => sheet,
    }
}

fn detail_sheet(state: &State) -> Element<'_, Message> {
    let title = state
        .record()
        .map_or("Record detail", |record| record.names.as_str());

    let close_button = button(Text::new("Close"))
        .style(styles::button::secondary)
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::Close);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(title).size(typography::TITLE_MD).width(Length::Fill))
        .push(close_button);

    let mut content = Column::new().spacing(spacing::MD).push(header);

    if let Some(record) = state.record() {
        content = content.push(
            Text::new(format!("Record {} \u{b7} {}", record.id, record.created_at))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    content = content.push(detail_body(state));

    let panel = Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::DETAIL_WIDTH))
        .style(styles::container::panel);

    Container::new(Scrollable::new(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG)
        .into()
}

fn detail_body(state: &State) -> Element<'_, Message> {
    match state.detail_state() {
        DetailState::Idle | DetailState::Loading => centered_note("Loading details\u{2026}"),
        DetailState::NoDetail => {
            centered_note("No adverse news details were found for this search.")
        }
        DetailState::Failed(error) => Container::new(
            Text::new(format!("Could not load details: {error}")).size(typography::BODY),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::error_panel)
        .into(),
        DetailState::Loaded(response) => {
            let summary_line = Text::new(format!(
                "{} hits \u{b7} query \u{201c}{}\u{201d} \u{b7} {:.0} ms",
                response.total_hits, response.query, response.search_duration_ms
            ))
            .size(typography::CAPTION)
            .color(palette::GRAY_400);

            let mut body = Column::new()
                .spacing(spacing::MD)
                .push(summary_line)
                .push(pager(state));

            if let Some(article) = state.current_article() {
                body = body.push(article_panel(article));
            }

            body = body.push(image_section(state));
            body.into()
        }
    }
}

fn pager(state: &State) -> Element<'_, Message> {
    let info = state.navigation();

    let previous = button(Text::new("\u{2039} Previous"))
        .style(styles::button::secondary)
        .padding([spacing::XXS, spacing::SM])
        .on_press_maybe(info.has_previous.then_some(Message::PreviousArticle));

    let next = button(Text::new("Next \u{203a}"))
        .style(styles::button::secondary)
        .padding([spacing::XXS, spacing::SM])
        .on_press_maybe(info.has_next.then_some(Message::NextArticle));

    let label = Text::new(format!("Article {} of {}", info.position, info.total))
        .size(typography::BODY)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(label)
        .push(next)
        .into()
}

fn article_panel(article: &Article) -> Element<'_, Message> {
    let headline = article.headline.as_deref().unwrap_or("Untitled article");
    let source = article.newspaper_name.as_deref().unwrap_or("Unknown source");

    let mut source_line = source.to_string();
    if let Some(category) = &article.category {
        source_line.push_str(" \u{b7} ");
        source_line.push_str(category);
    }
    if let Some(published) = &article.created_at {
        source_line.push_str(" \u{b7} ");
        source_line.push_str(published);
    }

    let mut badges = Row::new().spacing(spacing::XS);
    if let Some(level) = &article.severity_level {
        badges = badges.push(badge(level.clone(), severity_color(level)));
    }
    if let Some(score) = article.overall_risk_score {
        badges = badges.push(badge(format!("Risk {score:.1}"), palette::PRIMARY_500));
    }
    if let Some(score) = article.relevance_score {
        badges = badges.push(badge(format!("Relevance {score:.1}"), palette::GRAY_400));
    }

    let mut panel = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(headline).size(typography::TITLE_SM))
        .push(
            Text::new(source_line)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(badges);

    if let Some(summary) = article.brief_summary() {
        panel = panel.push(Text::new(summary).size(typography::BODY));
    }

    panel.into()
}

fn image_section(state: &State) -> Element<'_, Message> {
    match state.image_state() {
        ImageState::Idle => Text::new("No scanned image for this article.")
            .size(typography::CAPTION)
            .color(palette::GRAY_400)
            .into(),
        ImageState::Loading => {
            let mut section = Column::new().spacing(spacing::XS);
            if let Some(image) = state.image() {
                section = section.push(preview(image));
            }
            section
                .push(
                    Text::new("Loading image\u{2026}")
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                )
                .into()
        }
        ImageState::Ready => {
            let Some(image) = state.image() else {
                return Column::new().into();
            };

            let clickable = mouse_area(preview(image)).on_press(Message::ExpandImage);

            Column::new()
                .spacing(spacing::XS)
                .push(clickable)
                .push(
                    Text::new("Click the image to expand, scroll or drag to explore.")
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                )
                .into()
        }
        ImageState::Failed(error) => Container::new(
            Text::new(format!("Image unavailable: {error}")).size(typography::BODY),
        )
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::error_panel)
        .into(),
    }
}

fn preview(image: &ArticleImage) -> Element<'_, Message> {
    Container::new(
        iced::widget::image(image.handle.clone()).height(Length::Fixed(sizing::PREVIEW_HEIGHT)),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn expanded_overlay<'a>(state: &'a State, image: &'a ArticleImage) -> Element<'a, Message> {
    let transform = state.viewport();

    let zoom_out = overlay_button("\u{2212}")
        .on_press_maybe((!transform.at_min_zoom()).then_some(Message::ZoomOut));
    let zoom_in = overlay_button("+")
        .on_press_maybe((!transform.at_max_zoom()).then_some(Message::ZoomIn));
    let reset = overlay_button("Reset").on_press(Message::ResetView);
    let collapse = overlay_button("\u{2715}").on_press(Message::CollapseImage);

    let zoom_label = Container::new(
        Text::new(format!("{:.0}%", transform.zoom() * 100.0))
            .size(typography::BODY)
            .color(palette::WHITE),
    )
    .padding([spacing::XXS, spacing::SM]);

    let toolbar = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(zoom_out)
        .push(zoom_label)
        .push(zoom_in)
        .push(reset)
        .push(collapse);

    let toolbar_layer = Container::new(toolbar)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::MD);

    let surface = Stack::new()
        .push(TransformedImage::new(image, transform))
        .push(toolbar_layer);

    Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}

fn overlay_button(label: &str) -> iced::widget::Button<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .padding([spacing::XXS, spacing::SM])
}

fn centered_note(note: &str) -> Element<'_, Message> {
    Container::new(
        Text::new(note)
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn badge<'a>(label: String, color: Color) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(color))
        .into()
}

fn severity_color(level: &str) -> Color {
    if level.eq_ignore_ascii_case("critical") || level.eq_ignore_ascii_case("high") {
        palette::ERROR_500
    } else if level.eq_ignore_ascii_case("medium") {
        palette::WARNING_500
    } else if level.eq_ignore_ascii_case("low") {
        palette::SUCCESS_500
    } else {
        palette::GRAY_400
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiClient, SearchRecord, SearchResultResponse};

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:0")
    }

    fn open_state(articles: serde_json::Value) -> State {
        let mut state = State::default();
        let _task = state.open(
            SearchRecord::pending("rec-1".into(), "John Doe".into()),
            &client(),
        );

        let response: SearchResultResponse = serde_json::from_value(serde_json::json!({
            "search_id": "srch-1",
            "query": "Doe John",
            "total_hits": 1,
            "results": articles,
        }))
        .expect("response fixture should parse");

        // The first `open` on a fresh state always issues generation 1.
        let (_effect, _task) = state.handle_message(
            Message::DetailFetched {
                generation: 1,
                result: Ok(response),
            },
            &client(),
        );
        state
    }

    #[test]
    fn loading_sheet_renders() {
        let mut state = State::default();
        let _task = state.open(
            SearchRecord::pending("rec-1".into(), "John Doe".into()),
            &client(),
        );
        let _element = view(&state);
    }

    #[test]
    fn loaded_sheet_renders() {
        let state = open_state(serde_json::json!([
            { "id": "art-1", "headline": "Fraud probe", "severity_level": "high" }
        ]));
        let _element = view(&state);
    }

    #[test]
    fn empty_sheet_renders() {
        let state = open_state(serde_json::json!([]));
        let _element = view(&state);
    }

    #[test]
    fn severity_maps_to_semantic_colors() {
        assert_eq!(severity_color("HIGH"), palette::ERROR_500);
        assert_eq!(severity_color("medium"), palette::WARNING_500);
        assert_eq!(severity_color("low"), palette::SUCCESS_500);
        assert_eq!(severity_color("unknown"), palette::GRAY_400);
    }
}
