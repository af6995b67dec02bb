use super::messages::Message;
use super::state::{
    App, CAR_GLYPH_SIZE_PX, CAR_TRACK_HEIGHT_PX, JOURNEY_SCROLL_ID, ROAD_DASH_PERIOD_PX,
};
use crate::geometry::{
    CONTENT_PADDING_PX, FOOTER_HEIGHT_PX, HEADER_HEIGHT_PX, LABEL_SCALE, STOP_PADDING_PX,
    STOP_SPACING_PX, TITLE_SCALE,
};
use crate::theme::Theme;
use iced::alignment::Vertical;
use iced::widget::text::{IntoFragment, LineHeight};
use iced::widget::{
    Column, Space, Text, button, column, container, progress_bar, row, scrollable, text,
};
use iced::{Color, Element, Length};
use journey_core::{JourneySnapshot, PlaybackState};
use std::time::Instant;

const HINT_TEXT: &str = "Scroll to begin your journey";
const RAINBOW_BANNER: &str = "Rainbow mode!";

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let snapshot = self.session.snapshot(Instant::now());
        let theme = Theme::from(self.ui.theme);

        let hud = scrollable(
            container(self.hud_panel(&snapshot, theme))
                .padding(16)
                .width(Length::Fill),
        )
        .height(Length::Fill);

        row![
            container(hud)
                .width(Length::Fixed(self.config.hud_width))
                .height(Length::Fill),
            self.journey_column(&snapshot, theme)
        ]
        .spacing(8)
        .height(Length::Fill)
        .into()
    }
}

impl App {
    fn hud_panel(&self, snapshot: &JourneySnapshot, theme: Theme) -> Column<'_, Message> {
        let font_size = self.config.font_size as f32;

        let car_top = snapshot
            .car_top
            .clamp(0.0, CAR_TRACK_HEIGHT_PX - CAR_GLYPH_SIZE_PX);
        let car_color = theme.car_color(snapshot.rainbow_hue);
        let car = container(column![
            Space::with_height(Length::Fixed(car_top)),
            tinted("🚗", Some(car_color)).size(CAR_GLYPH_SIZE_PX),
        ])
        .height(Length::Fixed(CAR_TRACK_HEIGHT_PX));

        let dash_phase = snapshot.parallax.rem_euclid(ROAD_DASH_PERIOD_PX);
        let road = row![
            Space::with_width(Length::Fixed(dash_phase)),
            text("▬    ▬    ▬    ▬    ▬").size(font_size * 0.7),
        ];

        let readout = column![
            text(snapshot.progress.checkpoint_label.clone()).size(font_size * 1.2),
            progress_bar(0.0..=1.0, snapshot.progress_fill).height(Length::Fixed(10.0)),
            text(format!("{:.0}%", snapshot.progress.percent)),
            text(format!(
                "{} / {} {}",
                snapshot.progress.distance_units, snapshot.total_distance, snapshot.distance_unit
            )),
        ]
        .spacing(6);

        let speedometer = column![
            text(format!(
                "{:.0} {}",
                snapshot.speed.value, snapshot.speed_unit
            ))
            .size(font_size * 1.1),
            progress_bar(0.0..=1.0, snapshot.speed.fill_ratio).height(Length::Fixed(6.0)),
        ]
        .spacing(4);

        let play_label = if snapshot.playback == PlaybackState::Playing {
            "Pause"
        } else {
            "Play"
        };
        let theme_label = if matches!(self.ui.theme, crate::config::ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };
        let controls = row![
            button(play_label).on_press(Message::ToggleAutoplay),
            button("Reset").on_press(Message::Reset),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(8)
        .align_y(Vertical::Center);

        let mut panel = column![car, road, readout, speedometer, controls].spacing(14);

        if let Some(banner) = self.banner_text(snapshot) {
            panel = panel.push(tinted(banner, Some(car_color)).size(font_size * 1.2));
        }

        panel.push(self.milestones(snapshot))
    }

    fn banner_text(&self, snapshot: &JourneySnapshot) -> Option<&'static str> {
        if snapshot.rainbow_hue.is_some() {
            Some(RAINBOW_BANNER)
        } else if snapshot.finished {
            Some(self.config.variant.finish_banner())
        } else {
            None
        }
    }

    fn milestones(&self, snapshot: &JourneySnapshot) -> Column<'_, Message> {
        let active = snapshot.progress.checkpoint_id.as_deref();
        self.session
            .journey()
            .stops
            .iter()
            .fold(Column::new().spacing(4), |list, stop| {
                let style: fn(&iced::Theme, button::Status) -> button::Style =
                    if active == Some(stop.id.as_str()) {
                        button::primary
                    } else {
                        button::secondary
                    };
                list.push(
                    button(text(stop.label()))
                        .width(Length::Fill)
                        .style(style)
                        .on_press(Message::NavigateTo(stop.id.clone())),
                )
            })
    }

    fn journey_column(&self, snapshot: &JourneySnapshot, theme: Theme) -> Element<'_, Message> {
        let font_size = self.config.font_size as f32;
        let line_height = LineHeight::Relative(self.config.line_spacing);
        let journey = self.session.journey();

        let mut header = column![
            text(journey.title.as_str()).size(font_size * 2.0),
            text(journey.subtitle.as_str()).size(font_size),
        ]
        .spacing(8);
        if snapshot.show_hint {
            header = header.push(text(HINT_TEXT).size(font_size * 0.9));
        }

        let mut content = Column::new()
            .spacing(STOP_SPACING_PX)
            .padding(CONTENT_PADDING_PX)
            .width(Length::Fill)
            .push(container(header).height(Length::Fixed(HEADER_HEIGHT_PX)));

        for (idx, stop) in journey.stops.iter().enumerate() {
            let revealed = snapshot.revealed.get(idx).copied().unwrap_or(true);
            let color = (!revealed).then(|| theme.unrevealed_text());

            let body = stop.lines.iter().fold(
                column![
                    tinted(stop.label(), color)
                        .size(font_size * LABEL_SCALE)
                        .line_height(line_height),
                    tinted(stop.title.as_str(), color)
                        .size(font_size * TITLE_SCALE)
                        .line_height(line_height),
                ],
                |body, line| {
                    body.push(
                        tinted(line.as_str(), color)
                            .size(font_size)
                            .line_height(line_height),
                    )
                },
            );
            content = content.push(
                container(body)
                    .padding(STOP_PADDING_PX)
                    .width(Length::Fill),
            );
        }
        content = content.push(Space::with_height(Length::Fixed(FOOTER_HEIGHT_PX)));

        scrollable(content)
            .on_scroll(|viewport| Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
            })
            .id(JOURNEY_SCROLL_ID.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Text with an optional fixed colour; `None` keeps the theme colour.
fn tinted<'a>(content: impl IntoFragment<'a>, color: Option<Color>) -> Text<'a> {
    text(content).style(move |_theme| text::Style { color })
}
