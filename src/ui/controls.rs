// SPDX-License-Identifier: MPL-2.0
//! Control column: action buttons and the four transform sliders.

use crate::domain::transform::{
    rotation_bounds, scale_bounds, skew_bounds, TransformParameters,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, slider, Column, Row, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub params: &'a TransformParameters,
    pub show_crosshairs: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    LoadRequested,
    ToggleCrosshairs,
    SaveRequested,
    RotationChanged(f32),
    ScaleChanged(f32),
    SkewXChanged(f32),
    SkewYChanged(f32),
}

/// Label key of the crosshair toggle for the current visibility.
#[must_use]
pub fn crosshair_label_key(visible: bool) -> &'static str {
    if visible {
        "button-hide-crosshairs"
    } else {
        "button-show-crosshairs"
    }
}

/// Readout shown next to a slider label.
#[must_use]
pub fn format_degrees(value: f32) -> String {
    format!("{value:.0}°")
}

#[must_use]
pub fn format_scale(value: f32) -> String {
    format!("{value:.1}×")
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let action_button = |key: &str, message: Message| {
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .on_press(message)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([6, 12])
    };

    let load_button = action_button("button-load", Message::LoadRequested);
    let crosshair_button = action_button(
        crosshair_label_key(ctx.show_crosshairs),
        Message::ToggleCrosshairs,
    );
    let save_button = action_button("button-save", Message::SaveRequested);

    let params = ctx.params;
    let rotation = labeled_slider(
        ctx.i18n.tr("slider-rotation"),
        format_degrees(params.rotation.value()),
        slider(
            rotation_bounds::MIN..=rotation_bounds::MAX,
            params.rotation.value(),
            Message::RotationChanged,
        )
        .step(rotation_bounds::STEP),
    );
    let scale = labeled_slider(
        ctx.i18n.tr("slider-scale"),
        format_scale(params.scale.value()),
        slider(
            scale_bounds::MIN..=scale_bounds::MAX,
            params.scale.value(),
            Message::ScaleChanged,
        )
        .step(scale_bounds::STEP),
    );
    let skew_x = labeled_slider(
        ctx.i18n.tr("slider-skew-x"),
        format_degrees(params.skew_x.value()),
        slider(
            skew_bounds::MIN..=skew_bounds::MAX,
            params.skew_x.value(),
            Message::SkewXChanged,
        )
        .step(skew_bounds::STEP),
    );
    let skew_y = labeled_slider(
        ctx.i18n.tr("slider-skew-y"),
        format_degrees(params.skew_y.value()),
        slider(
            skew_bounds::MIN..=skew_bounds::MAX,
            params.skew_y.value(),
            Message::SkewYChanged,
        )
        .step(skew_bounds::STEP),
    );

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::CONTROLS_WIDTH))
        .push(load_button)
        .push(crosshair_button)
        .push(save_button)
        .push(rotation)
        .push(scale)
        .push(skew_x)
        .push(skew_y)
        .into()
}

fn labeled_slider<'a>(
    label: String,
    readout: String,
    slider: iced::widget::Slider<'a, f32, Message>,
) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY).width(Length::Fill))
        .push(
            Text::new(readout)
                .size(typography::CAPTION)
                .width(Length::Fixed(sizing::VALUE_LABEL_WIDTH)),
        );

    Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(slider)
        .into()
}
