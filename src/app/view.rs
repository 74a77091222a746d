// SPDX-License-Identifier: MPL-2.0
//! Root layout: the control column on the left, three preview panels on the
//! right (main preview on top, both composites below).

use super::document::Document;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::controls;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::surface::{Surface, SurfaceKind};
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub document: &'a Document,
    pub show_crosshairs: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controls = controls::view(controls::ViewContext {
        i18n: ctx.i18n,
        params: ctx.document.params(),
        show_crosshairs: ctx.show_crosshairs,
    })
    .map(Message::Controls);

    let main_surface = Surface::new(SurfaceKind::Main, ctx.document.preview(SurfaceKind::Main))
        .with_offset(ctx.document.params().offset)
        .with_crosshair(ctx.show_crosshairs);

    let composites = Row::new()
        .spacing(spacing::SM)
        .height(Length::FillPortion(2))
        .push(panel(
            ctx.i18n,
            SurfaceKind::LeftComposite,
            Surface::new(
                SurfaceKind::LeftComposite,
                ctx.document.preview(SurfaceKind::LeftComposite),
            ),
            None,
        ))
        .push(panel(
            ctx.i18n,
            SurfaceKind::RightComposite,
            Surface::new(
                SurfaceKind::RightComposite,
                ctx.document.preview(SurfaceKind::RightComposite),
            ),
            None,
        ));

    let empty_hint = (!ctx.document.has_image()).then(|| ctx.i18n.tr("empty-state"));
    let previews = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(panel(ctx.i18n, SurfaceKind::Main, main_surface, empty_hint))
                .height(Length::FillPortion(3)),
        )
        .push(composites);

    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(controls)
        .push(previews)
        .into()
}

/// A titled panel holding one surface. `hint` is shown under the title.
fn panel<'a>(
    i18n: &I18n,
    kind: SurfaceKind,
    surface: Surface<'a>,
    hint: Option<String>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Text::new(i18n.tr(kind.title_key())).size(typography::TITLE_SM));

    if let Some(hint) = hint {
        column = column.push(Text::new(hint).size(typography::CAPTION));
    }

    column
        .push(surface.into_element().map(Message::Surface))
        .into()
}
