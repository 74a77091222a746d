// SPDX-License-Identifier: MPL-2.0
//! Preview surfaces: canvases that draw one image each.
//!
//! A surface reports its size the first time layout gives it a positive
//! extent and whenever that extent changes, so the application can build a
//! preview of the right size. The main surface also draws the crosshair and
//! turns left-button drags into [`SurfaceEvent`]s. A drag holds the pointer
//! until the button is released, even outside the surface.

use crate::domain::transform::TranslationOffset;
use crate::media::image::ImageData;
use crate::ui::design_tokens::{self, crosshair};
use crate::ui::viewport::{self, Placement};
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke};
use iced::widget::Action;
use iced::{Element, Event, Length, Point, Rectangle, Renderer, Size, Theme};

/// Which image a surface shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// The transformed image; draggable, with crosshair.
    Main,
    LeftComposite,
    RightComposite,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 3] = [
        SurfaceKind::Main,
        SurfaceKind::LeftComposite,
        SurfaceKind::RightComposite,
    ];

    /// i18n key of the panel title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            SurfaceKind::Main => "panel-main",
            SurfaceKind::LeftComposite => "panel-left",
            SurfaceKind::RightComposite => "panel-right",
        }
    }

    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, SurfaceKind::Main)
    }
}

/// Events published by a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The surface was laid out with a new positive size.
    Resized { kind: SurfaceKind, size: Size },
    /// Left button pressed over the main surface.
    DragStarted(Point),
    /// Pointer moved while the drag is active.
    DragMoved(Point),
    /// Left button released, wherever the pointer is.
    DragEnded,
}

/// Per-canvas widget state kept by iced between frames.
#[derive(Debug, Default)]
pub struct SurfaceState {
    last_size: Option<Size>,
    dragging: bool,
}

/// Canvas program drawing one preview.
#[derive(Debug)]
pub struct Surface<'a> {
    pub kind: SurfaceKind,
    pub preview: Option<&'a ImageData>,
    pub offset: TranslationOffset,
    pub show_crosshair: bool,
}

impl<'a> Surface<'a> {
    #[must_use]
    pub fn new(kind: SurfaceKind, preview: Option<&'a ImageData>) -> Self {
        Self {
            kind,
            preview,
            offset: TranslationOffset::default(),
            show_crosshair: false,
        }
    }

    #[must_use]
    pub fn with_offset(mut self, offset: TranslationOffset) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_crosshair(mut self, show: bool) -> Self {
        self.show_crosshair = show;
        self
    }

    /// Wraps the program into a canvas filling the available space.
    pub fn into_element(self) -> Element<'a, SurfaceEvent> {
        canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Drag event for a pointer event, if any.
    fn pointer_event(
        &self,
        state: &mut SurfaceState,
        event: &mouse::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<SurfaceEvent> {
        if !self.kind.is_interactive() {
            return None;
        }

        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = cursor.position_in(bounds)?;
                state.dragging = true;
                Some(SurfaceEvent::DragStarted(position))
            }
            mouse::Event::CursorMoved { .. } if state.dragging => {
                // Relative to the surface origin, possibly outside it
                let position = cursor.position()?;
                Some(SurfaceEvent::DragMoved(Point::new(
                    position.x - bounds.x,
                    position.y - bounds.y,
                )))
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) if state.dragging => {
                state.dragging = false;
                Some(SurfaceEvent::DragEnded)
            }
            _ => None,
        }
    }

    /// `Resized` when layout gives a new positive size.
    fn layout_event(&self, state: &mut SurfaceState, bounds: Rectangle) -> Option<SurfaceEvent> {
        let size = bounds.size();
        if !viewport::has_extent(size) || state.last_size == Some(size) {
            return None;
        }
        state.last_size = Some(size);
        Some(SurfaceEvent::Resized {
            kind: self.kind,
            size,
        })
    }
}

impl canvas::Program<SurfaceEvent> for Surface<'_> {
    type State = SurfaceState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<SurfaceEvent>> {
        // One action per call: a pending size change is published on the
        // next event when a pointer event wins this one.
        if let Event::Mouse(mouse_event) = event {
            if let Some(drag) = self.pointer_event(state, mouse_event, bounds, cursor) {
                return Some(Action::publish(drag).and_capture());
            }
        }
        self.layout_event(state, bounds).map(Action::publish)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();

        frame.stroke(
            &Path::rectangle(Point::ORIGIN, size),
            Stroke::default()
                .with_width(design_tokens::border::WIDTH_SM)
                .with_color(design_tokens::surface_outline_color()),
        );

        if let Some(preview) = self.preview {
            let placement =
                Placement::centered(size, (preview.width, preview.height), self.offset);
            frame.draw_image(
                placement.rectangle(),
                canvas::Image::new(preview.handle.clone()),
            );
        }

        if self.show_crosshair && viewport::has_extent(size) {
            draw_crosshair(&mut frame, size);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !self.kind.is_interactive() || self.preview.is_none() {
            return mouse::Interaction::default();
        }
        if state.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Draws dashed horizontal and vertical lines through the surface centre.
fn draw_crosshair(frame: &mut Frame, size: Size) {
    let centre = Point::new(size.width / 2.0, size.height / 2.0);
    let stroke = Stroke {
        line_dash: LineDash {
            segments: &crosshair::DASH,
            offset: 0,
        },
        ..Stroke::default()
            .with_width(crosshair::WIDTH)
            .with_color(design_tokens::crosshair_color())
    };

    let horizontal = Path::line(Point::new(0.0, centre.y), Point::new(size.width, centre.y));
    let vertical = Path::line(Point::new(centre.x, 0.0), Point::new(centre.x, size.height));
    frame.stroke(&horizontal, stroke);
    frame.stroke(&vertical, stroke);
}
