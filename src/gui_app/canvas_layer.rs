use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Frame, Geometry, Path, Program, Stroke};
use iced::widget::image::{FilterMethod, Handle};
use iced::{Color, Font, Rectangle, Renderer, Theme};
use image::Rgba;

use crate::gui_app::iced_ui::Message;
use crate::sampler::{self, PointerPosition};
use crate::scene::{DrawOp, Scene};

#[derive(Debug, Clone, Copy)]
pub enum CanvasEvent {
    Moved(PointerPosition),
    Clicked,
}

/// Replays the widget's current frame and forwards pointer input.
pub(crate) struct DropperCanvas<'a> {
    pub scene: &'a Scene,
    pub base: Option<&'a Handle>,
    pub picking: bool,
}

impl Program<Message> for DropperCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let position = local_position(bounds, cursor)?;
                Some(
                    canvas::Action::publish(Message::Canvas(CanvasEvent::Moved(position)))
                        .and_capture(),
                )
            }
            // Not captured: the surrounding scrollable still has to scroll.
            canvas::Event::Mouse(mouse::Event::WheelScrolled { .. }) => {
                let position = local_position(bounds, cursor)?;
                Some(canvas::Action::publish(Message::Canvas(
                    CanvasEvent::Moved(position),
                )))
            }
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if cursor.is_over(bounds) {
                    Some(canvas::Action::publish(Message::Canvas(CanvasEvent::Clicked)).and_capture())
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        replay(&mut frame, self.scene, self.base);
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if self.picking && cursor.is_over(bounds) {
            // the cursor swatch in the scene stands in for the pointer
            mouse::Interaction::Hidden
        } else {
            mouse::Interaction::default()
        }
    }
}

fn local_position(bounds: Rectangle, cursor: Cursor) -> Option<PointerPosition> {
    let global = cursor.position()?;
    if !bounds.contains(global) {
        return None;
    }
    Some(sampler::canvas_local(global, bounds.position()))
}

fn to_color(color: Rgba<u8>) -> Color {
    let [r, g, b, a] = color.0;
    Color::from_rgba8(r, g, b, a as f32 / 255.0)
}

fn replay(frame: &mut Frame, scene: &Scene, base: Option<&Handle>) {
    for op in scene.ops() {
        match op {
            // every geometry starts from an empty frame
            DrawOp::Clear { .. } => {}
            DrawOp::BaseImage { origin, size } => {
                if let Some(handle) = base {
                    frame.draw_image(
                        Rectangle::new(*origin, *size),
                        canvas::Image::new(handle.clone()).filter_method(FilterMethod::Nearest),
                    );
                }
            }
            DrawOp::Inset { dest, pixels } => {
                let handle =
                    Handle::from_rgba(pixels.width(), pixels.height(), pixels.as_raw().clone());
                frame.draw_image(
                    *dest,
                    canvas::Image::new(handle).filter_method(FilterMethod::Nearest),
                );
            }
            DrawOp::StrokeCircle {
                center,
                radius,
                width,
                color,
            } => {
                frame.stroke(
                    &Path::circle(*center, *radius),
                    Stroke::default()
                        .with_width(*width)
                        .with_color(to_color(*color)),
                );
            }
            DrawOp::FillRect { rect, color } => {
                frame.fill_rectangle(rect.position(), rect.size(), to_color(*color));
            }
            DrawOp::StrokeRect { rect, width, color } => {
                frame.stroke_rectangle(
                    rect.position(),
                    rect.size(),
                    Stroke::default()
                        .with_width(*width)
                        .with_color(to_color(*color)),
                );
            }
            DrawOp::Text {
                content,
                position,
                size,
                color,
            } => {
                frame.fill_text(canvas::Text {
                    content: content.clone(),
                    position: *position,
                    color: to_color(*color),
                    size: (*size).into(),
                    font: Font::MONOSPACE,
                    ..Default::default()
                });
            }
        }
    }
}
