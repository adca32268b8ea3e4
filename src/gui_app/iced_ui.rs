use std::path::PathBuf;
use std::time::Instant;

use iced::widget::{Canvas, button, container, row, scrollable, stack, text};
use iced::{
    Color, Element, Font, Length, Size, Subscription, Task, Theme, alignment, window,
};
use tracing::{debug, info, warn};

use crate::config::DropperConfig;
use crate::gui_app::canvas_layer::{CanvasEvent, DropperCanvas};
use crate::loader::{self, ImageSource, LoadTicket, LoadTracker, LoadedImage};
use crate::toast::{SystemClipboard, Toast};
use crate::widget::DropperState;

const TOOLBAR_HEIGHT: f32 = 56.0;
const WINDOW_SIZE: Size = Size::new(960.0, 640.0);

/// What the GUI starts with.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub config: DropperConfig,
    pub initial_image: ImageSource,
}

pub fn run_iced_app(options: LaunchOptions) -> iced::Result {
    iced::application(
        move || DropperApp::new(options.clone()),
        DropperApp::update,
        DropperApp::view,
    )
    .title("Color Dropper")
    .subscription(DropperApp::subscription)
    .theme(DropperApp::theme)
    .window(window::Settings {
        size: WINDOW_SIZE,
        ..Default::default()
    })
    .run()
}

/// Canvas container size for a window of `window` size.
fn container_for_window(window: Size) -> (u32, u32) {
    (
        window.width.max(0.0) as u32,
        (window.height - TOOLBAR_HEIGHT).max(0.0) as u32,
    )
}

struct DropperApp {
    state: DropperState,
    toast: Toast,
    clipboard: SystemClipboard,
    loads: LoadTracker,
    base_handle: Option<iced::widget::image::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    UploadPressed,
    FilePicked(Option<PathBuf>),
    ImageLoaded(LoadTicket, Result<LoadedImage, String>),
    PickPressed,
    Canvas(CanvasEvent),
    CopyLabelPressed,
    ToastExpired(u64),
    ToastFrame(Instant),
    WindowResized(Size),
}

impl DropperApp {
    fn new(options: LaunchOptions) -> (Self, Task<Message>) {
        let LaunchOptions {
            config,
            initial_image,
        } = options;
        let toast = Toast::new(config.toast_duration(), config.toast_fade());
        let mut app = DropperApp {
            state: DropperState::new(config, container_for_window(WINDOW_SIZE)),
            toast,
            clipboard: SystemClipboard::default(),
            loads: LoadTracker::default(),
            base_handle: None,
        };
        let task = app.start_load(initial_image);
        (app, task)
    }

    fn start_load(&mut self, source: ImageSource) -> Task<Message> {
        let ticket = self.loads.issue();
        debug!(?ticket, ?source, "loading image");
        Task::perform(loader::load_image(source), move |result| {
            Message::ImageLoaded(ticket, result.map_err(|err| err.to_string()))
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UploadPressed => {
                let dialog = rfd::AsyncFileDialog::new()
                    .set_title("Upload image")
                    .pick_file();

                Task::perform(dialog, |result| {
                    Message::FilePicked(result.map(|file| file.path().to_path_buf()))
                })
            }
            Message::FilePicked(Some(path)) => self.start_load(ImageSource::File(path)),
            Message::FilePicked(None) => Task::none(),
            Message::ImageLoaded(ticket, Ok(image)) => {
                if !self.loads.is_current(ticket) {
                    debug!(?ticket, "discarding superseded image load");
                    return Task::none();
                }
                let LoadedImage { pixels, source } = image;
                info!(
                    width = pixels.width(),
                    height = pixels.height(),
                    ?source,
                    "image loaded"
                );
                self.base_handle = Some(iced::widget::image::Handle::from_rgba(
                    pixels.width(),
                    pixels.height(),
                    pixels.as_raw().clone(),
                ));
                self.state.image_loaded(pixels);
                Task::none()
            }
            Message::ImageLoaded(_, Err(error)) => {
                warn!("image could not be loaded: {error}");
                Task::none()
            }
            Message::PickPressed => {
                self.state.activate();
                Task::none()
            }
            Message::Canvas(CanvasEvent::Moved(position)) => {
                self.state.pointer_moved(position);
                Task::none()
            }
            Message::Canvas(CanvasEvent::Clicked) => match self.state.click() {
                Some(hex) => self.notify(&hex),
                None => Task::none(),
            },
            Message::CopyLabelPressed => match self.state.label() {
                Some(color) => self.notify(&color.hex()),
                None => Task::none(),
            },
            Message::ToastExpired(generation) => {
                self.toast.expire(generation, Instant::now());
                Task::none()
            }
            Message::ToastFrame(now) => {
                self.toast.tick(now);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.state.resize_container(container_for_window(size));
                Task::none()
            }
        }
    }

    fn notify(&mut self, hex: &str) -> Task<Message> {
        let Some(timer) = self.toast.notify(&mut self.clipboard, hex) else {
            return Task::none();
        };
        debug!(hex, generation = timer.generation, "copied to clipboard");
        Task::perform(tokio::time::sleep(timer.after), move |_| {
            Message::ToastExpired(timer.generation)
        })
    }

    fn view(&self) -> Element<'_, Message> {
        let (canvas_w, canvas_h) = self.state.canvas().size();
        let canvas = Canvas::new(DropperCanvas {
            scene: self.state.frame(),
            base: self.base_handle.as_ref(),
            picking: self.state.is_picking(),
        })
        .width(Length::Fixed(canvas_w as f32))
        .height(Length::Fixed(canvas_h as f32));

        let canvas_area = scrollable(canvas)
            .direction(scrollable::Direction::Both {
                vertical: scrollable::Scrollbar::default(),
                horizontal: scrollable::Scrollbar::default(),
            })
            .width(Length::Fill)
            .height(Length::Fill);

        let body = iced::widget::column![self.toolbar(), canvas_area];

        let mut layers = stack![body];
        if let Some(toast) = self.toast_overlay() {
            layers = layers.push(toast);
        }
        layers.into()
    }

    fn toolbar(&self) -> Element<'_, Message> {
        let pick_label = if self.state.is_picking() {
            "Picking"
        } else {
            "Pick Color"
        };

        let hex_label: Element<'_, Message> = match self.state.label() {
            Some(color) => {
                let [r, g, b, _] = color.opaque().0;
                text(color.hex())
                    .font(Font::MONOSPACE)
                    .size(18)
                    .color(Color::from_rgb8(r, g, b))
                    .into()
            }
            None => text("#------")
                .font(Font::MONOSPACE)
                .size(18)
                .color(Color::from_rgb8(120, 120, 120))
                .into(),
        };

        let copy_button = button(text("Copy")).on_press_maybe(
            self.state
                .label()
                .map(|_| Message::CopyLabelPressed),
        );

        let controls = row![
            button(text("Upload Image")).on_press(Message::UploadPressed),
            button(text(pick_label)).on_press(Message::PickPressed),
            hex_label,
            copy_button,
        ]
        .spacing(16)
        .align_y(alignment::Vertical::Center);

        container(controls)
            .padding(10)
            .width(Length::Fill)
            .height(Length::Fixed(TOOLBAR_HEIGHT))
            .style(|_| container::Style {
                background: Some(Color::from_rgb8(32, 32, 32).into()),
                ..Default::default()
            })
            .into()
    }

    fn toast_overlay(&self) -> Option<Element<'_, Message>> {
        let message = self.toast.message()?;
        let opacity = self.toast.opacity(Instant::now());

        let bubble = container(text(message).color(Color {
            a: opacity,
            ..Color::WHITE
        }))
        .padding(12)
        .style(move |_| container::Style {
            background: Some(Color::from_rgba8(40, 40, 40, 0.9 * opacity).into()),
            border: iced::border::Border {
                color: Color::from_rgba8(90, 90, 90, opacity),
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        });

        Some(
            container(bubble)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(24)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Bottom)
                .into(),
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        let fade = if self.toast.is_fading() {
            window::frames().map(Message::ToastFrame)
        } else {
            Subscription::none()
        };
        Subscription::batch([resize, fade])
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
