// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the loaded document, localization and
//! persisted state, and translates messages into side effects like dialogs,
//! image decoding or export.

pub mod config;
mod document;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use document::Document;
pub use message::{Flags, LoadSource, LoadedImage, Message};

use crate::diagnostics::DiagnosticsLog;
use crate::i18n::fluent::I18n;
use crate::ui::state::DragState;
use config::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    document: Document,
    show_crosshairs: bool,
    drag: DragState,
    /// Persisted application state (last open and save directories).
    app_state: persisted_state::AppState,
    /// Where `app_state` is written; `None` resolves the default data dir.
    state_dir: Option<PathBuf>,
    diagnostics: DiagnosticsLog,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_image", &self.document.has_image())
            .field("params", self.document.params())
            .field("show_crosshairs", &self.show_crosshairs)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            document: Document::default(),
            show_crosshairs: config::DEFAULT_SHOW_CROSSHAIRS_ON_START,
            drag: DragState::default(),
            app_state: persisted_state::AppState::default(),
            state_dir: None,
            diagnostics: DiagnosticsLog::default(),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous image
    /// loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if !paths::init_cli_overrides(flags.data_dir, flags.config_dir) {
            eprintln!("[WARN] Directory overrides were already set; ignoring CLI values");
        }

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            show_crosshairs: config.display.show_crosshairs_on_start(),
            app_state,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            let message = app.i18n.tr(&key);
            app.diagnostics.log_warning(message);
        }
        if let Some(warning) = state_warning {
            let message = app.i18n.tr(warning.i18n_key());
            app.diagnostics.log_warning(message);
        }

        let task = match flags.file_path {
            Some(path) => {
                update::load_command_line_image(&mut app.diagnostics, PathBuf::from(path))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.document.file_name() {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_shortcut_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            document: &mut self.document,
            show_crosshairs: &mut self.show_crosshairs,
            drag: &mut self.drag,
            app_state: &mut self.app_state,
            state_dir: self.state_dir.clone(),
            diagnostics: &mut self.diagnostics,
        };

        match message {
            Message::Controls(controls_message) => {
                update::handle_controls_message(&mut ctx, controls_message)
            }
            Message::Surface(event) => update::handle_surface_event(&mut ctx, event),
            Message::OpenShortcut => update::open_file_dialog(&mut ctx),
            Message::SaveShortcut => update::handle_save_requested(&mut ctx),
            Message::OpenDialogResult(path) => update::handle_open_dialog_result(&mut ctx, path),
            Message::ImageLoaded(result) => update::handle_image_loaded(&mut ctx, result),
            Message::SaveDialogResult(path) => {
                update::handle_save_dialog_result(&mut ctx, path)
            }
            Message::DialogClosed => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            document: &self.document,
            show_crosshairs: self.show_crosshairs,
        })
    }

    /// The loaded image and its derived views.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, RebuildTrigger};
    use crate::error::Error;
    use crate::ui::controls;
    use crate::ui::surface::{SurfaceEvent, SurfaceKind};
    use iced::{Point, Size};
    use image_rs::{DynamicImage, GenericImageView, Rgba, RgbaImage};
    use tempfile::tempdir;

    fn sample(width: u32, height: u32) -> DynamicImage {
        #[allow(clippy::cast_possible_truncation)]
        let buffer = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 2) as u8, (y * 4) as u8, 60, 255])
        });
        DynamicImage::ImageRgba8(buffer)
    }

    fn loaded(path: &str, width: u32, height: u32) -> Message {
        Message::ImageLoaded(Ok(LoadedImage {
            path: PathBuf::from(path),
            image: Box::new(sample(width, height)),
            source: LoadSource::Dialog,
        }))
    }

    fn app_with_state_dir(dir: &std::path::Path) -> App {
        App {
            state_dir: Some(dir.to_path_buf()),
            ..App::default()
        }
    }

    #[test]
    fn default_app_has_no_image() {
        let app = App::default();
        assert!(!app.document().has_image());
        assert!(!app.show_crosshairs);
        assert!(app.diagnostics().is_empty());
    }

    #[test]
    fn title_shows_app_name_when_no_image_loaded() {
        let app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn title_shows_filename_when_image_loaded() {
        let mut app = App::default();
        let _ = app.update(loaded("/tmp/portrait.png", 20, 10));
        assert_eq!(
            app.title(),
            format!("portrait.png - {}", app.i18n.tr("window-title"))
        );
    }

    #[test]
    fn image_loaded_builds_views_and_logs() {
        let mut app = App::default();
        let _ = app.update(loaded("face.png", 101, 60));

        let views = app.document().views().expect("views");
        assert_eq!(views.composites.left.dimensions(), (100, 60));
        assert_eq!(views.composites.right.dimensions(), (102, 60));

        let kinds: Vec<_> = app.diagnostics().iter().map(|e| e.kind.clone()).collect();
        assert!(matches!(
            kinds[0],
            DiagnosticEventKind::ImageLoaded {
                width: 101,
                height: 60,
                ..
            }
        ));
        assert!(matches!(kinds[1], DiagnosticEventKind::TransformApplied { .. }));
        assert!(matches!(
            kinds[2],
            DiagnosticEventKind::CompositesRebuilt {
                trigger: RebuildTrigger::ImageLoaded,
                ..
            }
        ));
    }

    #[test]
    fn load_failure_keeps_previous_image() {
        let mut app = App::default();
        let _ = app.update(loaded("first.png", 30, 20));
        let before = app.document().views().cloned();

        let _ = app.update(Message::ImageLoaded(Err(Error::Decode("bad bytes".into()))));

        assert_eq!(app.document().views().cloned(), before);
        assert_eq!(app.document().file_name(), Some("first.png"));
        assert!(matches!(
            app.diagnostics().latest().map(|e| &e.kind),
            Some(DiagnosticEventKind::Error { .. })
        ));
    }

    #[test]
    fn scale_slider_recomputes_transformed_image() {
        let mut app = App::default();
        let _ = app.update(loaded("face.png", 100, 60));
        let _ = app.update(Message::Controls(controls::Message::ScaleChanged(2.0)));

        let views = app.document().views().expect("views");
        assert_eq!(views.transformed.dimensions(), (200, 120));
        assert!(matches!(
            app.diagnostics().latest().map(|e| &e.kind),
            Some(DiagnosticEventKind::CompositesRebuilt {
                trigger: RebuildTrigger::ParameterChanged,
                ..
            })
        ));
    }

    #[test]
    fn sliders_without_image_only_store_parameters() {
        let mut app = App::default();
        let _ = app.update(Message::Controls(controls::Message::RotationChanged(90.0)));

        assert!(app.document().views().is_none());
        assert!((app.document().params().rotation.value() - 90.0).abs() < f32::EPSILON);
        assert!(app.diagnostics().is_empty());
    }

    #[test]
    fn toggle_crosshairs_flips_visibility() {
        let mut app = App::default();
        let _ = app.update(Message::Controls(controls::Message::ToggleCrosshairs));
        assert!(app.show_crosshairs);
        let _ = app.update(Message::Controls(controls::Message::ToggleCrosshairs));
        assert!(!app.show_crosshairs);
    }

    #[test]
    fn drag_moves_offset_and_keeps_pixels() {
        let mut app = App::default();
        let _ = app.update(loaded("face.png", 80, 40));
        let before = app.document().views().cloned();

        let _ = app.update(Message::Surface(SurfaceEvent::DragStarted(Point::new(10.0, 10.0))));
        let _ = app.update(Message::Surface(SurfaceEvent::DragMoved(Point::new(25.0, 4.0))));
        let _ = app.update(Message::Surface(SurfaceEvent::DragMoved(Point::new(30.0, 12.0))));
        let _ = app.update(Message::Surface(SurfaceEvent::DragEnded));

        assert_eq!(app.document().params().offset.x, 20);
        assert_eq!(app.document().params().offset.y, 2);
        assert_eq!(app.document().views().cloned(), before);
        assert!(matches!(
            app.diagnostics().latest().map(|e| &e.kind),
            Some(DiagnosticEventKind::CompositesRebuilt {
                trigger: RebuildTrigger::DragReleased,
                ..
            })
        ));
    }

    #[test]
    fn drag_without_image_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::Surface(SurfaceEvent::DragStarted(Point::new(0.0, 0.0))));
        let _ = app.update(Message::Surface(SurfaceEvent::DragMoved(Point::new(50.0, 50.0))));
        let _ = app.update(Message::Surface(SurfaceEvent::DragEnded));

        assert_eq!(app.document().params().offset.x, 0);
        assert!(app.diagnostics().is_empty());
    }

    #[test]
    fn resize_renders_preview_for_that_surface() {
        let mut app = App::default();
        let _ = app.update(loaded("face.png", 100, 60));
        let _ = app.update(Message::Surface(SurfaceEvent::Resized {
            kind: SurfaceKind::LeftComposite,
            size: Size::new(400.0, 300.0),
        }));

        assert!(app.document().preview(SurfaceKind::LeftComposite).is_some());
        assert!(app.document().preview(SurfaceKind::Main).is_none());
    }

    #[test]
    fn save_without_image_logs_warning() {
        let mut app = App::default();
        let _ = app.update(Message::Controls(controls::Message::SaveRequested));

        assert!(matches!(
            app.diagnostics().latest().map(|e| &e.kind),
            Some(DiagnosticEventKind::Warning { .. })
        ));
    }

    #[test]
    fn save_dialog_result_writes_combined_image() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_state_dir(dir.path());
        let _ = app.update(loaded("face.png", 31, 20));

        let destination = dir.path().join("out").join("combined");
        std::fs::create_dir_all(dir.path().join("out")).expect("out dir");
        let _ = app.update(Message::SaveDialogResult(Some(destination)));

        let written = dir.path().join("out").join("combined.png");
        let reloaded = image_rs::open(&written).expect("reload");
        assert_eq!(reloaded.dimensions(), (30 + 32, 20));
        assert_eq!(
            app.app_state.last_save_directory,
            Some(dir.path().join("out"))
        );
        assert!(matches!(
            app.diagnostics().latest().map(|e| &e.kind),
            Some(DiagnosticEventKind::ExportSucceeded { width: 62, height: 20 })
        ));

        let (persisted, warning) =
            persisted_state::AppState::load_from(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(persisted.last_save_directory, Some(dir.path().join("out")));
    }

    #[test]
    fn save_failure_is_logged_and_state_untouched() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_state_dir(dir.path());
        let _ = app.update(loaded("face.png", 20, 10));
        let before = app.document().views().cloned();

        let destination = dir.path().join("missing").join("combined.png");
        let _ = app.update(Message::SaveDialogResult(Some(destination)));

        assert_eq!(app.document().views().cloned(), before);
        assert!(app.app_state.last_save_directory.is_none());
        match app.diagnostics().latest().map(|e| &e.kind) {
            Some(DiagnosticEventKind::ExportFailed { message }) => assert!(!message.is_empty()),
            other => panic!("expected export failure, got {other:?}"),
        }
    }

    #[test]
    fn cancelled_dialogs_change_nothing() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_state_dir(dir.path());
        let _ = app.update(Message::OpenDialogResult(None));
        let _ = app.update(Message::SaveDialogResult(None));

        assert!(!app.document().has_image());
        assert_eq!(app.app_state, persisted_state::AppState::default());
        assert!(app.diagnostics().is_empty());
    }

    #[test]
    fn open_dialog_result_remembers_directory() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_state_dir(dir.path());
        let image_path = dir.path().join("pictures").join("face.png");

        let _ = app.update(Message::OpenDialogResult(Some(image_path)));

        assert_eq!(
            app.app_state.last_open_directory,
            Some(dir.path().join("pictures"))
        );
    }

    #[test]
    fn theme_maps_system_to_dark() {
        let mut app = App::default();
        assert_eq!(app.theme(), Theme::Dark);
        app.theme_mode = ThemeMode::Light;
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn view_renders_with_and_without_image() {
        let mut app = App::default();
        drop(app.view());
        let _ = app.update(loaded("face.png", 10, 10));
        drop(app.view());
    }
}
