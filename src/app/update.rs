// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Pixel work (transform, composites, previews, export) runs synchronously
//! here. File dialogs, message dialogs and image decoding are returned as
//! tasks.

use super::document::Document;
use super::message::{LoadSource, LoadedImage};
use super::{persisted_state, Message};
use crate::diagnostics::{DiagnosticsLog, RebuildTrigger};
use crate::domain::transform::TransformParameters;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, extensions};
use crate::ui::controls;
use crate::ui::state::DragState;
use crate::ui::surface::SurfaceEvent;
use iced::Task;
use image_rs::GenericImageView;
use std::path::PathBuf;

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub document: &'a mut Document,
    pub show_crosshairs: &'a mut bool,
    pub drag: &'a mut DragState,
    pub app_state: &'a mut persisted_state::AppState,
    /// Data directory override for the state file; `None` resolves the default.
    pub state_dir: Option<PathBuf>,
    pub diagnostics: &'a mut DiagnosticsLog,
}

pub fn handle_controls_message(
    ctx: &mut UpdateContext<'_>,
    message: controls::Message,
) -> Task<Message> {
    match message {
        controls::Message::LoadRequested => open_file_dialog(ctx),
        controls::Message::SaveRequested => handle_save_requested(ctx),
        controls::Message::ToggleCrosshairs => {
            *ctx.show_crosshairs = !*ctx.show_crosshairs;
            Task::none()
        }
        controls::Message::RotationChanged(value) => {
            let params = ctx.document.params().with_rotation(value);
            apply_parameters(ctx, params)
        }
        controls::Message::ScaleChanged(value) => {
            let params = ctx.document.params().with_scale(value);
            apply_parameters(ctx, params)
        }
        controls::Message::SkewXChanged(value) => {
            let params = ctx.document.params().with_skew_x(value);
            apply_parameters(ctx, params)
        }
        controls::Message::SkewYChanged(value) => {
            let params = ctx.document.params().with_skew_y(value);
            apply_parameters(ctx, params)
        }
    }
}

fn apply_parameters(ctx: &mut UpdateContext<'_>, params: TransformParameters) -> Task<Message> {
    if let Some(timing) = ctx.document.set_parameters(params) {
        if let Some(views) = ctx.document.views() {
            ctx.diagnostics.log_derivation(
                ctx.document.params(),
                views,
                timing,
                RebuildTrigger::ParameterChanged,
            );
        }
    }
    Task::none()
}

pub fn handle_surface_event(ctx: &mut UpdateContext<'_>, event: SurfaceEvent) -> Task<Message> {
    match event {
        SurfaceEvent::Resized { kind, size } => {
            ctx.document.resize_surface(kind, size);
        }
        SurfaceEvent::DragStarted(position) => {
            if ctx.document.has_image() {
                ctx.drag.start(position);
            }
        }
        SurfaceEvent::DragMoved(position) => {
            if let Some((dx, dy)) = ctx.drag.advance(position) {
                ctx.document.translate(dx, dy);
            }
        }
        SurfaceEvent::DragEnded => {
            if ctx.drag.stop() {
                if let Some(duration) = ctx.document.rebuild_composites() {
                    if let Some(views) = ctx.document.views() {
                        ctx.diagnostics.log_composites_rebuilt(
                            views,
                            duration,
                            RebuildTrigger::DragReleased,
                        );
                    }
                }
            }
        }
    }
    Task::none()
}

/// Opens the image picker, starting in the last used directory.
pub fn open_file_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let title = ctx.i18n.tr("dialog-open-title");
    let images_label = ctx.i18n.tr("filter-images");
    let all_label = ctx.i18n.tr("filter-all-files");
    let last_directory = ctx.app_state.last_open_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&images_label, extensions::IMAGE_EXTENSIONS)
                .add_filter(&all_label, &["*"]);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenDialogResult,
    )
}

pub fn handle_open_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    ctx.app_state.set_last_open_directory_from_file(&path);
    persist_app_state(ctx);
    load_image_task(path, LoadSource::Dialog)
}

/// Decodes `path` off the update loop.
pub fn load_image_task(path: PathBuf, source: LoadSource) -> Task<Message> {
    Task::perform(
        async move {
            media::load_image(&path).map(|image| LoadedImage {
                path,
                image: Box::new(image),
                source,
            })
        },
        Message::ImageLoaded,
    )
}

/// Loads the image named on the command line. An unknown extension is only
/// logged; decoding is still attempted.
pub fn load_command_line_image(diagnostics: &mut DiagnosticsLog, path: PathBuf) -> Task<Message> {
    if !media::is_supported_image(&path) {
        diagnostics.log_warning(format!(
            "Unrecognized image extension: {}",
            path.display()
        ));
    }
    load_image_task(path, LoadSource::CommandLine)
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<LoadedImage, Error>,
) -> Task<Message> {
    match result {
        Ok(loaded) => {
            let LoadedImage {
                path,
                image,
                source,
            } = loaded;
            let (width, height) = image.dimensions();
            ctx.drag.stop();

            let timing = ctx.document.replace_original(path, *image);
            ctx.diagnostics
                .log_image_loaded(width, height, source.as_str());
            if let Some(views) = ctx.document.views() {
                ctx.diagnostics.log_derivation(
                    ctx.document.params(),
                    views,
                    timing,
                    RebuildTrigger::ImageLoaded,
                );
            }
            Task::none()
        }
        Err(error) => {
            ctx.diagnostics.log_error(format!("Load failed: {error}"));
            let detail = user_facing_detail(ctx.i18n, &error);
            let description = ctx
                .i18n
                .tr_with_args("dialog-load-error", &[("message", detail.as_str())]);
            message_dialog(
                rfd::MessageLevel::Error,
                ctx.i18n.tr("dialog-load-error-title"),
                description,
            )
        }
    }
}

/// Starts the save flow, or warns when there is nothing to save.
pub fn handle_save_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.document.views().is_none() {
        ctx.diagnostics.log_warning("Save requested with no image loaded");
        return message_dialog(
            rfd::MessageLevel::Warning,
            ctx.i18n.tr("dialog-no-image-title"),
            ctx.i18n.tr("dialog-no-image"),
        );
    }

    let title = ctx.i18n.tr("dialog-save-title");
    let last_directory = ctx.app_state.last_save_directory.clone();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .set_file_name(extensions::DEFAULT_EXPORT_NAME);
            for (name, exts) in extensions::SAVE_FILTERS {
                dialog = dialog.add_filter(*name, exts);
            }

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

/// Writes the combined image to the chosen destination.
pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    destination: Option<PathBuf>,
) -> Task<Message> {
    let Some(destination) = destination else {
        return Task::none();
    };
    let Some(views) = ctx.document.views() else {
        return Task::none();
    };

    let left = &views.composites.left;
    let right = &views.composites.right;
    let width = left.width() + right.width();
    let height = left.height().max(right.height());

    match media::combine_and_write(left, right, &destination) {
        Ok(written) => {
            ctx.diagnostics.log_export_succeeded(width, height);
            ctx.app_state.set_last_save_directory_from_file(&written);
            persist_app_state(ctx);

            let path = written.display().to_string();
            message_dialog(
                rfd::MessageLevel::Info,
                ctx.i18n.tr("dialog-save-success-title"),
                ctx.i18n.tr_with_args("dialog-save-success", &[("path", path.as_str())]),
            )
        }
        Err(error) => {
            ctx.diagnostics.log_export_failed(error.to_string());
            let detail = user_facing_detail(ctx.i18n, &Error::from(error));
            message_dialog(
                rfd::MessageLevel::Error,
                ctx.i18n.tr("dialog-save-error-title"),
                ctx.i18n
                    .tr_with_args("dialog-save-error", &[("message", detail.as_str())]),
            )
        }
    }
}

/// Localized summary of `error` followed by its technical message.
fn user_facing_detail(i18n: &I18n, error: &Error) -> String {
    let inner = match error {
        Error::Io(msg) | Error::Decode(msg) | Error::Config(msg) => msg.clone(),
        Error::Export(export) => export.to_string(),
    };
    format!("{} ({inner})", i18n.tr(error.i18n_key()))
}

fn persist_app_state(ctx: &mut UpdateContext<'_>) {
    if let Some(warning) = ctx.app_state.save_to(ctx.state_dir.clone()) {
        ctx.diagnostics.log_warning(ctx.i18n.tr(warning.i18n_key()));
    }
}

/// Shows a native message box with a single OK button.
fn message_dialog(level: rfd::MessageLevel, title: String, description: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(level)
                .set_title(&title)
                .set_description(&description)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await
        },
        |_| Message::DialogClosed,
    )
}
