use std::path::Path;

use anyhow::Context;
use lightbox_core::config::LightboxConfig;

use crate::app::LightboxApp;
use crate::messages::WorkerResult;

pub fn show(ctx: &egui::Context, app: &mut LightboxApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Folder...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_folder(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_folder(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_folder(app: &mut LightboxApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            let _ = result_tx.send(WorkerResult::FolderPicked { dir });
        }
    });
}

fn import_config(app: &mut LightboxApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
            return;
        };
        let _ = match read_config(&path) {
            Ok(config) => result_tx.send(WorkerResult::ConfigImported { config }),
            Err(e) => result_tx.send(WorkerResult::Error {
                message: format!("{e:#}"),
            }),
        };
    });
}

fn export_config(app: &mut LightboxApp) {
    let config = app.preview.config().clone();
    let result_tx = app.result_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("lightbox.toml")
            .save_file()
        {
            if let Err(e) = write_config(&path, &config) {
                let _ = result_tx.send(WorkerResult::Error {
                    message: format!("{e:#}"),
                });
            }
        }
    });
}

fn read_config(path: &Path) -> anyhow::Result<LightboxConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}

fn write_config(path: &Path, config: &LightboxConfig) -> anyhow::Result<()> {
    let content = toml::to_string_pretty(config).context("Cannot serialize config")?;
    std::fs::write(path, content).with_context(|| format!("Cannot write {}", path.display()))
}
