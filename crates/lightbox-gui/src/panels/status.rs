use crate::app::LightboxApp;

pub fn show(ctx: &egui::Context, app: &mut LightboxApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref dir) = app.gallery.dir {
                ui.label(dir.display().to_string());
                ui.separator();
                ui.label(format!("{} images", app.gallery.sources.len()));
                ui.separator();
            }
            if let Some(fit) = app.preview.fit() {
                ui.label(format!("{} \u{2192} {}", fit.natural, fit.display));
                ui.separator();
                ui.label(format!("Zoom: {}", fit.zoom));
            } else if app.preview.is_loading() {
                ui.label("Loading...");
            }
        });

        ui.add_space(2.0);
    });
}
