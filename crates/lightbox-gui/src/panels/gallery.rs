use crate::app::LightboxApp;

/// Edge length of a gallery tile, in points.
const TILE_SIZE: f32 = 168.0;

pub fn show(ctx: &egui::Context, app: &mut LightboxApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.gallery.sources.is_empty() {
            show_placeholder(ui, app.gallery.loading);
            return;
        }

        let mut clicked = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (index, source) in app.gallery.sources.iter().enumerate() {
                    let button = match app.gallery.thumbnails.get(index).and_then(Option::as_ref) {
                        Some(texture) => {
                            let size = texture.size_vec2();
                            egui::Button::image(egui::Image::new((texture.id(), size)))
                        }
                        None => egui::Button::new(tile_label(source)),
                    };
                    let response = ui
                        .add(button.min_size(egui::vec2(TILE_SIZE, TILE_SIZE)))
                        .on_hover_text(source.primary.display().to_string());
                    // Buttons also report Enter/Space on the focused tile as a click.
                    if response.clicked() {
                        clicked = Some(index);
                    }
                }
            });
        });

        if let Some(index) = clicked {
            app.open_tile(index);
        }
    });
}

fn tile_label(source: &lightbox_core::source::ImageSource) -> String {
    source
        .primary
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.to_string())
}

fn show_placeholder(ui: &mut egui::Ui, loading: bool) {
    let text = if loading {
        "Loading gallery..."
    } else {
        "Open a folder of images to begin"
    };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
