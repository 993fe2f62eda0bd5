use lightbox_core::geometry::Size;
use lightbox_core::watermark::WatermarkLayout;

use crate::app::LightboxApp;

enum Action {
    ZoomIn,
    ZoomOut,
    Close,
}

/// Modal overlay showing the open preview at its display size.
pub fn show(ctx: &egui::Context, app: &mut LightboxApp, window: Size) {
    if !app.preview.surface().is_visible() {
        return;
    }
    let Some((texture_id, frame)) = app
        .preview
        .surface()
        .current()
        .map(|(texture, frame)| (texture.id(), frame.clone()))
    else {
        return;
    };

    let mut action = None;
    let modal = egui::Modal::new(egui::Id::new("preview_modal")).show(ctx, |ui| {
        ui.horizontal(|ui| {
            let zoom = &frame.zoom;
            if ui
                .add_enabled(!zoom.at_min(), egui::Button::new("\u{2212}"))
                .on_hover_text("Zoom out (-)")
                .clicked()
            {
                action = Some(Action::ZoomOut);
            }
            ui.label(zoom.to_string());
            if ui
                .add_enabled(!zoom.at_max(), egui::Button::new("+"))
                .on_hover_text("Zoom in (+)")
                .clicked()
            {
                action = Some(Action::ZoomIn);
            }
            ui.separator();
            ui.label(frame.display.to_string());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    action = Some(Action::Close);
                }
            });
        });
        ui.add_space(4.0);

        let size = egui::vec2(frame.display.width as f32, frame.display.height as f32);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        ui.painter()
            .image(texture_id, rect, uv, egui::Color32::WHITE);
        paint_watermark(ui.painter(), rect, &frame.watermark);
    });

    if action.is_none() {
        action = ctx.input(|i| {
            if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                Some(Action::ZoomIn)
            } else if i.key_pressed(egui::Key::Minus) {
                Some(Action::ZoomOut)
            } else {
                None
            }
        });
    }
    if modal.should_close() {
        action = Some(Action::Close);
    }

    match action {
        Some(Action::ZoomIn) => {
            let result = app.preview.zoom_in(window);
            app.report(result);
        }
        Some(Action::ZoomOut) => {
            let result = app.preview.zoom_out(window);
            app.report(result);
        }
        Some(Action::Close) => app.preview.close(),
        None => {}
    }
}

/// Draw the watermark text, right/bottom aligned at its anchor.
fn paint_watermark(painter: &egui::Painter, rect: egui::Rect, watermark: &WatermarkLayout) {
    let [r, g, b] = watermark.color;
    let alpha = (watermark.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let anchor = rect.min + egui::vec2(watermark.anchor_x as f32, watermark.anchor_y as f32);
    painter.text(
        anchor,
        egui::Align2::RIGHT_BOTTOM,
        &watermark.text,
        egui::FontId::proportional(watermark.font_size as f32),
        egui::Color32::from_rgba_unmultiplied(r, g, b, alpha),
    );
}
