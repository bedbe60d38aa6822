//! Closed-state launcher and the click-to-close backdrop.

use egui::{self, Align2, CornerRadius, RichText, Sense, Vec2};
use crate::theme::*;

/// Round button in the bottom-right corner. Returns true when clicked.
pub fn launcher_button(ctx: &egui::Context) -> bool {
    let mut clicked = false;

    egui::Area::new(egui::Id::new("chat_launcher"))
        .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-20.0, -20.0))
        .show(ctx, |ui| {
            let button = egui::Button::new(RichText::new("💬").size(30.0).color(TEXT_PRIMARY))
                .fill(ACCENT)
                .corner_radius(CornerRadius::same((LAUNCHER_SIZE / 2.0) as u8))
                .min_size(Vec2::splat(LAUNCHER_SIZE));
            clicked = ui.add(button).on_hover_text("Open Chat").clicked();
        });

    clicked
}

/// Dimmed full-screen layer behind the open window. Returns true when clicked.
pub fn backdrop(ctx: &egui::Context) -> bool {
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(BACKDROP))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            ui.interact(rect, egui::Id::new("chat_backdrop"), Sense::click())
                .clicked()
        })
        .inner
}
