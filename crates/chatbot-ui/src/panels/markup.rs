//! Draws rendered bot text with native egui widgets.

use egui::{self, RichText};
use chatbot_core::render::{is_safe_href, plain_text, Segment};
use crate::theme::*;

/// Lay out segments as wrapped text, breaking rows at `LineBreak`.
pub fn show_segments(ui: &mut egui::Ui, segments: &[Segment]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        let mut row_empty = true;
        add_segments(ui, segments, false, &mut row_empty);
    });
}

fn add_segments(ui: &mut egui::Ui, segments: &[Segment], bold: bool, row_empty: &mut bool) {
    for seg in segments {
        match seg {
            Segment::Text(s) => {
                let mut text = RichText::new(s).color(TEXT_PRIMARY);
                if bold {
                    text = text.strong();
                }
                ui.label(text);
                *row_empty = false;
            }
            Segment::Bold(children) => add_segments(ui, children, true, row_empty),
            Segment::Link { label, href } => {
                let text = RichText::new(plain_text(label)).color(LINK).underline().strong();
                if is_safe_href(href) {
                    ui.add(egui::Hyperlink::from_label_and_url(text, href).open_in_new_tab(true));
                } else {
                    ui.label(text);
                }
                *row_empty = false;
            }
            Segment::LineBreak => {
                // blank line for consecutive breaks
                if *row_empty {
                    ui.label(" ");
                }
                ui.end_row();
                *row_empty = true;
            }
        }
    }
}
