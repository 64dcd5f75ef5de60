//! Demo UI: two color pickers coupled to the same selection value.

use egui::{vec2, Color32, Context, CornerRadius, Frame, Margin, RichText, Sense, Stroke, Ui};
use huepick_widgets::{palette, ColorPicker, PickerConfig, RoundedRect};

const NOTICE_TEXT: &str = "Notice that these two color pickers are coupled to the same \
    selection value. When both contain an equal color, that color is selected in both pickers.";

/// UI state for the demo.
pub struct UiState {
    /// The selection cell both pickers bind to
    pub selected_color: Color32,
    /// Shared base configuration for the customized picker
    pub custom_config: PickerConfig,
    /// Last color reported through the customized picker's change callback
    pub last_picked: Option<Color32>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            selected_color: palette::RED,
            custom_config: PickerConfig::new()
                .with_title("🎨 Pick a Color")
                .with_colors(vec![
                    palette::YELLOW,
                    palette::ORANGE,
                    palette::BROWN,
                    palette::RED,
                ])
                .with_shape(RoundedRect::new(2))
                .with_highlight_color(palette::BLUE)
                .with_swatch_size(vec2(30.0, 15.0)),
            last_picked: None,
        }
    }
}

/// Render the demo UI.
pub fn render_ui(ctx: &Context, state: &mut UiState) {
    let UiState {
        selected_color,
        custom_config,
        last_picked,
    } = state;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading("Custom Color Picker");
        });
        ui.add_space(24.0);

        ui.label(RichText::new("Default Example").size(16.0));
        ui.add_space(8.0);
        ColorPicker::new(selected_color).title("Pick a Color").show(ui);

        ui.add_space(24.0);
        ui.separator();
        ui.add_space(24.0);

        ui.label(RichText::new("Customized Example").size(16.0));
        ui.add_space(4.0);
        ui.label(RichText::new(NOTICE_TEXT).weak());
        ui.add_space(8.0);

        framed_row(ui, |ui| {
            ColorPicker::new(selected_color)
                .config(custom_config.clone())
                .on_change(|color| {
                    log::info!("Picked {}", palette::hex(color));
                    *last_picked = Some(color);
                })
                .show(ui);
        });

        ui.add_space(24.0);
        ui.separator();
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            ui.label("Selected Color:");
            let (rect, _) = ui.allocate_exact_size(vec2(48.0, 48.0), Sense::hover());
            ui.painter().circle_filled(rect.center(), 24.0, *selected_color);
        });

        if let Some(color) = last_picked {
            ui.add_space(8.0);
            ui.label(RichText::new(format!("Last picked: {}", palette::hex(*color))).weak());
        }
    });
}

/// White rounded row framing the customized picker.
fn framed_row(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    Frame::new()
        .fill(Color32::WHITE)
        .corner_radius(CornerRadius::same(8))
        .stroke(Stroke::new(1.0, Color32::from_gray(230)))
        .inner_margin(Margin::symmetric(12, 10))
        .show(ui, add_contents);
}
