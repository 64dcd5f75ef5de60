//! The color picker: a titled horizontal row of selectable swatches.
//!
//! The picker owns no selection state. It reads a caller-owned
//! [`Color32`] through a mutable binding to decide which swatches get the
//! selection ring, and writes that binding when a swatch is clicked.
//! Several pickers may share one binding; each recomputes its own
//! highlight from value equality against its own color list.

use std::sync::Arc;

use egui::{vec2, Color32, CursorIcon, Rect, Sense, Stroke, Ui, Vec2};

use crate::palette;
use crate::shape::{Circle, SwatchShape};
use crate::sizing;

/// Configuration for a [`ColorPicker`].
///
/// A config is a plain value. The `with_*` overrides return a modified
/// copy and leave the original untouched, so one base config can feed any
/// number of picker instances.
#[derive(Clone)]
pub struct PickerConfig {
    /// Title shown at the left edge of the row
    pub title: String,
    /// Selectable colors, in display order
    pub colors: Vec<Color32>,
    /// Width and height of each swatch
    pub swatch_size: Vec2,
    /// Selection ring color; `None` falls back to the style's strong text color
    pub highlight_color: Option<Color32>,
    /// Swatch geometry
    pub shape: Arc<dyn SwatchShape>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            title: "Color Picker".to_string(),
            colors: palette::DEFAULT_COLORS.to_vec(),
            swatch_size: vec2(sizing::SWATCH, sizing::SWATCH),
            highlight_color: None,
            shape: Arc::new(Circle),
        }
    }
}

impl PickerConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy with a different title.
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    /// Copy with the color sequence replaced wholesale.
    pub fn with_colors(&self, colors: impl Into<Vec<Color32>>) -> Self {
        Self {
            colors: colors.into(),
            ..self.clone()
        }
    }

    /// Copy with a different swatch size.
    pub fn with_swatch_size(&self, size: Vec2) -> Self {
        Self {
            swatch_size: size,
            ..self.clone()
        }
    }

    /// Copy with a different selection ring color.
    pub fn with_highlight_color(&self, color: Color32) -> Self {
        Self {
            highlight_color: Some(color),
            ..self.clone()
        }
    }

    /// Copy with a different swatch shape.
    pub fn with_shape(&self, shape: impl SwatchShape + 'static) -> Self {
        Self {
            shape: Arc::new(shape),
            ..self.clone()
        }
    }
}

/// What happened during a [`ColorPicker::show`] pass.
#[derive(Clone, Debug, Default)]
pub struct PickerResponse {
    /// Whether a swatch was clicked this pass
    pub changed: bool,
    /// The color written to the selection this pass, if any
    pub selected: Option<Color32>,
    /// Indices of all swatches equal to the selection at the start of the pass
    pub highlighted: Vec<usize>,
    /// Screen rect of each swatch, in display order
    pub swatch_rects: Vec<Rect>,
}

/// Indices of `colors` equal to `selection`.
///
/// This is the highlight rule the picker applies: pure value equality.
/// A selection written by one picker lights up every equal entry in
/// another picker's list, and a selection missing from the list lights up
/// nothing. Duplicate entries all match.
pub fn highlighted_indices(colors: &[Color32], selection: Color32) -> Vec<usize> {
    colors
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == selection)
        .map(|(i, _)| i)
        .collect()
}

/// A titled row of clickable color swatches bound to a caller-owned
/// selection value.
///
/// ```no_run
/// # use huepick_widgets::{ColorPicker, palette};
/// # fn demo(ui: &mut egui::Ui, selected: &mut egui::Color32) {
/// ColorPicker::new(selected)
///     .title("Accent Color")
///     .colors(vec![palette::RED, palette::BLUE, palette::GREEN])
///     .show(ui);
/// # }
/// ```
pub struct ColorPicker<'a> {
    config: PickerConfig,
    selection: &'a mut Color32,
    on_change: Option<Box<dyn FnMut(Color32) + 'a>>,
}

impl<'a> ColorPicker<'a> {
    /// Create a picker with the default configuration bound to `selection`.
    pub fn new(selection: &'a mut Color32) -> Self {
        Self {
            config: PickerConfig::default(),
            selection,
            on_change: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: PickerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Replace the color sequence.
    pub fn colors(mut self, colors: impl Into<Vec<Color32>>) -> Self {
        self.config.colors = colors.into();
        self
    }

    /// Set the swatch size.
    pub fn swatch_size(mut self, size: Vec2) -> Self {
        self.config.swatch_size = size;
        self
    }

    /// Set the selection ring color.
    pub fn highlight_color(mut self, color: Color32) -> Self {
        self.config.highlight_color = Some(color);
        self
    }

    /// Set the swatch shape.
    pub fn shape(mut self, shape: impl SwatchShape + 'static) -> Self {
        self.config.shape = Arc::new(shape);
        self
    }

    /// Subscribe to selection changes; called with the newly written color
    /// after a swatch click.
    pub fn on_change(mut self, on_change: impl FnMut(Color32) + 'a) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Show the picker and report what happened.
    pub fn show(mut self, ui: &mut Ui) -> PickerResponse {
        // Snapshot the selection: the highlight set is decided at the start
        // of the pass, a click takes effect on the next one.
        let current = *self.selection;
        let size = self.config.swatch_size.max(Vec2::ZERO);
        let degenerate = size.x <= 0.0 || size.y <= 0.0;
        let highlight = self
            .config
            .highlight_color
            .unwrap_or_else(|| ui.visuals().strong_text_color());

        let mut out = PickerResponse {
            highlighted: highlighted_indices(&self.config.colors, current),
            ..Default::default()
        };

        ui.horizontal(|ui| {
            ui.label(self.config.title.as_str());

            // Title at the left edge, swatches flushed to the right.
            let n = self.config.colors.len();
            if n > 0 {
                let spacing = ui.spacing().item_spacing.x;
                let needed = n as f32 * size.x + (n - 1) as f32 * spacing;
                let free = ui.available_width() - needed;
                if free > 0.0 {
                    ui.add_space(free);
                }
            }

            for &color in self.config.colors.iter() {
                let (rect, response) = ui.allocate_exact_size(size, Sense::click());

                if !degenerate && ui.is_rect_visible(rect) {
                    self.config.shape.fill(ui.painter(), rect, color);

                    if color == current {
                        let ring = self.config.shape.scaled_by(rect, sizing::HIGHLIGHT_SCALE);
                        self.config.shape.stroke(
                            ui.painter(),
                            ring,
                            Stroke::new(sizing::HIGHLIGHT_STROKE, highlight),
                        );
                    }
                }

                if response.clicked() {
                    *self.selection = color;
                    out.changed = true;
                    out.selected = Some(color);
                }

                response
                    .on_hover_text(palette::hex(color))
                    .on_hover_cursor(CursorIcon::PointingHand);
                out.swatch_rects.push(rect);
            }
        });

        if out.changed {
            if let Some(on_change) = self.on_change.as_mut() {
                on_change(*self.selection);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLUE, GREEN, ORANGE, RED, YELLOW};
    use egui::{Event, Modifiers, PointerButton, Pos2, RawInput};

    fn raw_input(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(640.0, 480.0))),
            events,
            ..Default::default()
        }
    }

    fn pointer_events(pos: Pos2, pressed: bool) -> Vec<Event> {
        vec![
            Event::PointerMoved(pos),
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers: Modifiers::NONE,
            },
        ]
    }

    /// Run one frame showing a picker for `config`, returning the response.
    fn run_picker_frame(
        ctx: &egui::Context,
        events: Vec<Event>,
        selection: &mut Color32,
        config: &PickerConfig,
    ) -> PickerResponse {
        let mut out = None;
        let _ = ctx.run(raw_input(events), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                out = Some(ColorPicker::new(selection).config(config.clone()).show(ui));
            });
        });
        out.expect("picker frame did not run")
    }

    /// Click swatch `index` of `config`: one layout frame to find the rect,
    /// then a press frame and a release frame at its center.
    fn click_swatch(
        ctx: &egui::Context,
        selection: &mut Color32,
        config: &PickerConfig,
        index: usize,
    ) -> PickerResponse {
        let layout = run_picker_frame(ctx, vec![], selection, config);
        let pos = layout.swatch_rects[index].center();
        run_picker_frame(ctx, pointer_events(pos, true), selection, config);
        run_picker_frame(ctx, pointer_events(pos, false), selection, config)
    }

    #[test]
    fn test_config_defaults() {
        let config = PickerConfig::new();
        assert_eq!(config.title, "Color Picker");
        assert_eq!(config.colors, vec![RED, BLUE, GREEN]);
        assert_eq!(config.swatch_size, vec2(20.0, 20.0));
        assert!(config.highlight_color.is_none());
    }

    #[test]
    fn test_builder_overrides_are_pure() {
        let base = PickerConfig::new();
        let custom = base
            .with_title("Accent")
            .with_colors(vec![YELLOW, ORANGE])
            .with_swatch_size(vec2(30.0, 15.0))
            .with_highlight_color(BLUE);

        assert_eq!(base.title, "Color Picker");
        assert_eq!(base.colors.len(), 3);
        assert_eq!(base.swatch_size, vec2(20.0, 20.0));
        assert!(base.highlight_color.is_none());

        assert_eq!(custom.title, "Accent");
        assert_eq!(custom.colors, vec![YELLOW, ORANGE]);
        assert_eq!(custom.swatch_size, vec2(30.0, 15.0));
        assert_eq!(custom.highlight_color, Some(BLUE));
    }

    #[test]
    fn test_highlighted_indices_single_match() {
        assert_eq!(highlighted_indices(&[RED, BLUE, GREEN], RED), vec![0]);
    }

    #[test]
    fn test_highlighted_indices_absent_selection() {
        assert!(highlighted_indices(&[RED, BLUE, GREEN], ORANGE).is_empty());
    }

    #[test]
    fn test_highlighted_indices_duplicates() {
        assert_eq!(highlighted_indices(&[RED, RED, BLUE], RED), vec![0, 1]);
    }

    #[test]
    fn test_highlighted_indices_empty() {
        assert!(highlighted_indices(&[], RED).is_empty());
    }

    #[test]
    fn test_render_highlights_selected_swatch() {
        let ctx = egui::Context::default();
        let mut selection = RED;
        let config = PickerConfig::new();

        let out = run_picker_frame(&ctx, vec![], &mut selection, &config);
        assert_eq!(out.highlighted, vec![0]);
        assert_eq!(out.swatch_rects.len(), 3);
        assert!(!out.changed);
        assert_eq!(out.selected, None);
    }

    #[test]
    fn test_render_selection_not_in_list() {
        let ctx = egui::Context::default();
        let mut selection = ORANGE;
        let config = PickerConfig::new();

        let out = run_picker_frame(&ctx, vec![], &mut selection, &config);
        assert!(out.highlighted.is_empty());
        assert_eq!(out.swatch_rects.len(), 3);
    }

    #[test]
    fn test_render_duplicate_colors_all_highlighted() {
        let ctx = egui::Context::default();
        let mut selection = RED;
        let config = PickerConfig::new().with_colors(vec![RED, RED, BLUE]);

        let out = run_picker_frame(&ctx, vec![], &mut selection, &config);
        assert_eq!(out.highlighted, vec![0, 1]);
    }

    #[test]
    fn test_render_empty_color_list() {
        let ctx = egui::Context::default();
        let mut selection = RED;
        let config = PickerConfig::new().with_colors(Vec::new());

        let out = run_picker_frame(&ctx, vec![], &mut selection, &config);
        assert!(out.swatch_rects.is_empty());
        assert!(out.highlighted.is_empty());
        assert!(!out.changed);
    }

    #[test]
    fn test_render_degenerate_swatch_size() {
        let ctx = egui::Context::default();
        let mut selection = RED;
        let config = PickerConfig::new().with_swatch_size(vec2(0.0, -5.0));

        let out = run_picker_frame(&ctx, vec![], &mut selection, &config);
        assert_eq!(out.swatch_rects.len(), 3);
        for rect in &out.swatch_rects {
            assert_eq!(rect.width(), 0.0);
        }
    }

    #[test]
    fn test_click_writes_selection() {
        let ctx = egui::Context::default();
        let mut selection = RED;
        let config = PickerConfig::new();

        let out = click_swatch(&ctx, &mut selection, &config, 1);
        assert!(out.changed);
        assert_eq!(out.selected, Some(BLUE));
        assert_eq!(selection, BLUE);

        // The write is visible on the next pass.
        let after = run_picker_frame(&ctx, vec![], &mut selection, &config);
        assert_eq!(after.highlighted, vec![1]);
    }

    #[test]
    fn test_on_change_fires_with_new_color() {
        let ctx = egui::Context::default();
        let mut selection = RED;
        let config = PickerConfig::new();
        let mut observed = None;

        let layout = run_picker_frame(&ctx, vec![], &mut selection, &config);
        let pos = layout.swatch_rects[2].center();

        for pressed in [true, false] {
            let _ = ctx.run(raw_input(pointer_events(pos, pressed)), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ColorPicker::new(&mut selection)
                        .config(config.clone())
                        .on_change(|color| observed = Some(color))
                        .show(ui);
                });
            });
        }

        assert_eq!(observed, Some(GREEN));
        assert_eq!(selection, GREEN);
    }

    #[test]
    fn test_shared_selection_couples_pickers() {
        let ctx = egui::Context::default();
        let mut selection = RED;
        let config_a = PickerConfig::new();
        let config_b = PickerConfig::new()
            .with_title("Other")
            .with_colors(vec![YELLOW, BLUE]);

        // Both pickers in one frame, bound to the same selection cell.
        let run_both = |selection: &mut Color32, events: Vec<Event>| {
            let mut out = None;
            let _ = ctx.run(raw_input(events), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let a = ColorPicker::new(selection).config(config_a.clone()).show(ui);
                    let b = ColorPicker::new(selection).config(config_b.clone()).show(ui);
                    out = Some((a, b));
                });
            });
            out.expect("frame did not run")
        };

        let (a, b) = run_both(&mut selection, vec![]);
        assert_eq!(a.highlighted, vec![0]);
        // B has no red entry, so nothing is highlighted there.
        assert!(b.highlighted.is_empty());

        // Click blue in A: B recomputes to its own blue entry.
        let pos = a.swatch_rects[1].center();
        run_both(&mut selection, pointer_events(pos, true));
        run_both(&mut selection, pointer_events(pos, false));
        assert_eq!(selection, BLUE);

        let (a, b) = run_both(&mut selection, vec![]);
        assert_eq!(a.highlighted, vec![1]);
        assert_eq!(b.highlighted, vec![1]);

        // Click green in A: B's list has no equal color, highlight empties.
        let pos = a.swatch_rects[2].center();
        run_both(&mut selection, pointer_events(pos, true));
        run_both(&mut selection, pointer_events(pos, false));
        assert_eq!(selection, GREEN);

        let (_, b) = run_both(&mut selection, vec![]);
        assert!(b.highlighted.is_empty());
    }
}
