use eframe::{App, Frame, egui};
use egui::{Color32, RichText};

use crate::charset::CharacterClass;
use crate::password::{SamplingBound, strength_label};
use crate::settings::AppSettings;
use crate::state::FormState;

/// The main eframe app struct
pub struct PassGenApp {
    pub state: FormState,
    pub settings: AppSettings,
}

impl PassGenApp {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            state: FormState::default(),
            settings,
        }
    }

    /// Runs one state transition in place.
    fn apply(&mut self, transition: impl FnOnce(FormState) -> FormState) {
        let current = std::mem::take(&mut self.state);
        self.state = transition(current);
    }

    pub fn set_length_input(&mut self, text: String) {
        self.apply(|s| s.with_length_input(text));
    }

    pub fn toggle_class(&mut self, class: CharacterClass) {
        self.apply(|s| s.toggle_class(class));
    }

    pub fn generate(&mut self) {
        let bound = self.settings.sampling_bound;
        self.apply(|s| s.submit(bound, &mut rand::rng()));
    }

    pub fn reset(&mut self) {
        self.apply(FormState::reset);
    }

    /// Writes the current settings (including the last window size) to disk.
    pub fn save_settings(&self) -> bool {
        match self.settings.save() {
            Ok(()) => {
                log::info!("Settings saved");
                true
            }
            Err(e) => {
                log::error!("Failed to save settings: {e}");
                false
            }
        }
    }

    fn show_settings_ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(15.0);
        egui::CollapsingHeader::new("Settings").show(ui, |ui| {
            ui.label("Index sampling:");
            ui.radio_value(
                &mut self.settings.sampling_bound,
                SamplingBound::Exclusive,
                "Exclusive (always full length)",
            );
            ui.radio_value(
                &mut self.settings.sampling_bound,
                SamplingBound::Inclusive,
                "Inclusive (may drop a character)",
            );
            ui.checkbox(&mut self.settings.show_entropy, "Show entropy estimate");
            if ui.button("Save Settings").clicked() {
                self.save_settings();
            }
        });
    }

    fn show_form_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading(RichText::new("Password Generator").size(32.0).strong());
        ui.add_space(15.0);

        // Length field with inline error
        let mut submit_from_enter = false;
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Password Length");
                if let Some(err) = self.state.visible_error() {
                    ui.colored_label(Color32::RED, RichText::new(err.to_string()).size(12.0));
                }
            });
            let mut text = self.state.length_input.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text("EX 6")
                    .desired_width(80.0),
            );
            if response.changed() {
                self.set_length_input(text);
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit_from_enter = true;
            }
        });
        ui.add_space(10.0);

        for class in CharacterClass::ALL {
            let mut checked = self.state.classes.contains(class);
            if ui.checkbox(&mut checked, class.label()).changed() {
                self.toggle_class(class);
            }
        }

        ui.add_space(15.0);
        ui.horizontal(|ui| {
            let generate = ui
                .add_enabled(self.state.can_submit(), egui::Button::new("Generate Password"))
                .clicked();
            if generate || (submit_from_enter && self.state.can_submit()) {
                self.generate();
            }
            if ui.button("Reset").clicked() {
                self.reset();
            }
        });
    }

    fn show_result_ui(&mut self, ui: &mut egui::Ui) {
        if !self.state.is_pass_generated {
            return;
        }
        ui.add_space(15.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(RichText::new("Result:").size(26.0).strong());
            ui.horizontal(|ui| {
                ui.label(RichText::new("Select to copy").color(Color32::GRAY));
                if ui.button("Copy").clicked() {
                    ui.ctx().copy_text(self.state.password.clone());
                }
            });
            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Label::new(RichText::new(&self.state.password).monospace().size(22.0))
                        .selectable(true),
                );
            });

            if self.settings.show_entropy {
                let bits = self.state.entropy_bits();
                let label = strength_label(bits);
                let color = match label {
                    "Weak" => Color32::RED,
                    "Okay" => Color32::YELLOW,
                    _ => Color32::GREEN,
                };
                ui.colored_label(color, format!("Entropy: ~{:.1} bits ({})", bits, label));
            }
        });
    }
}

impl App for PassGenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Ctrl+G: generate, Ctrl+R: reset
        let (generate, reset) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::G),
                i.modifiers.ctrl && i.key_pressed(egui::Key::R),
            )
        });
        if generate && self.state.can_submit() {
            self.generate();
        }
        if reset {
            self.reset();
        }

        // Remember the window size so a saved config reopens at the same size
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings.set_window_size(rect.width(), rect.height());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.show_form_ui(ui);
                    self.show_result_ui(ui);
                    self.show_settings_ui(ui);
                });
        });
    }
}

// ------------------ UNIT TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_app_default_state() {
        let app = PassGenApp::new(AppSettings::default());
        assert_eq!(app.state, FormState::default());
        assert!(!app.state.is_pass_generated);
    }

    #[test]
    fn test_app_generate_uses_settings_bound() {
        let settings = AppSettings {
            sampling_bound: SamplingBound::Exclusive,
            ..AppSettings::default()
        };
        let mut app = PassGenApp::new(settings);
        app.set_length_input("14".into());
        app.toggle_class(CharacterClass::Symbol);
        app.generate();

        assert!(app.state.is_pass_generated);
        assert_eq!(app.state.password.chars().count(), 14);
        let alphabet = app.state.classes.alphabet();
        assert!(app.state.password.chars().all(|c| alphabet.contains(&c)));
    }

    #[test]
    fn test_app_generate_blocked_by_validation() {
        let mut app = PassGenApp::new(AppSettings::default());
        app.set_length_input("abc".into());
        app.generate();
        assert!(!app.state.is_pass_generated);
        assert_eq!(app.state.visible_error(), Some(&ValidationError::NotANumber));
    }

    #[test]
    fn test_app_entropy_ignores_later_toggles() {
        let mut app = PassGenApp::new(AppSettings::default());
        app.set_length_input("16".into());
        app.generate();
        let before = app.state.entropy_bits();
        let label = strength_label(before);

        app.toggle_class(CharacterClass::Uppercase);
        app.toggle_class(CharacterClass::Digit);
        app.toggle_class(CharacterClass::Symbol);
        assert_eq!(app.state.entropy_bits(), before);
        assert_eq!(strength_label(app.state.entropy_bits()), label);
    }

    #[test]
    fn test_app_reset() {
        let mut app = PassGenApp::new(AppSettings::default());
        app.set_length_input("9".into());
        app.toggle_class(CharacterClass::Uppercase);
        app.toggle_class(CharacterClass::Digit);
        app.generate();
        app.reset();
        assert_eq!(app.state, FormState::default());
    }
}
