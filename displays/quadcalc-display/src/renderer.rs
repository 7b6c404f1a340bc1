//! Screen composition
//!
//! Turns engine display models, help pages and the splash text into
//! screen content.

use core::fmt::Write;

use heapless::String;
use quadcalc_core::DisplayModel;

use crate::help::HelpPage;
use crate::screen::{Screen, LINE_LEN};

/// Second line of the splash screen
pub const SPLASH_PROMPT: &str = "Press any key...";

/// Fills a `Screen` from higher level content
#[derive(Debug, Default)]
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    pub const fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// Show the engine's current display model
    pub fn render_model(&mut self, model: &DisplayModel) -> &mut Screen {
        self.screen.set_lines(model.line1(), model.line2());
        &mut self.screen
    }

    /// Show the boot splash with the firmware version
    pub fn render_splash(&mut self) -> &mut Screen {
        let mut title: String<LINE_LEN> = String::new();
        // Truncated by the screen if the version string is long
        let _ = write!(title, "QuadCalc v{}", env!("CARGO_PKG_VERSION"));
        self.screen.set_lines(&title, SPLASH_PROMPT);
        &mut self.screen
    }

    /// Show a help page
    pub fn render_help(&mut self, page: HelpPage) -> &mut Screen {
        let (top, bottom) = page.lines();
        self.screen.set_lines(top, bottom);
        &mut self.screen
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::tests::RecordingBackend;
    use quadcalc_core::{CalculatorEngine, Key, Operator};

    #[test]
    fn test_render_idle_model() {
        let mut renderer = Renderer::new();
        let engine = CalculatorEngine::new();
        renderer.render_model(&engine.current_display_model());
        assert_eq!(renderer.screen().get_line(0), Some("Ready..."));
        assert_eq!(renderer.screen().get_line(1), Some("# for help"));
    }

    #[test]
    fn test_render_truncates_long_model_line() {
        let mut engine = CalculatorEngine::new();
        for key in [
            Key::Digit(1),
            Key::Digit(2),
            Key::Operator(Operator::Plus),
            Key::Digit(3),
        ] {
            engine.process_key(key);
        }

        let mut renderer = Renderer::new();
        renderer.render_model(&engine.current_display_model());
        assert_eq!(renderer.screen().get_line(0), Some("12 + 3"));
        // "Press = or continue" is 19 characters
        assert_eq!(renderer.screen().get_line(1), Some("Press = or conti"));
    }

    #[test]
    fn test_render_splash() {
        let mut renderer = Renderer::new();
        renderer.render_splash();
        let top = renderer.screen().get_line(0).unwrap();
        assert!(top.starts_with("QuadCalc v"));
        assert_eq!(renderer.screen().get_line(1), Some(SPLASH_PROMPT));
    }

    #[test]
    fn test_render_help_then_backend() {
        let mut renderer = Renderer::new();
        let mut backend = RecordingBackend::new();
        renderer
            .render_help(HelpPage::Chaining)
            .render_to(&mut backend)
            .unwrap();
        assert_eq!(backend.rows[0].as_str(), "Chain operations");
        assert_eq!(backend.rows[1].as_str(), "after results   ");
    }

    #[test]
    fn test_help_text_truncated_to_width() {
        let mut renderer = Renderer::new();
        renderer.render_help(HelpPage::Keys);
        assert_eq!(renderer.screen().get_line(0), Some("Keys: 0-9 Number"));
        assert_eq!(renderer.screen().get_line(1), Some("+,-,*,/ Operator"));
    }
}
