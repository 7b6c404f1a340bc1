//! Main controller coordinating the engine, help pages and rendering
//!
//! The controller is the central brain that:
//! - Routes each key to the engine or to the help pages
//! - Owns the calculator engine and the help page counter
//! - Composes the screen for whatever should be shown next

use quadcalc_core::config::CalculatorConfig;
use quadcalc_core::input::{route_key, KeyAction};
use quadcalc_core::{CalculatorEngine, CalculatorState, Key};
use quadcalc_display::{HelpCycle, HelpPage, Renderer, Screen};

/// What the display should show after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum View {
    /// The engine's display model
    Calculator,
    /// A help page, shown for the configured time
    Help(HelpPage),
}

/// Controller state for coordinating subsystems
pub struct Controller {
    engine: CalculatorEngine,
    help: HelpCycle,
    renderer: Renderer,
    divide_opens_help: bool,
}

impl Controller {
    /// Create a controller for the given configuration
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            help: HelpCycle::new(),
            renderer: Renderer::new(),
            divide_opens_help: config.keypad.divide_opens_help,
        }
    }

    /// Handle one decoded key
    pub fn process_key(&mut self, key: Key) -> View {
        match route_key(key, self.engine.state(), self.divide_opens_help) {
            KeyAction::Help => View::Help(self.help.next()),
            KeyAction::Engine(key) => {
                self.engine.process_key(key);
                View::Calculator
            }
        }
    }

    /// Current engine state
    pub fn state(&self) -> CalculatorState {
        self.engine.state()
    }

    /// Compose the boot splash
    pub fn splash(&mut self) -> &mut Screen {
        self.renderer.render_splash()
    }

    /// Compose the screen for a view
    pub fn render(&mut self, view: View) -> &mut Screen {
        match view {
            View::Calculator => {
                let model = self.engine.current_display_model();
                self.renderer.render_model(&model)
            }
            View::Help(page) => self.renderer.render_help(page),
        }
    }
}
