//! Help pages
//!
//! Each press of the help key shows the next page, wrapping after the
//! last one. The cycle position survives Clear and calculations.

/// One page of help text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HelpPage {
    Keys,
    Commands,
    Chaining,
}

impl HelpPage {
    /// Number of help pages
    pub const COUNT: u8 = 3;

    /// Page for a cycle index, modulo the page count
    pub const fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => Self::Keys,
            1 => Self::Commands,
            _ => Self::Chaining,
        }
    }

    /// The two lines of text for this page
    pub const fn lines(self) -> (&'static str, &'static str) {
        match self {
            Self::Keys => ("Keys: 0-9 Numbers", "+,-,*,/ Operators"),
            Self::Commands => ("= Calculate", "C Clear, # Help"),
            Self::Chaining => ("Chain operations", "after results"),
        }
    }
}

/// Help page counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HelpCycle {
    index: u8,
}

impl HelpCycle {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Return the page to show and advance the cycle
    pub fn next(&mut self) -> HelpPage {
        let page = HelpPage::from_index(self.index);
        self.index = (self.index + 1) % HelpPage::COUNT;
        page
    }

    /// Page the next call to `next` will return
    pub fn peek(&self) -> HelpPage {
        HelpPage::from_index(self.index)
    }
}
