//! Key symbols that drive state transitions

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
}

impl Operator {
    /// All operators, in keypad order
    pub const ALL: [Operator; 4] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Times,
        Operator::Divide,
    ];

    /// ASCII glyph shown on the character display
    pub const fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Times => '*',
            Operator::Divide => '/',
        }
    }

    /// Parse an operator from its display glyph
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == c)
    }
}

/// Logical keys, independent of where they sit on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Decimal digit 0-9
    Digit(u8),
    /// One of the four arithmetic operators
    Operator(Operator),
    /// Evaluate the pending expression
    Equals,
    /// Reset to idle
    Clear,
    /// Show the next help page (display only)
    Help,
}

impl Key {
    /// Build a digit key, rejecting values above 9
    pub const fn digit(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Key::Digit(value))
        } else {
            None
        }
    }

    /// Parse a key from its keymap character
    ///
    /// Digits, the four operator glyphs, `=`, `C` (clear) and `#` (help).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Key::digit(c as u8 - b'0'),
            '=' => Some(Key::Equals),
            'C' | 'c' => Some(Key::Clear),
            '#' => Some(Key::Help),
            _ => Operator::from_symbol(c).map(Key::Operator),
        }
    }

    /// Keymap character for this key
    pub const fn to_char(self) -> char {
        match self {
            Key::Digit(d) => (b'0' + d) as char,
            Key::Operator(op) => op.symbol(),
            Key::Equals => '=',
            Key::Clear => 'C',
            Key::Help => '#',
        }
    }

    /// Check if this key feeds the arithmetic model
    ///
    /// Help is the only key handled purely by the display side.
    pub fn is_arithmetic(&self) -> bool {
        !matches!(self, Key::Help)
    }

    /// Check if this key enters a digit
    pub fn is_digit(&self) -> bool {
        matches!(self, Key::Digit(_))
    }

    /// Check if this key selects an operator
    pub fn is_operator(&self) -> bool {
        matches!(self, Key::Operator(_))
    }
}
