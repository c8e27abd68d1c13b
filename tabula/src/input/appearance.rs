//! Input variants, sizes and derived decoration.

/// Visual variant of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    Filled,
    #[default]
    Outlined,
    /// Bottom border only.
    Ghost,
}

/// Input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl InputSize {
    /// Height in spacing units.
    pub fn height(self) -> u16 {
        match self {
            InputSize::Sm => 8,
            InputSize::Md => 10,
            InputSize::Lg => 12,
        }
    }

    /// Horizontal padding in spacing units.
    pub fn padding_x(self) -> u16 {
        match self {
            InputSize::Sm | InputSize::Md => 3,
            InputSize::Lg => 4,
        }
    }
}

/// Kind of value the input holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    /// Masked unless revealed.
    Password,
    Email,
}

/// Whether the input is shown in its error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Error,
}

impl Tone {
    /// Theme color name for the border and label.
    pub fn color_name(self) -> &'static str {
        match self {
            Tone::Normal => "border",
            Tone::Error => "error",
        }
    }
}

/// A control shown at the trailing edge of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Loading spinner.
    Spinner,
    /// Button that clears the value.
    Clear,
    /// Password visibility toggle. `revealed` is the current state.
    Reveal { revealed: bool },
}

impl Affordance {
    /// Accessible label for the control, if it is interactive.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Affordance::Spinner => None,
            Affordance::Clear => Some("Clear input"),
            Affordance::Reveal { revealed: true } => Some("Hide password"),
            Affordance::Reveal { revealed: false } => Some("Show password"),
        }
    }
}

/// Whether a message below the input is an error or a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Helper,
    Error,
}

/// Message rendered below the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMessage {
    pub kind: MessageKind,
    pub text: String,
    /// Element id the input references for description.
    pub element_id: String,
}

/// Derived decoration for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Appearance {
    pub variant: InputVariant,
    pub size: InputSize,
    pub tone: Tone,
    /// Dimmed and not interactive.
    pub dimmed: bool,
    /// Reserve space at the trailing edge for affordances.
    pub trailing_padding: bool,
}

impl Appearance {
    /// Theme color name for the background.
    pub fn background(&self) -> &'static str {
        match (self.variant, self.tone) {
            (InputVariant::Ghost, _) => "transparent",
            (_, _) if self.dimmed => "disabled",
            (InputVariant::Filled, Tone::Error) => "error_surface",
            (InputVariant::Filled, Tone::Normal) => "surface",
            (InputVariant::Outlined, _) => "background",
        }
    }

    /// Whether the border is drawn on all sides (Ghost draws only the bottom).
    pub fn full_border(&self) -> bool {
        self.variant != InputVariant::Ghost
    }
}
