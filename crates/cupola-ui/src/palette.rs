use cupola_core::Color;

/// Resolved paints for an action group: background behind idle buttons,
/// the pressed highlight, and the hairline dividers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionPalette {
    pub background: Color,
    pub pressed: Color,
    pub divider: Color,
}

impl ActionPalette {
    pub const ACTION_SHEET: ActionPalette = ActionPalette {
        background: Color::from_argb(0xD1F8F8F8),
        pressed: Color::from_argb(0xA6E5E5EA),
        divider: Color::from_argb(0x403F3F3F),
    };

    pub const DIALOG_LIGHT: ActionPalette = ActionPalette {
        background: Color::from_argb(0xCCF2F2F2),
        pressed: Color::from_argb(0xFFE1E1E1),
        divider: Color::from_argb(0x40FFFFFF),
    };

    pub const DIALOG_DARK: ActionPalette = ActionPalette {
        background: Color::from_argb(0xBF1E1E1E),
        pressed: Color::from_argb(0xFF2E2E2E),
        divider: Color::from_argb(0x40FFFFFF),
    };

    /// The detached cancel button under an action sheet has no dividers.
    pub const CANCEL_BUTTON: ActionPalette = ActionPalette {
        background: Color::from_argb(0xFFFFFFFF),
        pressed: Color::from_argb(0xFFEAEAEA),
        divider: Color::TRANSPARENT,
    };
}

impl Default for ActionPalette {
    fn default() -> Self {
        Self::ACTION_SHEET
    }
}
