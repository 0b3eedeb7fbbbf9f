//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// Passlock color palette
pub struct Theme {
    // Primary branding colors
    pub accent: Color,
    pub backdrop: Color,

    // Status colors
    pub success: Color,
    pub danger: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(100, 181, 246),  // #64B5F6
            backdrop: Color::Rgb(33, 33, 33),   // #212121
            success: Color::Rgb(76, 175, 80),   // #4CAF50 - Green
            danger: Color::Rgb(244, 67, 54),    // #F44336 - Red
            border: Color::Rgb(66, 66, 66),     // #424242
            border_focused: Color::Rgb(100, 181, 246), // #64B5F6
            text_primary: Color::Rgb(250, 250, 250),   // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),     // #757575
        }
    }
}

impl Theme {
    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get subtitle style
    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Get success style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get danger style
    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Get filled passcode dot style
    pub fn dot_filled(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get empty passcode dot style
    pub fn dot_empty(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get passcode dot style while an error is showing
    pub fn dot_error(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }
}
