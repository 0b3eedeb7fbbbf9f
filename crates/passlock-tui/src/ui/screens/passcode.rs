//! Passcode entry dialog

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::ui::layout::centered_rect;

/// Draw the passcode entry screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let controller = match &app.state.controller {
        Some(controller) => controller,
        None => return,
    };

    // Center the passcode dialog
    let dialog = centered_rect(50, 50, area);

    // Dialog box
    let block = Block::default()
        .title(" Passcode ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    // Layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Subtitle
            Constraint::Length(3), // Dot display
            Constraint::Length(2), // Error message
            Constraint::Min(1),    // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    // Title keyed by mode and phase
    let title = Paragraph::new(controller.title_text())
        .style(theme.title())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    // Subtitle, if the mode/phase has one
    if let Some(subtitle) = controller.subtitle_text() {
        let subtitle_widget = Paragraph::new(subtitle)
            .style(theme.subtitle())
            .alignment(Alignment::Center);
        frame.render_widget(subtitle_widget, chunks[1]);
    }

    // Dot progress display
    let entered = controller.entered_count();
    let total = controller.required_length();

    let mut dots = String::new();
    dots.push_str("[ ");
    for i in 0..total {
        if i < entered {
            dots.push('\u{25CF}');
        } else {
            dots.push('\u{25CB}');
        }
        if i < total - 1 {
            dots.push(' ');
        }
    }
    dots.push_str(" ]");

    let dot_style = if controller.error_active() {
        theme.dot_error()
    } else if entered > 0 {
        theme.dot_filled()
    } else {
        theme.dot_empty()
    };

    let dots_widget = Paragraph::new(dots)
        .style(dot_style)
        .alignment(Alignment::Center);
    frame.render_widget(dots_widget, chunks[2]);

    // Error message
    if controller.error_active() {
        let error_widget = Paragraph::new(controller.error_message())
            .style(theme.danger())
            .alignment(Alignment::Center);
        frame.render_widget(error_widget, chunks[3]);
    }

    // Help text
    let help = if app.biometric.is_available() {
        "[0-9] Digit    [Backspace] Delete    [B] Biometrics    [Esc] Cancel"
    } else {
        "[0-9] Digit    [Backspace] Delete    [Esc] Cancel"
    };
    let help_widget = Paragraph::new(help)
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(help_widget, chunks[5]);
}
