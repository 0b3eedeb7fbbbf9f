//! Summary screen shown once an interaction has resolved

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, SessionOutcome};
use crate::ui::layout::centered_rect;

/// Draw the interaction summary screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let dialog = centered_rect(50, 40, area);

    let block = Block::default()
        .title(" Passlock ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(2), // Outcome
            Constraint::Length(2), // Detail
            Constraint::Min(1),    // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let (outcome_text, outcome_style) = match &app.state.outcome {
        Some(SessionOutcome::Succeeded { .. }) => ("Success", theme.success()),
        Some(SessionOutcome::Cancelled) => ("Cancelled", theme.text_secondary()),
        None => ("No session", theme.text_muted()),
    };

    let outcome_widget = Paragraph::new(outcome_text)
        .style(outcome_style)
        .alignment(Alignment::Center);
    frame.render_widget(outcome_widget, chunks[0]);

    // Detail line: the code itself is never displayed, only its shape
    let detail = match (&app.state.outcome, &app.state.status_message) {
        (Some(SessionOutcome::Succeeded { via_biometrics: true, .. }), _) => {
            "Unlocked with biometrics".to_string()
        }
        (Some(SessionOutcome::Succeeded { digits, .. }), _) => {
            format!("{}-digit passcode accepted", digits)
        }
        (_, Some(status)) => status.clone(),
        _ => String::new(),
    };
    let detail_widget = Paragraph::new(detail)
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(detail_widget, chunks[1]);

    let help_widget = Paragraph::new("[C] Create    [V] Verify    [N] Change    [Q] Quit")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(help_widget, chunks[3]);
}
