//! UI rendering

pub mod layout;
pub mod screens;
mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::{App, Screen};

/// Main render function - delegates to appropriate screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.state.screen {
        Screen::Passcode => screens::passcode::draw(frame, area, app),
        Screen::Summary => screens::summary::draw(frame, area, app),
    }
}
