use crossterm::event::KeyCode;

/// Events that can occur in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Quit the application
    Quit,
    /// Re-collect immediately
    Refresh,
    /// Toggle help overlay
    ToggleHelp,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    /// No action
    None,
}

pub fn map_key(code: KeyCode) -> DashboardEvent {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => DashboardEvent::Quit,
        KeyCode::Char('r') => DashboardEvent::Refresh,
        KeyCode::Char('?') | KeyCode::Char('h') => DashboardEvent::ToggleHelp,
        KeyCode::Up | KeyCode::Char('k') => DashboardEvent::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => DashboardEvent::ScrollDown,
        KeyCode::PageUp => DashboardEvent::PageUp,
        KeyCode::PageDown => DashboardEvent::PageDown,
        KeyCode::Home => DashboardEvent::ScrollTop,
        _ => DashboardEvent::None,
    }
}
