mod character_creation;
mod combat_scene;
mod info_panel;
mod inventory_scene;
mod menu_scene;
mod stats_panel;
mod world_scene;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shadow_legends::core::{GameFlow, Session};

/// Draws the screen for the session's current state.
pub fn draw_ui(frame: &mut Frame, session: &Session) {
    let size = frame.size();

    match session.flow() {
        GameFlow::MainMenu => menu_scene::draw_main_menu(frame, size, session),
        GameFlow::CharacterCreation => {
            character_creation::draw_character_creation(frame, size, &session.creation)
        }
        GameFlow::GameOver => menu_scene::draw_game_over(frame, size, session),
        GameFlow::Exploring | GameFlow::Combat | GameFlow::Inventory | GameFlow::Paused => {
            draw_game(frame, size, session)
        }
    }
}

/// Stats on the left, the active scene on the right, controls at the bottom.
fn draw_game(frame: &mut Frame, area: Rect, session: &Session) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Stats + scene
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(32), // Stats panel
            Constraint::Min(0),     // Scene
        ])
        .split(v_chunks[0]);

    stats_panel::draw_stats_panel(frame, chunks[0], session);

    match session.flow() {
        GameFlow::Combat => combat_scene::draw_combat_scene(frame, chunks[1], session),
        GameFlow::Inventory => inventory_scene::draw_inventory(frame, chunks[1], session),
        _ => world_scene::draw_world(frame, chunks[1], session),
    }

    if session.flow() == GameFlow::Paused {
        menu_scene::draw_pause_menu(frame, chunks[1], session);
    }

    draw_footer(frame, v_chunks[1], session.flow());
}

fn draw_footer(frame: &mut Frame, area: Rect, flow: GameFlow) {
    let controls: &[(&str, &str)] = match flow {
        GameFlow::Exploring => &[("Arrows", "Move"), ("I", "Inventory"), ("Esc", "Pause")],
        GameFlow::Combat => &[("Left/Right", "Choose"), ("Enter", "Act"), ("1-2", "Quick pick")],
        GameFlow::Inventory => &[("Up/Down", "Select"), ("Enter", "Use"), ("Esc", "Back")],
        GameFlow::Paused => &[("Up/Down", "Select"), ("Enter", "Confirm"), ("Esc", "Resume")],
        _ => &[],
    };

    let mut spans = vec![Span::styled(
        "Controls: ",
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" = {}", action)));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Centered rect of the given size, clipped to `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Color for an hp ratio, green to red.
fn hp_color(ratio: f64) -> Color {
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}
