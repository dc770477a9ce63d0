use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shadow_legends::core::Session;

pub fn draw_inventory(frame: &mut Frame, area: Rect, session: &Session) {
    let Some(player) = &session.player else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Items
            Constraint::Length(3), // Status
        ])
        .split(area);

    let lines: Vec<Line> = if player.inventory.is_empty() {
        vec![Line::from(Span::styled(
            "Your pack is empty.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        player
            .inventory
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let selected = i == session.inventory_cursor.index;
                let marker = if selected { "> " } else { "  " };
                let name_style = if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(format!("{}{:<16}", marker, item.name), name_style),
                    Span::styled(
                        format!("{:<11}", item.category.name()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        format!("{:>4}g  ", item.value),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(item.description.clone(), Style::default().fg(Color::Gray)),
                ])
            })
            .collect()
    };

    let items = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Inventory ({}) ", player.inventory.len())),
    );
    frame.render_widget(items, chunks[0]);

    let status = Paragraph::new(session.status_message.clone().unwrap_or_default())
        .style(Style::default().fg(Color::Magenta))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);
}
