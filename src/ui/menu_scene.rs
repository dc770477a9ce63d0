use super::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use shadow_legends::core::{MainMenuOption, PauseOption, Session};

fn option_lines<'a>(labels: impl Iterator<Item = &'a str>, selected: usize) -> Vec<Line<'a>> {
    labels
        .enumerate()
        .map(|(i, label)| {
            if i == selected {
                Line::from(Span::styled(
                    format!("> {} <", label),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    label.to_string(),
                    Style::default().fg(Color::Gray),
                ))
            }
        })
        .collect()
}

fn status_line(session: &Session) -> Line<'static> {
    match &session.status_message {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Magenta),
        )),
        None => Line::from(""),
    }
}

pub fn draw_main_menu(frame: &mut Frame, area: Rect, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Options
            Constraint::Length(2), // Status
            Constraint::Min(0),
            Constraint::Length(1), // Controls
        ])
        .split(area);

    let title = Paragraph::new("SHADOW LEGENDS")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let options = option_lines(
        MainMenuOption::ALL.iter().map(|o| o.label()),
        session.main_menu.index,
    );
    frame.render_widget(
        Paragraph::new(options).alignment(Alignment::Center),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(status_line(session)).alignment(Alignment::Center),
        chunks[3],
    );

    let controls = Paragraph::new("[Up/Down] Select    [Enter] Confirm")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(controls, chunks[5]);
}

/// Overlay drawn on top of the frozen world.
pub fn draw_pause_menu(frame: &mut Frame, area: Rect, session: &Session) {
    let popup = centered_rect(30, 9, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Paused ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines = vec![Line::from("")];
    lines.extend(option_lines(
        PauseOption::ALL.iter().map(|o| o.label()),
        session.pause_menu.index,
    ));
    lines.push(Line::from(""));
    lines.push(status_line(session));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

pub fn draw_game_over(frame: &mut Frame, area: Rect, session: &Session) {
    let popup = centered_rect(40, 8, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Game Over ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let summary = match &session.player {
        Some(player) => format!(
            "{} fell at level {} with {} gold.",
            player.name(),
            player.combatant.level,
            player.gold
        ),
        None => String::new(),
    };
    let lines = vec![
        Line::from(Span::styled(
            "You have been defeated.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(summary),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Main Menu",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
