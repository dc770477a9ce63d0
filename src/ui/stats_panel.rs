use super::hp_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use shadow_legends::character::{xp_threshold, Player};
use shadow_legends::core::Session;
use shadow_legends::quests::ObjectiveKind;

/// Left column: character sheet and quest log.
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let Some(player) = &session.player else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // HP
            Constraint::Length(3), // XP
            Constraint::Length(6), // Stats
            Constraint::Min(0),    // Quests
        ])
        .split(area);

    draw_header(frame, chunks[0], player);
    draw_hp(frame, chunks[1], player);
    draw_xp(frame, chunks[2], player);
    draw_stats(frame, chunks[3], player);
    draw_quests(frame, chunks[4], player);
}

fn draw_header(frame: &mut Frame, area: Rect, player: &Player) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            player.name().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  Lv.{} {}",
            player.combatant.level, player.class
        )),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Character"));
    frame.render_widget(header, area);
}

fn draw_hp(frame: &mut Frame, area: Rect, player: &Player) {
    let c = &player.combatant;
    let ratio = c.hp_ratio();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("HP"))
        .gauge_style(Style::default().fg(hp_color(ratio)).add_modifier(Modifier::BOLD))
        .label(format!("{}/{}", c.hp, c.hp_max))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

fn draw_xp(frame: &mut Frame, area: Rect, player: &Player) {
    let c = &player.combatant;
    let needed = xp_threshold(c.level);
    let ratio = (c.experience as f64 / needed as f64).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("XP"))
        .gauge_style(Style::default().fg(Color::Magenta))
        .label(format!("{}/{}", c.experience, needed))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

fn draw_stats(frame: &mut Frame, area: Rect, player: &Player) {
    let c = &player.combatant;
    let lines = vec![
        Line::from(format!("ATK:  {}", c.atk)),
        Line::from(format!("DEF:  {}", c.defense)),
        Line::from(Span::styled(
            format!("Gold: {}", player.gold),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(format!("Items: {}", player.inventory.len())),
    ];
    let stats = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(stats, area);
}

fn draw_quests(frame: &mut Frame, area: Rect, player: &Player) {
    let mut lines = Vec::new();
    for quest in &player.quests {
        let style = if quest.is_completed() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        let mark = if quest.is_completed() { "✓" } else { "•" };
        lines.push(Line::from(Span::styled(
            format!("{} {}", mark, quest.name),
            style.add_modifier(Modifier::BOLD),
        )));
        for (target, needed) in quest
            .requirements()
            .get(&ObjectiveKind::Enemies)
            .into_iter()
            .flatten()
        {
            let done = quest.progress(ObjectiveKind::Enemies, target).min(*needed);
            lines.push(Line::from(Span::styled(
                format!("  {}: {}/{}", target, done, needed),
                Style::default().fg(Color::Gray),
            )));
        }
    }
    let quests = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Quests"));
    frame.render_widget(quests, area);
}
