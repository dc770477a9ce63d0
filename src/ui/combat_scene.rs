use super::{hp_color, info_panel};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use shadow_legends::character::Combatant;
use shadow_legends::combat::{CombatAction, CombatPhase, CombatState};
use shadow_legends::core::Session;

pub fn draw_combat_scene(frame: &mut Frame, area: Rect, session: &Session) {
    let (Some(player), Some(enemy)) = (&session.player, session.current_enemy()) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Enemy HP
            Constraint::Length(3), // Arena
            Constraint::Length(3), // Message
            Constraint::Length(3), // Actions
            Constraint::Min(0),    // Log
        ])
        .split(area);

    draw_hp_gauge(
        frame,
        chunks[0],
        &enemy.combatant,
        &format!("{} ({})", enemy.combatant.name, enemy.kind.template().tag),
    );
    draw_arena(frame, chunks[1], &player.combatant, &enemy.combatant);
    draw_message(frame, chunks[2], &session.combat);
    draw_actions(frame, chunks[3], &session.combat);
    info_panel::draw_combat_log(frame, chunks[4], &session.combat);
}

fn draw_hp_gauge(frame: &mut Frame, area: Rect, combatant: &Combatant, title: &str) {
    let ratio = combatant.hp_ratio();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .gauge_style(Style::default().fg(hp_color(ratio)).add_modifier(Modifier::BOLD))
        .label(format!("HP: {}/{}", combatant.hp, combatant.hp_max))
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

/// Sprites flash white for a moment after taking a hit.
fn sprite_style(combatant: &Combatant, base: Color) -> Style {
    let color = if !combatant.is_alive() {
        Color::DarkGray
    } else if combatant.hit_flash > 0.0 {
        Color::White
    } else {
        base
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_arena(frame: &mut Frame, area: Rect, player: &Combatant, enemy: &Combatant) {
    let arena = Paragraph::new(Line::from(vec![
        Span::styled("@", sprite_style(player, Color::Cyan)),
        Span::raw("      vs      "),
        Span::styled("E", sprite_style(enemy, Color::Red)),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    frame.render_widget(arena, area);
}

fn draw_message(frame: &mut Frame, area: Rect, combat: &CombatState) {
    let (title, color) = match combat.phase {
        CombatPhase::Victory => (" Victory! [Enter] Continue ", Color::Green),
        CombatPhase::Defeat => (" Defeat [Enter] Continue ", Color::Red),
        _ => (" Battle ", Color::Yellow),
    };
    let message = Paragraph::new(combat.message.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title),
        )
        .alignment(Alignment::Center);
    frame.render_widget(message, area);
}

fn draw_actions(frame: &mut Frame, area: Rect, combat: &CombatState) {
    let enabled = combat.is_player_turn();
    let mut spans = Vec::new();
    for (i, action) in CombatAction::ALL.iter().enumerate() {
        let label = format!(" {}. {} ", i + 1, action.label());
        let style = if !enabled {
            Style::default().fg(Color::DarkGray)
        } else if i == combat.selected_action {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("   "));
    }
    let actions = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(combat.phase.name()))
        .alignment(Alignment::Center);
    frame.render_widget(actions, area);
}
