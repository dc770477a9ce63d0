use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shadow_legends::character::{Combatant, EnemyKind, Position};
use shadow_legends::core::constants::ENTITY_SIZE;
use shadow_legends::core::Session;

/// Top-down map scaled to fit the panel.
pub fn draw_world(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" World - {} enemies ", session.world.enemies.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let cols = inner.width as usize;
    let rows = inner.height as usize;
    let mut grid: Vec<Vec<(char, Style)>> =
        vec![vec![('.', Style::default().fg(Color::DarkGray)); cols]; rows];

    let world = &session.world;
    let mut plot = |position: Position, glyph: char, style: Style| {
        let cx = position.x + ENTITY_SIZE / 2.0;
        let cy = position.y + ENTITY_SIZE / 2.0;
        let col = ((cx / world.width) * cols as f64) as usize;
        let row = ((cy / world.height) * rows as f64) as usize;
        grid[row.min(rows - 1)][col.min(cols - 1)] = (glyph, style);
    };

    for enemy in &world.enemies {
        let (glyph, color) = match enemy.kind {
            EnemyKind::WildWolf => ('w', Color::LightRed),
            EnemyKind::Bandit => ('b', Color::Red),
        };
        plot(
            enemy.combatant.position,
            glyph,
            entity_style(&enemy.combatant, color),
        );
    }
    if let Some(player) = &session.player {
        plot(
            player.combatant.position,
            '@',
            entity_style(&player.combatant, Color::Cyan),
        );
    }

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(glyph, style)| Span::styled(glyph.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn entity_style(combatant: &Combatant, base: Color) -> Style {
    let color = if combatant.hit_flash > 0.0 {
        Color::White
    } else {
        base
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
