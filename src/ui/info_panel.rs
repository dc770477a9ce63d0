use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shadow_legends::combat::CombatState;

/// Combat log, newest first.
pub fn draw_combat_log(frame: &mut Frame, area: Rect, combat: &CombatState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Log ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max_width = inner.width as usize;
    let lines: Vec<Line> = combat
        .combat_log
        .iter()
        .rev()
        .take(inner.height as usize)
        .map(|entry| {
            let color = match (entry.is_player_action, entry.is_crit) {
                (true, true) => Color::Yellow,
                (true, false) => Color::Green,
                (false, _) => Color::Red,
            };
            let modifier = if entry.is_crit {
                Modifier::BOLD
            } else {
                Modifier::empty()
            };
            let msg = if entry.message.chars().count() > max_width {
                let cut: String = entry.message.chars().take(max_width.saturating_sub(1)).collect();
                format!("{}…", cut)
            } else {
                entry.message.clone()
            };
            Line::from(Span::styled(msg, Style::default().fg(color).add_modifier(modifier)))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
