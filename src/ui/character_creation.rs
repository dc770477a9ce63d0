use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shadow_legends::character::{CreationForm, PlayerClass};
use shadow_legends::core::constants::MAX_NAME_LENGTH;

pub fn draw_character_creation(f: &mut Frame, area: Rect, form: &CreationForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Input label + field
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Classes
            Constraint::Length(2), // Validation
            Constraint::Min(0),    // Filler
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let title = Paragraph::new("Create Your Hero")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let label = Paragraph::new(format!("Character Name (max {}):", MAX_NAME_LENGTH));
    f.render_widget(label, chunks[2]);

    let input_area = Rect {
        x: chunks[2].x,
        y: chunks[2].y + 1,
        width: chunks[2].width,
        height: 3,
    };
    let input_widget = Paragraph::new(format!("{}_", form.name_input))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White));
    f.render_widget(input_widget, input_area);

    let mut class_lines = vec![Line::from("Class:")];
    for class in PlayerClass::ALL.iter() {
        let stats = class.base_stats();
        let text = format!(
            "{:<8} HP {:>3}  ATK {:>2}  DEF {:>2}",
            class.name(),
            stats.hp,
            stats.atk,
            stats.defense
        );
        let line = if form.selected_class == Some(*class) {
            Line::from(Span::styled(
                format!("> {}", text),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                format!("  {}", text),
                Style::default().fg(Color::Gray),
            ))
        };
        class_lines.push(line);
    }
    f.render_widget(Paragraph::new(class_lines), chunks[4]);

    let validation_text = if let Some(error) = &form.validation_error {
        Line::from(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(Color::Red),
        ))
    } else if form.is_ready() {
        Line::from(Span::styled(
            "✓ Ready",
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from("")
    };
    f.render_widget(Paragraph::new(validation_text), chunks[5]);

    let controls = Paragraph::new("[Up/Down] Class    [Enter] Create Character    [Esc] Cancel")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(controls, chunks[7]);
}
