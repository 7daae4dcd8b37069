use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);
    render_input(frame, chunks[1], app.input());
    render_char_count(frame, chunks[2], app.input_char_count());

    if let Some(error) = app.error() {
        let widget = Paragraph::new(error)
            .alignment(Alignment::Center)
            .fg(Color::Red);
        frame.render_widget(widget, chunks[3]);
    }

    render_controls(frame, chunks[4]);
}

pub fn render_generating(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Generating your quiz...",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("this can take a few seconds".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "QUIZIFY",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Turn your notes into a 10 question quiz".fg(Color::DarkGray)),
        Line::from(""),
        Line::from("Your study material".fg(Color::White)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let widget = if input.is_empty() {
        Paragraph::new("Paste lecture notes, a textbook chapter or a study guide...")
            .fg(Color::DarkGray)
    } else {
        Paragraph::new(input).fg(Color::Gray)
    };

    // Keep the end of long input in view.
    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(4).max(1) as usize;
    let lines: usize = input
        .split('\n')
        .map(|line| line.chars().count().div_ceil(inner_width).max(1))
        .sum();
    let scroll = lines.saturating_sub(inner_height) as u16;

    let widget = widget
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_char_count(frame: &mut Frame, area: Rect, count: usize) {
    let widget = Paragraph::new(format!("{} characters", count))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("type or paste  ·  ctrl+g generate  ·  esc quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
