use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::{Completed, Grade};

const QUESTION_PREVIEW_LENGTH: usize = 70;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(state) = app.completed() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], state);
    render_question_review(frame, chunks[2], state, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn get_grade_color(grade: Grade) -> Color {
    match grade {
        Grade::Excellent => Color::Green,
        Grade::Good => Color::Yellow,
        Grade::KeepStudying => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, state: &Completed) {
    let grade = state.grade();
    let grade_color = get_grade_color(grade);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", state.score_percentage()),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(Span::styled(
            grade.label(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "You scored {} out of {} questions correctly",
                state.score(),
                state.quiz().len()
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_review(frame: &mut Frame, area: Rect, state: &Completed, scroll: usize) {
    let mut lines: Vec<Line> = Vec::new();

    for (index, entry) in state.review().iter().enumerate() {
        let (symbol, color) = if entry.is_correct {
            ("✓", Color::Green)
        } else {
            ("✕", Color::Red)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                truncate_question(entry.question.question()),
                Style::default().fg(Color::White),
            ),
        ]));

        lines.push(Line::from(vec![
            Span::raw("       Your answer: ").fg(Color::DarkGray),
            Span::styled(
                entry.user_answer.unwrap_or("No answer").to_string(),
                Style::default().fg(color),
            ),
        ]));

        if !entry.is_correct {
            lines.push(Line::from(vec![
                Span::raw("       Correct answer: ").fg(Color::DarkGray),
                Span::styled(
                    entry.correct_answer.to_string(),
                    Style::default().fg(Color::Green),
                ),
            ]));
        }

        lines.push(Line::from(""));
    }

    // Scroll moves one question at a time.
    let offset: usize = state
        .review()
        .iter()
        .take(scroll)
        .map(|entry| if entry.is_correct { 3 } else { 4 })
        .sum();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((offset as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r retake  ·  n new quiz  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_question() {
        assert_eq!(truncate_question("short"), "short");
        let long = "x".repeat(QUESTION_PREVIEW_LENGTH + 5);
        let cut = truncate_question(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
    }
}
