//! UI rendering using ratatui
//!
//! One screen: root word, input line, score, accepted words, and an alert
//! overlay after a rejected submission.

use crate::app::{Alert, App};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const FORMULA: &str = "Formula: <# words> * (1 + <# letters> / 100)";

/// Render the game screen
pub fn render(frame: &mut Frame, app: &App<'_>) {
    let area = frame.area();
    let has_words = !app.game().history().is_empty();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                               // Title
            Constraint::Length(3),                               // Root word
            Constraint::Length(3),                               // Input
            Constraint::Length(if has_words { 4 } else { 0 }),   // Score
            Constraint::Min(3),                                  // Accepted words
            Constraint::Length(1),                               // Footer
        ])
        .margin(1)
        .split(area);

    render_title(frame, layout[0], app.round());
    render_root(frame, layout[1], app.game().root().as_str());
    render_input(frame, layout[2], &app.input);
    if has_words {
        render_score(frame, layout[3], app.game().score());
    }
    render_history(frame, layout[4], app.game().history());

    let footer = Paragraph::new("Enter Submit  Ctrl-R Restart  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[5]);

    if let Some(alert) = &app.alert {
        render_alert(frame, area, alert);
    }
}

fn render_title(frame: &mut Frame, area: Rect, round: u32) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(14), Constraint::Length(10)])
        .split(inner);

    let title = Paragraph::new("WordScramble")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, columns[0]);

    let round = Paragraph::new(format!("Round {}", round))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    frame.render_widget(round, columns[1]);
}

fn render_root(frame: &mut Frame, area: Rect, root: &str) {
    let text = vec![
        Line::from("Use the letters in"),
        Line::from(format_root(root)).style(Style::default().fg(Color::Cyan).bold()),
        Line::from("to create new words."),
    ];
    let prompt = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(prompt, area);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let line = if input.is_empty() {
        Line::from(Span::styled(
            "Enter your word",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(format!("> {}_", input))
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(input, area);
}

fn render_score(frame: &mut Frame, area: Rect, score: f64) {
    let text = vec![
        Line::from(format_score(score)).style(Style::default().fg(Color::Magenta).bold()),
        Line::from(FORMULA).style(Style::default().fg(Color::DarkGray)),
    ];
    let score = Paragraph::new(text).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(score, area);
}

/// Accepted words, most recent first, numbered oldest = 1
fn render_history(frame: &mut Frame, area: Rect, history: &[String]) {
    let items: Vec<ListItem> = history_rows(history)
        .into_iter()
        .map(|(length, word, number)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("({:>2}) ", length), Style::default().fg(Color::Cyan)),
                Span::raw(format!("{:<20}", word)),
                Span::styled(format!("{:>4}", number), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Words"),
    );
    frame.render_widget(list, area);
}

fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let popup = centered_rect(area, 50, 7);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[ Shucks, OK ]",
            Style::default().fg(Color::Yellow).bold(),
        )),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(alert.title.as_str()),
        );
    frame.render_widget(dialog, popup);
}

/// A rect of at most `width` x `height` centered in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Format the root word for display: "S C R A M B L E"
fn format_root(root: &str) -> String {
    root.chars()
        .flat_map(char::to_uppercase)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_score(score: f64) -> String {
    format!("Score: {:.2}", score)
}

/// (length, word, 1-based insertion number) for each accepted word
fn history_rows(history: &[String]) -> Vec<(usize, &str, usize)> {
    history
        .iter()
        .enumerate()
        .map(|(i, word)| (word.chars().count(), word.as_str(), history.len() - i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Validator, WordList};
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn new_app() -> App<'static> {
        App::new(
            GameState::start("scramble").unwrap(),
            Validator::new(WordList::english(), "en"),
        )
    }

    #[test]
    fn test_format_root() {
        assert_eq!(format_root("scramble"), "S C R A M B L E");
        assert_eq!(format_root("a"), "A");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.0), "Score: 0.00");
        assert_eq!(format_score(2.12), "Score: 2.12");
        assert_eq!(format_score(3.189), "Score: 3.19");
    }

    #[test]
    fn test_history_rows_number_oldest_first() {
        let history = vec!["arm".to_string(), "amble".to_string(), "cab".to_string()];
        assert_eq!(
            history_rows(&history),
            vec![(3, "arm", 3), (5, "amble", 2), (3, "cab", 1)]
        );
    }

    #[test]
    fn test_centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered_rect(area, 50, 7);
        assert_eq!(popup, Rect::new(0, 0, 20, 5));

        let popup = centered_rect(Rect::new(0, 0, 70, 30), 50, 7);
        assert_eq!(popup, Rect::new(10, 11, 50, 7));
    }

    #[test]
    fn test_render_fresh_game() {
        let screen = screen_text(&new_app());
        assert!(screen.contains("WordScramble"));
        assert!(screen.contains("S C R A M B L E"));
        assert!(screen.contains("Enter your word"));
        assert!(!screen.contains("Score:"));
    }

    #[test]
    fn test_render_score_after_words() {
        let mut app = new_app();
        for c in "cab".chars() {
            app.on_char(c);
        }
        app.on_submit();

        let screen = screen_text(&app);
        assert!(screen.contains("Score: 1.03"));
        assert!(screen.contains("Formula:"));
        assert!(screen.contains("cab"));
    }

    #[test]
    fn test_render_alert() {
        let mut app = new_app();
        for c in "am".chars() {
            app.on_char(c);
        }
        app.on_submit();

        let screen = screen_text(&app);
        assert!(screen.contains("Try again!"));
        assert!(screen.contains("Shucks, OK"));
    }
}
