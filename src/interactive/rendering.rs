//! TUI rendering with ratatui
//!
//! Visualizations for a human-vs-AI Hit and Blow match.

use super::app::{App, MessageStyle};
use crate::output::formatters::outcome_pegs;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // History
            Constraint::Percentage(45), // AI and messages
        ])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 HIT AND BLOW - You vs AI")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let digits = app.config.digits;
    let players = app.game.players();

    let items: Vec<ListItem> = app
        .game
        .history()
        .iter()
        .rev()
        .map(|record| {
            let player = &players[record.seat];
            let color = if player.is_ai() {
                Color::Magenta
            } else {
                Color::Yellow
            };
            let mut spans = vec![
                Span::raw(format!("{:3}. ", record.turn)),
                Span::styled(format!("{:<10}", player.to_string()), Style::default().fg(color)),
                Span::styled(
                    record.guess.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(outcome_pegs(record.outcome, digits), Style::default().fg(Color::Green)),
                Span::raw(format!(
                    "  Hit {} Blow {}",
                    record.outcome.hit(),
                    record.outcome.blow()
                )),
            ];
            if let Some(remaining) = record.ai_candidates {
                spans.push(Span::styled(
                    format!("  [{remaining}]"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" History (newest first, [AI candidates]) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // AI state
            Constraint::Length(3), // Thinking gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_ai_panel(f, app, chunks[0]);
    render_thinking(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_ai_panel(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.ai_candidates();
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Candidates: "),
            Span::styled(
                candidates.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Uncertainty: {:.2} bits",
            (candidates.max(1) as f64).log2()
        )),
    ];

    if let Some(source) = app.last_ai_source {
        lines.push(Line::from(format!("Last move:   {source}")));
    }

    if let Some(solver) = app.game.solver()
        && (2..=6).contains(&solver.size())
    {
        let shown: Vec<String> = solver
            .candidates()
            .codes()
            .iter()
            .map(ToString::to_string)
            .collect();
        lines.push(Line::from(Span::styled(
            format!("Closing in: {}", shown.join(" ")),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" AI ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(paragraph, area);
}

fn render_thinking(f: &mut Frame, app: &App, area: Rect) {
    let (percent, label) = match app.thinking.snapshot() {
        Some(progress) => (
            (progress.fraction() * 100.0).min(100.0) as u16,
            format!("thinking... {}/{}", progress.examined, progress.total),
        ),
        None => (0, "idle".to_string()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" AI Search ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = if app.game.is_over() {
        (" Match over | 'n' new match, 'q' quit ", Color::Green)
    } else if app.ai_to_move() {
        (" AI is thinking... ", Color::Magenta)
    } else {
        (" Your guess (digits, Enter to submit) ", Color::Yellow)
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode_text = format!("{} vs AI | {} digits", app.human(), app.config.digits);
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Matches: {} | You: {} | AI: {}",
        app.stats.matches, app.stats.human_wins, app.stats.ai_wins
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("q: Quit | n: New Match | Enter: Submit | Backspace: Delete")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_fresh_match() {
        let app = App::new(SolverConfig::new(4), Some(3)).unwrap();
        let text = screen(&app);

        assert!(text.contains("HIT AND BLOW"));
        assert!(text.contains("5040"));
        assert!(text.contains("idle"));
    }

    #[test]
    fn renders_played_turns() {
        let mut app = App::new(SolverConfig::new(3), Some(3)).unwrap();
        app.input_buffer = "789".to_string();
        app.submit_guess();

        let text = screen(&app);
        assert!(text.contains("789"));
        assert!(text.contains("Hit"));
    }
}
