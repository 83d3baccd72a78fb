//! Full-screen views outside of play: welcome, setup and the end-of-run
//! screen with the leaderboard.

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::session::Session;
use crate::game::turn::{LossReason, TurnState};
use crate::game::{Difficulty, MAX_NAME_LEN};
use crate::scores::Leaderboard;

const INTRO_TEXT: [&str; 4] = [
    "You are an intrepid space explorer lost in deep space.",
    "Your mission is to collect space junk, avoid the dangerous",
    "asteroid, and find your way back home.",
    "Collect enough resources to win, but watch your fuel supply!",
];

fn screen_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(title.to_string())
        .title_style(
            Style::default()
                .fg(Color::Rgb(200, 120, 255))
                .add_modifier(Modifier::BOLD),
        )
}

fn dim() -> Style {
    Style::default().fg(Color::Rgb(150, 150, 170))
}

fn accent() -> Style {
    Style::default()
        .fg(Color::Rgb(80, 200, 255))
        .add_modifier(Modifier::BOLD)
}

pub fn render_welcome(frame: &mut Frame, area: Rect) {
    let block = screen_block(" 🚀 SpaceXplorer ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "========================================",
            dim(),
        )),
        Line::from(Span::styled(
            "        WELCOME TO SPACEXPLORER        ",
            Style::default()
                .fg(Color::Rgb(255, 220, 80))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "========================================",
            dim(),
        )),
        Line::from(""),
    ];
    for text in INTRO_TEXT {
        lines.push(Line::from(Span::styled(text, dim())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Press ", dim()),
        Span::styled("any key", accent()),
        Span::styled(" to start your adventure...", dim()),
    ]));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

pub fn render_name_entry(frame: &mut Frame, area: Rect, name_buffer: &str) {
    let block = screen_block(" 🚀 SpaceXplorer ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Typed chars plus underscores for what is left.
    let typed = name_buffer.chars().count();
    let display_name = format!(
        "{}{}",
        name_buffer,
        "_".repeat(MAX_NAME_LEN.saturating_sub(typed))
    );

    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("Who is flying this ship?", dim())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ ", Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled(
                display_name,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ]", Style::default().fg(Color::Rgb(100, 100, 130))),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", accent()),
            Span::styled(" confirm  ", dim()),
            Span::styled("Esc", accent()),
            Span::styled(" quit", dim()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

pub fn render_difficulty_select(
    frame: &mut Frame,
    area: Rect,
    cursor: usize,
    messages: &[String],
) {
    let block = screen_block(" 🚀 SpaceXplorer ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Choose your difficulty", dim())),
        Line::from(""),
    ];

    for (i, &difficulty) in Difficulty::all().iter().enumerate() {
        let selected = i == cursor;
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::Rgb(255, 220, 80))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("{:<8}", difficulty.label()), style),
            Span::styled(
                format!(
                    "fuel {:<4} junk {:<3} asteroid speed {}  win at {}",
                    difficulty.starting_fuel(),
                    difficulty.junk_count(),
                    difficulty.asteroid_speed(),
                    difficulty.win_score(),
                ),
                dim(),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("↑↓", accent()),
        Span::styled(" select  ", dim()),
        Span::styled("Enter", accent()),
        Span::styled(" start  ", dim()),
        Span::styled("E/M/H", accent()),
        Span::styled(" quick start", dim()),
    ]));

    for msg in messages {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

pub fn render_game_over(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    leaderboard: &Leaderboard,
) {
    let block = screen_block(" 🚀 SpaceXplorer ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (banner, banner_style, detail) = match session.state() {
        TurnState::Won => (
            "             YOU WIN!                 ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            format!(
                "Congratulations, {}! You collected enough resources and found your way home.",
                session.player_name()
            ),
        ),
        TurnState::Lost(LossReason::OutOfFuel) => (
            "             GAME OVER                ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            "Your spaceship ran out of fuel and is now drifting forever in space.".to_string(),
        ),
        TurnState::Lost(LossReason::Collision) => (
            "             GAME OVER                ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            "Your spaceship was hit by the asteroid and was destroyed.".to_string(),
        ),
        TurnState::Aborted | TurnState::InProgress => (
            "           RUN ABANDONED              ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            format!("Safe travels, {}.", session.player_name()),
        ),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "========================================",
            dim(),
        )),
        Line::from(Span::styled(banner, banner_style)),
        Line::from(Span::styled(
            "========================================",
            dim(),
        )),
        Line::from(""),
        Line::from(Span::styled(detail, dim())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Final score: ", dim()),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(Color::Rgb(255, 215, 0))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    lines.extend(leaderboard_lines(leaderboard));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("R", accent()),
        Span::styled(" new run  ", dim()),
        Span::styled("Q", accent()),
        Span::styled(" quit", dim()),
    ]));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn leaderboard_lines(leaderboard: &Leaderboard) -> Vec<Line<'static>> {
    let entries = leaderboard.entries();
    if entries.is_empty() {
        return vec![Line::from(Span::styled("No high scores yet.", dim()))];
    }

    let header_style = Style::default()
        .fg(Color::Rgb(80, 200, 255))
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled("═══════════ LEADERBOARD ═══════════", header_style)),
        Line::from(Span::styled(
            format!("{:<4} {:<19} {:>6}  {:<6}", "Rank", "Name", "Score", "Mode"),
            header_style,
        )),
    ];
    for (i, entry) in entries.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!(
                "{:<4} {:<19} {:>6}  {:<6}",
                i + 1,
                entry.name,
                entry.score,
                entry.difficulty.label()
            ),
            Style::default().fg(Color::White),
        )));
    }
    lines
}
