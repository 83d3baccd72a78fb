pub mod map;
pub mod screens;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Screen};
use crate::game::session::Session;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    match app.screen {
        Screen::Welcome => screens::render_welcome(frame, area),
        Screen::NameEntry => screens::render_name_entry(frame, area, &app.name_buffer),
        Screen::DifficultySelect => {
            screens::render_difficulty_select(frame, area, app.difficulty_cursor, &app.messages)
        }
        Screen::Playing => {
            if let Some(session) = &app.session {
                map::render_game(frame, area, session, &app.messages, app.tick);
                if app.show_status {
                    render_status_overlay(frame, area, session);
                }
                if app.show_use_menu {
                    render_use_menu(frame, area, session);
                }
            }
        }
        Screen::GameOver => {
            if let Some(session) = &app.session {
                screens::render_game_over(frame, area, session, &app.leaderboard);
            }
        }
    }
}

fn overlay_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

fn render_status_overlay(frame: &mut Frame, area: Rect, session: &Session) {
    let overlay = overlay_rect(area, 40, 16);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(80, 200, 255)))
        .title(" 🛰 Ship Status ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(80, 200, 255))
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let ship = session.ship();
    let label = Style::default().fg(Color::Rgb(150, 150, 170));
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("  SHIP", label)),
        Line::from(vec![
            Span::styled("  Fuel:        ", label),
            Span::styled(format!("{}/{}", ship.fuel, ship.max_fuel), value),
        ]),
        Line::from(vec![
            Span::styled("  Health:      ", label),
            Span::styled(format!("{}/{}", ship.health, ship.max_health), value),
        ]),
        Line::from(vec![
            Span::styled("  Score:       ", label),
            Span::styled(session.score().to_string(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled("  INVENTORY", label)),
        Line::from(vec![
            Span::styled("  Metal:       ", label),
            Span::styled(ship.metal.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("  Plastic:     ", label),
            Span::styled(ship.plastic.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("  Electronics: ", label),
            Span::styled(ship.electronics.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("  Fuel cells:  ", label),
            Span::styled(ship.fuel_cells.to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Score to win: ", label),
            Span::styled(
                session.difficulty().win_score().to_string(),
                Style::default().fg(Color::Rgb(255, 215, 0)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Any key to close", label)),
    ];
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(Color::Rgb(15, 15, 25))),
        inner,
    );
}

fn render_use_menu(frame: &mut Frame, area: Rect, session: &Session) {
    let overlay = overlay_rect(area, 40, 9);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 220, 80)))
        .title(" 🔧 Use Item ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(255, 220, 80))
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let ship = session.ship();
    let key = Style::default()
        .fg(Color::Rgb(80, 200, 255))
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::Rgb(180, 180, 200));
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  1 ", key),
            Span::styled(format!("Metal (repair ship)    x{}", ship.metal), text),
        ]),
        Line::from(vec![
            Span::styled("  2 ", key),
            Span::styled(format!("Fuel cell (refuel)     x{}", ship.fuel_cells), text),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  3", key),
            Span::styled("/", text),
            Span::styled("Esc ", key),
            Span::styled("Cancel", text),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(Color::Rgb(15, 15, 25))),
        inner,
    );
}
