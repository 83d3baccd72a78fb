//! Draws the world grid. The core carries no display data; the mapping
//! from entities to symbols and colors lives entirely here.

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::entities::JunkKind;
use crate::game::session::Session;

#[derive(Clone, Copy, PartialEq)]
enum Tile {
    Empty,
    Ship,
    Asteroid,
    Obstacle,
    Junk(JunkKind),
}

impl Tile {
    fn symbol(&self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Ship => 'S',
            Tile::Asteroid => 'A',
            Tile::Obstacle => '#',
            Tile::Junk(JunkKind::Metal) => 'M',
            Tile::Junk(JunkKind::Plastic) => 'P',
            Tile::Junk(JunkKind::Electronics) => 'E',
            Tile::Junk(JunkKind::FuelCell) => 'F',
        }
    }

    fn style(&self) -> Style {
        match self {
            Tile::Empty => Style::default().fg(Color::Rgb(60, 60, 80)),
            Tile::Ship => Style::default()
                .fg(Color::Rgb(80, 255, 80))
                .add_modifier(Modifier::BOLD),
            Tile::Asteroid => Style::default()
                .fg(Color::Rgb(255, 80, 80))
                .add_modifier(Modifier::BOLD),
            Tile::Obstacle => Style::default().fg(Color::Rgb(140, 140, 150)),
            Tile::Junk(JunkKind::Metal) => Style::default().fg(Color::Rgb(180, 180, 190)),
            Tile::Junk(JunkKind::Plastic) => Style::default().fg(Color::Rgb(220, 180, 30)),
            Tile::Junk(JunkKind::Electronics) => Style::default().fg(Color::Rgb(80, 200, 255)),
            Tile::Junk(JunkKind::FuelCell) => Style::default().fg(Color::Rgb(200, 120, 255)),
        }
    }
}

/// Stamp entities onto an empty grid. Later stamps win, so junk shows on
/// top of a co-located asteroid the way the ship's sensors would flag it.
fn build_tiles(session: &Session) -> Vec<Vec<Tile>> {
    let world = session.world();
    let (w, h) = (world.width() as usize, world.height() as usize);
    let mut tiles = vec![vec![Tile::Empty; w]; h];

    let ship = session.ship().position;
    tiles[ship.y as usize][ship.x as usize] = Tile::Ship;

    let a = session.asteroid().position;
    if world.in_bounds(a) {
        tiles[a.y as usize][a.x as usize] = Tile::Asteroid;
    }

    for &o in world.obstacles() {
        tiles[o.y as usize][o.x as usize] = Tile::Obstacle;
    }

    for junk in session.junk() {
        if !junk.collected {
            tiles[junk.position.y as usize][junk.position.x as usize] = Tile::Junk(junk.kind);
        }
    }

    tiles
}

pub fn render_game(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    messages: &[String],
    tick: u64,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" 🚀 SpaceXplorer ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(200, 120, 255))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(session.world().height() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_status_bar(frame, chunks[0], session);
    render_grid(frame, chunks[1], session, tick);
    render_messages(frame, chunks[2], messages);
    render_help_bar(frame, chunks[3]);
}

fn render_status_bar(frame: &mut Frame, area: Rect, session: &Session) {
    let ship = session.ship();
    let sep = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
    let status = Line::from(vec![
        Span::styled(
            format!(" Fuel: {}/{} ", ship.fuel, ship.max_fuel),
            Style::default()
                .fg(Color::Rgb(200, 120, 255))
                .add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled(
            format!("Health: {}/{} ", ship.health, ship.max_health),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled(
            format!(
                "Score: {}/{} ",
                session.score(),
                session.difficulty().win_score()
            ),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        sep,
        Span::styled(
            format!("{} ", session.difficulty().label()),
            Style::default().fg(Color::Cyan),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn render_grid(frame: &mut Frame, area: Rect, session: &Session, tick: u64) {
    let tiles = build_tiles(session);
    // Center the grid horizontally when the terminal is wider than it.
    let pad = (area.width as usize).saturating_sub(tiles[0].len()) / 2;

    let mut lines: Vec<Line> = Vec::with_capacity(tiles.len());
    for (y, row) in tiles.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::with_capacity(row.len() + 1);
        spans.push(Span::raw(" ".repeat(pad)));
        for (x, tile) in row.iter().enumerate() {
            // Faint starfield twinkle on empty cells.
            let span = if *tile == Tile::Empty {
                let phase = (x.wrapping_mul(7) + y.wrapping_mul(13) + tick as usize / 8) % 11;
                let (ch, style) = if phase == 0 {
                    ('·', Style::default().fg(Color::Rgb(110, 110, 140)))
                } else {
                    ('.', Tile::Empty.style())
                };
                Span::styled(String::from(ch), style)
            } else {
                Span::styled(String::from(tile.symbol()), tile.style())
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_messages(frame: &mut Frame, area: Rect, messages: &[String]) {
    if messages.is_empty() {
        return;
    }
    let line = Line::from(Span::styled(
        format!(" {}", messages.join("  ")),
        Style::default()
            .fg(Color::Rgb(255, 220, 80))
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::DarkGray);
    let sep = Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60)));
    let help = Paragraph::new(Line::from(vec![
        Span::styled(" WASD/←↑↓→ Move ", key),
        sep.clone(),
        Span::styled("I Status ", key),
        sep.clone(),
        Span::styled("U Use items ", key),
        sep,
        Span::styled("Q Quit", key),
    ]));
    frame.render_widget(help, area);
}
