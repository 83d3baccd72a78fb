use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::thread_rng;

use crate::config::WorldConfig;
use crate::game::session::Session;
use crate::game::{Command, Difficulty, Direction, MAX_NAME_LEN};
use crate::scores::Leaderboard;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    NameEntry,
    DifficultySelect,
    Playing,
    GameOver,
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub config: WorldConfig,
    pub session: Option<Session>,
    pub leaderboard: Leaderboard,
    pub name_buffer: String,
    pub difficulty_cursor: usize,
    /// 'I' overlay: ship status and inventory.
    pub show_status: bool,
    /// 'U' overlay: the use-item menu.
    pub show_use_menu: bool,
    /// Lines describing the last turn's events, shown until the next key.
    pub messages: Vec<String>,
    pub tick: u64,
}

impl App {
    pub fn new() -> Self {
        let config = WorldConfig::load(&WorldConfig::default_path()).unwrap_or_default();
        Self {
            should_quit: false,
            screen: Screen::Welcome,
            config,
            session: None,
            leaderboard: Leaderboard::load(),
            name_buffer: String::new(),
            difficulty_cursor: 0,
            show_status: false,
            show_use_menu: false,
            messages: Vec::new(),
            tick: 0,
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Welcome => self.screen = Screen::NameEntry,
            Screen::NameEntry => self.handle_name_entry(key),
            Screen::DifficultySelect => self.handle_difficulty_select(key),
            Screen::Playing => self.handle_playing(key),
            Screen::GameOver => self.handle_game_over(key),
        }
    }

    fn handle_name_entry(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.screen = Screen::DifficultySelect,
            KeyCode::Backspace => {
                self.name_buffer.pop();
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                let printable = c.is_ascii_graphic() || c == ' ';
                if printable && self.name_buffer.chars().count() < MAX_NAME_LEN {
                    self.name_buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_difficulty_select(&mut self, key: KeyEvent) {
        let count = Difficulty::all().len();
        match key.code {
            KeyCode::Up => self.difficulty_cursor = (self.difficulty_cursor + count - 1) % count,
            KeyCode::Down => self.difficulty_cursor = (self.difficulty_cursor + 1) % count,
            KeyCode::Char('e') | KeyCode::Char('E') => self.start_run(Difficulty::Easy),
            KeyCode::Char('m') | KeyCode::Char('M') => self.start_run(Difficulty::Medium),
            KeyCode::Char('h') | KeyCode::Char('H') => self.start_run(Difficulty::Hard),
            KeyCode::Enter => self.start_run(Difficulty::all()[self.difficulty_cursor]),
            KeyCode::Esc => self.screen = Screen::NameEntry,
            _ => {}
        }
    }

    fn start_run(&mut self, difficulty: Difficulty) {
        self.difficulty_cursor = difficulty.index() as usize;
        let mut rng = thread_rng();
        match Session::new(
            &self.name_buffer,
            difficulty,
            self.config.width,
            self.config.height,
            &mut rng,
        ) {
            Ok(session) => {
                self.session = Some(session);
                self.leaderboard.clear_submitted();
                self.messages.clear();
                self.show_status = false;
                self.show_use_menu = false;
                self.screen = Screen::Playing;
            }
            Err(err) => {
                self.messages = vec![err.to_string()];
            }
        }
    }

    fn handle_playing(&mut self, key: KeyEvent) {
        if self.show_status {
            // Any key dismisses the status overlay.
            self.show_status = false;
            return;
        }
        if self.show_use_menu {
            self.handle_use_menu(key);
            return;
        }

        let command = match key.code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                Some(Command::Move(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                Some(Command::Move(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                Some(Command::Move(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                Some(Command::Move(Direction::Right))
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.show_status = true;
                None
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                self.show_use_menu = true;
                None
            }
            _ => None,
        };

        if let Some(command) = command {
            self.run_command(command);
        }
    }

    fn handle_use_menu(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('1') => {
                self.show_use_menu = false;
                self.run_command(Command::Repair);
            }
            KeyCode::Char('2') => {
                self.show_use_menu = false;
                self.run_command(Command::Refuel);
            }
            KeyCode::Char('3') | KeyCode::Esc => self.show_use_menu = false,
            _ => {}
        }
    }

    fn run_command(&mut self, command: Command) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        self.messages.clear();
        match session.execute(command) {
            Ok(report) => {
                self.messages
                    .extend(report.events.iter().map(|e| e.to_string()));
            }
            Err(err) => self.messages.push(err.to_string()),
        }
        if session.state().is_terminal() {
            self.finish_run();
        }
    }

    fn finish_run(&mut self) {
        if let Some(session) = &self.session {
            self.leaderboard
                .submit(session.player_name(), session.score(), session.difficulty());
        }
        self.show_status = false;
        self.show_use_menu = false;
        self.screen = Screen::GameOver;
    }

    fn handle_game_over(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                self.screen = Screen::DifficultySelect;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
