//! TUI application state and logic

use crate::engine::{GameEngine, Notice};
use crate::persist::SaveStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Application state
///
/// The engine owns all game state; the App owns only UI state (typed input,
/// message log, quit flag) and translates key events into engine operations.
pub struct App<S: SaveStore> {
    pub engine: GameEngine<S>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: SaveStore> App<S> {
    #[must_use]
    pub fn new(engine: GameEngine<S>) -> Self {
        let restored = !engine.snapshot().rows.is_empty();

        let mut app = Self {
            engine,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };

        app.add_message("Welcome! Guess the 5-letter word.", MessageStyle::Info);
        if restored {
            app.add_message("Saved game restored.", MessageStyle::Info);
        }
        app.add_message(
            "Ctrl+N new game, Ctrl+T timed game, Ctrl+P pause",
            MessageStyle::Info,
        );
        app
    }

    /// Route one key press to the matching engine operation
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Control chords work in any state
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(false),
                KeyCode::Char('t') => self.new_game(true),
                KeyCode::Char('p') => self.toggle_pause(),
                KeyCode::Char('s') => self.share(),
                KeyCode::Char('x') => self.clear_saved(),
                _ => {}
            }
            return;
        }

        if self.engine.finished() {
            // Game over: plain letters act as menu keys
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(false),
                KeyCode::Char('t') => self.new_game(true),
                KeyCode::Char('s') => self.share(),
                KeyCode::Char('x') => self.clear_saved(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                if self.input_buffer.len() < 5 && c.is_ascii_alphabetic() {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        let input = self.input_buffer.clone();
        let notice = self.engine.submit_guess(&input);

        // Keep a rejected guess in the buffer so it can be edited
        if !matches!(notice, Some(Notice::InvalidGuess { .. })) {
            self.input_buffer.clear();
        }
        self.apply_notice(notice);
    }

    fn new_game(&mut self, timed: bool) {
        self.engine.new_game(timed);
        self.input_buffer.clear();
        if timed {
            self.add_message("New timed game: 5 minutes on the clock!", MessageStyle::Info);
        } else {
            self.add_message("New game started!", MessageStyle::Info);
        }
    }

    fn toggle_pause(&mut self) {
        if self.engine.paused() {
            self.engine.resume();
            self.add_message("Resumed.", MessageStyle::Info);
        } else {
            self.engine.pause();
            self.add_message("Paused. Ctrl+P to resume.", MessageStyle::Info);
        }
    }

    fn share(&mut self) {
        // No share sheet in a terminal: show the text so it can be copied
        let text = self.engine.share_score_text();
        self.add_message(&text, MessageStyle::Success);
    }

    fn clear_saved(&mut self) {
        let notice = self.engine.clear_saved();
        self.input_buffer.clear();
        self.apply_notice(Some(notice));
    }

    /// Map an engine notice to a styled message
    pub fn apply_notice(&mut self, notice: Option<Notice>) {
        let Some(notice) = notice else { return };

        match notice {
            Notice::InvalidGuess { expected } => {
                self.add_message(
                    &format!("Guess must be exactly {expected} letters A-Z!"),
                    MessageStyle::Error,
                );
            }
            Notice::Won { tries } => {
                let celebration = match tries {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Notice::Lost { target } => {
                self.add_message(
                    &format!("Out of tries! The word was {target}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Notice::TimedOut { target } => {
                self.add_message(
                    &format!("⏰ Time's up! The word was {target}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Notice::SaveCleared => {
                self.add_message("Saved game cleared. Fresh game started.", MessageStyle::Info);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SaveStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: SaveStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Deliver one countdown second whenever one has elapsed. A paused
        // game still receives the tick; the engine skips its effect.
        if last_tick.elapsed() >= Duration::from_secs(1) {
            if app.engine.timer_running() {
                let notice = app.engine.tick();
                app.apply_notice(notice);
            }
            last_tick = Instant::now();
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only process key press events (fixes Windows double-input bug)
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    app.handle_key(key);
                }
                Event::FocusLost => {
                    // Terminal lost focus: best-effort autosave
                    app.engine.on_suspend();
                }
                _ => {}
            }
        }

        if app.should_quit {
            app.engine.on_suspend();
            break;
        }
    }

    Ok(())
}
