use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::boot::{BootHandle, BootSequencer};
use crate::config::SearchConfig;
use crate::search::SearchService;
use crate::session::SessionController;

pub mod constants;
mod domain;
pub mod ui;


use self::constants::*;
use self::domain::models::Mode;
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// The interactive terminal client: boot screen first, then the search
/// screen. All state changes happen on the thread that calls [`run`].
///
/// [`run`]: InteractiveSearch::run
pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    session: SessionController,
    boot: Option<BootHandle>,
    runtime: Handle,
    skip_boot: bool,
    search_mounted_at: Option<Instant>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
}

impl InteractiveSearch {
    pub fn new(
        service: Arc<dyn SearchService>,
        config: &SearchConfig,
        runtime: Handle,
        skip_boot: bool,
    ) -> Self {
        let session = SessionController::new(service, config, runtime.clone());
        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            session,
            boot: None,
            runtime,
            skip_boot,
            search_mounted_at: None,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        self.start(BootSequencer::default());
        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    /// Start the boot sequence, or mount the search screen directly when
    /// boot is skipped.
    fn start(&mut self, sequencer: BootSequencer) {
        if self.skip_boot {
            self.state = AppState::without_boot();
            self.execute_command(Command::MountSearch);
        } else {
            self.boot = Some(BootHandle::start(sequencer, &self.runtime));
        }
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            self.pump();

            terminal.draw(|f| self.render_frame(f))?;

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_input(key)? {
                        break;
                    }
                }
            }
        }
        info!("leaving interactive mode");
        Ok(())
    }

    fn render_frame(&mut self, f: &mut Frame) {
        self.renderer.render(f, &self.state, self.session.view());
    }

    /// Drain everything that arrived since the last frame: boot events,
    /// search resolutions and timers.
    fn pump(&mut self) {
        let mut boot_events = Vec::new();
        if let Some(boot) = self.boot.as_mut() {
            while let Some(event) = boot.try_next() {
                boot_events.push(event);
            }
        }
        for event in boot_events {
            self.handle_message(Message::Boot(event));
        }

        if self.session.poll_resolutions() {
            let result_count = self.session.view().results.len();
            self.handle_message(Message::SearchResolved { result_count });
        }

        if let Some(mounted_at) = self.search_mounted_at {
            if !self.state.ui.greeting.is_done() {
                self.handle_message(Message::GreetingTick(mounted_at.elapsed()));
            }
        }

        // Check for scheduled message clear
        if let Some(timer) = self.message_timer {
            if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                self.execute_command(Command::ClearMessage);
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.ui.message = Some(EXIT_PROMPT.to_string());
            self.message_timer = Some(Instant::now());
            self.message_clear_delay = DOUBLE_CTRL_C_TIMEOUT_SECS * 1000;
            return Ok(false);
        }

        match self.state.mode {
            Mode::Boot => Ok(key.code == KeyCode::Esc),
            Mode::Search => {
                match key.code {
                    KeyCode::Esc => return Ok(true),
                    KeyCode::F(1) => {
                        self.handle_message(Message::ShowHelp);
                        return Ok(false);
                    }
                    _ => {}
                }
                if let Some(msg) = self.handle_search_mode_input(key) {
                    self.handle_message(msg);
                }
                Ok(false)
            }
            Mode::Help => {
                if let Some(msg) = self.renderer.get_help_dialog_mut().handle_key(key) {
                    self.handle_message(msg);
                }
                Ok(false)
            }
        }
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        let ctrl = key.modifiers == KeyModifiers::CONTROL;
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End => self.renderer.get_result_list_mut().handle_key(key),
            KeyCode::Char('p' | 'n' | 'y') if ctrl => {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::SubmitSearch(query) => {
                if !self.session.submit(&query) {
                    self.state.ui.message = None;
                }
            }
            Command::MountSearch => {
                // The sequence is over; release its task
                self.boot = None;
                self.search_mounted_at = Some(Instant::now());
                info!("search screen mounted");
            }
            Command::CopyToClipboard(text) => {
                if let Err(e) = self.copy_to_clipboard(&text) {
                    warn!(error = %e, "clipboard copy failed");
                    self.state.ui.message = Some(format!("Failed to copy: {e}"));
                } else {
                    let preview: String = text.chars().take(50).collect();
                    self.state.ui.message = Some(format!("✓ Copied: {preview}"));
                }
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = MESSAGE_CLEAR_DELAY_MS;
            }
            Command::ClearMessage => {
                self.state.ui.message = None;
                self.message_timer = None;
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        debug!(len = text.len(), "copying to clipboard");

        #[cfg(target_os = "macos")]
        {
            pipe_to_command("pbcopy", &[], text)
        }

        #[cfg(target_os = "linux")]
        {
            pipe_to_command("xclip", &["-selection", "clipboard"], text)
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            Err(anyhow::anyhow!("Clipboard not supported on this platform"))
        }
    }

    #[cfg(test)]
    pub(crate) fn current_mode(&self) -> Mode {
        self.state.mode
    }
}

#[cfg(any(target_os = "macos", target_os = "linux"))]
fn pipe_to_command(program: &str, args: &[&str], text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {program}"))?;
    }

    child
        .wait()
        .with_context(|| format!("Failed to wait for {program}"))?;
    Ok(())
}
