use crate::config::Config;
use crate::events::session::{Event as SessionEvent, Handler as SessionEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::session::SessionStore;
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;
use tui_logger::{init_logger, set_default_level};

pub type SessionEventSender = std::sync::mpsc::Sender<SessionEvent>;
type SessionEventReceiver = std::sync::mpsc::Receiver<SessionEvent>;
pub type ConfigSaveSender = std::sync::mpsc::Sender<()>;
type ConfigSaveReceiver = std::sync::mpsc::Receiver<()>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        init_logger(LevelFilter::Info).unwrap();
        set_default_level(LevelFilter::Trace);

        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<SessionEvent>();
        let (config_save_tx, config_save_rx) = std::sync::mpsc::channel::<()>();
        let profile = config.profile.clone();
        let mut app = App {
            state: Arc::new(Mutex::new(State::new(
                tx.clone(),
                config_save_tx.clone(),
                profile,
            ))),
            config,
        };
        app.start_session_worker(rx)?;
        app.start_config_saver(config_save_rx);
        app.start_ui(tx).await?;

        // Save config on exit
        {
            let state = app.state.lock().await;
            app.config.profile = state.profile().clone();
            if let Err(e) = app.config.save() {
                error!("Failed to save config on exit: {}", e);
            }
        }

        info!("Exiting application...");
        Ok(())
    }

    /// Start a thread to handle config save requests.
    ///
    fn start_config_saver(&self, receiver: ConfigSaveReceiver) {
        let state = Arc::clone(&self.state);
        let mut config = self.config.clone();
        std::thread::spawn(move || {
            while receiver.recv().is_ok() {
                if let Ok(state_guard) = state.try_lock() {
                    config.profile = state_guard.profile().clone();
                    if let Err(e) = config.save() {
                        error!("Failed to save config: {}", e);
                    }
                }
            }
        });
    }

    /// Start a separate thread for asynchronous state mutations driven by
    /// session events.
    ///
    fn start_session_worker(&self, receiver: SessionEventReceiver) -> Result<()> {
        debug!("Creating new thread for session event handling...");
        let cloned_state = Arc::clone(&self.state);
        let dir_path = self.config.dir_path()?;
        std::thread::spawn(move || {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap()
                .block_on(async {
                    let store = SessionStore::new(&dir_path);
                    let mut session_event_handler =
                        SessionEventHandler::new(&cloned_state, &store);
                    while let Ok(session_event) = receiver.recv() {
                        match session_event_handler.handle(session_event).await {
                            Ok(_) => (),
                            Err(e) => error!("Failed to handle session event: {}", e),
                        }
                    }
                })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&mut self, session_sender: SessionEventSender) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        // Resolve the stored session before anything renders
        session_sender.send(SessionEvent::CheckSession)?;

        let theme = Theme::by_name(&self.config.theme_name);
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            terminal.draw(|frame| crate::ui::render(frame, &mut state, &theme))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }
}
