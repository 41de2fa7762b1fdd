//! Sleeper - Entry Point
//!
//! Puts a "Sleeper" item in the menu bar with "Preferences" and
//! "Allow computer to sleep" entries. The toggle is only a check mark;
//! system sleep is left alone.

use anyhow::{Context, Result};
use clap::Parser;
use sleeper::core::events::{AppEvent, EventSender};
use sleeper::core::config::startup_log_filter;
use sleeper::core::state::Outcome;
use sleeper::{AppState, Config, TrayManager};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

#[derive(Parser)]
#[command(name = "sleeper", about = "Menu bar toggle for allowing the computer to sleep")]
struct Cli {
    /// Config file to use instead of the one in the platform config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

/// Main application handler for winit event loop
struct App {
    state: AppState,
    config: Config,
    event_tx: EventSender,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Created once the event loop is running (required on macOS)
    tray_manager: Option<TrayManager>,
    /// Fatal error raised inside the event loop, returned from `main`
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn new(
        config: Config,
        event_tx: EventSender,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        Self {
            state: AppState::new(config.sleep.allowed_on_start),
            config,
            event_tx,
            event_rx,
            tray_manager: None,
            startup_error: None,
        }
    }

    fn create_tray(&mut self, event_loop: &ActiveEventLoop) {
        if self.tray_manager.is_some() {
            return;
        }

        match TrayManager::new(
            &self.config.app,
            self.state.sleep.is_allowed(),
            self.event_tx.clone(),
        ) {
            Ok(tray) => self.tray_manager = Some(tray),
            Err(e) => {
                error!("Failed to create tray: {:#}", e);
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    /// Drain pending events from the tray listener thread
    fn process_events(&mut self, event_loop: &ActiveEventLoop) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event, event_loop);
        }
    }

    fn handle_event(&mut self, event: AppEvent, event_loop: &ActiveEventLoop) {
        match event {
            AppEvent::TrayAction(action) => {
                info!("Tray action: {:?}", action);

                match self.state.apply(action) {
                    Outcome::Alert(alert) => alert.show(),
                    Outcome::SleepToggled { allowed } => {
                        info!(allowed, "Sleep toggle changed");
                        if let Some(ref mut tray) = self.tray_manager {
                            tray.set_sleep_allowed(allowed);
                        }
                    }
                    Outcome::Quit => {
                        info!("Quit requested from tray");
                        event_loop.exit();
                    }
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
        self.create_tray(event_loop);
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, _event: ()) {
        self.process_events(event_loop);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        _event: WindowEvent,
    ) {
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.process_events(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!("Sleeper exiting");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", Config::default_config_str());
        return Ok(());
    }

    let loaded = match cli.config {
        Some(ref path) => Config::load_from(path),
        None => Config::load(),
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(startup_log_filter(&loaded))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };

    info!("Starting Sleeper");

    let (event_tx, event_rx) = mpsc::unbounded_channel();

    #[allow(unused_mut)]
    let mut builder = EventLoop::builder();
    #[cfg(target_os = "macos")]
    sleeper::macos::configure_event_loop(&mut builder);
    let event_loop = builder.build().context("Failed to create event loop")?;

    let proxy = event_loop.create_proxy();
    let event_sender = EventSender::new(event_tx, proxy);

    let mut app = App::new(config, event_sender, event_rx);

    event_loop.run_app(&mut app)?;

    match app.startup_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
