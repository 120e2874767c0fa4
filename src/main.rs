mod app;
mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod ui;

use app::{App, Screen};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::Result;
use logic::DataSyncService;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::{CalendarScreen, CropsScreen, HomeScreen, WeatherScreen};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            return Ok(());
        }
        Some(Commands::Check) => {
            let config = Config::load(cli.config.clone())?;
            let data_sync = DataSyncService::new(&config);
            if data_sync.check_connection().await {
                println!("WeatherAPI: OK ({})", config.weatherapi.location);
                return Ok(());
            }
            eprintln!("WeatherAPI: FAILED ({})", config.weatherapi.location);
            std::process::exit(1);
        }
        None => {}
    }

    // Load configuration, offering first-run setup when none exists
    let config = if Config::exists(cli.config.as_ref()) {
        match Config::load(cli.config.clone()) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                eprintln!("Run `lunario init` to recreate the configuration.");
                std::process::exit(1);
            }
        }
    } else {
        let (config, _) = Config::setup_interactive()?;
        config
    };

    // Create app and data service
    let mut app = App::new(config.clone());
    let data_sync = DataSyncService::new(&config);

    // Initial fetch; failure degrades to a status message
    match data_sync.refresh().await {
        Ok(outcome) => {
            let days = outcome.forecast.days.len();
            app.update_forecast(outcome);
            app.set_status(&format!("Pronóstico cargado ({} días)", days));
        }
        Err(e) => {
            tracing::warn!("initial forecast fetch failed: {}", e);
            app.set_status(&format!("No se pudo obtener el pronóstico: {}", e));
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, &data_sync).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    data_sync: &DataSyncService,
) -> Result<()>
where
    error::LunarioError: From<<B as ratatui::backend::Backend>::Error>,
{
    loop {
        // Draw UI
        terminal.draw(|f| {
            let area = f.area();
            let today = chrono::Local::now().date_naive();

            match app.screen {
                Screen::Home => {
                    let current = app.forecast.as_ref().map(|fc| &fc.current);
                    let today_lunar = app
                        .forecast
                        .as_ref()
                        .and_then(|fc| fc.day(today))
                        .map(|d| &d.lunar);
                    let screen = HomeScreen::new(
                        &app.config.community,
                        current,
                        today_lunar,
                        app.today_recommendation(),
                    )
                    .updated_at(app.forecast.as_ref().map(|fc| fc.fetched_at))
                    .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Calendar => {
                    let screen = CalendarScreen::new(
                        app.calendar_state.year,
                        app.calendar_state.month,
                        app.month_data.as_ref().filter(|_| app.month_is_loaded()),
                    )
                    .selected(app.calendar_state.selected_date)
                    .with_recommendation(app.selected_recommendation())
                    .loading(app.needs_month_fetch);
                    f.render_widget(screen, area);
                }
                Screen::Weather => {
                    let screen = WeatherScreen::new(app.forecast.as_ref());
                    f.render_widget(screen, area);
                }
                Screen::Crops => {
                    let screen = CropsScreen::new(app.today_recommendation())
                        .with_selection(app.crops_state.selected_index);
                    f.render_widget(screen, area);
                }
            }
        })?;

        // Handle input with timeout for async operations
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        app.quit();
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Esc => {
                        app.switch_screen(Screen::Home);
                    }
                    KeyCode::Char(c) => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        } else {
                            handle_screen_input(app, key.code);
                        }
                    }
                    _ => {
                        handle_screen_input(app, key.code);
                    }
                }
            }
        }

        // Handle refresh request
        if app.needs_refresh {
            app.needs_refresh = false;
            app.refreshing = true;
            match data_sync.refresh().await {
                Ok(outcome) => {
                    app.update_forecast(outcome);
                    app.set_status("Datos actualizados");
                }
                Err(e) => {
                    tracing::warn!("forecast refresh failed: {}", e);
                    app.set_status(&format!("No se pudo actualizar: {}", e));
                }
            }
            app.refreshing = false;
        }

        // Handle month grid request from the calendar screen
        if app.needs_month_fetch {
            app.needs_month_fetch = false;
            let (year, month) = (app.calendar_state.year, app.calendar_state.month);
            match data_sync.fetch_month(year, month).await {
                Ok(data) => {
                    app.update_month(data);
                }
                Err(e) => {
                    tracing::warn!("month astronomy fetch failed: {}", e);
                    app.set_status(&format!("No se pudo obtener el calendario: {}", e));
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Home => {
            if let KeyCode::Char('r') = code {
                app.request_refresh();
            }
        }
        Screen::Calendar => match code {
            KeyCode::Left => app.calendar_prev_month(),
            KeyCode::Right => app.calendar_next_month(),
            KeyCode::Up => app.calendar_state.select_prev_day(),
            KeyCode::Down => app.calendar_state.select_next_day(),
            _ => {}
        },
        Screen::Weather => {
            if let KeyCode::Char('r') = code {
                app.request_refresh();
            }
        }
        Screen::Crops => match code {
            KeyCode::Up => app.crops_state.prev(),
            KeyCode::Down => app.crops_state.next(models::crop::CATALOG.len()),
            _ => {}
        },
    }
}
