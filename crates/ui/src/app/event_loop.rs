use super::App;
use crate::event_handler::EventHandler;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Result;
use std::time::Instant;
use std::{panic, time::Duration};

/// Run the TUI until the user exits.
///
/// One `tokio::select!` multiplexes terminal input and service
/// completions; a short tick also drives the scroll coordinator's
/// delayed auto-scroll.
pub async fn run(app: &mut App) -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let backend = CrosstermBackend::new(std::io::stdout());
        if let Ok(mut terminal) = Terminal::new(backend) {
            let _ = terminal.show_cursor();
        }
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::event::DisableMouseCapture,
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    app.draw(&mut terminal)?;

    while !app.should_exit() {
        let tui_poll = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            EventHandler::read()
        };

        tokio::select! {
            maybe_event = tui_poll => {
                if let Some(event) = maybe_event {
                    app.handle_event(&event, Instant::now());
                    app.draw(&mut terminal)?;
                }
            }
            maybe_service = app.recv_service_event() => {
                if let Some(event) = maybe_service {
                    app.on_service_event(event, Instant::now());
                    app.draw(&mut terminal)?;
                }
            }
        }

        if app.state_mut().scroll.poll(Instant::now()) {
            app.draw(&mut terminal)?;
        }
    }

    app.cancel_token.cancel();

    terminal.show_cursor()?;
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        std::io::stdout(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;

    Ok(())
}
