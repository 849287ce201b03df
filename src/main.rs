use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use fintab::{
    FmpClient,
    statements::IncomeStatementBuilder,
    tui::{App, FetchOutcome, TICKER, render},
};

fn main() -> Result<()> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // The statement data is fetched exactly once per run. The outcome crosses
    // back into the event loop through the channel; if the loop is already
    // gone when it lands, the send fails and the result dies with the task.
    let (tx, rx) = mpsc::channel::<FetchOutcome>();
    let client = FmpClient::builder().build()?;
    let fetch = rt.spawn(async move {
        let outcome = IncomeStatementBuilder::new(&client, TICKER).fetch().await;
        let _ = tx.send(outcome);
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, rx);

    fetch.abort();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    rx: mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    let mut app = App::new();

    while !app.should_quit {
        // Non-blocking drain of the fetch channel.
        for outcome in rx.try_iter() {
            app.apply_fetch(outcome);
        }

        terminal.draw(|f| render::draw(f, &mut app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.on_key(key),
                Event::Mouse(mouse) => app.on_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
