//! Interactive terminal loop: loads once in the background, then lets the
//! user page through the result until they quit.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::stdout;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::constants::ui::INPUT_POLL_MS;
use crate::data_fetcher::api::FootballDataSource;
use crate::error::AppError;
use crate::teletext_ui::TeletextPage;
use crate::ui::controller::MatchdayController;
use crate::ui::page::{create_loading_page, create_page};

/// What a key press asks the loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextPage,
    PreviousPage,
    Ignore,
}

pub fn key_action(key: &KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Right => KeyAction::NextPage,
        KeyCode::Left => KeyAction::PreviousPage,
        _ => KeyAction::Ignore,
    }
}

enum LoopEvent {
    Key(KeyAction),
    Resize,
    Tick,
}

fn poll_event() -> Result<LoopEvent, AppError> {
    if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
        return Ok(LoopEvent::Tick);
    }
    Ok(match event::read()? {
        Event::Key(key) => LoopEvent::Key(key_action(&key)),
        Event::Resize(_, _) => LoopEvent::Resize,
        _ => LoopEvent::Tick,
    })
}

/// Runs the load in a background task and drives the page until `q`.
///
/// Quitting while a request is in flight cancels it and waits for the task
/// to settle before returning.
pub async fn run_interactive_ui<S>(controller: MatchdayController<S>) -> Result<(), AppError>
where
    S: FootballDataSource + Send + 'static,
{
    let cancel = CancellationToken::new();
    let mut updates = controller.subscribe();
    let load_cancel = cancel.clone();
    let mut load_task: Option<JoinHandle<MatchdayController<S>>> =
        Some(tokio::spawn(async move {
            let mut controller = controller;
            controller.load(&load_cancel).await;
            controller
        }));
    let mut out = stdout();
    let mut page: TeletextPage = create_loading_page(&updates.borrow_and_update(), true, false);
    page.render_buffered(&mut out)?;

    loop {
        if let Some(task) = load_task.take_if(|task| task.is_finished()) {
            let controller = task.await?;
            info!("Load finished in state {:?}", controller.state());
            page = create_page(&controller, true, false);
            page.render_buffered(&mut out)?;
        } else if load_task.is_some() {
            if updates.has_changed().unwrap_or(false) {
                page = create_loading_page(&updates.borrow_and_update(), true, false);
            } else {
                page.update_loading_indicator();
            }
            page.render_buffered(&mut out)?;
        }

        match poll_event()? {
            LoopEvent::Key(KeyAction::Quit) => {
                debug!("Quit requested");
                break;
            }
            LoopEvent::Key(KeyAction::NextPage) => {
                page.next_page();
                page.render_buffered(&mut out)?;
            }
            LoopEvent::Key(KeyAction::PreviousPage) => {
                page.previous_page();
                page.render_buffered(&mut out)?;
            }
            LoopEvent::Resize => {
                page.handle_resize();
                page.render_buffered(&mut out)?;
            }
            LoopEvent::Key(KeyAction::Ignore) | LoopEvent::Tick => {}
        }
    }

    if let Some(task) = load_task.take() {
        info!("Cancelling in-flight request");
        cancel.cancel();
        task.await?;
    }
    Ok(())
}
