use std::io::BufRead;

use kanal::{AsyncSender, Sender};
use tokio_util::sync::CancellationToken;
use yousif_core::ConnectivityMonitor;
use yousif_types::{AppEvent, UiEvent};

/// Map one input line to an event. Plain text searches, `:` starts a command.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim();

    let Some(command) = line.strip_prefix(':') else {
        return Some(AppEvent::Submit(line.to_string()));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    let index = || arg.parse::<usize>().ok();

    match name {
        "new" | "n" => Some(AppEvent::NewSearch),
        "clear" => Some(AppEvent::ClearQuery),
        "theme" | "t" => Some(AppEvent::ToggleTheme),
        "history" => Some(AppEvent::ShowHistory),
        "h" => index().map(AppEvent::SearchHistory),
        "search" | "s" if !arg.is_empty() => Some(AppEvent::SearchWord(arg.to_string())),
        "hover" => index().map(AppEvent::HoverWord),
        "leave" => Some(AppEvent::LeaveWord),
        "look" | "l" => index().map(AppEvent::LookWord),
        "online" => Some(AppEvent::ConnectivityChanged(true)),
        "offline" => Some(AppEvent::ConnectivityChanged(false)),
        "asset" if !arg.is_empty() => Some(AppEvent::FetchAsset(arg.to_string())),
        "quit" | "q" | "exit" => Some(AppEvent::Quit),
        _ => None,
    }
}

/// Reads stdin on its own thread, a blocked read must not hold up shutdown
pub fn spawn_input_reader(app_tx: AsyncSender<AppEvent>, ui_tx: AsyncSender<UiEvent>) {
    let tx = app_tx.clone_sync();
    let ui_tx = ui_tx.clone_sync();

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Failed to read input: {}", e);
                    break;
                }
            };

            if !dispatch_line(&line, &tx, &ui_tx) {
                return;
            }
        }

        // EOF behaves like :quit
        if let Err(e) = tx.send(AppEvent::Quit) {
            tracing::debug!("App loop gone before EOF quit: {}", e);
        }
    });
}

/// Sends one input line on, false once the app loop is gone
pub fn dispatch_line(line: &str, tx: &Sender<AppEvent>, ui_tx: &Sender<UiEvent>) -> bool {
    let Some(event) = parse_command(line) else {
        let status = UiEvent::Status(format!("Unknown command: {}", line.trim()));
        if let Err(e) = ui_tx.send(status) {
            tracing::debug!("Failed to report unknown command: {}", e);
        }
        return true;
    };

    match tx.send(event) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("App loop gone, stopping input: {}", e);
            false
        }
    }
}

/// Forwards online/offline transitions to the UI
pub async fn connectivity_watch(
    monitor: ConnectivityMonitor,
    ui_tx: AsyncSender<UiEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut rx = monitor.subscribe();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let online = *rx.borrow_and_update();
                ui_tx.send(UiEvent::Connectivity(online)).await?;
            }
        }
    }

    Ok(())
}
