//! Line-oriented console host for the poller widget.

use std::io::{IsTerminal, Write};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::source::HttpSource;
use crate::surface::{Surface, Toggle, ToggleStyle};
use crate::widget::status::Status;
use crate::widget::table::{Row, RowId};
use crate::widget::{Toggled, Widget};
use crate::{AppError, platform};

const HELP: &str = "commands: go | stop | toggle | mins <N> | clear | rm <ROW> | show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Toggle,
    Go,
    Stop,
    Mins(Option<String>),
    Clear,
    Remove(RowId),
    Show,
    Help,
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Err("empty command".into());
        };
        let arg = parts.next();
        let cmd = match cmd.to_ascii_lowercase().as_str() {
            "toggle" => ConsoleCommand::Toggle,
            "go" | "start" => ConsoleCommand::Go,
            "stop" => ConsoleCommand::Stop,
            "mins" => ConsoleCommand::Mins(arg.map(str::to_string)),
            "clear" => ConsoleCommand::Clear,
            "rm" | "remove" => {
                let id = arg
                    .ok_or("rm needs a row number")?
                    .parse::<u64>()
                    .map_err(|_| format!("not a row number: {}", arg.unwrap_or_default()))?;
                ConsoleCommand::Remove(RowId(id))
            }
            "show" | "ls" => ConsoleCommand::Show,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" | "q" => ConsoleCommand::Quit,
            other => return Err(format!("unknown command: {other}")),
        };
        Ok(cmd)
    }
}

/// Surface that renders to stdout.
pub struct ConsoleSurface {
    color: bool,
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    fn emit(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            debug!(error=%e, "console write failed");
        }
    }

    fn status_line(&self, status: &Status) -> String {
        if status.is_failure() && self.color {
            format!("status: \x1b[31m{status}\x1b[0m\n")
        } else {
            format!("status: {status}\n")
        }
    }

    fn toggle_line(&self, toggle: Toggle) -> String {
        let color = match toggle.style() {
            _ if !self.color => None,
            ToggleStyle::Danger => Some("\x1b[31m"),
            ToggleStyle::Primary => Some("\x1b[34m"),
        };
        match color {
            Some(code) => format!("{code}[{}]\x1b[0m\n", toggle.label()),
            None => format!("[{}]\n", toggle.label()),
        }
    }
}

impl Surface for ConsoleSurface {
    fn show_status(&self, status: &Status) {
        if *status != Status::Idle {
            self.emit(&self.status_line(status));
        }
    }

    fn show_rows(&self, rows: &[Row]) {
        self.emit(&super::render_table(rows));
    }

    fn show_toggle(&self, toggle: Toggle) {
        self.emit(&self.toggle_line(toggle));
    }

    fn set_interval_enabled(&self, enabled: bool) {
        debug!(enabled, "interval input state changed");
    }

    // The command loop owns stdin, so there is no modal dialog to wait on.
    fn alert(&self, message: &str) {
        let bell = if self.color { "\x07" } else { "" };
        self.emit(&format!("{bell}!! {message}\n"));
    }
}

/// Run the interactive poller until `quit`, EOF or a shutdown signal.
pub async fn run(cfg: ClientConfig) -> Result<(), AppError> {
    let source = HttpSource::new(
        &cfg.server_url,
        Duration::from_secs(cfg.request_timeout_secs),
    )?;
    info!(server = source.base(), "polling source configured");

    let surface = Arc::new(ConsoleSurface::new());
    let widget = Widget::new(
        Arc::new(source),
        platform::default_backend(),
        surface.clone(),
    );
    widget.set_interval_input(cfg.initial_interval_input()).await;
    surface.emit(&format!("{HELP}\n"));

    let shutdown = super::shutdown_signal();
    tokio::pin!(shutdown);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let res = loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("shutdown signal received; stopping poller");
                break Ok(());
            }
            line = lines.next_line() => match line {
                Ok(Some(line)) if line.trim().is_empty() => {}
                Ok(Some(line)) => match line.parse::<ConsoleCommand>() {
                    Ok(ConsoleCommand::Quit) => break Ok(()),
                    Ok(cmd) => handle(&widget, &surface, cmd).await,
                    Err(e) => surface.emit(&format!("{e}\n{HELP}\n")),
                },
                Ok(None) => {
                    debug!("stdin closed");
                    break Ok(());
                }
                Err(e) => break Err(AppError::Io(e)),
            }
        }
    };

    widget.shutdown().await;
    res
}

async fn handle(widget: &Widget, surface: &ConsoleSurface, cmd: ConsoleCommand) {
    match cmd {
        ConsoleCommand::Go if widget.is_running().await => surface.emit("already polling\n"),
        ConsoleCommand::Stop if !widget.is_running().await => surface.emit("not polling\n"),
        ConsoleCommand::Toggle | ConsoleCommand::Go | ConsoleCommand::Stop => {
            // Rejected intervals are alerted by the widget itself; the first
            // poll reports through the surface.
            if let Ok(Toggled::Started(_first_poll)) = widget.on_toggle().await {
                debug!("first poll running in background");
            }
        }
        ConsoleCommand::Mins(raw) => {
            if !widget.set_interval_input(raw).await {
                surface.emit("interval is locked while polling; stop first\n");
            }
        }
        ConsoleCommand::Clear => widget.on_clear().await,
        ConsoleCommand::Remove(id) => {
            if !widget.on_row_remove(id).await {
                warn!(row=%id, "no such row");
                surface.emit(&format!("no row {id}\n"));
            }
        }
        ConsoleCommand::Show => {
            let state = if widget.is_running().await {
                "polling"
            } else {
                "stopped"
            };
            let mins = widget.interval_input().await.unwrap_or_default();
            surface.emit(&format!(
                "{state}, every {mins} min, {} seen\n",
                widget.seen_count().await
            ));
            surface.emit(&surface.status_line(&widget.status().await));
            surface.emit(&super::render_table(&widget.rows().await));
        }
        ConsoleCommand::Help => surface.emit(&format!("{HELP}\n")),
        ConsoleCommand::Quit => {}
    }
}
