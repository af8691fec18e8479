pub mod console;
pub mod fetch;

use std::fmt::Write as _;

use tracing::{info, warn};

use crate::widget::table::Row;

/// Plain-text table with the row id as the first column.
pub fn render_table(rows: &[Row]) -> String {
    if rows.is_empty() {
        return "(no results)\n".to_string();
    }

    let mut widths = [0usize; 5];
    let header = std::iter::once("#").chain(Row::HEADERS);
    for (w, h) in widths.iter_mut().zip(header) {
        *w = h.chars().count();
    }
    let ids: Vec<String> = rows.iter().map(|r| r.id.to_string()).collect();
    for (row, id) in rows.iter().zip(&ids) {
        let cells = std::iter::once(id.as_str()).chain(row.cells());
        for (w, c) in widths.iter_mut().zip(cells) {
            *w = (*w).max(c.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &widths, std::iter::once("#").chain(Row::HEADERS));
    for (row, id) in rows.iter().zip(&ids) {
        push_line(&mut out, &widths, std::iter::once(id.as_str()).chain(row.cells()));
    }
    out
}

fn push_line<'a>(out: &mut String, widths: &[usize; 5], cells: impl Iterator<Item = &'a str>) {
    let mut text = String::new();
    for (i, (cell, w)) in cells.zip(widths.iter().copied()).enumerate() {
        if i > 0 {
            text.push_str("  ");
        }
        let _ = write!(text, "{cell:<w$}");
    }
    out.push_str(text.trim_end());
    out.push('\n');
}

pub(crate) async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let (mut sigint, mut sigterm) =
            match (signal(SignalKind::interrupt()), signal(SignalKind::terminate())) {
                (Ok(i), Ok(t)) => (i, t),
                (Err(e), _) | (_, Err(e)) => {
                    warn!(error=%e, "could not listen for shutdown signals");
                    return std::future::pending().await;
                }
            };
        tokio::select! {
            _ = sigint.recv() => {
                info!("shutdown: received SIGINT");
            }
            _ = sigterm.recv() => {
                info!("shutdown: received SIGTERM");
            }
        }
    }
    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error=%e, "could not listen for ctrl_c");
            return std::future::pending().await;
        }
        info!("shutdown: received ctrl_c");
    }
}
