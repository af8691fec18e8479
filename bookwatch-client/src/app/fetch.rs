use std::time::Duration;

use tracing::info;

use crate::AppError;
use crate::config::ClientConfig;
use crate::source::{HttpSource, RecordSource};
use crate::widget::table::{Row, RowId};

/// One-shot `GET /poll`, printed as a table.
pub async fn run(cfg: &ClientConfig) -> Result<(), AppError> {
    let source = HttpSource::new(
        &cfg.server_url,
        Duration::from_secs(cfg.request_timeout_secs),
    )?;
    let records = source
        .fetch()
        .await
        .map_err(|e| AppError::Http(format!("poll error: {e}")))?;
    info!(count = records.len(), server = source.base(), "fetched records");

    let rows: Vec<Row> = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| Row {
            id: RowId(i as u64),
            record,
        })
        .collect();
    print!("{}", super::render_table(&rows));
    Ok(())
}
