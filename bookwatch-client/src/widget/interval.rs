use std::time::Duration;

pub const MILLIS_PER_MINUTE: f64 = 60_000.0;
/// Longest accepted period; anything above is clamped so timer deadlines stay representable.
pub const MAX_PERIOD: Duration = Duration::from_secs(60 * 60 * 24 * 365);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Expected mins to be greater than zero, but got {raw}")]
pub struct IntervalError {
    pub raw: String,
}

/// Turn the raw interval field into a timer period.
///
/// Absent, blank, non-numeric, non-finite and non-positive values are
/// rejected. Fractional minutes are allowed; the period never drops below one
/// millisecond.
pub fn resolve_interval(raw: Option<&str>) -> Result<Duration, IntervalError> {
    let reject = || IntervalError {
        raw: raw.unwrap_or("null").to_string(),
    };
    let mins: f64 = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(reject)?
        .parse()
        .map_err(|_| reject())?;
    if !mins.is_finite() || mins <= 0.0 {
        return Err(reject());
    }

    let millis = (mins * MILLIS_PER_MINUTE)
        .round()
        .clamp(1.0, MAX_PERIOD.as_millis() as f64);
    Ok(Duration::from_millis(millis as u64))
}
