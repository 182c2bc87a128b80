use chrono::{DateTime, Local, TimeZone};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration};

/// Live date string for the sidebar greeting.
///
/// Publishes the current date formatted like `Thu, 07 Aug 2026` and
/// refreshes it once per second. Dropping the handle aborts the tick
/// task, so the recurring schedule stops on any teardown path.
pub struct DateTicker {
    current: watch::Receiver<String>,
    task: JoinHandle<()>,
}

impl DateTicker {
    /// Start the ticker. The current date is available immediately.
    pub fn start() -> Self {
        let (tx, rx) = watch::channel(format_date(&Local::now()));

        let task = tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(1));
            loop {
                interval.tick().await;
                if tx.send(format_date(&Local::now())).is_err() {
                    break;
                }
            }
        });

        Self { current: rx, task }
    }

    /// The most recently published date string.
    pub fn current(&self) -> String {
        self.current.borrow().clone()
    }
}

impl Drop for DateTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Short `en-GB` date: abbreviated weekday, two-digit day, abbreviated
/// month, full year.
fn format_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%a, %d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn formats_with_padded_day_and_short_month() {
        let date = Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap();
        assert_eq!(format_date(&date), "Thu, 02 Jan 2025");
    }

    #[tokio::test]
    async fn ticker_publishes_a_date_immediately() {
        let ticker = DateTicker::start();
        let value = ticker.current();
        // "Thu, 02 Jan 2025" shape: weekday before the comma, then the rest.
        assert_eq!(value.split(", ").count(), 2);
    }

    #[tokio::test]
    async fn dropping_the_ticker_stops_the_updates() {
        let ticker = DateTicker::start();
        let mut updates = ticker.current.clone();

        drop(ticker);

        // The aborted task drops the sender, which closes the channel.
        assert!(updates.changed().await.is_err());
    }
}
