use chrono::{Duration, NaiveDate};

/// Plan allowance the dashboard measures usage against.
pub const MONTHLY_QUOTA: u64 = 10_000;

const DAILY_REQUESTS: [u64; 14] = [
    412, 534, 498, 602, 255, 190, 677, 741, 812, 768, 904, 420, 581, 1_247,
];

#[derive(Clone, Debug, PartialEq)]
pub struct UsagePoint {
    pub date: NaiveDate,
    pub requests: u64,
}

/// Fourteen days of request counts ending on `today`.
pub fn daily_usage(today: NaiveDate) -> Vec<UsagePoint> {
    let days = DAILY_REQUESTS.len() as i64;
    DAILY_REQUESTS
        .iter()
        .enumerate()
        .map(|(i, &requests)| UsagePoint {
            date: today - Duration::days(days - 1 - i as i64),
            requests,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UsageSummary {
    pub today: u64,
    /// Percent change against the day before, one decimal.
    pub change_pct: f64,
    pub remaining: u64,
}

pub fn summarize(points: &[UsagePoint], quota: u64) -> UsageSummary {
    let today = points.last().map(|p| p.requests).unwrap_or(0);
    let change_pct = match points.len().checked_sub(2).and_then(|i| points.get(i)) {
        Some(prev) if prev.requests > 0 => {
            let raw = (today as f64 - prev.requests as f64) / prev.requests as f64 * 100.0;
            (raw * 10.0).round() / 10.0
        }
        _ => 0.0,
    };
    let used: u64 = points.iter().map(|p| p.requests).sum();
    UsageSummary {
        today,
        change_pct,
        remaining: quota.saturating_sub(used),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_ends_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let points = daily_usage(today);
        assert_eq!(points.len(), 14);
        assert_eq!(points.last().unwrap().date, today);
        assert_eq!(
            points[0].date,
            NaiveDate::from_ymd_opt(2024, 2, 26).unwrap()
        );
        assert!(points.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn summary_reports_today_and_change() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let summary = summarize(&daily_usage(today), MONTHLY_QUOTA);
        assert_eq!(summary.today, 1_247);
        // (1247 - 581) / 581
        assert_eq!(summary.change_pct, 114.6);
        assert_eq!(summary.remaining, 10_000 - 8_641);
    }

    #[test]
    fn empty_series_is_zero() {
        let summary = summarize(&[], 100);
        assert_eq!(summary.today, 0);
        assert_eq!(summary.change_pct, 0.0);
        assert_eq!(summary.remaining, 100);
    }
}
