use crate::raw::{InterestResponse, TimelinePoint};
use crate::trend::classify;
use crate::types::{SearchInterestTrends, TrendPoint};

/// Latest interest and direction per query, highest interest first.
///
/// Queries whose response has no timeline are left out of `trends` but
/// still listed in `queries_analyzed`. Nothing is truncated.
#[must_use]
pub fn normalize_interest(series: &[(String, InterestResponse)]) -> SearchInterestTrends {
    let mut trends: Vec<TrendPoint> = series
        .iter()
        .filter_map(|(query, response)| {
            let timeline = &response.interest_over_time.as_ref()?.timeline_data;
            let latest = timeline.last()?;
            let values: Vec<i64> = timeline.iter().map(TimelinePoint::interest).collect();

            Some(TrendPoint {
                query: query.clone(),
                interest: latest.interest(),
                date: latest
                    .date
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
                direction: classify(&values),
            })
        })
        .collect();

    trends.sort_by(|a, b| b.interest.cmp(&a.interest));

    SearchInterestTrends {
        trends,
        queries_analyzed: series.iter().map(|(query, _)| query.clone()).collect(),
    }
}
