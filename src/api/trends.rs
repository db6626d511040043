//! Dashboard trend endpoints

use super::{AbortHandle, ApiClient, ApiError};
use crate::models::{TrendKind, TrendPoint, TrendSeries};

impl ApiClient {
    /// One pre-aggregated series; the backend does all the math
    pub async fn trend(&self, kind: TrendKind, abort: &AbortHandle) -> Result<TrendSeries, ApiError> {
        let points: Vec<TrendPoint> =
            self.get_data(&format!("/api/trends/{}", kind.as_str()), abort).await?;
        Ok(TrendSeries { kind, points })
    }

    /// Every dashboard series, fetched one after the other
    pub async fn all_trends(&self, abort: &AbortHandle) -> Result<Vec<TrendSeries>, ApiError> {
        let mut series = Vec::with_capacity(TrendKind::ALL.len());
        for kind in TrendKind::ALL {
            series.push(self.trend(kind, abort).await?);
        }
        Ok(series)
    }
}
