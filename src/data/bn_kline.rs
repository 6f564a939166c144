use {
    anyhow::{Context, Result, bail},
    binance_sdk::{
        config::ConfigurationRestApi,
        errors::{self, ConnectorError as connection_error},
        spot::{
            SpotRestApi,
            rest_api::{KlinesIntervalEnum, KlinesItemInner, KlinesParams, RestApi},
        },
    },
    chrono::TimeZone,
    std::{error::Error, fmt},
};

use crate::{
    config::{BinanceApiConfig, CHART, KlineRequest},
    domain::{BaseVol, Candle, ChartPeriod, QuoteVol},
    models::{ChartPoint, ChartSeries},
    utils::{TimeUtils, epoch_ms_to_chart_label},
};

#[cfg(debug_assertions)]
use crate::config::DF;

pub fn try_interval_from_ms(ms: i64) -> Result<KlinesIntervalEnum, String> {
    use TimeUtils as T;
    match ms {
        T::MS_IN_S => Ok(KlinesIntervalEnum::Interval1s),
        T::MS_IN_MIN => Ok(KlinesIntervalEnum::Interval1m),
        T::MS_IN_15_MIN => Ok(KlinesIntervalEnum::Interval15m),
        T::MS_IN_H => Ok(KlinesIntervalEnum::Interval1h),
        T::MS_IN_4_H => Ok(KlinesIntervalEnum::Interval4h),
        T::MS_IN_D => Ok(KlinesIntervalEnum::Interval1d),
        _ => Err(format!("Unsupported interval: {}ms", ms)),
    }
}

#[derive(Debug, PartialEq)]
pub struct BNKline {
    pub open_timestamp_ms: i64,
    pub open_price: Option<f64>,
    pub high_price: Option<f64>,
    pub low_price: Option<f64>,
    pub close_price: Option<f64>,
    pub base_asset_volume: Option<BaseVol>,
    pub quote_asset_volume: Option<QuoteVol>,
}

#[derive(Debug)]
pub enum BNKlineError {
    InvalidLength,
    InvalidType(String),
    ConnectionFailed(String),
}

impl fmt::Display for BNKlineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            BNKlineError::InvalidLength => write!(f, "Invalid length"),
            BNKlineError::InvalidType(string) => write!(f, "Invalid type: {}", string),
            BNKlineError::ConnectionFailed(msg) => {
                write!(f, "Binance API connection failed: {}.", msg)
            }
        }
    }
}

impl Error for BNKlineError {}

fn inner_string_to_float(kline: Option<KlinesItemInner>) -> Option<f64> {
    kline.and_then(|inner| {
        if let KlinesItemInner::String(s) = inner {
            s.parse::<f64>().ok()
        } else {
            None
        }
    })
}

impl TryFrom<Vec<KlinesItemInner>> for BNKline {
    type Error = BNKlineError;

    fn try_from(row: Vec<KlinesItemInner>) -> Result<Self, Self::Error> {
        let mut items = row.into_iter();
        let open_timestamp_ms = match items.next().ok_or(BNKlineError::InvalidLength)? {
            KlinesItemInner::Integer(a) => a,
            _ => return Err(BNKlineError::InvalidType("open_time".to_string())),
        };

        let open_price = inner_string_to_float(items.next());
        let high_price = inner_string_to_float(items.next());
        let low_price = inner_string_to_float(items.next());
        let close_price = inner_string_to_float(items.next());
        let volume = inner_string_to_float(items.next());
        let _close_time = items.next();
        let quote_asset_volume = inner_string_to_float(items.next());

        Ok(BNKline {
            open_timestamp_ms,
            open_price,
            high_price,
            low_price,
            close_price,
            base_asset_volume: volume.map(BaseVol::new),
            quote_asset_volume: quote_asset_volume.map(QuoteVol::new),
        })
    }
}

impl From<BNKline> for Candle {
    fn from(bn: BNKline) -> Self {
        Candle::new(
            bn.open_timestamp_ms,
            bn.open_price.unwrap_or_default(),
            bn.high_price.unwrap_or_default(),
            bn.low_price.unwrap_or_default(),
            bn.close_price.unwrap_or_default(),
            bn.base_asset_volume.unwrap_or_default(),
            bn.quote_asset_volume.unwrap_or_default(),
        )
    }
}

fn convert_klines(data: Vec<Vec<KlinesItemInner>>) -> Result<Vec<BNKline>, BNKlineError> {
    data.into_iter().map(BNKline::try_from).collect()
}

fn configure_binance_client() -> Result<RestApi> {
    let config = BinanceApiConfig::default();
    let rest_conf = ConfigurationRestApi::builder()
        .timeout(config.timeout_ms)
        .retries(config.retries)
        .backoff(config.backoff_ms)
        .build()?;
    Ok(SpotRestApi::production(rest_conf))
}

async fn fetch_binance_klines(
    rest_client: &RestApi,
    params: KlinesParams,
    symbol: &str,
) -> Result<Vec<Vec<KlinesItemInner>>> {
    match rest_client.klines(params).await {
        Ok(r) => Ok(r.data().await?),
        Err(e) => {
            if let Some(conn_err) = e.downcast_ref::<errors::ConnectorError>() {
                match conn_err {
                    connection_error::ConnectorClientError(msg) => {
                        log::error!("{} Client error: Check your request parameters. {}", symbol, msg);
                    }
                    connection_error::TooManyRequestsError(msg) => {
                        log::warn!("{} Rate limit exceeded. {}", symbol, msg);
                    }
                    connection_error::RateLimitBanError(msg) => {
                        log::error!("{} IP address banned due to excessive rate limits. {}", symbol, msg);
                    }
                    errors::ConnectorError::ServerError { msg, status_code } => {
                        log::error!("{} Server error: {} (status code: {:?})", symbol, msg, status_code);
                    }
                    errors::ConnectorError::NetworkError(msg) => {
                        log::error!("{} Network error: Check your internet connection. {}", symbol, msg);
                    }
                    other => {
                        log::error!("{} Unexpected connector error: {:?}", symbol, other);
                    }
                }
                Err(anyhow::Error::new(BNKlineError::ConnectionFailed(conn_err.to_string()))
                    .context(format!("Binance kline call failed for {}", symbol)))
            } else {
                Err(anyhow::Error::new(BNKlineError::ConnectionFailed(e.to_string()))
                    .context(format!("Unexpected error during kline call for {}", symbol)))
            }
        }
    }
}

/// One page of klines, oldest first. Every chart period fits in a single request.
pub async fn load_klines(symbol: &str, request: KlineRequest) -> Result<Vec<Candle>> {
    let rest_client = configure_binance_client()?;
    let interval = try_interval_from_ms(request.interval_ms).map_err(anyhow::Error::msg)?;

    let params = KlinesParams::builder(symbol.to_string(), interval)
        .limit(request.limit)
        .build()?;

    let rows = fetch_binance_klines(&rest_client, params, symbol).await?;
    let klines = convert_klines(rows)
        .map_err(anyhow::Error::new)
        .with_context(|| format!("{} convert_klines failed", symbol))?;

    if klines.is_empty() {
        bail!("{}: Binance returned zero klines", symbol);
    }

    #[cfg(debug_assertions)]
    if DF.log_feed {
        log::info!(
            "Loaded {} {} klines for {}",
            klines.len(),
            TimeUtils::interval_to_string(request.interval_ms),
            symbol
        );
    }

    Ok(klines.into_iter().map(Candle::from).collect())
}

/// Close prices labelled in the given zone, with base-asset volume attached.
pub fn candles_to_series<Tz: TimeZone>(candles: &[Candle], period: ChartPeriod, tz: &Tz) -> ChartSeries
where
    Tz::Offset: fmt::Display,
{
    let points = candles
        .iter()
        .map(|c| ChartPoint {
            label: epoch_ms_to_chart_label(c.timestamp_ms, period, tz),
            price: c.close_price,
            volume: Some(c.base_asset_volume.value()),
        })
        .collect();
    ChartSeries::new(CHART.title_crypto, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(open_ms: i64, close: &str, volume: &str) -> Vec<KlinesItemInner> {
        vec![
            KlinesItemInner::Integer(open_ms),
            KlinesItemInner::String("100.0".into()),
            KlinesItemInner::String("110.0".into()),
            KlinesItemInner::String("95.0".into()),
            KlinesItemInner::String(close.into()),
            KlinesItemInner::String(volume.into()),
            KlinesItemInner::Integer(open_ms + TimeUtils::MS_IN_15_MIN - 1),
            KlinesItemInner::String("1000.0".into()),
        ]
    }

    #[test]
    fn rows_convert_to_candles() {
        let klines = convert_klines(vec![row(0, "105.5", "3.25")]).expect("valid row");
        let candle = Candle::from(klines.into_iter().next().expect("one kline"));
        assert_eq!(candle.open_price, 100.0);
        assert_eq!(candle.high_price, 110.0);
        assert_eq!(candle.low_price, 95.0);
        assert_eq!(candle.close_price, 105.5);
        assert_eq!(candle.base_asset_volume.value(), 3.25);
        assert_eq!(candle.quote_asset_volume.value(), 1000.0);
    }

    #[test]
    fn row_without_integer_open_time_is_rejected() {
        let bad = vec![KlinesItemInner::String("oops".into())];
        assert!(matches!(
            BNKline::try_from(bad),
            Err(BNKlineError::InvalidType(_))
        ));
        assert!(matches!(
            BNKline::try_from(Vec::new()),
            Err(BNKlineError::InvalidLength)
        ));
    }

    #[test]
    fn chart_periods_map_to_binance_intervals() {
        for period in ChartPeriod::ALL {
            assert!(try_interval_from_ms(period.kline_request().interval_ms).is_ok());
        }
        assert!(try_interval_from_ms(7).is_err());
    }

    #[test]
    fn series_uses_close_prices_and_period_labels() {
        // 2024-03-05 14:30 and 14:45 UTC
        let rows = vec![
            row(1_709_649_000_000, "101.0", "2.0"),
            row(1_709_649_900_000, "102.5", "4.0"),
        ];
        let candles: Vec<Candle> = convert_klines(rows)
            .expect("valid rows")
            .into_iter()
            .map(Candle::from)
            .collect();

        let series = candles_to_series(&candles, ChartPeriod::Day, &Utc);
        assert_eq!(series.title, CHART.title_crypto);
        assert_eq!(series.labels(), vec!["02:30 PM", "02:45 PM"]);
        assert_eq!(series.prices(), vec![101.0, 102.5]);
        assert_eq!(series.points[1].volume, Some(4.0));
    }
}
