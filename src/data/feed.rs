//! Background worker that performs HTTP requests for the UI thread.
//!
//! The UI sends [`FeedCommand`]s; a dedicated thread running its own tokio
//! runtime answers each one with exactly one [`FeedEvent`]. Requests are
//! independent: a slow chart fetch never delays a ticker refresh.

use {
    eframe::egui,
    std::{
        sync::{Arc, mpsc},
        thread,
    },
    tokio::sync::mpsc as tokio_mpsc,
};

use crate::{
    data::MarketDataProvider,
    domain::{ChartPeriod, Instrument},
    models::ChartSeries,
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedCommand {
    RefreshTickers,
    RefreshChart(ChartPeriod),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    Tickers(Vec<Instrument>),
    Chart(ChartPeriod, ChartSeries),
    Failed { what: FeedCommand, error: String },
}

/// What the status bar shows about the live feed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeedHealth {
    #[default]
    Offline,
    Waiting,
    Live,
    Failing(String),
}

impl FeedHealth {
    pub fn observe(&mut self, event: &FeedEvent) {
        if *self == FeedHealth::Offline {
            return;
        }
        *self = match event {
            FeedEvent::Tickers(_) | FeedEvent::Chart(..) => FeedHealth::Live,
            FeedEvent::Failed { error, .. } => FeedHealth::Failing(error.clone()),
        };
    }

    pub fn label(&self) -> String {
        match self {
            FeedHealth::Offline => "Offline (simulated data only)".to_string(),
            FeedHealth::Waiting => "Connecting to Binance...".to_string(),
            FeedHealth::Live => "Live: Binance".to_string(),
            FeedHealth::Failing(error) => format!("Feed error: {}", error),
        }
    }
}

pub struct MarketFeed {
    cmd_tx: Option<tokio_mpsc::UnboundedSender<FeedCommand>>,
    event_rx: Option<mpsc::Receiver<FeedEvent>>,
}

impl MarketFeed {
    /// Starts the worker thread. `repaint` wakes the UI when an event lands.
    pub fn spawn(provider: Arc<dyn MarketDataProvider>, repaint: Option<egui::Context>) -> Self {
        let (cmd_tx, mut cmd_rx) = tokio_mpsc::unbounded_channel::<FeedCommand>();
        let (event_tx, event_rx) = mpsc::channel::<FeedEvent>();

        let spawned = thread::Builder::new()
            .name("market-feed".to_string())
            .spawn(move || {
                let rt = match tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create feed runtime: {}", e);
                        return;
                    }
                };
                rt.block_on(async move {
                    // Ends when every sender is dropped, i.e. when the MarketFeed goes away.
                    while let Some(cmd) = cmd_rx.recv().await {
                        let provider = provider.clone();
                        let event_tx = event_tx.clone();
                        let repaint = repaint.clone();
                        tokio::spawn(async move {
                            let event = run_command(provider.as_ref(), cmd).await;
                            if event_tx.send(event).is_ok() {
                                if let Some(ctx) = repaint {
                                    ctx.request_repaint();
                                }
                            }
                        });
                    }
                });
                #[cfg(debug_assertions)]
                if DF.log_feed {
                    log::info!("Market feed thread stopped");
                }
            });

        if let Err(e) = spawned {
            log::error!("Failed to start market feed thread: {}", e);
            return Self::offline();
        }

        Self {
            cmd_tx: Some(cmd_tx),
            event_rx: Some(event_rx),
        }
    }

    /// A feed that never touches the network. Commands are dropped.
    pub fn offline() -> Self {
        Self {
            cmd_tx: None,
            event_rx: None,
        }
    }

    pub fn is_online(&self) -> bool {
        self.cmd_tx.is_some()
    }

    pub fn send(&self, cmd: FeedCommand) {
        let Some(tx) = &self.cmd_tx else {
            return;
        };
        #[cfg(debug_assertions)]
        if DF.log_feed {
            log::info!("Feed request: {:?}", cmd);
        }
        if tx.send(cmd).is_err() {
            log::error!("Market feed thread is gone; dropped {:?}", cmd);
        }
    }

    /// Everything that arrived since the last call, oldest first.
    pub fn drain(&self) -> Vec<FeedEvent> {
        match &self.event_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        }
    }

    #[cfg(test)]
    fn recv_timeout(&self, timeout: std::time::Duration) -> Option<FeedEvent> {
        self.event_rx.as_ref()?.recv_timeout(timeout).ok()
    }
}

impl Default for MarketFeed {
    fn default() -> Self {
        Self::offline()
    }
}

async fn run_command(provider: &dyn MarketDataProvider, cmd: FeedCommand) -> FeedEvent {
    let result = match cmd {
        FeedCommand::RefreshTickers => provider.fetch_tickers().await.map(FeedEvent::Tickers),
        FeedCommand::RefreshChart(period) => provider
            .fetch_chart(period)
            .await
            .map(|series| FeedEvent::Chart(period, series)),
    };

    match result {
        Ok(event) => {
            #[cfg(debug_assertions)]
            if DF.log_feed {
                log::info!("Feed request {:?} succeeded", cmd);
            }
            event
        }
        Err(e) => {
            log::error!("Feed request {:?} failed: {:#}", cmd, e);
            FeedEvent::Failed {
                what: cmd,
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use async_trait::async_trait;
    use std::time::Duration;

    struct StubProvider;

    #[async_trait]
    impl MarketDataProvider for StubProvider {
        async fn fetch_tickers(&self) -> Result<Vec<Instrument>> {
            Ok(vec![Instrument::new("BTC", "Bitcoin", 65000.0, 500.0, 0.77, "$")])
        }

        async fn fetch_chart(&self, period: ChartPeriod) -> Result<ChartSeries> {
            if period == ChartPeriod::Year {
                bail!("no yearly data");
            }
            Ok(ChartSeries::from_pairs("BTC", vec!["a".into()], vec![1.0]))
        }
    }

    #[tokio::test]
    async fn failures_become_failed_events() {
        let event = run_command(&StubProvider, FeedCommand::RefreshChart(ChartPeriod::Year)).await;
        assert_eq!(
            event,
            FeedEvent::Failed {
                what: FeedCommand::RefreshChart(ChartPeriod::Year),
                error: "no yearly data".to_string(),
            }
        );
    }

    #[test]
    fn spawned_feed_answers_each_command() {
        let feed = MarketFeed::spawn(Arc::new(StubProvider), None);
        assert!(feed.is_online());

        feed.send(FeedCommand::RefreshTickers);
        let event = feed.recv_timeout(Duration::from_secs(5)).expect("ticker event");
        match event {
            FeedEvent::Tickers(list) => assert_eq!(list[0].symbol, "BTC"),
            other => panic!("unexpected event {:?}", other),
        }

        feed.send(FeedCommand::RefreshChart(ChartPeriod::Week));
        let event = feed.recv_timeout(Duration::from_secs(5)).expect("chart event");
        assert!(matches!(event, FeedEvent::Chart(ChartPeriod::Week, _)));
    }

    #[test]
    fn dropping_feed_stops_worker_thread() {
        let mut feed = MarketFeed::spawn(Arc::new(StubProvider), None);
        feed.send(FeedCommand::RefreshTickers);
        let rx = feed.event_rx.take().expect("event receiver");
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(5)),
            Ok(FeedEvent::Tickers(_))
        ));

        drop(feed);

        // The worker owns the only event sender, so disconnect means it exited.
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        );
    }

    #[test]
    fn offline_feed_swallows_commands() {
        let feed = MarketFeed::offline();
        feed.send(FeedCommand::RefreshTickers);
        assert!(!feed.is_online());
        assert!(feed.drain().is_empty());
    }

    #[test]
    fn health_tracks_latest_outcome() {
        let mut health = FeedHealth::Waiting;
        health.observe(&FeedEvent::Tickers(Vec::new()));
        assert_eq!(health, FeedHealth::Live);

        health.observe(&FeedEvent::Failed {
            what: FeedCommand::RefreshTickers,
            error: "timeout".into(),
        });
        assert_eq!(health, FeedHealth::Failing("timeout".into()));

        let mut offline = FeedHealth::Offline;
        offline.observe(&FeedEvent::Tickers(Vec::new()));
        assert_eq!(offline, FeedHealth::Offline);
    }
}
