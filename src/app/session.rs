//! Market state owned by the UI thread, advanced by timers and feed events.

use {
    crate::{
        app::Selection,
        data::{FeedCommand, FeedEvent, FeedHealth},
        domain::AssetClass,
        engine::{ClockSnapshot, TimerEvent, Timers, simulate_tick, simulated_chart},
        models::{ChartSeries, MarketBook},
        utils::AppInstant,
    },
    chrono::{DateTime, Local},
    rand::Rng,
};

#[cfg(debug_assertions)]
use crate::config::DF;

pub(crate) struct MarketSession {
    pub(crate) book: MarketBook,
    pub(crate) timers: Timers,
    pub(crate) clock: ClockSnapshot,
    pub(crate) health: FeedHealth,
    pub(crate) last_crypto_update: Option<DateTime<Local>>,
    location: String,
    simulated: ChartSeries,
    live_chart: Option<ChartSeries>,
    applied: Option<Selection>,
}

impl MarketSession {
    pub(crate) fn new(location: String, online: bool) -> Self {
        Self {
            book: MarketBook::new(),
            timers: Timers::new(),
            clock: ClockSnapshot::now(&location),
            health: if online {
                FeedHealth::Waiting
            } else {
                FeedHealth::Offline
            },
            last_crypto_update: None,
            location,
            simulated: ChartSeries::default(),
            live_chart: None,
            applied: None,
        }
    }

    /// Live candles when crypto has them, otherwise the simulated series.
    pub(crate) fn chart(&self, class: AssetClass) -> &ChartSeries {
        match (&self.live_chart, class) {
            (Some(live), AssetClass::Crypto) => live,
            _ => &self.simulated,
        }
    }

    /// Reacts to a class or period change. Returns the requests to hand to the feed.
    pub(crate) fn select<R: Rng + ?Sized>(
        &mut self,
        selection: Selection,
        rng: &mut R,
    ) -> Vec<FeedCommand> {
        if self.applied == Some(selection) {
            return Vec::new();
        }
        let previous = self.applied.replace(selection);

        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Selection {:?} -> {:?}", previous, selection);
        }

        self.simulated = simulated_chart(selection.class, selection.period, rng);

        let mut commands = Vec::new();
        if selection.class.is_live() {
            let was_live = previous.is_some_and(|p| p.class.is_live());
            if !was_live {
                self.timers.crypto_poll.fire_now();
            }
            commands.push(FeedCommand::RefreshChart(selection.period));
        }
        commands
    }

    /// Runs whatever timers are due. Returns the requests to hand to the feed.
    pub(crate) fn tick<R: Rng + ?Sized>(
        &mut self,
        now: AppInstant,
        selection: Selection,
        rng: &mut R,
    ) -> Vec<FeedCommand> {
        let mut commands = Vec::new();
        for event in self.timers.poll(now, selection.class.is_live()) {
            match event {
                TimerEvent::Clock => self.clock = ClockSnapshot::now(&self.location),
                TimerEvent::Simulation => {
                    simulate_tick(&mut self.book, rng);
                    self.simulated = simulated_chart(selection.class, selection.period, rng);
                }
                TimerEvent::CryptoPoll => commands.push(FeedCommand::RefreshTickers),
            }
        }
        commands
    }

    /// Folds a feed result into the book. Failures leave the previous data in place.
    pub(crate) fn apply(&mut self, event: FeedEvent, selection: Selection) {
        self.health.observe(&event);
        match event {
            FeedEvent::Tickers(quotes) => {
                self.book.replace_crypto(quotes);
                self.last_crypto_update = Some(Local::now());
            }
            FeedEvent::Chart(period, series) => {
                if period == selection.period {
                    self.live_chart = Some(series);
                } else {
                    #[cfg(debug_assertions)]
                    if DF.log_feed {
                        log::info!("Dropping {} chart; {} is selected", period, selection.period);
                    }
                }
            }
            FeedEvent::Failed { .. } => {}
        }
    }
}
