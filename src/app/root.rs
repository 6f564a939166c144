use {
    eframe::{
        Frame, Storage,
        egui::{Context, OpenUrl, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{path::PathBuf, sync::Arc},
};

use crate::{
    Cli,
    app::{MarketSession, Preferences},
    config::PERSISTENCE,
    data::{BinanceProvider, FeedCommand, MarketFeed},
    domain::{AssetClass, View},
    engine::detect_location,
    export::{SHARE_BODY, SHARE_SUBJECT, export_csv, export_report, mailto_link},
    ui::{TickerState, UI_CONFIG},
    utils::AppInstant,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Outcome of the last export button, shown under the buttons.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ExportStatus {
    Written(PathBuf),
    Opened(String),
    Failed(String),
}

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) prefs: Preferences, // persists across sessions.
    #[serde(skip)]
    pub(crate) session: MarketSession,
    #[serde(skip)]
    pub(crate) feed: MarketFeed,
    #[serde(skip)]
    pub(crate) search_text: String,
    #[serde(skip)]
    pub(crate) selected_symbol: Option<String>,
    #[serde(skip)]
    pub(crate) export_dir: PathBuf,
    #[serde(skip)]
    pub(crate) export_status: Option<ExportStatus>,
    #[serde(skip)]
    pub(crate) show_settings: bool,
    #[serde(skip)]
    pub(crate) ticker_state: TickerState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            prefs: Preferences::default(),
            session: MarketSession::new(detect_location(), false),
            feed: MarketFeed::offline(),
            search_text: String::new(),
            selected_symbol: None,
            export_dir: PathBuf::from(PERSISTENCE.export.directory),
            export_status: None,
            show_settings: false,
            ticker_state: TickerState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        if let Some(class) = args.category {
            app.prefs.class = class;
        }
        if let Some(period) = args.period {
            app.prefs.period = period;
        }
        if let Some(dir) = args.export_dir {
            app.export_dir = dir;
        }

        app.feed = if args.offline {
            MarketFeed::offline()
        } else {
            match BinanceProvider::new() {
                Ok(provider) => MarketFeed::spawn(Arc::new(provider), Some(cc.egui_ctx.clone())),
                Err(e) => {
                    log::error!("Live feed disabled: {:#}", e);
                    MarketFeed::offline()
                }
            }
        };
        app.session = MarketSession::new(detect_location(), app.feed.is_online());

        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!(
                "Starting on {:?} / {} / {} (feed online: {})",
                app.prefs.view,
                app.prefs.class,
                app.prefs.period,
                app.feed.is_online()
            );
        }

        app
    }

    fn send_all(&self, commands: Vec<FeedCommand>) {
        for cmd in commands {
            self.feed.send(cmd);
        }
    }

    /// Feed results in, then due timers.
    fn advance(&mut self) {
        let selection = self.prefs.selection();
        for event in self.feed.drain() {
            self.session.apply(event, selection);
        }
        self.apply_selection();

        let commands = self
            .session
            .tick(AppInstant::now(), selection, &mut rand::thread_rng());
        self.send_all(commands);
    }

    /// Picks up class / period changes made by the UI this frame.
    pub(crate) fn apply_selection(&mut self) {
        let commands = self
            .session
            .select(self.prefs.selection(), &mut rand::thread_rng());
        self.send_all(commands);

        // Crypto quotes may still be loading; keep a ticker pick until they land.
        let quotes = self.session.book.instruments(self.prefs.class);
        if let Some(symbol) = &self.selected_symbol {
            if !quotes.is_empty() && !quotes.iter().any(|i| &i.symbol == symbol) {
                self.selected_symbol = None;
            }
        }
    }

    /// Ticker click: jump to the instrument on the analysis view.
    pub(crate) fn focus_instrument(&mut self, class: AssetClass, symbol: String) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Focus {} ({})", symbol, class);
        }
        self.prefs.class = class;
        self.prefs.view = View::Analysis;
        self.selected_symbol = Some(symbol);
    }

    pub(crate) fn share_by_email(&mut self, ctx: &Context) {
        let link = mailto_link(SHARE_SUBJECT, SHARE_BODY);
        ctx.open_url(OpenUrl::new_tab(&link));
        self.export_status = Some(ExportStatus::Opened(link));
    }

    pub(crate) fn export_spreadsheet(&mut self) {
        let class = self.prefs.class;
        let result = export_csv(class, self.session.book.instruments(class), &self.export_dir);
        self.record_export(result);
    }

    pub(crate) fn export_pdf_report(&mut self) {
        let class = self.prefs.class;
        let stats = self.session.chart(class).key_stats();
        let result = export_report(
            class,
            self.prefs.period,
            self.session.book.instruments(class),
            stats.as_ref(),
            &self.export_dir,
        );
        self.record_export(result);
    }

    fn record_export(&mut self, result: anyhow::Result<PathBuf>) {
        self.export_status = Some(match result {
            Ok(path) => ExportStatus::Written(path),
            Err(e) => {
                log::error!("Export failed: {:#}", e);
                ExportStatus::Failed(format!("{:#}", e))
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.advance();
        self.ticker_state.update_data(&self.session.book);

        self.render_top_panel(ctx);
        self.render_left_panel(ctx);
        self.render_status_panel(ctx);
        self.render_ticker_panel(ctx);
        self.render_central_panel(ctx);
        self.render_settings_window(ctx);

        self.apply_selection();

        let wait = self
            .session
            .timers
            .next_deadline(AppInstant::now(), self.prefs.class.is_live());
        ctx.request_repaint_after(wait);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("💾 SAVE [App]: {:?}", self.prefs);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
