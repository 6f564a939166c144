use eframe::egui::{
    Align, CentralPanel, Context, FontId, Grid, Layout, RichText, ScrollArea, SidePanel, TextEdit,
    TopBottomPanel, Window,
};
use strum::IntoEnumIterator;

use crate::{
    App,
    config::{PLOT_CONFIG, TICKER, TIMERS},
    data::FeedHealth,
    domain::{AssetClass, View},
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let search = ui.add(
                        TextEdit::singleline(&mut self.search_text)
                            .hint_text(UI_TEXT.search_hint.as_str())
                            .desired_width(UI_CONFIG.search_width),
                    );
                    // Searching only makes sense against the instrument list.
                    if search.changed() && !self.search_text.is_empty() {
                        self.prefs.view = View::Analysis;
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        // right_to_left: iterate reversed so the order reads left to right
                        for class in AssetClass::iter().rev() {
                            ui.selectable_value(&mut self.prefs.class, class, class.to_string());
                        }
                        ui.label_subdued(format!("{}:", UI_TEXT.label_category));
                    });
                });
            });
    }

    pub(crate) fn render_left_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.side_panel_frame();

        SidePanel::left("left_panel")
            .exact_width(UI_CONFIG.sidebar_width)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(&UI_TEXT.app_name)
                        .heading()
                        .strong()
                        .color(UI_CONFIG.colors.logo),
                );
                ui.label_subdued(&UI_TEXT.app_tagline);
                ui.add_space(16.0);

                let font = FontId::proportional(14.0);
                let idle = UI_CONFIG.colors.label;
                if ui
                    .interactive_label(
                        &UI_TEXT.nav_dashboard,
                        self.prefs.view == View::Dashboard,
                        idle,
                        font.clone(),
                    )
                    .clicked()
                {
                    self.prefs.view = View::Dashboard;
                }
                if ui
                    .interactive_label(
                        &UI_TEXT.nav_analysis,
                        self.prefs.view == View::Analysis,
                        idle,
                        font.clone(),
                    )
                    .clicked()
                {
                    self.prefs.view = View::Analysis;
                }
                if ui
                    .interactive_label(&UI_TEXT.nav_settings, self.show_settings, idle, font)
                    .clicked()
                {
                    self.show_settings = !self.show_settings;
                }

                ui.with_layout(Layout::bottom_up(Align::LEFT), |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(&UI_TEXT.user_initials)
                                .strong()
                                .background_color(PLOT_CONFIG.color_accent)
                                .color(PLOT_CONFIG.color_text_neutral),
                        );
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&UI_TEXT.user_name).strong());
                            ui.label_subdued(&UI_TEXT.user_role);
                        });
                    });
                    ui.separator();
                });
            });
    }

    pub(crate) fn render_ticker_panel(&mut self, ctx: &Context) {
        let panel_frame = UI_CONFIG.bottom_panel_frame();

        TopBottomPanel::bottom("ticker_panel")
            .frame(panel_frame)
            .min_height(TICKER.height)
            .resizable(false)
            .show(ctx, |ui| {
                if let Some((class, symbol)) = self.ticker_state.render(ui) {
                    self.focus_instrument(class, symbol);
                }
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();

        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let health = &self.session.health;
                    let color = match health {
                        FeedHealth::Live => PLOT_CONFIG.color_up,
                        FeedHealth::Waiting => PLOT_CONFIG.color_warning,
                        FeedHealth::Failing(_) => PLOT_CONFIG.color_down,
                        FeedHealth::Offline => PLOT_CONFIG.color_text_subdued,
                    };
                    ui.label(RichText::new(&UI_TEXT.sp_live).small().color(color));
                    ui.label(RichText::new(health.label()).small().color(color));

                    ui.separator();

                    let last = self
                        .session
                        .last_crypto_update
                        .map(|t| t.format("%I:%M:%S %p").to_string())
                        .unwrap_or_else(|| UI_TEXT.sp_never.clone());
                    ui.metric(&UI_TEXT.sp_last_update, &last, PLOT_CONFIG.color_info);

                    ui.separator();

                    ui.metric(
                        &self.prefs.class.to_string(),
                        &format!("{} instruments", self.session.book.instruments(self.prefs.class).len()),
                        PLOT_CONFIG.color_text_neutral,
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued(&self.session.clock.time);
                    });
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.central_panel_frame();

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            ScrollArea::vertical()
                .id_salt("central_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| match self.prefs.view {
                    View::Dashboard => self.render_dashboard(ui),
                    View::Analysis => self.render_analysis(ui),
                });
        });
    }

    pub(crate) fn render_settings_window(&mut self, ctx: &Context) {
        let mut open = self.show_settings;

        Window::new(UI_TEXT.heading_settings.as_str())
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        ui.label_subheader(&UI_TEXT.label_feed_mode);
                        ui.label(self.session.health.label());
                        ui.end_row();

                        ui.label_subheader(&UI_TEXT.label_refresh);
                        ui.label(format!(
                            "clock {}s, simulation {}s, crypto {}s",
                            TIMERS.clock.as_secs(),
                            TIMERS.simulation.as_secs(),
                            TIMERS.crypto_poll.as_secs()
                        ));
                        ui.end_row();

                        ui.label_subheader(&UI_TEXT.label_export_dir);
                        ui.label(self.export_dir.display().to_string());
                        ui.end_row();

                        ui.label_subheader("Location");
                        ui.label(&self.session.clock.location);
                        ui.end_row();
                    });
            });

        self.show_settings = open;
    }
}
