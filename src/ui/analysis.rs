use eframe::egui::{Align, Grid, Layout, RichText, ScrollArea, Ui};

use crate::{
    App,
    app::ExportStatus,
    config::PLOT_CONFIG,
    domain::AssetClass,
    models::KeyStats,
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt, direction_color, period_selector, show_price_chart},
    utils::{format_change, format_compact_volume, format_percent, format_price},
};

const LIST_WIDTH: f32 = 240.0;

/// Currency of the series behind each class's chart.
fn chart_currency(class: AssetClass) -> &'static str {
    match class {
        AssetClass::Stocks => "₹",
        AssetClass::Forex | AssetClass::Crypto => "$",
    }
}

fn key_stats_grid(ui: &mut Ui, stats: Option<KeyStats>, class: AssetClass) {
    let currency = chart_currency(class);
    let money = |v: f64| format!("{}{:.2}", currency, v);

    Grid::new("key_stats_grid")
        .num_columns(4)
        .spacing([32.0, 6.0])
        .show(ui, |ui| {
            let (open, high, low, volume) = match stats {
                Some(s) => (
                    money(s.open),
                    money(s.high),
                    money(s.low),
                    s.volume
                        .map(format_compact_volume)
                        .unwrap_or_else(|| "-".to_string()),
                ),
                None => ("-".into(), "-".into(), "-".into(), "-".into()),
            };
            ui.label_subdued(&UI_TEXT.ks_open);
            ui.label_subdued(&UI_TEXT.ks_high);
            ui.label_subdued(&UI_TEXT.ks_low);
            ui.label_subdued(&UI_TEXT.ks_volume);
            ui.end_row();
            ui.label(RichText::new(open).strong());
            ui.label(RichText::new(high).strong().color(PLOT_CONFIG.color_up));
            ui.label(RichText::new(low).strong().color(PLOT_CONFIG.color_down));
            ui.label(RichText::new(volume).strong());
            ui.end_row();
        });
}

impl App {
    pub(crate) fn render_analysis(&mut self, ui: &mut Ui) {
        let class = self.prefs.class;
        let mut email = false;
        let mut excel = false;
        let mut pdf = false;

        ui.horizontal(|ui| {
            ui.heading(RichText::new(&UI_TEXT.heading_analysis).color(UI_CONFIG.colors.heading));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                pdf = ui.button(UI_TEXT.btn_export_pdf.as_str()).clicked();
                excel = ui.button(UI_TEXT.btn_export_excel.as_str()).clicked();
                email = ui.button(UI_TEXT.btn_email.as_str()).clicked();
            });
        });

        match &self.export_status {
            Some(ExportStatus::Written(path)) => {
                ui.label(
                    RichText::new(format!("Saved {}", path.display()))
                        .small()
                        .color(PLOT_CONFIG.color_up),
                );
            }
            Some(ExportStatus::Opened(_)) => ui.label_subdued("Opened mail client"),
            Some(ExportStatus::Failed(e)) => {
                ui.label(RichText::new(e).small().color(PLOT_CONFIG.color_down));
            }
            None => {}
        }
        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(LIST_WIDTH);
                self.render_instrument_list(ui, class);
            });
            ui.vertical(|ui| self.render_price_analysis(ui, class));
        });

        if email {
            self.share_by_email(ui.ctx());
        }
        if excel {
            self.export_spreadsheet();
        }
        if pdf {
            self.export_pdf_report();
        }
    }

    fn render_instrument_list(&mut self, ui: &mut Ui, class: AssetClass) {
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.label_subheader(&UI_TEXT.heading_instruments);
            let matches = self.session.book.search(class, &self.search_text);
            if matches.is_empty() {
                ui.label_subdued(&UI_TEXT.label_no_matches);
            }
            ScrollArea::vertical()
                .id_salt("instrument_list")
                .max_height(PLOT_CONFIG.analysis_chart_height + 80.0)
                .show(ui, |ui| {
                    for instrument in matches {
                        let selected = self.selected_symbol.as_deref() == Some(instrument.symbol.as_str());
                        let text = format!(
                            "{}  {}",
                            instrument.symbol,
                            format_price(instrument.price, &instrument.currency, class)
                        );
                        if ui.selectable_label(selected, text).clicked() {
                            self.selected_symbol = Some(instrument.symbol.clone());
                        }
                    }
                });
        });
    }

    fn render_price_analysis(&mut self, ui: &mut Ui, class: AssetClass) {
        let session = &self.session;
        let chart = session.chart(class);

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label_subheader(&UI_TEXT.heading_price_analysis);
                ui.label_subdued(&chart.title);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.horizontal(|ui| period_selector(ui, &mut self.prefs.period));
                });
            });

            let selected = self
                .selected_symbol
                .as_deref()
                .and_then(|s| session.book.find(class, s));
            if let Some(i) = selected {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("{} · {}", i.symbol, i.name)).strong());
                    ui.label(format_price(i.price, &i.currency, class));
                    let color = direction_color(i.change);
                    ui.label(RichText::new(format_change(i.change, &i.currency, class)).color(color));
                    ui.label(RichText::new(format_percent(i.change_percent, true)).color(color));
                });
            }

            show_price_chart(ui, "analysis_chart", chart, PLOT_CONFIG.analysis_chart_height);
        });
        ui.add_space(12.0);

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label_subheader(&UI_TEXT.heading_key_stats);
            key_stats_grid(ui, chart.key_stats(), class);
        });
    }
}
