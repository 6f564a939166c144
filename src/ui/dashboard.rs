use eframe::egui::{Align, Layout, RichText, Ui};

use crate::{
    App,
    config::PLOT_CONFIG,
    domain::{AssetClass, Instrument},
    models::SUMMARY_CARD_COUNT,
    ui::{
        UI_CONFIG, UI_TEXT, UiStyleExt, direction_color, period_selector, show_price_chart,
        ui_text::{ICON_DOWN, ICON_UP},
    },
    utils::{format_change, format_percent, format_price},
};

fn trend_icon(instrument: &Instrument) -> &'static str {
    if instrument.is_up() { ICON_UP } else { ICON_DOWN }
}

fn summary_card(ui: &mut Ui, instrument: &Instrument, class: AssetClass) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(&instrument.symbol).strong());
            ui.label_subdued(&instrument.name);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(trend_icon(instrument))
                        .strong()
                        .color(direction_color(instrument.change)),
                );
            });
        });
        ui.label(
            RichText::new(format_price(instrument.price, &instrument.currency, class))
                .size(20.0)
                .strong()
                .color(PLOT_CONFIG.color_text_neutral),
        );
        let color = direction_color(instrument.change);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format_change(instrument.change, &instrument.currency, class))
                    .color(color),
            );
            ui.label(RichText::new(format_percent(instrument.change_percent, false)).color(color));
        });
    });
}

fn mover_row(ui: &mut Ui, instrument: &Instrument, class: AssetClass) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(instrument.icon_text())
                .monospace()
                .strong()
                .background_color(PLOT_CONFIG.color_card_border),
        );
        ui.vertical(|ui| {
            ui.label(RichText::new(&instrument.symbol).strong());
            ui.label_subdued(&instrument.name);
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.vertical(|ui| {
                ui.label(format_price(instrument.price, &instrument.currency, class));
                ui.label(
                    RichText::new(format_percent(instrument.change_percent, true))
                        .small()
                        .color(direction_color(instrument.change)),
                );
            });
        });
    });
}

impl App {
    pub(crate) fn render_dashboard(&mut self, ui: &mut Ui) {
        let class = self.prefs.class;
        let session = &self.session;

        ui.heading(RichText::new(&UI_TEXT.heading_overview).color(UI_CONFIG.colors.heading));
        ui.label_subdued(session.clock.header_line());
        ui.add_space(12.0);

        let summary = session.book.summary(class);
        if summary.is_empty() {
            ui.label_subdued(&UI_TEXT.label_waiting_for_quotes);
        } else {
            ui.columns(SUMMARY_CARD_COUNT, |cols| {
                for (col, instrument) in cols.iter_mut().zip(summary) {
                    summary_card(col, instrument, class);
                }
            });
        }
        ui.add_space(12.0);

        let chart = session.chart(class);
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label_subheader(&UI_TEXT.heading_performance);
                ui.label_subdued(&chart.title);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    // right_to_left reverses visual order; keep 1D on the left
                    ui.horizontal(|ui| period_selector(ui, &mut self.prefs.period));
                });
            });
            show_price_chart(ui, "dashboard_chart", chart, PLOT_CONFIG.main_chart_height);
        });
        ui.add_space(12.0);

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label_subheader(&UI_TEXT.heading_top_movers);
            ui.add_space(4.0);
            let movers = session.book.top_movers(class);
            if movers.is_empty() {
                ui.label_subdued(&UI_TEXT.label_waiting_for_quotes);
            }
            for instrument in &movers {
                mover_row(ui, instrument, class);
                ui.separator();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_icon_follows_direction() {
        let up = Instrument::new("TCS", "Tata Consultancy", 3500.0, 0.0, 0.0, "₹");
        let down = Instrument::new("INFY", "Infosys", 1450.0, -12.5, -0.85, "₹");
        assert_eq!(trend_icon(&up), ICON_UP);
        assert_eq!(trend_icon(&down), ICON_DOWN);
    }
}
