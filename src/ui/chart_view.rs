use {
    crate::{config::PLOT_CONFIG, domain::ChartPeriod, models::ChartSeries, ui::UiStyleExt},
    eframe::egui::{Ui, Vec2b},
    egui_plot::{Axis, AxisHints, Line, Plot, PlotPoint, PlotPoints, VPlacement},
    std::ops::RangeInclusive,
};

/// Category axis: only integer marks inside the series get a label.
fn create_label_axis(labels: Vec<String>) -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .formatter(move |mark, _range| label_at(&labels, mark.value).unwrap_or_default())
        .placement(VPlacement::Bottom)
}

fn label_at(labels: &[String], x: f64) -> Option<String> {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return None;
    }
    labels.get(rounded as usize).cloned()
}

/// Price range padded by the configured fraction. Flat series get a unit band.
fn y_bounds(series: &ChartSeries) -> Option<RangeInclusive<f64>> {
    let (lo, hi) = series.price_range()?;
    let range = hi - lo;
    let pad = if range > f64::EPSILON {
        range * PLOT_CONFIG.plot_y_padding_pct
    } else {
        lo.abs().max(1.0) * PLOT_CONFIG.plot_y_padding_pct
    };
    Some((lo - pad)..=(hi + pad))
}

/// `1D 1W 1M 1Y` toggle row.
pub(crate) fn period_selector(ui: &mut Ui, period: &mut ChartPeriod) {
    for p in ChartPeriod::ALL {
        ui.selectable_value(period, p, p.to_string());
    }
}

/// Filled line chart of a series. Draws a placeholder when the series is empty.
pub(crate) fn show_price_chart(ui: &mut Ui, id: &str, series: &ChartSeries, height: f32) {
    let Some(y_range) = y_bounds(series) else {
        ui.add_space(height / 2.0);
        ui.vertical_centered(|ui| ui.label_subdued("No chart data yet"));
        ui.add_space(height / 2.0);
        return;
    };

    let labels = series.labels();
    let hover_labels = labels.clone();
    let x_max = (series.len().saturating_sub(1)).max(1) as f64;
    let points: Vec<[f64; 2]> = series
        .prices()
        .into_iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p])
        .collect();
    let fill_to = *y_range.start() as f32;

    Plot::new(id)
        .height(height)
        .custom_x_axes(vec![create_label_axis(labels)])
        .label_formatter(move |_name, value: &PlotPoint| {
            match label_at(&hover_labels, value.x.round()) {
                Some(label) => format!("{}\n{:.2}", label, value.y),
                None => format!("{:.2}", value.y),
            }
        })
        .show_grid(Vec2b { x: false, y: true })
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(0.0..=x_max);
            plot_ui.set_plot_bounds_y(y_range);
            plot_ui.line(
                Line::new(series.title.as_str(), PlotPoints::new(points))
                    .color(PLOT_CONFIG.line_color)
                    .width(PLOT_CONFIG.line_width)
                    .fill(fill_to),
            );
        });
}
