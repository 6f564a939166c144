//! Chart and card colour configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Price line (#3b82f6)
    pub line_color: Color32,
    pub line_width: f32,
    pub grid_color: Color32,
    /// Y-Axis padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,
    pub main_chart_height: f32,
    pub analysis_chart_height: f32,

    // --- SEMANTIC COLORS ---
    pub color_up: Color32,
    pub color_down: Color32,
    pub color_info: Color32,
    pub color_warning: Color32,
    pub color_accent: Color32,

    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,

    pub color_card: Color32,
    pub color_card_border: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    line_color: Color32::from_rgb(59, 130, 246),
    line_width: 2.0,
    grid_color: Color32::from_rgba_premultiplied(13, 13, 13, 13),
    plot_y_padding_pct: 0.05,
    main_chart_height: 320.0,
    analysis_chart_height: 300.0,

    color_up: Color32::from_rgb(34, 197, 94),
    color_down: Color32::from_rgb(239, 68, 68),
    color_info: Color32::from_rgb(100, 200, 255),
    color_warning: Color32::from_rgb(250, 204, 21),
    color_accent: Color32::from_rgb(59, 130, 246),

    color_text_neutral: Color32::WHITE,
    color_text_subdued: Color32::from_gray(150),

    color_card: Color32::from_rgb(30, 33, 45),
    color_card_border: Color32::from_rgb(45, 50, 65),
};
