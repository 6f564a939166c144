use std::sync::LazyLock;

pub const ICON_DASHBOARD: &str = "📊";
pub const ICON_ANALYSIS: &str = "📈";
pub const ICON_SETTINGS: &str = "⚙";
pub const ICON_SEARCH: &str = "🔍";
pub const ICON_EMAIL: &str = "✉";
pub const ICON_EXPORT: &str = "💾";
pub const ICON_UP: &str = "⏶";
pub const ICON_DOWN: &str = "⏷";
pub const ICON_LIVE: &str = "⏺";

pub struct UiText {
    pub app_name: String,
    pub app_tagline: String,

    // Navigation
    pub nav_dashboard: String,
    pub nav_analysis: String,
    pub nav_settings: String,

    // Profile block
    pub user_name: String,
    pub user_role: String,
    pub user_initials: String,

    // Top bar
    pub search_hint: String,
    pub label_category: String,

    // Dashboard
    pub heading_overview: String,
    pub heading_performance: String,
    pub heading_top_movers: String,
    pub label_waiting_for_quotes: String,

    // Analysis
    pub heading_analysis: String,
    pub heading_price_analysis: String,
    pub heading_key_stats: String,
    pub heading_instruments: String,
    pub label_no_matches: String,
    pub btn_email: String,
    pub btn_export_excel: String,
    pub btn_export_pdf: String,
    pub ks_open: String,
    pub ks_high: String,
    pub ks_low: String,
    pub ks_volume: String,

    // Settings
    pub heading_settings: String,
    pub label_feed_mode: String,
    pub label_refresh: String,
    pub label_export_dir: String,

    // Status bar
    pub sp_last_update: String,
    pub sp_never: String,
    pub sp_live: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_name: "TradePro".to_string(),
    app_tagline: "Market Dashboard".to_string(),

    nav_dashboard: format!("{} Dashboard", ICON_DASHBOARD),
    nav_analysis: format!("{} Analysis", ICON_ANALYSIS),
    nav_settings: format!("{} Settings", ICON_SETTINGS),

    user_name: "Karthik".to_string(),
    user_role: "Pro Trader".to_string(),
    user_initials: "KA".to_string(),

    search_hint: format!("{} Search symbols...", ICON_SEARCH),
    label_category: "Market".to_string(),

    heading_overview: "Market Overview".to_string(),
    heading_performance: "Market Performance".to_string(),
    heading_top_movers: "Top Movers".to_string(),
    label_waiting_for_quotes: "Waiting for live quotes...".to_string(),

    heading_analysis: "Analysis".to_string(),
    heading_price_analysis: "Price Analysis".to_string(),
    heading_key_stats: "Key Statistics".to_string(),
    heading_instruments: "Instruments".to_string(),
    label_no_matches: "No matching symbols".to_string(),
    btn_email: format!("{} Email", ICON_EMAIL),
    btn_export_excel: format!("{} Export Excel", ICON_EXPORT),
    btn_export_pdf: format!("{} Export PDF", ICON_EXPORT),
    ks_open: "Open".to_string(),
    ks_high: "High".to_string(),
    ks_low: "Low".to_string(),
    ks_volume: "Volume".to_string(),

    heading_settings: format!("{} Settings", ICON_SETTINGS),
    label_feed_mode: "Crypto feed".to_string(),
    label_refresh: "Refresh".to_string(),
    label_export_dir: "Export folder".to_string(),

    sp_last_update: "Last crypto update".to_string(),
    sp_never: "never".to_string(),
    sp_live: ICON_LIVE.to_string(),
});
