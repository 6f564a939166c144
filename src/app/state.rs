use {
    crate::domain::{AssetClass, ChartPeriod, View},
    serde::{Deserialize, Serialize},
};

/// UI choices that survive a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub(crate) struct Preferences {
    pub(crate) view: View,
    pub(crate) class: AssetClass,
    pub(crate) period: ChartPeriod,
}

impl Preferences {
    pub(crate) fn selection(&self) -> Selection {
        Selection {
            class: self.class,
            period: self.period,
        }
    }
}

/// The part of the preferences that decides which data is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Selection {
    pub(crate) class: AssetClass,
    pub(crate) period: ChartPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_crypto_dashboard_day_chart() {
        let prefs = Preferences::default();
        assert_eq!(prefs.view, View::Dashboard);
        assert_eq!(
            prefs.selection(),
            Selection {
                class: AssetClass::Crypto,
                period: ChartPeriod::Day
            }
        );
    }

    #[test]
    fn partial_saved_state_fills_missing_fields() {
        let prefs: Preferences = serde_json::from_str(r#"{"class":"Forex"}"#).expect("json");
        assert_eq!(prefs.class, AssetClass::Forex);
        assert_eq!(prefs.period, ChartPeriod::Day);
    }
}
