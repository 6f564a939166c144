use chrono::{DateTime, Local, TimeZone};

const UNKNOWN_CITY: &str = "Unknown";
const UNKNOWN_LOCATION: &str = "Unknown Location";
const ZONE_FILE: &str = "/etc/timezone";

/// What the header line shows: `date • location • time`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockSnapshot {
    pub date: String,
    pub time: String,
    pub location: String,
}

impl ClockSnapshot {
    pub fn now(location: &str) -> Self {
        Self::at(&Local::now(), location)
    }

    pub fn at<Tz: TimeZone>(dt: &DateTime<Tz>, location: &str) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            date: dt.format("%A, %B %-d, %Y").to_string(),
            time: dt.format("%I:%M:%S %p").to_string(),
            location: location.to_string(),
        }
    }

    pub fn header_line(&self) -> String {
        format!("{} • {} • {}", self.date, self.location, self.time)
    }
}

/// City part of an IANA zone name: `America/New_York` -> `New York`.
/// Zones without a region separator (`UTC`) give `Unknown`.
pub fn location_from_zone(zone: &str) -> String {
    zone.split('/')
        .nth(1)
        .filter(|city| !city.is_empty())
        .map(|city| city.replace('_', " "))
        .unwrap_or_else(|| UNKNOWN_CITY.to_string())
}

/// Best effort: a `TZ` zone name, then the OS zone, then the zone file.
/// Never fails.
pub fn detect_location() -> String {
    let zone = resolve_zone(std::env::var("TZ").ok().as_deref(), system_zone);
    location_or_unknown(zone)
}

fn system_zone() -> Option<String> {
    match iana_time_zone::get_timezone() {
        Ok(zone) => Some(zone),
        Err(e) => {
            log::warn!("OS time zone lookup failed: {}", e);
            std::fs::read_to_string(ZONE_FILE).ok()
        }
    }
}

fn resolve_zone(tz: Option<&str>, system: impl FnOnce() -> Option<String>) -> Option<String> {
    tz.and_then(zone_from_tz)
        .or_else(system)
        .map(|zone| zone.trim().to_string())
        .filter(|zone| !zone.is_empty())
}

/// `TZ` may name a zone (`Europe/London`) or a file (`:/etc/localtime`).
/// Files only count when they sit under a `zoneinfo` tree.
fn zone_from_tz(tz: &str) -> Option<String> {
    let tz = tz.trim().trim_start_matches(':');
    if tz.is_empty() {
        return None;
    }
    if tz.starts_with('/') || tz.starts_with('.') {
        return tz
            .split_once("zoneinfo/")
            .map(|(_, zone)| zone.to_string())
            .filter(|zone| !zone.is_empty());
    }
    Some(tz.to_string())
}

fn location_or_unknown(zone: Option<String>) -> String {
    match zone {
        Some(z) => location_from_zone(&z),
        None => {
            log::warn!("Could not determine local time zone");
            UNKNOWN_LOCATION.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn city_from_zone_name() {
        assert_eq!(location_from_zone("America/New_York"), "New York");
        assert_eq!(location_from_zone("Asia/Kolkata"), "Kolkata");
        assert_eq!(location_from_zone("America/Argentina/Buenos_Aires"), "Argentina");
        assert_eq!(location_from_zone("UTC"), "Unknown");
        assert_eq!(location_from_zone("Europe/"), "Unknown");
    }

    #[test]
    fn tz_zone_name_wins_over_system() {
        let zone = resolve_zone(Some("Asia/Kolkata"), || Some("Europe/Paris".into()));
        assert_eq!(zone.as_deref(), Some("Asia/Kolkata"));
        assert_eq!(location_or_unknown(zone), "Kolkata");
    }

    #[test]
    fn tz_file_under_zoneinfo_gives_city() {
        let zone = resolve_zone(Some(":/usr/share/zoneinfo/Europe/London"), || None);
        assert_eq!(location_or_unknown(zone), "London");
    }

    #[test]
    fn tz_file_elsewhere_falls_back_to_system() {
        let zone = resolve_zone(Some(":/etc/localtime"), || Some("America/New_York\n".into()));
        assert_eq!(location_or_unknown(zone), "New York");

        let zone = resolve_zone(Some(""), || Some("Asia/Tokyo".into()));
        assert_eq!(location_or_unknown(zone), "Tokyo");
    }

    #[test]
    fn nothing_found_is_unknown_location() {
        assert_eq!(location_or_unknown(resolve_zone(None, || None)), "Unknown Location");
        assert_eq!(location_or_unknown(resolve_zone(None, || Some("  ".into()))), "Unknown Location");
        assert_eq!(location_or_unknown(resolve_zone(Some("UTC"), || None)), "Unknown");
    }

    #[test]
    fn snapshot_formats_date_and_time() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 16, 14, 5, 9).unwrap();
        let snap = ClockSnapshot::at(&dt, "Kolkata");
        assert_eq!(snap.date, "Friday, October 16, 2026");
        assert_eq!(snap.time, "02:05:09 PM");
        assert_eq!(
            snap.header_line(),
            "Friday, October 16, 2026 • Kolkata • 02:05:09 PM"
        );
    }
}
