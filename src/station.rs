use crate::codes::{AviationFlag, Metar, ObservationSystem, OfficeType, Radar, UpperAir};
use serde::{Deserialize, Serialize};

/// One observation site from the master station table.
///
/// Built fully from a single table line and never mutated afterwards.
/// String fields keep their raw column content except `station_name`,
/// which is trimmed; `latitude`/`longitude` stay as formatted
/// degrees/minutes text. Equality is structural across every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Free-text state or country name from the most recent header line,
    /// empty when no header preceded this station.
    pub state_country_name: String,
    pub state_province_abbrev: String,
    pub station_name: String,
    pub icao: String,
    pub iata: String,
    /// International synoptic number, 0 when the column is blank or
    /// malformed.
    pub synop: i32,
    pub latitude: String,
    pub longitude: String,
    /// Station elevation in meters, 0 when the column is blank or
    /// malformed.
    pub elevation: i32,
    pub metar: Metar,
    pub radar: Radar,
    pub aviation_flag: AviationFlag,
    pub upper_air: UpperAir,
    pub observation_system: ObservationSystem,
    pub office_type: OfficeType,
    pub country: String,
    /// Plotting priority, 0 is highest.
    pub priority: i32,
}
