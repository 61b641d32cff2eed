use crate::codes::{
    AviationFlag, Metar, ObservationSystem, OfficeType, Radar, StationCode, UpperAir,
};
use crate::error::{AppError, Result};
use crate::station::Station;
use tracing::debug;

/// Station lines are exactly this many characters before any trimming.
const STATION_LINE_LEN: usize = 83;

/// Column-header and divider lines of the fixed-width table are exactly
/// this many characters after right-trimming.
const DIVIDER_LINE_LEN: usize = 78;

// Column layout of a station line as (offset, length) pairs, 0-indexed
// and counted in characters.
const STATE_PROVINCE_ABBREV: (usize, usize) = (0, 2);
const STATION_NAME: (usize, usize) = (3, 16);
const ICAO: (usize, usize) = (20, 4);
const IATA: (usize, usize) = (26, 3);
const SYNOP: (usize, usize) = (32, 5);
const LATITUDE: (usize, usize) = (39, 6);
const LONGITUDE: (usize, usize) = (47, 7);
const ELEVATION: (usize, usize) = (56, 6);
const METAR: (usize, usize) = (62, 1);
const RADAR: (usize, usize) = (65, 1);
const AVIATION_FLAG: (usize, usize) = (68, 1);
const UPPER_AIR: (usize, usize) = (71, 1);
const OBSERVATION_SYSTEM: (usize, usize) = (74, 1);
const OFFICE_TYPE: (usize, usize) = (77, 1);
const PRIORITY: (usize, usize) = (79, 1);
const COUNTRY: (usize, usize) = (81, 2);

#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    pub total_lines: usize,
    pub comment_lines: usize,
    pub divider_lines: usize,
    pub header_lines: usize,
    pub stations_parsed: usize,
    /// Station lines dropped because their ICAO column was blank.
    pub stations_skipped: usize,
}

pub struct StationParser;

impl StationParser {
    /// Parse a station table and return the stations in source order.
    ///
    /// Passing `None` is a contract violation and fails with
    /// [`AppError::InvalidInput`]; normal callers pass `&str` directly.
    pub fn parse_text<'a>(raw_text: impl Into<Option<&'a str>>) -> Result<Vec<Station>> {
        Self::parse_text_with_stats(raw_text).map(|(stations, _)| stations)
    }

    /// Parse a station table, also returning per-line-category counts.
    ///
    /// Lines are classified in order: comment (leading `!`), divider
    /// (right-trims to 78 characters), station line (exactly 83
    /// characters untrimmed), state/country header (anything else
    /// non-blank). Station lines with a blank ICAO column are skipped;
    /// a station line whose columns cannot all be sliced aborts the
    /// whole parse with [`AppError::LineParse`].
    pub fn parse_text_with_stats<'a>(
        raw_text: impl Into<Option<&'a str>>,
    ) -> Result<(Vec<Station>, ParseStats)> {
        let raw_text = raw_text.into().ok_or(AppError::InvalidInput)?;

        let mut stations = Vec::new();
        let mut stats = ParseStats::default();
        // Carried across lines within this call only; stations that
        // appear before any header keep an empty name.
        let mut state_country = String::new();

        for line in raw_text.split(['\n', '\r']).filter(|s| !s.is_empty()) {
            stats.total_lines += 1;
            let trimmed = line.trim_end();

            // Comment lines start with an exclamation point.
            if trimmed.starts_with('!') {
                stats.comment_lines += 1;
                continue;
            }
            if trimmed.chars().count() == DIVIDER_LINE_LEN {
                stats.divider_lines += 1;
                continue;
            }
            if line.chars().count() == STATION_LINE_LEN {
                match Self::extract_station(line)? {
                    Some(mut station) => {
                        station.state_country_name = state_country.clone();
                        stations.push(station);
                        stats.stations_parsed += 1;
                    }
                    None => {
                        debug!("Skipping station line with blank ICAO: {}", trimmed);
                        stats.stations_skipped += 1;
                    }
                }
            } else if !trimmed.is_empty() {
                state_country = header_name(trimmed);
                stats.header_lines += 1;
            }
        }

        Ok((stations, stats))
    }

    /// Extract one station from a fixed-width table line.
    ///
    /// Returns `Ok(None)` when the ICAO column is blank (the line carries
    /// no station) and [`AppError::LineParse`] when the line is too short
    /// for the column layout.
    pub fn extract_station(line: &str) -> Result<Option<Station>> {
        let chars: Vec<char> = line.chars().collect();

        let icao = column(&chars, line, ICAO)?;
        if icao.trim().is_empty() {
            return Ok(None);
        }

        let station = Station {
            // Filled in by the caller from the carried header state.
            state_country_name: String::new(),
            state_province_abbrev: column(&chars, line, STATE_PROVINCE_ABBREV)?,
            station_name: column(&chars, line, STATION_NAME)?.trim().to_string(),
            icao,
            iata: column(&chars, line, IATA)?,
            synop: parse_or_zero(&column(&chars, line, SYNOP)?),
            latitude: column(&chars, line, LATITUDE)?,
            longitude: column(&chars, line, LONGITUDE)?,
            elevation: parse_or_zero(&column(&chars, line, ELEVATION)?),
            metar: Metar::resolve(&column(&chars, line, METAR)?),
            radar: Radar::resolve(&column(&chars, line, RADAR)?),
            aviation_flag: AviationFlag::resolve(&column(&chars, line, AVIATION_FLAG)?),
            upper_air: UpperAir::resolve(&column(&chars, line, UPPER_AIR)?),
            observation_system: ObservationSystem::resolve(&column(
                &chars,
                line,
                OBSERVATION_SYSTEM,
            )?),
            office_type: OfficeType::resolve(&column(&chars, line, OFFICE_TYPE)?),
            country: column(&chars, line, COUNTRY)?,
            priority: parse_or_zero(&column(&chars, line, PRIORITY)?),
        };

        Ok(Some(station))
    }
}

/// A header line names the state or country the stations below it belong
/// to, usually followed by a revision date: the name is everything before
/// the last space.
fn header_name(trimmed: &str) -> String {
    match trimmed.rfind(' ') {
        Some(idx) if idx > 0 => trimmed[..idx].trim().to_string(),
        _ => trimmed.to_string(),
    }
}

fn column(chars: &[char], line: &str, (start, len): (usize, usize)) -> Result<String> {
    if start + len > chars.len() {
        return Err(AppError::LineParse(line.to_string()));
    }
    Ok(chars[start..start + len].iter().collect())
}

/// Numeric columns default to zero when blank or malformed. Trims first:
/// the columns are space-padded.
fn parse_or_zero(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}
