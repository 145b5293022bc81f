//! Decoding of the host's plugin parameter table.
//!
//! The host hands plugins a flat `name -> string` map. Structured values are
//! JSON encoded inside those strings, sometimes twice: `Stations` is a JSON
//! array of strings, each string a JSON object whose `Playlist` field is
//! itself a JSON array string.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{ConfigError, RadioConfig, StationConfig, SwitchId};

const STATIONS: &str = "Stations";
const AUTOPLAY: &str = "AutoplayRadio";
const ALLOW_IN_MENU: &str = "AllowInMenu";
const MUTE_ON_MAP_CHANGE: &str = "MuteOnMapChange";
const RADIO_ICON: &str = "RadioIcon";
const STATION_ICON: &str = "StationIcon";
const RADIO_SWITCH: &str = "RadioSwitch";

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawStation {
    #[serde(default)]
    name: String,
    #[serde(default)]
    volume: String,
    #[serde(default)]
    playlist: String,
}

impl RadioConfig {
    /// Build a config from the host parameter table, falling back to the
    /// defaults for any missing key.
    pub fn from_plugin_parameters(params: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = RadioConfig::default();

        let stations = match params.get(STATIONS) {
            Some(raw) => parse_stations(raw)?,
            None => defaults.stations,
        };

        let config = RadioConfig {
            stations,
            autoplay: flag(params, AUTOPLAY, defaults.autoplay)?,
            allow_in_menu: flag(params, ALLOW_IN_MENU, defaults.allow_in_menu)?,
            mute_on_map_change: flag(params, MUTE_ON_MAP_CHANGE, defaults.mute_on_map_change)?,
            radio_icon: number(params, RADIO_ICON, defaults.radio_icon)?,
            station_icon: number(params, STATION_ICON, defaults.station_icon)?,
            override_switch: SwitchId::from_raw(number(params, RADIO_SWITCH, 0)?),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every station has a track to loop and a volume in [0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for station in &self.stations {
            if !(0.0..=1.0).contains(&station.volume) {
                return Err(ConfigError::VolumeOutOfRange {
                    station: station.name.clone(),
                    volume: station.volume,
                });
            }
            if station.background_track().is_none() {
                return Err(ConfigError::EmptyPlaylist {
                    station: station.name.clone(),
                });
            }
        }
        Ok(())
    }
}

fn parse_stations(raw: &str) -> Result<Vec<StationConfig>, ConfigError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let entries: Vec<String> = decode(STATIONS, raw)?;
    entries
        .iter()
        .map(|entry| {
            let station: RawStation = decode(STATIONS, entry)?;
            // The host editor leaves a blank volume field as an empty string, read as 0
            let volume = match station.volume.trim() {
                "" => 0.0,
                raw => raw.parse::<f32>().map_err(|_| ConfigError::InvalidNumber {
                    key: format!("{}.Volume", station.name),
                    value: station.volume.clone(),
                })?,
            };
            let playlist: Vec<String> = if station.playlist.trim().is_empty() {
                Vec::new()
            } else {
                decode(STATIONS, &station.playlist)?
            };
            Ok(StationConfig::new(station.name, volume, playlist))
        })
        .collect()
}

fn decode<T: serde::de::DeserializeOwned>(key: &str, raw: &str) -> Result<T, ConfigError> {
    serde_json::from_str(raw).map_err(|source| ConfigError::MalformedJson {
        key: key.to_string(),
        source,
    })
}

fn flag(params: &HashMap<String, String>, key: &str, default: bool) -> Result<bool, ConfigError> {
    match params.get(key).map(|v| v.trim()) {
        None | Some("") => Ok(default),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(ConfigError::InvalidFlag {
            key: key.to_string(),
            value: other.to_string(),
        }),
    }
}

fn number(params: &HashMap<String, String>, key: &str, default: u32) -> Result<u32, ConfigError> {
    match params.get(key).map(|v| v.trim()) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
