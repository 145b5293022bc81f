mod audio;
mod dial;
mod models;
mod params;

pub use crate::audio::*;
pub use crate::models::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parameter {key} is not valid JSON: {source}")]
    MalformedJson {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Parameter {key} expects a number, got {value:?}")]
    InvalidNumber { key: String, value: String },
    #[error("Parameter {key} expects true or false, got {value:?}")]
    InvalidFlag { key: String, value: String },
    #[error("Station {station:?} has volume {volume}, expected a value in [0, 1]")]
    VolumeOutOfRange { station: String, volume: f32 },
    #[error("Station {station:?} has an empty playlist")]
    EmptyPlaylist { station: String },
}

#[derive(Debug, Clone)]
struct TunedStation {
    config: StationConfig,
    channel: ChannelHandle,
}

/// The radio state machine.
///
/// Every station gets one looping channel at initialization; afterwards
/// channels are only muted or unmuted, and at most one is audible.
/// Until initialized with at least one station every operation is a no-op.
#[derive(Debug)]
pub struct StationPlayer<A> {
    audio: A,
    stations: Vec<TunedStation>,
    current_station: usize,
    is_playing: bool,
    override_switch: Option<SwitchId>,
    initialized: bool,
}

impl<A: AudioService> StationPlayer<A> {
    pub fn new(audio: A) -> Self {
        StationPlayer {
            audio,
            stations: Vec::new(),
            current_station: 1,
            is_playing: false,
            override_switch: None,
            initialized: false,
        }
    }

    /// Create a silent looping channel for every configured station.
    ///
    /// A second call on an initialized player does nothing. An empty station
    /// list leaves the player inert rather than failing.
    pub fn initialize(&mut self, config: &RadioConfig) {
        if self.initialized {
            tracing::debug!("Radio already initialized");
            return;
        }

        self.override_switch = config.override_switch.filter(|id| id.0 != 0);

        if config.stations.is_empty() {
            tracing::warn!("No radio stations configured, radio stays disabled");
            return;
        }

        self.stations = config
            .stations
            .iter()
            .map(|station| {
                let track = station.background_track().unwrap_or_default();
                let channel = self.audio.create_looping_channel(track);
                self.audio.set_volume(channel, 0.0);
                TunedStation {
                    config: station.clone(),
                    channel,
                }
            })
            .collect();
        self.initialized = true;
        tracing::info!("Radio initialized with {} stations", self.stations.len());
    }

    pub fn toggle(&mut self) {
        if !self.initialized {
            tracing::debug!("Ignoring toggle, radio not initialized");
            return;
        }

        self.is_playing = !self.is_playing;
        let station = self.current();
        let (channel, level) = if self.is_playing {
            (station.channel, station.config.volume)
        } else {
            (station.channel, 0.0)
        };
        tracing::info!(
            "Radio {} on {}",
            if self.is_playing { "playing" } else { "stopped" },
            station.config.name
        );
        self.audio.set_volume(channel, level);
    }

    pub fn change_station(&mut self, direction: Direction) {
        if !self.initialized {
            tracing::debug!("Ignoring station change, radio not initialized");
            return;
        }

        let previous = self.current().channel;
        self.current_station = dial::tune(self.current_station, direction, self.stations.len());
        let next = self.current();
        let (channel, volume) = (next.channel, next.config.volume);
        tracing::info!(
            "Tuned to station {} ({})",
            self.current_station,
            next.config.name
        );

        if self.is_playing {
            self.audio.set_volume(previous, 0.0);
            self.audio.set_volume(channel, volume);
        }
    }

    /// Scene teardown: stop playback unless the override switch is on.
    pub fn on_scene_terminate(&mut self, switches: &impl SwitchLookup) {
        if self.is_playing {
            self.stop(switches);
        }
    }

    /// Mute the current station unless the override switch is on.
    pub fn stop(&mut self, switches: &impl SwitchLookup) {
        if !self.initialized || self.is_overridden(switches) {
            return;
        }
        if self.is_playing {
            tracing::info!("Radio stopped on {}", self.current().config.name);
        }
        self.is_playing = false;
        let channel = self.current().channel;
        self.audio.set_volume(channel, 0.0);
    }

    pub fn status(&self) -> Option<StationStatus> {
        if !self.initialized {
            return None;
        }
        Some(StationStatus {
            station_name: self.current().config.name.clone(),
            is_playing: self.is_playing,
            station_index: self.current_station,
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// 1-based index of the selected station.
    pub fn current_station_index(&self) -> usize {
        self.current_station
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Channel backing the 1-based station `index`.
    pub fn channel(&self, index: usize) -> Option<ChannelHandle> {
        index
            .checked_sub(1)
            .and_then(|i| self.stations.get(i))
            .map(|s| s.channel)
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    fn is_overridden(&self, switches: &impl SwitchLookup) -> bool {
        self.override_switch.is_some_and(|id| switches.value(id))
    }

    fn current(&self) -> &TunedStation {
        &self.stations[self.current_station - 1]
    }
}
