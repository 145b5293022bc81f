use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationConfig {
    pub name: String,
    /// Playback gain in [0, 1]
    pub volume: f32,
    pub playlist: Vec<String>,
}

impl StationConfig {
    pub fn new(name: impl Into<String>, volume: f32, playlist: Vec<String>) -> Self {
        StationConfig {
            name: name.into(),
            volume,
            playlist,
        }
    }

    /// The track looped on this station's channel.
    ///
    /// Only the first playlist entry is ever played; later entries are kept so
    /// the configuration round-trips unchanged.
    pub fn background_track(&self) -> Option<&str> {
        self.playlist.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RadioConfig {
    pub stations: Vec<StationConfig>,
    /// Start playing the first station as soon as the radio is initialized
    pub autoplay: bool,
    /// Expose a radio entry in the main menu
    pub allow_in_menu: bool,
    /// Mute when a map scene is torn down
    pub mute_on_map_change: bool,
    pub radio_icon: u32,
    pub station_icon: u32,
    /// When this switch is on, scene exits never mute the radio
    pub override_switch: Option<SwitchId>,
}

impl Default for RadioConfig {
    fn default() -> Self {
        RadioConfig {
            stations: vec![
                StationConfig::new("Hits FM", 0.5, vec!["Battle1".into()]),
                StationConfig::new("Chill FM", 0.5, vec!["Theme1".into()]),
            ],
            autoplay: true,
            allow_in_menu: true,
            mute_on_map_change: true,
            radio_icon: 188,
            station_icon: 189,
            override_switch: None,
        }
    }
}

/// Index into the host's global boolean switch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwitchId(pub u32);

impl SwitchId {
    /// The host stores `0` for "no switch".
    pub fn from_raw(raw: u32) -> Option<SwitchId> {
        (raw != 0).then_some(SwitchId(raw))
    }
}

impl std::fmt::Display for SwitchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "switch#{}", self.0)
    }
}

/// Opaque handle to a host audio channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelHandle(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// What the host renderer needs to draw the radio view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationStatus {
    pub station_name: String,
    pub is_playing: bool,
    pub station_index: usize,
}
