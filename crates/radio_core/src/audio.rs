//! Host services the radio relies on, and in-memory implementations of them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{ChannelHandle, SwitchId};

/// Short UI cues the host plays on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SystemSound {
    Ok,
    Cursor,
    Cancel,
}

/// Audio channels owned by the host.
pub trait AudioService {
    /// Start `track` looping on a new channel and return its handle.
    fn create_looping_channel(&mut self, track: &str) -> ChannelHandle;

    fn set_volume(&mut self, channel: ChannelHandle, level: f32);

    fn play_system_sound(&mut self, _sound: SystemSound) {}
}

/// Read access to the host's global boolean switches.
pub trait SwitchLookup {
    fn value(&self, id: SwitchId) -> bool;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub handle: ChannelHandle,
    pub track: String,
    pub looping: bool,
    pub volume: f32,
}

/// Channel bookkeeping without any decoding or output.
#[derive(Debug, Clone, Default)]
pub struct Mixer {
    channels: Vec<Channel>,
    sounds: Vec<SystemSound>,
}

impl Mixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, handle: ChannelHandle) -> Option<&Channel> {
        self.channels.iter().find(|c| c.handle == handle)
    }

    pub fn volume(&self, handle: ChannelHandle) -> Option<f32> {
        self.channel(handle).map(|c| c.volume)
    }

    /// Channels currently above zero volume.
    pub fn audible_channels(&self) -> Vec<&Channel> {
        self.channels.iter().filter(|c| c.volume > 0.0).collect()
    }

    pub fn system_sounds(&self) -> &[SystemSound] {
        &self.sounds
    }
}

impl AudioService for Mixer {
    fn create_looping_channel(&mut self, track: &str) -> ChannelHandle {
        let handle = ChannelHandle(self.channels.len() as u32 + 1);
        self.channels.push(Channel {
            handle,
            track: track.to_string(),
            looping: true,
            volume: 0.0,
        });
        handle
    }

    fn set_volume(&mut self, channel: ChannelHandle, level: f32) {
        match self.channels.iter_mut().find(|c| c.handle == channel) {
            Some(c) => c.volume = level.clamp(0.0, 1.0),
            None => tracing::warn!("Volume change for unknown channel {:?}", channel),
        }
    }

    fn play_system_sound(&mut self, sound: SystemSound) {
        self.sounds.push(sound);
    }
}

/// The host's switch table. Unset switches read as off.
#[derive(Debug, Clone, Default)]
pub struct SwitchTable {
    values: HashMap<SwitchId, bool>,
}

impl SwitchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch 0 stands for "no switch" and is never stored.
    pub fn set(&mut self, id: SwitchId, value: bool) {
        if id.0 == 0 {
            tracing::debug!("Ignoring write to {}", id);
            return;
        }
        tracing::debug!("Setting {} to {}", id, value);
        self.values.insert(id, value);
    }
}

impl SwitchLookup for SwitchTable {
    fn value(&self, id: SwitchId) -> bool {
        self.values.get(&id).copied().unwrap_or(false)
    }
}
