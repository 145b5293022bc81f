use std::collections::HashSet;

use radio_core::{AudioService, Direction, StationPlayer, StationStatus, SwitchLookup, SystemSound};
use serde::{Deserialize, Serialize};

/// Degrees the radio icon turns per frame while playing.
const ICON_SPIN: u16 = 2;
/// While playing, the view is redrawn every this many frames.
const REFRESH_EVERY: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Button {
    Ok,
    Cancel,
    Left,
    Right,
}

impl Button {
    /// Order in which simultaneous presses are considered.
    const PRIORITY: [Button; 4] = [Button::Ok, Button::Cancel, Button::Left, Button::Right];
}

/// Turns the set of held buttons into press edges.
#[derive(Debug, Default)]
pub struct EdgeTrigger {
    held: HashSet<Button>,
}

impl EdgeTrigger {
    /// Buttons that went from released to pressed since the previous poll,
    /// highest priority first.
    pub fn poll(&mut self, pressed: &[Button]) -> Vec<Button> {
        let now: HashSet<Button> = pressed.iter().copied().collect();
        let triggered = Button::PRIORITY
            .into_iter()
            .filter(|b| now.contains(b) && !self.held.contains(b))
            .collect();
        self.held = now;
        triggered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowEvent {
    Idle,
    Refresh,
    /// The window wants to be dismissed; the host pops the scene.
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioView {
    pub status: StationStatus,
    pub radio_icon: u32,
    pub station_icon: u32,
    pub icon_rotation: u16,
}

/// View model of the radio screen.
#[derive(Debug)]
pub struct RadioWindow {
    radio_icon: u32,
    station_icon: u32,
    icon_rotation: u16,
    animation_count: u32,
}

impl RadioWindow {
    pub fn new(radio_icon: u32, station_icon: u32) -> Self {
        RadioWindow {
            radio_icon,
            station_icon,
            icon_rotation: 0,
            animation_count: 0,
        }
    }

    /// Run one frame with the highest priority button pressed this frame.
    pub fn update<A: AudioService>(
        &mut self,
        triggered: Option<Button>,
        player: &mut StationPlayer<A>,
        switches: &impl SwitchLookup,
    ) -> WindowEvent {
        let mut event = WindowEvent::Idle;

        match triggered {
            Some(Button::Ok) => {
                player.audio_mut().play_system_sound(SystemSound::Ok);
                player.toggle();
                event = WindowEvent::Refresh;
            }
            Some(Button::Cancel) => {
                player.audio_mut().play_system_sound(SystemSound::Cancel);
                player.stop(switches);
                return WindowEvent::Close;
            }
            Some(Button::Left) => {
                player.audio_mut().play_system_sound(SystemSound::Cursor);
                player.change_station(Direction::Left);
                event = WindowEvent::Refresh;
            }
            Some(Button::Right) => {
                player.audio_mut().play_system_sound(SystemSound::Cursor);
                player.change_station(Direction::Right);
                event = WindowEvent::Refresh;
            }
            None => {}
        }

        if player.is_playing() {
            self.icon_rotation = (self.icon_rotation + ICON_SPIN) % 360;
            if self.animation_count % REFRESH_EVERY == 0 {
                event = WindowEvent::Refresh;
            }
            self.animation_count = self.animation_count.wrapping_add(1);
        }

        event
    }

    pub fn view<A: AudioService>(&self, player: &StationPlayer<A>) -> Option<RadioView> {
        player.status().map(|status| RadioView {
            status,
            radio_icon: self.radio_icon,
            station_icon: self.station_icon,
            icon_rotation: self.icon_rotation,
        })
    }

    pub fn icon_rotation(&self) -> u16 {
        self.icon_rotation
    }
}
