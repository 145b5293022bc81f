mod window;

pub use crate::window::{Button, EdgeTrigger, RadioView, RadioWindow, WindowEvent};

use radio_core::{
    AudioService, Direction, RadioConfig, StationPlayer, StationStatus, SwitchId, SwitchTable,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SceneKind {
    Map,
    Menu,
    Radio,
    Battle,
    Other,
}

/// Lifecycle callbacks the host invokes on scene boundaries.
pub trait SceneHook {
    fn on_scene_create(&mut self, _scene: SceneKind) {}

    fn on_scene_terminate(&mut self, scene: SceneKind);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MenuCommand {
    Radio,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum RadioCommand {
    Toggle,
    ChangeStation { direction: Direction },
    SceneTerminate { scene: SceneKind },
    SetSwitch { id: SwitchId, value: bool },
}

pub struct RadioEngine<A> {
    player: StationPlayer<A>,
    switches: SwitchTable,
    config: RadioConfig,
    input: EdgeTrigger,
    window: Option<RadioWindow>,
}

impl<A: AudioService> RadioEngine<A> {
    pub fn new(config: RadioConfig, audio: A) -> Self {
        let mut player = StationPlayer::new(audio);
        player.initialize(&config);
        if config.autoplay && player.is_initialized() {
            tracing::info!("Autoplay enabled, starting radio");
            player.toggle();
        }
        RadioEngine {
            player,
            switches: SwitchTable::new(),
            config,
            input: EdgeTrigger::default(),
            window: None,
        }
    }

    pub fn player(&self) -> &StationPlayer<A> {
        &self.player
    }

    pub fn config(&self) -> &RadioConfig {
        &self.config
    }

    pub fn status(&self) -> Option<StationStatus> {
        self.player.status()
    }

    pub fn set_switch(&mut self, id: SwitchId, value: bool) {
        self.switches.set(id, value);
    }

    pub fn toggle(&mut self) -> Option<StationStatus> {
        self.player.toggle();
        self.player.status()
    }

    pub fn change_station(&mut self, direction: Direction) -> Option<StationStatus> {
        self.player.change_station(direction);
        self.player.status()
    }

    pub fn execute(&mut self, command: RadioCommand) -> Option<StationStatus> {
        match command {
            RadioCommand::Toggle => self.player.toggle(),
            RadioCommand::ChangeStation { direction } => self.player.change_station(direction),
            RadioCommand::SceneTerminate { scene } => self.on_scene_terminate(scene),
            RadioCommand::SetSwitch { id, value } => self.set_switch(id, value),
        }
        self.player.status()
    }

    /// Entries this radio contributes to the main menu.
    pub fn menu_commands(&self) -> Vec<MenuCommand> {
        if self.config.allow_in_menu {
            vec![MenuCommand::Radio]
        } else {
            Vec::new()
        }
    }

    /// Open the radio view. Returns `false` when there is nothing to show.
    pub fn open_radio(&mut self) -> bool {
        if !self.player.is_initialized() {
            tracing::debug!("Not opening radio, no stations configured");
            return false;
        }
        if self.window.is_none() {
            self.window = Some(RadioWindow::new(
                self.config.radio_icon,
                self.config.station_icon,
            ));
        }
        true
    }

    pub fn is_radio_open(&self) -> bool {
        self.window.is_some()
    }

    pub fn view(&self) -> Option<RadioView> {
        self.window.as_ref().and_then(|w| w.view(&self.player))
    }

    /// One host frame. `pressed` is every button held this frame.
    ///
    /// Input is tracked even while the radio view is closed, so a button
    /// still held from the frame that opened the view does not fire again.
    pub fn frame(&mut self, pressed: &[Button]) -> WindowEvent {
        let triggered = self.input.poll(pressed).first().copied();
        let Some(window) = self.window.as_mut() else {
            return WindowEvent::Idle;
        };
        let event = window.update(triggered, &mut self.player, &self.switches);
        if event == WindowEvent::Close {
            self.on_scene_terminate(SceneKind::Radio);
        }
        event
    }
}

impl<A: AudioService> SceneHook for RadioEngine<A> {
    fn on_scene_create(&mut self, scene: SceneKind) {
        if scene == SceneKind::Radio {
            self.open_radio();
        }
    }

    fn on_scene_terminate(&mut self, scene: SceneKind) {
        if scene == SceneKind::Radio {
            self.window = None;
        }
        if scene == SceneKind::Map && !self.config.mute_on_map_change {
            tracing::debug!("Map change muting disabled, keeping radio state");
            return;
        }
        self.player.on_scene_terminate(&self.switches);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radio_core::{Mixer, StationConfig};

    fn test_radio_config() -> RadioConfig {
        RadioConfig {
            stations: vec![
                StationConfig::new("Hits FM", 0.5, vec!["Battle1".into()]),
                StationConfig::new("Chill FM", 0.5, vec!["Theme1".into()]),
            ],
            autoplay: false,
            override_switch: Some(SwitchId(4)),
            ..RadioConfig::default()
        }
    }

    fn engine(config: RadioConfig) -> RadioEngine<Mixer> {
        RadioEngine::new(config, Mixer::new())
    }

    #[test]
    fn test_autoplay_starts_first_station() {
        let engine = engine(RadioConfig {
            autoplay: true,
            ..test_radio_config()
        });

        let status = engine.status().expect("Radio should be initialized");
        assert!(status.is_playing);
        assert_eq!(status.station_index, 1);
        assert_eq!(engine.player().audio().audible_channels().len(), 1);
    }

    #[test]
    fn test_no_autoplay() {
        let engine = engine(test_radio_config());
        assert!(!engine.player().is_playing());
        assert!(engine.player().audio().audible_channels().is_empty());
    }

    #[test]
    fn test_menu_commands() {
        assert_eq!(
            engine(test_radio_config()).menu_commands(),
            vec![MenuCommand::Radio]
        );

        let hidden = engine(RadioConfig {
            allow_in_menu: false,
            ..test_radio_config()
        });
        assert!(hidden.menu_commands().is_empty());
    }

    #[test]
    fn test_scene_terminate_mutes() {
        let mut engine = engine(test_radio_config());
        engine.toggle();

        engine.on_scene_terminate(SceneKind::Battle);
        assert!(!engine.player().is_playing());
    }

    #[test]
    fn test_scene_terminate_respects_override_switch() {
        let mut engine = engine(test_radio_config());
        engine.set_switch(SwitchId(4), true);
        engine.toggle();

        engine.on_scene_terminate(SceneKind::Menu);
        assert!(engine.player().is_playing());

        engine.set_switch(SwitchId(4), false);
        engine.on_scene_terminate(SceneKind::Menu);
        assert!(!engine.player().is_playing());
    }

    #[test]
    fn test_map_change_muting_can_be_disabled() {
        let mut engine = engine(RadioConfig {
            mute_on_map_change: false,
            ..test_radio_config()
        });
        engine.toggle();

        engine.on_scene_terminate(SceneKind::Map);
        assert!(engine.player().is_playing());

        engine.on_scene_terminate(SceneKind::Menu);
        assert!(!engine.player().is_playing());
    }

    #[test]
    fn test_radio_scene_round_trip() {
        let mut engine = engine(test_radio_config());

        engine.on_scene_create(SceneKind::Radio);
        assert!(engine.is_radio_open());

        engine.frame(&[Button::Right]);
        engine.frame(&[]);
        engine.frame(&[Button::Ok]);
        let view = engine.view().expect("Radio view should be open");
        assert_eq!(view.status.station_name, "Chill FM");
        assert!(view.status.is_playing);

        assert_eq!(engine.frame(&[Button::Cancel]), WindowEvent::Close);
        assert!(!engine.is_radio_open());
        assert!(!engine.player().is_playing());
        assert!(engine.view().is_none());
        assert_eq!(engine.frame(&[Button::Ok]), WindowEvent::Idle);
    }

    #[test]
    fn test_button_held_while_opening_radio() {
        let mut engine = engine(test_radio_config());

        // Ok confirms the menu entry, then stays held as the radio opens
        assert_eq!(engine.frame(&[Button::Ok]), WindowEvent::Idle);
        engine.on_scene_create(SceneKind::Radio);

        assert_eq!(engine.frame(&[Button::Ok]), WindowEvent::Idle);
        assert!(!engine.player().is_playing());

        engine.frame(&[]);
        assert_eq!(engine.frame(&[Button::Ok]), WindowEvent::Refresh);
        assert!(engine.player().is_playing());
    }

    #[test]
    fn test_held_button_acts_once() {
        let mut engine = engine(test_radio_config());
        engine.open_radio();

        for _ in 0..10 {
            engine.frame(&[Button::Ok]);
        }

        assert!(engine.player().is_playing());
        assert_eq!(
            engine.player().audio().system_sounds(),
            &[radio_core::SystemSound::Ok]
        );
    }

    #[test]
    fn test_one_action_per_frame() {
        let mut engine = engine(test_radio_config());
        engine.open_radio();

        engine.frame(&[Button::Ok, Button::Right]);
        assert!(engine.player().is_playing());
        assert_eq!(engine.player().current_station_index(), 1);
    }

    #[test]
    fn test_empty_configuration() {
        let mut engine = engine(RadioConfig {
            stations: Vec::new(),
            autoplay: true,
            ..RadioConfig::default()
        });

        assert!(!engine.open_radio());
        assert!(engine.toggle().is_none());
        assert!(engine.change_station(Direction::Left).is_none());
        engine.on_scene_terminate(SceneKind::Map);
        assert!(!engine.player().is_playing());
        assert_eq!(engine.player().current_station_index(), 1);
    }

    #[test]
    fn test_execute_commands() {
        let mut engine = engine(test_radio_config());

        let commands: Vec<RadioCommand> = serde_json::from_str(
            r#"[
                {"command": "toggle"},
                {"command": "changeStation", "direction": "left"},
                {"command": "setSwitch", "id": 4, "value": true},
                {"command": "sceneTerminate", "scene": "map"}
            ]"#,
        )
        .unwrap();

        let mut status = None;
        for command in commands {
            status = engine.execute(command);
        }

        let status = status.expect("Radio should be initialized");
        assert_eq!(status.station_index, 2);
        assert!(status.is_playing);
    }
}
