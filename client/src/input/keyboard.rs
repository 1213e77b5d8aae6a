//! Number-key shortcuts for the weather selector.

use bevy::prelude::*;
use shared::weather::WeatherKind;

use crate::weather::SetWeather;

pub fn weather_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<SetWeather>,
) {
    const BINDINGS: [(KeyCode, WeatherKind); 5] = [
        (KeyCode::Digit1, WeatherKind::Sunny),
        (KeyCode::Digit2, WeatherKind::Rainy),
        (KeyCode::Digit3, WeatherKind::Snowy),
        (KeyCode::Digit4, WeatherKind::Stormy),
        (KeyCode::Digit5, WeatherKind::Icy),
    ];
    for (key, kind) in BINDINGS {
        if keyboard.just_pressed(key) {
            requests.write(SetWeather(kind));
        }
    }
}
