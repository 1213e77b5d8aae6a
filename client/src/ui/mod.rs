//! Weather selector bar and current-weather readout.

pub mod style;

use bevy::prelude::*;
use shared::weather::WeatherKind;

use crate::weather::{SetWeather, WeatherSession};
use style::{
    weather_bar_style, weather_button_style, HOVERED_BUTTON, NORMAL_BUTTON, PRESSED_BUTTON,
    TEXT_COLOR, UI_FONT_SIZE,
};

/// The weather this button requests when pressed.
#[derive(Component)]
pub struct WeatherButton(pub WeatherKind);

/// Marker for the "Weather: ..." readout text.
#[derive(Component)]
pub struct WeatherDisplay;

pub struct WeatherUiPlugin;

impl Plugin for WeatherUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_weather_bar)
            .add_systems(Update, (weather_buttons, update_weather_display));
    }
}

fn setup_weather_bar(mut commands: Commands) {
    commands.spawn(weather_bar_style()).with_children(|bar| {
        for kind in WeatherKind::ALL {
            bar.spawn((
                Button,
                WeatherButton(kind),
                weather_button_style(),
                BackgroundColor(NORMAL_BUTTON),
            ))
            .with_children(|button| {
                button.spawn((
                    Text::new(kind.label()),
                    TextFont {
                        font_size: UI_FONT_SIZE,
                        ..Default::default()
                    },
                    TextColor(TEXT_COLOR),
                ));
            });
        }
        bar.spawn((
            WeatherDisplay,
            Text::new("Weather: -"),
            TextFont {
                font_size: UI_FONT_SIZE,
                ..Default::default()
            },
            TextColor(TEXT_COLOR),
        ));
    });
}

fn weather_buttons(
    mut interactions: Query<
        (&Interaction, &WeatherButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut requests: EventWriter<SetWeather>,
) {
    for (interaction, button, mut background) in &mut interactions {
        match *interaction {
            Interaction::Pressed => {
                *background = PRESSED_BUTTON.into();
                requests.write(SetWeather(button.0));
            }
            Interaction::Hovered => *background = HOVERED_BUTTON.into(),
            Interaction::None => *background = NORMAL_BUTTON.into(),
        }
    }
}

fn update_weather_display(
    session: Res<WeatherSession>,
    mut displays: Query<&mut Text, With<WeatherDisplay>>,
) {
    if !session.is_changed() {
        return;
    }
    let label = session
        .state
        .current()
        .map(|kind| kind.label())
        .unwrap_or("-");
    for mut text in &mut displays {
        text.0 = format!("Weather: {label}");
    }
}
