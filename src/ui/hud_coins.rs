//! UI domain: coin counter, refreshed from pickup totals.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::pickups::{CoinTotalChanged, PlayerInventory};

const HUD_MARGIN: f32 = 16.0;
const ICON_SIZE: f32 = 16.0;
const TEXT_COLOR: Color = Color::srgb(0.9, 0.85, 0.5);
const FLASH_COLOR: Color = Color::WHITE;
/// Seconds the counter stays highlighted after a pickup
const FLASH_SECS: f32 = 0.3;

/// Root node of the coin counter
#[derive(Component)]
pub struct CoinCounter;

/// Text showing the coin total; `flash` counts down after each pickup.
#[derive(Component, Debug, Default)]
pub struct CoinAmountText {
    pub flash: f32,
}

pub(crate) fn spawn_coin_counter(mut commands: Commands, inventory: Res<PlayerInventory>) {
    commands
        .spawn((
            CoinCounter,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_MARGIN),
                top: Val::Px(HUD_MARGIN),
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Px(ICON_SIZE),
                    height: Val::Px(ICON_SIZE),
                    border_radius: BorderRadius::MAX,
                    ..default()
                },
                BackgroundColor(Color::srgb(0.9, 0.75, 0.2)),
            ));
            parent.spawn((
                CoinAmountText::default(),
                Text::new(inventory.coins.to_string()),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}

/// Show the latest total announced this frame.
pub(crate) fn apply_coin_totals(
    mut totals: MessageReader<CoinTotalChanged>,
    mut query: Query<(&mut Text, &mut CoinAmountText)>,
) {
    let Some(latest) = totals.read().last() else {
        return;
    };
    for (mut text, mut counter) in &mut query {
        **text = latest.total.to_string();
        counter.flash = FLASH_SECS;
    }
}

pub(crate) fn fade_coin_flash(
    time: Res<Time>,
    mut query: Query<(&mut TextColor, &mut CoinAmountText)>,
) {
    for (mut color, mut counter) in &mut query {
        if counter.flash <= 0.0 {
            continue;
        }
        counter.flash = (counter.flash - time.delta_secs()).max(0.0);
        color.0 = TEXT_COLOR.mix(&FLASH_COLOR, counter.flash / FLASH_SECS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;

    fn hud_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<PlayerInventory>()
            .add_message::<CoinTotalChanged>()
            .add_systems(Update, (apply_coin_totals, fade_coin_flash).chain());
        app
    }

    #[test]
    fn test_counter_shows_latest_total() {
        let mut app = hud_app();
        let text = app
            .world_mut()
            .spawn((CoinAmountText::default(), Text::new("0"), TextColor(TEXT_COLOR)))
            .id();

        let mut totals = app.world_mut().resource_mut::<Messages<CoinTotalChanged>>();
        totals.write(CoinTotalChanged { total: 2 });
        totals.write(CoinTotalChanged { total: 3 });
        app.update();

        assert_eq!(app.world().get::<Text>(text).unwrap().0, "3");
        assert_eq!(app.world().get::<CoinAmountText>(text).unwrap().flash, FLASH_SECS);
    }

    #[test]
    fn test_counter_untouched_without_pickups() {
        let mut app = hud_app();
        let text = app
            .world_mut()
            .spawn((CoinAmountText::default(), Text::new("7"), TextColor(TEXT_COLOR)))
            .id();

        app.update();

        assert_eq!(app.world().get::<Text>(text).unwrap().0, "7");
        assert_eq!(app.world().get::<TextColor>(text).unwrap().0, TEXT_COLOR);
    }

    #[test]
    fn test_flash_fades_back_to_text_color() {
        let mut app = hud_app();
        let text = app
            .world_mut()
            .spawn((CoinAmountText { flash: 0.1 }, Text::new("1"), TextColor(FLASH_COLOR)))
            .id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(std::time::Duration::from_millis(200));
        app.update();

        assert_eq!(app.world().get::<CoinAmountText>(text).unwrap().flash, 0.0);
        assert_eq!(app.world().get::<TextColor>(text).unwrap().0, TEXT_COLOR);
    }
}
