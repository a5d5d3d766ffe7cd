use bevy::prelude::*;

/// Dark clear color, soft ambient and the two colored point lights framing
/// the cluster from opposite corners.
pub fn setup_environment(commands: &mut Commands) {
    commands.insert_resource(ClearColor(Color::srgb_u8(0x0a, 0x0a, 0x0a)));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        ..default()
    });

    commands.spawn((
        PointLight {
            color: Color::srgb_u8(0x44, 0xec, 0xff),
            intensity: 2_000_000.0,
            range: 60.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));

    commands.spawn((
        PointLight {
            color: Color::srgb_u8(0xd1, 0x44, 0xff),
            intensity: 2_000_000.0,
            range: 60.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-10.0, 10.0, -10.0),
    ));
}
