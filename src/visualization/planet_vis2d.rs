use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::WindowResolution;
use log::{error, info};

use crate::simulation::scenario::Scenario;
use crate::visualization::projection::{distance_label, to_world};

/// Bevy resource wrapping the scenario driven by the fixed-rate loop
#[derive(Resource)]
pub struct SimulationResource(pub Scenario);

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct DistanceLabel(pub usize);

/// Open the viewer and step the scenario once per fixed tick until the
/// window closes or a step fails
pub fn run_2d(scenario: Scenario) -> AppExit {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    let view = scenario.view.clone();
    let tick_hz = scenario.engine.tick_hz;

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(tick_hz))
        .insert_resource(SimulationResource(scenario))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planet Simulation".into(),
                resolution: WindowResolution::new(view.width, view.height),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, (sync_transforms_system, draw_orbits_system, update_labels_system))
        .run()
}

fn setup_bodies_system(mut commands: Commands, sim: Res<SimulationResource>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    let scenario = &sim.0;
    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let pos = to_world(&body.position, &scenario.view);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(body_color(body.color))),
                transform: Transform::from_xyz(pos.x, pos.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        if !body.is_anchor {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        distance_label(body.distance_to_anchor()),
                        TextStyle {
                            font_size: scenario.view.font_size,
                            color: Color::WHITE,
                            ..Default::default()
                        },
                    ),
                    transform: Transform::from_xyz(pos.x, pos.y, 2.0),
                    ..Default::default()
                },
                DistanceLabel(i),
            ));
        }
    }
}

fn physics_step_system(mut sim: ResMut<SimulationResource>, mut exit: EventWriter<AppExit>, mut halted: Local<bool>) {
    if *halted {
        return;
    }

    if let Err(err) = sim.0.step() {
        error!("simulation halted at step {}: {err}", sim.0.system.steps);
        *halted = true;
        exit.send(AppExit::error());
    }
}

fn sync_transforms_system(sim: Res<SimulationResource>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let scenario = &sim.0;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let pos = to_world(&b.position, &scenario.view);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn draw_orbits_system(sim: Res<SimulationResource>, mut gizmos: Gizmos) {
    let scenario = &sim.0;
    for b in &scenario.system.bodies {
        let orbit = b.orbit();
        // a trail needs more than two points
        if orbit.len() > 2 {
            gizmos.linestrip_2d(
                orbit.iter().map(|p| to_world(p, &scenario.view)),
                body_color(b.color),
            );
        }
    }
}

fn update_labels_system(sim: Res<SimulationResource>, mut query: Query<(&DistanceLabel, &mut Text, &mut Transform)>) {
    let scenario = &sim.0;
    for (DistanceLabel(i), mut text, mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let pos = to_world(&b.position, &scenario.view);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
            if let Some(section) = text.sections.first_mut() {
                section.value = distance_label(b.distance_to_anchor());
            }
        }
    }
}

fn body_color([r, g, b]: [u8; 3]) -> Color {
    Color::srgb_u8(r, g, b)
}
