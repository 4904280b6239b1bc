//! Spawn policy: initial population, bonus drops, hazard escalation
//!
//! All spawn randomness comes from the session RNG: integer-uniform world
//! coordinates and hazard launch speeds, real-uniform bounce restitution.
//! Coordinates leaving the generator are clamped into world bounds before
//! the engine ever sees them.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameSession, Hazard, MotionState, Pickup, Platform, Player};
use crate::engine::{EngineError, EngineHost, Interaction, SpriteKind};
use crate::tuning::Tuning;

/// Registry contents produced by initial setup.
pub(crate) struct World {
    pub player: Player,
    pub pickups: Vec<Pickup>,
    pub hazards: Vec<Hazard>,
    pub platforms: Vec<Platform>,
}

/// Build every body of a fresh run and register their interactions.
pub(crate) fn populate(
    engine: &mut dyn EngineHost,
    tuning: &Tuning,
    rng: &mut Pcg32,
) -> Result<World, EngineError> {
    let mut platforms = Vec::with_capacity(tuning.platforms.len());
    for spec in &tuning.platforms {
        let body = engine.create_static_body(SpriteKind::Platform, spec.pos, spec.scale)?;
        platforms.push(Platform {
            body,
            pos: spec.pos,
            scale: spec.scale,
        });
    }

    let player_body = engine.create_body(SpriteKind::Player, tuning.player_spawn)?;
    engine.set_bounce(player_body, tuning.player_bounce);
    engine.set_collide_world_bounds(player_body, true);
    let player = Player {
        body: player_body,
        motion: MotionState::Idle,
        grounded: false,
        tint: None,
        scale: 1.0,
        alive: true,
    };

    // The batch drops in from the top and settles under engine gravity.
    let mut pickups = Vec::with_capacity(tuning.pickup_batch);
    for i in 0..tuning.pickup_batch {
        let home_x = tuning.pickup_origin_x + tuning.pickup_step_x * i as f32;
        let body = engine.create_body(SpriteKind::Pickup, Vec2::new(home_x, 0.0))?;
        let bounce = roll_bounce(rng, tuning);
        engine.set_bounce(body, bounce);
        pickups.push(Pickup {
            body,
            home_x,
            bounce,
            active: true,
            seeded: true,
        });
    }

    let mut hazards = Vec::with_capacity(tuning.initial_hazards);
    for _ in 0..tuning.initial_hazards {
        hazards.push(launch_hazard(engine, tuning, rng)?);
    }

    engine.register_pair(SpriteKind::Player, SpriteKind::Platform, Interaction::Collide);
    engine.register_pair(SpriteKind::Pickup, SpriteKind::Platform, Interaction::Collide);
    engine.register_pair(SpriteKind::Hazard, SpriteKind::Platform, Interaction::Collide);
    engine.register_pair(SpriteKind::Player, SpriteKind::Pickup, Interaction::Overlap);
    engine.register_pair(SpriteKind::Player, SpriteKind::Hazard, Interaction::Collide);

    Ok(World {
        player,
        pickups,
        hazards,
        platforms,
    })
}

/// Spawn one hazard: random column across the world, fully elastic bounce
/// off bounds and platforms, randomized sideways launch, constant drift,
/// no gravity.
pub(crate) fn launch_hazard(
    engine: &mut dyn EngineHost,
    tuning: &Tuning,
    rng: &mut Pcg32,
) -> Result<Hazard, EngineError> {
    let x = roll_world_x(rng, tuning);
    let body = engine.create_body(SpriteKind::Hazard, Vec2::new(x, tuning.hazard_spawn_y))?;
    engine.set_bounce(body, 1.0);
    engine.set_collide_world_bounds(body, true);
    engine.set_gravity_exempt(body, true);
    let vx = rng.random_range(-tuning.hazard_speed_max..=tuning.hazard_speed_max) as f32;
    engine.set_velocity(body, Vec2::new(vx, tuning.hazard_drift_y));
    log::debug!("hazard launched at x={x} with vx={vx}");
    Ok(Hazard { body })
}

/// Drop one fresh pickup somewhere in the world, reusing an inactive bonus
/// slot when one exists so the registry only grows when it has to.
pub fn drop_bonus_pickup(session: &mut GameSession, engine: &mut dyn EngineHost) {
    let pos = Vec2::new(
        roll_world_x(&mut session.rng, &session.tuning),
        roll_world_y(&mut session.rng, &session.tuning),
    );
    let bounce = roll_bounce(&mut session.rng, &session.tuning);

    if let Some(idx) = session
        .pickups
        .iter()
        .position(|p| !p.seeded && !p.active)
    {
        let pickup = &mut session.pickups[idx];
        pickup.bounce = bounce;
        pickup.active = true;
        engine.set_position(pickup.body, pos);
        engine.set_bounce(pickup.body, bounce);
        engine.set_enabled(pickup.body, true);
        engine.set_visible(pickup.body, true);
        log::debug!("bonus pickup reused slot {idx} at {pos}");
        return;
    }

    match engine.create_body(SpriteKind::Pickup, pos) {
        Ok(body) => {
            engine.set_bounce(body, bounce);
            session.pickups.push(Pickup {
                body,
                home_x: pos.x,
                bounce,
                active: true,
                seeded: false,
            });
            log::debug!("bonus pickup appended at {pos}");
        }
        // Mid-run allocation is best-effort; only setup failures are fatal.
        Err(err) => log::error!("bonus pickup skipped: {err}"),
    }
}

/// Refill check: once the seeded batch is fully drained, re-enter every
/// batch member at its home column and escalate the hazard count by one.
/// This is the only way the hazard population grows.
pub fn replenish_batch(session: &mut GameSession, engine: &mut dyn EngineHost) {
    if session.active_batch_pickups() != 0 {
        return;
    }

    // Snapshot the member list so reactivation never depends on iterating
    // a container that is being mutated.
    let members: Vec<usize> = session
        .pickups
        .iter()
        .enumerate()
        .filter(|(_, p)| p.seeded)
        .map(|(i, _)| i)
        .collect();
    for idx in members {
        let pickup = &mut session.pickups[idx];
        pickup.active = true;
        engine.set_position(pickup.body, Vec2::new(pickup.home_x, 0.0));
        engine.set_enabled(pickup.body, true);
        engine.set_visible(pickup.body, true);
    }

    match launch_hazard(engine, &session.tuning, &mut session.rng) {
        Ok(hazard) => session.hazards.push(hazard),
        Err(err) => log::error!("escalation hazard skipped: {err}"),
    }
    log::info!(
        "batch replenished after {} collections, hazards now {}",
        session.collected(),
        session.hazards.len()
    );
}

fn roll_world_x(rng: &mut Pcg32, tuning: &Tuning) -> f32 {
    let hi = tuning.world_width.max(1.0) as i32;
    clamp_coord(rng.random_range(0..=hi) as f32, tuning.world_width)
}

fn roll_world_y(rng: &mut Pcg32, tuning: &Tuning) -> f32 {
    let hi = tuning.world_height.max(1.0) as i32;
    clamp_coord(rng.random_range(0..=hi) as f32, tuning.world_height)
}

fn roll_bounce(rng: &mut Pcg32, tuning: &Tuning) -> f32 {
    rng.random_range(tuning.pickup_bounce_min..=tuning.pickup_bounce_max)
}

/// The engine must never see a NaN or out-of-bounds spawn coordinate.
fn clamp_coord(v: f32, max: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, max) }
}
