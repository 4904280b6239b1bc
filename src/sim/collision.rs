//! Collision policy: what the engine's contact events mean
//!
//! The engine decides *that* bodies touched; these handlers decide what it
//! means for the run. Both take the colliding pair and the owning session
//! as explicit parameters, so there is no hidden context to rebind.

use super::spawn;
use super::state::GameSession;
use crate::consts::{DEFEAT_TINT, TINT_PALETTE};
use crate::engine::{BodyHandle, EngineHost};

/// The player's bounds intersected an active pickup.
///
/// Several overlaps can arrive in one tick; each is handled on its own, in
/// whatever order the engine reported them. A second report for the same
/// pickup in that tick finds it inactive and is dropped.
pub fn collect_pickup(
    session: &mut GameSession,
    engine: &mut dyn EngineHost,
    player: BodyHandle,
    pickup: BodyHandle,
) {
    if session.is_game_over() {
        return;
    }
    debug_assert_eq!(player, session.player.body);

    let Some(idx) = session.pickup_index(pickup) else {
        log::warn!("overlap reported for unknown body {pickup:?}");
        return;
    };
    if !session.pickups[idx].active {
        return;
    }

    session.pickups[idx].active = false;
    engine.set_enabled(pickup, false);
    engine.set_visible(pickup, false);

    let collected = session
        .progress
        .record_collection(session.tuning.pickup_reward);

    let tint = TINT_PALETTE[collected as usize % TINT_PALETTE.len()];
    session.player.tint = Some(tint);
    engine.set_tint(player, tint);

    spawn::drop_bonus_pickup(session, engine);

    if collected.is_multiple_of(session.tuning.growth_every) {
        session.player.scale *= session.tuning.growth_factor;
        engine.set_scale(player, session.player.scale, session.player.scale);
    }

    spawn::replenish_batch(session, engine);
}

/// Solid contact between the player and a hazard ends the run.
///
/// Re-fires after the first are complete no-ops: the terminal transition
/// happens once, so the pause, the banner, and the defeat tint cannot
/// double-apply.
pub fn hit_hazard(
    session: &mut GameSession,
    engine: &mut dyn EngineHost,
    player: BodyHandle,
    hazard: BodyHandle,
) {
    if !session.progress.end_run() {
        return;
    }
    debug_assert_eq!(player, session.player.body);
    log::info!(
        "run ended by hazard {hazard:?}: score={}, collected={}",
        session.score(),
        session.collected()
    );

    engine.pause();
    session.player.tint = Some(DEFEAT_TINT);
    engine.set_tint(player, DEFEAT_TINT);
    session.player.alive = false;
    engine.set_visible(player, false);
    engine.show_game_over();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HeadlessEngine;
    use crate::tuning::Tuning;

    fn new_session(seed: u64) -> (HeadlessEngine, GameSession) {
        let mut engine = HeadlessEngine::new();
        let session = GameSession::new(&mut engine, seed, Tuning::default()).unwrap();
        (engine, session)
    }

    fn collect_nth(session: &mut GameSession, engine: &mut HeadlessEngine, idx: usize) {
        let player = session.player.body;
        let pickup = session.pickups[idx].body;
        collect_pickup(session, engine, player, pickup);
    }

    #[test]
    fn test_collect_scores_and_deactivates() {
        let (mut engine, mut session) = new_session(7);
        let pickup = session.pickups[0].body;

        collect_nth(&mut session, &mut engine, 0);

        assert_eq!(session.score(), 10);
        assert_eq!(session.collected(), 1);
        assert!(!session.pickups[0].active);
        assert!(!engine.body(pickup).enabled);
        assert!(!engine.body(pickup).visible);
        // One bonus pickup dropped somewhere in the world.
        assert_eq!(session.pickups.len(), 13);
        let bonus = &session.pickups[12];
        assert!(bonus.active);
        assert!(!bonus.seeded);
        let pos = engine.body(bonus.body).pos;
        assert!(pos.x >= 0.0 && pos.x <= 800.0);
        assert!(pos.y >= 0.0 && pos.y <= 600.0);
    }

    #[test]
    fn test_tint_cycles_through_the_palette() {
        let (mut engine, mut session) = new_session(7);

        // Collections 1..=7 visit all seven colors, the 8th repeats the
        // first collection's color.
        let mut seen = Vec::new();
        for k in 1..=8usize {
            let idx = session
                .pickups
                .iter()
                .position(|p| p.active)
                .expect("an active pickup always exists");
            collect_nth(&mut session, &mut engine, idx);
            let tint = session.player.tint.unwrap();
            assert_eq!(tint, TINT_PALETTE[k % TINT_PALETTE.len()]);
            assert_eq!(engine.body(session.player.body).tint, Some(tint));
            seen.push(tint);
        }
        let mut first_seven = seen[..7].to_vec();
        first_seven.sort_unstable();
        first_seven.dedup();
        assert_eq!(first_seven.len(), 7);
        assert_eq!(seen[7], seen[0]);
    }

    #[test]
    fn test_growth_every_fifth_collection_compounds() {
        let (mut engine, mut session) = new_session(7);

        for _ in 0..4 {
            let idx = session.pickups.iter().position(|p| p.active).unwrap();
            collect_nth(&mut session, &mut engine, idx);
        }
        assert_eq!(session.player.scale, 1.0);

        let idx = session.pickups.iter().position(|p| p.active).unwrap();
        collect_nth(&mut session, &mut engine, idx);
        assert!((session.player.scale - 1.1).abs() < 1e-6);
        assert_eq!(
            engine.body(session.player.body).scale,
            (session.player.scale, session.player.scale)
        );

        for _ in 0..5 {
            let idx = session.pickups.iter().position(|p| p.active).unwrap();
            collect_nth(&mut session, &mut engine, idx);
        }
        assert!((session.player.scale - 1.1 * 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_draining_the_batch_replenishes_and_escalates() {
        let (mut engine, mut session) = new_session(7);
        let hazards_before = session.hazards.len();

        let batch: Vec<usize> = (0..session.pickups.len())
            .filter(|&i| session.pickups[i].seeded)
            .collect();
        for (n, idx) in batch.iter().enumerate() {
            collect_nth(&mut session, &mut engine, *idx);
            if n < batch.len() - 1 {
                assert_eq!(session.hazards.len(), hazards_before);
            }
        }

        assert_eq!(session.active_batch_pickups(), 12);
        assert_eq!(session.hazards.len(), hazards_before + 1);
        for pickup in session.pickups.iter().filter(|p| p.seeded) {
            let state = engine.body(pickup.body);
            assert_eq!(state.pos.x, pickup.home_x);
            assert_eq!(state.pos.y, 0.0);
            assert!(state.enabled);
        }
    }

    #[test]
    fn test_stale_overlap_for_inactive_pickup_is_dropped() {
        let (mut engine, mut session) = new_session(7);

        collect_nth(&mut session, &mut engine, 0);
        collect_nth(&mut session, &mut engine, 0);

        assert_eq!(session.collected(), 1);
        assert_eq!(session.score(), 10);
        assert_eq!(session.pickups.len(), 13);
    }

    #[test]
    fn test_hit_hazard_ends_the_run_once() {
        let (mut engine, mut session) = new_session(7);
        let player = session.player.body;
        let hazard = session.hazards[0].body;

        hit_hazard(&mut session, &mut engine, player, hazard);

        assert!(session.is_game_over());
        assert!(!session.player.alive);
        assert!(engine.is_paused());
        assert_eq!(engine.body(player).tint, Some(DEFEAT_TINT));
        assert!(!engine.body(player).visible);
        assert_eq!(engine.game_over_reveals(), 1);

        let hazards_before = session.hazards.len();
        hit_hazard(&mut session, &mut engine, player, hazard);
        let hazard1 = session.hazards[1].body;
        hit_hazard(&mut session, &mut engine, player, hazard1);

        assert_eq!(engine.pause_calls(), 1);
        assert_eq!(engine.game_over_reveals(), 1);
        assert_eq!(session.hazards.len(), hazards_before);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_overlap_after_game_over_is_ignored() {
        let (mut engine, mut session) = new_session(7);
        let player = session.player.body;
        let hazard = session.hazards[0].body;

        hit_hazard(&mut session, &mut engine, player, hazard);
        collect_nth(&mut session, &mut engine, 0);

        assert_eq!(session.collected(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.pickups[0].active);
    }

    #[test]
    fn test_bonus_slots_are_reused_once_inactive() {
        let (mut engine, mut session) = new_session(7);

        collect_nth(&mut session, &mut engine, 0);
        assert_eq!(session.pickups.len(), 13);

        // Collect the bonus drop itself; the next drop reuses its slot
        // instead of growing the registry.
        collect_nth(&mut session, &mut engine, 12);
        assert_eq!(session.pickups.len(), 13);
        assert!(session.pickups[12].active);
        assert_eq!(session.collected(), 2);
    }
}
