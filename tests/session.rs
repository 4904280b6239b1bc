//! End-to-end runs through the public surface
//!
//! Everything here drives a session exactly the way a host would: ticks
//! plus engine-reported contact events, observed through the HUD getters
//! and the recording engine.

use proptest::prelude::*;

use scamper::Tuning;
use scamper::consts::TINT_PALETTE;
use scamper::engine::HeadlessEngine;
use scamper::sim::{GameSession, MotionState, TickInput, collect_pickup, hit_hazard, tick};

fn new_session(seed: u64) -> (HeadlessEngine, GameSession) {
    let mut engine = HeadlessEngine::new();
    let session = GameSession::new(&mut engine, seed, Tuning::default()).unwrap();
    (engine, session)
}

/// Collect `count` pickups, preferring seeded batch members so batch
/// drains (and replenishments) land on multiples of the batch size.
fn collect_batch_first(session: &mut GameSession, engine: &mut HeadlessEngine, count: usize) {
    for _ in 0..count {
        let player = session.player.body;
        let pickup = session
            .pickups
            .iter()
            .find(|p| p.seeded && p.active)
            .or_else(|| session.pickups.iter().find(|p| p.active))
            .map(|p| p.body)
            .expect("an active pickup always exists");
        collect_pickup(session, engine, player, pickup);
    }
}

#[test]
fn full_batch_run_matches_expected_totals() {
    let (mut engine, mut session) = new_session(7);

    collect_batch_first(&mut session, &mut engine, 12);

    assert_eq!(session.score(), 120);
    assert_eq!(session.collected(), 12);
    assert_eq!(session.hazards.len(), 4);
    assert_eq!(session.active_batch_pickups(), 12);
    assert!((session.player.scale - 1.1 * 1.1).abs() < 1e-5);
    assert!(!session.is_game_over());
}

#[test]
fn hazard_contact_freezes_the_whole_run() {
    let (mut engine, mut session) = new_session(7);
    collect_batch_first(&mut session, &mut engine, 3);
    let score_at_defeat = session.score();
    let player = session.player.body;

    let hazard0 = session.hazards[0].body;
    hit_hazard(&mut session, &mut engine, player, hazard0);

    assert!(session.is_game_over());
    assert!(engine.is_paused());
    assert_eq!(engine.game_over_reveals(), 1);

    // Neither input nor stale events can move anything afterwards.
    engine.set_grounded(player, true);
    tick(
        &mut session,
        &mut engine,
        &TickInput {
            move_right: true,
            jump: true,
            ..Default::default()
        },
    );
    assert_eq!(engine.body(player).vel.x, 0.0);
    assert_eq!(session.player.motion, MotionState::Idle);

    let pickup = session.pickups[3].body;
    collect_pickup(&mut session, &mut engine, player, pickup);
    let hazard1 = session.hazards[1].body;
    hit_hazard(&mut session, &mut engine, player, hazard1);

    assert_eq!(session.score(), score_at_defeat);
    assert_eq!(engine.pause_calls(), 1);
    assert_eq!(engine.game_over_reveals(), 1);
}

#[test]
fn replay_with_same_seed_is_identical() {
    let (mut engine_a, mut session_a) = new_session(404);
    let (mut engine_b, mut session_b) = new_session(404);

    collect_batch_first(&mut session_a, &mut engine_a, 17);
    collect_batch_first(&mut session_b, &mut engine_b, 17);

    assert_eq!(session_a.pickups.len(), session_b.pickups.len());
    for (pa, pb) in session_a.pickups.iter().zip(&session_b.pickups) {
        assert_eq!(pa.bounce, pb.bounce);
        assert_eq!(engine_a.body(pa.body).pos, engine_b.body(pb.body).pos);
    }
    for (ha, hb) in session_a.hazards.iter().zip(&session_b.hazards) {
        assert_eq!(engine_a.body(ha.body).vel, engine_b.body(hb.body).vel);
    }
}

proptest! {
    #[test]
    fn score_stays_linear_in_collections(k in 0usize..40, seed in 0u64..500) {
        let (mut engine, mut session) = new_session(seed);
        collect_batch_first(&mut session, &mut engine, k);

        prop_assert_eq!(session.score(), 10 * k as u64);
        prop_assert_eq!(session.collected(), k as u32);
        if k > 0 {
            prop_assert_eq!(
                session.player.tint.unwrap(),
                TINT_PALETTE[k % TINT_PALETTE.len()]
            );
        }
    }

    #[test]
    fn hazards_escalate_only_on_batch_drain(k in 0usize..40, seed in 0u64..500) {
        let (mut engine, mut session) = new_session(seed);
        collect_batch_first(&mut session, &mut engine, k);

        prop_assert_eq!(session.hazards.len(), 3 + k / 12);
        let expected_batch = if k % 12 == 0 { 12 } else { 12 - k % 12 };
        prop_assert_eq!(session.active_batch_pickups(), expected_batch);
    }

    #[test]
    fn registry_grows_by_one_per_collection(k in 0usize..40, seed in 0u64..500) {
        let (mut engine, mut session) = new_session(seed);
        collect_batch_first(&mut session, &mut engine, k);

        // Batch-first collection never drains a bonus slot, so every
        // collection appends exactly one registry member.
        prop_assert_eq!(session.pickups.len(), 12 + k);
    }

    #[test]
    fn growth_compounds_every_fifth_collection(k in 0usize..40, seed in 0u64..500) {
        let (mut engine, mut session) = new_session(seed);
        collect_batch_first(&mut session, &mut engine, k);

        let expected = 1.1f32.powi((k / 5) as i32);
        prop_assert!((session.player.scale - expected).abs() < 1e-4);
    }
}
