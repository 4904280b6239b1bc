//! Scamper headless demo driver
//!
//! Runs a scripted session against the recording engine: no window, no
//! renderer, just the gameplay core talking across the boundary. With no
//! arguments a built-in script plays out a short run; pass a seed as the
//! first argument, or `--replay <file.json>` to feed a recorded script.

use scamper::Tuning;
use scamper::engine::HeadlessEngine;
use scamper::sim::{GameSession, TickInput, collect_pickup, hit_hazard, tick};
use serde::Deserialize;

/// A recorded run: one entry per frame.
#[derive(Debug, Deserialize)]
struct Replay {
    seed: u64,
    #[serde(default)]
    frames: Vec<Frame>,
}

/// Input intent plus the contact events the engine would have reported
/// during this frame. `collect` holds registry slots of overlapped pickups.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Frame {
    left: bool,
    right: bool,
    jump: bool,
    collect: Vec<usize>,
    hazard_hit: bool,
}

fn main() {
    env_logger::init();

    let replay = match load_replay() {
        Ok(replay) => replay,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };

    let mut engine = HeadlessEngine::new();
    let mut session = match GameSession::new(&mut engine, replay.seed, Tuning::default()) {
        Ok(session) => session,
        Err(err) => {
            log::error!("engine setup failed: {err}");
            std::process::exit(1);
        }
    };
    // The recording engine integrates nothing, so stand the player on the
    // ground by hand; a real host would settle it onto the platforms.
    engine.set_grounded(session.player.body, true);

    for (frame_no, frame) in replay.frames.iter().enumerate() {
        let input = TickInput {
            move_left: frame.left,
            move_right: frame.right,
            jump: frame.jump,
        };
        tick(&mut session, &mut engine, &input);

        let player = session.player.body;
        for &slot in &frame.collect {
            match session.pickups.get(slot).map(|p| p.body) {
                Some(body) => collect_pickup(&mut session, &mut engine, player, body),
                None => log::warn!("frame {frame_no}: no pickup in slot {slot}"),
            }
        }
        if frame.hazard_hit {
            if let Some(hazard) = session.hazards.first().map(|h| h.body) {
                hit_hazard(&mut session, &mut engine, player, hazard);
            }
        }
    }

    println!(
        "seed {}: score={} collected={} hazards={} pickups={} game_over={}",
        session.seed,
        session.score(),
        session.collected(),
        session.hazards.len(),
        session.pickups.len(),
        session.is_game_over()
    );
}

fn load_replay() -> Result<Replay, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--replay") => {
            let path = args
                .get(1)
                .ok_or_else(|| "--replay needs a file path".to_string())?;
            let json = std::fs::read_to_string(path)
                .map_err(|err| format!("cannot read {path}: {err}"))?;
            serde_json::from_str(&json).map_err(|err| format!("bad replay {path}: {err}"))
        }
        Some(seed) => {
            let seed = seed
                .parse()
                .map_err(|err| format!("bad seed {seed:?}: {err}"))?;
            Ok(demo_script(seed))
        }
        None => Ok(demo_script(7)),
    }
}

/// Built-in script: run back and forth, hoover up the whole batch to force
/// a replenishment, then take the hit.
fn demo_script(seed: u64) -> Replay {
    let mut frames = Vec::new();
    for i in 0..12 {
        frames.push(Frame {
            right: true,
            jump: i % 4 == 0,
            collect: vec![i],
            ..Default::default()
        });
    }
    frames.push(Frame {
        left: true,
        ..Default::default()
    });
    frames.push(Frame {
        hazard_hit: true,
        ..Default::default()
    });
    Replay { seed, frames }
}
