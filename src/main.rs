//! Ring Survivor headless runner
//!
//! Drives the simulation at 60 frames per second without a window. The
//! autopilot plays unless it is switched off, sound cues go to the log, and
//! a summary is printed when the run ends or the time budget runs out.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use ring_survivor::Settings;
use ring_survivor::audio::{AudioManager, LogAudio};
use ring_survivor::consts::SIM_DT;
use ring_survivor::logging;
use ring_survivor::platform::{FrameClock, HeldKeys};
use ring_survivor::sim::{GameEvent, GamePhase, GameState, SimConfig, TickInput, tick};
use ring_survivor::ui::HudSnapshot;

const FRAME_MS: f64 = SIM_DT as f64 * 1000.0;

/// Arena survival simulation, run headless
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed for the run (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many simulated seconds if the run is still going
    #[arg(long, default_value_t = 300.0)]
    seconds: f32,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Disable the autopilot and hold these key codes instead (e.g. KeyD)
    #[arg(long = "hold", value_name = "CODE")]
    hold: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    frames: u64,
    finished: bool,
    cues_played: usize,
    kills_by_event: usize,
    hud: HudSnapshot,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    if !args.seconds.is_finite() || args.seconds <= 0.0 {
        log::error!("--seconds must be positive, got {}", args.seconds);
        return ExitCode::FAILURE;
    }

    let settings = Settings::load(args.config.as_deref());
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Ring Survivor starting (seed {seed})");

    let mut audio = AudioManager::new(Box::new(LogAudio::default()));
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let mut keys = HeldKeys::default();
    for code in &args.hold {
        if !keys.handle_code(code, true) {
            log::warn!("Ignoring unknown key code {code:?}");
        }
    }
    let input = TickInput {
        direction: keys.direction(),
        idle_mode: args.hold.is_empty(),
        ..Default::default()
    };

    let mut state = GameState::with_config(seed, SimConfig::from(&settings));
    let mut clock = FrameClock::new();
    let max_frames = (f64::from(args.seconds) * 60.0).ceil() as u64;
    let mut frames = 0;
    let mut cues_played = 0;
    let mut kills_by_event = 0;

    // Prime the clock so the first simulated frame has a real dt
    clock.tick(0.0);
    while frames < max_frames && !state.is_over() {
        frames += 1;
        let dt = clock.tick(frames as f64 * FRAME_MS);
        tick(&mut state, &input, dt);

        let events = state.drain_events();
        kills_by_event += events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyKilled { .. }))
            .count();
        cues_played += audio.dispatch(&events);

        if frames % 600 == 0 {
            let hud = HudSnapshot::from_state(&state);
            log::info!(
                "[{}] lvl {} hp {:.0}/{:.0} kills {} score {}",
                hud.clock(),
                hud.level,
                hud.hp,
                hud.max_hp,
                hud.kills,
                hud.score
            );
        }
    }

    let summary = Summary {
        seed,
        frames,
        finished: matches!(state.phase, GamePhase::GameOver(_)),
        cues_played,
        kills_by_event,
        hud: HudSnapshot::from_state(&state),
    };

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                log::error!("Failed to serialize summary: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let hud = &summary.hud;
        println!("Seed:     {}", summary.seed);
        println!("Result:   {}", hud.phase);
        println!("Survived: {}", hud.clock());
        println!("Level:    {} (power {})", hud.level, hud.power);
        println!("Kills:    {}", hud.kills);
        println!("Score:    {}", hud.score);
    }
    ExitCode::SUCCESS
}
