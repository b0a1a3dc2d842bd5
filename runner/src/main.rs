use std::io;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use fern::FormatCallback;
use time::format_description::well_known::Iso8601;

use game_core::{Config, Jitter, Session, Side, Strategy};

const FRAME: Duration = Duration::from_micros(16_667); // ~60 Hz

#[derive(Parser)]
#[command(about, long_about = None)]
struct Cli {
    /// Seed for the simulation's random number generator.
    #[arg(long, short, default_value_t = 12345)]
    seed: u64,

    /// Autoplay difficulty for the left paddle (0 = perfect, 1 = sloppy).
    #[arg(long, default_value_t = 0.3)]
    difficulty_left: f32,

    /// Autoplay difficulty for the right paddle.
    #[arg(long, default_value_t = 0.3)]
    difficulty_right: f32,

    /// Autoplay strategy for the left paddle.
    #[arg(value_enum, long, default_value_t = StrategyArg::Defensive)]
    strategy_left: StrategyArg,

    /// Autoplay strategy for the right paddle.
    #[arg(value_enum, long, default_value_t = StrategyArg::Aggressive)]
    strategy_right: StrategyArg,

    /// When the aim noise of both paddles is resampled.
    #[arg(value_enum, long, default_value_t = JitterArg::PerApproach)]
    jitter: JitterArg,

    /// Points needed to win a match.
    #[arg(long, default_value_t = 5)]
    win_score: u8,

    /// Advance by this constant step instead of wall-clock elapsed time.
    #[arg(long, value_name = "SECONDS")]
    fixed_step: Option<f32>,

    /// Number of matches to play before exiting.
    #[arg(long, short, default_value_t = 1)]
    matches: u32,

    /// Run as fast as possible instead of pacing to 60 Hz.
    #[arg(long)]
    turbo: bool,
}

/// CLI-facing names for the per-side tracking strategies.
#[derive(Copy, Clone, ValueEnum)]
enum StrategyArg {
    /// Chase the predicted intercept only while the ball approaches.
    Defensive,
    /// Predict and chase on every tick.
    Aggressive,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Defensive => Strategy::TrackWhenApproaching,
            StrategyArg::Aggressive => Strategy::AlwaysTrack,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum JitterArg {
    EveryTick,
    PerApproach,
}

impl From<JitterArg> for Jitter {
    fn from(arg: JitterArg) -> Self {
        match arg {
            JitterArg::EveryTick => Jitter::EveryTick,
            JitterArg::PerApproach => Jitter::PerApproach,
        }
    }
}

fn main() -> Result<(), ()> {
    let cli = Cli::parse();
    setup_logger().map_err(|e| eprintln!("Error while configuring logging : {e:?}"))?;

    let mut config = Config::new();
    config.set_difficulty(Side::Left, cli.difficulty_left);
    config.set_difficulty(Side::Right, cli.difficulty_right);
    config.set_strategy(Side::Left, cli.strategy_left.into());
    config.set_strategy(Side::Right, cli.strategy_right.into());
    config.set_jitter(Side::Left, cli.jitter.into());
    config.set_jitter(Side::Right, cli.jitter.into());
    config.win_score = cli.win_score.max(1);
    config.fixed_step = cli.fixed_step;

    log::info!(
        "Session started: seed {}, first to {}, {} match(es).",
        cli.seed,
        config.win_score,
        cli.matches
    );

    run(Session::new(config, cli.seed), cli.matches, cli.turbo);
    Ok(())
}

/// The frame driver: owns the wall clock, ticks the simulation, and presents
/// the transient events as log lines.
fn run(mut session: Session, matches: u32, turbo: bool) {
    let mut won = 0u32;
    let mut last = Instant::now();

    while won < matches {
        let dt = if turbo {
            FRAME.as_secs_f32()
        } else {
            let now = Instant::now();
            let dt = (now - last).as_secs_f32();
            last = now;
            dt
        };

        session.tick(dt);
        present(&session, &mut won);

        if !turbo {
            thread::sleep(FRAME);
        }
    }
}

/// Presentation collaborator: score lines and banners for the transient
/// point-scored / match-won notifications.
fn present(session: &Session, won: &mut u32) {
    let events = session.events();

    if let Some(side) = events.point_scored {
        let score = session.score();
        log::info!(
            "{side:?} scores. {} - {}",
            score.get(Side::Left),
            score.get(Side::Right)
        );
    }

    if let Some(side) = events.match_won {
        let player = match side {
            Side::Left => "Player 1",
            Side::Right => "Player 2",
        };
        log::info!("{player} wins!");
        *won += 1;
    }
}

/// Set up the global logger to print timestamped lines to stdout.
fn setup_logger() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .level(log::LevelFilter::Info)
        .format(format_log)
        .chain(io::stdout())
        .apply()
}

/// The function given to the logging crate [`fern`] to format messages.
fn format_log(out: FormatCallback, message: &std::fmt::Arguments, record: &log::Record) {
    out.finish(format_args!(
        "[{} {} {}] {}",
        utc_now_wrapper(),
        record.level(),
        record.target(),
        message
    ))
}

/// Create a [`String`] of the current time in the UTC timezone, with a default in case of error.
fn utc_now_wrapper() -> String {
    time::OffsetDateTime::now_utc()
        .format(&Iso8601::DATE_TIME)
        .unwrap_or(String::from("invalid date"))
}
