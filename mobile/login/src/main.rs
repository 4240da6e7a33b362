//! Verdure login demo
//!
//! Mounts the login screen headlessly, replays a scripted session against it
//! and reports every transition. With `--json` each frame's scene is printed
//! as one JSON line for an external renderer.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use verdure_animation::AnimationScheduler;
use verdure_login::{LoginConfig, LoginScreen, TransitionPhase};
use verdure_platform::{
    ControlFlow, Event, EventLoop, KeyboardNotifier, KeyboardObserver, ScreenSize,
};

mod session;

use session::SessionBuilder;

#[derive(Parser)]
#[command(name = "verdure-login")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Replay a scripted session against the Verdure login screen", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Login screen config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Screen width in logical pixels
    #[arg(long, default_value = "375")]
    width: f32,

    /// Screen height in logical pixels
    #[arg(long, default_value = "812")]
    height: f32,

    /// Frames per second (1-240)
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Print each frame's scene as a JSON line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = match &cli.config {
        Some(path) => LoginConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => LoginConfig::default(),
    };
    let size = ScreenSize::new(cli.width, cli.height).context("Invalid screen size")?;

    run_session(&cli, size, config)
}

fn run_session(cli: &Cli, size: ScreenSize, config: LoginConfig) -> Result<()> {
    let scheduler = AnimationScheduler::new();
    let keyboard = Arc::new(KeyboardNotifier::new());
    let mut screen = LoginScreen::mount(scheduler.handle(), keyboard.clone(), size, config.clone())
        .context("Failed to mount login screen")?;

    let script = SessionBuilder::new(size, config, cli.fps).standard();
    info!(
        events = script.len(),
        width = size.width,
        height = size.height,
        "Replaying session"
    );

    let mut frames = 0u64;
    let mut phase = screen.transition().phase();
    let mut output_error = None;

    script.run(|event| {
        match &event {
            Event::Frame { dt_ms } => {
                scheduler.tick_by(*dt_ms);
                frames += 1;
                if cli.json {
                    match serde_json::to_string(&screen.scene()) {
                        Ok(line) => println!("{line}"),
                        Err(err) => {
                            output_error = Some(err);
                            return ControlFlow::Exit;
                        }
                    }
                }
            }
            // The host owns the keyboard notifier
            Event::Keyboard(change) => {
                let notified = keyboard.notify(change);
                debug!(visibility = ?change.visibility, notified, "Keyboard changed");
            }
            _ => {}
        }

        let flow = screen.handle_event(&event);

        let next = screen.transition().phase();
        if next != phase {
            log_phase(next, screen.transition().progress(), frames);
            phase = next;
        }
        flow
    })
    .context("Session failed")?;

    if let Some(err) = output_error {
        return Err(err).context("Failed to serialize scene");
    }

    let leaked = keyboard.listener_count();
    if leaked != 0 {
        anyhow::bail!("{} keyboard listener(s) still registered after unmount", leaked);
    }

    info!(frames, "Session complete");
    Ok(())
}

fn log_phase(phase: TransitionPhase, progress: f32, frame: u64) {
    match phase {
        TransitionPhase::Animating { trigger } => {
            info!(frame, progress, "Transition {:?} started", trigger)
        }
        TransitionPhase::FormVisible => info!(frame, "Credential form visible"),
        TransitionPhase::ButtonsVisible => info!(frame, "Sign-in buttons visible"),
    }
}
