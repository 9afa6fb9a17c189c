//! StarBird entry point
//!
//! Loads settings and assets, then runs the game shell on the headless host.
//! On a terminal the keyboard can take over from the autopilot and q/Esc
//! quit; otherwise the demo runs until its tick limit.

use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::Context;

use starbird::GameShell;
use starbird::assets::Assets;
use starbird::host::InputSource;
use starbird::host::native::{DemoInput, LogRenderer, SilentAudio, SleepPacer};
use starbird::host::terminal::TerminalInput;
use starbird::settings::{SETTINGS_FILE, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    log::info!("{} starting...", settings.title);

    // A windowed backend would decode these; headless only needs them present
    let _assets =
        Assets::load(&settings.asset_manifest()).context("failed to load game assets")?;
    log::info!("No window backend in native mode - the demo autopilot is flying");

    let demo = DemoInput::new(settings.demo_tick_limit);
    if io::stdin().is_terminal() {
        let input = TerminalInput::new(demo).context("failed to attach keyboard")?;
        run(settings, input)
    } else {
        log::info!("stdin is not a terminal; running until the demo tick limit");
        run(settings, demo)
    }
}

fn run<I: InputSource>(settings: Settings, input: I) -> anyhow::Result<()> {
    let fps = settings.target_fps;
    let pacer = SleepPacer::new(settings.tick_seconds());
    let mut shell = GameShell::new(
        settings,
        input,
        LogRenderer::new(fps as u64),
        SilentAudio::default(),
        pacer,
    );

    shell.run().context("game shell failed to start")?;
    log::info!(
        "Presented {} frames",
        shell.renderer().frames_presented()
    );
    Ok(())
}
