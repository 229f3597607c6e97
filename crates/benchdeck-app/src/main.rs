//! benchdeck: composition root for the testbed dashboard core.
//!
//! Wires the websocket connector, multiplexer, frame manager, and panel
//! registry together, opens the requested panels, and streams until
//! interrupted. Rendering seams are satisfied by logging sinks, so this
//! doubles as a headless smoke client against a live backend.

mod sinks;

use std::sync::{Arc, Mutex};

use clap::Parser;

use benchdeck_common::Size;
use benchdeck_frames::FrameManager;
use benchdeck_mux::{Multiplexer, WsConnector};
use benchdeck_panels::{
    BallOnPlatePanel, ControlPanel, PanelKind, PanelRegistry, SharedCanvas, VideoPanel,
};

use crate::sinks::{LogToggle, StatsCanvas, TracingSurface};

#[derive(Parser)]
#[command(name = "benchdeck", about = "Robotics testbed dashboard core")]
struct Args {
    /// Backend serving the websocket endpoint at ws://<host>/ws.
    #[arg(short = 'H', long, default_value = "127.0.0.1:8000")]
    host: String,

    /// Playground width in pixels.
    #[arg(long, default_value_t = 1920.0)]
    width: f64,

    /// Playground height in pixels.
    #[arg(long, default_value_t = 1080.0)]
    height: f64,

    /// Open the live camera panel.
    #[arg(long, default_value_t = true)]
    video: bool,

    /// Open the ball-on-plate simulator panel.
    #[arg(long, default_value_t = false)]
    simulator: bool,

    /// Open the control panel.
    #[arg(long, default_value_t = false)]
    control: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "benchdeck=info".into()),
        )
        .init();

    let args = Args::parse();

    let mux = Multiplexer::new(Arc::new(WsConnector::new(args.host.clone())));
    mux.register_toggle(Box::new(LogToggle));

    let playground = Size::new(args.width, args.height);
    let mut frames = FrameManager::with_surface(Box::new(TracingSurface::new(playground)));
    let registry = PanelRegistry::new(&frames);

    if let Err(e) = mux.connect().await {
        tracing::error!(host = %args.host, error = %e, "backend unreachable");
        std::process::exit(1);
    }

    if args.video {
        let canvas: SharedCanvas = Arc::new(Mutex::new(StatsCanvas::new("video")));
        let opened = registry.open_with(&mut frames, PanelKind::Video, |frames| {
            Ok(VideoPanel::open(&mux, frames, canvas)?.frame())
        });
        match opened {
            Ok(id) => tracing::info!(frame = %id, "video panel open"),
            Err(e) => tracing::error!(error = %e, "video panel failed"),
        }
    }

    if args.simulator {
        let canvas: SharedCanvas = Arc::new(Mutex::new(StatsCanvas::new("ball_on_plate")));
        let opened = registry.open_with(&mut frames, PanelKind::BallOnPlate, |frames| {
            Ok(BallOnPlatePanel::open(&mux, frames, canvas)?.frame())
        });
        match opened {
            Ok(id) => tracing::info!(frame = %id, "simulator panel open"),
            Err(e) => tracing::error!(error = %e, "simulator panel failed"),
        }
    }

    if args.control {
        let opened = registry.open_with(&mut frames, PanelKind::Control, |frames| {
            Ok(ControlPanel::open(&mux, frames)?.frame())
        });
        match opened {
            Ok(id) => tracing::info!(frame = %id, "control panel open"),
            Err(e) => tracing::error!(error = %e, "control panel failed"),
        }
    }

    tokio::signal::ctrl_c().await.ok();
    tracing::info!("shutting down");

    // Panel disposal sends DISCONNECT per task before the link goes down.
    for kind in [PanelKind::Video, PanelKind::BallOnPlate, PanelKind::Control] {
        if let Some(id) = registry.live(kind) {
            frames.dispose(id);
        }
    }
    if let Err(e) = mux.disconnect() {
        tracing::debug!(error = %e, "link already closed");
    }
}
