use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use woodview_channel::Broker;
use woodview_protocol::{CHANNEL_TOPIC, decode_snapshot};
use woodview_render::{PlanarProjection, Surface, SvgSurface, project_scene};

mod binding;
mod mount;
mod worker;

use binding::ViewBinding;
use mount::SvgMount;

#[derive(Parser)]
#[command(name = "woodview-client", about = "Visualization client for the woods simulation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info
    Info,
    /// Run the client against an in-process demo worker
    Run {
        /// Render target the SVG document is written to
        #[arg(long, default_value = "./mount.svg")]
        mount: PathBuf,
        /// Number of worker ticks to run
        #[arg(long, default_value = "40")]
        ticks: u32,
        /// Tick interval in milliseconds
        #[arg(long, default_value = "25")]
        interval_ms: u64,
        /// Inject a click at "x,y" (repeatable)
        #[arg(long = "click", value_parser = parse_click)]
        clicks: Vec<(f64, f64)>,
    },
    /// Decode a snapshot payload from a file and print the entity table
    Decode {
        file: PathBuf,
    },
    /// Decode a snapshot payload and render it to an SVG document
    Render {
        file: PathBuf,
        #[arg(long, default_value = "./mount.svg")]
        mount: PathBuf,
    },
}

fn parse_click(raw: &str) -> Result<(f64, f64), String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {raw}"))?;
    Ok((
        x.trim().parse().map_err(|e| format!("bad x: {e}"))?,
        y.trim().parse().map_err(|e| format!("bad y: {e}"))?,
    ))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("woodview-client v{}", env!("CARGO_PKG_VERSION"));
            println!("protocol: {}", woodview_protocol::crate_info());
            println!("channel: {}", woodview_channel::crate_info());
            println!("store: {}", woodview_store::crate_info());
            println!("render: {}", woodview_render::crate_info());
            println!("input: {}", woodview_input::crate_info());
            println!("assets: {}", woodview_assets::crate_info());
        }
        Commands::Run {
            mount,
            ticks,
            interval_ms,
            clicks,
        } => run(mount, ticks, Duration::from_millis(interval_ms), clicks)?,
        Commands::Decode { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("cannot read {}", file.display()))?;
            let entities = decode_snapshot(&raw)?;
            println!("{} entities", entities.len());
            for entity in &entities {
                match entity.body {
                    Some(body) => println!(
                        "  [{}] pos=({}, {}, {}) scale=({}, {}, {})",
                        entity.id, body.x, body.y, body.z, body.sx, body.sy, body.sz
                    ),
                    None => println!("  [{}] not drawable", entity.id),
                }
            }
        }
        Commands::Render { file, mount } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("cannot read {}", file.display()))?;
            let entities = decode_snapshot(&raw)?;
            let scene = project_scene(&entities, &PlanarProjection);
            let target = SvgMount::create(&mount)?;
            target.present(&SvgSurface::new().render(&scene))?;
            println!("{} shapes -> {}", scene.len(), target.path().display());
        }
    }

    Ok(())
}

fn run(mount: PathBuf, ticks: u32, interval: Duration, clicks: Vec<(f64, f64)>) -> anyhow::Result<()> {
    // Missing mount is fatal before anything subscribes.
    let target = SvgMount::create(&mount)?;
    tracing::info!(mount = %target.path().display(), ticks, "booting client");

    let broker = Broker::new();
    let view_bridge = broker.bridge(CHANNEL_TOPIC);
    let mut binding = ViewBinding::attach(&view_bridge);
    binding.on_redraw(move |entities| {
        let scene = project_scene(entities, &PlanarProjection);
        let markup = SvgSurface::new().render(&scene);
        if let Err(err) = target.present(&markup) {
            tracing::warn!(%err, "redraw failed");
        }
    });

    let worker = worker::spawn_demo_worker(broker.bridge(CHANNEL_TOPIC), ticks, interval);

    // Schedule the scripted clicks across the run, earliest first.
    let mut clicks = clicks.into_iter().enumerate().collect::<Vec<_>>();
    clicks.reverse();

    for tick in 0..ticks {
        binding.pump();
        if let Some((index, (x, y))) = clicks.last().copied() {
            if tick as usize >= (index + 1) * 3 {
                tracing::info!(x, y, "click");
                binding.click(&woodview_input::PointerEvent {
                    page_x: x,
                    page_y: y,
                });
                clicks.pop();
            }
        }
        std::thread::sleep(interval);
    }

    worker
        .join()
        .map_err(|_| anyhow::anyhow!("demo worker panicked"))?;
    binding.pump();

    tracing::info!(
        revision = binding.store().revision(),
        entities = binding.store().entities().len(),
        dropped = binding.dropped(),
        "client done"
    );
    Ok(())
}
