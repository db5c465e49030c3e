extern crate arg_tracer as root;

use root::parsing::config::{Config, RendererType};
use root::parsing::{get_settings, get_settings_or_default};
use root::renderer::{NaiveRenderer, Renderer};
use root::world::World;

use std::process::ExitCode;

use structopt::StructOpt;
use tracing::{error, info, Level};

const DEFAULT_CONFIG: &str = "data/config.toml";

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub config_file: Option<String>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long)]
    pub headless: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

fn construct_renderer(config: &Config, headless: bool) -> Box<dyn Renderer> {
    info!("constructing renderer");
    match config.renderer {
        RendererType::Naive { .. } => Box::new(NaiveRenderer::new()),
        _ if headless => Box::new(NaiveRenderer::new()),
        #[cfg(feature = "preview")]
        RendererType::Preview { .. } => Box::new(root::renderer::PreviewRenderer::new()),
        #[cfg(not(feature = "preview"))]
        RendererType::Preview { .. } => {
            tracing::warn!("built without the preview feature, rendering headless");
            Box::new(NaiveRenderer::new())
        }
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    // only the default path may be absent
    let config = match &opts.config_file {
        Some(path) => get_settings(path)?,
        None => get_settings_or_default(DEFAULT_CONFIG)?,
    };
    let world = World::from_config(&config)?;
    info!(
        "scene: sphere at {:?} radius {}, film {}x{}",
        world.sphere.origin, world.sphere.radius, world.camera.width, world.camera.height
    );

    let renderer = construct_renderer(&config, opts.headless);
    if opts.dry_run {
        info!("dry run, not rendering");
        return Ok(());
    }
    renderer.render(&world, &config)
}

fn main() -> ExitCode {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, Level::INFO))
        .init();

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
