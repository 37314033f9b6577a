use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "wavegrad", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one gradient image as a PNG.
    Render(RenderArgs),
    /// Print a built-in preset as JSON.
    Preset(PresetArgs),
    /// Replay a ready signal followed by resizes, writing one PNG per repaint.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Gradient configuration JSON.
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Built-in preset name (`classic`, `still`).
    #[arg(long)]
    preset: Option<String>,

    /// Fill rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    cfg: ConfigArgs,

    /// Output width in pixels.
    #[arg(long, default_value_t = wavegrad::FALLBACK_CANVAS.width)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = wavegrad::FALLBACK_CANVAS.height)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Preset name.
    name: String,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    #[command(flatten)]
    cfg: ConfigArgs,

    /// Viewport sizes, e.g. `800x600,1024x768`. The first is the ready size.
    #[arg(long, value_delimiter = ',', required = true)]
    sizes: Vec<wavegrad::Canvas>,

    /// Output directory for numbered PNGs.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Preset(args) => cmd_preset(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

impl ConfigArgs {
    fn load(&self) -> anyhow::Result<wavegrad::GradientConfig> {
        let cfg = match (&self.config, &self.preset) {
            (Some(path), _) => wavegrad::GradientConfig::from_path(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
            (None, Some(name)) => wavegrad::Preset::from_name(name)?.config(),
            (None, None) => wavegrad::Preset::Classic.config(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    fn synth_opts(&self) -> wavegrad::SynthOpts {
        wavegrad::SynthOpts {
            parallel: self.parallel,
            threads: self.threads,
        }
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = args.cfg.load()?;
    let synth = wavegrad::GradientSynthesizer::new(cfg);
    let canvas = wavegrad::Canvas::new(args.width, args.height);

    let Some(raster) = synth.generate_with(canvas, &args.cfg.synth_opts())? else {
        eprintln!("canvas {canvas} is empty; nothing written");
        return Ok(());
    };

    raster
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    println!("{:016x}", raster.fingerprint());
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let preset = wavegrad::Preset::from_name(&args.name)?;
    println!("{}", preset.config().to_json_pretty()?);
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let cfg = args.cfg.load()?;
    let mut surface = wavegrad::PngSurface::new(&args.out_dir, "frame");

    let mut sizes = args.sizes.iter().copied();
    let first = sizes.next().context("at least one size is required")?;
    surface.set_viewport(Some(first));

    let mut host = wavegrad::GradientHost::with_opts(
        wavegrad::GradientSynthesizer::new(cfg),
        surface,
        args.cfg.synth_opts(),
    );
    host.on_surface_ready()?;
    for size in sizes {
        host.surface_mut().set_viewport(Some(size));
        host.on_surface_resized()?;
    }

    let surface = host.into_surface();
    for path in surface.written() {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
