use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use image::imageops;
use ringfield::{
    CompositeMode, EllipseAnimation, Field, OffsetState, Preset, RenderThreading, SceneConfig,
    ToneMap,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Darkest to brightest.
const RAMP: &[u8] = b" .:-=+*#%@";

#[derive(Parser, Debug)]
#[command(name = "ringfield", version, about = "Render nested-shape brightness fields")]
struct Cli {
    /// Log level; `RUST_LOG` overrides it.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame and print statistics plus a terminal preview.
    Render(RenderArgs),
    /// Print the interpolated keyframes of the ellipse animation.
    Sequence(SequenceArgs),
    /// Run the ellipse animation in auto mode on a simulated clock.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Built-in scene name.
    #[arg(long, conflicts_with = "in_path", required_unless_present = "in_path")]
    preset: Option<Preset>,

    /// Scene JSON file.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Animation offset (animated presets only).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i32,

    /// Preview width in characters; 0 disables the preview.
    #[arg(long, default_value_t = 64)]
    cols: u32,

    /// Split rows across worker threads.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Interpolation steps per side.
    #[arg(long, default_value_t = ringfield::DEFAULT_STEPS)]
    steps: usize,

    /// Dump the sequence as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Number of clock ticks to simulate.
    #[arg(long, default_value_t = 40)]
    ticks: u32,

    /// Auto-move period in milliseconds.
    #[arg(long, default_value_t = ringfield::DEFAULT_INTERVAL_MS)]
    interval_ms: u64,

    /// Split rows across worker threads.
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (label, mut scene, tone) = match (args.preset, &args.in_path) {
        (Some(preset), _) => {
            let scene = preset
                .scene_at(args.offset)
                .with_context(|| format!("build preset '{preset}'"))?;
            (preset.to_string(), scene, preset.tone_map())
        }
        (None, Some(path)) => {
            if args.offset != 0 {
                anyhow::bail!("--offset only applies to animated presets");
            }
            let scene = SceneConfig::from_path(path)?;
            let tone = match scene.opts.mode {
                CompositeMode::Peak => ToneMap::Direct,
                CompositeMode::WeightedBlend => ToneMap::Unit,
            };
            (path.display().to_string(), scene, tone)
        }
        (None, None) => anyhow::bail!("either --preset or --in is required"),
    };
    if args.parallel {
        scene.opts.threading = RenderThreading {
            parallel: true,
            threads: args.threads,
        };
    }

    let field = scene.render().with_context(|| format!("render '{label}'"))?;
    println!("{label}: {}", stats_line(&field));
    if args.cols > 0 {
        print!("{}", ascii_preview(&field, tone, args.cols));
    }
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let anim = EllipseAnimation {
        steps: args.steps,
        ..EllipseAnimation::stock()
    };
    let seq = anim.sequence()?;

    if args.json {
        let json = serde_json::to_string_pretty(&seq).context("serialize sequence")?;
        println!("{json}");
        return Ok(());
    }

    let steps = i32::try_from(seq.steps()).context("steps out of range")?;
    for offset in -steps..=steps {
        let Some(frame) = seq.at_offset(offset) else {
            continue;
        };
        let cells: Vec<String> = frame
            .shapes()
            .iter()
            .map(|k| {
                format!(
                    "({:>4},{:>3}) {:>3}x{:<3}",
                    k.center.0, k.center.1, k.semi_major, k.semi_minor
                )
            })
            .collect();
        println!("{offset:>4}  {}", cells.join("  "));
    }
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let anim = EllipseAnimation::stock();
    let seq = anim.sequence()?;
    let limit = u32::try_from(seq.steps()).context("steps out of range")?;
    let mut state = OffsetState::new(limit).with_interval_ms(args.interval_ms);
    state.start_auto();

    let mut now_ms = 0u64;
    for tick in 1..=args.ticks {
        now_ms += args.interval_ms;
        if !state.tick(now_ms) {
            println!(
                "tick {tick:>3} t={now_ms}ms offset={:>3} turn {:?}",
                state.offset(),
                state.direction()
            );
            continue;
        }
        let mut scene = anim.scene_at(&seq, state.offset())?;
        scene.opts.threading.parallel = args.parallel;
        let field = scene
            .render()
            .with_context(|| format!("render offset {}", state.offset()))?;
        println!(
            "tick {tick:>3} t={now_ms}ms offset={:>3} {}",
            state.offset(),
            stats_line(&field)
        );
    }
    state.stop_auto();
    tracing::info!(offset = state.offset(), "animation stopped");
    Ok(())
}

fn stats_line(field: &Field) -> String {
    let s = field.stats();
    format!(
        "{}x{} min={:.4} max={:.4} mean={:.4} nonzero={} non_finite={}",
        field.width(),
        field.height(),
        s.min,
        s.max,
        s.mean,
        s.nonzero,
        s.non_finite
    )
}

/// Downsample to `cols` characters wide; terminal cells are about twice as tall as wide.
fn ascii_preview(field: &Field, tone: ToneMap, cols: u32) -> String {
    let img = field.to_gray_image(tone);
    let cols = cols.min(img.width()).max(1);
    let (w, h) = (u64::from(img.width()), u64::from(img.height()));
    let rows = (h * u64::from(cols) / (2 * w)).max(1);
    let rows = u32::try_from(rows).unwrap_or(u32::MAX);
    let small = imageops::resize(&img, cols, rows, imageops::FilterType::Triangle);

    let mut out = String::with_capacity(((cols + 1) * rows) as usize);
    for row in small.rows() {
        for px in row {
            let idx = usize::from(px.0[0]) * (RAMP.len() - 1) / 255;
            out.push(char::from(RAMP[idx]));
        }
        out.push('\n');
    }
    out
}
