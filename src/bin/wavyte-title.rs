use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use wavyte_title::{FrameContext, LayerPlan};

#[derive(Parser, Debug)]
#[command(name = "wavyte-title", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the layers a title draws over its lifetime as JSON.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input title JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Number of evenly spaced progress samples in [0, 1].
    #[arg(long, default_value_t = 11)]
    frames: usize,

    /// On-screen duration in seconds; sets each sample's elapsed time.
    #[arg(long)]
    duration: Option<f64>,

    /// Worker threads for planning (defaults to sequential).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FramePlan {
    progress: f64,
    offset_time: Option<f64>,
    layers: LayerPlan,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
    }
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open title '{}'", args.in_path.display()))?;
    let request: wavyte_title::TitleRequest =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse title JSON")?;

    let canvas = wavyte_title::Canvas::new(args.width, args.height)?;
    let renderer = wavyte_title::TitleRenderer::new(canvas, request)?;
    let frames = FrameContext::sweep(args.frames, args.duration);

    let plans = match args.threads {
        Some(n) => wavyte_title::render_frames_parallel(
            &renderer,
            &frames,
            wavyte_title::FixedLineHeight::default,
            Some(n),
        )?,
        None => wavyte_title::render_frames(
            &renderer,
            &frames,
            &mut wavyte_title::FixedLineHeight::default(),
        )?,
    };

    let out: Vec<FramePlan> = frames
        .iter()
        .zip(plans)
        .map(|(f, layers)| FramePlan {
            progress: f.progress,
            offset_time: f.offset_time,
            layers,
        })
        .collect();

    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &out).with_context(|| "write plan JSON")?;
    println!();
    Ok(())
}
