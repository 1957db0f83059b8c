use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use textmotion::{
    AnimationPreset, BakeJob, BakedLayer, Canvas, ExportThreading, FrameIndex, FrameRange,
    PresetCategory, StockShape, evaluate_layer, evaluate_preview, resolve_placement,
};

#[derive(Parser, Debug)]
#[command(name = "textmotion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every preset with its category and preview timing.
    Presets(PresetsArgs),
    /// Evaluate every visible layer of a job at one instant and print JSON.
    Sample(SampleArgs),
    /// Bake a job's timeline to a JSON file.
    Bake(BakeArgs),
    /// Print a preset's thumbnail transform at one instant.
    Preview(PreviewArgs),
    /// Print a stock motion path for a canvas.
    Shape(ShapeArgs),
}

#[derive(Parser, Debug)]
struct PresetsArgs {
    /// Print JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input bake job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Elapsed time in seconds.
    #[arg(long)]
    time: f64,
}

#[derive(Parser, Debug)]
struct BakeArgs {
    /// Input bake job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    /// First frame to bake (inclusive).
    #[arg(long)]
    start: Option<u64>,

    /// Last frame to bake (exclusive). Defaults to the job duration.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per parallel batch (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Preset wire name, e.g. `fadeIn`.
    #[arg(long)]
    preset: String,

    /// Seconds since the picker opened.
    #[arg(long)]
    time: f64,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ShapeKind {
    Circle,
    Wave,
    Arc,
}

#[derive(Parser, Debug)]
struct ShapeArgs {
    /// Which stock shape.
    #[arg(long)]
    kind: ShapeKind,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1080)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 1920)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Presets(args) => cmd_presets(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Bake(args) => cmd_bake(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Shape(args) => cmd_shape(args),
    }
}

fn wire_name(preset: AnimationPreset) -> anyhow::Result<String> {
    match serde_json::to_value(preset)? {
        serde_json::Value::String(s) => Ok(s),
        other => anyhow::bail!("unexpected preset encoding: {other}"),
    }
}

#[tracing::instrument]
fn cmd_presets(args: PresetsArgs) -> anyhow::Result<()> {
    if args.json {
        let rows = AnimationPreset::ALL
            .iter()
            .map(|&p| -> anyhow::Result<serde_json::Value> {
                Ok(serde_json::json!({
                    "preset": wire_name(p)?,
                    "name": p.display_name(),
                    "category": p.category(),
                    "previewSeconds": p.preview_duration_secs(),
                    "tracks": p.tracks(),
                }))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for category in PresetCategory::ALL {
        println!("{}", category.display_name());
        for p in AnimationPreset::ALL.into_iter().filter(|p| p.category() == category) {
            println!(
                "  {:<14} {:<16} {:>4.1}s  {} track(s)",
                wire_name(p)?,
                p.display_name(),
                p.preview_duration_secs(),
                p.tracks().len()
            );
        }
    }
    Ok(())
}

#[tracing::instrument]
fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let job = BakeJob::from_path(&args.in_path)?;
    job.validate()
        .with_context(|| format!("validate '{}'", args.in_path.display()))?;

    let layers: Vec<BakedLayer> = job
        .draw_order()
        .into_iter()
        .map(|layer| {
            let transform = evaluate_layer(layer, args.time, job.canvas);
            BakedLayer {
                id: layer.id.clone(),
                placement: resolve_placement(layer, &transform, job.canvas),
                transform,
            }
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&layers)?);
    Ok(())
}

#[tracing::instrument]
fn cmd_bake(args: BakeArgs) -> anyhow::Result<()> {
    let job = BakeJob::from_path(&args.in_path)?;
    let range = FrameRange::new(
        FrameIndex(args.start.unwrap_or(0)),
        FrameIndex(args.end.unwrap_or(job.duration_frames)),
    )?;
    let threading = ExportThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let timeline = textmotion::bake(&job, range, &threading)
        .with_context(|| format!("bake '{}'", args.in_path.display()))?;
    tracing::info!(frames = timeline.frames.len(), "timeline baked");

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(&args.out)
        .with_context(|| format!("create '{}'", args.out.display()))?;
    serde_json::to_writer(BufWriter::new(f), &timeline)
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!(
        "baked {} frame(s) ({} still) to {}",
        timeline.frames.len(),
        timeline.still_frames(),
        args.out.display()
    );
    Ok(())
}

#[tracing::instrument]
fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let preset: AnimationPreset = serde_json::from_value(serde_json::Value::String(args.preset))
        .context("unknown preset name")?;
    let t = evaluate_preview(preset, args.time);
    println!("{}", serde_json::to_string_pretty(&t)?);
    Ok(())
}

#[tracing::instrument]
fn cmd_shape(args: ShapeArgs) -> anyhow::Result<()> {
    let shape = match args.kind {
        ShapeKind::Circle => StockShape::Circle,
        ShapeKind::Wave => StockShape::Wave,
        ShapeKind::Arc => StockShape::Arc,
    };
    let path = shape.to_path(Canvas::new(args.width, args.height))?;
    println!("{}", serde_json::to_string_pretty(&path)?);
    Ok(())
}
