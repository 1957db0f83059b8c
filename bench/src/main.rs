use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use serde_json::json;
use sha2::Digest as _;
use textmotion::{
    AnimationPath, AnimationPreset, AnimationSpec, BakeJob, Canvas, CurveKind, ExportThreading,
    Fps, LayerPosition, PathKind, PathPoint, TextLayer,
};

#[derive(Clone, Debug)]
struct BenchArgs {
    width: u32,
    height: u32,
    fps: u32,
    seconds: u32,
    layers: usize,
    warmup: u32,
    repeats: u32,
    parallel: bool,
    threads: Option<usize>,
    chunk_size: usize,
    summary_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Default)]
struct RunMetrics {
    bake_total: Duration,
    serialize_total: Duration,
    wall_total: Duration,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;

    if args.width == 0 || args.height == 0 {
        anyhow::bail!("--width/--height must be > 0");
    }
    if args.fps == 0 || args.seconds == 0 {
        anyhow::bail!("--fps and --seconds must be > 0");
    }
    if args.layers == 0 {
        anyhow::bail!("--layers must be >= 1");
    }
    if args.chunk_size == 0 {
        anyhow::bail!("--chunk-size must be >= 1");
    }
    if let Some(n) = args.threads
        && n == 0
    {
        anyhow::bail!("--threads must be >= 1 when set");
    }

    let job = build_benchmark_job(&args)?;
    let threading = ExportThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    if args.warmup > 0 {
        eprintln!("warmup: {} run(s)", args.warmup);
        for _ in 0..args.warmup {
            let _ = run_once(&job, &threading)?;
        }
    }

    eprintln!(
        "bench: {repeats} run(s) ({profile} build), {frames} frames/run x {layers} layers, mode={mode}, threads={threads}, chunk={chunk}",
        repeats = args.repeats,
        profile = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
        frames = job.duration_frames,
        layers = job.layers.len(),
        mode = if args.parallel {
            "parallel"
        } else {
            "sequential"
        },
        threads = args
            .threads
            .map(|n| n.to_string())
            .unwrap_or_else(|| "auto".to_string()),
        chunk = args.chunk_size,
    );

    let mut runs = Vec::<RunMetrics>::with_capacity(args.repeats as usize);
    let mut digest: Option<String> = None;
    for i in 0..args.repeats {
        let (metrics, run_digest) = run_once(&job, &threading)?;
        match &digest {
            None => digest = Some(run_digest),
            Some(d) if *d != run_digest => {
                anyhow::bail!("run {i} produced digest {run_digest}, expected {d}")
            }
            Some(_) => {}
        }
        runs.push(metrics);
    }

    let digest = digest.unwrap_or_default();
    eprintln!("timeline sha256: {digest}");
    report_percentiles(&runs);

    if let Some(path) = &args.summary_out {
        let summary = json!({
            "frames": job.duration_frames,
            "layers": job.layers.len(),
            "parallel": args.parallel,
            "threads": args.threads,
            "chunkSize": args.chunk_size,
            "repeats": args.repeats,
            "sha256": digest,
            "bakeMsP50": percentile(&collect(&runs, |m| m.bake_total), 0.50).as_secs_f64() * 1000.0,
        });
        std::fs::write(path, serde_json::to_vec_pretty(&summary)?)
            .with_context(|| format!("write summary '{}'", path.display()))?;
    }
    Ok(())
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut args = std::env::args().skip(1);

    let mut out = BenchArgs {
        width: 1080,
        height: 1920,
        fps: 30,
        seconds: 10,
        layers: 24,
        warmup: 1,
        repeats: 50,
        parallel: false,
        threads: None,
        chunk_size: 64,
        summary_out: None,
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--width" => out.width = parse_u32(args.next(), "--width")?,
            "--height" => out.height = parse_u32(args.next(), "--height")?,
            "--fps" => out.fps = parse_u32(args.next(), "--fps")?,
            "--seconds" => out.seconds = parse_u32(args.next(), "--seconds")?,
            "--layers" => out.layers = parse_usize(args.next(), "--layers")?,
            "--warmup" => out.warmup = parse_u32(args.next(), "--warmup")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--parallel" => out.parallel = true,
            "--threads" => out.threads = Some(parse_usize(args.next(), "--threads")?),
            "--chunk-size" => out.chunk_size = parse_usize(args.next(), "--chunk-size")?,
            "--summary-out" => {
                out.summary_out = Some(PathBuf::from(args.next().ok_or_else(|| {
                    anyhow::anyhow!("missing value for --summary-out (expected a path)")
                })?))
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }

    Ok(out)
}

fn print_help() {
    eprintln!(
        "textmotion-bench: bake throughput benchmark

USAGE:
  cargo run --manifest-path bench/Cargo.toml --release -- [OPTIONS]

OPTIONS:
  --width <px>          canvas width (default 1080)
  --height <px>         canvas height (default 1920)
  --fps <n>             frames per second (default 30)
  --seconds <n>         timeline length (default 10)
  --layers <n>          number of animated layers (default 24)
  --warmup <n>          warmup runs (default 1)
  --repeats <n>         measured runs (default 50)
  --parallel            bake on a rayon pool
  --threads <n>         worker threads (parallel only)
  --chunk-size <n>      frames per batch (default 64)
  --summary-out <path>  write a JSON summary"
    );
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}' as u32"))
}

fn parse_usize(v: Option<String>, flag: &str) -> anyhow::Result<usize> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<usize>()
        .with_context(|| format!("parse {flag} value '{v}' as usize"))
}

/// Layers cycle through every preset; path presets get a wavy custom path.
fn build_benchmark_job(args: &BenchArgs) -> anyhow::Result<BakeJob> {
    let fps = Fps::new(args.fps, 1)?;
    let path = AnimationPath::new(
        PathKind::Custom,
        (0..8)
            .map(|i| {
                let t = i as f32 / 7.0;
                PathPoint::new(0.1 + 0.8 * t, 0.5 + 0.2 * (t * 9.0).sin())
            })
            .collect(),
    );

    let layers = (0..args.layers)
        .map(|i| {
            let preset = AnimationPreset::ALL[i % AnimationPreset::ALL.len()];
            let spec = AnimationSpec::new(preset)
                .with_delay(0.05 * (i % 10) as f64)
                .with_duration(0.6 + 0.1 * (i % 7) as f64)
                .with_loop(i % 2 == 0);
            let mut layer = TextLayer::new(format!("layer-{i}"), format!("Layer {i}"))
                .with_animation(spec)
                .with_position(LayerPosition {
                    x: 0.1 + 0.8 * ((i % 5) as f32 / 4.0),
                    y: 0.1 + 0.8 * ((i / 5 % 5) as f32 / 4.0),
                    ..LayerPosition::default()
                });
            if preset.is_path() {
                let curve = if i % 2 == 0 {
                    CurveKind::Quadratic
                } else {
                    CurveKind::Cubic
                };
                layer = layer.with_path(path.clone().with_curve(curve));
            }
            layer.z_index = (i % 3) as i32;
            layer
        })
        .collect();

    let job = BakeJob {
        canvas: Canvas::new(args.width, args.height),
        fps,
        duration_frames: u64::from(args.fps) * u64::from(args.seconds),
        layers,
    };
    job.validate()?;
    Ok(job)
}

fn run_once(job: &BakeJob, threading: &ExportThreading) -> anyhow::Result<(RunMetrics, String)> {
    let wall = Instant::now();

    let t0 = Instant::now();
    let timeline = textmotion::bake_all(job, threading)?;
    let bake_total = t0.elapsed();

    let t1 = Instant::now();
    let bytes = serde_json::to_vec(&timeline)?;
    let serialize_total = t1.elapsed();

    Ok((
        RunMetrics {
            bake_total,
            serialize_total,
            wall_total: wall.elapsed(),
        },
        sha256_hex(&bytes),
    ))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut s = String::with_capacity(digest.len() * 2);
    for b in digest {
        s.push_str(&format!("{b:02x}"));
    }
    s
}

fn collect(runs: &[RunMetrics], f: fn(&RunMetrics) -> Duration) -> Vec<Duration> {
    let mut v = runs.iter().map(f).collect::<Vec<_>>();
    v.sort_by_key(|d| d.as_nanos());
    v
}

fn percentile(v: &[Duration], p: f64) -> Duration {
    if v.is_empty() {
        return Duration::ZERO;
    }
    let n = v.len();
    let rank = (p * (n as f64)).ceil().clamp(1.0, n as f64) as usize;
    v[rank - 1]
}

fn report_percentiles(runs: &[RunMetrics]) {
    type Getter = fn(&RunMetrics) -> Duration;
    type Field = (&'static str, Getter);

    fn fmt_ms(d: Duration) -> String {
        format!("{:.3}ms", d.as_secs_f64() * 1000.0)
    }

    let fields: &[Field] = &[
        ("bake_total", |m| m.bake_total),
        ("serialize_total", |m| m.serialize_total),
        ("wall_total", |m| m.wall_total),
    ];

    eprintln!("\npercentiles across runs (p50/p90/p99):");
    for (name, getter) in fields {
        let v = collect(runs, *getter);
        eprintln!(
            "  {name:16} p50={p50:>10}  p90={p90:>10}  p99={p99:>10}",
            name = *name,
            p50 = fmt_ms(percentile(&v, 0.50)),
            p90 = fmt_ms(percentile(&v, 0.90)),
            p99 = fmt_ms(percentile(&v, 0.99))
        );
    }
}
