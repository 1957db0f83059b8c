//! Offline timeline baking.
//!
//! A [`BakeJob`] is evaluated for every frame of a [`FrameRange`] at the job's [`Fps`]. Frames
//! are independent, so the parallel path simply spreads chunks of frame indices over a
//! dedicated rayon pool and reassembles them in order. Serial and parallel bakes produce
//! bit-identical output.

use std::{collections::HashSet, fs::File, io::BufReader, path::Path};

use rayon::prelude::*;

use crate::{
    animation::transform::Transform,
    eval::layer::{Placement, TextLayer, evaluate_layer, resolve_placement},
    export::fingerprint::{FrameFingerprint, fingerprint_layers},
    foundation::{
        core::{Canvas, Fps, FrameIndex, FrameRange},
        error::{MotionError, MotionResult},
    },
};

/// Everything needed to bake a timeline: canvas, frame rate, length and layers.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakeJob {
    /// Output canvas in pixels.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Timeline length in frames.
    pub duration_frames: u64,
    /// Layers in document order.
    #[serde(default)]
    pub layers: Vec<TextLayer>,
}

impl BakeJob {
    /// Parse a job from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> MotionResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| MotionError::serde(format!("parse bake job JSON: {e}")))
    }

    /// Parse a job from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MotionError::validation(format!("open bake job JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check job parameters and every layer's authored animation.
    pub fn validate(&self) -> MotionResult<()> {
        if self.canvas.is_empty() {
            return Err(MotionError::validation(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        Fps::new(self.fps.num, self.fps.den)?;

        let mut seen = HashSet::with_capacity(self.layers.len());
        for layer in &self.layers {
            if !seen.insert(layer.id.as_str()) {
                return Err(MotionError::validation(format!(
                    "duplicate layer id '{}'",
                    layer.id
                )));
            }
            if let Some(spec) = &layer.animation {
                spec.validate().map_err(|e| {
                    MotionError::validation(format!("layer '{}': {e}", layer.id))
                })?;
            }
            if let Some(path) = &layer.path {
                path.validate().map_err(|e| {
                    MotionError::validation(format!("layer '{}': {e}", layer.id))
                })?;
            }
        }
        Ok(())
    }

    /// The whole timeline, `[0, duration_frames)`.
    pub fn full_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration_frames),
        }
    }

    /// Visible layers in draw order (ascending `z_index`, document order on ties).
    pub fn draw_order(&self) -> Vec<&TextLayer> {
        let mut layers: Vec<&TextLayer> = self.layers.iter().filter(|l| l.visible).collect();
        layers.sort_by_key(|l| l.z_index);
        layers
    }
}

/// Threading options for [`bake`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportThreading {
    /// Bake frames on a dedicated rayon pool.
    pub parallel: bool,
    /// Frames handed to the pool per batch. `0` is treated as `1`.
    pub chunk_size: usize,
    /// Override the number of worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for ExportThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// One layer's evaluated state within a baked frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakedLayer {
    /// Layer id from the job.
    pub id: String,
    /// Animated transform.
    pub transform: Transform,
    /// Absolute placement on the canvas.
    pub placement: Placement,
}

/// All visible layers at one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakedFrame {
    /// Timeline frame index.
    pub frame: FrameIndex,
    /// Timestamp of the frame start.
    pub time_secs: f64,
    /// Layers in draw order.
    pub layers: Vec<BakedLayer>,
    /// Fingerprint over `layers`.
    pub fingerprint: FrameFingerprint,
}

/// Result of [`bake`]: one entry per frame of the requested range, in frame order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BakedTimeline {
    /// Canvas the placements refer to.
    pub canvas: Canvas,
    /// Frame rate the timestamps were derived from.
    pub fps: Fps,
    /// Baked frames.
    pub frames: Vec<BakedFrame>,
}

impl BakedTimeline {
    /// Number of frames whose fingerprint repeats the previous frame's.
    pub fn still_frames(&self) -> usize {
        self.frames
            .windows(2)
            .filter(|w| w[0].fingerprint == w[1].fingerprint)
            .count()
    }
}

/// Bake `range` of `job`, serially or in parallel according to `threading`.
#[tracing::instrument(skip(job), fields(layers = job.layers.len()))]
pub fn bake(
    job: &BakeJob,
    range: FrameRange,
    threading: &ExportThreading,
) -> MotionResult<BakedTimeline> {
    job.validate()?;
    if range.end.0 > job.duration_frames {
        return Err(MotionError::export(format!(
            "range end {} exceeds job duration {}",
            range.end.0, job.duration_frames
        )));
    }

    let layers = job.draw_order();
    let ctx = FrameCtx {
        layers: &layers,
        canvas: job.canvas,
        fps: job.fps,
    };

    let frames = if threading.parallel {
        bake_parallel(&ctx, range, threading)?
    } else {
        (range.start.0..range.end.0)
            .map(|f| bake_frame(&ctx, FrameIndex(f)))
            .collect()
    };

    tracing::debug!(frames = frames.len(), "bake finished");
    Ok(BakedTimeline {
        canvas: job.canvas,
        fps: job.fps,
        frames,
    })
}

/// Bake the whole timeline of `job`.
pub fn bake_all(job: &BakeJob, threading: &ExportThreading) -> MotionResult<BakedTimeline> {
    bake(job, job.full_range(), threading)
}

#[derive(Clone, Copy)]
struct FrameCtx<'a> {
    layers: &'a [&'a TextLayer],
    canvas: Canvas,
    fps: Fps,
}

fn bake_frame(ctx: &FrameCtx<'_>, frame: FrameIndex) -> BakedFrame {
    let time_secs = ctx.fps.frame_to_secs(frame);
    let layers: Vec<BakedLayer> = ctx
        .layers
        .iter()
        .map(|layer| {
            let transform = evaluate_layer(layer, time_secs, ctx.canvas);
            BakedLayer {
                id: layer.id.clone(),
                placement: resolve_placement(layer, &transform, ctx.canvas),
                transform,
            }
        })
        .collect();
    let fingerprint = fingerprint_layers(&layers);
    BakedFrame {
        frame,
        time_secs,
        layers,
        fingerprint,
    }
}

fn bake_parallel(
    ctx: &FrameCtx<'_>,
    range: FrameRange,
    threading: &ExportThreading,
) -> MotionResult<Vec<BakedFrame>> {
    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let (range_start, range_end) = (range.start.0, range.end.0);

    let mut frames = Vec::with_capacity(usize::try_from(range.len_frames()).unwrap_or(0));
    let mut chunk_start = range_start;
    while chunk_start < range_end {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(range_end);
        let chunk: Vec<BakedFrame> = pool.install(|| {
            (chunk_start..chunk_end)
                .into_par_iter()
                .map(|f| bake_frame(ctx, FrameIndex(f)))
                .collect()
        });
        frames.extend(chunk);
        chunk_start = chunk_end;
    }
    Ok(frames)
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[tracing::instrument]
pub(crate) fn build_thread_pool(threads: Option<usize>) -> MotionResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MotionError::validation("bake 'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MotionError::export(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/export/bake.rs"]
mod tests;
