use crate::{export::bake::BakedLayer, foundation::math::Fnv1a64};

/// Stable 128-bit fingerprint of one baked frame.
///
/// Two FNV-1a lanes with different seeds hash the same byte stream: layer ids plus the exact
/// bit patterns of every transform channel. The frame index and timestamp are not hashed, so
/// frames where nothing moves share a fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameFingerprint {
    /// High lane.
    pub hi: u64,
    /// Low lane.
    pub lo: u64,
}

const LANE_HI_SEED: u64 = Fnv1a64::OFFSET_BASIS;
const LANE_LO_SEED: u64 = 0x9ae1_6a3b_2f90_404f;

pub(crate) fn fingerprint_layers(layers: &[BakedLayer]) -> FrameFingerprint {
    let mut a = Fnv1a64::new(LANE_HI_SEED);
    let mut b = Fnv1a64::new(LANE_LO_SEED);
    write_u64_pair(&mut a, &mut b, layers.len() as u64);
    for layer in layers {
        write_str_pair(&mut a, &mut b, &layer.id);
        layer.transform.write_bits(&mut a);
        layer.transform.write_bits(&mut b);
    }
    FrameFingerprint {
        hi: a.finish(),
        lo: b.finish(),
    }
}

fn write_u64_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, v: u64) {
    a.write_u64(v);
    b.write_u64(v);
}

fn write_str_pair(a: &mut Fnv1a64, b: &mut Fnv1a64, s: &str) {
    write_u64_pair(a, b, s.len() as u64);
    a.write_bytes(s.as_bytes());
    b.write_bytes(s.as_bytes());
}

#[cfg(test)]
#[path = "../../tests/unit/export/fingerprint.rs"]
mod tests;
