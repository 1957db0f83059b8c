use super::*;
use crate::{animation::transform::Transform, eval::layer::Placement};

fn layer(id: &str, transform: Transform) -> BakedLayer {
    BakedLayer {
        id: id.to_owned(),
        transform,
        placement: Placement {
            center_x: 0.0,
            center_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation_degrees: 0.0,
            opacity: 1.0,
        },
    }
}

#[test]
fn equal_layers_equal_fingerprints() {
    let a = [layer("x", Transform::IDENTITY)];
    let b = [layer("x", Transform::IDENTITY)];
    assert_eq!(fingerprint_layers(&a), fingerprint_layers(&b));
}

#[test]
fn ids_and_channels_both_matter() {
    let base = fingerprint_layers(&[layer("x", Transform::IDENTITY)]);
    assert_ne!(base, fingerprint_layers(&[layer("y", Transform::IDENTITY)]));
    let moved = Transform {
        translate_x: 1.0,
        ..Transform::IDENTITY
    };
    assert_ne!(base, fingerprint_layers(&[layer("x", moved)]));
    assert_ne!(base, fingerprint_layers(&[]));
}

#[test]
fn lanes_differ() {
    let fp = fingerprint_layers(&[layer("x", Transform::IDENTITY)]);
    assert_ne!(fp.hi, fp.lo);
}

#[test]
fn layer_order_matters() {
    let a = layer("a", Transform::IDENTITY);
    let b = layer("b", Transform::IDENTITY);
    assert_ne!(
        fingerprint_layers(&[a.clone(), b.clone()]),
        fingerprint_layers(&[b, a])
    );
}
