#![cfg(test)]
use sortr_common::config::{BULKY_VOLUME, HEAVY_MASS, OVERSIZED_DIMENSION};
use sortr_core::{classify, Argument, Category, Oversize, Package};

const LIGHT: f64 = 1.0;
const HEAVY: f64 = 50.0;

#[test]
fn oversized_width() {
    assert_eq!(classify(200.0, 50.0, 50.0, LIGHT), Ok(Category::Special));
    assert_eq!(classify(200.0, 50.0, 50.0, HEAVY), Ok(Category::Rejected));
}

#[test]
fn oversized_height() {
    assert_eq!(classify(50.0, 200.0, 50.0, LIGHT), Ok(Category::Special));
    assert_eq!(classify(50.0, 200.0, 50.0, HEAVY), Ok(Category::Rejected));
}

#[test]
fn oversized_length() {
    assert_eq!(classify(50.0, 50.0, 200.0, LIGHT), Ok(Category::Special));
    assert_eq!(classify(50.0, 50.0, 200.0, HEAVY), Ok(Category::Rejected));
}

#[test]
fn acceptable_volume() {
    assert_eq!(classify(50.0, 50.0, 50.0, LIGHT), Ok(Category::Standard));
    assert_eq!(classify(50.0, 50.0, 50.0, HEAVY), Ok(Category::Special));
}

#[test]
fn bulky_volume() {
    assert_eq!(classify(100.0, 100.0, 100.0, LIGHT), Ok(Category::Special));
    assert_eq!(classify(100.0, 100.0, 100.0, HEAVY), Ok(Category::Rejected));
}

#[test]
fn thresholds_are_inclusive() {
    let below = OVERSIZED_DIMENSION - 0.01;
    assert_eq!(classify(below, 1.0, 1.0, LIGHT), Ok(Category::Standard));
    assert_eq!(classify(OVERSIZED_DIMENSION, 1.0, 1.0, LIGHT), Ok(Category::Special));

    assert_eq!(classify(1.0, 1.0, 1.0, HEAVY_MASS - 0.01), Ok(Category::Standard));
    assert_eq!(classify(1.0, 1.0, 1.0, HEAVY_MASS), Ok(Category::Special));

    assert_eq!(classify(100.0, 100.0, 99.99, LIGHT), Ok(Category::Standard));
    assert_eq!(classify(100.0, 100.0, BULKY_VOLUME / 10_000.0, LIGHT), Ok(Category::Special));
}

#[test]
fn classification_is_idempotent() {
    let inputs = [
        (200.0, 50.0, 50.0, LIGHT),
        (50.0, 50.0, 50.0, HEAVY),
        (100.0, 100.0, 100.0, HEAVY),
        (10.0, 20.0, 30.0, 4.0),
    ];

    for (width, height, length, mass) in inputs {
        let first = classify(width, height, length, mass);
        let second = classify(width, height, length, mass);
        assert_eq!(first, second);
    }
}

#[test]
fn assessment_explains_the_category() {
    let by_height = Package::new(50.0, 200.0, 50.0, HEAVY).unwrap().assess();
    assert_eq!(by_height.oversized, Some(Oversize::Dimension(Argument::Height)));
    assert!(by_height.heavy);
    assert_eq!(by_height.category, Category::Rejected);

    let by_volume = Package::new(100.0, 100.0, 100.0, LIGHT).unwrap().assess();
    assert_eq!(by_volume.oversized, Some(Oversize::Volume(1_000_000.0)));
    assert!(!by_volume.heavy);
    assert_eq!(by_volume.category, Category::Special);

    let standard = Package::new(50.0, 50.0, 50.0, LIGHT).unwrap().assess();
    assert_eq!(standard.oversized, None);
    assert_eq!(standard.category.to_string(), "STANDARD");
}
