//! Tests for vegetation classification

use image::{Rgb, RgbImage};

use super::*;

/// 100x100 black raster with a 50x50 pure green square centered at
/// [25, 75) in both axes.
fn black_with_green_square() -> RgbImage {
    RgbImage::from_fn(100, 100, |x, y| {
        if (25..75).contains(&x) && (25..75).contains(&y) {
            Rgb([0, 255, 0])
        } else {
            Rgb([0, 0, 0])
        }
    })
}

#[test]
fn test_green_band_boundaries_are_inclusive() {
    assert!(in_green_band(Hsv {
        h: 35,
        s: 25,
        v: 25
    }));
    assert!(in_green_band(Hsv {
        h: 85,
        s: 255,
        v: 255
    }));
}

#[test]
fn test_one_unit_outside_green_band_is_rejected() {
    assert!(!in_green_band(Hsv {
        h: 34,
        s: 25,
        v: 25
    }));
    assert!(!in_green_band(Hsv {
        h: 86,
        s: 255,
        v: 255
    }));
    assert!(!in_green_band(Hsv {
        h: 35,
        s: 24,
        v: 25
    }));
    assert!(!in_green_band(Hsv {
        h: 35,
        s: 25,
        v: 24
    }));
}

#[test]
fn test_green_square_detected_with_defaults() {
    let image = black_with_green_square();
    let mask = detect_vegetation(&image, &SegmentationOptions::default());

    assert_eq!(mask.dimensions(), (100, 100));
    assert!(mask.get(50, 50));
    assert!(!mask.get(10, 10));
}

#[test]
fn test_green_square_detected_under_every_toggle_combination() {
    let image = black_with_green_square();

    for normalize_illumination in [false, true] {
        for use_lab_color_space in [false, true] {
            let options = SegmentationOptions {
                normalize_illumination,
                use_lab_color_space,
            };
            let mask = detect_vegetation(&image, &options);
            assert!(
                mask.get(50, 50),
                "square missed with normalize={normalize_illumination} lab={use_lab_color_space}"
            );
            assert!(
                !mask.get(10, 10),
                "background hit with normalize={normalize_illumination} lab={use_lab_color_space}"
            );
        }
    }
}

#[test]
fn test_uniform_rasters_need_no_special_casing() {
    let black = RgbImage::from_pixel(16, 16, Rgb([0, 0, 0]));
    let mask = detect_vegetation(&black, &SegmentationOptions::default());
    assert_eq!(mask.count(), 0);

    let green = RgbImage::from_pixel(16, 16, Rgb([0, 255, 0]));
    let mask = detect_vegetation(&green, &SegmentationOptions::default());
    assert_eq!(mask.count(), 16 * 16);
}

#[test]
fn test_non_green_hues_are_rejected() {
    let image = RgbImage::from_fn(12, 1, |x, _| match x % 3 {
        0 => Rgb([255, 0, 0]),
        1 => Rgb([0, 0, 255]),
        _ => Rgb([200, 200, 0]),
    });

    let options = SegmentationOptions {
        normalize_illumination: false,
        use_lab_color_space: false,
    };
    let mask = detect_vegetation(&image, &options);
    assert_eq!(mask.count(), 0);
}
