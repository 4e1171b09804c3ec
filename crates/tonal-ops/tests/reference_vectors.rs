//! Pixel-exact outputs for a small 3x3 image.
//!
//! The source is an RGBA8 buffer whose visible rectangle starts at (-1, -1),
//! so every test also checks that the output is re-origined to (0, 0).

use tonal_core::{PackedView, PixelLayout, Rect, RgbaBuffer};
use tonal_ops::*;

#[rustfmt::skip]
const SRC: [u8; 36] = [
    0xcc, 0x00, 0x00, 0x01, 0x00, 0xcc, 0x00, 0x02, 0x00, 0x00, 0xcc, 0x03,
    0x11, 0x22, 0x33, 0xff, 0x33, 0x22, 0x11, 0xff, 0xaa, 0x33, 0xbb, 0xff,
    0x00, 0x00, 0x00, 0xff, 0x33, 0x33, 0x33, 0xff, 0xff, 0xff, 0xff, 0xff,
];

fn view() -> PackedView<'static> {
    PackedView::new(&SRC, PixelLayout::Rgba8, 12, Rect::new(-1, -1, 3, 3)).unwrap()
}

fn check(name: &str, out: OpsResult<RgbaBuffer>, expected: &[u8; 36]) {
    let out = out.unwrap_or_else(|e| panic!("{name}: {e}"));
    assert_eq!(out.dimensions(), (3, 3), "{name}");
    assert_eq!(out.bounds(), Rect::new(0, 0, 3, 3), "{name}");
    assert_eq!(out.data(), &expected[..], "{name}");
}

#[test]
fn test_grayscale() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0x3d, 0x3d, 0x3d, 0x01, 0x78, 0x78, 0x78, 0x02, 0x17, 0x17, 0x17, 0x03,
        0x1f, 0x1f, 0x1f, 0xff, 0x25, 0x25, 0x25, 0xff, 0x66, 0x66, 0x66, 0xff,
        0x00, 0x00, 0x00, 0xff, 0x33, 0x33, 0x33, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];
    check("grayscale", grayscale(&view), &expected);
}

#[test]
fn test_invert() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0x33, 0xff, 0xff, 0x01, 0xff, 0x33, 0xff, 0x02, 0xff, 0xff, 0x33, 0x03,
        0xee, 0xdd, 0xcc, 0xff, 0xcc, 0xdd, 0xee, 0xff, 0x55, 0xcc, 0x44, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xcc, 0xcc, 0xcc, 0xff, 0x00, 0x00, 0x00, 0xff,
    ];
    check("invert", invert(&view), &expected);
}

#[test]
fn test_contrast_plus_10() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0xd5, 0x00, 0x00, 0x01, 0x00, 0xd5, 0x00, 0x02, 0x00, 0x00, 0xd5, 0x03,
        0x05, 0x18, 0x2b, 0xff, 0x2b, 0x18, 0x05, 0xff, 0xaf, 0x2b, 0xc2, 0xff,
        0x00, 0x00, 0x00, 0xff, 0x2b, 0x2b, 0x2b, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];
    check("contrast_plus_10", adjust_contrast(&view, 10.0), &expected);
}

#[test]
fn test_contrast_plus_100() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0xff, 0x00, 0x00, 0x01, 0x00, 0xff, 0x00, 0x02, 0x00, 0x00, 0xff, 0x03,
        0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0xff, 0xff,
        0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];
    check("contrast_plus_100", adjust_contrast(&view, 100.0), &expected);
}

#[test]
fn test_contrast_minus_10() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0xc4, 0x0d, 0x0d, 0x01, 0x0d, 0xc4, 0x0d, 0x02, 0x0d, 0x0d, 0xc4, 0x03,
        0x1c, 0x2b, 0x3b, 0xff, 0x3b, 0x2b, 0x1c, 0xff, 0xa6, 0x3b, 0xb5, 0xff,
        0x0d, 0x0d, 0x0d, 0xff, 0x3b, 0x3b, 0x3b, 0xff, 0xf2, 0xf2, 0xf2, 0xff,
    ];
    check("contrast_minus_10", adjust_contrast(&view, -10.0), &expected);
}

#[test]
fn test_contrast_minus_100() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0x80, 0x80, 0x80, 0x01, 0x80, 0x80, 0x80, 0x02, 0x80, 0x80, 0x80, 0x03,
        0x80, 0x80, 0x80, 0xff, 0x80, 0x80, 0x80, 0xff, 0x80, 0x80, 0x80, 0xff,
        0x80, 0x80, 0x80, 0xff, 0x80, 0x80, 0x80, 0xff, 0x80, 0x80, 0x80, 0xff,
    ];
    check("contrast_minus_100", adjust_contrast(&view, -100.0), &expected);
}

#[test]
fn test_brightness_plus_10() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0xe6, 0x1a, 0x1a, 0x01, 0x1a, 0xe6, 0x1a, 0x02, 0x1a, 0x1a, 0xe6, 0x03,
        0x2b, 0x3c, 0x4d, 0xff, 0x4d, 0x3c, 0x2b, 0xff, 0xc4, 0x4d, 0xd5, 0xff,
        0x1a, 0x1a, 0x1a, 0xff, 0x4d, 0x4d, 0x4d, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];
    check("brightness_plus_10", adjust_brightness(&view, 10.0), &expected);
}

#[test]
fn test_brightness_minus_10() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0xb3, 0x00, 0x00, 0x01, 0x00, 0xb3, 0x00, 0x02, 0x00, 0x00, 0xb3, 0x03,
        0x00, 0x09, 0x1a, 0xff, 0x1a, 0x09, 0x00, 0xff, 0x91, 0x1a, 0xa2, 0xff,
        0x00, 0x00, 0x00, 0xff, 0x1a, 0x1a, 0x1a, 0xff, 0xe6, 0xe6, 0xe6, 0xff,
    ];
    check("brightness_minus_10", adjust_brightness(&view, -10.0), &expected);
}

#[test]
fn test_brightness_plus_100() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0xff, 0xff, 0xff, 0x01, 0xff, 0xff, 0xff, 0x02, 0xff, 0xff, 0xff, 0x03,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];
    check("brightness_plus_100", adjust_brightness(&view, 100.0), &expected);
}

#[test]
fn test_brightness_minus_100() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03,
        0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00, 0xff,
        0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00, 0xff, 0x00, 0x00, 0x00, 0xff,
    ];
    check("brightness_minus_100", adjust_brightness(&view, -100.0), &expected);
}

#[test]
fn test_gamma_0_5() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0xe4, 0x00, 0x00, 0x01, 0x00, 0xe4, 0x00, 0x02, 0x00, 0x00, 0xe4, 0x03,
        0x42, 0x5d, 0x72, 0xff, 0x72, 0x5d, 0x42, 0xff, 0xd0, 0x72, 0xda, 0xff,
        0x00, 0x00, 0x00, 0xff, 0x72, 0x72, 0x72, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];
    check("gamma_0_5", adjust_gamma(&view, 0.5), &expected);
}

#[test]
fn test_gamma_0_75() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0xd8, 0x00, 0x00, 0x01, 0x00, 0xd8, 0x00, 0x02, 0x00, 0x00, 0xd8, 0x03,
        0x21, 0x38, 0x4c, 0xff, 0x4c, 0x38, 0x21, 0xff, 0xbc, 0x4c, 0xca, 0xff,
        0x00, 0x00, 0x00, 0xff, 0x4c, 0x4c, 0x4c, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];
    check("gamma_0_75", adjust_gamma(&view, 0.75), &expected);
}

#[test]
fn test_gamma_1_5() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0xb6, 0x00, 0x00, 0x01, 0x00, 0xb6, 0x00, 0x02, 0x00, 0x00, 0xb6, 0x03,
        0x04, 0x0c, 0x17, 0xff, 0x17, 0x0c, 0x04, 0xff, 0x8b, 0x17, 0xa0, 0xff,
        0x00, 0x00, 0x00, 0xff, 0x17, 0x17, 0x17, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];
    check("gamma_1_5", adjust_gamma(&view, 1.5), &expected);
}

#[test]
fn test_gamma_2() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0xa3, 0x00, 0x00, 0x01, 0x00, 0xa3, 0x00, 0x02, 0x00, 0x00, 0xa3, 0x03,
        0x01, 0x05, 0x0a, 0xff, 0x0a, 0x05, 0x01, 0xff, 0x71, 0x0a, 0x89, 0xff,
        0x00, 0x00, 0x00, 0xff, 0x0a, 0x0a, 0x0a, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];
    check("gamma_2", adjust_gamma(&view, 2.0), &expected);
}

#[test]
fn test_sigmoid_plus_3() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0xd4, 0x00, 0x00, 0x01, 0x00, 0xd4, 0x00, 0x02, 0x00, 0x00, 0xd4, 0x03,
        0x0d, 0x1b, 0x2b, 0xff, 0x2b, 0x1b, 0x0d, 0xff, 0xb1, 0x2b, 0xc3, 0xff,
        0x00, 0x00, 0x00, 0xff, 0x2b, 0x2b, 0x2b, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];
    check("sigmoid_plus_3", adjust_sigmoid(&view, 0.5, 3.0), &expected);
}

#[test]
fn test_sigmoid_minus_3() {
    let view = view();
    #[rustfmt::skip]
    let expected = [
        0xc4, 0x00, 0x00, 0x01, 0x00, 0xc4, 0x00, 0x02, 0x00, 0x00, 0xc4, 0x03,
        0x16, 0x2a, 0x3b, 0xff, 0x3b, 0x2a, 0x16, 0xff, 0xa4, 0x3b, 0xb3, 0xff,
        0x00, 0x00, 0x00, 0xff, 0x3b, 0x3b, 0x3b, 0xff, 0xff, 0xff, 0xff, 0xff,
    ];
    check("sigmoid_minus_3", adjust_sigmoid(&view, 0.5, -3.0), &expected);
}
