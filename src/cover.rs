//! Cover fit: uniform scale plus center crop to exact target dimensions.

use image::DynamicImage;
use image::imageops::FilterType;

/// Scale `img` uniformly so it covers `target_w x target_h`, then center-crop
/// the overflow. The result is exactly the target size and the aspect ratio of
/// the retained content is undistorted.
///
/// # Panics
/// A zero-dimension image or target is a contract violation upstream.
#[must_use]
pub fn cover_fit(img: &DynamicImage, target_w: u32, target_h: u32) -> DynamicImage {
    assert!(
        img.width() > 0 && img.height() > 0 && target_w > 0 && target_h > 0,
        "cover_fit requires positive dimensions"
    );

    let scale = f64::max(
        f64::from(target_w) / f64::from(img.width()),
        f64::from(target_h) / f64::from(img.height()),
    );
    // Roundoff must never undershoot the target, or the crop would run out of
    // pixels on one edge.
    let new_w = ((f64::from(img.width()) * scale).round() as u32).max(target_w);
    let new_h = ((f64::from(img.height()) * scale).round() as u32).max(target_h);

    let resized = img.resize_exact(new_w, new_h, FilterType::Lanczos3);
    let left = (new_w - target_w) / 2;
    let top = (new_h - target_h) / 2;
    resized.crop_imm(left, top, target_w, target_h)
}
