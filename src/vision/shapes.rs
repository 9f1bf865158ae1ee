//! Shape extraction: repairs broken wicks with a vertical closing, then boxes
//! every external contour of the mask.

use image::imageops::replace;
use image::{GrayImage, Luma};
use imageproc::contours::{BorderType, find_contours};
use imageproc::morphology::{Mask, grayscale_dilate, grayscale_erode};

use crate::config::KernelShape;
use crate::domain::BoundingBox;

/// Builds the structuring element. The anchor sits at the kernel's centre,
/// so a 1x5 kernel reaches two rows up and two rows down.
fn structuring_element(kernel: &KernelShape) -> Mask {
    let shape = GrayImage::from_pixel(kernel.width, kernel.height, Luma([255]));
    // Dimensions are capped at 255 by VisionConfig::validate
    let center_x = (kernel.width / 2).min(u8::MAX as u32) as u8;
    let center_y = (kernel.height / 2).min(u8::MAX as u32) as u8;
    Mask::from_image(&shape, center_x, center_y)
}

/// Dilate-then-erode with the configured kernel.
pub fn close_vertical_gaps(mask: &GrayImage, kernel: &KernelShape) -> GrayImage {
    let element = structuring_element(kernel);
    let dilated = grayscale_dilate(mask, &element);
    grayscale_erode(&dilated, &element)
}

/// Copy of `mask` inside a 1px background frame. The border follower only
/// starts an outer contour after a background pixel, so regions touching
/// column 0 need the frame to be found at all.
fn with_background_frame(mask: &GrayImage) -> GrayImage {
    let (width, height) = mask.dimensions();
    let mut framed = GrayImage::new(width + 2, height + 2);
    replace(&mut framed, mask, 1, 1);
    framed
}

/// Bounding boxes of the outermost contours only; holes and anything nested
/// inside them are skipped. Order follows the contour scan and carries no meaning.
pub fn external_boxes(mask: &GrayImage) -> Vec<BoundingBox> {
    find_contours::<i32>(&with_background_frame(mask))
        .into_iter()
        .filter(|contour| contour.border_type == BorderType::Outer && contour.parent.is_none())
        .filter_map(|contour| {
            // Undo the frame offset
            BoundingBox::enclosing(
                contour
                    .points
                    .iter()
                    .map(|p| ((p.x - 1).max(0) as u32, (p.y - 1).max(0) as u32))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// Closing followed by contour boxing, for one mask.
pub fn extract_boxes(mask: &GrayImage, kernel: &KernelShape) -> Vec<BoundingBox> {
    let closed = close_vertical_gaps(mask, kernel);
    external_boxes(&closed)
}
