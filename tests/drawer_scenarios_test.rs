//! End-to-end drawing scenarios.
//!
//! Each test drives the public [`Drawer`] API and inspects the resulting
//! pixels through world→pixel transforms.
//!
//! Run: cargo test --test drawer_scenarios_test

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use std::f64::consts::PI;
use std::path::Path;
use trueno_draw2d::prelude::*;

fn painted(image: &Framebuffer, x: u32, y: u32) -> Rgba {
    image.get_pixel(x, y).expect("pixel should be inside the image")
}

/// Line, half arc, rectangle and circle at scale 20 without margin.
fn draw_reference_scene(drawer: &mut Drawer) {
    drawer.set_draw_color(Rgba::BLACK);
    drawer.draw_line((0.0, 0.0), (10.0, 0.0), 1.0).unwrap();
    drawer.set_draw_color(Rgba::RED);
    drawer.draw_arc((5.0, 5.0), 5.0, 1.0, 0.0, PI).unwrap();
    drawer.set_draw_color(Rgba::GREEN);
    drawer.fill_rect((3.0, 3.0), 4.0, 4.0).unwrap();
    drawer.set_draw_color(Rgba::BLUE);
    drawer.fill_circle((5.0, 14.0), 2.0).unwrap();
}

fn scene_config() -> CanvasConfig {
    CanvasConfig::default().with_scale(20.0).with_margin(0.0)
}

// ============================================================================
// Reference scene
// ============================================================================

#[test]
fn scene_final_canvas_size() {
    let mut drawer = Drawer::with_config(scene_config()).unwrap();
    draw_reference_scene(&mut drawer);

    assert_eq!(drawer.image().width(), 220);
    assert_eq!(drawer.image().height(), 330);
    assert_eq!(
        drawer.canvas().size_box(),
        Some(RectD::minmax_coords(-0.5, -0.5, 10.5, 16.0))
    );
}

#[test]
fn scene_primitive_pixels() {
    let mut drawer = Drawer::with_config(scene_config()).unwrap();
    draw_reference_scene(&mut drawer);
    let image = drawer.image();

    // line: pixels (10, 320) to (210, 320), distance below 10
    assert_eq!(painted(image, 110, 320), Rgba::BLACK);
    assert_eq!(painted(image, 110, 311), Rgba::BLACK);
    assert_eq!(painted(image, 110, 329), Rgba::BLACK);
    assert_eq!(painted(image, 210, 320), Rgba::BLACK);
    assert_eq!(painted(image, 110, 310), Rgba::TRANSPARENT);
    assert_eq!(painted(image, 211, 320), Rgba::TRANSPARENT);

    // arc: center (110, 220), radii 90..=110, upper half only
    assert_eq!(painted(image, 110, 120), Rgba::RED);
    assert_eq!(painted(image, 10, 220), Rgba::RED);
    assert_eq!(painted(image, 210, 220), Rgba::RED);
    assert_eq!(painted(image, 110, 150), Rgba::TRANSPARENT);
    assert_eq!(painted(image, 30, 280), Rgba::TRANSPARENT);

    // rectangle: x 70..150, y 180..260
    assert_eq!(painted(image, 110, 220), Rgba::GREEN);
    assert_eq!(painted(image, 70, 180), Rgba::GREEN);
    assert_eq!(painted(image, 149, 259), Rgba::GREEN);
    assert_eq!(painted(image, 150, 220), Rgba::TRANSPARENT);
    assert_eq!(painted(image, 110, 260), Rgba::TRANSPARENT);

    // circle: center (110, 40), open disc of radius 40
    assert_eq!(painted(image, 110, 40), Rgba::BLUE);
    assert_eq!(painted(image, 110, 1), Rgba::BLUE);
    assert_eq!(painted(image, 149, 40), Rgba::BLUE);
    assert_eq!(painted(image, 110, 0), Rgba::TRANSPARENT);
    assert_eq!(painted(image, 150, 40), Rgba::TRANSPARENT);
}

#[test]
fn scene_growth_matches_presized_canvas() {
    let mut grown = Drawer::with_config(scene_config()).unwrap();
    draw_reference_scene(&mut grown);

    let final_box = RectD::minmax_coords(-0.5, -0.5, 10.5, 16.0);
    let mut presized = Drawer::with_box(&final_box, scene_config()).unwrap();
    draw_reference_scene(&mut presized);

    assert_eq!(grown.image(), presized.image());
}

#[test]
fn scene_matches_stored_reference() {
    let reference = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/reference_scene.png");
    let dir = tempfile::tempdir().unwrap();
    let diff = dir.path().join("scene_diff.png");

    let mut drawer = Drawer::with_config(scene_config()).unwrap();
    draw_reference_scene(&mut drawer);
    assert!(matches_file(drawer.image(), &reference, &diff).unwrap());
    assert!(diff.exists());

    drawer.set_draw_color(Rgba::ORANGE);
    drawer.fill_circle((9.0, 14.0), 0.5).unwrap();
    assert!(!matches_file(drawer.image(), &reference, &diff).unwrap());
}

// ============================================================================
// Thin lines
// ============================================================================

#[test]
fn thin_line_paints_one_pixel_row() {
    let mut drawer =
        Drawer::with_config(CanvasConfig::default().with_scale(100.0).with_margin(0.5)).unwrap();
    drawer.draw_line((0.0, 0.0), (1.0, 0.0), 0.001).unwrap();
    let image = drawer.image();

    assert_eq!(image.width(), 200);
    assert_eq!(image.height(), 100);

    let column: Vec<u32> = (0..image.height())
        .filter(|&y| painted(image, 100, y) == Rgba::BLACK)
        .collect();
    assert_eq!(column, vec![50]);

    let row = (0..image.width())
        .filter(|&x| painted(image, x, 50) == Rgba::BLACK)
        .count();
    assert_eq!(row, 101);
}

// ============================================================================
// Canvas growth
// ============================================================================

#[test]
fn growth_preserves_previous_shapes() {
    let mut drawer = Drawer::with_config(
        CanvasConfig::default()
            .with_scale(10.0)
            .with_background(Rgba::WHITE),
    )
    .unwrap();
    drawer.set_draw_color(Rgba::RED);
    drawer.fill_circle((0.0, 0.0), 1.0).unwrap();
    let before = drawer.image().clone();
    let origin_before = drawer.canvas().transform_coords(-1.0, 1.0);

    drawer.set_draw_color(Rgba::BLUE);
    drawer.draw_ring((-8.0, 6.0), 2.0, 0.5).unwrap();
    let after = drawer.image();
    let origin_after = drawer.canvas().transform_coords(-1.0, 1.0);
    assert!(after.width() > before.width());
    assert!(after.height() > before.height());

    let dx = (origin_after.x - origin_before.x) as u32;
    let dy = (origin_after.y - origin_before.y) as u32;
    for y in 0..before.height() {
        for x in 0..before.width() {
            assert_eq!(before.get_pixel(x, y), after.get_pixel(x + dx, y + dy));
        }
    }

    // newly exposed area takes the background
    assert_eq!(painted(after, 0, after.height() - 1), Rgba::WHITE);
}

#[test]
fn coordinate_round_trip() {
    let mut drawer = Drawer::new(25.0).unwrap();
    drawer.set_draw_color(Rgba::GREEN);
    let points = [(0.0, 0.0), (3.2, -1.7), (-4.5, 2.25)];
    for point in points {
        drawer.fill_circle(point, 0.3).unwrap();
    }
    for (x, y) in points {
        let pixel = drawer.canvas().transform_coords(x, y);
        assert_eq!(
            painted(drawer.image(), pixel.x as u32, pixel.y as u32),
            Rgba::GREEN
        );
    }
}

// ============================================================================
// Difference images
// ============================================================================

#[test]
fn difference_is_order_independent() {
    let mut left = Drawer::new(10.0).unwrap();
    left.draw_line((0.0, 0.0), (5.0, 5.0), 0.5).unwrap();
    let mut right = Drawer::new(10.0).unwrap();
    right.set_draw_color(Rgba::RED);
    right.draw_ring((0.0, 0.0), 3.0, 0.4).unwrap();

    let ab = difference(left.image(), right.image()).unwrap();
    let ba = difference(right.image(), left.image()).unwrap();
    assert_eq!(ab, ba);
}

#[test]
fn difference_of_identical_scene_is_black() {
    let mut drawer = Drawer::with_config(scene_config()).unwrap();
    draw_reference_scene(&mut drawer);
    let image = drawer.take_image();

    let stats = diff_stats(&image, &image.clone()).unwrap();
    assert!(stats.is_identical());
    assert_eq!(stats.max_delta, 0.0);
}

#[test]
fn difference_of_empty_images_is_placeholder() {
    let empty = Drawer::new(10.0).unwrap();
    let diff = difference(empty.image(), empty.image()).unwrap();
    assert_eq!((diff.width(), diff.height()), (2, 1));
}

#[test]
fn difference_mode_drawer_blends_rectangles() {
    let mut drawer = Drawer::with_box(
        &RectD::minmax_coords(0.0, 0.0, 4.0, 4.0),
        CanvasConfig::default()
            .with_margin(0.0)
            .with_background(Rgba::WHITE),
    )
    .unwrap();
    drawer.set_composition_mode(CompositionMode::Difference);
    drawer.fill_rect((0.0, 0.0), 2.0, 2.0).unwrap();
    drawer.set_draw_color(Rgba::WHITE);
    drawer.fill_rect((1.0, 1.0), 2.0, 2.0).unwrap();

    // black over white stays white, then white cancels it
    let image = drawer.image();
    assert_eq!(painted(image, 5, 35), Rgba::WHITE);
    assert_eq!(painted(image, 15, 25), Rgba::new(0, 0, 0, 255));
    assert_eq!(painted(image, 25, 15), Rgba::new(0, 0, 0, 255));
    assert!(drawer.draw_arc((1.0, 1.0), 1.0, 0.1, 0.0, PI).is_err());
}
