// Host-side tests for the camera and the generated scene geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}

use camera::*;
use constants::*;
use geometry::*;
use glam::{Vec3, Vec4};

fn default_camera(aspect: f32) -> PerspectiveCamera {
    PerspectiveCamera::new(
        CAMERA_FOV_Y_DEG,
        aspect,
        CAMERA_NEAR,
        CAMERA_FAR,
        CAMERA_POSITION,
    )
}

fn project(cam: &PerspectiveCamera, p: Vec3) -> Vec3 {
    let clip = cam.view_projection() * Vec4::new(p.x, p.y, p.z, 1.0);
    clip.truncate() / clip.w
}

#[test]
fn point_ahead_of_camera_projects_to_center() {
    let cam = default_camera(16.0 / 9.0);
    let ndc = project(&cam, CAMERA_POSITION + Vec3::new(0.0, 0.0, -5.0));
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn set_aspect_updates_projection() {
    let mut cam = default_camera(1.0);
    let before = cam.projection();
    cam.set_aspect(2.0);
    assert_eq!(cam.aspect, 2.0);
    assert_ne!(before, cam.projection());
    // Wider aspect squeezes x in clip space.
    assert!((before.x_axis.x / cam.projection().x_axis.x - 2.0).abs() < 1e-5);
}

#[test]
fn invalid_aspect_is_ignored() {
    let mut cam = default_camera(1.5);
    let before = cam.projection();
    cam.set_aspect(0.0);
    cam.set_aspect(f32::NAN);
    assert_eq!(cam.aspect, 1.5);
    assert_eq!(before, cam.projection());
}

#[test]
fn sphere_has_expected_topology() {
    let mesh = uv_sphere(SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS);
    let ws = SPHERE_WIDTH_SEGMENTS as usize;
    let hs = SPHERE_HEIGHT_SEGMENTS as usize;
    assert_eq!(mesh.vertices.len(), (ws + 1) * (hs + 1));
    assert_eq!(mesh.indices.len(), ws * (hs - 1) * 2 * 3);
    for v in &mesh.vertices {
        let r = Vec3::from_array(v.position).length();
        assert!((r - SPHERE_RADIUS).abs() < 1e-5);
        assert!((0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1]));
    }
    let max = *mesh.indices.iter().max().unwrap() as usize;
    assert!(max < mesh.vertices.len());
}

#[test]
fn quad_is_centered_with_requested_size() {
    let c = Vec3::new(0.0, LABEL_Y, 0.0);
    let q = centered_quad(c, 2.0, 0.5);
    assert_eq!(q.vertices.len(), 4);
    assert_eq!(q.indices, vec![0, 1, 2, 0, 2, 3]);
    let sum = q
        .vertices
        .iter()
        .fold(Vec3::ZERO, |acc, v| acc + Vec3::from_array(v.position));
    assert!((sum / 4.0 - c).length() < 1e-6);
    assert_eq!(q.vertices[0].uv, [0.0, 0.0]);
    assert!(q.vertices[0].position[1] > q.vertices[1].position[1]);
}

#[test]
fn axes_and_grid_line_counts() {
    let axes = axes_lines(AXES_SIZE, AXIS_COLORS);
    assert_eq!(axes.len(), 6);
    assert_eq!(axes[1].position, [AXES_SIZE, 0.0, 0.0]);
    assert_eq!(axes[5].color, AXIS_COLORS[2]);

    let grid = grid_lines(GRID_SIZE, GRID_DIVISIONS, GRID_CENTER_COLOR, GRID_LINE_COLOR);
    assert_eq!(grid.len(), (GRID_DIVISIONS as usize + 1) * 4);
    let half = GRID_SIZE / 2.0;
    assert!(grid
        .iter()
        .all(|v| v.position[1] == 0.0 && v.position[0].abs() <= half && v.position[2].abs() <= half));
    let centered = grid.iter().filter(|v| v.color == GRID_CENTER_COLOR).count();
    assert_eq!(centered, 4);
}
