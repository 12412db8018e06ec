use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

/// UV sphere centered at the origin.
///
/// Rows run pole to pole; the seam column is duplicated so `u` wraps cleanly,
/// and the degenerate triangles touching each pole are skipped.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let (sin_t, cos_t) = (v * PI).sin_cos();
            let (sin_p, cos_p) = (u * TAU).sin_cos();
            vertices.push(MeshVertex {
                position: [-radius * cos_p * sin_t, radius * cos_t, radius * sin_p * sin_t],
                uv: [u, v],
            });
        }
    }

    let row = ws + 1;
    let mut indices = Vec::with_capacity((ws * (hs - 1) * 6) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = (iy * row + ix + 1) as u16;
            let b = (iy * row + ix) as u16;
            let c = ((iy + 1) * row + ix) as u16;
            let d = ((iy + 1) * row + ix + 1) as u16;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    MeshData { vertices, indices }
}

/// Axis-aligned quad in the XY plane centered on `center`; uv (0,0) is the
/// top-left corner so row-major image data maps upright.
pub fn centered_quad(center: Vec3, width: f32, height: f32) -> MeshData {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let c = center;
    let vertices = vec![
        MeshVertex {
            position: [c.x - hw, c.y + hh, c.z],
            uv: [0.0, 0.0],
        },
        MeshVertex {
            position: [c.x - hw, c.y - hh, c.z],
            uv: [0.0, 1.0],
        },
        MeshVertex {
            position: [c.x + hw, c.y - hh, c.z],
            uv: [1.0, 1.0],
        },
        MeshVertex {
            position: [c.x + hw, c.y + hh, c.z],
            uv: [1.0, 0.0],
        },
    ];
    MeshData {
        vertices,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Three segments from the origin along +X, +Y, +Z (line list).
pub fn axes_lines(size: f32, colors: [[f32; 3]; 3]) -> Vec<LineVertex> {
    let axes = [Vec3::X, Vec3::Y, Vec3::Z];
    axes.iter()
        .zip(colors)
        .flat_map(|(axis, color)| {
            let end = *axis * size;
            [
                LineVertex {
                    position: [0.0; 3],
                    color,
                },
                LineVertex {
                    position: end.to_array(),
                    color,
                },
            ]
        })
        .collect()
}

/// Square grid on the XZ plane (line list). The middle pair of lines, present
/// when `divisions` is even, uses `center_color`.
pub fn grid_lines(
    size: f32,
    divisions: u32,
    center_color: [f32; 3],
    line_color: [f32; 3],
) -> Vec<LineVertex> {
    let divisions = divisions.max(1);
    let step = size / divisions as f32;
    let half = size / 2.0;
    let center = divisions / 2;
    let mut out = Vec::with_capacity(((divisions + 1) * 4) as usize);
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let color = if divisions % 2 == 0 && i == center {
            center_color
        } else {
            line_color
        };
        out.push(LineVertex {
            position: [-half, 0.0, k],
            color,
        });
        out.push(LineVertex {
            position: [half, 0.0, k],
            color,
        });
        out.push(LineVertex {
            position: [k, 0.0, -half],
            color,
        });
        out.push(LineVertex {
            position: [k, 0.0, half],
            color,
        });
    }
    out
}
