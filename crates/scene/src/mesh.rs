//! Static triangle-list geometry.

use tui_spin_math::Point3;

/// One face of a mesh. Vertex order defines the winding; this renderer draws
/// wireframes only and never culls on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p: [Point3; 3],
}

impl Triangle {
    pub const fn new(p0: Point3, p1: Point3, p2: Point3) -> Self {
        Self { p: [p0, p1, p2] }
    }
}

/// An ordered triangle list. Built once at scene creation, never mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub tris: Vec<Triangle>,
}

/// Number of triangles in the unit cube (6 faces, 2 per face).
pub const CUBE_TRIANGLES: usize = 12;

/// Build the unit cube: six faces, each split into two triangles sharing a
/// diagonal.
pub fn unit_cube() -> Mesh {
    const fn v(x: f32, y: f32, z: f32) -> Point3 {
        Point3::new(x, y, z)
    }

    let tris = vec![
        // SOUTH
        Triangle::new(v(0.0, 0.0, 0.0), v(0.0, 1.0, 0.0), v(1.0, 1.0, 0.0)),
        Triangle::new(v(0.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(1.0, 0.0, 0.0)),
        // EAST
        Triangle::new(v(1.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(1.0, 1.0, 1.0)),
        Triangle::new(v(1.0, 0.0, 0.0), v(1.0, 1.0, 1.0), v(1.0, 0.0, 1.0)),
        // NORTH
        Triangle::new(v(1.0, 0.0, 1.0), v(1.0, 1.0, 1.0), v(0.0, 1.0, 1.0)),
        Triangle::new(v(1.0, 0.0, 1.0), v(0.0, 1.0, 1.0), v(0.0, 0.0, 1.0)),
        // WEST
        Triangle::new(v(0.0, 0.0, 1.0), v(0.0, 1.0, 1.0), v(0.0, 1.0, 0.0)),
        Triangle::new(v(0.0, 0.0, 1.0), v(0.0, 1.0, 0.0), v(0.0, 0.0, 0.0)),
        // TOP
        Triangle::new(v(0.0, 1.0, 0.0), v(0.0, 1.0, 1.0), v(1.0, 1.0, 1.0)),
        Triangle::new(v(0.0, 1.0, 0.0), v(1.0, 1.0, 1.0), v(1.0, 1.0, 0.0)),
        // BOTTOM
        Triangle::new(v(1.0, 0.0, 1.0), v(0.0, 0.0, 1.0), v(0.0, 0.0, 0.0)),
        Triangle::new(v(1.0, 0.0, 1.0), v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0)),
    ];

    Mesh { tris }
}
