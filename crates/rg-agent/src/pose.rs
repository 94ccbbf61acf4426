//! World-space pose of an agent, ready for a 3D renderer.
//!
//! # Rolling model
//!
//! A moving cube tips over its leading bottom edge.  For a move in direction
//! `d` the pivot is the bottom edge of the source cell facing `d`, and the
//! rotation axis is horizontal and perpendicular to `d`:
//!
//! | Move | Axis       | Pivot (relative to source centre, y = 0) |
//! |------|------------|------------------------------------------|
//! | +x   | (0, 0, -1) | (+s/2, 0, 0)                             |
//! | −x   | (0, 0, +1) | (−s/2, 0, 0)                             |
//! | +z   | (+1, 0, 0) | (0, 0, +s/2)                             |
//! | −z   | (−1, 0, 0) | (0, 0, −s/2)                             |
//!
//! At progress `p` the cube is rotated by `p · π/2` about that axis through
//! the pivot.  At `p = 1` the centre has travelled one cube edge
//! (`cube_size`, slightly under one cell); the pose snaps onto the target cell
//! as soon as the move completes and the phase changes.
//!
//! Between animations the rotation is reported as identity: a quarter-turned
//! cube is indistinguishable from an unrotated one.

use std::f32::consts::{FRAC_PI_2, PI};

use rg_core::{Cell, Direction, MotionConfig};

use crate::Phase;

/// Position plus orientation (unit quaternion `[x, y, z, w]`).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: [f32; 3],
    pub rotation: [f32; 4],
}

impl Pose {
    pub const IDENTITY_ROTATION: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    /// A cube resting on `cell`.
    pub fn resting(cell: Cell, motion: &MotionConfig) -> Self {
        Pose {
            position: world_center(cell, motion),
            rotation: Self::IDENTITY_ROTATION,
        }
    }

    /// Pose for an agent standing on `cell` in `phase`.
    pub fn for_phase(cell: Cell, phase: &Phase, motion: &MotionConfig) -> Self {
        match *phase {
            Phase::Settled | Phase::Ready => Pose::resting(cell, motion),

            Phase::Moving(m) => {
                let Some(dir) = m.from.direction_to(m.to) else {
                    return Pose::resting(cell, motion);
                };
                let p = m.step as f32 / motion.move_steps.max(1) as f32;
                rolling(m.from, dir, p, motion)
            }

            Phase::Landing { step } => {
                let p = step as f32 / motion.landing_steps.max(1) as f32;
                let mut pose = Pose::resting(cell, motion);
                pose.position[1] += landing_height(p, motion.bounce_height);
                pose
            }
        }
    }
}

/// Extra height of the landing bounce at progress `p`; peaks at `p = 0.5`.
#[inline]
pub fn landing_height(p: f32, bounce_height: f32) -> f32 {
    bounce_height * (p.clamp(0.0, 1.0) * PI).sin()
}

/// World-space centre of a cube resting on `cell`.
#[inline]
pub fn world_center(cell: Cell, motion: &MotionConfig) -> [f32; 3] {
    [
        cell.x as f32 + motion.world_offset[0],
        motion.cube_size / 2.0,
        cell.z as f32 + motion.world_offset[1],
    ]
}

fn axis_and_pivot(from: Cell, dir: Direction, motion: &MotionConfig) -> ([f32; 3], [f32; 3]) {
    let [cx, _, cz] = world_center(from, motion);
    let h = motion.cube_size / 2.0;
    match dir {
        Direction::PosX => ([0.0, 0.0, -1.0], [cx + h, 0.0, cz]),
        Direction::NegX => ([0.0, 0.0, 1.0], [cx - h, 0.0, cz]),
        Direction::PosZ => ([1.0, 0.0, 0.0], [cx, 0.0, cz + h]),
        Direction::NegZ => ([-1.0, 0.0, 0.0], [cx, 0.0, cz - h]),
    }
}

fn rolling(from: Cell, dir: Direction, p: f32, motion: &MotionConfig) -> Pose {
    let (axis, pivot) = axis_and_pivot(from, dir, motion);
    let angle = p.clamp(0.0, 1.0) * FRAC_PI_2;

    let center = world_center(from, motion);
    let arm = sub(center, pivot);
    let rotated = rotate(arm, axis, angle);

    let (s, c) = (angle / 2.0).sin_cos();
    Pose {
        position: add(pivot, rotated),
        rotation: [axis[0] * s, axis[1] * s, axis[2] * s, c],
    }
}

/// Rodrigues' rotation of `v` about unit `axis` by `angle` radians.
fn rotate(v: [f32; 3], axis: [f32; 3], angle: f32) -> [f32; 3] {
    let (sin, cos) = angle.sin_cos();
    let k_cross_v = cross(axis, v);
    let k_dot_v = dot(axis, v);
    [
        v[0] * cos + k_cross_v[0] * sin + axis[0] * k_dot_v * (1.0 - cos),
        v[1] * cos + k_cross_v[1] * sin + axis[1] * k_dot_v * (1.0 - cos),
        v[2] * cos + k_cross_v[2] * sin + axis[2] * k_dot_v * (1.0 - cos),
    ]
}

#[inline]
fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn add(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
