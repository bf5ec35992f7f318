//! Scene composition: places primitives at the positions a [`Layout`]
//! already decided. No layout logic lives here.
//!
//! These types avoid platform-specific APIs so any renderer (WebGPU in the
//! browser, a native viewer, a test) can consume them directly.

use crate::constants::{FAUCET_SIZE_IN, LEG_SIZE_IN};
use crate::layout::{ChassisDimensions, Layout};
use crate::options::TopMaterial;
use crate::units::to_scene_units;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Box,
    /// Axis along `y`; `size.x` is the diameter.
    Cylinder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Part {
    Tray,
    BackLip,
    Leg,
    Well,
    Faucet,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub part: Part,
    pub shape: Shape,
    pub center: [f32; 3],
    pub size: [f32; 3],
    pub color: [f32; 4],
}

/// GPU-ready per-instance record.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub center: [f32; 3],
    pub shape: u32, // 0 = box, 1 = cylinder
    pub size: [f32; 3],
    pub _pad: u32,
    pub color: [f32; 4],
}

impl Primitive {
    pub fn instance(&self) -> InstanceData {
        InstanceData {
            center: self.center,
            shape: match self.shape {
                Shape::Box => 0,
                Shape::Cylinder => 1,
            },
            size: self.size,
            _pad: 0,
            color: self.color,
        }
    }
}

// Palette
const BLACK_TOP: [f32; 4] = [0.08, 0.08, 0.09, 1.0];
const STAINLESS_TOP: [f32; 4] = [0.78, 0.79, 0.80, 1.0];
const FRAME: [f32; 4] = [0.55, 0.56, 0.58, 1.0];
const WELL: [f32; 4] = [0.18, 0.16, 0.15, 1.0];
const FAUCET: [f32; 4] = [0.85, 0.72, 0.40, 1.0];

fn top_color(top: TopMaterial) -> [f32; 4] {
    match top {
        TopMaterial::Black => BLACK_TOP,
        TopMaterial::Stainless => STAINLESS_TOP,
    }
}

pub fn compose_scene(layout: &Layout, top: TopMaterial) -> Vec<Primitive> {
    let c = &layout.chassis;
    let tray_top = c.tray_center_y + c.tray_thickness * 0.5;
    let leg_size = to_scene_units(LEG_SIZE_IN, layout.scale);
    let faucet_size = to_scene_units(FAUCET_SIZE_IN, layout.scale);
    let top_color = top_color(top);

    let mut out = Vec::with_capacity(2 + layout.legs.len() + layout.burners.len() * 2);
    out.push(Primitive {
        part: Part::Tray,
        shape: Shape::Box,
        center: [0.0, c.tray_center_y, 0.0],
        size: [c.width, c.tray_thickness, c.depth],
        color: top_color,
    });
    out.push(Primitive {
        part: Part::BackLip,
        shape: Shape::Box,
        center: [
            0.0,
            tray_top + c.lip_height * 0.5,
            -c.depth * 0.5 + c.tray_thickness * 0.5,
        ],
        size: [c.width, c.lip_height, c.tray_thickness],
        color: top_color,
    });
    out.extend(layout.legs.iter().map(|leg| Primitive {
        part: Part::Leg,
        shape: Shape::Box,
        center: [leg.x, c.leg_height * 0.5, leg.z],
        size: [leg_size, c.leg_height, leg_size],
        color: FRAME,
    }));
    out.extend(layout.burners.iter().map(|b| Primitive {
        part: Part::Well,
        shape: Shape::Cylinder,
        center: [b.x, tray_top - c.well_depth * 0.5, b.z],
        size: [b.radius * 2.0, c.well_depth, b.radius * 2.0],
        color: WELL,
    }));
    let faucet_height = (c.faucet_y - tray_top).max(0.0);
    out.extend(layout.faucets.iter().map(|f| Primitive {
        part: Part::Faucet,
        shape: Shape::Cylinder,
        center: [f.x, tray_top + faucet_height * 0.5, c.faucet_z],
        size: [faucet_size, faucet_height, faucet_size],
        color: FAUCET,
    }));
    out
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Three-quarter view from the front that keeps the whole chassis width
    /// on screen with some margin.
    pub fn framing(chassis: &ChassisDimensions, aspect: f32) -> Self {
        let fovy_radians = std::f32::consts::FRAC_PI_4;
        let aspect = if aspect > 0.0 { aspect } else { 1.0 };
        let tan_v = (fovy_radians * 0.5).tan();
        let half_w = chassis.width.max(chassis.depth) * 0.6;
        let half_h = chassis.back_height * 0.6;
        let dist = (half_w / (tan_v * aspect)).max(half_h / tan_v) + chassis.depth * 0.5;
        let dist = dist.max(1e-3);

        let target = Vec3::new(0.0, chassis.tray_center_y * 0.75, 0.0);
        let eye = target + Vec3::new(0.0, 0.6, 1.0).normalize() * dist;
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy_radians,
            znear: dist * 0.01,
            zfar: dist * 10.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}
