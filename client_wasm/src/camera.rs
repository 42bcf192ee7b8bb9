//! Camera for Pong game
//!
//! 2D orthographic camera in field pixels, y pointing down

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Map `(0, 0)..(width, height)` onto the canvas, origin top-left
    pub fn orthographic(width: f32, height: f32) -> Self {
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self {
            view: Mat4::IDENTITY,
            projection,
        }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn project(camera: &Camera, x: f32, y: f32) -> Vec3 {
        (camera.projection * camera.view).project_point3(Vec3::new(x, y, 0.0))
    }

    #[test]
    fn test_corners_map_to_clip_space() {
        let camera = Camera::orthographic(640.0, 480.0);
        let top_left = project(&camera, 0.0, 0.0);
        let bottom_right = project(&camera, 640.0, 480.0);
        assert!((top_left.x - -1.0).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y - -1.0).abs() < 1e-6);
    }

    #[test]
    fn test_center_maps_to_origin() {
        let camera = Camera::orthographic(1280.0, 960.0);
        let center = project(&camera, 640.0, 480.0);
        assert!(center.x.abs() < 1e-6 && center.y.abs() < 1e-6);
        assert!((0.0..=1.0).contains(&center.z));
    }

    #[test]
    fn test_uniform_size() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 256);
    }
}
