use crate::camera::{Camera, CameraUniform};
use crate::frame::InstanceData;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Rect instances per frame: center-line dashes plus two paddles, with headroom
pub const MAX_RECT_INSTANCES: usize = 64;
pub const MAX_CIRCLE_INSTANCES: usize = 4;

pub struct GameBuffers {
    pub camera: Buffer,
    pub rects: Buffer,
    pub circles: Buffer,
}

fn instance_buffer(device: &Device, label: &str, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some(label),
        size: (std::mem::size_of::<InstanceData>() * capacity) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        rects: instance_buffer(device, "Rect Instance Buffer", MAX_RECT_INSTANCES),
        circles: instance_buffer(device, "Circle Instance Buffer", MAX_CIRCLE_INSTANCES),
    }
}
