pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::{Camera, CameraUniform};
use crate::frame::{surface_size, Frame};
use crate::mesh::{create_circle, create_rectangle, Mesh};
use resources::GameBuffers;
use wgpu::*;

const CIRCLE_SEGMENTS: u16 = 32;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    // Pipelines
    pub main_pipeline: RenderPipeline,

    // Bind Groups
    pub camera_bind_group: BindGroup,

    // Resources
    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle
}

impl Renderer {
    /// `field_size` is the play field in pixels; the camera maps it onto the canvas
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        field_size: (f32, f32),
    ) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas, field_size).await?;
        let camera = Camera::orthographic(field_size.0, field_size.1);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        // Meshes
        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, CIRCLE_SEGMENTS);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
        })
    }

    /// Resize the rendering surface and refit the camera to the field
    pub fn resize(&mut self, field_size: (f32, f32)) {
        let (width, height) = surface_size(field_size);
        if (width, height) != self.size {
            self.size = (width, height);
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.surface.configure(&self.device, &self.surface_config);
        }

        self.camera = Camera::orthographic(field_size.0, field_size.1);
        let camera_uniform = CameraUniform::from_camera(&self.camera);
        self.queue
            .write_buffer(&self.buffers.camera, 0, bytemuck::bytes_of(&camera_uniform));
    }

    pub fn draw(&self, frame: &Frame) -> Result<(), String> {
        draw::draw_frame(self, frame)
    }
}
