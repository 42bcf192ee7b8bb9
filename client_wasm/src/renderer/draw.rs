use super::resources::{MAX_CIRCLE_INSTANCES, MAX_RECT_INSTANCES};
use super::Renderer;
use crate::frame::{Frame, InstanceData};
use crate::mesh::Mesh;
use wgpu::*;

pub fn draw_frame(renderer: &Renderer, frame: &Frame) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let rect_count = upload(renderer, &renderer.buffers.rects, &frame.rects, MAX_RECT_INSTANCES);
    let circle_count = upload(
        renderer,
        &renderer.buffers.circles,
        &frame.circles,
        MAX_CIRCLE_INSTANCES,
    );

    let [r, g, b, a] = frame.clear_color;
    let clear = Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    };

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(clear),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.main_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

        // Rects (center line, paddles)
        draw_instances(&mut pass, &renderer.meshes.0, &renderer.buffers.rects, rect_count);

        // Circle (Ball)
        draw_instances(&mut pass, &renderer.meshes.1, &renderer.buffers.circles, circle_count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Write up to `capacity` instances and return how many were written
fn upload(renderer: &Renderer, buffer: &Buffer, instances: &[InstanceData], capacity: usize) -> u32 {
    let count = instances.len().min(capacity);
    if count > 0 {
        renderer
            .queue
            .write_buffer(buffer, 0, bytemuck::cast_slice(&instances[..count]));
    }
    count as u32
}

fn draw_instances(pass: &mut RenderPass<'_>, mesh: &Mesh, instances: &Buffer, count: u32) {
    if count == 0 {
        return;
    }
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, instances.slice(..));
    pass.draw_indexed(0..mesh.index_count, 0, 0..count);
}
