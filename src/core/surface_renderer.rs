use std::collections::HashMap;
use std::sync::Arc;

use wgpu::util::DeviceExt;
use wgpu::{BindGroup, Buffer, Device, TextureView};
use winit::window::Window;

use super::draw::{ContextProvider, DrawCall, DrawContext};
use super::gpu_context::GpuContext;
use super::mesh_pipeline::{DrawUniforms, MeshPipeline};
use super::window::WindowDimensions;
use crate::error::{RenderError, Result};
use crate::geometry::{GeometryDescriptor, ShapeKind};

const INITIAL_DRAW_CAPACITY: u64 = 16;

/// Vertex and index buffers for one shape, uploaded on first use
struct GpuMesh {
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(device: &Device, geometry: &GeometryDescriptor) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertices", geometry.kind)),
            contents: bytemuck::cast_slice(&geometry.interleaved()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Indices", geometry.kind)),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!("uploaded {} ({} indices)", geometry.kind, geometry.indices.len());

        Self {
            vertex_buffer,
            index_buffer,
            index_count: geometry.indices.len() as u32,
        }
    }
}

/// One uniform slot per draw call, addressed with dynamic offsets
struct UniformSlots {
    buffer: Buffer,
    bind_group: BindGroup,
    stride: u64,
    capacity: u64,
}

impl UniformSlots {
    fn new(device: &Device, pipeline: &MeshPipeline, capacity: u64) -> Self {
        let alignment = u64::from(device.limits().min_uniform_buffer_offset_alignment);
        let stride = DrawUniforms::SIZE.div_ceil(alignment) * alignment;

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Draw Uniforms"),
            size: stride * capacity,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Draw Uniforms Bind Group"),
            layout: pipeline.uniform_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(DrawUniforms::SIZE),
                }),
            }],
        });

        Self {
            buffer,
            bind_group,
            stride,
            capacity,
        }
    }

    fn offset(&self, slot: usize) -> wgpu::DynamicOffset {
        (slot as u64 * self.stride) as wgpu::DynamicOffset
    }
}

struct PendingDraw {
    kind: ShapeKind,
    uniforms: DrawUniforms,
}

/// wgpu-backed `DrawContext` presenting to a window surface
///
/// Draws are queued between `begin_frame` and `end_frame`, then encoded into a
/// single render pass with depth testing.
pub struct SurfaceRenderer {
    gpu: GpuContext,
    pipeline: MeshPipeline,
    depth_view: TextureView,
    meshes: HashMap<ShapeKind, GpuMesh>,
    slots: UniformSlots,
    pending: Vec<PendingDraw>,
    clear_color: wgpu::Color,
}

impl SurfaceRenderer {
    pub fn new(gpu: GpuContext, pipeline: MeshPipeline) -> Self {
        let dims = gpu.dimensions();
        let depth_view = MeshPipeline::create_depth_view(gpu.device(), dims.width, dims.height);
        let slots = UniformSlots::new(gpu.device(), &pipeline, INITIAL_DRAW_CAPACITY);

        Self {
            gpu,
            pipeline,
            depth_view,
            meshes: HashMap::new(),
            slots,
            pending: Vec::new(),
            clear_color: wgpu::Color::BLACK,
        }
    }

    fn ensure_capacity(&mut self, draws: usize) {
        let needed = draws as u64;
        if needed <= self.slots.capacity {
            return;
        }
        let capacity = needed.next_power_of_two();
        log::debug!("growing draw uniform slots to {}", capacity);
        self.slots = UniformSlots::new(self.gpu.device(), &self.pipeline, capacity);
    }

    fn write_uniforms(&self, draws: &[PendingDraw]) {
        let stride = self.slots.stride as usize;
        let mut bytes = vec![0u8; stride * draws.len()];
        for (slot, draw) in draws.iter().enumerate() {
            let start = slot * stride;
            bytes[start..start + DrawUniforms::SIZE as usize]
                .copy_from_slice(bytemuck::bytes_of(&draw.uniforms));
        }
        self.gpu.queue().write_buffer(&self.slots.buffer, 0, &bytes);
    }
}

impl DrawContext for SurfaceRenderer {
    fn begin_frame(&mut self, clear_color: [f32; 4]) {
        let [r, g, b, a] = clear_color.map(f64::from);
        self.clear_color = wgpu::Color { r, g, b, a };
        self.pending.clear();
    }

    fn draw(&mut self, call: DrawCall<'_>) {
        let kind = call.geometry.kind;
        if !self.meshes.contains_key(&kind) {
            let mesh = GpuMesh::upload(self.gpu.device(), call.geometry);
            self.meshes.insert(kind, mesh);
        }

        self.pending.push(PendingDraw {
            kind,
            uniforms: DrawUniforms {
                projection: call.projection.to_cols_array_2d(),
                model_view: call.model.matrix().to_cols_array_2d(),
            },
        });
    }

    fn end_frame(&mut self) -> std::result::Result<(), RenderError> {
        let draws = std::mem::take(&mut self.pending);

        let output = match self.gpu.surface().get_current_texture() {
            Ok(output) => output,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.gpu.reconfigure();
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        self.ensure_capacity(draws.len());
        if !draws.is_empty() {
            self.write_uniforms(&draws);
        }

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Mesh Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Mesh Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(self.pipeline.pipeline());

            for (slot, draw) in draws.iter().enumerate() {
                let Some(mesh) = self.meshes.get(&draw.kind) else {
                    continue;
                };
                render_pass.set_bind_group(0, &self.slots.bind_group, &[self.slots.offset(slot)]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass
                    .set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        self.gpu.queue().submit(Some(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Provides a `SurfaceRenderer` for a winit window
pub struct WindowProvider {
    window: Arc<Window>,
}

impl WindowProvider {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl ContextProvider for WindowProvider {
    type Context = SurfaceRenderer;

    fn dimensions(&self) -> WindowDimensions {
        self.window.inner_size().into()
    }

    fn create_context(&self) -> Result<SurfaceRenderer> {
        let gpu = pollster::block_on(GpuContext::new(Arc::clone(&self.window)))?;
        let pipeline = MeshPipeline::new(gpu.device(), gpu.format())?;
        Ok(SurfaceRenderer::new(gpu, pipeline))
    }
}
