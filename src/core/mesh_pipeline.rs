use wgpu::{BindGroupLayout, Device, RenderPipeline, TextureFormat, TextureView};

use crate::error::{Result, ViewerError};
use crate::geometry::Vertex;

pub const MESH_SHADER: &str = include_str!("../mesh.wgsl");
pub const DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;

/// Projection and model-view for a single draw, bound at a dynamic offset
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniforms {
    pub projection: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
}

impl DrawUniforms {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;
}

/// Compiled mesh shader plus the pipeline state around it
pub struct MeshPipeline {
    pipeline: RenderPipeline,
    uniform_layout: BindGroupLayout,
}

impl MeshPipeline {
    pub fn new(device: &Device, color_format: TextureFormat) -> Result<Self> {
        Self::with_source(device, color_format, MESH_SHADER)
    }

    /// Build from WGSL source.
    ///
    /// Validation errors are captured in an error scope and returned as
    /// `ViewerError::ShaderCompile` with the compiler's message.
    pub fn with_source(device: &Device, color_format: TextureFormat, source: &str) -> Result<Self> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mesh Shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Draw Uniforms Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(DrawUniforms::SIZE),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Pipeline Layout"),
            bind_group_layouts: &[&uniform_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mesh Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            // Face windings in the tables are mixed, so nothing is culled
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(ViewerError::ShaderCompile(error.to_string()));
        }

        log::debug!("mesh pipeline ready ({:?})", color_format);
        Ok(Self {
            pipeline,
            uniform_layout,
        })
    }

    pub fn pipeline(&self) -> &RenderPipeline {
        &self.pipeline
    }

    pub fn uniform_layout(&self) -> &BindGroupLayout {
        &self.uniform_layout
    }

    pub fn create_depth_view(device: &Device, width: u32, height: u32) -> TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_uniforms_layout() {
        // Two column-major mat4x4<f32>
        assert_eq!(DrawUniforms::SIZE, 128);
    }

    #[test]
    fn test_shader_declares_pipeline_interface() {
        for name in [
            "vs_main",
            "fs_main",
            "vertex_pos",
            "vertex_color",
            "projection_matrix",
            "model_view_matrix",
        ] {
            assert!(MESH_SHADER.contains(name), "shader is missing {}", name);
        }
    }
    /// Headless device; `None` on machines without any adapter
    fn headless_device() -> Option<Device> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .ok()?;
        let (device, _queue) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default())).ok()?;
        Some(device)
    }

    #[test]
    fn test_broken_wgsl_is_shader_compile_error() {
        let Some(device) = headless_device() else {
            eprintln!("no GPU adapter, skipping");
            return;
        };

        let broken = MESH_SHADER.replace("fn vs_main", "fn vs_main(");
        let result = MeshPipeline::with_source(&device, TextureFormat::Bgra8UnormSrgb, &broken);

        match result {
            Err(ViewerError::ShaderCompile(message)) => assert!(!message.is_empty()),
            Err(other) => panic!("expected a shader error, got {}", other),
            Ok(_) => panic!("broken shader was accepted"),
        }
    }

    #[test]
    fn test_mesh_shader_builds_pipeline() {
        let Some(device) = headless_device() else {
            eprintln!("no GPU adapter, skipping");
            return;
        };

        let pipeline = MeshPipeline::new(&device, TextureFormat::Bgra8UnormSrgb);
        assert!(pipeline.is_ok(), "{:?}", pipeline.err().map(|e| e.to_string()));
    }
}
