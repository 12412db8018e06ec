use super::helpers::{self, PipelineSpec};
use super::targets::DEPTH_FORMAT;
use crate::core::{MeshData, MeshVertex};
use glam::Mat4;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshUniforms {
    pub(crate) mvp: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

/// Pipelines shared by every mesh: opaque (depth written) and blended
/// (depth tested only, for the text label).
pub(crate) struct MeshPipelines {
    pub(crate) opaque: wgpu::RenderPipeline,
    pub(crate) blended: wgpu::RenderPipeline,
    pub(crate) bgl: wgpu::BindGroupLayout,
}

pub(crate) fn create_mesh_pipelines(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> MeshPipelines {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mesh_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::MESH_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("mesh_bgl"),
        entries: &[
            helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ),
            helpers::texture_entry(1),
            helpers::sampler_entry(2),
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("mesh_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let attributes = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];
    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &attributes,
    };
    let opaque = helpers::make_pipeline(
        device,
        &pl,
        PipelineSpec {
            label: "mesh_opaque_pipeline",
            shader: &shader,
            vs_entry: "vs_mesh",
            fs_entry: "fs_mesh",
            buffers: &[vertex_layout.clone()],
            topology: wgpu::PrimitiveTopology::TriangleList,
            color_format,
            blend: None,
            depth: Some(helpers::depth_state(
                DEPTH_FORMAT,
                true,
                wgpu::CompareFunction::Less,
            )),
        },
    );
    let blended = helpers::make_pipeline(
        device,
        &pl,
        PipelineSpec {
            label: "mesh_blended_pipeline",
            shader: &shader,
            vs_entry: "vs_mesh",
            fs_entry: "fs_mesh",
            buffers: &[vertex_layout],
            topology: wgpu::PrimitiveTopology::TriangleList,
            color_format,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth: Some(helpers::depth_state(
                DEPTH_FORMAT,
                false,
                wgpu::CompareFunction::Less,
            )),
        },
    );
    MeshPipelines {
        opaque,
        blended,
        bgl,
    }
}

/// GPU copy of one mesh plus its per-object uniforms and texture binding.
pub(crate) struct MeshObject {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    // sampled by `bind_group`; dropped with it
    _texture: Option<wgpu::Texture>,
    pub(crate) model: Mat4,
    pub(crate) color: [f32; 4],
    pub(crate) blended: bool,
}

pub(crate) struct MeshDesc<'a> {
    pub(crate) label: &'a str,
    pub(crate) mesh: &'a MeshData,
    pub(crate) texture: Option<wgpu::Texture>,
    pub(crate) view: &'a wgpu::TextureView,
    pub(crate) model: Mat4,
    pub(crate) color: [f32; 4],
    pub(crate) blended: bool,
}

impl MeshObject {
    pub(crate) fn new(
        device: &wgpu::Device,
        pipelines: &MeshPipelines,
        sampler: &wgpu::Sampler,
        desc: MeshDesc<'_>,
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(desc.label),
            contents: bytemuck::cast_slice(&desc.mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(desc.label),
            contents: bytemuck::cast_slice(&desc.mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniform_buffer =
            helpers::uniform_buffer(device, desc.label, std::mem::size_of::<MeshUniforms>());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(desc.label),
            layout: &pipelines.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(desc.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: desc.mesh.indices.len() as u32,
            uniform_buffer,
            bind_group,
            _texture: desc.texture,
            model: desc.model,
            color: desc.color,
            blended: desc.blended,
        }
    }

    pub(crate) fn update(&self, queue: &wgpu::Queue, view_proj: Mat4) {
        let u = MeshUniforms {
            mvp: (view_proj * self.model).to_cols_array_2d(),
            color: self.color,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, pipelines: &MeshPipelines, rpass: &mut wgpu::RenderPass<'_>) {
        let pipeline = if self.blended {
            &pipelines.blended
        } else {
            &pipelines.opaque
        };
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
