use super::helpers::{self, PipelineSpec};
use super::targets::DEPTH_FORMAT;
use crate::core::BackgroundFit;
use crate::dom::RgbaImage;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BackgroundUniforms {
    pub(crate) offset: [f32; 2],
    pub(crate) repeat: [f32; 2],
}

impl From<BackgroundFit> for BackgroundUniforms {
    fn from(fit: BackgroundFit) -> Self {
        Self {
            offset: fit.offset.to_array(),
            repeat: fit.repeat.to_array(),
        }
    }
}

/// Full-screen background image. Draws nothing until an image is set.
pub(crate) struct BackgroundLayer {
    pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    // texture kept alive alongside the bind group that samples it
    bound: Option<(wgpu::Texture, wgpu::BindGroup)>,
}

impl BackgroundLayer {
    pub(crate) fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("background_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::BACKGROUND_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("background_bgl"),
            entries: &[
                helpers::texture_entry(0),
                helpers::sampler_entry(1),
                helpers::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("background_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_pipeline(
            device,
            &pl,
            PipelineSpec {
                label: "background_pipeline",
                shader: &shader,
                vs_entry: "vs_fullscreen",
                fs_entry: "fs_background",
                buffers: &[],
                topology: wgpu::PrimitiveTopology::TriangleList,
                color_format,
                blend: None,
                // behind everything: never tested, never written
                depth: Some(helpers::depth_state(
                    DEPTH_FORMAT,
                    false,
                    wgpu::CompareFunction::Always,
                )),
            },
        );
        // Seeded with the identity fit so a background bound before any
        // viewport is known samples the whole image.
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("background_uniforms"),
            contents: bytemuck::bytes_of(&BackgroundUniforms::from(BackgroundFit::IDENTITY)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        Self {
            pipeline,
            bgl,
            uniform_buffer,
            bound: None,
        }
    }

    pub(crate) fn set_image(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        sampler: &wgpu::Sampler,
        image: &RgbaImage,
    ) {
        let (tex, view) = helpers::upload_rgba(device, queue, "background_tex", image);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("background_bg"),
            layout: &self.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
            ],
        });
        self.bound = Some((tex, bind_group));
    }

    pub(crate) fn set_fit(&self, queue: &wgpu::Queue, fit: BackgroundFit) {
        let u = BackgroundUniforms::from(fit);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if let Some((_, bind_group)) = &self.bound {
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }
    }
}
