use crate::constants::{CLEAR_COLOR, LABEL_COLOR, SPHERE_COLOR};
use crate::core::{
    axes_lines, centered_quad, clamp_extent, grid_lines, uv_sphere, BackgroundFit, PerspectiveCamera,
    AXES_SIZE, AXIS_COLORS, GRID_CENTER_COLOR, GRID_DIVISIONS, GRID_LINE_COLOR, GRID_SIZE,
    LABEL_HEIGHT, SPHERE_HEIGHT_SEGMENTS, SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS,
};
use crate::dom::RgbaImage;
use glam::{Mat4, Vec3};
use web_sys as web;

mod background;
mod helpers;
mod lines;
mod meshes;
mod targets;

use background::BackgroundLayer;
use lines::LinesLayer;
use meshes::{MeshDesc, MeshObject, MeshPipelines};
use targets::DepthTarget;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    linear_sampler: wgpu::Sampler,

    background: BackgroundLayer,
    guides: LinesLayer,
    mesh_pipelines: MeshPipelines,
    // 1x1 white texture bound by untextured meshes
    _white_tex: wgpu::Texture,
    sphere: MeshObject,
    label: Option<MeshObject>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let requested = (canvas.width().max(1), canvas.height().max(1));

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let (width, height) = clamp_extent(
            requested.0,
            requested.1,
            device.limits().max_texture_dimension_2d,
        );
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth = DepthTarget::new(&device, width, height);
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let background = BackgroundLayer::new(&device, format);
        let mut helper_lines = axes_lines(AXES_SIZE, AXIS_COLORS);
        helper_lines.extend(grid_lines(
            GRID_SIZE,
            GRID_DIVISIONS,
            GRID_CENTER_COLOR,
            GRID_LINE_COLOR,
        ));
        let guides = LinesLayer::new(&device, format, &helper_lines);

        let mesh_pipelines = meshes::create_mesh_pipelines(&device, format);
        let white = RgbaImage {
            width: 1,
            height: 1,
            pixels: vec![255; 4],
        };
        let (white_tex, white_view) = helpers::upload_rgba(&device, &queue, "white_tex", &white);
        let sphere_mesh = uv_sphere(SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS);
        let sphere = MeshObject::new(
            &device,
            &mesh_pipelines,
            &linear_sampler,
            MeshDesc {
                label: "sphere",
                mesh: &sphere_mesh,
                texture: None,
                view: &white_view,
                model: Mat4::IDENTITY,
                color: SPHERE_COLOR,
                blended: false,
            },
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            linear_sampler,
            background,
            guides,
            mesh_pipelines,
            _white_tex: white_tex,
            sphere,
            label: None,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    /// Largest texture side the device accepts; surface and uploads are
    /// clamped to it.
    pub fn max_texture_dimension(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }

    pub fn set_background(&mut self, image: &RgbaImage) {
        self.background
            .set_image(&self.device, &self.queue, &self.linear_sampler, image);
    }

    pub fn set_background_fit(&self, fit: BackgroundFit) {
        self.background.set_fit(&self.queue, fit);
    }

    /// Adds the text label as a quad `LABEL_HEIGHT` world units tall, keeping
    /// the raster's aspect ratio.
    pub fn set_label(&mut self, image: &RgbaImage, center: Vec3) {
        if image.width == 0 || image.height == 0 {
            return;
        }
        let max_side = self.max_texture_dimension();
        if image.width > max_side || image.height > max_side {
            log::warn!(
                "label raster {}x{} exceeds texture limit {}; omitted",
                image.width,
                image.height,
                max_side
            );
            return;
        }
        let height = LABEL_HEIGHT;
        let width = height * image.width as f32 / image.height as f32;
        let quad = centered_quad(Vec3::ZERO, width, height);
        let (tex, view) = helpers::upload_rgba(&self.device, &self.queue, "label_tex", image);
        self.label = Some(MeshObject::new(
            &self.device,
            &self.mesh_pipelines,
            &self.linear_sampler,
            MeshDesc {
                label: "label",
                mesh: &quad,
                texture: Some(tex),
                view: &view,
                model: Mat4::from_translation(center),
                color: LABEL_COLOR,
                blended: true,
            },
        ));
    }

    pub fn set_sphere_position(&mut self, position: Vec3) {
        self.sphere.model = Mat4::from_translation(position);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (width, height) = clamp_extent(width, height, self.max_texture_dimension());
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, camera: &PerspectiveCamera) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_proj = camera.view_projection();
        self.guides.update(&self.queue, view_proj);
        self.sphere.update(&self.queue, view_proj);
        if let Some(label) = &self.label {
            label.update(&self.queue, view_proj);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.background.draw(&mut rpass);
            self.guides.draw(&mut rpass);
            self.sphere.draw(&self.mesh_pipelines, &mut rpass);
            if let Some(label) = &self.label {
                label.draw(&self.mesh_pipelines, &mut rpass);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
