use std::sync::Arc;
use wgpu::util::DeviceExt;
use wgpu::{
    BindGroup, BindGroupLayout, Buffer, Device, RenderPipeline, Surface, SurfaceConfiguration,
    TextureFormat, TextureView,
};
use winit::window::Window;

use crate::config::RenderConfig;
use crate::core::gpu_context::GpuContext;
use crate::core::window::WindowDimensions;
use crate::geometry::Mesh;
use crate::scene::Scene;
use crate::traits::CameraController;
use crate::types::{Globals, ModelUniform, Vertex};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;
const SHADOW_FORMAT: TextureFormat = TextureFormat::Depth32Float;

/// GPU buffers for one scene object
struct GpuObject {
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    index_count: u32,
    model_buffer: Buffer,
    model_bind_group: BindGroup,
    cast_shadow: bool,
}

/// Forward renderer for a [`Scene`]
///
/// Each frame runs a depth-only pass from the directional light into the
/// shadow map (when shadows are on), then a lit pass into the window surface.
pub struct SceneRenderer {
    gpu: GpuContext,
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    depth_view: TextureView,
    // kept alive for the bind group; also the shadow pass target
    shadow_view: TextureView,
    shadow_size: u32,
    shadows: bool,
    globals_buffer: Buffer,
    globals_bind_group: BindGroup,
    shadow_globals_bind_group: BindGroup,
    main_pipeline: RenderPipeline,
    shadow_pipeline: RenderPipeline,
    objects: Vec<GpuObject>,
}

impl SceneRenderer {
    pub async fn new(window: Arc<Window>, scene: &Scene, config: &RenderConfig) -> Result<Self> {
        let dimensions = WindowDimensions::from(window.inner_size());

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;
        let gpu = GpuContext::new_with_surface(&instance, &surface).await?;

        let surface_config = Self::create_surface_config(&surface, gpu.adapter(), dimensions)?;
        surface.configure(gpu.device(), &surface_config);

        let device = gpu.device();
        let depth_view = create_depth_view(device, surface_config.width, surface_config.height);

        let shadows = config.shadows && scene.sun.cast_shadow;
        let max_dimension = device.limits().max_texture_dimension_2d;
        if shadows && config.shadow_map_size > max_dimension {
            log::warn!(
                "Shadow map size {} exceeds device limit, using {}",
                config.shadow_map_size,
                max_dimension
            );
        }
        let shadow_size = if shadows {
            config.shadow_map_size.min(max_dimension)
        } else {
            1
        };
        let shadow_view = create_shadow_view(device, shadow_size);

        let shadow_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Shadow Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Globals Buffer"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let layouts = Layouts::new(device);

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bind_group"),
            layout: &layouts.globals,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&shadow_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&shadow_sampler),
                },
            ],
        });

        let shadow_globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shadow_globals_bind_group"),
            layout: &layouts.shadow_globals,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/scene.wgsl").into()),
        });

        let main_pipeline =
            Self::create_main_pipeline(device, &shader, &layouts, surface_config.format);
        let shadow_pipeline = Self::create_shadow_pipeline(device, &shader, &layouts);

        let objects = scene
            .objects
            .iter()
            .map(|object| {
                let uniform =
                    ModelUniform::new(object.transform, object.color, object.receive_shadow);
                upload_object(
                    device,
                    &layouts.model,
                    object.name,
                    &object.mesh,
                    uniform,
                    object.cast_shadow,
                )
            })
            .collect::<Vec<_>>();

        log::info!(
            "Renderer ready: {}x{} {:?}, {} objects ({} triangles), shadow map {}",
            surface_config.width,
            surface_config.height,
            surface_config.format,
            objects.len(),
            scene
                .objects
                .iter()
                .map(|object| object.mesh.triangle_count())
                .sum::<usize>(),
            if shadows {
                format!("{0}x{0}", shadow_size)
            } else {
                "disabled".to_string()
            }
        );

        Ok(Self {
            gpu,
            surface,
            surface_config,
            depth_view,
            shadow_view,
            shadow_size,
            shadows,
            globals_buffer,
            globals_bind_group,
            shadow_globals_bind_group,
            main_pipeline,
            shadow_pipeline,
            objects,
        })
    }

    pub fn size(&self) -> WindowDimensions {
        WindowDimensions::new(self.surface_config.width, self.surface_config.height)
    }

    /// Resize the surface and depth buffer; zero sizes (minimized) are ignored
    pub fn resize(&mut self, dimensions: WindowDimensions) {
        if !dimensions.is_renderable() {
            return;
        }
        self.surface_config.width = dimensions.width;
        self.surface_config.height = dimensions.height;
        self.reconfigure();
    }

    /// Reconfigure the surface at its current size, after it was lost or outdated
    pub fn reconfigure(&mut self) {
        let device = self.gpu.device();
        self.surface.configure(device, &self.surface_config);
        self.depth_view =
            create_depth_view(device, self.surface_config.width, self.surface_config.height);
    }

    /// Draw one frame of `scene` as seen by `camera`
    pub fn render(
        &self,
        scene: &Scene,
        camera: &dyn CameraController,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.write_uniforms(scene, camera);

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        if self.shadows {
            let mut shadow_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shadow Pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.shadow_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            shadow_pass.set_pipeline(&self.shadow_pipeline);
            shadow_pass.set_bind_group(0, &self.shadow_globals_bind_group, &[]);
            for object in self.objects.iter().filter(|o| o.cast_shadow) {
                draw_object(&mut shadow_pass, object);
            }
        }

        {
            let [r, g, b] = scene.clear_color;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_pipeline(&self.main_pipeline);
            render_pass.set_bind_group(0, &self.globals_bind_group, &[]);
            for object in &self.objects {
                draw_object(&mut render_pass, object);
            }
        }

        self.gpu.queue().submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }

    fn write_uniforms(&self, scene: &Scene, camera: &dyn CameraController) {
        let queue = self.gpu.queue();
        let globals = scene_globals(
            scene,
            camera,
            self.size().aspect(),
            self.shadows,
            self.shadow_size,
        );
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::cast_slice(&[globals]));

        for (gpu_object, object) in self.objects.iter().zip(&scene.objects) {
            let uniform = ModelUniform::new(object.transform, object.color, object.receive_shadow);
            queue.write_buffer(&gpu_object.model_buffer, 0, bytemuck::cast_slice(&[uniform]));
        }
    }

    fn create_surface_config(
        surface: &Surface,
        adapter: &wgpu::Adapter,
        dimensions: WindowDimensions,
    ) -> Result<SurfaceConfiguration> {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or("Surface reports no supported formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        Ok(SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: dimensions.width.max(1),
            height: dimensions.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }

    fn create_main_pipeline(
        device: &Device,
        shader: &wgpu::ShaderModule,
        layouts: &Layouts,
        surface_format: TextureFormat,
    ) -> RenderPipeline {
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&layouts.globals, &layouts.model],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // the floor is seen from its back side
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
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
        })
    }

    fn create_shadow_pipeline(
        device: &Device,
        shader: &wgpu::ShaderModule,
        layouts: &Layouts,
    ) -> RenderPipeline {
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shadow Pipeline Layout"),
            bind_group_layouts: &[&layouts.shadow_globals, &layouts.model],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shadow Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_shadow"),
                buffers: &[Vertex::LAYOUT],
                compilation_options: Default::default(),
            },
            fragment: None,
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: SHADOW_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState {
                    constant: 2,
                    slope_scale: 2.0,
                    clamp: 0.0,
                },
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }
}

/// Bind group layouts shared by both pipelines
struct Layouts {
    globals: BindGroupLayout,
    shadow_globals: BindGroupLayout,
    model: BindGroupLayout,
}

impl Layouts {
    fn new(device: &Device) -> Self {
        let uniform = |binding, visibility| wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };
        let both = wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT;

        let globals = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bind_group_layout"),
            entries: &[
                uniform(0, both),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Depth,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                    count: None,
                },
            ],
        });

        // the shadow map is the attachment in the shadow pass, so it can't be bound there
        let shadow_globals = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shadow_globals_bind_group_layout"),
            entries: &[uniform(0, wgpu::ShaderStages::VERTEX)],
        });

        let model = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("model_bind_group_layout"),
            entries: &[uniform(0, both)],
        });

        Self {
            globals,
            shadow_globals,
            model,
        }
    }
}

/// Per-frame uniforms for `scene` viewed by `camera`
pub fn scene_globals(
    scene: &Scene,
    camera: &dyn CameraController,
    aspect: f32,
    shadows: bool,
    shadow_size: u32,
) -> Globals {
    let sun = &scene.sun;
    Globals {
        view_proj: camera.view_proj(aspect).to_cols_array_2d(),
        light_view_proj: sun.view_proj().to_cols_array_2d(),
        camera_position: camera.eye().to_array(),
        shadows_enabled: if shadows { 1.0 } else { 0.0 },
        light_direction: sun.direction_to_light().to_array(),
        light_intensity: sun.intensity,
        light_color: sun.color,
        ambient_intensity: scene.ambient.intensity,
        ambient_color: scene.ambient.color,
        shadow_texel: 1.0 / shadow_size.max(1) as f32,
    }
}

fn upload_object(
    device: &Device,
    layout: &BindGroupLayout,
    name: &str,
    mesh: &Mesh,
    uniform: ModelUniform,
    cast_shadow: bool,
) -> GpuObject {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{} Vertices", name)),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{} Indices", name)),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{} Model", name)),
        contents: bytemuck::cast_slice(&[uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });
    let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("{} Model Bind Group", name)),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: model_buffer.as_entire_binding(),
        }],
    });

    GpuObject {
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        model_buffer,
        model_bind_group,
        cast_shadow,
    }
}

fn draw_object(pass: &mut wgpu::RenderPass<'_>, object: &GpuObject) {
    pass.set_bind_group(1, &object.model_bind_group, &[]);
    pass.set_vertex_buffer(0, object.vertex_buffer.slice(..));
    pass.set_index_buffer(object.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
    pass.draw_indexed(0..object.index_count, 0, 0..1);
}

fn create_depth_view(device: &Device, width: u32, height: u32) -> TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
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

fn create_shadow_view(device: &Device, size: u32) -> TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Shadow Map"),
        size: wgpu::Extent3d {
            width: size.max(1),
            height: size.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: SHADOW_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
