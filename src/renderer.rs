use std::sync::Arc;

use anyhow::{Context, Result};
use glam::Vec2;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::render::Canvas;
use crate::types::{Color, ScreenVertex, ViewportUniform};
use crate::VIEW_SIZE;

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ScreenVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Primitive {
    Lines,
    Triangles,
    Points,
}

/// Contiguous run of same-topology vertices. Batches replay in submission
/// order so the interleaved per-shape paint order survives the trip through
/// three separate vertex lists.
struct Batch {
    primitive: Primitive,
    start: u32,
    end: u32,
}

/// wgpu-backed [`Canvas`]: accumulates the frame's draw commands and replays
/// them through line/triangle/point pipelines with alpha blending. No depth
/// buffer - occlusion comes from paint order alone.
pub struct WireRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    line_pipeline: wgpu::RenderPipeline,
    triangle_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    viewport_bind_group: wgpu::BindGroup,
    clear_color: wgpu::Color,
    lines: Vec<ScreenVertex>,
    triangles: Vec<ScreenVertex>,
    points: Vec<ScreenVertex>,
    batches: Vec<Batch>,
}

impl WireRenderer {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create rendering surface")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no suitable GPU adapter")?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .context("failed to acquire GPU device")?;

        let config = Self::create_surface_config(&surface, &adapter, size);
        surface.configure(&device, &config);

        let viewport_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Viewport Buffer"),
            contents: bytemuck::cast_slice(&[ViewportUniform::new(VIEW_SIZE)]),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("viewport_bind_group_layout"),
        });

        let viewport_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_buffer.as_entire_binding(),
            }],
            label: Some("viewport_bind_group"),
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Wireframe Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("wireframe.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Wireframe Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let line_pipeline = Self::create_pipeline(
            &device,
            &shader,
            &pipeline_layout,
            config.format,
            wgpu::PrimitiveTopology::LineList,
            "Line Pipeline",
        );
        let triangle_pipeline = Self::create_pipeline(
            &device,
            &shader,
            &pipeline_layout,
            config.format,
            wgpu::PrimitiveTopology::TriangleList,
            "Triangle Pipeline",
        );
        let point_pipeline = Self::create_pipeline(
            &device,
            &shader,
            &pipeline_layout,
            config.format,
            wgpu::PrimitiveTopology::PointList,
            "Point Pipeline",
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            line_pipeline,
            triangle_pipeline,
            point_pipeline,
            viewport_bind_group,
            clear_color: wgpu::Color::BLACK,
            lines: Vec::new(),
            triangles: Vec::new(),
            points: Vec::new(),
            batches: Vec::new(),
        })
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        layout: &wgpu::PipelineLayout,
        format: wgpu::TextureFormat,
        topology: wgpu::PrimitiveTopology,
        label: &str,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    fn record(&mut self, primitive: Primitive, count: u32) {
        let end = match primitive {
            Primitive::Lines => self.lines.len(),
            Primitive::Triangles => self.triangles.len(),
            Primitive::Points => self.points.len(),
        } as u32;
        let start = end - count;

        match self.batches.last_mut() {
            Some(batch) if batch.primitive == primitive && batch.end == start => {
                batch.end = end;
            }
            _ => self.batches.push(Batch {
                primitive,
                start,
                end,
            }),
        }
    }

    fn vertex_buffer(&self, label: &str, vertices: &[ScreenVertex]) -> Option<wgpu::Buffer> {
        if vertices.is_empty() {
            return None;
        }
        Some(
            self.device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(label),
                    contents: bytemuck::cast_slice(vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
        )
    }

    /// Submits the accumulated frame to the GPU.
    pub fn render(&mut self) -> std::result::Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let line_buffer = self.vertex_buffer("Line Vertices", &self.lines);
        let triangle_buffer = self.vertex_buffer("Triangle Vertices", &self.triangles);
        let point_buffer = self.vertex_buffer("Point Vertices", &self.points);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Wireframe Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Wireframe Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, &self.viewport_bind_group, &[]);
            for batch in &self.batches {
                let (pipeline, buffer) = match batch.primitive {
                    Primitive::Lines => (&self.line_pipeline, line_buffer.as_ref()),
                    Primitive::Triangles => (&self.triangle_pipeline, triangle_buffer.as_ref()),
                    Primitive::Points => (&self.point_pipeline, point_buffer.as_ref()),
                };
                let Some(buffer) = buffer else { continue };
                render_pass.set_pipeline(pipeline);
                render_pass.set_vertex_buffer(0, buffer.slice(..));
                render_pass.draw(batch.start..batch.end, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Re-applies the current surface configuration after a lost surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}

impl Canvas for WireRenderer {
    fn clear(&mut self, color: Color) {
        self.clear_color = wgpu::Color {
            r: color.r as f64,
            g: color.g as f64,
            b: color.b as f64,
            a: color.a as f64,
        };
        self.lines.clear();
        self.triangles.clear();
        self.points.clear();
        self.batches.clear();
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.lines.push(ScreenVertex::new(from, color));
        self.lines.push(ScreenVertex::new(to, color));
        self.record(Primitive::Lines, 2);
    }

    fn quad(&mut self, corners: [Vec2; 4], color: Color) {
        let [a, b, c, d] = corners;
        for position in [a, b, c, a, c, d] {
            self.triangles.push(ScreenVertex::new(position, color));
        }
        self.record(Primitive::Triangles, 6);
    }

    fn point(&mut self, at: Vec2, color: Color) {
        self.points.push(ScreenVertex::new(at, color));
        self.record(Primitive::Points, 1);
    }
}
