//! Uniform buffers and the per-frame bind group.
//!
//! Both pipelines share bind group 0: the camera uniform at binding 0 and
//! the fireball parameters at binding 1.

use std::marker::PhantomData;

use wgpu::util::DeviceExt;

use crate::config::FireballControls;
use crate::gfx::camera::CameraUniform;

/// Shader-side fireball parameters. Must match the `FireballUniform`
/// struct in the shaders exactly, including padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FireballUniform {
    pub color1: [f32; 4],
    pub color2: [f32; 4],
    pub time: f32,
    pub octaves: i32,
    pub strength: f32,
    pub _padding: f32,
}

impl FireballUniform {
    /// Packs a controls snapshot plus the current animation phase.
    pub fn new(controls: &FireballControls, phase: f32) -> Self {
        Self {
            color1: [
                controls.color1[0],
                controls.color1[1],
                controls.color1[2],
                1.0,
            ],
            color2: [
                controls.color2[0],
                controls.color2[1],
                controls.color2[2],
                1.0,
            ],
            time: phase,
            octaves: controls.noise_octaves,
            strength: controls.noise_strength,
            _padding: 0.0,
        }
    }
}

impl Default for FireballUniform {
    fn default() -> Self {
        Self::new(&FireballControls::default(), 0.0)
    }
}

/// A typed wrapper around a single uniform buffer.
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    pub fn new(device: &wgpu::Device, label: &str, content: &Content) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(content),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            buffer,
            content_type: PhantomData,
        }
    }

    pub fn update(&self, queue: &wgpu::Queue, content: &Content) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(content));
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }
}

/// Bind group 0 for both pipelines: camera + fireball parameters.
pub struct FrameBindings {
    pub camera: UniformBuffer<CameraUniform>,
    pub params: UniformBuffer<FireballUniform>,
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl FrameBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let camera = UniformBuffer::new(device, "camera uniform", &CameraUniform::default());
        let params = UniformBuffer::new(device, "fireball uniform", &FireballUniform::default());

        let uniform_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame bind group layout"),
            entries: &[uniform_entry(0), uniform_entry(1)],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame bind group"),
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera.binding_resource(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: params.binding_resource(),
                },
            ],
        });

        Self {
            camera,
            params,
            layout,
            bind_group,
        }
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_packs_controls_and_phase() {
        let controls = FireballControls {
            color1: [0.25, 0.5, 0.75],
            noise_octaves: 3,
            noise_strength: 0.9,
            ..FireballControls::default()
        };

        let uniform = FireballUniform::new(&controls, 42.0);
        assert_eq!(uniform.color1, [0.25, 0.5, 0.75, 1.0]);
        assert_eq!(uniform.time, 42.0);
        assert_eq!(uniform.octaves, 3);
        assert_eq!(uniform.strength, 0.9);
    }

    #[test]
    fn uniform_size_matches_shader_layout() {
        // Two vec4 colors plus one vec4 of scalars.
        assert_eq!(std::mem::size_of::<FireballUniform>(), 48);
    }
}
