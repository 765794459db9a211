use crate::{
    foundation::error::FieldResult,
    pipeline::{descriptor::InstanceDescriptor, uniforms::UniformMap},
};

/// The drawing side of the field: owns GPU resources and the draw loop.
///
/// Implementations upload a descriptor's buffers on [`Renderer::add`] and hand the live
/// instance's uniforms to the field once per frame through [`Renderer::uniforms_mut`].
pub trait Renderer {
    /// Install a named instance. Fails if `name` is already live.
    fn add(&mut self, name: &str, descriptor: InstanceDescriptor) -> FieldResult<()>;

    /// Drop a named instance; returns whether one existed.
    fn remove(&mut self, name: &str) -> FieldResult<bool>;

    /// React to a viewport size change.
    fn resize(&mut self, width: u32, height: u32) -> FieldResult<()>;

    /// Mutable uniforms of a live instance, for the per-frame callback.
    fn uniforms_mut(&mut self, name: &str) -> Option<&mut UniformMap>;
}

/// Construction settings a renderer needs from the field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RendererSettings {
    /// Clear color, RGBA.
    pub clear_color: [f32; 4],
    /// Camera position.
    pub camera_position: [f32; 3],
}
