use std::collections::BTreeMap;

use crate::{
    foundation::error::{FieldError, FieldResult},
    pipeline::{
        descriptor::{ExpandedBuffers, InstanceDescriptor},
        uniforms::UniformMap,
    },
    render::backend::{Renderer, RendererSettings},
};

/// One call observed by a [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RenderEvent {
    /// An instance was installed with this generation id.
    Add {
        /// Instance name.
        name: String,
        /// Generation id, unique per add.
        instance: u64,
    },
    /// An instance was removed.
    Remove {
        /// Instance name.
        name: String,
        /// Generation id of the removed instance.
        instance: u64,
    },
    /// The viewport was resized.
    Resize {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// A per-frame callback borrowed an instance's uniforms.
    Render {
        /// Instance name.
        name: String,
        /// Generation id of the instance rendered.
        instance: u64,
    },
}

/// A live instance inside the recording renderer.
#[derive(Clone, Debug)]
pub struct LiveInstance {
    /// Generation id.
    pub id: u64,
    /// Descriptor as installed; uniforms are updated in place each frame.
    pub descriptor: InstanceDescriptor,
    /// Buffers produced at install time.
    pub buffers: ExpandedBuffers,
}

/// In-memory renderer for tests and headless runs.
///
/// Performs the same validation and buffer expansion a GPU backend would, and logs every call.
#[derive(Debug)]
pub struct RecordingRenderer {
    settings: RendererSettings,
    size: (u32, u32),
    live: BTreeMap<String, LiveInstance>,
    next_id: u64,
    events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    /// New renderer with the given settings and a zero-sized viewport.
    pub fn new(settings: RendererSettings) -> Self {
        Self {
            settings,
            size: (0, 0),
            live: BTreeMap::new(),
            next_id: 1,
            events: Vec::new(),
        }
    }

    /// Settings the renderer was created with.
    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    /// Current viewport size.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Live instance by name.
    pub fn instance(&self, name: &str) -> Option<&LiveInstance> {
        self.live.get(name)
    }

    /// Number of live instances.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Every call in order.
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Forget the event log, keeping live instances.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn add(&mut self, name: &str, descriptor: InstanceDescriptor) -> FieldResult<()> {
        if self.live.contains_key(name) {
            return Err(FieldError::renderer(format!(
                "instance '{name}' is already live; remove it first"
            )));
        }
        let buffers = descriptor.expand()?;
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(
            name.to_string(),
            LiveInstance {
                id,
                descriptor,
                buffers,
            },
        );
        self.events.push(RenderEvent::Add {
            name: name.to_string(),
            instance: id,
        });
        Ok(())
    }

    fn remove(&mut self, name: &str) -> FieldResult<bool> {
        let Some(inst) = self.live.remove(name) else {
            return Ok(false);
        };
        self.events.push(RenderEvent::Remove {
            name: name.to_string(),
            instance: inst.id,
        });
        Ok(true)
    }

    fn resize(&mut self, width: u32, height: u32) -> FieldResult<()> {
        self.size = (width, height);
        self.events.push(RenderEvent::Resize { width, height });
        Ok(())
    }

    fn uniforms_mut(&mut self, name: &str) -> Option<&mut UniformMap> {
        let inst = self.live.get_mut(name)?;
        self.events.push(RenderEvent::Render {
            name: name.to_string(),
            instance: inst.id,
        });
        Some(&mut inst.descriptor.uniforms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
