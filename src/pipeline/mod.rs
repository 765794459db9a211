pub(crate) mod attributes;
pub(crate) mod descriptor;
pub(crate) mod modifiers;
pub(crate) mod morph;
pub(crate) mod shaders;
pub(crate) mod uniforms;
