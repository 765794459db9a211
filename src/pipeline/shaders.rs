const VERTEX_TEMPLATE: &str = include_str!("shaders/morph.vert");
const DURATION_SLOT: &str = "{{PATH_DURATION}}";

/// Fragment program: luminance, ordered dither and film grain.
pub const FRAGMENT_SOURCE: &str = include_str!("shaders/morph.frag");

/// Uniforms the renderer fills in itself (camera and model transforms).
pub const RENDERER_UNIFORMS: [&str; 3] = ["uProjectionMatrix", "uModelMatrix", "uViewMatrix"];

/// Vertex program with the path duration baked in as a float literal.
pub fn vertex_source(path_duration: f64) -> String {
    VERTEX_TEMPLATE.replace(DURATION_SLOT, &glsl_float(path_duration))
}

fn glsl_float(v: f64) -> String {
    // Debug formatting always keeps a decimal point, which GLSL ES needs.
    format!("{v:?}")
}

/// An `attribute` or `uniform` a shader program reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShaderInput {
    /// Per-vertex attribute.
    Attribute(String),
    /// Uniform.
    Uniform(String),
}

/// Top-level `attribute`/`uniform` declarations of a GLSL source, in order.
pub fn declared_inputs(src: &str) -> Vec<ShaderInput> {
    let mut out = Vec::new();
    for line in src.lines() {
        let mut words = line.split_whitespace();
        let (Some(kw), Some(_ty), Some(name)) = (words.next(), words.next(), words.next()) else {
            continue;
        };
        let name = name.trim_end_matches(';').to_string();
        match kw {
            "attribute" => out.push(ShaderInput::Attribute(name)),
            "uniform" => out.push(ShaderInput::Uniform(name)),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/shaders.rs"]
mod tests;
