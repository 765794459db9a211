use crate::foundation::error::{FieldError, FieldResult};

/// Per-point producer: `(point_index, point_count) -> components`.
pub type PointFn<'a> = Box<dyn FnMut(usize, usize) -> Vec<f32> + 'a>;

/// A named attribute and the function that produces its per-point value.
pub struct AttributeSpec<'a> {
    name: String,
    size: usize,
    data: PointFn<'a>,
}

impl<'a> AttributeSpec<'a> {
    /// Declare an attribute of `size` components.
    pub fn new(
        name: impl Into<String>,
        size: usize,
        data: impl FnMut(usize, usize) -> Vec<f32> + 'a,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            data: Box::new(data),
        }
    }

    /// Attribute whose raw values are all zero; a modifier supplies the real data.
    pub fn zeroed(name: impl Into<String>, size: usize) -> Self {
        Self::new(name, size, move |_, _| vec![0.0; size])
    }

    /// Attribute name as the shader sees it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Components per point.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl std::fmt::Debug for AttributeSpec<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeSpec")
            .field("name", &self.name)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Sampled per-point values of one attribute, `point_count * size` floats.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttributeData {
    /// Attribute name.
    pub name: String,
    /// Components per point.
    pub size: usize,
    /// Values, point-major.
    pub values: Vec<f32>,
}

impl AttributeData {
    /// Raw components of point `i`.
    pub fn point(&self, i: usize) -> &[f32] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Number of points sampled.
    pub fn point_count(&self) -> usize {
        if self.size == 0 {
            0
        } else {
            self.values.len() / self.size
        }
    }
}

/// Invoke every producer once per point, in point order.
///
/// A producer returning the wrong number of components fails the whole build.
pub fn sample_attributes(
    specs: Vec<AttributeSpec<'_>>,
    point_count: usize,
) -> FieldResult<Vec<AttributeData>> {
    let mut out = Vec::with_capacity(specs.len());
    for mut spec in specs {
        if !(1..=4).contains(&spec.size) {
            return Err(FieldError::descriptor(format!(
                "attribute '{}' has unsupported size {}",
                spec.name, spec.size
            )));
        }
        let mut values = Vec::with_capacity(point_count * spec.size);
        for i in 0..point_count {
            let v = (spec.data)(i, point_count);
            if v.len() != spec.size {
                return Err(FieldError::descriptor(format!(
                    "attribute '{}' produced {} components for point {i}, expected {}",
                    spec.name,
                    v.len(),
                    spec.size
                )));
            }
            values.extend_from_slice(&v);
        }
        out.push(AttributeData {
            name: spec.name,
            size: spec.size,
            values,
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/attributes.rs"]
mod tests;
