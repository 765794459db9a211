pub(crate) mod letters;
pub(crate) mod shapes;
