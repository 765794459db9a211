pub(crate) mod hsl;
