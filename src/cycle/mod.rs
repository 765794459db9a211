pub(crate) mod letter_cycle;
pub(crate) mod scroll;
