pub(crate) mod measures;
pub(crate) mod resolve;
