//! Extension traits

mod depot;
mod request;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use request::{PathParamExt as _, RequestExt as _};
pub(crate) use result::ResultExt as _;
