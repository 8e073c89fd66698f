//! User Handlers

pub(crate) mod profile;
pub(crate) mod update;
