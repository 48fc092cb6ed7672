//! Form-configuration layer for `schema2form`.
//!
//! This crate turns a `schema2form-core` variant schema into the two
//! artifacts the renderer boundary consumes:
//! 1. [`build_form_config`] — the ordered [`FieldDescriptor`] sequence.
//! 2. [`default_record`] — a fresh record with every field explicitly
//!    initialized, so the renderer never binds to a missing value.
//!
//! Both are pure functions of the variant schema and are recomputed on
//! every discriminant switch; neither mutates shared state.

pub mod builder;
pub mod descriptor;

/// Re-export of [`builder::build_form_config`].
pub use builder::build_form_config;
/// Re-export of [`builder::default_record`].
pub use builder::default_record;
/// Re-export of [`descriptor::FieldDescriptor`].
pub use descriptor::FieldDescriptor;
