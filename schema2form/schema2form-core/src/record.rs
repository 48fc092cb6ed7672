//! Record alias used on both sides of the renderer boundary.

use serde_json::{Map, Value};

/// A flat form record: field key to JSON value.
///
/// `serde_json` is built with `preserve_order`, so records keep their
/// insertion order end to end.
pub type Record = Map<String, Value>;
