//! Text-mode widget painters keyed by input kind.
//!
//! The painter table is capability-indexed with a mandatory fallback: an
//! input kind without its own painter still renders as a plain text box.

use schema2form::config::FieldDescriptor;
use schema2form::core::InputKind;

type Painter = fn(&FieldDescriptor) -> String;

const FALLBACK: Painter = paint_text;

const PAINTERS: &[(InputKind, Painter)] = &[
    (InputKind::Text, paint_text),
    (InputKind::Number, paint_number),
    (InputKind::Textarea, paint_textarea),
    (InputKind::Select, paint_select),
];

pub fn paint(descriptor: &FieldDescriptor) -> String {
    let painter = PAINTERS
        .iter()
        .find(|(kind, _)| *kind == descriptor.input_kind)
        .map(|(_, painter)| *painter)
        .unwrap_or(FALLBACK);
    painter(descriptor)
}

fn label_line(descriptor: &FieldDescriptor) -> String {
    if descriptor.required {
        format!("{} *", descriptor.label)
    } else {
        descriptor.label.clone()
    }
}

fn paint_text(descriptor: &FieldDescriptor) -> String {
    format!("{}\n  [____________________]\n", label_line(descriptor))
}

fn paint_number(descriptor: &FieldDescriptor) -> String {
    format!("{}\n  [                 0 ]\n", label_line(descriptor))
}

fn paint_textarea(descriptor: &FieldDescriptor) -> String {
    format!(
        "{}\n  [                    ]\n  [                    ]\n",
        label_line(descriptor)
    )
}

fn paint_select(descriptor: &FieldDescriptor) -> String {
    format!("{}\n  [ choose... v ]\n", label_line(descriptor))
}
