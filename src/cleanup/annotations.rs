use crate::declaration::{AnnotationDesc, AnnotationValue};

/// Annotations that mark an element as required by an XML schema binding.
pub const SCHEMA_ANNOTATIONS: [&str; 3] = ["XmlElement", "XmlAttribute", "XmlElementRef"];

/// Renders annotations as source, e.g. `@XmlElement(name="Task", required=true)`.
pub fn render_annotations(annotations: &[AnnotationDesc]) -> Vec<String> {
    annotations.iter().map(render_annotation).collect()
}

fn render_annotation(annotation: &AnnotationDesc) -> String {
    let mut rendered = format!("@{}", annotation.type_name);
    if !annotation.element_values.is_empty() {
        let values: Vec<String> = annotation
            .element_values
            .iter()
            .map(|pair| pair.to_string())
            .collect();
        rendered.push('(');
        rendered.push_str(&values.join(", "));
        rendered.push(')');
    }
    rendered
}

/// Decides whether a field is optional from its annotations.
///
/// `@Nullable` wins outright. A schema annotation makes the field optional
/// unless it is explicitly `required=true`. Anything else is required.
pub fn annotated_as_nullable(annotations: &[AnnotationDesc]) -> bool {
    if annotations.iter().any(|a| a.type_name == "Nullable") {
        return true;
    }
    let mut schema_annotated = false;
    for annotation in annotations {
        if SCHEMA_ANNOTATIONS.contains(&annotation.type_name.as_str()) {
            if annotation.element("required") == Some(&AnnotationValue::Boolean(true)) {
                return false;
            }
            schema_annotated = true;
        }
    }
    schema_annotated
}
