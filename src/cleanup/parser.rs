use std::fs;

use tracing::debug;

use crate::cleanup::annotations::{annotated_as_nullable, render_annotations};
use crate::cleanup::comments::{element_comment, extract_comment};
use crate::cleanup::imports::recover_imports;
use crate::cleanup::inner_types::{extract_inner_body, is_builder_type};
use crate::cleanup::type_names::resolve_type_name;
use crate::declaration::{ClassDecl, FieldDecl, ProgramElement, OBJECT_TYPE};
use crate::errors::{CleanupError, Result};
use crate::types::{Bean, ClassField, InnerClass, InstanceField};

/// Turns one class declaration into a [`Bean`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassDeclParser;

impl ClassDeclParser {
    pub fn new() -> Self {
        Self
    }

    /// Builds the bean for `element`.
    ///
    /// The class's source file is re-read to recover its import statements and
    /// the verbatim bodies of nested types; failing to read it aborts the parse.
    pub fn parse_bean(&self, element: &ClassDecl) -> Result<Bean> {
        let super_class = element
            .superclass
            .as_ref()
            .filter(|ty| ty.qualified_name() != OBJECT_TYPE)
            .map(|ty| ty.simple_name.clone());

        let default_comment = format!("Class {}", element.name);
        let mut bean = Bean::new(
            element.package.clone(),
            element.is_abstract,
            element.name.clone(),
            super_class,
            render_annotations(&element.annotations),
            extract_comment(Some(default_comment.as_str()), &[], &[element as &dyn ProgramElement]),
        );

        let source =
            fs::read_to_string(&element.source_path).map_err(|e| CleanupError::SourceRead {
                path: element.source_path.display().to_string(),
                source: e,
            })?;
        let lines: Vec<&str> = source.lines().collect();

        bean.add_imports(recover_imports(lines.iter().copied()));

        // Nested types, minus the builders
        for nested in &element.nested_types {
            if is_builder_type(&nested.name) {
                debug!(class = %element.name, nested = %nested.name, "skipping builder type");
                continue;
            }
            let content = extract_inner_body(nested.line, &lines);
            bean.add_inner_class(InnerClass::new(
                format!("public static {}", nested.kind.keyword()),
                nested.name.clone(),
                render_annotations(&nested.annotations),
                element_comment(nested),
                content,
            ));
        }

        for field in &element.fields {
            let field_type = resolve_type_name(&field.type_ref, &element.package, bean.raw_imports());
            if field.is_static {
                bean.add_class_field(ClassField::new(
                    field.name.clone(),
                    field_type,
                    render_annotations(&field.annotations),
                    element_comment(field),
                ));
            } else {
                let instance_field = Self::instance_field(element, field, field_type);
                bean.add_instance_field(instance_field);
            }
        }

        debug!(
            class = %element.name,
            instance_fields = bean.instance_fields().len(),
            static_fields = bean.static_fields().len(),
            inner_classes = bean.inner_classes().len(),
            imports = bean.raw_imports().len(),
            "parsed bean"
        );

        Ok(bean)
    }

    /// Builds an instance field, picking up stray annotations and comments
    /// from its accessor methods.
    fn instance_field(element: &ClassDecl, field: &FieldDecl, field_type: String) -> InstanceField {
        let mut instance_field = InstanceField::new(
            field.name.clone(),
            field_type,
            annotated_as_nullable(&field.annotations),
            render_annotations(&field.annotations),
            element_comment(field),
        );

        let accessor_name = instance_field.accessor_name();
        let mut documented: Vec<&dyn ProgramElement> = Vec::new();
        documented.push(field);
        for method in &element.methods {
            if method.name == accessor_name || method.name == field.name {
                instance_field.add_annotations(render_annotations(&method.annotations));
                documented.push(method);
            }
        }

        if documented.len() > 1 {
            instance_field.adjust_javadoc(extract_comment(None, &[], &documented));
        }
        instance_field
    }
}
