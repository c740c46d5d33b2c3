//! Tree-sitter based Java declaration extractor.
//!
//! Reads a Java compilation unit and produces one [`ClassDecl`] per top-level
//! class, with type references resolved against the file's package and
//! imports.
use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};
use tree_sitter::{Node as TsNode, Parser, Tree};

use crate::declaration::{
    AnnotationDesc, AnnotationValue, BoundKind, ClassDecl, Documentation, ElementValuePair,
    FieldDecl, MethodDecl, NestedKind, NestedTypeDecl, TypeRef, BASE_PACKAGE,
};
use crate::errors::{CleanupError, Result};
use crate::extraction::javadoc::parse_javadoc;
use crate::extraction::DeclarationExtractor;

/// `java.lang` types recognized without an import.
const JAVA_LANG_TYPES: &[&str] = &[
    "Boolean",
    "Byte",
    "Character",
    "CharSequence",
    "Class",
    "Comparable",
    "Deprecated",
    "Double",
    "Enum",
    "Error",
    "Exception",
    "Float",
    "FunctionalInterface",
    "Integer",
    "Iterable",
    "Long",
    "Number",
    "Object",
    "Override",
    "Record",
    "Runnable",
    "RuntimeException",
    "Short",
    "String",
    "StringBuilder",
    "SuppressWarnings",
    "Thread",
    "Throwable",
    "Void",
];

/// Extracts class declarations from Java source files.
pub struct JavaExtractor;

impl DeclarationExtractor for JavaExtractor {
    fn extensions(&self) -> &[&str] {
        &["java"]
    }

    fn language_name(&self) -> &str {
        "Java"
    }

    fn extract(&self, file_path: &Path, source: &str) -> Result<Vec<ClassDecl>> {
        Self::extract_source(file_path, source)
    }
}

/// File-level state shared by every class in the compilation unit.
struct ExtractionState<'a> {
    source: &'a [u8],
    file_path: &'a Path,
    package: String,
    /// Qualified names of single-type imports.
    imported_types: Vec<String>,
}

impl<'a> ExtractionState<'a> {
    fn new(file_path: &'a Path, source: &'a str) -> Self {
        Self {
            source: source.as_bytes(),
            file_path,
            package: String::new(),
            imported_types: Vec::new(),
        }
    }

    /// Gets the text of a tree-sitter node from the source.
    fn node_text(&self, node: TsNode<'_>) -> &'a str {
        node.utf8_text(self.source).unwrap_or("<invalid utf8>")
    }
}

/// Names visible inside one class body.
struct TypeScope<'a> {
    class_name: &'a str,
    nested: HashSet<String>,
    type_params: HashSet<String>,
}

impl JavaExtractor {
    /// Extract class declarations from a Java source file.
    ///
    /// `file_path` is recorded on each declaration (not used for I/O).
    pub fn extract_source(file_path: &Path, source: &str) -> Result<Vec<ClassDecl>> {
        let tree = Self::parse_source(source).map_err(|message| CleanupError::Parse {
            message,
            path: file_path.display().to_string(),
            line: None,
        })?;
        let root = tree.root_node();
        if root.has_error() {
            warn!(path = %file_path.display(), "syntax errors in source, extracting what parsed");
        }

        let mut state = ExtractionState::new(file_path, source);
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_declaration" => state.package = Self::extract_package(&state, child),
                "import_declaration" => Self::record_import(&mut state, child),
                _ => {}
            }
        }

        let mut classes = Vec::new();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if child.kind() == "class_declaration" {
                if let Some(class) = Self::extract_class(&state, child) {
                    classes.push(class);
                }
            }
        }

        debug!(path = %file_path.display(), classes = classes.len(), "extracted declarations");
        Ok(classes)
    }

    /// Parse source code into a tree-sitter AST.
    fn parse_source(source: &str) -> std::result::Result<Tree, String> {
        let mut parser = Parser::new();
        let language = tree_sitter_java::LANGUAGE;
        parser
            .set_language(&language.into())
            .map_err(|e| format!("failed to load Java grammar: {e}"))?;
        parser
            .parse(source, None)
            .ok_or_else(|| "tree-sitter parse returned None".to_string())
    }

    fn extract_package(state: &ExtractionState<'_>, node: TsNode<'_>) -> String {
        let mut cursor = node.walk();
        let name = node
            .named_children(&mut cursor)
            .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"));
        name.map(|n| state.node_text(n).to_string())
            .unwrap_or_default()
    }

    /// Records single-type imports; static and on-demand imports name no
    /// specific type and are skipped.
    fn record_import(state: &mut ExtractionState<'_>, node: TsNode<'_>) {
        let text = state.node_text(node);
        let path = text
            .trim()
            .trim_start_matches("import")
            .trim_end_matches(';')
            .trim();
        if path.starts_with("static ") || path.ends_with('*') {
            return;
        }
        let path: String = path.chars().filter(|c| !c.is_whitespace()).collect();
        state.imported_types.push(path);
    }

    fn extract_class(state: &ExtractionState<'_>, node: TsNode<'_>) -> Option<ClassDecl> {
        let name = state.node_text(node.child_by_field_name("name")?);
        let body = node.child_by_field_name("body");

        let mut scope = TypeScope {
            class_name: name,
            nested: HashSet::new(),
            type_params: Self::type_parameter_names(state, node),
        };
        if let Some(body) = body {
            let mut cursor = body.walk();
            for child in body.named_children(&mut cursor) {
                if Self::nested_kind(child.kind()).is_some() {
                    if let Some(n) = child.child_by_field_name("name") {
                        scope.nested.insert(state.node_text(n).to_string());
                    }
                }
            }
        }

        let mut class = ClassDecl::new(state.package.clone(), name, state.file_path);
        class.is_abstract = Self::has_modifier(node, "abstract");
        class.annotations = Self::extract_annotations(state, node);
        class.doc = Self::extract_javadoc(state, node);
        class.superclass = node
            .child_by_field_name("superclass")
            .and_then(Self::first_named_child)
            .map(|ty| Self::resolve_type(state, &scope, ty));

        if let Some(body) = body {
            let mut cursor = body.walk();
            for child in body.named_children(&mut cursor) {
                match child.kind() {
                    "field_declaration" => {
                        class.fields.extend(Self::extract_fields(state, &scope, child))
                    }
                    "method_declaration" => {
                        if let Some(method) = Self::extract_method(state, child) {
                            class.methods.push(method);
                        }
                    }
                    kind => {
                        if let Some(nested_kind) = Self::nested_kind(kind) {
                            if let Some(nested) = Self::extract_nested(state, child, nested_kind) {
                                class.nested_types.push(nested);
                            }
                        }
                    }
                }
            }
        }

        Some(class)
    }

    fn nested_kind(kind: &str) -> Option<NestedKind> {
        match kind {
            "class_declaration" => Some(NestedKind::Class),
            "enum_declaration" => Some(NestedKind::Enum),
            "interface_declaration" => Some(NestedKind::Interface),
            "record_declaration" => Some(NestedKind::Record),
            _ => None,
        }
    }

    fn extract_nested(
        state: &ExtractionState<'_>,
        node: TsNode<'_>,
        kind: NestedKind,
    ) -> Option<NestedTypeDecl> {
        let name_node = node.child_by_field_name("name")?;
        Some(NestedTypeDecl {
            name: state.node_text(name_node).to_string(),
            kind,
            line: name_node.start_position().row + 1,
            annotations: Self::extract_annotations(state, node),
            doc: Self::extract_javadoc(state, node),
        })
    }

    /// One declaration per declarator: `int a, b;` yields two fields.
    fn extract_fields(
        state: &ExtractionState<'_>,
        scope: &TypeScope<'_>,
        node: TsNode<'_>,
    ) -> Vec<FieldDecl> {
        let Some(type_node) = node.child_by_field_name("type") else {
            return Vec::new();
        };
        let base_type = Self::resolve_type(state, scope, type_node);
        let is_static = Self::has_modifier(node, "static");
        let annotations = Self::extract_annotations(state, node);
        let doc = Self::extract_javadoc(state, node);

        let mut fields = Vec::new();
        let mut cursor = node.walk();
        for declarator in node.children_by_field_name("declarator", &mut cursor) {
            let Some(name) = declarator.child_by_field_name("name") else {
                continue;
            };
            let extra_dims = declarator
                .child_by_field_name("dimensions")
                .map(|d| state.node_text(d).matches('[').count())
                .unwrap_or(0);
            let mut type_ref = base_type.clone();
            type_ref.array_dimensions += extra_dims;

            fields.push(FieldDecl {
                name: state.node_text(name).to_string(),
                is_static,
                type_ref,
                annotations: annotations.clone(),
                doc: doc.clone(),
            });
        }
        fields
    }

    fn extract_method(state: &ExtractionState<'_>, node: TsNode<'_>) -> Option<MethodDecl> {
        let name = node.child_by_field_name("name")?;
        Some(MethodDecl {
            name: state.node_text(name).to_string(),
            annotations: Self::extract_annotations(state, node),
            doc: Self::extract_javadoc(state, node),
        })
    }

    // -----------------------------------------------------------------------
    // Modifiers, annotations, javadoc
    // -----------------------------------------------------------------------

    fn modifiers(node: TsNode<'_>) -> Option<TsNode<'_>> {
        let mut cursor = node.walk();
        let found = node
            .named_children(&mut cursor)
            .find(|c| c.kind() == "modifiers");
        found
    }

    fn has_modifier(node: TsNode<'_>, keyword: &str) -> bool {
        let Some(modifiers) = Self::modifiers(node) else {
            return false;
        };
        let mut cursor = modifiers.walk();
        let found = modifiers.children(&mut cursor).any(|c| c.kind() == keyword);
        found
    }

    fn extract_annotations(state: &ExtractionState<'_>, node: TsNode<'_>) -> Vec<AnnotationDesc> {
        let Some(modifiers) = Self::modifiers(node) else {
            return Vec::new();
        };
        let mut annotations = Vec::new();
        let mut cursor = modifiers.walk();
        for child in modifiers.named_children(&mut cursor) {
            if matches!(child.kind(), "marker_annotation" | "annotation") {
                if let Some(annotation) = Self::extract_annotation(state, child) {
                    annotations.push(annotation);
                }
            }
        }
        annotations
    }

    fn extract_annotation(state: &ExtractionState<'_>, node: TsNode<'_>) -> Option<AnnotationDesc> {
        let name = state.node_text(node.child_by_field_name("name")?);
        let simple_name = name.rsplit('.').next().unwrap_or(name).trim();

        let mut element_values = Vec::new();
        if let Some(arguments) = node.child_by_field_name("arguments") {
            let mut cursor = arguments.walk();
            for arg in arguments.named_children(&mut cursor) {
                match arg.kind() {
                    "element_value_pair" => {
                        let (Some(key), Some(value)) = (
                            arg.child_by_field_name("key"),
                            arg.child_by_field_name("value"),
                        ) else {
                            continue;
                        };
                        element_values.push(ElementValuePair::new(
                            state.node_text(key),
                            Self::annotation_value(state, value),
                        ));
                    }
                    "line_comment" | "block_comment" => {}
                    _ => element_values
                        .push(ElementValuePair::new("value", Self::annotation_value(state, arg))),
                }
            }
        }

        Some(AnnotationDesc::with_values(simple_name, element_values))
    }

    fn annotation_value(state: &ExtractionState<'_>, node: TsNode<'_>) -> AnnotationValue {
        match node.kind() {
            "true" => AnnotationValue::Boolean(true),
            "false" => AnnotationValue::Boolean(false),
            _ => AnnotationValue::Literal(state.node_text(node).to_string()),
        }
    }

    /// Javadoc is the `/** */` comment directly preceding the declaration.
    fn extract_javadoc(state: &ExtractionState<'_>, node: TsNode<'_>) -> Documentation {
        node.prev_named_sibling()
            .filter(|sibling| sibling.kind() == "block_comment")
            .and_then(|sibling| parse_javadoc(state.node_text(sibling)))
            .unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Types
    // -----------------------------------------------------------------------

    fn type_parameter_names(state: &ExtractionState<'_>, node: TsNode<'_>) -> HashSet<String> {
        let mut names = HashSet::new();
        let Some(params) = node.child_by_field_name("type_parameters") else {
            return names;
        };
        let mut cursor = params.walk();
        for param in params.named_children(&mut cursor) {
            if param.kind() != "type_parameter" {
                continue;
            }
            let mut inner = param.walk();
            let name = param
                .named_children(&mut inner)
                .find(|c| matches!(c.kind(), "type_identifier" | "identifier"));
            if let Some(name) = name {
                names.insert(state.node_text(name).to_string());
            }
        }
        names
    }

    fn first_named_child(node: TsNode<'_>) -> Option<TsNode<'_>> {
        let mut cursor = node.walk();
        let found = node
            .named_children(&mut cursor)
            .find(|c| !matches!(c.kind(), "line_comment" | "block_comment"));
        found
    }

    fn resolve_type(state: &ExtractionState<'_>, scope: &TypeScope<'_>, node: TsNode<'_>) -> TypeRef {
        match node.kind() {
            "integral_type" | "floating_point_type" | "boolean_type" | "void_type" => {
                TypeRef::primitive(state.node_text(node))
            }
            "type_identifier" => Self::resolve_simple_name(state, scope, state.node_text(node)),
            "scoped_type_identifier" => {
                let text: String = state
                    .node_text(node)
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();
                Self::resolve_scoped_name(state, scope, &text)
            }
            "generic_type" => {
                let mut cursor = node.walk();
                let children: Vec<TsNode<'_>> = node.named_children(&mut cursor).collect();
                let mut base = children
                    .iter()
                    .find(|c| matches!(c.kind(), "type_identifier" | "scoped_type_identifier"))
                    .map(|c| Self::resolve_type(state, scope, *c))
                    .unwrap_or_else(|| TypeRef::declared(&state.package, state.node_text(node)));
                if let Some(args) = children.iter().find(|c| c.kind() == "type_arguments") {
                    let mut arg_cursor = args.walk();
                    base.type_arguments = args
                        .named_children(&mut arg_cursor)
                        .filter(|c| !matches!(c.kind(), "line_comment" | "block_comment"))
                        .map(|arg| Self::resolve_type(state, scope, arg))
                        .collect();
                }
                base
            }
            "array_type" => {
                let dimensions = node
                    .child_by_field_name("dimensions")
                    .map(|d| state.node_text(d).matches('[').count())
                    .unwrap_or(1);
                match node.child_by_field_name("element") {
                    Some(element) => {
                        let element = Self::resolve_type(state, scope, element);
                        let total = element.array_dimensions + dimensions;
                        element.with_array_dimensions(total)
                    }
                    None => TypeRef::declared(&state.package, state.node_text(node)),
                }
            }
            "wildcard" => {
                let mut cursor = node.walk();
                let children: Vec<TsNode<'_>> = node.named_children(&mut cursor).collect();
                let kind = if children.iter().any(|c| c.kind() == "super") {
                    BoundKind::Super
                } else {
                    BoundKind::Extends
                };
                let bound = children
                    .iter()
                    .find(|c| {
                        !matches!(
                            c.kind(),
                            "super" | "annotation" | "marker_annotation" | "line_comment" | "block_comment"
                        )
                    })
                    .map(|c| (kind, Self::resolve_type(state, scope, *c)));
                TypeRef::wildcard(bound)
            }
            "annotated_type" => {
                let mut cursor = node.walk();
                let inner = node
                    .named_children(&mut cursor)
                    .filter(|c| !matches!(c.kind(), "annotation" | "marker_annotation"))
                    .last();
                match inner {
                    Some(inner) => Self::resolve_type(state, scope, inner),
                    None => TypeRef::declared(&state.package, state.node_text(node)),
                }
            }
            _ => TypeRef::declared(&state.package, state.node_text(node)),
        }
    }

    /// Resolves an unqualified type name: type parameters, then nested types
    /// of the class, then imports, then `java.lang`, then the current package.
    fn resolve_simple_name(state: &ExtractionState<'_>, scope: &TypeScope<'_>, name: &str) -> TypeRef {
        if scope.type_params.contains(name) {
            return TypeRef::type_variable(name);
        }
        if scope.nested.contains(name) {
            return TypeRef::nested(&state.package, scope.class_name, name);
        }
        let imported = state
            .imported_types
            .iter()
            .find(|path| path.rsplit('.').next() == Some(name));
        if let Some(path) = imported {
            return split_qualified_name(path);
        }
        if JAVA_LANG_TYPES.contains(&name) {
            return TypeRef::declared(BASE_PACKAGE, name);
        }
        TypeRef::declared(&state.package, name)
    }

    /// Resolves a dotted name: either a fully qualified one
    /// (`java.util.List`) or a nested one (`Map.Entry`).
    fn resolve_scoped_name(state: &ExtractionState<'_>, scope: &TypeScope<'_>, text: &str) -> TypeRef {
        let segments: Vec<&str> = text.split('.').collect();
        match segments.as_slice() {
            [first, .., enclosing, simple_name] if starts_uppercase(first) => {
                let outer = Self::resolve_simple_name(state, scope, first);
                let package = outer.package().unwrap_or(&state.package).to_string();
                TypeRef::nested(package, *enclosing, *simple_name)
            }
            [first, simple_name] if starts_uppercase(first) => {
                let outer = Self::resolve_simple_name(state, scope, first);
                let package = outer.package().unwrap_or(&state.package).to_string();
                TypeRef::nested(package, *first, *simple_name)
            }
            [single] => Self::resolve_simple_name(state, scope, single),
            _ => split_qualified_name(text),
        }
    }
}

fn starts_uppercase(segment: &str) -> bool {
    segment.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Splits `a.b.Outer.Inner` into package `a.b`, enclosing `Outer` and simple
/// name `Inner`, following the Java capitalization convention.
fn split_qualified_name(path: &str) -> TypeRef {
    let segments: Vec<&str> = path.split('.').collect();
    let class_start = segments
        .iter()
        .position(|s| starts_uppercase(s))
        .unwrap_or(segments.len().saturating_sub(1));
    let package = segments[..class_start].join(".");
    let classes = &segments[class_start..];
    match classes {
        [.., outer, inner] => TypeRef::nested(package, *outer, *inner),
        [simple] => TypeRef::declared(package, *simple),
        [] => TypeRef::declared(package, path),
    }
}
