//! Read-only declaration tree consumed by the cleanup passes.
//!
//! These types describe what a source parser knows about a class: names,
//! annotations, javadoc text and block tags, type references and source
//! positions. Any front end can produce them; the crate ships a tree-sitter
//! based one in [`crate::extraction`].
use std::fmt;
use std::path::PathBuf;

/// Qualified name of the implicit root of every class hierarchy.
pub const OBJECT_TYPE: &str = "java.lang.Object";

/// Package whose types are always visible without an import.
pub const BASE_PACKAGE: &str = "java.lang";

/// Common view over every documented, annotated declaration.
pub trait ProgramElement {
    /// Simple name of the element.
    fn name(&self) -> &str;

    /// Annotations in declaration order.
    fn annotations(&self) -> &[AnnotationDesc];

    /// Free-text documentation, without block tags.
    fn comment_text(&self) -> Option<&str>;

    /// Block tags (`@since`, `@see`, ...) in declaration order.
    fn tags(&self) -> &[Tag];
}

/// A javadoc block tag such as `@since 1.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name including the leading `@`.
    pub name: String,
    pub text: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Documentation attached to a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
    pub text: Option<String>,
    pub tags: Vec<Tag>,
}

impl Documentation {
    pub fn new(text: Option<String>, tags: Vec<Tag>) -> Self {
        Self { text, tags }
    }

    /// Documentation with free text only.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            tags: Vec::new(),
        }
    }
}

/// Value of a single annotation element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    Boolean(bool),
    /// Any other value, kept as its source text (`"Task"`, `Foo.class`, `{1, 2}`).
    Literal(String),
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationValue::Boolean(b) => write!(f, "{}", b),
            AnnotationValue::Literal(s) => f.write_str(s),
        }
    }
}

/// One `name=value` element of an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementValuePair {
    pub name: String,
    pub value: AnnotationValue,
}

impl ElementValuePair {
    pub fn new(name: impl Into<String>, value: AnnotationValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for ElementValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// An annotation usage on a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationDesc {
    /// Simple name of the annotation type, e.g. `XmlElement`.
    pub type_name: String,
    pub element_values: Vec<ElementValuePair>,
}

impl AnnotationDesc {
    /// A marker annotation without elements.
    pub fn marker(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            element_values: Vec::new(),
        }
    }

    pub fn with_values(type_name: impl Into<String>, element_values: Vec<ElementValuePair>) -> Self {
        Self {
            type_name: type_name.into(),
            element_values,
        }
    }

    /// Returns the value of the named element, if present.
    pub fn element(&self, name: &str) -> Option<&AnnotationValue> {
        self.element_values
            .iter()
            .find(|pair| pair.name == name)
            .map(|pair| &pair.value)
    }
}

/// Direction of a wildcard bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Extends,
    Super,
}

impl BoundKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundKind::Extends => "extends",
            BoundKind::Super => "super",
        }
    }
}

/// What a [`TypeRef`] refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Primitive,
    TypeVariable,
    /// A class, interface or enum living in `package`, nested inside
    /// `enclosing` when that is set.
    Declared {
        package: String,
        enclosing: Option<String>,
    },
    Wildcard {
        bound: Option<(BoundKind, Box<TypeRef>)>,
    },
}

/// A reference to a type as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub simple_name: String,
    pub kind: TypeKind,
    pub type_arguments: Vec<TypeRef>,
    pub array_dimensions: usize,
}

impl TypeRef {
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Primitive)
    }

    pub fn type_variable(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::TypeVariable)
    }

    pub fn declared(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self::with_kind(
            simple_name,
            TypeKind::Declared {
                package: package.into(),
                enclosing: None,
            },
        )
    }

    pub fn nested(
        package: impl Into<String>,
        enclosing: impl Into<String>,
        simple_name: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            simple_name,
            TypeKind::Declared {
                package: package.into(),
                enclosing: Some(enclosing.into()),
            },
        )
    }

    pub fn wildcard(bound: Option<(BoundKind, TypeRef)>) -> Self {
        Self::with_kind(
            "?",
            TypeKind::Wildcard {
                bound: bound.map(|(kind, ty)| (kind, Box::new(ty))),
            },
        )
    }

    fn with_kind(simple_name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            simple_name: simple_name.into(),
            kind,
            type_arguments: Vec::new(),
            array_dimensions: 0,
        }
    }

    /// Adds type arguments, making this a parameterized type.
    pub fn with_arguments(mut self, type_arguments: Vec<TypeRef>) -> Self {
        self.type_arguments = type_arguments;
        self
    }

    pub fn with_array_dimensions(mut self, dimensions: usize) -> Self {
        self.array_dimensions = dimensions;
        self
    }

    /// Containing package for declared types.
    pub fn package(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Declared { package, .. } => Some(package),
            _ => None,
        }
    }

    /// Fully qualified name without type arguments, e.g. `java.util.Map.Entry`.
    pub fn qualified_name(&self) -> String {
        match &self.kind {
            TypeKind::Declared { package, enclosing } => {
                let mut parts: Vec<&str> = Vec::new();
                if !package.is_empty() {
                    parts.push(package);
                }
                if let Some(outer) = enclosing {
                    parts.push(outer);
                }
                parts.push(&self.simple_name);
                parts.join(".")
            }
            _ => self.simple_name.clone(),
        }
    }
}

/// Kind keyword of a nested type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NestedKind {
    Class,
    Enum,
    Interface,
    Record,
}

impl NestedKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            NestedKind::Class => "class",
            NestedKind::Enum => "enum",
            NestedKind::Interface => "interface",
            NestedKind::Record => "record",
        }
    }
}

/// A field of a class.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: String,
    pub is_static: bool,
    pub type_ref: TypeRef,
    pub annotations: Vec<AnnotationDesc>,
    pub doc: Documentation,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            type_ref,
            annotations: Vec::new(),
            doc: Documentation::default(),
        }
    }
}

/// A method of a class. Only the metadata used for merging onto fields is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub name: String,
    pub annotations: Vec<AnnotationDesc>,
    pub doc: Documentation,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            doc: Documentation::default(),
        }
    }
}

/// A type declared inside a class body.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedTypeDecl {
    pub name: String,
    pub kind: NestedKind,
    /// 1-based line of the declaration in the source file.
    pub line: usize,
    pub annotations: Vec<AnnotationDesc>,
    pub doc: Documentation,
}

/// A top-level class declaration together with its members.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub package: String,
    pub is_abstract: bool,
    pub superclass: Option<TypeRef>,
    pub annotations: Vec<AnnotationDesc>,
    pub doc: Documentation,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
    pub nested_types: Vec<NestedTypeDecl>,
    /// Absolute path of the file the class was parsed from.
    pub source_path: PathBuf,
}

impl ClassDecl {
    pub fn new(
        package: impl Into<String>,
        name: impl Into<String>,
        source_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            is_abstract: false,
            superclass: None,
            annotations: Vec::new(),
            doc: Documentation::default(),
            fields: Vec::new(),
            methods: Vec::new(),
            nested_types: Vec::new(),
            source_path: source_path.into(),
        }
    }
}

macro_rules! impl_program_element {
    ($($ty:ty),*) => {
        $(
            impl ProgramElement for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn annotations(&self) -> &[AnnotationDesc] {
                    &self.annotations
                }

                fn comment_text(&self) -> Option<&str> {
                    self.doc.text.as_deref()
                }

                fn tags(&self) -> &[Tag] {
                    &self.doc.tags
                }
            }
        )*
    };
}

impl_program_element!(ClassDecl, FieldDecl, MethodDecl, NestedTypeDecl);
