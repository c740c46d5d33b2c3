use std::collections::BTreeSet;

use serde::{Serialize, Serializer};

use crate::cleanup::imports::order_imports;

/// Imports every cleaned-up bean starts with, whether or not the class uses them.
pub const DEFAULT_IMPORTS: [&str; 8] = [
    "import static com.google.common.base.Preconditions.checkNotNull;",
    "import java.util.Collections;",
    "import org.jclouds.javax.annotation.Nullable;",
    "import com.google.common.collect.ImmutableList;",
    "import com.google.common.collect.ImmutableMap;",
    "import com.google.common.collect.ImmutableSet;",
    "import com.google.common.base.Objects;",
    "import com.google.common.base.Objects.ToStringHelper;",
];

/// Normalized model of one class, ready to be printed back out as source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bean {
    package_name: String,
    type_name: String,
    super_class: Option<String>,
    is_abstract: bool,
    annotations: Vec<String>,
    javadoc: Vec<String>,
    #[serde(serialize_with = "serialize_grouped_imports")]
    imports: BTreeSet<String>,
    instance_fields: Vec<InstanceField>,
    static_fields: Vec<ClassField>,
    inner_classes: Vec<InnerClass>,
}

impl Bean {
    pub fn new(
        package_name: impl Into<String>,
        is_abstract: bool,
        type_name: impl Into<String>,
        super_class: Option<String>,
        annotations: Vec<String>,
        javadoc: Vec<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            type_name: type_name.into(),
            super_class,
            is_abstract,
            annotations,
            javadoc,
            imports: DEFAULT_IMPORTS.iter().map(|s| s.to_string()).collect(),
            instance_fields: Vec::new(),
            static_fields: Vec::new(),
            inner_classes: Vec::new(),
        }
    }

    pub fn add_instance_field(&mut self, field: InstanceField) {
        self.instance_fields.push(field);
    }

    pub fn add_class_field(&mut self, field: ClassField) {
        self.static_fields.push(field);
    }

    pub fn add_imports<I, S>(&mut self, imports: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports.extend(imports.into_iter().map(Into::into));
    }

    pub fn add_inner_class(&mut self, inner_class: InnerClass) {
        self.inner_classes.push(inner_class);
    }

    /// The accumulated import statements, in no particular display order.
    pub fn raw_imports(&self) -> &BTreeSet<String> {
        &self.imports
    }

    /// Import statements grouped for display, each group followed by a blank line.
    pub fn imports(&self) -> Vec<String> {
        order_imports(&self.imports)
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn super_class(&self) -> Option<&str> {
        self.super_class.as_deref()
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_subclass(&self) -> bool {
        self.super_class.is_some()
    }

    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn javadoc(&self) -> &[String] {
        &self.javadoc
    }

    pub fn instance_fields(&self) -> &[InstanceField] {
        &self.instance_fields
    }

    pub fn static_fields(&self) -> &[ClassField] {
        &self.static_fields
    }

    pub fn inner_classes(&self) -> &[InnerClass] {
        &self.inner_classes
    }
}

fn serialize_grouped_imports<S>(imports: &BTreeSet<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(order_imports(imports))
}

/// A non-static field of a bean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceField {
    name: String,
    #[serde(rename = "type")]
    field_type: String,
    nullable: bool,
    annotations: Vec<String>,
    javadoc: Vec<String>,
}

impl InstanceField {
    pub fn new(
        name: impl Into<String>,
        field_type: impl Into<String>,
        nullable: bool,
        annotations: Vec<String>,
        javadoc: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            nullable,
            annotations,
            javadoc,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn javadoc(&self) -> &[String] {
        &self.javadoc
    }

    /// Name of the conventional getter, e.g. `getTasks` or `isEnabled`.
    pub fn accessor_name(&self) -> String {
        let prefix = if self.field_type == "boolean" { "is" } else { "get" };
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => format!("{}{}{}", prefix, first.to_uppercase(), chars.as_str()),
            None => prefix.to_string(),
        }
    }

    /// Appends annotations picked up from an accessor method.
    pub fn add_annotations<I>(&mut self, annotations: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.annotations.extend(annotations);
    }

    /// Replaces the documentation with a merged version. An empty merge keeps
    /// the existing lines.
    pub fn adjust_javadoc(&mut self, javadoc: Vec<String>) {
        if !javadoc.is_empty() {
            self.javadoc = javadoc;
        }
    }
}

/// A static field of a bean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassField {
    name: String,
    #[serde(rename = "type")]
    field_type: String,
    annotations: Vec<String>,
    javadoc: Vec<String>,
}

impl ClassField {
    pub fn new(
        name: impl Into<String>,
        field_type: impl Into<String>,
        annotations: Vec<String>,
        javadoc: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            annotations,
            javadoc,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn javadoc(&self) -> &[String] {
        &self.javadoc
    }
}

/// A nested type carried over verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InnerClass {
    keyword: String,
    name: String,
    annotations: Vec<String>,
    javadoc: Vec<String>,
    /// Trimmed body lines, without the enclosing braces.
    content: Vec<String>,
}

impl InnerClass {
    pub fn new(
        keyword: impl Into<String>,
        name: impl Into<String>,
        annotations: Vec<String>,
        javadoc: Vec<String>,
        content: Vec<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            name: name.into(),
            annotations,
            javadoc,
            content,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotations(&self) -> &[String] {
        &self.annotations
    }

    pub fn javadoc(&self) -> &[String] {
        &self.javadoc
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }
}
