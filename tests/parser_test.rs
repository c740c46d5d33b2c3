use std::path::{Path, PathBuf};

use beanclean::cleanup::ClassDeclParser;
use beanclean::declaration::*;
use beanclean::errors::CleanupError;
use beanclean::types::DEFAULT_IMPORTS;
use tempfile::TempDir;

const TASK_SOURCE: &str = r#"package org.example.domain;

import java.util.Set;
import javax.xml.bind.annotation.XmlElement;

/**
 * A task.
 */
public class Task extends Resource {
   public static enum Status {
      QUEUED,
      RUNNING,
      DONE
   }

   public static class Builder {
      private long id;
   }

   @XmlElement(name = "Id", required = true)
   private long id;
   private Set<String> tags;
   private java.net.URI href;

   public long getId() {
      return id;
   }
}
"#;

fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn task_decl(source_path: PathBuf) -> ClassDecl {
    let mut class = ClassDecl::new("org.example.domain", "Task", source_path);
    class.superclass = Some(TypeRef::declared("org.example.domain", "Resource"));
    class.doc = Documentation::text("A task.");
    class.nested_types.push(NestedTypeDecl {
        name: "Status".to_string(),
        kind: NestedKind::Enum,
        line: 10,
        annotations: Vec::new(),
        doc: Documentation::default(),
    });
    class.nested_types.push(NestedTypeDecl {
        name: "Builder".to_string(),
        kind: NestedKind::Class,
        line: 16,
        annotations: Vec::new(),
        doc: Documentation::default(),
    });

    let mut id = FieldDecl::new("id", TypeRef::primitive("long"));
    id.annotations.push(AnnotationDesc::with_values(
        "XmlElement",
        vec![
            ElementValuePair::new("name", AnnotationValue::Literal("\"Id\"".to_string())),
            ElementValuePair::new("required", AnnotationValue::Boolean(true)),
        ],
    ));
    class.fields.push(id);
    class.fields.push(FieldDecl::new(
        "tags",
        TypeRef::declared("java.util", "Set")
            .with_arguments(vec![TypeRef::declared("java.lang", "String")]),
    ));
    class
        .fields
        .push(FieldDecl::new("href", TypeRef::declared("java.net", "URI")));

    let mut getter = MethodDecl::new("getId");
    getter.doc = Documentation::new(None, vec![Tag::new("@since", "1.0")]);
    class.methods.push(getter);
    class
}

#[test]
fn test_parse_bean_basics() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path(), "Task.java", TASK_SOURCE);
    let bean = ClassDeclParser::new().parse_bean(&task_decl(path)).unwrap();

    assert_eq!(bean.package_name(), "org.example.domain");
    assert_eq!(bean.type_name(), "Task");
    assert_eq!(bean.super_class(), Some("Resource"));
    assert!(bean.is_subclass());
    assert!(!bean.is_abstract());
    assert_eq!(bean.javadoc(), ["A task."]);
}

#[test]
fn test_parse_bean_recovers_imports() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path(), "Task.java", TASK_SOURCE);
    let bean = ClassDeclParser::new().parse_bean(&task_decl(path)).unwrap();

    assert!(bean.raw_imports().contains("import java.util.Set;"));
    assert!(bean
        .raw_imports()
        .contains("import javax.xml.bind.annotation.XmlElement;"));
    assert_eq!(bean.raw_imports().len(), DEFAULT_IMPORTS.len() + 2);
}

#[test]
fn test_parse_bean_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path(), "Task.java", TASK_SOURCE);
    let bean = ClassDeclParser::new().parse_bean(&task_decl(path)).unwrap();

    let fields = bean.instance_fields();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].name(), "id");
    assert_eq!(fields[0].field_type(), "long");
    assert!(!fields[0].is_nullable());
    assert_eq!(fields[0].annotations(), ["@XmlElement(name=\"Id\", required=true)"]);
    assert_eq!(fields[0].javadoc(), ["@since 1.0"]);

    assert_eq!(fields[1].field_type(), "Set<String>");
    assert_eq!(fields[2].field_type(), "java.net.URI");
}

#[test]
fn test_parse_bean_inner_classes_skip_builders() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path(), "Task.java", TASK_SOURCE);
    let bean = ClassDeclParser::new().parse_bean(&task_decl(path)).unwrap();

    let inner = bean.inner_classes();
    assert_eq!(inner.len(), 1);
    assert_eq!(inner[0].keyword(), "public static enum");
    assert_eq!(inner[0].name(), "Status");
    assert_eq!(inner[0].content(), ["QUEUED,", "RUNNING,", "DONE"]);
}

#[test]
fn test_plain_field_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        dir.path(),
        "Counter.java",
        "package org.example;\n\npublic class Counter {\n   private long id;\n}\n",
    );
    let mut class = ClassDecl::new("org.example", "Counter", path);
    class.superclass = Some(TypeRef::declared("java.lang", "Object"));
    class.fields.push(FieldDecl::new("id", TypeRef::primitive("long")));

    let bean = ClassDeclParser::new().parse_bean(&class).unwrap();
    assert!(!bean.is_subclass());
    assert_eq!(bean.javadoc(), ["Class Counter"]);
    assert_eq!(bean.raw_imports().len(), DEFAULT_IMPORTS.len());

    let field = &bean.instance_fields()[0];
    assert_eq!(field.name(), "id");
    assert_eq!(field.field_type(), "long");
    assert!(!field.is_nullable());
    assert!(field.annotations().is_empty());
    assert!(field.javadoc().is_empty());
}

#[test]
fn test_accessor_metadata_is_merged() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path(), "Named.java", "public class Named {}\n");
    let mut class = ClassDecl::new("org.example", "Named", path);

    let mut name = FieldDecl::new("name", TypeRef::declared("java.lang", "String"));
    name.doc = Documentation::text("Field doc.");
    class.fields.push(name);

    let mut getter = MethodDecl::new("getName");
    getter.annotations.push(AnnotationDesc::marker("Nullable"));
    getter.doc = Documentation::new(None, vec![Tag::new("@since", "1.0")]);
    class.methods.push(getter);

    let mut fluent = MethodDecl::new("name");
    fluent.annotations.push(AnnotationDesc::marker("Deprecated"));
    class.methods.push(fluent);

    class.methods.push(MethodDecl::new("toString"));

    let bean = ClassDeclParser::new().parse_bean(&class).unwrap();
    let field = &bean.instance_fields()[0];
    assert_eq!(field.annotations(), ["@Nullable", "@Deprecated"]);
    assert_eq!(field.javadoc(), ["Field doc.", "", "@since 1.0"]);
    // nullability only looks at the field itself
    assert!(!field.is_nullable());
}

#[test]
fn test_static_fields_are_class_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path(), "Constants.java", "public class Constants {}\n");
    let mut class = ClassDecl::new("org.example", "Constants", path);
    let mut serial = FieldDecl::new("serialVersionUID", TypeRef::primitive("long"));
    serial.is_static = true;
    serial.doc = Documentation::text("Serial version.");
    class.fields.push(serial);

    let bean = ClassDeclParser::new().parse_bean(&class).unwrap();
    assert!(bean.instance_fields().is_empty());
    assert_eq!(bean.static_fields().len(), 1);
    assert_eq!(bean.static_fields()[0].field_type(), "long");
    assert_eq!(bean.static_fields()[0].javadoc(), ["Serial version."]);
}

#[test]
fn test_class_doc_with_tags() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path(), "Tagged.java", "public class Tagged {}\n");
    let mut class = ClassDecl::new("org.example", "Tagged", path);
    class.doc = Documentation::new(None, vec![Tag::new("@author", "someone")]);
    class.annotations.push(AnnotationDesc::with_values(
        "XmlRootElement",
        vec![ElementValuePair::new(
            "name",
            AnnotationValue::Literal("\"Tagged\"".to_string()),
        )],
    ));

    let bean = ClassDeclParser::new().parse_bean(&class).unwrap();
    assert_eq!(bean.javadoc(), ["Class Tagged", "", "@author someone"]);
    assert_eq!(bean.annotations(), ["@XmlRootElement(name=\"Tagged\")"]);
}

#[test]
fn test_missing_source_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let class = ClassDecl::new("org.example", "Gone", dir.path().join("Gone.java"));
    let err = ClassDeclParser::new().parse_bean(&class).unwrap_err();
    assert!(matches!(err, CleanupError::SourceRead { .. }));
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().contains("Gone.java"));
}
