use beanclean::types::*;

fn empty_bean(super_class: Option<&str>) -> Bean {
    Bean::new(
        "org.example",
        false,
        "Task",
        super_class.map(str::to_string),
        Vec::new(),
        vec!["Class Task".to_string()],
    )
}

#[test]
fn test_new_bean_starts_with_default_imports() {
    let bean = empty_bean(None);
    assert_eq!(bean.raw_imports().len(), DEFAULT_IMPORTS.len());
    for import in DEFAULT_IMPORTS {
        assert!(bean.raw_imports().contains(import), "missing {}", import);
    }
}

#[test]
fn test_add_imports_never_drops_defaults() {
    let mut bean = empty_bean(None);
    bean.add_imports(vec![
        "import java.util.Set;",
        "import java.util.Collections;",
    ]);
    assert_eq!(bean.raw_imports().len(), DEFAULT_IMPORTS.len() + 1);
    assert!(bean.raw_imports().contains("import java.util.Set;"));
}

#[test]
fn test_is_subclass() {
    assert!(!empty_bean(None).is_subclass());
    let bean = empty_bean(Some("BaseResource"));
    assert!(bean.is_subclass());
    assert_eq!(bean.super_class(), Some("BaseResource"));
}

#[test]
fn test_default_imports_grouped() {
    let bean = empty_bean(None);
    assert_eq!(
        bean.imports(),
        vec![
            "import static com.google.common.base.Preconditions.checkNotNull;",
            "",
            "import java.util.Collections;",
            "",
            "import org.jclouds.javax.annotation.Nullable;",
            "",
            "import com.google.common.base.Objects.ToStringHelper;",
            "import com.google.common.base.Objects;",
            "import com.google.common.collect.ImmutableList;",
            "import com.google.common.collect.ImmutableMap;",
            "import com.google.common.collect.ImmutableSet;",
            "",
        ]
    );
}

#[test]
fn test_import_grouping_is_idempotent() {
    let mut bean = empty_bean(None);
    bean.add_imports(vec![
        "import javax.xml.bind.annotation.XmlElement;",
        "import static com.google.common.base.Objects.equal;",
        "import java.util.Set;",
    ]);
    let first = bean.imports();
    let second = bean.imports();
    assert_eq!(first, second);
    assert_eq!(bean.raw_imports().len(), DEFAULT_IMPORTS.len() + 3);

    let blanks = first.iter().filter(|line| line.is_empty()).count();
    assert_eq!(blanks, 5);
    let javax = first
        .iter()
        .position(|l| l.starts_with("import javax."))
        .unwrap();
    let java = first
        .iter()
        .position(|l| l.starts_with("import java."))
        .unwrap();
    assert!(java < javax);
}

#[test]
fn test_fields_keep_insertion_order() {
    let mut bean = empty_bean(None);
    for name in ["href", "id", "name"] {
        bean.add_instance_field(InstanceField::new(name, "String", false, Vec::new(), Vec::new()));
    }
    bean.add_class_field(ClassField::new("serialVersionUID", "long", Vec::new(), Vec::new()));
    let names: Vec<_> = bean.instance_fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["href", "id", "name"]);
    assert_eq!(bean.static_fields().len(), 1);
}

#[test]
fn test_accessor_name() {
    let field = InstanceField::new("tasks", "Set<Task>", false, Vec::new(), Vec::new());
    assert_eq!(field.accessor_name(), "getTasks");
    let flag = InstanceField::new("enabled", "boolean", false, Vec::new(), Vec::new());
    assert_eq!(flag.accessor_name(), "isEnabled");
    let boxed = InstanceField::new("enabled", "Boolean", true, Vec::new(), Vec::new());
    assert_eq!(boxed.accessor_name(), "getEnabled");
}

#[test]
fn test_adjust_javadoc_keeps_existing_on_empty_merge() {
    let mut field = InstanceField::new("id", "long", false, Vec::new(), vec!["The id".to_string()]);
    field.adjust_javadoc(Vec::new());
    assert_eq!(field.javadoc(), ["The id"]);
    field.adjust_javadoc(vec!["The id".to_string(), String::new(), "@since 1.0".to_string()]);
    assert_eq!(field.javadoc().len(), 3);
}

#[test]
fn test_bean_serializes_grouped_imports() {
    let mut bean = empty_bean(Some("Resource"));
    bean.add_instance_field(InstanceField::new("id", "long", false, Vec::new(), Vec::new()));
    let json = serde_json::to_value(&bean).unwrap();
    assert_eq!(json["type_name"], "Task");
    assert_eq!(json["super_class"], "Resource");
    assert_eq!(json["instance_fields"][0]["type"], "long");
    let imports = json["imports"].as_array().unwrap();
    assert_eq!(imports.len(), bean.imports().len());
    assert_eq!(
        imports[0],
        "import static com.google.common.base.Preconditions.checkNotNull;"
    );
    assert_eq!(imports[1], "");
}
