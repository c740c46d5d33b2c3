use std::collections::BTreeSet;

use crate::declaration::{TypeKind, TypeRef, BASE_PACKAGE};

/// Shortest display form of a type given the current package and imports.
///
/// Types already in scope keep their simple name (prefixed by the enclosing
/// type when nested); everything else is qualified with its package. Type
/// arguments are resolved recursively. Two in-scope types sharing a simple
/// name are not told apart.
///
/// Nested types always keep their enclosing type, so the result is a valid
/// Java reference: `Thread.State` rather than `State`, and
/// `x.y.Outer.Inner` rather than `x.y.Inner` when out of scope.
pub fn resolve_type_name(ty: &TypeRef, current_package: &str, imports: &BTreeSet<String>) -> String {
    let mut name = match &ty.kind {
        TypeKind::Wildcard { bound: Some((kind, bound)) } => format!(
            "? {} {}",
            kind.as_str(),
            resolve_type_name(bound, current_package, imports)
        ),
        _ => remove_unnecessary_packages(ty, current_package, imports),
    };

    if !ty.type_arguments.is_empty() {
        let arguments: Vec<String> = ty
            .type_arguments
            .iter()
            .map(|arg| resolve_type_name(arg, current_package, imports))
            .collect();
        name.push('<');
        name.push_str(&arguments.join(", "));
        name.push('>');
    }

    for _ in 0..ty.array_dimensions {
        name.push_str("[]");
    }
    name
}

fn remove_unnecessary_packages(
    ty: &TypeRef,
    current_package: &str,
    imports: &BTreeSet<String>,
) -> String {
    let TypeKind::Declared { package, enclosing } = &ty.kind else {
        return ty.simple_name.clone();
    };

    let local_name = match enclosing {
        Some(outer) => format!("{}.{}", outer, ty.simple_name),
        None => ty.simple_name.clone(),
    };

    let visible = package == BASE_PACKAGE
        || package == current_package
        || is_imported(&ty.qualified_name(), package, imports)
        || enclosing
            .as_ref()
            .is_some_and(|outer| is_imported(&qualify(package, outer), package, imports));

    if visible || package.is_empty() {
        local_name
    } else {
        format!("{}.{}", package, local_name)
    }
}

fn is_imported(qualified_name: &str, package: &str, imports: &BTreeSet<String>) -> bool {
    imports.contains(&format!("import {};", qualified_name))
        || imports.contains(&format!("import {}.*;", package))
}

fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}
