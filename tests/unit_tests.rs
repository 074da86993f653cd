//! Scenario tests for type-variable resolution across a metadata graph.

use std::sync::Arc;

use reflect_meta::{
    CtorDecl, DeclHash, DeclRegistry, FieldDecl, MethodDecl, ResolveError, TypeDecl,
    TypeParamSpec, TypeUse, TypeVarRef,
};

/// A class `Box<T extends Object>` with two non-generic methods.
fn generic_class_with_methods() -> (DeclRegistry, DeclHash, DeclHash, DeclHash) {
    let mut registry = DeclRegistry::new();
    let class = registry
        .register_type(
            TypeDecl::class("Box")
                .with_type_param(TypeParamSpec::new("T").with_bound(TypeUse::concrete("Object"))),
        )
        .unwrap();
    let first = registry
        .register_method(MethodDecl::new(class, "first", vec![]))
        .unwrap();
    let second = registry
        .register_method(MethodDecl::new(class, "second", vec![]))
        .unwrap();
    (registry, class, first, second)
}

#[test]
fn references_from_different_use_sites_are_equal() {
    let (registry, class, m1, m2) = generic_class_with_methods();

    let r1 = TypeVarRef::use_site(m1, "T");
    let r2 = TypeVarRef::use_site(m2, "T");
    assert_ne!(r1.use_site_decl(), r2.use_site_decl());

    assert!(r1.same_variable(&r2, &registry).unwrap());
    assert_eq!(r1.declaring_decl(&registry).unwrap(), class);
    assert_eq!(r2.declaring_decl(&registry).unwrap(), class);
    assert_eq!(
        r1.identity_hash(&registry).unwrap(),
        r2.identity_hash(&registry).unwrap()
    );
}

#[test]
fn use_site_reference_equals_the_formal() {
    let (registry, class, m1, _) = generic_class_with_methods();

    let reference = TypeVarRef::use_site(m1, "T");
    let formal = &registry.get(class).unwrap().type_parameters()[0];
    assert!(reference.same_variable(formal, &registry).unwrap());
}

#[test]
fn same_name_different_declarations_are_not_equal() {
    let mut registry = DeclRegistry::new();
    let class = registry
        .register_type(TypeDecl::class("A").with_type_param(TypeParamSpec::new("T")))
        .unwrap();
    // A generic method redeclaring the name T.
    let method = registry
        .register_method(MethodDecl::new(class, "m", vec![]).with_type_param(TypeParamSpec::new("T")))
        .unwrap();
    let plain = registry
        .register_method(MethodDecl::new(class, "plain", vec![]))
        .unwrap();

    // Anchored at the generic method, the method's own T wins.
    let at_method = TypeVarRef::use_site(method, "T");
    // Anchored at the plain method, the walk reaches the class's T.
    let at_plain = TypeVarRef::use_site(plain, "T");

    assert_eq!(at_method.declaring_decl(&registry).unwrap(), method);
    assert_eq!(at_plain.declaring_decl(&registry).unwrap(), class);
    assert!(!at_method.same_variable(&at_plain, &registry).unwrap());
}

#[test]
fn resolution_is_idempotent() {
    let (registry, class, m1, _) = generic_class_with_methods();

    let reference = TypeVarRef::use_site(m1, "T");
    let declaring1 = reference.declaring_decl(&registry).unwrap();
    let bounds1 = reference.bounds(&registry).unwrap();

    // The second round is answered by the cache: an empty registry cannot
    // walk anything, so matching results prove no traversal happened.
    let empty = DeclRegistry::new();
    let declaring2 = reference.declaring_decl(&empty).unwrap();
    let bounds2 = reference.bounds(&empty).unwrap();

    assert_eq!(declaring1, class);
    assert_eq!(declaring1, declaring2);
    assert_eq!(bounds1, bounds2);
}

#[test]
fn bounds_are_defensively_copied() {
    let (registry, _, m1, _) = generic_class_with_methods();

    let reference = TypeVarRef::use_site(m1, "T");
    let mut first = reference.bounds(&registry).unwrap();
    assert_eq!(first.len(), 1);
    first.push(TypeUse::concrete("Injected"));
    first.remove(0);

    let second = reference.bounds(&registry).unwrap();
    assert_eq!(second, vec![TypeUse::concrete("Object")]);
}

#[test]
fn method_level_declaration_wins_over_class() {
    let mut registry = DeclRegistry::new();
    let class = registry.register_type(TypeDecl::class("A")).unwrap();
    let method = registry
        .register_method(MethodDecl::new(class, "m", vec![]).with_type_param(TypeParamSpec::new("T")))
        .unwrap();

    let reference = TypeVarRef::use_site(method, "T");
    assert_eq!(reference.declaring_decl(&registry).unwrap(), method);
    assert_ne!(reference.declaring_decl(&registry).unwrap(), class);
}

#[test]
fn local_type_walks_through_its_enclosing_method() {
    let mut registry = DeclRegistry::new();
    let class = registry.register_type(TypeDecl::class("A")).unwrap();
    let method = registry
        .register_method(MethodDecl::new(class, "m", vec![]).with_type_param(TypeParamSpec::new("T")))
        .unwrap();
    // Non-generic local type B declared inside m.
    let local = registry
        .register_type(
            TypeDecl::class("A$1B")
                .with_enclosing_type(class)
                .with_enclosing_method(method),
        )
        .unwrap();

    // B -> m -> match; the method's T is found before the outer type is
    // even considered.
    let reference = TypeVarRef::use_site(local, "T");
    assert_eq!(reference.declaring_decl(&registry).unwrap(), method);
}

#[test]
fn local_type_walks_through_its_enclosing_constructor() {
    let mut registry = DeclRegistry::new();
    let class = registry.register_type(TypeDecl::class("A")).unwrap();
    let ctor = registry
        .register_constructor(CtorDecl::new(class, vec![]).with_type_param(TypeParamSpec::new("U")))
        .unwrap();
    let local = registry
        .register_type(
            TypeDecl::class("A$1Local")
                .with_enclosing_type(class)
                .with_enclosing_constructor(ctor),
        )
        .unwrap();

    let reference = TypeVarRef::use_site(local, "U");
    assert_eq!(reference.declaring_decl(&registry).unwrap(), ctor);
}

#[test]
fn deep_nesting_reaches_the_outermost_type() {
    let mut registry = DeclRegistry::new();
    let outer = registry
        .register_type(TypeDecl::class("Outer").with_type_param(TypeParamSpec::new("T")))
        .unwrap();
    let mid = registry
        .register_type(TypeDecl::class("Outer$Mid").with_enclosing_type(outer))
        .unwrap();
    let inner = registry
        .register_type(TypeDecl::class("Outer$Mid$Inner").with_enclosing_type(mid))
        .unwrap();
    let method = registry
        .register_method(MethodDecl::new(inner, "run", vec![]))
        .unwrap();

    // method -> Inner -> Mid -> Outer
    let reference = TypeVarRef::use_site(method, "T");
    assert_eq!(reference.declaring_decl(&registry).unwrap(), outer);
}

#[test]
fn nearest_enclosing_declaration_shadows_outer_ones() {
    let mut registry = DeclRegistry::new();
    let outer = registry
        .register_type(TypeDecl::class("Outer").with_type_param(TypeParamSpec::new("T")))
        .unwrap();
    // Inner redeclares T; first match during the outward walk wins.
    let inner = registry
        .register_type(
            TypeDecl::class("Outer$Inner")
                .with_enclosing_type(outer)
                .with_type_param(TypeParamSpec::new("T")),
        )
        .unwrap();
    let method = registry
        .register_method(MethodDecl::new(inner, "get", vec![]))
        .unwrap();

    let reference = TypeVarRef::use_site(method, "T");
    assert_eq!(reference.declaring_decl(&registry).unwrap(), inner);
}

#[test]
fn self_referential_bound_resolves_without_recursion() {
    let mut registry = DeclRegistry::new();

    // <T extends Comparable<T>> - the bound embeds a use-site reference to
    // the very parameter being declared. Hashes are deterministic, so the
    // embedded reference can be anchored before the class is registered.
    let box_hash = DeclHash::from_type_name("Box");
    let embedded = Arc::new(TypeVarRef::use_site(box_hash, "T"));
    let bound = TypeUse::parameterized("Comparable", vec![TypeUse::variable(Arc::clone(&embedded))]);

    let class = registry
        .register_type(TypeDecl::class("Box").with_type_param(TypeParamSpec::new("T").with_bound(bound)))
        .unwrap();
    assert_eq!(class, box_hash);

    let reference = TypeVarRef::use_site(class, "T");
    let bounds = reference.bounds(&registry).unwrap();
    assert_eq!(bounds.len(), 1);
    assert_eq!(bounds[0].to_string(), "Comparable<T>");

    // The embedded reference was NOT resolved as a side effect, and the
    // returned bound still carries the very same reference object.
    assert!(!embedded.is_resolved());
    let TypeUse::Parameterized { args, .. } = &bounds[0] else {
        panic!("expected a parameterized bound");
    };
    let inner = args[0].as_variable().expect("expected a variable argument");
    assert!(Arc::ptr_eq(inner, &embedded));

    // Inspecting it now resolves it to the same formal declaration.
    assert_eq!(embedded.declaring_decl(&registry).unwrap(), class);
    assert!(embedded.same_variable(&reference, &registry).unwrap());
}

#[test]
fn undeclared_name_fails_with_unresolvable_reference() {
    let (registry, _, m1, _) = generic_class_with_methods();

    let reference = TypeVarRef::use_site(m1, "X");
    let err = reference.bounds(&registry).unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnresolvableReference {
            name: "X".to_string(),
            anchor: m1,
        }
    );

    // Never an empty-bounds fallback: the other accessor fails too.
    assert!(reference.declaring_decl(&registry).is_err());
    assert!(!reference.is_resolved());
}

#[test]
fn equality_propagates_resolution_failure() {
    let (registry, _, m1, m2) = generic_class_with_methods();

    let good = TypeVarRef::use_site(m1, "T");
    let bad = TypeVarRef::use_site(m2, "X");
    assert!(good.same_variable(&bad, &registry).is_err());
    assert!(bad.identity_hash(&registry).is_err());
}

#[test]
fn name_and_display_never_resolve() {
    let (registry, _, m1, _) = generic_class_with_methods();

    let reference = TypeVarRef::use_site(m1, "X");
    assert_eq!(reference.name(), "X");
    assert_eq!(reference.to_string(), "X");
    assert!(!reference.is_resolved());

    // Even after a failed resolution attempt both stay available.
    let _ = reference.bounds(&registry);
    assert_eq!(reference.name(), "X");
    assert_eq!(reference.to_string(), "X");
}

#[test]
fn field_anchor_is_an_unsupported_scope() {
    let mut registry = DeclRegistry::new();
    let class = registry
        .register_type(TypeDecl::class("Holder").with_type_param(TypeParamSpec::new("T")))
        .unwrap();
    let field = registry
        .register_field(FieldDecl::new(class, "value", TypeUse::concrete("Object")))
        .unwrap();

    // Fields declare no parameters and cannot step outward.
    let reference = TypeVarRef::use_site(field, "T");
    assert!(matches!(
        reference.declaring_decl(&registry).unwrap_err(),
        ResolveError::UnsupportedConstructKind { kind: "field", .. }
    ));
}

#[test]
fn concurrent_first_access_is_benign() {
    let (registry, class, m1, _) = generic_class_with_methods();
    let reference = Arc::new(TypeVarRef::use_site(m1, "T"));

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let reference = Arc::clone(&reference);
            let registry = &registry;
            scope.spawn(move || {
                assert_eq!(reference.declaring_decl(registry).unwrap(), class);
            });
        }
    });

    assert!(reference.is_resolved());
    assert_eq!(reference.declaring_decl(&registry).unwrap(), class);
}
