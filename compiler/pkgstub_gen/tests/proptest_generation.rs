//! Property-based tests for whole runs.
//!
//! Programs are random graphs of classes spread over a few packages, where
//! each method returns some other class. The properties hold for every
//! graph: output does not depend on the worker count, every artifact
//! declares exactly the in-package closure of its exports, and nothing is
//! declared twice.

use pkgstub_gen::{GeneratorConfig, PackageArtifacts, StubGenerator};
use pkgstub_types::{PackageDb, PackageId, ProgramBuilder, SymbolTable, Type};
use proptest::prelude::*;
use std::collections::BTreeSet;

const PACKAGES: [&str; 3] = ["Alpha", "Beta", "Gamma"];

#[derive(Clone, Debug)]
struct ClassSpec {
    package: usize,
    /// Indices of the classes the methods return, modulo the class count.
    returns: Vec<usize>,
    exported: bool,
}

fn arb_class() -> impl Strategy<Value = ClassSpec> {
    (
        0..PACKAGES.len(),
        prop::collection::vec(0..32usize, 0..4),
        any::<bool>(),
    )
        .prop_map(|(package, returns, exported)| ClassSpec {
            package,
            returns,
            exported,
        })
}

fn arb_program() -> impl Strategy<Value = Vec<ClassSpec>> {
    prop::collection::vec(arb_class(), 1..16)
}

fn class_path(specs: &[ClassSpec], index: usize) -> String {
    format!("{}::C{index}", PACKAGES[specs[index].package])
}

fn build(specs: &[ClassSpec]) -> (SymbolTable, PackageDb) {
    let mut b = ProgramBuilder::new();
    let classes: Vec<_> = (0..specs.len())
        .map(|index| b.class(&class_path(specs, index)))
        .collect();
    for (index, spec) in specs.iter().enumerate() {
        for (n, &target) in spec.returns.iter().enumerate() {
            let target = classes[target % classes.len()];
            b.method(classes[index], &format!("m{n}"))
                .returns(Type::class(target));
        }
    }
    for (package, name) in PACKAGES.iter().enumerate() {
        let exports: Vec<String> = (0..specs.len())
            .filter(|&index| specs[index].package == package && specs[index].exported)
            .map(|index| class_path(specs, index))
            .collect();
        let exports: Vec<&str> = exports.iter().map(String::as_str).collect();
        b.package(name, &exports, &[]);
    }
    b.finish()
}

/// Classes the public artifact of `package` must declare.
fn expected_closure(specs: &[ClassSpec], package: usize) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut stack: Vec<usize> = (0..specs.len())
        .filter(|&index| specs[index].package == package && specs[index].exported)
        .collect();
    while let Some(index) = stack.pop() {
        if specs[index].package != package || !seen.insert(index) {
            continue;
        }
        stack.extend(specs[index].returns.iter().map(|&target| target % specs.len()));
    }
    seen.into_iter().map(|index| class_path(specs, index)).collect()
}

fn declared(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.strip_prefix("class "))
        .filter_map(|rest| rest.split(' ').next())
        .map(str::to_owned)
        .collect()
}

fn generate(table: &SymbolTable, packages: &PackageDb, workers: usize) -> Vec<(PackageId, PackageArtifacts)> {
    StubGenerator::new(table, packages, GeneratorConfig::with_workers(workers))
        .generate_all()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Any worker count yields byte-identical artifacts.
    #[test]
    fn output_is_independent_of_worker_count(specs in arb_program(), workers in 2..6usize) {
        let (table, packages) = build(&specs);
        let single = generate(&table, &packages, 1);
        let parallel = generate(&table, &packages, workers);
        prop_assert_eq!(single, parallel);
    }

    /// Each artifact declares exactly the in-package closure of its
    /// exports, once each, and never a class of another package.
    #[test]
    fn artifacts_declare_exactly_their_closure(specs in arb_program()) {
        let (table, packages) = build(&specs);
        let results = generate(&table, &packages, 2);

        for (package, (_, artifacts)) in results.iter().enumerate() {
            let expected = expected_closure(&specs, package);
            let text = artifacts.public.as_deref().unwrap_or("");
            let declared = declared(text);
            let unique: BTreeSet<String> = declared.iter().cloned().collect();

            prop_assert_eq!(declared.len(), unique.len(), "duplicate declaration in {}", text);
            prop_assert_eq!(&unique, &expected);
            let prefix = format!("{}::", PACKAGES[package]);
            prop_assert!(unique.iter().all(|name| name.starts_with(&prefix)));
            prop_assert_eq!(artifacts.public.is_some(), !expected.is_empty());
            prop_assert!(artifacts.test.is_none());
        }
    }
}
