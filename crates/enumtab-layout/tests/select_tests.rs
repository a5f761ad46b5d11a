use super::*;
use crate::normalize::normalize;
use enumtab_common::{IntKind, LayoutLimits, TypeDecl};

fn plan(decl: &TypeDecl) -> LayoutPlan {
    let set = normalize(decl).expect("valid input");
    select_layout(&set, &LayoutLimits::default())
}

fn gap_decl() -> TypeDecl {
    TypeDecl::from_pairs(
        "Gap",
        IntKind::I64,
        [
            ("Two", 2),
            ("Three", 3),
            ("Five", 5),
            ("Six", 6),
            ("Seven", 7),
            ("Eight", 8),
            ("Nine", 9),
            ("Eleven", 11),
        ],
    )
}

fn prime_decl() -> TypeDecl {
    let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43];
    let mut decl = TypeDecl::new("Prime", IntKind::I64);
    for p in primes {
        decl = decl.entry(format!("p{p}"), p);
    }
    decl
}

#[test]
fn test_contiguous_enum_is_single() {
    let decl = TypeDecl::from_pairs(
        "Number",
        IntKind::I64,
        [("One", 1), ("Two", 2), ("Three", 3), ("AnotherOne", 1)],
    );
    let plan = plan(&decl);
    let TableLayout::Single(table) = &plan.layout else {
        panic!("expected a single table, got {:?}", plan.layout);
    };
    assert_eq!(table.offset(), 1);
    assert_eq!(table.blob.text, "OneTwoThree");
    assert_eq!(table.blob.index, vec![0, 3, 6, 11]);
    assert_eq!(table.name_for(2), Some("Two"));
    assert_eq!(table.name_for(4), None);
}

#[test]
fn test_negative_start_is_single_with_negative_offset() {
    let decl = TypeDecl::from_pairs(
        "Num",
        IntKind::I64,
        [("m_2", -2), ("m_1", -1), ("m0", 0), ("m1", 1), ("m2", 2)],
    );
    let plan = plan(&decl);
    let TableLayout::Single(table) = &plan.layout else {
        panic!("expected a single table");
    };
    assert_eq!(table.offset(), -2);
    assert_eq!(table.name_for(-2), Some("m_2"));
    assert_eq!(table.name_for(-3), None);
}

#[test]
fn test_gaps_produce_three_ascending_ranges() {
    let plan = plan(&gap_decl());
    assert_eq!(plan.runs.len(), 3);

    let TableLayout::Multi(tables) = &plan.layout else {
        panic!("expected a multi-run table, got {:?}", plan.layout);
    };
    let ranges: Vec<_> = tables.iter().map(|t| (t.run.first, t.run.last)).collect();
    assert_eq!(ranges, vec![(2, 3), (5, 9), (11, 11)]);
    assert_eq!(tables[0].blob.text, "TwoThree");
    assert_eq!(tables[1].blob.index, vec![0, 4, 7, 12, 17, 21]);
    assert_eq!(tables[2].blob.text, "Eleven");
    assert!(plan.cost.runs_cost < plan.cost.sparse_cost);
}

#[test]
fn test_unsigned_wrap_is_multi_with_separate_tables() {
    let decl = TypeDecl::from_pairs(
        "Unum",
        IntKind::U64,
        [("m_2", 253), ("m_1", 254), ("m0", 0), ("m1", 1), ("m2", 2)],
    );
    let plan = plan(&decl);
    let TableLayout::Multi(tables) = &plan.layout else {
        panic!("expected a multi-run table");
    };
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].blob.text, "m0m1m2");
    assert_eq!(tables[0].offset(), 0);
    assert_eq!(tables[1].blob.text, "m_2m_1");
    assert_eq!(tables[1].offset(), 253);
}

#[test]
fn test_primes_fall_back_to_sparse() {
    let plan = plan(&prime_decl());
    assert!(plan.runs.len() > LayoutLimits::default().max_runs_before_sparse);

    let TableLayout::Sparse(table) = &plan.layout else {
        panic!("expected a sparse table, got {:?}", plan.layout);
    };
    assert_eq!(table.keys.len(), 14);
    assert_eq!(table.blob.text, "p2p3p5p7p11p13p17p19p23p29p31p37p41p43");
    let entries: Vec<_> = table.entries().take(3).collect();
    assert_eq!(entries, vec![(2, "p2"), (3, "p3"), (5, "p5")]);
}

#[test]
fn test_singletons_are_charged_no_index() {
    let decl = TypeDecl::from_pairs(
        "Even",
        IntKind::I64,
        [("a", 0), ("b", 2), ("c", 4), ("d", 6), ("e", 8)],
    );
    let plan = plan(&decl);
    assert_eq!(plan.runs.len(), 5);
    assert_eq!(plan.cost.runs_cost, 5 * 24 + 5);
    assert_eq!(plan.cost.sparse_cost, 5 * 16 + 5);
    assert!(matches!(plan.layout, TableLayout::Multi(_)));
}

#[test]
fn test_two_singletons_dispatch_by_range() {
    let decl = TypeDecl::from_pairs("Pair", IntKind::I64, [("A", 0), ("B", 5)]);
    let plan = plan(&decl);
    assert_eq!(plan.cost.runs_cost, 2 * 24 + 2);
    let TableLayout::Multi(tables) = &plan.layout else {
        panic!("expected a multi-run table, got {:?}", plan.layout);
    };
    assert_eq!(tables.len(), 2);
}

#[test]
fn test_gap_charges_index_only_for_long_runs() {
    let plan = plan(&gap_decl());
    let name_bytes = "TwoThreeFiveSixSevenEightNineEleven".len();
    assert_eq!(plan.cost.runs_cost, 3 * 24 + name_bytes + (2 + 1) + (5 + 1));
}

#[test]
fn test_costly_runs_become_sparse_under_a_tight_factor() {
    let decl = TypeDecl::from_pairs(
        "Even",
        IntKind::I64,
        [("a", 0), ("b", 2), ("c", 4), ("d", 6), ("e", 8)],
    );
    let set = normalize(&decl).expect("valid input");
    let strict = LayoutLimits {
        cost_factor: (1, 1),
        ..LayoutLimits::default()
    };
    let plan = select_layout(&set, &strict);
    assert!(plan.runs.len() <= strict.max_runs_before_sparse);
    assert!(matches!(plan.layout, TableLayout::Sparse(_)));
}

#[test]
fn test_ceiling_is_configurable() {
    let set = normalize(&gap_decl()).expect("valid input");
    let tight = LayoutLimits::default().with_max_runs(2);
    assert!(matches!(
        select_layout(&set, &tight).layout,
        TableLayout::Sparse(_)
    ));
}

#[test]
fn test_empty_set_is_multi_without_tables() {
    let set = normalize(&TypeDecl::new("Empty", IntKind::I32)).expect("valid input");
    let plan = select_layout(&set, &LayoutLimits::default());
    assert!(plan.runs.is_empty());
    assert_eq!(plan.layout, TableLayout::Multi(Vec::new()));
}

#[test]
fn test_selection_is_deterministic() {
    let set = normalize(&prime_decl()).expect("valid input");
    let first = select_layout(&set, &LayoutLimits::default());
    let second = select_layout(&set, &LayoutLimits::default());
    assert_eq!(first, second);

    let a = serde_json::to_string(&first.layout).expect("serializes");
    let b = serde_json::to_string(&second.layout).expect("serializes");
    assert_eq!(a, b);
    assert!(a.starts_with(r#"{"kind":"sparse""#));
}
