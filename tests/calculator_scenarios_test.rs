mod common;

use botmetrics::{
    calculate_metrics, BotModelMetricsCalculator, CalculatorOptions, ContextMap, MetricsError,
    NoContexts, NodeInfo, OperationContext,
};
use common::{leaf, nested, rpa_ontology, TreeBuilder};
use pretty_assertions::assert_eq;

fn ctx(software: &str, data: &str) -> OperationContext {
    OperationContext::new(Some(software), Some(data))
}

#[test]
fn test_automation_ratio_two_of_three() {
    let tree = TreeBuilder::new()
        .node("n1", NodeInfo::new("read-cell"))
        .node("n2", NodeInfo::new("open-browser"))
        .node("n3", NodeInfo::new("approve-invoice"))
        .build();

    let metrics =
        calculate_metrics(&tree, &rpa_ontology(), &NoContexts, CalculatorOptions::default())
            .unwrap();

    assert_eq!(metrics.operations, 3);
    assert_eq!(metrics.automation_operations, 2);
    let ratio = metrics.automation_ratio.value().unwrap();
    assert!((ratio - 66.67).abs() < 0.01, "ratio was {ratio}");
}

#[test]
fn test_read_and_write_of_same_resource_balance_out() {
    let tree = TreeBuilder::new()
        .node("n1", NodeInfo::new("read-cell").with_input(&["R1"]))
        .node("n2", NodeInfo::new("write-cell").with_output(&["R1"]))
        .resource("R1")
        .build();

    let metrics =
        calculate_metrics(&tree, &rpa_ontology(), &NoContexts, CalculatorOptions::default())
            .unwrap();

    assert_eq!(metrics.data_resources, 1);
    assert_eq!(metrics.data_resources_read, 1);
    assert_eq!(metrics.data_resources_written, 1);
    assert_eq!(metrics.data_resource_access_ratio.value(), Some(0.0));
}

#[test]
fn test_no_data_access_gives_undefined_balance() {
    let tree = TreeBuilder::new()
        .node("n1", NodeInfo::new("approve-invoice"))
        .node("n2", NodeInfo::new("if"))
        .build();

    let metrics =
        calculate_metrics(&tree, &rpa_ontology(), &NoContexts, CalculatorOptions::default())
            .unwrap();

    assert_eq!(metrics.data_resources_read, 0);
    assert_eq!(metrics.data_resources_written, 0);
    assert!(!metrics.data_resource_access_ratio.is_defined());
    assert!(metrics.data_resource_access_ratio.raw().is_nan());
}

#[test]
fn test_shared_context_pair_counts_once() {
    let tree = TreeBuilder::new()
        .node("n1", NodeInfo::new("read-cell"))
        .node("n2", NodeInfo::new("write-cell"))
        .node("n3", NodeInfo::new("open-browser"))
        .build();
    let contexts = ContextMap::from([
        ("n1".to_string(), ctx("excel", "invoices.xlsx")),
        ("n2".to_string(), ctx("excel", "invoices.xlsx")),
        ("n3".to_string(), ctx("chrome", "erp-portal")),
    ]);

    let metrics =
        calculate_metrics(&tree, &rpa_ontology(), &contexts, CalculatorOptions::default())
            .unwrap();

    assert_eq!(metrics.contexts, 2);
    assert_eq!(metrics.software, 2);
    assert_eq!(metrics.context_switches, 1);
    assert_eq!(metrics.context_switch_ratio.value(), Some(2.0));
}

#[test]
fn test_full_process_record() {
    let tree = TreeBuilder::new()
        .node("start", NodeInfo::new("open-browser").with_input(&["portal"]))
        .node("check", NodeInfo::new("if"))
        .node("read", NodeInfo::new("read-cell").with_input(&["ledger", "archive"]))
        .node("each", NodeInfo::new("loop"))
        .node("write", NodeInfo::new("write-cell").with_output(&["report"]))
        .node("approve", NodeInfo::new("approve-invoice"))
        .variable("total")
        .variable("row")
        .resource("portal")
        .resource("ledger")
        .resource("archive")
        .resource("report")
        .build_with_structure(vec![vec![
            leaf("start"),
            leaf("check"),
            nested(
                "check-true",
                vec![
                    leaf("read"),
                    leaf("each"),
                    nested("each-body", vec![leaf("write")]),
                ],
            ),
            leaf("approve"),
        ]]);
    let contexts = ContextMap::from([
        ("start".to_string(), ctx("chrome", "portal")),
        ("read".to_string(), ctx("excel", "ledger")),
        ("write".to_string(), ctx("excel", "report")),
        ("approve".to_string(), OperationContext::new(Some("outlook"), None)),
    ]);

    let metrics =
        calculate_metrics(&tree, &rpa_ontology(), &contexts, CalculatorOptions::default())
            .unwrap();

    assert_eq!(metrics.operations, 6);
    assert_eq!(metrics.automation_operations, 3);
    assert_eq!(metrics.automation_ratio.value(), Some(50.0));
    assert_eq!(metrics.decisions, 2);
    assert_eq!(metrics.variables, 2);
    assert_eq!(metrics.data_resources, 4);
    assert_eq!(metrics.data_resources_read, 2);
    assert_eq!(metrics.data_resources_written, 1);
    let balance = metrics.data_resource_access_ratio.value().unwrap();
    assert!((balance - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(metrics.software, 3);
    assert_eq!(metrics.contexts, 3);
    assert_eq!(metrics.context_switches, 2);
    assert_eq!(metrics.context_switch_ratio.value(), Some(1.5));
    assert_eq!(metrics.nesting_depth_max, 2);
    // depths: start 0, check 0, approve 0, read 1, each 1, write 2
    assert_eq!(metrics.nesting_depth_avg.value(), Some(4.0 / 6.0));
}

#[test]
fn test_unknown_concept_names_node() {
    let tree = TreeBuilder::new()
        .node("n1", NodeInfo::new("read-cell"))
        .node("n2", NodeInfo::new("summon-intern"))
        .build();
    let ontology = rpa_ontology();

    let err = BotModelMetricsCalculator::new(&tree, &ontology, &NoContexts)
        .err()
        .expect("unknown concept must fail");

    match err {
        MetricsError::UnknownConcept { concept, node } => {
            assert_eq!(concept, "summon-intern");
            assert_eq!(node.as_deref(), Some("n2"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_structure_missing_a_node_is_a_depth_mismatch() {
    let tree = TreeBuilder::new()
        .node("n1", NodeInfo::new("read-cell"))
        .node("n2", NodeInfo::new("write-cell"))
        .build_with_structure(vec![vec![leaf("n1")]]);

    let err = calculate_metrics(&tree, &rpa_ontology(), &NoContexts, CalculatorOptions::default())
        .unwrap_err();

    assert!(matches!(
        err,
        MetricsError::DepthMismatch {
            expected: 2,
            visited: 1,
            ..
        }
    ));
}

#[test]
fn test_leaf_without_node_info_is_a_depth_mismatch() {
    let tree = TreeBuilder::new()
        .node("n1", NodeInfo::new("read-cell"))
        .node("n2", NodeInfo::new("write-cell"))
        .build_with_structure(vec![vec![leaf("n1"), nested("x", vec![leaf("ghost")])]]);

    let err = calculate_metrics(&tree, &rpa_ontology(), &NoContexts, CalculatorOptions::default())
        .unwrap_err();

    match err {
        MetricsError::DepthMismatch {
            expected,
            visited,
            unmatched,
        } => {
            assert_eq!((expected, visited), (2, 2));
            assert_eq!(unmatched, vec!["n2".to_string(), "ghost".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_contexts_for_foreign_nodes_are_ignored() {
    let tree = TreeBuilder::new()
        .node("n1", NodeInfo::new("read-cell"))
        .build();
    let contexts = ContextMap::from([
        ("n1".to_string(), ctx("excel", "a")),
        ("other-process-node".to_string(), ctx("sap", "b")),
    ]);
    let ontology = rpa_ontology();

    let calculator = BotModelMetricsCalculator::new(&tree, &ontology, &contexts).unwrap();
    let metrics = calculator.model_metrics().unwrap();

    assert_eq!(calculator.contexts().len(), 1);
    assert_eq!(metrics.software, 1);
    assert_eq!(metrics.contexts, 1);
}

#[test]
fn test_model_metrics_is_repeatable() {
    let tree = TreeBuilder::new()
        .node("n1", NodeInfo::new("read-cell").with_input(&["r"]))
        .node("n2", NodeInfo::new("if"))
        .build();
    let ontology = rpa_ontology();
    let calculator = BotModelMetricsCalculator::new(&tree, &ontology, &NoContexts).unwrap();

    assert_eq!(
        calculator.model_metrics().unwrap(),
        calculator.model_metrics().unwrap()
    );
}
