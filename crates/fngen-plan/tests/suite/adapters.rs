use fngen_config::ClassOptions;
use fngen_plan::{plan_class, AdapterArity, AdapterFamily, ParameterList, RenderedParameter};
use fngen_types::{
    CandidateOperation, NamingPolicy, OperationKind, Parameter, PrimitiveType, TypeShape,
};

use pretty_assertions::assert_eq;

use super::fixtures::{class, int, options, static_op, string};

#[test]
fn constructor_adapter_produces_the_class() {
    let point = class(
        "com.example.Point",
        vec![CandidateOperation::constructor(vec![
            Parameter::new("x", int()),
            Parameter::new("y", int()),
        ])],
    );

    let plan = plan_class(&point, &options(NamingPolicy::Rename)).unwrap();
    assert_eq!(plan.generated_class_name, "Point_");
    assert_eq!(plan.owner_type, "com.example.Point");

    let op = &plan.operations[0];
    assert_eq!(op.generated_name, "newPoint");
    assert_eq!(op.called_name, None);
    assert_eq!(op.call_kind, OperationKind::Constructor);
    assert_eq!(op.adapter.family, AdapterFamily::Func);
    assert_eq!(op.adapter.arity, AdapterArity::Fixed(2));
    assert_eq!(op.adapter.text, "Func2<Integer, Integer, com.example.Point>");
    assert_eq!(op.return_type, "com.example.Point");
    assert_eq!(
        op.parameters,
        ParameterList::Named(vec![
            RenderedParameter {
                name: "x".to_string(),
                ty: "int".to_string(),
                boxed_ty: "Integer".to_string(),
            },
            RenderedParameter {
                name: "y".to_string(),
                ty: "int".to_string(),
                boxed_ty: "Integer".to_string(),
            },
        ])
    );
}

#[test]
fn void_operations_use_action_adapters() {
    let util = class(
        "com.example.Util",
        vec![
            static_op("reset", vec![], TypeShape::Void),
            static_op("log", vec![string(), int()], TypeShape::Void),
            CandidateOperation::method(OperationKind::Instance, "close", vec![], TypeShape::Void),
        ],
    );

    let plan = plan_class(&util, &options(NamingPolicy::Rename)).unwrap();
    let texts: Vec<_> = plan
        .operations
        .iter()
        .map(|op| (op.generated_name.as_str(), op.adapter.text.as_str()))
        .collect();
    assert_eq!(
        texts,
        vec![
            ("close", "Action1<com.example.Util>"),
            ("log", "Action2<String, Integer>"),
            ("reset", "Action0"),
        ]
    );
    assert!(plan
        .operations
        .iter()
        .all(|op| op.adapter.family == AdapterFamily::Action));
}

#[test]
fn instance_adapters_take_only_the_receiver() {
    let util = class(
        "com.example.Counter",
        vec![CandidateOperation::method(
            OperationKind::Instance,
            "add",
            vec![Parameter::new("delta", int()), Parameter::new("label", string())],
            TypeShape::Primitive(PrimitiveType::Long),
        )],
    );

    let plan = plan_class(&util, &options(NamingPolicy::Rename)).unwrap();
    let op = &plan.operations[0];
    assert_eq!(op.adapter.text, "Func1<com.example.Counter, Long>");
    assert_eq!(op.called_name.as_deref(), Some("add"));
    assert!(!op.parameters.is_positional());
    assert_eq!(op.parameters.parameters().len(), 2);
}

#[test]
fn nine_parameters_still_get_a_fixed_adapter() {
    let util = class(
        "com.example.Util",
        vec![static_op("sum", vec![int(); 9], int())],
    );

    let plan = plan_class(&util, &options(NamingPolicy::Rename)).unwrap();
    let op = &plan.operations[0];
    assert_eq!(op.adapter.arity, AdapterArity::Fixed(9));
    assert_eq!(
        op.adapter.text,
        format!("Func9<{}, Integer>", vec!["Integer"; 9].join(", "))
    );
    assert!(!op.parameters.is_positional());
}

#[test]
fn more_than_nine_parameters_use_the_variadic_adapter() {
    let util = class(
        "com.example.Util",
        vec![
            static_op("sum", vec![int(); 10], int()),
            static_op("fill", vec![TypeShape::array(int()); 11], TypeShape::Void),
        ],
    );

    let plan = plan_class(&util, &options(NamingPolicy::Rename)).unwrap();

    let fill = &plan.operations[0];
    assert_eq!(fill.adapter.text, "ActionN");
    assert_eq!(fill.adapter.arity, AdapterArity::Variadic);
    assert_eq!(fill.parameters.parameters()[10].ty, "int[]");

    let sum = &plan.operations[1];
    assert_eq!(sum.adapter.text, "FuncN<Integer>");
    assert!(sum.parameters.is_positional());
    let names: Vec<_> = sum
        .parameters
        .parameters()
        .iter()
        .map(|param| param.name.as_str())
        .collect();
    assert_eq!(
        names,
        (0..10).map(|idx| format!("args[{idx}]")).collect::<Vec<_>>()
    );
    assert!(sum
        .parameters
        .parameters()
        .iter()
        .all(|param| param.ty == "Integer"));
}

#[test]
fn instance_operations_above_nine_parameters_are_positional() {
    let util = class(
        "com.example.Util",
        vec![CandidateOperation::method(
            OperationKind::Instance,
            "sum",
            (0..10).map(|idx| Parameter::new(format!("p{idx}"), int())).collect(),
            int(),
        )],
    );

    let plan = plan_class(&util, &options(NamingPolicy::Rename)).unwrap();
    let op = &plan.operations[0];
    assert_eq!(op.adapter.text, "Func1<com.example.Util, Integer>");
    assert_eq!(op.adapter.arity, AdapterArity::Fixed(1));
    assert!(op.parameters.is_positional());
    assert_eq!(
        op.parameters.parameters()[0],
        RenderedParameter {
            name: "args[0]".to_string(),
            ty: "Integer".to_string(),
            boxed_ty: "Integer".to_string(),
        }
    );
    assert_eq!(op.parameters.parameters()[9].name, "args[9]");
}

#[test]
fn docs_and_name_overrides_are_carried_through() {
    let op = static_op("of", vec![string()], TypeShape::named("com.example.Point"))
        .with_doc(" Parses a point.\n @param text the input")
        .with_generated_name("parse");
    let point = class("com.example.Point", vec![op]);

    let options = ClassOptions {
        policy: NamingPolicy::Rename,
        generated_name: Some("Points".to_string()),
    };
    let plan = plan_class(&point, &options).unwrap();
    assert_eq!(plan.generated_class_name, "Points");

    let op = &plan.operations[0];
    assert_eq!(op.generated_name, "parse");
    assert_eq!(op.called_name.as_deref(), Some("of"));
    assert_eq!(op.doc.as_deref(), Some(" Parses a point.\n @param text the input"));
    assert_eq!(
        op.doc_comment.as_deref(),
        Some("    /**\n     * Parses a point.\n     * @param text the input\n     */")
    );
}
