use fngen_config::GeneratorConfig;
use fngen_plan::{canonical_order, plan_class, plan_classes, CanonicalKey};
use fngen_types::{
    CandidateOperation, ClassMetadata, NamingPolicy, OperationKind, Parameter, PrimitiveType,
    TypeShape, TypeVarId,
};

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::fixtures::{class, generic, int, options, static_op, string};

fn overloads() -> Vec<CandidateOperation> {
    vec![
        static_op("foo", vec![int()], TypeShape::Void),
        static_op("foo", vec![string()], TypeShape::Void),
        static_op("foo", vec![int(), int()], int()),
        static_op("foo", vec![], TypeShape::Void),
        static_op("bar", vec![TypeShape::array(int())], string()),
        static_op("bar", vec![generic("java.util.List", vec![string()])], string()),
        CandidateOperation::method(
            OperationKind::Instance,
            "foo",
            vec![Parameter::new("seed", TypeShape::Primitive(PrimitiveType::Long))],
            TypeShape::Void,
        ),
        CandidateOperation::constructor(vec![Parameter::new("seed", int())]),
        // Same canonical parameter text `T`; only the bound tells them apart.
        static_op("pick", vec![TypeShape::TypeVariable(UNBOUNDED)], TypeShape::Void)
            .with_type_params(vec![UNBOUNDED]),
        static_op("pick", vec![TypeShape::TypeVariable(NUMERIC)], TypeShape::Void)
            .with_type_params(vec![NUMERIC]),
    ]
}

const UNBOUNDED: TypeVarId = TypeVarId(0);
const NUMERIC: TypeVarId = TypeVarId(1);

fn util(operations: Vec<CandidateOperation>) -> ClassMetadata {
    let mut class = class("com.example.Util", operations);
    let unbounded = class.type_vars.add_type_param("T", TypeShape::UniversalTop);
    let numeric = class
        .type_vars
        .add_type_param("T", TypeShape::named("java.lang.Number"));
    assert_eq!((unbounded, numeric), (UNBOUNDED, NUMERIC));
    class
}

proptest! {
    #[test]
    fn plan_does_not_depend_on_discovery_order(
        shuffled in Just(overloads()).prop_shuffle(),
        exclude in any::<bool>(),
    ) {
        let policy = if exclude { NamingPolicy::Exclude } else { NamingPolicy::Rename };
        let baseline = plan_class(&util(overloads()), &options(policy)).unwrap();
        let permuted = plan_class(&util(shuffled), &options(policy)).unwrap();
        prop_assert_eq!(baseline, permuted);
    }

    #[test]
    fn canonical_order_sorts_by_name_then_arity(shuffled in Just(overloads()).prop_shuffle()) {
        let class = util(shuffled);
        let keys: Vec<_> = canonical_order(&class.type_vars, &class.operations)
            .into_iter()
            .map(|op| CanonicalKey::of(&class.type_vars, op))
            .collect();
        for pair in keys.windows(2) {
            prop_assert!(
                (&pair[0].name, pair[0].arity, &pair[0].parameter_types)
                    <= (&pair[1].name, pair[1].arity, &pair[1].parameter_types)
            );
        }
    }
}

#[test]
fn overloads_are_renamed_in_canonical_order() {
    let plan = plan_class(&util(overloads()), &options(NamingPolicy::Rename)).unwrap();
    let names: Vec<_> = plan
        .operations
        .iter()
        .map(|op| op.generated_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "newUtil",
            "bar",
            "bar$Obj",
            "foo",
            "foo$Int",
            "foo$Long",
            "foo$Obj",
            "foo$Int_Int",
            "pick",
            "pick$TypeVar",
        ]
    );
    assert_eq!(plan.operations[8].generics, vec!["M0 extends Number"]);
    assert_eq!(plan.operations[9].generics, vec!["M0"]);
}

#[test]
fn classes_are_planned_with_their_own_options() {
    let config = GeneratorConfig::load_from_str(
        r#"
[classes."com.example.Util"]
policy = "exclude"
generated_name = "UtilFns"
"#,
    )
    .unwrap();

    let classes = vec![
        util(overloads()),
        class(
            "com.example.Other",
            vec![
                static_op("foo", vec![int()], TypeShape::Void),
                static_op("foo", vec![string()], TypeShape::Void),
            ],
        ),
    ];

    let plans: Vec<_> = plan_classes(&classes, &config)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(plans[0].generated_class_name, "UtilFns");
    assert_eq!(
        plans[0]
            .operations
            .iter()
            .map(|op| op.generated_name.as_str())
            .collect::<Vec<_>>(),
        vec!["newUtil", "bar", "foo", "pick"]
    );
    assert_eq!(plans[1].generated_class_name, "Other_");
    assert_eq!(plans[1].operations.len(), 2);
}

#[test]
fn metadata_round_trips_through_json() {
    let json = r#"{
        "name": { "package": "com.example", "simple": "Point" },
        "operations": [
            {
                "kind": "constructor",
                "name": "<init>",
                "parameters": [
                    { "name": "x", "ty": { "primitive": "int" } },
                    { "name": "y", "ty": { "primitive": "int" } }
                ]
            },
            {
                "kind": "instance",
                "name": "getX",
                "return_type": { "primitive": "int" }
            }
        ]
    }"#;

    let point: ClassMetadata = serde_json::from_str(json).unwrap();
    let plan = plan_class(&point, &options(NamingPolicy::Rename)).unwrap();

    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value["class_name"], "com.example.Point");
    assert_eq!(value["operations"][0]["generated_name"], "newPoint");
    assert_eq!(
        value["operations"][0]["adapter"]["text"],
        "Func2<Integer, Integer, com.example.Point>"
    );
    assert_eq!(value["operations"][0]["parameters"]["kind"], "named");
    assert_eq!(value["operations"][1]["generated_name"], "getX");
    assert_eq!(
        value["operations"][1]["adapter"]["text"],
        "Func1<com.example.Point, Integer>"
    );
}
