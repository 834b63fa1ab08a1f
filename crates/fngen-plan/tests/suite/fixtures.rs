use fngen_config::ClassOptions;
use fngen_types::{
    CandidateOperation, ClassMetadata, ClassName, NamingPolicy, OperationKind, Parameter,
    PrimitiveType, TypeShape,
};

pub fn int() -> TypeShape {
    TypeShape::Primitive(PrimitiveType::Int)
}

pub fn string() -> TypeShape {
    TypeShape::named("java.lang.String")
}

pub fn generic(qualified: &str, args: Vec<TypeShape>) -> TypeShape {
    TypeShape::class(ClassName::from_qualified(qualified), args)
}

pub fn params(types: Vec<TypeShape>) -> Vec<Parameter> {
    types
        .into_iter()
        .enumerate()
        .map(|(idx, ty)| Parameter::new(format!("p{idx}"), ty))
        .collect()
}

pub fn static_op(name: &str, types: Vec<TypeShape>, ret: TypeShape) -> CandidateOperation {
    CandidateOperation::method(OperationKind::Static, name, params(types), ret)
}

pub fn class(qualified: &str, operations: Vec<CandidateOperation>) -> ClassMetadata {
    let mut class = ClassMetadata::new(ClassName::from_qualified(qualified));
    class.operations = operations;
    class
}

pub fn options(policy: NamingPolicy) -> ClassOptions {
    ClassOptions {
        policy,
        generated_name: None,
    }
}

pub fn names(plan: &fngen_plan::ClassPlan) -> Vec<&str> {
    plan.operations
        .iter()
        .map(|op| op.generated_name.as_str())
        .collect()
}
