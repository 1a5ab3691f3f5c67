use crate::{Type, join_all};

#[test]
fn join_identical() {
    assert_eq!(Type::Int.join(&Type::Int), Type::Int);
    assert_eq!(Type::Any.join(&Type::Any), Type::Any);

    let nested = Type::sequence(Type::named_tuple([("a", Type::Id)]));
    assert_eq!(nested.join(&nested), nested);
}

#[test]
fn join_distinct_primitives() {
    assert_eq!(Type::Int.join(&Type::Bool), Type::Any);
    assert_eq!(Type::Id.join(&Type::EVENT), Type::Any);
    assert_eq!(Type::Nil.join(&Type::Int), Type::Any);
    assert_eq!(Type::Bool.join(&Type::Nil), Type::Any);
}

#[test]
fn join_nil_with_reference_like() {
    assert_eq!(Type::Nil.join(&Type::Id), Type::Id);
    assert_eq!(Type::Id.join(&Type::Nil), Type::Id);
    assert_eq!(Type::Nil.join(&Type::EVENT), Type::EVENT);
    assert_eq!(Type::EVENT.join(&Type::Nil), Type::EVENT);
    assert_eq!(Type::Nil.join(&Type::Nil), Type::Nil);
}

#[test]
fn join_keeps_event_refinement_of_event_operand() {
    let joined = Type::Nil.join(&Type::event_named("eReq"));
    assert_eq!(joined.event_refinement(), Some("eReq"));

    let joined = Type::event_named("eResp").join(&Type::Nil);
    assert_eq!(joined.event_refinement(), Some("eResp"));
}

#[test]
fn join_any_absorbs() {
    assert_eq!(Type::Any.join(&Type::Int), Type::Any);
    assert_eq!(Type::Int.join(&Type::Any), Type::Any);
    assert_eq!(Type::Any.join(&Type::tuple([Type::Int])), Type::Any);
    assert_eq!(Type::sequence(Type::Int).join(&Type::Any), Type::Any);
}

#[test]
fn join_tuples_pointwise() {
    let a = Type::tuple([Type::Int, Type::Nil, Type::Bool]);
    let b = Type::tuple([Type::Int, Type::Id, Type::Int]);

    assert_eq!(a.join(&b), Type::tuple([Type::Int, Type::Id, Type::Any]));
}

#[test]
fn join_tuples_of_different_arity() {
    let a = Type::tuple([Type::Int]);
    let b = Type::tuple([Type::Int, Type::Int]);

    assert_eq!(a.join(&b), Type::Any);
}

#[test]
fn join_named_tuples_pointwise() {
    let a = Type::named_tuple([("x", Type::Int), ("y", Type::Nil)]);
    let b = Type::named_tuple([("y", Type::EVENT), ("x", Type::Bool)]);

    let joined = a.join(&b);
    assert_eq!(
        joined,
        Type::named_tuple([("x", Type::Any), ("y", Type::EVENT)])
    );
    insta::assert_snapshot!(joined.to_string(), @"(x:any,y:event)");
}

#[test]
fn join_named_tuples_with_different_names() {
    let a = Type::named_tuple([("x", Type::Int), ("y", Type::Int)]);
    let b = Type::named_tuple([("x", Type::Int), ("z", Type::Int)]);
    let c = Type::named_tuple([("x", Type::Int)]);

    assert_eq!(a.join(&b), Type::Any);
    assert_eq!(a.join(&c), Type::Any);
}

#[test]
fn join_sequences() {
    assert_eq!(
        Type::sequence(Type::Int).join(&Type::sequence(Type::Bool)),
        Type::sequence(Type::Any)
    );
    assert_eq!(
        Type::sequence(Type::Nil).join(&Type::sequence(Type::Id)),
        Type::sequence(Type::Id)
    );
}

#[test]
fn join_across_shapes() {
    let tuple = Type::tuple([Type::Int]);
    let named = Type::named_tuple([("x", Type::Int)]);
    let seq = Type::sequence(Type::Int);

    assert_eq!(tuple.join(&named), Type::Any);
    assert_eq!(named.join(&seq), Type::Any);
    assert_eq!(seq.join(&tuple), Type::Any);
    assert_eq!(Type::Int.join(&seq), Type::Any);
    assert_eq!(Type::Nil.join(&tuple), Type::Any);
}

#[test]
fn join_nested() {
    let a = Type::sequence(Type::tuple([
        Type::named_tuple([("k", Type::Nil), ("v", Type::Int)]),
        Type::Id,
    ]));
    let b = Type::sequence(Type::tuple([
        Type::named_tuple([("k", Type::Id), ("v", Type::Bool)]),
        Type::Nil,
    ]));

    insta::assert_snapshot!(a.join(&b).to_string(), @"seq[((k:id,v:any),id)]");
}

#[test]
#[should_panic(expected = "state type reached a join")]
fn join_state_left_panics() {
    Type::State.join(&Type::Int);
}

#[test]
#[should_panic(expected = "state type reached a join")]
fn join_state_right_panics() {
    Type::Int.join(&Type::State);
}

#[test]
#[should_panic(expected = "state type reached a join")]
fn join_state_with_itself_panics() {
    Type::State.join(&Type::State);
}

#[test]
#[should_panic(expected = "state type reached a join")]
fn join_any_with_state_panics() {
    Type::Any.join(&Type::State);
}

#[test]
#[should_panic(expected = "state type reached a join")]
fn join_equal_tuples_holding_state_panics() {
    let with_state = Type::tuple([Type::State]);
    with_state.join(&with_state.clone());
}

#[test]
#[should_panic(expected = "state type reached a join")]
fn join_equal_named_tuples_holding_state_panics() {
    let with_state = Type::named_tuple([("s", Type::State), ("n", Type::Int)]);
    with_state.join(&with_state.clone());
}

#[test]
#[should_panic(expected = "state type reached a join")]
fn join_all_equal_sequences_of_state_panics() {
    join_all([Type::sequence(Type::State), Type::sequence(Type::State)]);
}

#[test]
fn join_equal_compounds_keep_event_refinement() {
    let a = Type::tuple([Type::event_named("eLeft"), Type::Int]);
    let b = Type::tuple([Type::event_named("eRight"), Type::Int]);

    let joined = a.join(&b);
    assert_eq!(joined, a);
    assert_eq!(joined.tuple_elements().unwrap()[0].event_refinement(), Some("eLeft"));
}

#[test]
fn join_all_empty_is_nil() {
    assert_eq!(join_all(Vec::<Type>::new()), Type::Nil);
}

#[test]
fn join_all_single() {
    assert_eq!(join_all([Type::Int]), Type::Int);

    let evt = join_all([Type::event_named("eOnly")]);
    assert_eq!(evt.event_refinement(), Some("eOnly"));
}

#[test]
fn join_all_single_state_is_returned_unchanged() {
    assert_eq!(join_all([Type::State]), Type::State);
}

#[test]
fn join_all_mixed() {
    assert_eq!(join_all([Type::Int, Type::Bool, Type::Int]), Type::Any);
    assert_eq!(join_all([Type::Nil, Type::Id, Type::Nil]), Type::Id);
    assert_eq!(
        join_all([Type::sequence(Type::Int), Type::sequence(Type::Int)]),
        Type::sequence(Type::Int)
    );
}

#[test]
#[should_panic(expected = "state type reached a join")]
fn join_all_detects_state_after_absorption() {
    join_all([Type::Int, Type::Bool, Type::State]);
}
