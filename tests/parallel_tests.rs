//! Tests for parallel (independent) form composition.
//!
//! Parallel composition evaluates every part against the same state and
//! renders every editor, whether or not the other parts are valid.

use std::cell::RefCell;
use std::rc::Rc;

use formlets::form::{ChangeFn, EditContext, Form, Parallel, Update};
use formlets::simple::{FieldLeaf, leaf};
use formlets::typeclass::{FirstWins, FnCombinable};
use indexmap::IndexMap;
use rstest::rstest;

// =============================================================================
// Helpers
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
struct Pair {
    left: i32,
    right: i32,
}

fn recorder<I: Clone + 'static>(initial: I) -> (Rc<RefCell<I>>, ChangeFn<I>) {
    let state = Rc::new(RefCell::new(initial));
    let target = Rc::clone(&state);
    let on_change = ChangeFn::new(move |update: Update<I>| {
        let current = target.borrow().clone();
        *target.borrow_mut() = update(current);
    });
    (state, on_change)
}

/// A form over `i32` that is valid when the state is positive and reports
/// the state as its only child.
fn positive(name: &'static str) -> Form<Vec<String>, i32, i32, Vec<String>> {
    let inner = leaf::<i32>().map_ui(move |leaf: FieldLeaf<i32>| vec![format!("{name}={}", leaf.value)]);
    Form::new(move |state: &i32| {
        let mut evaluation = inner.evaluate(state);
        evaluation.validate = evaluation.validate.filter(|value| *value > 0);
        evaluation
    })
    .map_children(move |()| vec![name.to_string()])
}

fn render<U: 'static, I: 'static, A: 'static, C: 'static>(form: &Form<U, I, A, C>, state: &I) -> U {
    form.evaluate(state)
        .edit
        .render(EditContext::new(ChangeFn::ignore()))
}

// =============================================================================
// map2 / product
// =============================================================================

#[rstest]
#[case(1, 2, Some(3))]
#[case(-1, 2, None)]
#[case(1, -2, None)]
#[case(-1, -2, None)]
fn map2_is_valid_only_when_both_sides_are(#[case] left: i32, #[case] right: i32, #[case] expected: Option<i32>) {
    let parallel = Parallel::natural::<Vec<String>, Vec<String>>();
    let form = parallel.map2(
        positive("left").focus_with(|pair: &Pair| &pair.left, |pair: Pair, left: i32| Pair { left, ..pair }),
        positive("right").focus_with(|pair: &Pair| &pair.right, |pair: Pair, right: i32| Pair { right, ..pair }),
        |a, b| a + b,
    );
    assert_eq!(form.revalidate(&Pair { left, right }), expected);
}

#[rstest]
fn map2_renders_both_editors_even_when_one_is_invalid() {
    let parallel = Parallel::natural::<Vec<String>, Vec<String>>();
    let form = parallel.product(positive("a"), positive("b"));
    assert_eq!(render(&form, &-4), vec!["a=-4".to_string(), "b=-4".to_string()]);
    assert_eq!(form.evaluate(&-4).children, vec!["a".to_string(), "b".to_string()]);
}

#[rstest]
fn product_routes_each_edit_to_its_own_part() {
    let parallel = Parallel::new(
        FnCombinable::new(Vec::new, |mut left: Vec<FieldLeaf<i32>>, right| {
            left.extend(right);
            left
        }),
        formlets::typeclass::Natural::<()>::new(),
    );
    let left = leaf::<i32>()
        .map_ui(|leaf| vec![leaf])
        .focus_with(|pair: &Pair| &pair.left, |pair: Pair, left: i32| Pair { left, ..pair });
    let right = leaf::<i32>()
        .map_ui(|leaf| vec![leaf])
        .focus_with(|pair: &Pair| &pair.right, |pair: Pair, right: i32| Pair { right, ..pair });
    let form = parallel.product(left, right);

    let initial = Pair { left: 1, right: 2 };
    let (state, on_change) = recorder(initial.clone());
    let leaves = form.evaluate(&initial).edit.render(EditContext::new(on_change));

    leaves[1].on_change.set(20);
    leaves[0].on_change.set(10);
    assert_eq!(*state.borrow(), Pair { left: 10, right: 20 });
}

// =============================================================================
// sequence
// =============================================================================

#[rstest]
fn sequence_collects_results_in_order() {
    let parallel = Parallel::natural::<Vec<String>, Vec<String>>();
    let form = parallel.sequence(vec![
        positive("a").map(|value| value),
        positive("b").map(|value| value * 10),
        positive("c").map(|value| value * 100),
    ]);
    assert_eq!(form.revalidate(&2), Some(vec![2, 20, 200]));
    assert_eq!(
        form.evaluate(&2).children,
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );
}

#[rstest]
fn sequence_of_nothing_is_valid_and_empty() {
    let parallel = Parallel::natural::<Vec<String>, Vec<String>>();
    let form = parallel.sequence(Vec::<Form<Vec<String>, i32, i32, Vec<String>>>::new());
    assert_eq!(form.revalidate(&0), Some(Vec::new()));
    assert!(render(&form, &0).is_empty());
}

#[rstest]
fn sequence_is_invalid_when_any_part_is() {
    let parallel = Parallel::natural::<Vec<String>, Vec<String>>();
    let form = parallel.sequence(vec![positive("a"), positive("b").map(|value| value - 5)]);
    assert_eq!(form.revalidate(&3), Some(vec![3, -2]));
    assert_eq!(form.revalidate(&-3), None);
    assert_eq!(render(&form, &-3).len(), 2);
}

// =============================================================================
// Custom merges
// =============================================================================

#[rstest]
fn first_wins_keeps_the_first_editor_for_a_repeated_key() {
    let parallel = Parallel::new(FirstWins, FirstWins);
    let named = |key: &'static str, offset: i32| -> Form<IndexMap<String, i32>, i32, i32, IndexMap<String, i32>> {
        leaf::<i32>()
            .map_ui(move |leaf: FieldLeaf<i32>| IndexMap::from([(key.to_string(), leaf.value + offset)]))
            .map_children(move |()| IndexMap::from([(key.to_string(), offset)]))
    };
    let form = parallel.product(parallel.product(named("x", 0), named("y", 1)), named("x", 2));

    let ui = render(&form, &5);
    assert_eq!(ui.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(ui["x"], 5);
    assert_eq!(form.evaluate(&5).children["x"], 0);
}

#[rstest]
fn of_renders_the_empty_editor() {
    let parallel = Parallel::new(
        FnCombinable::new(|| "empty".to_string(), |left: String, right: String| left + &right),
        FirstWins,
    );
    let form: Form<String, i32, &str, IndexMap<String, ()>> = parallel.of("constant");
    assert_eq!(form.revalidate(&9), Some("constant"));
    assert_eq!(render(&form, &9), "empty");
    assert!(form.evaluate(&9).children.is_empty());
}
