//! Tests for validators and for attaching them to forms.
//!
//! Covers validator composition and labelling, the built-in text validators,
//! and how attached validation hides errors until a field has been touched.

use std::cell::RefCell;
use std::rc::Rc;

use formlets::form::{ChangeFn, EditContext, Form, Update};
use formlets::simple::{FieldLeaf, leaf};
use formlets::validation::{
    Bounds, MarkModified, NonNegative, Validated, Validator, integer, natural_number, non_empty,
    non_negative, number,
};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Helpers
// =============================================================================

fn recorder<I: Clone + 'static>(initial: I) -> (Rc<RefCell<I>>, ChangeFn<I>) {
    let state = Rc::new(RefCell::new(initial));
    let target = Rc::clone(&state);
    let on_change = ChangeFn::new(move |update: Update<I>| {
        let current = target.borrow().clone();
        *target.borrow_mut() = update(current);
    });
    (state, on_change)
}

fn amount() -> Form<FieldLeaf<String>, Validated<String>, f64, Option<f64>> {
    leaf::<String>().validate_leaf(
        number()
            .and_then(Validator::bounded(Bounds::unbounded().with_min(0.0).with_max(100.0)))
            .with_label("Amount"),
    )
}

fn rendered_error(form: &Form<FieldLeaf<String>, Validated<String>, f64, Option<f64>>, state: &Validated<String>) -> Option<String> {
    form.evaluate(state)
        .edit
        .render(EditContext::new(ChangeFn::ignore()))
        .error
}

// =============================================================================
// Built-in validators
// =============================================================================

#[rstest]
#[case("", Err("is required"))]
#[case("abc", Err("must be a number"))]
#[case("1.5", Err("must be an integer"))]
#[case(" 42 ", Ok(42))]
#[case("-7", Ok(-7))]
fn integer_parses_whole_numbers(#[case] input: &str, #[case] expected: Result<i64, &str>) {
    assert_eq!(integer().run(input.to_string()), expected.map_err(str::to_string));
}

#[rstest]
#[case("-1", Err("must be a non-negative integer"))]
#[case("2.5", Err("must be a non-negative integer"))]
#[case("0", Ok(0))]
#[case("2024", Ok(2024))]
fn natural_number_rejects_negatives_and_fractions(#[case] input: &str, #[case] expected: Result<u64, &str>) {
    assert_eq!(natural_number().run(input.to_string()), expected.map_err(str::to_string));
}

#[rstest]
#[case("-0.01", Err("must be positive"))]
#[case("inf", Err("must be a number"))]
#[case("0", Ok(0.0))]
#[case("19.99", Ok(19.99))]
fn non_negative_accepts_zero_and_above(#[case] input: &str, #[case] expected: Result<f64, &str>) {
    assert_eq!(
        non_negative().run(input.to_string()).map(NonNegative::get),
        expected.map_err(str::to_string)
    );
}

#[rstest]
fn non_empty_keeps_whitespace() {
    assert_eq!(
        non_empty().run("  ".to_string()).map(|text| text.into_inner()),
        Ok("  ".to_string())
    );
}

#[rstest]
#[case(" ")]
#[case("   ")]
#[case("\t\n")]
fn whitespace_only_numbers_read_as_zero(#[case] input: &str) {
    assert_eq!(number().run(input.to_string()), Ok(0.0));
    assert_eq!(natural_number().run(input.to_string()), Ok(0));
    assert_eq!(number().run(String::new()), Err("is required".to_string()));
}

#[rstest]
#[case("9223372036854775807")]
#[case("9223372036854775808")]
fn integer_rejects_values_past_i64(#[case] input: &str) {
    assert_eq!(integer().run(input.to_string()), Err("must be an integer".to_string()));
}

#[rstest]
#[case("18446744073709551615")]
#[case("18446744073709551616")]
fn natural_number_rejects_values_past_u64(#[case] input: &str) {
    assert_eq!(
        natural_number().run(input.to_string()),
        Err("must be a non-negative integer".to_string())
    );
}

proptest! {
    /// Whole numbers too large for the target type fail instead of saturating
    #[test]
    fn prop_oversized_whole_numbers_fail(value in 9.3e18_f64..1.0e300) {
        let text = format!("{value:.0}");
        prop_assert_eq!(integer().run(text.clone()), Err("must be an integer".to_string()));
        if value >= 1.85e19 {
            prop_assert_eq!(
                natural_number().run(text),
                Err("must be a non-negative integer".to_string())
            );
        }
    }

    /// Every finite number written out by `to_string` parses back
    #[test]
    fn prop_number_parses_displayed_numbers(value in -1.0e15_f64..1.0e15) {
        prop_assert_eq!(number().run(value.to_string()), Ok(value));
    }

    /// Labels prefix every failure and never touch successes
    #[test]
    fn prop_label_prefixes_failures(input in ".*") {
        let labelled = integer().with_label("Count").run(input.clone());
        match integer().run(input) {
            Ok(value) => prop_assert_eq!(labelled, Ok(value)),
            Err(error) => prop_assert_eq!(labelled, Err(format!("Count {error}"))),
        }
    }
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn and_then_stops_at_the_first_failure() {
    let validator = number()
        .and_then(Validator::minimum(10.0))
        .and_then(Validator::maximum(5.0));
    assert_eq!(validator.run("3".into()), Err("must be greater than 10".to_string()));
    assert_eq!(validator.run("12".into()), Err("must be less than 5".to_string()));
}

#[rstest]
fn compose_runs_the_earlier_validator_first() {
    let trimmed = Validator::new(|text: String| Ok::<_, String>(text.trim().to_string()));
    let validator = Validator::must_equal("yes".to_string(), "must be yes").compose(trimmed);
    assert_eq!(validator.run("  yes ".into()), Ok("yes".to_string()));
    assert_eq!(validator.run("no".into()), Err("must be yes".to_string()));
}

#[rstest]
fn optional_and_or_default_accept_empty_input() {
    assert_eq!(number().optional().run(String::new()), Ok(None));
    assert_eq!(number().optional().run("4".into()), Ok(Some(4.0)));
    assert_eq!(number().optional().run("x".into()), Err("must be a number".to_string()));
    assert_eq!(number().or_default(1.0).run(String::new()), Ok(1.0));
    assert_eq!(number().or_default(1.0).run("2".into()), Ok(2.0));
}

#[rstest]
fn non_optional_requires_a_value() {
    let validator = Validator::<Option<u8>, u8>::non_optional().with_label("Size");
    assert_eq!(validator.run(Some(3)), Ok(3));
    assert_eq!(validator.run(None), Err("Size is required".to_string()));
}

#[rstest]
fn map_error_rewrites_messages() {
    let validator = number().map_error(|error| error.to_uppercase());
    assert_eq!(validator.run("?".into()), Err("MUST BE A NUMBER".to_string()));
}

// =============================================================================
// Attached validation
// =============================================================================

#[rstest]
#[case(Validated::fresh("abc".to_string()), None)]
#[case(Validated::touched("abc".to_string()), Some("Amount must be a number"))]
#[case(Validated::fresh("200".to_string()), None)]
#[case(Validated::touched("200".to_string()), Some("Amount must be less than 100"))]
#[case(Validated::touched("50".to_string()), None)]
fn errors_show_only_once_touched(#[case] state: Validated<String>, #[case] expected: Option<&str>) {
    assert_eq!(rendered_error(&amount(), &state).as_deref(), expected);
}

#[rstest]
#[case(Validated::fresh("50".to_string()))]
#[case(Validated::touched("50".to_string()))]
fn valid_input_validates_whether_or_not_touched(#[case] state: Validated<String>) {
    let evaluation = amount().evaluate(&state);
    assert_eq!(evaluation.validate, Some(50.0));
    assert_eq!(evaluation.children, Some(50.0));
}

#[rstest]
fn invalid_fresh_input_is_silently_invalid() {
    let evaluation = amount().evaluate(&Validated::fresh("-1".to_string()));
    assert_eq!(evaluation.validate, None);
    assert_eq!(evaluation.children, None);
}

#[rstest]
fn editing_marks_the_state_modified() {
    let initial = Validated::fresh(String::new());
    let (state, on_change) = recorder(initial.clone());
    let ui = amount().evaluate(&initial).edit.render(EditContext::new(on_change));
    assert_eq!(ui.error, None);

    ui.on_change.set("abc".into());
    let edited = state.borrow().clone();
    assert_eq!(edited, Validated::touched("abc".to_string()));
    assert_eq!(rendered_error(&amount(), &edited).as_deref(), Some("Amount must be a number"));
}

#[rstest]
fn validation_of_an_invalid_form_reports_nothing() {
    let never = leaf::<String>().invalidate::<String>();
    let form = never.validate_with(non_empty().map(|text| text.into_inner()));
    let evaluation = form.evaluate(&Validated::touched(String::new()));
    assert_eq!(evaluation.validate, None);
    assert_eq!(evaluation.edit.render(EditContext::new(ChangeFn::ignore())).error, None);
}

#[rstest]
fn mark_modified_reveals_nested_errors() {
    let rows = vec![
        (Validated::fresh("1".to_string()), Validated::fresh("x".to_string())),
        (Validated::fresh("2".to_string()), Validated::touched("y".to_string())),
    ];
    let marked = Some(rows).mark_modified().unwrap_or_default();
    assert!(marked.iter().all(|(left, right)| left.modified && right.modified));
    assert_eq!(marked[0].1.value, "x");
}

#[rstest]
fn validated_alt_prefers_edited_values() {
    let edited = Validated::touched(1);
    let fresh = Validated::fresh(2);
    assert_eq!(edited.alt(|| Validated::fresh(3)), Validated::touched(1));
    assert_eq!(fresh.alt(|| Validated::fresh(3)), Validated::fresh(3));
}
