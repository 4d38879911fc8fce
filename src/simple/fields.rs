//! Ready-made labelled fields over text input.
//!
//! Every text field is a [`leaf`] over `String` with `label`, `required` and
//! input hint props, validated with a labelled validator so that messages
//! read like `"Year must be a number"`. Each reports its result as its
//! children, so it can go straight into a record.

use super::ui::{FieldLeaf, Props, leaf};
use crate::form::Form;
use crate::typeclass::Semigroup;
use crate::validation::{
    self, Bounds, DateString, Email, NonEmptyString, NonNegative, Phone, Usd, Validated, Validator,
};

/// A validated text field.
pub type TextField<T> = Form<FieldLeaf<String>, Validated<String>, T, Option<T>>;

/// Smallest year accepted by [`year`].
pub const MIN_YEAR: u64 = 1900;
/// Largest year accepted by [`year`].
pub const MAX_YEAR: u64 = 2100;

fn text_field<T: Clone + 'static>(label: &str, props: Props, validator: Validator<String, T>) -> TextField<T> {
    leaf::<String>()
        .with_props(Props::new().label(label).combine(props))
        .validate_leaf(validator.with_label(label))
}

/// Maps empty input to `default` when one is given. The flag says whether
/// the field is still required.
fn defaulted<T: Clone + 'static>(validator: Validator<String, T>, default: Option<T>) -> (Validator<String, T>, bool) {
    match default {
        Some(default) => (validator.or_default(default), false),
        None => (validator, true),
    }
}

fn required(required: bool) -> Props {
    Props::new().with("required", required.to_string())
}

fn decimal(is_required: bool) -> Props {
    required(is_required).with("inputMode", "decimal")
}

/// Any non-empty text.
pub fn required_text(label: &str) -> TextField<NonEmptyString> {
    text_field(label, required(true), validation::non_empty())
}

/// A decimal number within `bounds`; empty input means `default` when one
/// is given.
pub fn number(label: &str, bounds: Bounds<f64>, default: Option<f64>) -> TextField<f64> {
    let (validator, is_required) = defaulted(validation::number(), default);
    text_field(label, decimal(is_required), validator.and_then(Validator::bounded(bounds)))
}

/// A whole number `>= 0` within `bounds`; empty input means `default` when
/// one is given.
pub fn natural_number(label: &str, bounds: Bounds<u64>, default: Option<u64>) -> TextField<u64> {
    let (validator, is_required) = defaulted(validation::natural_number(), default);
    text_field(label, decimal(is_required), validator.and_then(Validator::bounded(bounds)))
}

/// A year between [`MIN_YEAR`] and [`MAX_YEAR`].
pub fn year(label: &str, default: Option<u64>) -> TextField<u64> {
    natural_number(label, Bounds::between(MIN_YEAR, MAX_YEAR), default)
}

/// A percentage stored as a fraction: the entered number divided by
/// `whole_amt`, which is 100 unless given.
pub fn rate(label: &str, whole_amt: Option<f64>) -> TextField<f64> {
    bounded_rate(label, Bounds::unbounded(), whole_amt, None)
}

/// A [`rate`] whose entered number must lie within `bounds`. Empty input
/// means `default` when one is given; both are in entered units, before
/// the division.
pub fn bounded_rate(
    label: &str,
    bounds: Bounds<f64>,
    whole_amt: Option<f64>,
    default: Option<f64>,
) -> TextField<f64> {
    let whole_amt = whole_amt.unwrap_or(100.0);
    let (validator, is_required) = defaulted(validation::number(), default);
    text_field(
        label,
        decimal(is_required),
        validator
            .and_then(Validator::bounded(bounds))
            .map(move |amount| amount / whole_amt),
    )
}

/// A number `>= 0`; empty input means `default` when one is given.
pub fn non_negative(label: &str, default: Option<NonNegative>) -> TextField<NonNegative> {
    let (validator, is_required) = defaulted(validation::non_negative(), default);
    text_field(label, decimal(is_required), validator)
}

/// A required dollar amount.
pub fn dollars(label: &str) -> TextField<Usd> {
    text_field(label, decimal(true), validation::non_negative().map(Usd::from))
}

/// A dollar amount where empty input means zero.
pub fn optional_dollars(label: &str) -> TextField<Usd> {
    text_field(
        label,
        decimal(false),
        validation::non_negative()
            .or_default(NonNegative::ZERO)
            .map(Usd::from),
    )
}

/// An email address; empty input means `default` when one is given.
pub fn email(label: &str, default: Option<Email>) -> TextField<Email> {
    let (validator, is_required) = defaulted(validation::email(), default);
    text_field(label, required(is_required).with("type", "email"), validator)
}

/// A phone number; empty input means `default` when one is given.
pub fn phone(label: &str, default: Option<Phone>) -> TextField<Phone> {
    let (validator, is_required) = defaulted(validation::phone(), default);
    text_field(label, required(is_required).with("type", "tel"), validator)
}

/// A date, normalized to `YYYY-MM-DD`; empty input means `default` when one
/// is given.
pub fn date(label: &str, default: Option<DateString>) -> TextField<DateString> {
    let (validator, is_required) = defaulted(validation::date(), default);
    text_field(label, required(is_required).with("type", "date"), validator)
}

/// A checkbox. Always valid.
pub fn toggle(label: &str) -> Form<FieldLeaf<bool>, bool, bool, ()> {
    leaf::<bool>().with_props(Props::new().label(label).with("type", "checkbox"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{ChangeFn, EditContext};
    use rstest::rstest;

    fn error_of<T: Clone + 'static>(field: &TextField<T>, input: &str) -> Option<String> {
        field
            .evaluate(&Validated::touched(input.to_string()))
            .edit
            .render(EditContext::new(ChangeFn::ignore()))
            .error
    }

    #[rstest]
    #[case("1999", None)]
    #[case("", Some("Year is required"))]
    #[case("abc", Some("Year must be a number"))]
    #[case("1800", Some("Year must be greater than 1900"))]
    #[case("2200", Some("Year must be less than 2100"))]
    #[case("19.5", Some("Year must be a non-negative integer"))]
    fn year_reports_labelled_errors(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(error_of(&year("Year", None), input).as_deref(), expected);
    }

    #[rstest]
    fn optional_dollars_defaults_to_zero() {
        let field = optional_dollars("Tip");
        let evaluation = field.evaluate(&Validated::fresh(String::new()));
        assert_eq!(evaluation.validate.map(Usd::dollars), Some(0.0));
        assert_eq!(evaluation.children.map(Usd::dollars), Some(0.0));
    }

    #[rstest]
    fn dollars_requires_input() {
        assert_eq!(error_of(&dollars("Price"), "").as_deref(), Some("Price is required"));
        assert_eq!(error_of(&dollars("Price"), "-3").as_deref(), Some("Price must be positive"));
    }

    #[rstest]
    fn props_describe_the_input() {
        let ui = email("Email", None)
            .evaluate(&Validated::fresh(String::new()))
            .edit
            .render(EditContext::new(ChangeFn::ignore()));
        assert_eq!(ui.props.get("label"), Some("Email"));
        assert_eq!(ui.props.get("type"), Some("email"));
        assert!(ui.props.flag("required"));

        let optional = optional_dollars("Tip")
            .evaluate(&Validated::fresh(String::new()))
            .edit
            .render(EditContext::new(ChangeFn::ignore()));
        assert!(!optional.props.flag("required"));
        assert_eq!(optional.props.get("inputMode"), Some("decimal"));
    }

    #[rstest]
    #[case("", Some(2000))]
    #[case("1999", Some(1999))]
    #[case("abc", None)]
    #[case("1800", None)]
    fn year_default_fills_empty_input(#[case] input: &str, #[case] expected: Option<u64>) {
        let field = year("Year", Some(2000));
        assert_eq!(field.revalidate(&Validated::touched(input.to_string())), expected);
        assert_eq!(error_of(&field, ""), None);
        assert_eq!(error_of(&field, "abc").as_deref(), Some("Year must be a number"));
    }

    #[rstest]
    #[case("5", None, Some(0.05))]
    #[case("250", Some(1000.0), Some(0.25))]
    #[case("", None, None)]
    #[case("five", None, None)]
    fn rate_divides_by_the_whole(#[case] input: &str, #[case] whole_amt: Option<f64>, #[case] expected: Option<f64>) {
        let field = rate("Rate", whole_amt);
        assert_eq!(field.revalidate(&Validated::touched(input.to_string())), expected);
    }

    #[rstest]
    fn bounded_rate_checks_entered_units() {
        let field = bounded_rate("Rate", Bounds::between(0.0, 50.0), None, Some(10.0));
        assert_eq!(field.revalidate(&Validated::touched(String::new())), Some(0.1));
        assert_eq!(error_of(&field, "60").as_deref(), Some("Rate must be less than 50"));
    }

    #[rstest]
    fn defaults_make_fields_optional() {
        let props = |field: TextField<DateString>| {
            field
                .evaluate(&Validated::fresh(String::new()))
                .edit
                .render(EditContext::new(ChangeFn::ignore()))
                .props
        };
        let fallback = validation::date().run("2000-01-01".into()).ok();
        assert!(props(date("Start", None)).flag("required"));
        assert!(!props(date("Start", fallback.clone())).flag("required"));

        let field = date("Start", fallback);
        assert_eq!(
            field.revalidate(&Validated::touched(String::new())).map(|date| date.to_string()),
            Some("2000-01-01".to_string())
        );
        assert!(error_of(&field, "not a date").is_some());
    }

    #[rstest]
    fn toggle_is_always_valid() {
        assert_eq!(toggle("Subscribe").revalidate(&false), Some(false));
    }
}
