//! End-to-end tests of a budget form built from the ready-made fields.
//!
//! The form is rendered and edited through a `FormHost`, the way an
//! application would drive it.

use formlets::host::FormHost;
use formlets::prelude::*;
use rstest::rstest;

#[derive(Clone, Debug, Default, PartialEq, Lenses, MarkModified)]
struct Budget {
    dollars: Validated<String>,
    year: Validated<String>,
}

type BudgetForm = Form<UiRecord, Budget, (Usd, u64), RecordChildren>;

fn budget_form() -> BudgetForm {
    RecordBuilder::<Budget, ()>::new()
        .field_at("dollars", Budget::dollars_lens(), fields::dollars("Dollars"))
        .field_at("year", Budget::year_lens(), fields::year("Year", None))
        .build()
        .map(|(((), dollars), year)| (dollars, year))
}

fn untouched() -> Budget {
    Budget {
        dollars: Validated::fresh(String::new()),
        year: Validated::fresh("abc".into()),
    }
}

fn errors(ui: &UiRecord) -> (Option<String>, Option<String>) {
    let error = |name: &str| ui.get(name).and_then(UiTree::as_field).and_then(|field| field.error.clone());
    (error("dollars"), error("year"))
}

#[rstest]
fn untouched_invalid_input_shows_no_errors() {
    let host = FormHost::new(budget_form(), untouched());
    let rendered = host.render();
    assert_eq!(rendered.validated, None);
    assert_eq!(errors(&rendered.ui), (None, None));
}

#[rstest]
fn touched_input_shows_only_the_failing_field() {
    let mut host = FormHost::new(budget_form(), untouched());
    host.set_state(Budget {
        dollars: Validated::touched("12.50".into()),
        year: Validated::touched("abc".into()),
    });

    let rendered = host.render();
    assert_eq!(rendered.validated, None);

    let (dollars, year) = errors(&rendered.ui);
    assert_eq!(dollars, None);
    let year = year.unwrap_or_default();
    assert!(year.contains("Year"));
    assert!(year.contains("must be a number"));

    let children = rendered.children;
    assert_eq!(children["dollars"].value_as::<Usd>().map(|usd| usd.dollars()), Some(12.5));
    assert!(children["year"].value.is_none());
}

#[rstest]
fn typing_into_the_fields_completes_the_form() {
    let mut host = FormHost::new(budget_form(), untouched());
    let rendered = host.render();
    let dollars = rendered.ui["dollars"].field::<String>().map(|leaf| leaf.on_change.clone());
    let year = rendered.ui["year"].field::<String>().map(|leaf| leaf.on_change.clone());
    let (Some(dollars), Some(year)) = (dollars, year) else {
        panic!("both fields should render as text fields");
    };

    dollars.set("99.99".into());
    year.set("1899".into());
    host.flush();

    let rendered = host.render();
    assert_eq!(rendered.validated, None);
    assert_eq!(
        errors(&rendered.ui),
        (None, Some("Year must be greater than 1900".to_string()))
    );

    year.set("2024".into());
    host.flush();
    let result = host.render().validated;
    assert_eq!(result.map(|(usd, year)| (usd.to_string(), year)), Some(("$99.99".to_string(), 2024)));
}

#[rstest]
fn submitting_reveals_errors_on_untouched_fields() {
    let mut host = FormHost::new(budget_form(), untouched());
    assert_eq!(host.submit(), None);
    assert_eq!(
        errors(&host.render().ui),
        (
            Some("Dollars is required".to_string()),
            Some("Year must be a number".to_string())
        )
    );
}

#[rstest]
#[case("2100", Some(2100))]
#[case("2101", None)]
#[case("1900", Some(1900))]
#[case("19.5", None)]
fn year_bounds_are_inclusive(#[case] input: &str, #[case] expected: Option<u64>) {
    let budget = Budget {
        dollars: Validated::touched("1".into()),
        year: Validated::touched(input.into()),
    };
    assert_eq!(budget_form().revalidate(&budget).map(|(_, year)| year), expected);
}

#[rstest]
fn field_props_describe_the_inputs() {
    let ui = budget_form()
        .evaluate(&untouched())
        .edit
        .render(EditContext::new(ChangeFn::ignore()));
    let props = |name: &str| ui.get(name).and_then(UiTree::as_field).map(|field| field.props.clone());

    let dollars = props("dollars").unwrap_or_default();
    assert_eq!(dollars.get("label"), Some("Dollars"));
    assert_eq!(dollars.get("inputMode"), Some("decimal"));
    assert!(dollars.flag("required"));
    assert_eq!(props("year").unwrap_or_default().get("label"), Some("Year"));
}

#[rstest]
fn entry_defaults_start_the_form_clean() {
    let (form, initial) = RecordBuilder::<Budget, ()>::new()
        .entry("dollars", Budget::dollars_lens(), fields::dollars("Dollars"), Validated::fresh(String::new()))
        .entry("year", Budget::year_lens(), fields::year("Year", Some(2024)), Validated::fresh(String::new()))
        .build_with_defaults();
    let mut host = FormHost::new(form, initial);
    assert_eq!(errors(&host.render().ui), (None, None));

    assert_eq!(host.submit(), None);
    assert_eq!(errors(&host.render().ui), (Some("Dollars is required".to_string()), None));
    assert_eq!(host.render().children["year"].value_as::<u64>(), Some(&2024));
}
