use std::rc::Rc;

use super::ui::{FieldLeaf, Props, SelectItem, SelectUi, ValueLeaf};
use crate::form::{Edit, EditContext, Evaluation, Form, Update};

/// A single-choice form over `Option<A>`.
///
/// `options` pairs each choice's label with its value. The editor exposes the
/// choices as string items and the current choice as a string field; edits
/// of that field are parsed back with `from_string`, and text that does not
/// parse clears the choice. The form is always valid with the current
/// choice.
///
/// ```
/// use formlets::form::{ChangeFn, EditContext};
/// use formlets::simple::select;
///
/// let size = select(
///     vec![("Small".to_string(), 1_u8), ("Large".to_string(), 2_u8)],
///     |size: &u8| size.to_string(),
///     |text: &str| text.parse().ok(),
///     Some("Size"),
/// );
///
/// let evaluation = size.evaluate(&Some(2));
/// assert_eq!(evaluation.validate, Some(Some(2)));
///
/// let ui = evaluation.edit.render(EditContext::new(ChangeFn::ignore()));
/// assert_eq!(ui.select.value, "2");
/// assert_eq!(ui.items[0].value.label, "Small");
/// assert_eq!(ui.select.props.get("label"), Some("Size"));
/// ```
pub fn select<A, T, P>(
    options: Vec<(String, A)>,
    to_string: T,
    from_string: P,
    label: Option<&str>,
) -> Form<SelectUi, Option<A>, Option<A>, ()>
where
    A: Clone + 'static,
    T: Fn(&A) -> String + 'static,
    P: Fn(&str) -> Option<A> + 'static,
{
    let items: Vec<ValueLeaf<SelectItem>> = options
        .iter()
        .map(|(label, value)| ValueLeaf {
            value: SelectItem {
                label: label.clone(),
                value: to_string(value),
            },
        })
        .collect();
    let props = label.map_or_else(Props::new, |label| Props::new().label(label));
    let to_string = Rc::new(to_string);
    let from_string = Rc::new(from_string);

    Form::new(move |selected: &Option<A>| {
        let value = selected.as_ref().map(|choice| to_string(choice)).unwrap_or_default();
        let items = items.clone();
        let props = props.clone();
        let to_string = Rc::clone(&to_string);
        let from_string = Rc::clone(&from_string);
        Evaluation {
            edit: Edit::new(move |context: EditContext<Option<A>>| SelectUi {
                items,
                select: FieldLeaf {
                    value,
                    on_change: context.on_change.lift(move |update: Update<String>| {
                        let to_string = Rc::clone(&to_string);
                        let from_string = Rc::clone(&from_string);
                        Box::new(move |current: Option<A>| {
                            let text = current.as_ref().map(|choice| to_string(choice)).unwrap_or_default();
                            from_string(&update(text))
                        })
                    }),
                    error: context.error,
                    props,
                },
            }),
            validate: Some(selected.clone()),
            children: (),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ChangeFn;
    use rstest::rstest;
    use std::cell::RefCell;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Colour {
        Red,
        Blue,
    }

    fn colour_form() -> Form<SelectUi, Option<Colour>, Option<Colour>, ()> {
        select(
            vec![("Red".into(), Colour::Red), ("Blue".into(), Colour::Blue)],
            |colour: &Colour| format!("{colour:?}").to_lowercase(),
            |text: &str| match text {
                "red" => Some(Colour::Red),
                "blue" => Some(Colour::Blue),
                _ => None,
            },
            None,
        )
    }

    fn select_and_record(initial: Option<Colour>, text: &str) -> Option<Colour> {
        let state = Rc::new(RefCell::new(initial));
        let target = Rc::clone(&state);
        let on_change = ChangeFn::new(move |update: Update<Option<Colour>>| {
            let current = *target.borrow();
            *target.borrow_mut() = update(current);
        });
        let ui = colour_form().evaluate(&initial).edit.render(EditContext::new(on_change));
        ui.select.on_change.set(text.to_string());
        let result = *state.borrow();
        result
    }

    #[rstest]
    #[case(None, "blue", Some(Colour::Blue))]
    #[case(Some(Colour::Blue), "red", Some(Colour::Red))]
    #[case(Some(Colour::Red), "", None)]
    #[case(Some(Colour::Red), "green", None)]
    fn string_edits_are_parsed(
        #[case] initial: Option<Colour>,
        #[case] text: &str,
        #[case] expected: Option<Colour>,
    ) {
        assert_eq!(select_and_record(initial, text), expected);
    }

    #[rstest]
    fn empty_selection_renders_empty_string_and_stays_valid() {
        let evaluation = colour_form().evaluate(&None);
        assert_eq!(evaluation.validate, Some(None));
        let ui = evaluation.edit.render(EditContext::new(ChangeFn::ignore()));
        assert_eq!(ui.select.value, "");
        assert!(ui.select.props.is_empty());
        assert_eq!(
            ui.items.iter().map(|item| item.value.value.as_str()).collect::<Vec<_>>(),
            vec!["red", "blue"]
        );
    }
}
