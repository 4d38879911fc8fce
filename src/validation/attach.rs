use super::{Validated, Validator};
use crate::form::{EditContext, Evaluation, Form, Update};

impl<U, I, A, C> Form<U, I, A, C>
where
    U: 'static,
    I: 'static,
    A: 'static,
    C: 'static,
{
    /// Runs `validator` on this form's output and tracks modification.
    ///
    /// The resulting form is over [`Validated<I>`]:
    ///
    /// - the inner form is evaluated at `state.value`;
    /// - an inner `None` stays `None`, with no error;
    /// - a validator success is always reported;
    /// - a validator failure becomes an error in the edit context only when
    ///   `state.modified` is set; while the state is fresh it is a silent
    ///   `None`;
    /// - every update the editor emits marks the state modified.
    ///
    /// ```
    /// use formlets::form::{ChangeFn, EditContext};
    /// use formlets::simple::leaf;
    /// use formlets::validation::{Validated, number};
    ///
    /// let form = leaf::<String>().validate_with(number().with_label("Price"));
    ///
    /// let fresh = form.evaluate(&Validated::fresh("abc".to_string()));
    /// assert_eq!(fresh.validate, None);
    /// let ui = fresh.edit.render(EditContext::new(ChangeFn::ignore()));
    /// assert_eq!(ui.error, None);
    ///
    /// let touched = form.evaluate(&Validated::touched("abc".to_string()));
    /// let ui = touched.edit.render(EditContext::new(ChangeFn::ignore()));
    /// assert_eq!(ui.error.as_deref(), Some("Price must be a number"));
    /// ```
    #[must_use]
    pub fn validate_with<B: 'static>(self, validator: Validator<A, B>) -> Form<U, Validated<I>, B, C> {
        Form::new(move |state: &Validated<I>| {
            let Evaluation {
                edit,
                validate,
                children,
            } = self.evaluate(&state.value);
            let (validate, error) = match validate.map(|value| validator.run(value)) {
                None => (None, None),
                Some(Ok(value)) => (Some(value), None),
                Some(Err(error)) if state.modified => (None, Some(error)),
                Some(Err(_)) => (None, None),
            };
            Evaluation {
                edit: edit.with_context(move |context: EditContext<Validated<I>>| {
                    context
                        .lift(|update: Update<I>| {
                            Box::new(move |current: Validated<I>| {
                                Validated::touched(update(current.value))
                            })
                        })
                        .with_error(error)
                }),
                validate,
                children,
            }
        })
    }
}

impl<U, I, A> Form<U, I, A, ()>
where
    U: 'static,
    I: 'static,
    A: 'static,
{
    /// [`validate_with`](Form::validate_with) for a leaf, reporting the
    /// validated output as its children.
    ///
    /// Record and array builders read field validity from these children
    /// without running the validator again.
    #[must_use]
    pub fn validate_leaf<B>(self, validator: Validator<A, B>) -> Form<U, Validated<I>, B, Option<B>>
    where
        B: Clone + 'static,
    {
        let validated = self.validate_with(validator);
        Form::new(move |state: &Validated<I>| {
            let Evaluation { edit, validate, .. } = validated.evaluate(state);
            Evaluation {
                edit,
                children: validate.clone(),
                validate,
            }
        })
    }
}
