//! Tests for the `Lenses` and `MarkModified` derive macros.

use formlets::laws::verify_lens;
use formlets::optics::Lens;
use formlets::simple::{RecordBuilder, leaf};
use formlets::validation::{MarkModified, Validated, natural_number};
use formlets::{Lenses, MarkModified};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, Debug, PartialEq, Lenses, MarkModified)]
struct Profile {
    name: Validated<String>,
    age: Validated<String>,
    #[mark_modified(skip)]
    newsletter: bool,
    tags: Vec<Validated<String>>,
}

#[derive(Clone, Debug, PartialEq, Lenses)]
struct Wrapper<T> {
    inner: T,
    count: usize,
}

#[derive(Clone, Debug, PartialEq, MarkModified)]
struct Pair(Validated<i32>, #[mark_modified(skip)] Validated<i32>);

#[derive(Clone, Debug, PartialEq, MarkModified)]
struct Nested {
    profile: Profile,
    backup: Option<Profile>,
}

fn profile() -> Profile {
    Profile {
        name: Validated::fresh("Ada".into()),
        age: Validated::fresh("36".into()),
        newsletter: false,
        tags: vec![Validated::fresh("math".into())],
    }
}

// =============================================================================
// Lenses
// =============================================================================

#[rstest]
fn generated_lenses_get_and_set() {
    let lens = Profile::age_lens();
    assert_eq!(lens.get(&profile()).value, "36");

    let updated = lens.set(profile(), Validated::touched("37".into()));
    assert_eq!(updated.age, Validated::touched("37".to_string()));
    assert_eq!(updated.name, profile().name);
}

#[rstest]
fn generated_lenses_are_lawful() {
    assert_eq!(
        verify_lens(&Profile::newsletter_lens(), &profile(), &true, &false),
        Ok(())
    );
    assert_eq!(
        verify_lens(
            &Profile::tags_lens(),
            &profile(),
            &Vec::new(),
            &vec![Validated::touched("x".to_string())]
        ),
        Ok(())
    );
}

#[rstest]
fn generic_structs_get_lenses() {
    let wrapper = Wrapper { inner: 'a', count: 1 };
    let updated = Wrapper::<char>::inner_lens().set(wrapper, 'b');
    assert_eq!(updated, Wrapper { inner: 'b', count: 1 });
    assert_eq!(*Wrapper::<char>::count_lens().get(&updated), 1);
}

#[rstest]
fn generated_lenses_focus_record_fields() {
    let form = RecordBuilder::<Profile, ()>::new()
        .field_at("age", Profile::age_lens(), leaf::<String>().validate_leaf(natural_number()))
        .field_at("newsletter", Profile::newsletter_lens(), leaf::<bool>())
        .build();
    assert_eq!(form.revalidate(&profile()), Some((((), 36), false)));
}

// =============================================================================
// MarkModified
// =============================================================================

#[rstest]
fn mark_modified_touches_every_validated_field() {
    let marked = profile().mark_modified();
    assert!(marked.name.modified);
    assert!(marked.age.modified);
    assert!(marked.tags.iter().all(|tag| tag.modified));
    assert_eq!(marked.name.value, "Ada");
    assert!(!marked.newsletter);
}

#[rstest]
fn skipped_fields_are_left_alone() {
    let marked = Pair(Validated::fresh(1), Validated::fresh(2)).mark_modified();
    assert_eq!(marked, Pair(Validated::touched(1), Validated::fresh(2)));
}

#[rstest]
fn derived_impls_nest() {
    let nested = Nested {
        profile: profile(),
        backup: Some(profile()),
    };
    let marked = nested.mark_modified();
    assert!(marked.profile.name.modified);
    assert!(marked.backup.is_some_and(|backup| backup.age.modified));
}
