use crate::operation::CompositeSelection;
use crate::operation::Selection;
use crate::operation::SelectionBuildError;
use crate::operation::SelectionSet;

type Result<T> = std::result::Result<T, SelectionBuildError>;

#[test]
fn leaf_renders_bare_name() -> Result<()> {
    let selection = Selection::leaf("username")?;
    assert_eq!(selection.to_string(), "username");
    Ok(())
}

#[test]
fn composite_renders_braced_children_in_order() -> Result<()> {
    let selection = Selection::composite("points", vec![
        Selection::leaf("id")?,
        Selection::leaf("value")?,
    ])?;
    assert_eq!(selection.to_string(), "points{id,value}");
    Ok(())
}

#[test]
fn nested_composites_render_recursively() -> Result<()> {
    let selection = Selection::composite("user", vec![
        Selection::leaf("username")?,
        Selection::composite("points", vec![
            Selection::leaf("id")?,
            Selection::leaf("value")?,
        ])?,
    ])?;
    assert_eq!(selection.to_string(), "user{username,points{id,value}}");
    Ok(())
}

#[test]
fn composite_with_empty_selection_set_renders_empty_braces() -> Result<()> {
    let selection = Selection::composite("user", vec![])?;
    assert_eq!(selection.to_string(), "user{}");

    let composite = CompositeSelection::new("user", SelectionSet::empty())?;
    assert!(composite.selection_set().is_empty());
    assert_eq!(Selection::Composite(composite).to_string(), "user{}");
    Ok(())
}

#[test]
fn empty_field_names_are_rejected() {
    assert!(matches!(
        Selection::leaf(""),
        Err(SelectionBuildError::EmptyFieldName),
    ));
    assert!(matches!(
        Selection::composite("", vec![]),
        Err(SelectionBuildError::EmptyFieldName),
    ));
}

#[test]
fn str_conversion_produces_a_leaf() -> Result<()> {
    let selection = Selection::try_from("token")?;
    assert!(matches!(selection, Selection::Leaf(_)));
    assert_eq!(selection.to_string(), "token");

    let owned = Selection::try_from("email".to_string())?;
    assert_eq!(owned.name(), "email");

    assert!(Selection::try_from("").is_err());
    Ok(())
}

#[test]
fn selection_set_preserves_construction_order() -> Result<()> {
    let set: SelectionSet = vec![
        Selection::leaf("b")?,
        Selection::leaf("a")?,
        Selection::leaf("c")?,
    ].into();
    assert_eq!(set.len(), 3);
    assert_eq!(set.to_string(), "{b,a,c}");
    Ok(())
}
