use crate::operation::ArgumentSet;
use crate::operation::ArgumentSetBuildError;
use crate::Value;

type Result<T> = std::result::Result<T, ArgumentSetBuildError>;

#[test]
fn string_values_are_quoted_and_scalars_are_bare() -> Result<()> {
    let arguments = ArgumentSet::new()
        .add("a", "x")?
        .add("b", 1)?
        .add("c", true)?
        .add("d", 3.14)?;
    assert_eq!(arguments.to_string(), r#"a:"x",b:1,c:true,d:3.14"#);
    Ok(())
}

#[test]
fn entries_render_in_insertion_order() -> Result<()> {
    let arguments = ArgumentSet::new()
        .add("token", "123456iadd")?
        .add("userId", 1)?;
    assert_eq!(arguments.to_string(), r#"token:"123456iadd",userId:1"#);

    let names: Vec<&str> = arguments.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["token", "userId"]);
    Ok(())
}

#[test]
fn empty_set_renders_the_empty_string() {
    let arguments = ArgumentSet::new();
    assert!(arguments.is_empty());
    assert_eq!(arguments.to_string(), "");
}

#[test]
fn duplicate_argument_names_are_rejected() -> Result<()> {
    let result = ArgumentSet::new().add("id", 1)?.add("id", 2);
    assert!(matches!(
        result,
        Err(ArgumentSetBuildError::DuplicateArgumentName { .. }),
    ));
    Ok(())
}

#[test]
fn empty_argument_names_are_rejected() {
    assert!(matches!(
        ArgumentSet::new().add("", 1),
        Err(ArgumentSetBuildError::EmptyArgumentName),
    ));
}

#[test]
fn from_entries_preserves_entry_order() -> Result<()> {
    let arguments = ArgumentSet::from_entries(vec![
        ("userId".to_string(), Value::Int(1)),
        ("token".to_string(), Value::String("123456iadd".to_string())),
    ])?;
    assert_eq!(arguments.len(), 2);
    assert_eq!(arguments.get("userId"), Some(&Value::Int(1)));
    assert_eq!(arguments.to_string(), r#"userId:1,token:"123456iadd""#);
    Ok(())
}

#[test]
fn string_values_pass_through_unescaped() -> Result<()> {
    let arguments = ArgumentSet::new().add("note", r#"say "hi""#)?;
    assert_eq!(arguments.to_string(), r#"note:"say "hi"""#);
    Ok(())
}
