use super::*;

#[test]
fn header_flag_is_repeatable_and_ordered() -> AppResult<()> {
    let args = parse_test_args([
        "pummel",
        "-H",
        "Accept-Encoding: gzip",
        "-H",
        "X-Run: 1",
        "-H",
        "Accept-Encoding: gzip",
        "http://localhost/",
    ])?;
    if args.headers != ["Accept-Encoding: gzip", "X-Run: 1", "Accept-Encoding: gzip"] {
        return Err(AppError::validation("Header order or duplicates lost"));
    }
    Ok(())
}

#[test]
fn cookie_flag_is_repeatable_and_ordered() -> AppResult<()> {
    let args = parse_test_args([
        "pummel",
        "-C",
        "Apache=1234",
        "-C",
        "session=abc",
        "http://localhost/",
    ])?;
    if args.cookies != ["Apache=1234", "session=abc"] {
        return Err(AppError::validation("Cookie order lost"));
    }
    Ok(())
}

#[test]
fn option_set_preserves_order_and_duplicates() -> AppResult<()> {
    let mut set = OptionSet::new();
    set.set("a");
    set.set("b");
    set.set("a");
    if set.as_slice() != ["a", "b", "a"] {
        return Err(AppError::validation("Unexpected OptionSet contents"));
    }
    if set.len() != 3 || set.is_empty() {
        return Err(AppError::validation("Unexpected OptionSet length"));
    }
    Ok(())
}

#[test]
fn option_set_renders_for_diagnostics() -> AppResult<()> {
    let set: OptionSet = ["a", "b"].into_iter().map(str::to_owned).collect();
    if set.to_string() != "[a b]" {
        return Err(AppError::validation(format!(
            "Unexpected rendering: {set}"
        )));
    }
    Ok(())
}

#[test]
fn option_set_is_empty_by_default() -> AppResult<()> {
    let set = OptionSet::default();
    if !set.is_empty() {
        return Err(AppError::validation("Expected empty OptionSet"));
    }
    if set.iter().next().is_some() {
        return Err(AppError::validation("Expected no entries to iterate"));
    }
    Ok(())
}
