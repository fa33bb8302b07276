use super::*;
use std::path::PathBuf;

#[test]
fn parse_args_core_shorts() -> AppResult<()> {
    let args = parse_test_args([
        "pummel",
        "-n",
        "100",
        "-c",
        "10",
        "-t",
        "30",
        "-T",
        "application/json",
        "-A",
        "user:secret",
        "http://localhost:8080/path",
    ])?;
    if args.requests.map(u64::from) != Some(100) {
        return Err(AppError::validation("Unexpected requests"));
    }
    if args.concurrency.get() != 10 {
        return Err(AppError::validation("Unexpected concurrency"));
    }
    if args.timelimit != 30 {
        return Err(AppError::validation("Unexpected timelimit"));
    }
    if args.content_type != "application/json" {
        return Err(AppError::validation("Unexpected content type"));
    }
    if args.basic_auth.as_deref() != Some("user:secret") {
        return Err(AppError::validation("Unexpected basic auth"));
    }
    if args.url != "http://localhost:8080/path" {
        return Err(AppError::validation("Unexpected URL"));
    }
    Ok(())
}

#[test]
fn parse_args_boolean_flags() -> AppResult<()> {
    let args = parse_test_args(["pummel", "-k", "-z", "-r", "http://localhost/"])?;
    if !args.keep_alive {
        return Err(AppError::validation("Expected keep-alive on"));
    }
    if !args.gzip {
        return Err(AppError::validation("Expected gzip on"));
    }
    if !args.continue_on_error {
        return Err(AppError::validation("Expected continue-on-error on"));
    }
    Ok(())
}

#[test]
fn parse_args_body_file_flags() -> AppResult<()> {
    let post_args = parse_test_args(["pummel", "-p", "body.json", "http://localhost/"])?;
    if post_args.post_file != Some(PathBuf::from("body.json")) {
        return Err(AppError::validation("Unexpected post file"));
    }
    let put_args = parse_test_args(["pummel", "-u", "body.bin", "http://localhost/"])?;
    if put_args.put_file != Some(PathBuf::from("body.bin")) {
        return Err(AppError::validation("Unexpected put file"));
    }
    Ok(())
}

#[test]
fn parse_args_verbosity_and_workers() -> AppResult<()> {
    let args = parse_test_args(["pummel", "-v", "2", "-G", "4", "http://localhost/"])?;
    if args.verbosity != 2 {
        return Err(AppError::validation("Unexpected verbosity"));
    }
    if args.workers.get() != 4 {
        return Err(AppError::validation("Unexpected workers"));
    }
    Ok(())
}

#[test]
fn parse_args_long_aliases() -> AppResult<()> {
    let args = parse_test_args([
        "pummel",
        "--requests",
        "5",
        "--concurrency",
        "2",
        "--timelimit",
        "7",
        "--keep-alive",
        "http://localhost/",
    ])?;
    if args.requests.map(u64::from) != Some(5) {
        return Err(AppError::validation("Unexpected requests"));
    }
    if args.concurrency.get() != 2 {
        return Err(AppError::validation("Unexpected concurrency"));
    }
    if args.timelimit != 7 {
        return Err(AppError::validation("Unexpected timelimit"));
    }
    if !args.keep_alive {
        return Err(AppError::validation("Expected keep-alive on"));
    }
    Ok(())
}
