//! CLI integration tests
//!
//! Run the built binary and check exit codes, plan output and failure
//! reasons.

use dotnet_detect::DependencyPlan;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const PROJECT: &str = r#"<Project Sdk="Microsoft.NET.Sdk.Web">
  <PropertyGroup>
    <TargetFramework>netcoreapp2.2</TargetFramework>
  </PropertyGroup>
  <ItemGroup>
    <PackageReference Include="Microsoft.AspNetCore.App" />
  </ItemGroup>
</Project>"#;

fn detect_bin() -> PathBuf {
    let mut path = env::current_exe()
        .expect("Failed to get current executable path")
        .parent()
        .expect("No parent")
        .to_path_buf();

    if path.ends_with("deps") {
        path = path.parent().expect("No parent").to_path_buf();
    }

    path.join("dotnet-detect")
}

fn run(args: &[&str]) -> Output {
    Command::new(detect_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("DOTNET_DETECT_LOG_LEVEL")
        .env_remove("DOTNET_DETECT_PLAN_FORMAT")
        .output()
        .expect("Failed to execute dotnet-detect")
}

fn app_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

#[test]
fn test_cli_help() {
    let output = run(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dotnet-detect"));
    assert!(stdout.contains("--plan"));
}

#[test]
fn test_pass_prints_toml_plan() {
    let app = app_with(&[("web.csproj", PROJECT)]);

    let output = run(&[app.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let plan: DependencyPlan = toml::from_str(&String::from_utf8_lossy(&output.stdout))
        .expect("stdout should be a TOML plan");
    assert_eq!(plan, DependencyPlan::for_framework("2.2.0", true));
}

#[test]
fn test_pass_writes_json_plan_file() {
    let app = app_with(&[("web.csproj", PROJECT)]);
    let plan_path = app.path().join("plan.json");

    let output = run(&[
        app.path().to_str().unwrap(),
        "--plan",
        plan_path.to_str().unwrap(),
        "--format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let plan: DependencyPlan =
        serde_json::from_str(&fs::read_to_string(&plan_path).unwrap()).unwrap();
    assert_eq!(plan.requires.len(), 4);
}

#[test]
fn test_no_proj_file_exits_with_fail_code() {
    let app = app_with(&[("README.md", "# nothing here")]);

    let output = run(&["-q", app.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(100));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no proj file found"));
}

#[test]
fn test_conflicting_types_exit_with_fail_code() {
    let app = app_with(&[("web.csproj", PROJECT), ("lib.fsproj", PROJECT)]);

    let output = run(&[app.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(100));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("multiple project file types found"));
}

#[test]
fn test_non_utf8_proj_file_exits_with_fail_code() {
    let app = TempDir::new().unwrap();
    let mut content = vec![b'<', b'!', b'-', b'-', b' ', 0xe9, b' ', b'-', b'-', b'>'];
    content.extend_from_slice(PROJECT.as_bytes());
    fs::write(app.path().join("app.csproj"), content).unwrap();

    let output = run(&[app.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(100));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no target framework found in proj file"));
}

#[test]
fn test_missing_directory_exits_with_error_code() {
    let app = TempDir::new().unwrap();
    let missing = app.path().join("missing");

    let output = run(&[missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_plan_format_env_exits_with_error_code() {
    let app = app_with(&[("web.csproj", PROJECT)]);

    let output = Command::new(detect_bin())
        .arg(app.path())
        .env("DOTNET_DETECT_PLAN_FORMAT", "yaml")
        .output()
        .expect("Failed to execute dotnet-detect");

    assert_eq!(output.status.code(), Some(1));
}
