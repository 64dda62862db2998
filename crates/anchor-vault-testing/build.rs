use std::{env, path::PathBuf, process::Command};

fn main() {
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_TEST_SBF");

    // Only the litesvm integration tests need the compiled program
    if env::var_os("CARGO_FEATURE_TEST_SBF").is_none() {
        return;
    }

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");

    let manifest_path = PathBuf::from(&manifest_dir);
    let workspace_root = manifest_path
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .expect("testing crate lives two levels below the workspace root");

    let program_dir = workspace_root.join("programs").join("anchor-vault");
    let program_manifest = program_dir.join("Cargo.toml");
    let program_src = program_dir.join("src");

    println!("cargo:rerun-if-changed={}", program_manifest.display());
    println!("cargo:rerun-if-changed={}", program_src.display());

    let output = Command::new("cargo")
        .args(["build-sbf", "--manifest-path", &program_manifest.to_string_lossy()])
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            println!("cargo:warning=Failed to build anchor-vault program");
            for line in String::from_utf8_lossy(&output.stderr).lines() {
                println!("cargo:warning={line}");
            }
        }
        Err(e) => {
            println!("cargo:warning=Failed to execute cargo build-sbf: {e}");
            println!("cargo:warning=Make sure the Solana CLI tools are installed and in your PATH");
        }
    }
}
