fn main() {
    // Build metadata shown by `rutcheck version --verbose`. Release images set
    // GIT_SHA/BUILD_DATE in the environment; local builds shell out instead.
    emit("GIT_SHA", "git", &["rev-parse", "--short", "HEAD"]);
    emit("BUILD_DATE", "date", &["+%Y-%m-%d"]);
}

fn emit(var: &str, program: &str, args: &[&str]) {
    let value = std::env::var(var).unwrap_or_else(|_| {
        std::process::Command::new(program)
            .args(args)
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    });

    println!("cargo:rustc-env={}={}", var, value);
}
