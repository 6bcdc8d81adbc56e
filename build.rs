fn main() {
    println!("cargo:rerun-if-env-changed=LCDFM_BUILD_VERSION");
    if let Ok(value) = std::env::var("LCDFM_BUILD_VERSION") {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            println!("cargo:rustc-env=LCDFM_BUILD_VERSION={trimmed}");
        }
    }
}
