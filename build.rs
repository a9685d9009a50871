fn main() {
    let now = chrono::Utc::now();

    // Exposed to the crate through env! for the footer and build stamp
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.format("%Y"));

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CONTACT_WEBHOOK_URL");
}
