use dotenvy::dotenv;

const FORWARDED: [&str; 4] = ["BACKEND_URL", "WAITLIST_PATH", "CAROUSEL_INTERVAL_MS", "RUST_LOG"];

fn main() {
    dotenv().ok();
    println!("cargo:rerun-if-changed=build.rs");
    for var in FORWARDED {
        println!("cargo:rerun-if-env-changed={}", var);
        if let Ok(value) = std::env::var(var) {
            println!("cargo:rustc-env={}={}", var, value);
        }
    }
}
