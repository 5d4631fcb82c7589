use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=LINGODICT_DEFAULT_PATH");

    let default_path = env::var("LINGODICT_DEFAULT_PATH").ok();

    if let Some(raw) = default_path.filter(|value| !value.is_empty()) {
        println!("cargo:rustc-env=LINGODICT_DEFAULT_PATH={raw}");
    }
}
