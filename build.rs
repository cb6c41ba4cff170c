use std::{env, fs, path::PathBuf};

fn main() {
    // 1) Handle memory.x based on target
    let target = env::var("TARGET").unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    if target.starts_with("thumbv8m") {
        // Pico 2 ARM
        copy_memory_x("memory-pico2.x", &out_dir);
    } else if target.starts_with("thumbv6m") {
        // Pico 1
        copy_memory_x("memory-pico1.x", &out_dir);
    }

    // 2) Load optional env files
    let _ = dotenvy::from_filename(".env");
    load_home_env(".pico.env");
    load_home_env(".env");

    // 3) Game settings, parsed by `GameConfig::from_build_env`
    let tick_ms = env_or_default("SNAKE_TICK_MS", "250");
    let intensity = env_or_default("SNAKE_INTENSITY", "5");
    let render = env_or_default("SNAKE_RENDER", "rows");

    if !matches!(render.trim(), "rows" | "frame") {
        println!("cargo:warning=SNAKE_RENDER should be `rows` or `frame`, got `{render}`");
    }

    println!("cargo:rustc-env=SNAKE_TICK_MS={tick_ms}");
    println!("cargo:rustc-env=SNAKE_INTENSITY={intensity}");
    println!("cargo:rustc-env=SNAKE_RENDER={render}");

    println!("cargo:rerun-if-env-changed=SNAKE_TICK_MS");
    println!("cargo:rerun-if-env-changed=SNAKE_INTENSITY");
    println!("cargo:rerun-if-env-changed=SNAKE_RENDER");
    println!("cargo:rerun-if-changed=.env");
}

fn copy_memory_x(file: &str, out_dir: &PathBuf) {
    let memory_x = fs::read_to_string(file).unwrap_or_else(|_| panic!("Failed to read {file}"));
    let dest = out_dir.join("memory.x");
    fs::write(&dest, memory_x).expect("Failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed={file}");
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let path = home.join(file);
    let _ = dotenvy::from_path(&path);
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
