use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Variables de entorno desde .env (si existe) para option_env! en config.rs
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, comillas opcionales
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // El entorno real del build tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BACKEND_URL");
    println!("cargo:rerun-if-env-changed=TOKEN_STORAGE_KEY");
    println!("cargo:rerun-if-env-changed=ENABLE_LOGGING");
}
