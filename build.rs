use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct NameData {
    surname_prefixes: Vec<String>,
    case_sensitive_surname_prefixes: Vec<String>,
    mac_exceptions: Vec<String>,
    forced_casings: HashMap<String, String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/name_data.json")?;
    let names: NameData = serde_json::from_str(&json)?;

    // Case-insensitive prefixes are looked up by their lowercase form, so
    // store them that way regardless of how the data file spells them
    let surname_prefixes = names
        .surname_prefixes
        .iter()
        .map(|p| p.to_lowercase())
        .collect::<Vec<_>>();
    write_set(&output.join("surname_prefixes.rs"), &surname_prefixes)?;
    write_set(
        &output.join("case_sensitive_surname_prefixes.rs"),
        &names.case_sensitive_surname_prefixes,
    )?;

    let mac_exceptions = names
        .mac_exceptions
        .iter()
        .map(|e| e.to_lowercase())
        .collect::<Vec<_>>();
    write_set(&output.join("mac_exceptions.rs"), &mac_exceptions)?;

    let forced_casings = names
        .forced_casings
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v))
        .collect::<HashMap<_, _>>();
    write_map(&output.join("forced_casings.rs"), &forced_casings, |v| {
        format!("\"{}\"", v)
    })?;

    Ok(())
}

fn write_map<'a, K, V, F>(output: &Path, map: &'a HashMap<K, V>, transform: F) -> Result<()>
where
    K: std::ops::Deref<Target = str>,
    F: Fn(&'a V) -> String,
{
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.to_string(), &transform(v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    let mut seen = std::collections::HashSet::new();
    for v in set {
        // phf_codegen panics on duplicate keys
        if seen.insert(v) {
            builder.entry(v);
        }
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
