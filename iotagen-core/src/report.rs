//! Output formatting - plaintext and JSON.

use serde_json::{json, Map, Value};

use crate::extract::Extraction;

/// Prints an extraction outcome in plain text format.
pub fn print_plain(package_name: &str, extraction: &Extraction) {
    println!("package {}", package_name);

    for (name, state) in extraction.map.iter() {
        match state.sequence() {
            Some(members) => println!("{}: {}", name, members.join(", ")),
            None => println!("{}: <{}>", name, state.label()),
        }
    }

    if !extraction.issues.is_empty() {
        println!("ISSUES ({}):", extraction.issues.len());
        for issue in &extraction.issues {
            println!("- {}", issue);
        }
    }
}

/// Builds the JSON representation of an extraction outcome.
pub fn to_json(package_name: &str, extraction: &Extraction) -> Value {
    let mut types = Map::new();
    for (name, state) in extraction.map.iter() {
        let mut entry = Map::new();
        entry.insert("state".into(), json!(state.label()));
        if let Some(members) = state.sequence() {
            entry.insert("members".into(), json!(members));
        }
        types.insert(name.to_string(), Value::Object(entry));
    }

    let issues: Vec<Value> = extraction
        .issues
        .iter()
        .map(|issue| {
            json!({
                "kind": issue.kind.label(),
                "type_name": issue.type_name,
                "message": issue.message(),
            })
        })
        .collect();

    json!({
        "package": package_name,
        "types": types,
        "issues": issues,
    })
}

/// Prints an extraction outcome in JSON format.
///
/// Falls back to plain output if serialization fails (should never
/// happen for these shapes, but every case is handled).
pub fn print_json(package_name: &str, extraction: &Extraction) {
    let value = to_json(package_name, extraction);
    match serde_json::to_string_pretty(&value) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            print_plain(package_name, extraction);
        }
    }
}
