use gb_runtime::{BUNDLED_LIBRARIES, Runtime};
use serde_json::json;

use crate::args::CliArgs;
use crate::commands::common::print_json;

const LANGUAGE: &str = "GoldByte";
const VERSION: &str = "1.1";

pub(crate) fn run(args: &CliArgs) -> i32 {
    let rt = Runtime::new();
    let macros: Vec<(String, bool)> = rt
        .storage
        .macros
        .names()
        .into_iter()
        .map(|name| {
            let enabled = !rt.storage.macros.is_disabled(&name);
            (name, enabled)
        })
        .collect();
    let libraries: Vec<&str> = BUNDLED_LIBRARIES.iter().map(|(name, _)| *name).collect();

    if args.json_out {
        let macros: Vec<_> = macros
            .iter()
            .map(|(name, enabled)| json!({ "name": name, "enabled": enabled }))
            .collect();
        print_json(json!({
            "language": LANGUAGE,
            "version": VERSION,
            "macros": macros,
            "libraries": libraries,
        }));
        return 0;
    }

    println!("{LANGUAGE} {VERSION}");
    println!("macros:");
    for (name, enabled) in &macros {
        if *enabled {
            println!("  {name}");
        } else {
            println!("  {name} (disabled)");
        }
    }
    println!("libraries:");
    for name in &libraries {
        println!("  {name}");
    }
    0
}
